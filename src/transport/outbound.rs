use serde::Deserialize;
use url::form_urlencoded;

use crate::domain::{CorrelationId, Destination, MessageText, NotifyUrl, OutboundMessage};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Location of an accepted outbound request, as returned by the vendor.
///
/// Poll `resource_url` (a `/v1/smsmessaging/outbound/.../requests/{id}` URL)
/// with a `get` to retrieve delivery status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub resource_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ResourceReferenceJsonResponse {
    #[serde(rename = "resourceReference")]
    resource_reference: ResourceReferenceJson,
}

#[derive(Debug, Clone, Deserialize)]
struct ResourceReferenceJson {
    #[serde(rename = "resourceURL")]
    resource_url: String,
}

/// Serialize an outbound message as the query string of the send request.
///
/// The vendor expects message parameters as query parameters on a POST, so
/// ordering matters only for readability: `number` and `message` first, then
/// any optional vendor parameters.
pub fn encode_outbound_query(message: &OutboundMessage) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair(Destination::FIELD, message.number().raw());
    query.append_pair(MessageText::FIELD, message.message().as_str());

    let options = message.options();
    if let Some(notify_url) = options.notify_url.as_ref() {
        query.append_pair(NotifyUrl::FIELD, notify_url.as_str());
    }
    if let Some(correlation_id) = options.correlation_id.as_ref() {
        query.append_pair(CorrelationId::FIELD, correlation_id.as_str());
    }

    query.finish()
}

/// Decode the JSON body the vendor returns for an accepted send (201).
pub fn decode_resource_reference(json: &str) -> Result<ResourceReference, TransportError> {
    let parsed: ResourceReferenceJsonResponse = serde_json::from_str(json)?;
    Ok(ResourceReference {
        resource_url: parsed.resource_reference.resource_url,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::SendOptions;

    use super::*;

    fn message(number: &str, text: &str) -> OutboundMessage {
        OutboundMessage::new(
            Destination::new(number).unwrap(),
            MessageText::new(text).unwrap(),
        )
    }

    #[test]
    fn encode_percent_encodes_the_plus_prefix() {
        let query = encode_outbound_query(&message("+15551234567", "hi"));
        assert_eq!(query, "number=%2B15551234567&message=hi");
    }

    #[test]
    fn encode_uses_plus_for_spaces_in_the_body() {
        let query = encode_outbound_query(&message("15551234567", "pick up your order"));
        assert_eq!(query, "number=15551234567&message=pick+up+your+order");
    }

    #[test]
    fn encode_appends_optional_vendor_parameters() {
        let msg = OutboundMessage::with_options(
            Destination::new("+15551234567").unwrap(),
            MessageText::new("hi").unwrap(),
            SendOptions {
                notify_url: Some(NotifyUrl::new("https://example.com/receipts").unwrap()),
                correlation_id: Some(CorrelationId::new("order-42").unwrap()),
            },
        );
        let query = encode_outbound_query(&msg);
        assert_eq!(
            query,
            "number=%2B15551234567&message=hi\
             &notifyURL=https%3A%2F%2Fexample.com%2Freceipts\
             &correlationId=order-42"
        );
    }

    #[test]
    fn decode_resource_reference_reads_the_vendor_shape() {
        let json = r#"
        {
          "resourceReference": {
            "resourceURL": "https://api.smsified.com/v1/smsmessaging/outbound/tel%3A%2B15550001111/requests/abc123"
          }
        }
        "#;
        let reference = decode_resource_reference(json).unwrap();
        assert!(reference.resource_url.ends_with("/requests/abc123"));
    }

    #[test]
    fn decode_resource_reference_rejects_garbage() {
        let err = decode_resource_reference("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
