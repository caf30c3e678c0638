//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Config, OutboundMessage, SendOptions};
pub use response::{Outcome, OutcomeKind, Reply, TransportFailure};
pub use validation::ValidationError;
pub use value::{
    CorrelationId, Destination, MessageText, NotifyUrl, Password, PhoneNumber, SenderId, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty { field: "username" })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty { field: "password" })
        ));
    }

    #[test]
    fn password_preserves_whitespace() {
        let password = Password::new(" s3cret ").unwrap();
        assert_eq!(password.as_str(), " s3cret ");
    }

    #[test]
    fn destination_trims_and_rejects_empty() {
        let number = Destination::new(" +15551234567 ").unwrap();
        assert_eq!(number.raw(), "+15551234567");
        assert!(matches!(
            Destination::new("  "),
            Err(ValidationError::Empty {
                field: Destination::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::US), " 2025551234 ").unwrap();
        assert_eq!(pn.raw(), "2025551234");
    }

    #[test]
    fn destination_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::US), "2025551234").unwrap();
        let number: Destination = pn.into();
        assert_eq!(number.raw(), "+12025551234");
    }

    #[test]
    fn notify_url_requires_an_absolute_url() {
        assert!(NotifyUrl::new("https://example.com/receipts").is_ok());
        assert!(matches!(
            NotifyUrl::new("not a url"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn config_validates_every_field() {
        assert!(Config::new("user", "pass", "tel:+15550001111").is_ok());
        assert!(Config::new("", "pass", "sender").is_err());
        assert!(Config::new("user", "", "sender").is_err());
        assert!(Config::new("user", "pass", " ").is_err());
    }

    #[test]
    fn outbound_message_carries_options() {
        let msg = OutboundMessage::with_options(
            Destination::new("+15551234567").unwrap(),
            MessageText::new("hi").unwrap(),
            SendOptions {
                correlation_id: Some(CorrelationId::new("order-42").unwrap()),
                ..Default::default()
            },
        );
        assert_eq!(
            msg.options()
                .correlation_id
                .as_ref()
                .map(CorrelationId::as_str),
            Some("order-42")
        );
    }
}
