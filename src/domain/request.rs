use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CorrelationId, Destination, MessageText, NotifyUrl, Password, SenderId, Username,
};

#[derive(Debug, Clone)]
/// Immutable client configuration: basic-auth credentials plus the sender id
/// used in outbound send paths.
///
/// Constructing a [`Config`] performs no I/O; invalid values are rejected up
/// front by the field constructors.
pub struct Config {
    username: Username,
    password: Password,
    sender: SenderId,
}

impl Config {
    /// Create a validated [`Config`] from raw credential strings.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        sender: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
            sender: SenderId::new(sender)?,
        })
    }

    /// Build a [`Config`] from already-validated parts.
    pub fn from_parts(username: Username, password: Password, sender: SenderId) -> Self {
        Self {
            username,
            password,
            sender,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }
}

#[derive(Debug, Clone, Default)]
/// Optional vendor parameters accepted by the outbound send endpoint.
pub struct SendOptions {
    /// Delivery-receipt callback URL (`notifyURL`).
    pub notify_url: Option<NotifyUrl>,
    /// Caller-supplied id echoed back in delivery receipts (`correlationId`).
    pub correlation_id: Option<CorrelationId>,
}

#[derive(Debug, Clone)]
/// One outbound SMS, serialized as the query string of the send request.
pub struct OutboundMessage {
    number: Destination,
    message: MessageText,
    options: SendOptions,
}

impl OutboundMessage {
    /// Create an outbound message with default options.
    pub fn new(number: Destination, message: MessageText) -> Self {
        Self {
            number,
            message,
            options: SendOptions::default(),
        }
    }

    /// Create an outbound message with explicit vendor options.
    pub fn with_options(number: Destination, message: MessageText, options: SendOptions) -> Self {
        Self {
            number,
            message,
            options,
        }
    }

    pub fn number(&self) -> &Destination {
        &self.number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
