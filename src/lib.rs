//! Typed, event-driven Rust client for the SMSified REST API.
//!
//! The design is split the same way as the code: a domain layer of strong
//! types, a transport layer for wire-format details, and a small client layer
//! that builds authenticated requests and classifies replies. Each issued
//! request produces exactly one [`Outcome`] notification, delivered to
//! subscribers registered by kind; the verb methods themselves return
//! nothing.
//!
//! ```rust,no_run
//! use smsified::{Config, Destination, MessageText, OutboundMessage, OutcomeKind, SmsifiedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsified::SmsifiedError> {
//!     let client = SmsifiedClient::new(Config::new("user", "pass", "tel:+15550001111")?);
//!     client.on(OutcomeKind::Success, |outcome| {
//!         println!("accepted: {:?}", outcome.reply().map(|r| &r.body));
//!     });
//!
//!     let message = OutboundMessage::new(
//!         Destination::new("+15551234567")?,
//!         MessageText::new("Your clothes are ready for pickup.")?,
//!     );
//!     client.send(&message).await;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod transport;

pub use client::{SmsifiedClient, SmsifiedClientBuilder, SmsifiedError};
pub use domain::{
    Config, CorrelationId, Destination, MessageText, NotifyUrl, OutboundMessage, Outcome,
    OutcomeKind, Password, PhoneNumber, Reply, SendOptions, SenderId, TransportFailure, Username,
    ValidationError,
};
pub use transport::{ResourceReference, TransportError, decode_resource_reference};
