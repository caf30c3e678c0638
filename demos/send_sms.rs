use std::io;

use smsified::{
    Config, Destination, MessageText, OutboundMessage, OutcomeKind, SmsifiedClient,
    decode_resource_reference,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("SMSIFIED_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIFIED_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("SMSIFIED_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIFIED_PASSWORD environment variable is required",
        )
    })?;
    let sender = std::env::var("SMSIFIED_SENDER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIFIED_SENDER environment variable is required",
        )
    })?;
    let number = std::env::var("SMSIFIED_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIFIED_NUMBER environment variable is required",
        )
    })?;
    let message = std::env::var("SMSIFIED_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsified example.".to_owned());

    let client = SmsifiedClient::new(Config::new(username, password, sender)?);

    client.on(OutcomeKind::Success, |outcome| {
        let Some(reply) = outcome.reply() else { return };
        match decode_resource_reference(&reply.body) {
            Ok(reference) => println!("accepted, poll: {}", reference.resource_url),
            Err(_) => println!("accepted (status {})", reply.status),
        }
    });
    client.on(OutcomeKind::Problem, |outcome| {
        println!("request problem: {:?}", outcome.reply());
    });
    client.on(OutcomeKind::AuthError, |_| {
        println!("authentication failed; check username/password");
    });
    client.on(OutcomeKind::Error, |outcome| {
        println!("server error: {:?}", outcome.reply());
    });
    client.on(OutcomeKind::Transport, |outcome| {
        println!("network failure: {outcome:?}");
    });

    let outbound = OutboundMessage::new(Destination::new(number)?, MessageText::new(message)?);
    client.send(&outbound).await;

    Ok(())
}
