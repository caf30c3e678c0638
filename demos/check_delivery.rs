use std::io;

use smsified::{Config, OutcomeKind, SmsifiedClient};

/// Fetch delivery information for a previously accepted outbound request.
///
/// `SMSIFIED_REQUEST_ID` is the trailing id of the resource URL returned when
/// the message was accepted.
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
    let request_id = std::env::var("SMSIFIED_REQUEST_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIFIED_REQUEST_ID environment variable is required",
        )
    })?;

    let client = SmsifiedClient::new(Config::new(username, password, sender.clone())?);

    client.on(OutcomeKind::Success, |outcome| {
        if let Some(reply) = outcome.reply() {
            println!("{}", reply.body);
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

    let path = format!("/smsmessaging/outbound/{sender}/requests/{request_id}/deliveryInfos");
    client.get(&path).await;

    Ok(())
}
