use std::io;

use goyya::{Message, MessageType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let account_id = std::env::var("GOYYA_ACCOUNT_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOYYA_ACCOUNT_ID environment variable is required",
        )
    })?;
    let password = std::env::var("GOYYA_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOYYA_PASSWORD environment variable is required",
        )
    })?;
    let receiver = std::env::var("GOYYA_RECEIVER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOYYA_RECEIVER environment variable is required",
        )
    })?;
    let text = std::env::var("GOYYA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the goyya example.".to_owned());

    let mut message = Message::new();
    message
        .set_account_id(account_id)
        .set_account_password(password)
        .set_message_type(MessageType::Overlong)
        // Simulated by the gateway; nothing is delivered.
        .set_debug_mode(true)
        .set_receiver(receiver)?
        .set_sender("goyya")?
        .set_message(text)?;

    let submission = message.submit()?;
    println!(
        "message_id: {}, message_count: {}",
        submission.message_id, submission.message_count
    );

    Ok(())
}
