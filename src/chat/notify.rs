//! Background listener for incoming messages.

use std::io::{self, Write};

use grammers_client::{Client, Update};
use log::debug;

use crate::lang::Lang;

/// Consumes the update stream and prints a banner for every incoming message,
/// whether or not it belongs to the selected chat.
///
/// Runs as its own task until the update stream fails or the task is aborted.
/// It shares stdout with the REPL, so after each banner it reprints the
/// prompt (identical in both languages) and flushes, leaving the user's input
/// line usable. It never touches session state.
pub async fn notification_loop(client: Client) {
    loop {
        match client.next_update().await {
            Ok(Update::NewMessage(message)) if !message.outgoing() => {
                let sender = message
                    .sender()
                    .map(|chat| chat.name().to_string())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "Unknown".to_string());
                print!(
                    "\n\n---\nNew from {}: {}\n---\n{}",
                    sender,
                    message.text(),
                    Lang::default().messages().prompt
                );
                let _ = io::stdout().flush();
            }
            Ok(_) => {}
            Err(err) => {
                debug!("update stream ended: {err}");
                break;
            }
        }
    }
}
