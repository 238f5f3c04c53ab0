//! crates/sitio_core/src/chat.rs
//!
//! The single shared chat channel used by both the public and the admin chat pages.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Message, NewMessage};
use crate::ports::{MessageRepository, PortError, PortResult};

/// Longest sender label the messages table was designed for.
pub const MAX_SENDER_LEN: usize = 50;

#[derive(Clone)]
pub struct ChatRoom {
    messages: Arc<dyn MessageRepository>,
}

impl ChatRoom {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// All messages, oldest first.
    pub async fn list(&self) -> PortResult<Vec<Message>> {
        self.messages.list_messages().await
    }

    /// Appends a message to the channel.
    ///
    /// Fails with `PortError::Invalid` when the sender or body is absent or empty,
    /// or the sender is too long; nothing is stored in that case.
    pub async fn send(&self, sender: Option<&str>, body: Option<&str>) -> PortResult<Message> {
        let (sender, body) = match (sender, body) {
            (Some(s), Some(b)) if !s.is_empty() && !b.is_empty() => (s, b),
            _ => return Err(PortError::Invalid("sender and body are required".to_string())),
        };
        if sender.chars().count() > MAX_SENDER_LEN {
            return Err(PortError::Invalid(format!(
                "sender is longer than {} characters",
                MAX_SENDER_LEN
            )));
        }

        let message = self
            .messages
            .create_message(NewMessage {
                sender: sender.to_string(),
                body: body.to_string(),
            })
            .await?;
        info!(message_id = message.id, sender = %message.sender, "Chat message stored");
        Ok(message)
    }
}
