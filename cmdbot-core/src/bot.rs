//! Session-provider abstraction for outbound traffic.
//!
//! [`Bot`] is transport-agnostic; `cmdbot-telegram` implements it via teloxide and tests substitute a recorder.

use crate::error::{BotError, Result};
use crate::types::{Chat, OutboundMessage};
use async_trait::async_trait;

/// Outbound primitives the router needs from the session provider.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends text or media (with optional caption / voice-note flag) to the chat.
    async fn send(&self, chat: &Chat, message: &OutboundMessage) -> Result<()>;
    /// Signals a "composing" presence in the chat. Callers treat failure as non-fatal.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
    /// Number of members in a group chat.
    async fn participant_count(&self, chat: &Chat) -> Result<u32>;
}

/// Parses a chat id string into the numeric id used by transports such as Telegram.
pub fn parse_chat_id(s: &str) -> Result<i64> {
    s.trim()
        .parse()
        .map_err(|_| BotError::InvalidId(format!("Invalid chat id: {}", s)))
}
