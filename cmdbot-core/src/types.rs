//! Core types: sender, chat, inbound message, outbound payload, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Who sent a message. `id` is the transport address (e.g. Telegram user id as string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: String,
    pub display_name: Option<String>,
}

impl Sender {
    /// Name used in greetings: display name when set and non-blank, otherwise the sender address.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

/// One-to-one conversation or a multi-member chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
}

/// Chat the message arrived in; replies go back here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: String,
    pub kind: ChatKind,
    /// Group title; `None` for private chats.
    pub title: Option<String>,
}

impl Chat {
    pub fn private(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ChatKind::Private,
            title: None,
        }
    }

    pub fn group(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ChatKind::Group,
            title: Some(title.into()),
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == ChatKind::Group
    }
}

/// A single inbound message. Created per event and dropped after handling.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: String,
    pub sender: Sender,
    pub chat: Chat,
    /// Raw text as delivered (untrimmed). Empty for messages without text.
    pub body: String,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    pub fn is_group_chat(&self) -> bool {
        self.chat.is_group()
    }
}

/// Binary payload fetched for a media reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

impl Media {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }
}

/// What the bot sends back: plain text, or media with optional caption and voice-note flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    Text(String),
    Media {
        media: Media,
        caption: Option<String>,
        as_voice: bool,
    },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Text body for logging and assertions; caption for media, `None` when media has no caption.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Media { caption, .. } => caption.as_deref(),
        }
    }
}

/// Outcome of handling one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Sender is not allow-listed; nothing was sent.
    Dropped,
    /// One reply was sent. Carries the name of the rule that produced it (`default` for the hint).
    Replied(String),
    /// Accepted, but no rule matched in a group chat, so no reply.
    Ignored,
    /// Handling failed after acceptance; the error was logged and suppressed.
    Failed,
}

/// Converts a transport-specific message type to core [`InboundMessage`].
pub trait ToInboundMessage: Send + Sync {
    fn to_inbound(&self) -> InboundMessage;
}

/// Per-message entry point invoked by the session runner. Must not fail: implementations log and suppress.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &InboundMessage) -> HandlerResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_name_prefers_display_name() {
        let sender = Sender {
            id: "42".to_string(),
            display_name: Some("Ada".to_string()),
        };
        assert_eq!(sender.greeting_name(), "Ada");
    }

    #[test]
    fn test_greeting_name_falls_back_to_address() {
        let blank = Sender {
            id: "42".to_string(),
            display_name: Some("  ".to_string()),
        };
        assert_eq!(blank.greeting_name(), "42");

        let missing = Sender {
            id: "42".to_string(),
            display_name: None,
        };
        assert_eq!(missing.greeting_name(), "42");
    }

    #[test]
    fn test_chat_constructors() {
        assert!(!Chat::private("1").is_group());
        let group = Chat::group("-100", "Team");
        assert!(group.is_group());
        assert_eq!(group.title.as_deref(), Some("Team"));
    }

    #[test]
    fn test_outbound_text_content() {
        assert_eq!(OutboundMessage::text("pong!").text_content(), Some("pong!"));
        let media = OutboundMessage::Media {
            media: Media {
                bytes: vec![1, 2, 3],
                mime_type: "audio/mpeg".to_string(),
                file_name: "song.mp3".to_string(),
            },
            caption: None,
            as_voice: true,
        };
        assert_eq!(media.text_content(), None);
    }
}
