//! Adapters from Telegram (teloxide) types to cmdbot_core types.

use cmdbot_core::{Chat, ChatKind, InboundMessage, Sender, ToInboundMessage};

/// Wraps a teloxide User for conversion to core [`Sender`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_sender(&self) -> Sender {
        let full_name = self.0.full_name();
        let display_name = if full_name.trim().is_empty() {
            self.0.username.clone()
        } else {
            Some(full_name)
        };
        Sender {
            id: self.0.id.0.to_string(),
            display_name,
        }
    }
}

/// Private chats are one-to-one; groups, supergroups and channels are all treated as group chats.
pub fn chat_kind(chat: &teloxide::types::Chat) -> ChatKind {
    if chat.is_private() {
        ChatKind::Private
    } else {
        ChatKind::Group
    }
}

/// Wraps a teloxide Message for conversion to core [`InboundMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundMessage for TelegramMessageWrapper<'a> {
    fn to_inbound(&self) -> InboundMessage {
        let msg = self.0;
        let sender = msg
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_sender())
            .unwrap_or_else(|| Sender {
                // Anonymous admins and channel posts carry no user; the chat stands in.
                id: msg.chat.id.0.to_string(),
                display_name: msg.chat.title().map(str::to_string),
            });
        InboundMessage {
            id: msg.id.to_string(),
            sender,
            chat: Chat {
                id: msg.chat.id.0.to_string(),
                kind: chat_kind(&msg.chat),
                title: msg.chat.title().map(str::to_string),
            },
            body: msg.text().or_else(|| msg.caption()).unwrap_or("").to_string(),
            received_at: chrono::Utc::now(),
        }
    }
}
