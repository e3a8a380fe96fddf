//! Wraps teloxide::Bot and implements [`cmdbot_core::Bot`].

use async_trait::async_trait;
use cmdbot_core::{parse_chat_id, Bot as CoreBot, BotError, Chat, Media, OutboundMessage, Result};
use teloxide::{
    payloads::{
        SendAudioSetters, SendDocumentSetters, SendMessageSetters, SendPhotoSetters,
        SendVoiceSetters,
    },
    prelude::*,
    types::{ChatAction, ChatId, InputFile, ParseMode},
    RequestError,
};
use tracing::{debug, warn};

use crate::markup::to_telegram_html;

fn transport(e: RequestError) -> BotError {
    BotError::Transport(e.to_string())
}

/// Telegram method used to deliver a media payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaMethod {
    Voice,
    Photo,
    Audio,
    Document,
}

/// The voice flag wins; otherwise images go as photos, other audio as audio, the rest as documents.
pub fn media_method(media: &Media, as_voice: bool) -> MediaMethod {
    if as_voice {
        MediaMethod::Voice
    } else if media.is_image() {
        MediaMethod::Photo
    } else if media.is_audio() {
        MediaMethod::Audio
    } else {
        MediaMethod::Document
    }
}

/// Thin wrapper around teloxide::Bot that implements cmdbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Sends `*bold*` markup as HTML. When Telegram rejects the entities, resends the raw text.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        let html = self
            .bot
            .send_message(chat_id, to_telegram_html(text))
            .parse_mode(ParseMode::Html)
            .await;
        match html {
            Ok(_) => Ok(()),
            Err(RequestError::Api(e)) => {
                warn!(chat_id = chat_id.0, error = %e, "HTML send rejected, retrying as plain text");
                self.bot
                    .send_message(chat_id, text.to_string())
                    .await
                    .map_err(transport)?;
                Ok(())
            }
            Err(e) => Err(transport(e)),
        }
    }

    async fn send_media(
        &self,
        chat_id: ChatId,
        media: &Media,
        caption: Option<String>,
        as_voice: bool,
    ) -> Result<()> {
        let input = InputFile::memory(media.bytes.clone()).file_name(media.file_name.clone());
        let method = media_method(media, as_voice);
        debug!(
            chat_id = chat_id.0,
            mime_type = %media.mime_type,
            bytes = media.bytes.len(),
            method = ?method,
            "sending media"
        );

        match method {
            MediaMethod::Voice => {
                let mut req = self.bot.send_voice(chat_id, input);
                if let Some(caption) = caption {
                    req = req.caption(caption);
                }
                req.await.map_err(transport)?;
            }
            MediaMethod::Photo => {
                let mut req = self.bot.send_photo(chat_id, input);
                if let Some(caption) = caption {
                    req = req.caption(caption);
                }
                req.await.map_err(transport)?;
            }
            MediaMethod::Audio => {
                let mut req = self.bot.send_audio(chat_id, input);
                if let Some(caption) = caption {
                    req = req.caption(caption);
                }
                req.await.map_err(transport)?;
            }
            MediaMethod::Document => {
                let mut req = self.bot.send_document(chat_id, input);
                if let Some(caption) = caption {
                    req = req.caption(caption);
                }
                req.await.map_err(transport)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, chat: &Chat, message: &OutboundMessage) -> Result<()> {
        let chat_id = ChatId(parse_chat_id(&chat.id)?);
        match message {
            OutboundMessage::Text(text) => self.send_text(chat_id, text).await,
            OutboundMessage::Media {
                media,
                caption,
                as_voice,
            } => {
                self.send_media(chat_id, media, caption.clone(), *as_voice)
                    .await
            }
        }
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        let chat_id = ChatId(parse_chat_id(&chat.id)?);
        self.bot
            .send_chat_action(chat_id, ChatAction::Typing)
            .await
            .map_err(transport)?;
        Ok(())
    }

    async fn participant_count(&self, chat: &Chat) -> Result<u32> {
        let chat_id = ChatId(parse_chat_id(&chat.id)?);
        self.bot
            .get_chat_member_count(chat_id)
            .await
            .map_err(transport)
    }
}
