//! [`CommandRouter`]: the per-message handler. Stateless across messages; all fields are immutable handles.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use cmdbot_core::{Bot, Handler, HandlerResponse, InboundMessage, OutboundMessage};
use llm_client::LlmClient;
use tracing::{debug, error, info, instrument, warn};
use web_content::ContentService;

use crate::auth::SenderAllowList;
use crate::error::CommandError;
use crate::replies;
use crate::rules::{Action, RuleSet};

pub const DEFAULT_IMAGE_URL: &str = "https://placekitten.com/400/400";
pub const DEFAULT_AUDIO_URL: &str = "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3";
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";

/// Fixed resources sent by `img`, `audio` and `doc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCatalog {
    pub image_url: String,
    pub audio_url: String,
    pub document_url: String,
}

impl Default for MediaCatalog {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_IMAGE_URL.to_string(),
            audio_url: DEFAULT_AUDIO_URL.to_string(),
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
        }
    }
}

pub struct CommandRouter {
    bot: Arc<dyn Bot>,
    allow_list: SenderAllowList,
    rules: RuleSet,
    content: Arc<dyn ContentService>,
    llm: Option<Arc<dyn LlmClient>>,
    media: MediaCatalog,
}

/// Builds a [`CommandRouter`]. The AI rule is included exactly when an LLM client is supplied.
pub struct CommandRouterBuilder {
    bot: Arc<dyn Bot>,
    allow_list: SenderAllowList,
    content: Arc<dyn ContentService>,
    llm: Option<Arc<dyn LlmClient>>,
    media: MediaCatalog,
}

impl CommandRouterBuilder {
    pub fn llm(mut self, llm: Option<Arc<dyn LlmClient>>) -> Self {
        self.llm = llm;
        self
    }

    pub fn media(mut self, media: MediaCatalog) -> Self {
        self.media = media;
        self
    }

    pub fn build(self) -> Result<CommandRouter, regex::Error> {
        let rules = RuleSet::standard(self.llm.is_some())?;
        Ok(CommandRouter {
            bot: self.bot,
            allow_list: self.allow_list,
            rules,
            content: self.content,
            llm: self.llm,
            media: self.media,
        })
    }
}

impl CommandRouter {
    pub fn builder(
        bot: Arc<dyn Bot>,
        allowed_sender: impl Into<String>,
        content: Arc<dyn ContentService>,
    ) -> CommandRouterBuilder {
        CommandRouterBuilder {
            bot,
            allow_list: SenderAllowList::new(allowed_sender),
            content,
            llm: None,
            media: MediaCatalog::default(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn ai_enabled(&self) -> bool {
        self.llm.is_some()
    }

    /// Runs everything after the allow-list check. Returns the name of the rule that replied,
    /// or `None` when the default branch stays silent in a group.
    async fn respond(&self, message: &InboundMessage) -> Result<Option<&'static str>, CommandError> {
        let body = message.body.trim();

        if let Err(e) = self.bot.send_typing(&message.chat).await {
            warn!(error = %e, "typing indicator failed");
        }

        let Some(matched) = self.rules.find(body, &message.chat) else {
            if message.is_group_chat() {
                debug!("no rule matched in group chat, staying silent");
                return Ok(None);
            }
            self.bot
                .send(&message.chat, &OutboundMessage::text(replies::ONBOARDING_HINT))
                .await?;
            info!(rule = "default", "onboarding hint sent");
            return Ok(Some("default"));
        };

        let rule = matched.rule;
        let name = rule.action.name();
        let reply = match self
            .execute(rule.action, matched.argument.as_deref(), message)
            .await
        {
            Ok(reply) => reply,
            Err(e) => match &rule.fallback {
                Some(fallback) => {
                    warn!(rule = name, error = %e, "command failed, sending fallback");
                    OutboundMessage::text(fallback.render(&e))
                }
                None => return Err(e),
            },
        };

        self.bot.send(&message.chat, &reply).await?;
        info!(rule = name, "reply sent");
        Ok(Some(name))
    }

    async fn execute(
        &self,
        action: Action,
        argument: Option<&str>,
        message: &InboundMessage,
    ) -> Result<OutboundMessage, CommandError> {
        let reply = match action {
            Action::Greet => OutboundMessage::text(replies::greeting(message.sender.greeting_name())),
            Action::Help => OutboundMessage::text(self.rules.help_text()),
            Action::Time => OutboundMessage::text(replies::current_time(Local::now().naive_local())),
            Action::Joke => OutboundMessage::text(replies::joke(&self.content.joke().await?)),
            Action::Ask => {
                let llm = self.llm.as_ref().ok_or(CommandError::AiUnavailable)?;
                let question = argument.unwrap_or_default();
                let answer = llm
                    .complete(question)
                    .await
                    .map_err(|e| CommandError::Ai(e.to_string()))?;
                OutboundMessage::text(answer)
            }
            Action::Image => OutboundMessage::Media {
                media: self.content.fetch_media(&self.media.image_url).await?,
                caption: Some(replies::IMAGE_CAPTION.to_string()),
                as_voice: false,
            },
            Action::Audio => OutboundMessage::Media {
                media: self.content.fetch_media(&self.media.audio_url).await?,
                caption: None,
                as_voice: true,
            },
            Action::Document => OutboundMessage::Media {
                media: self.content.fetch_media(&self.media.document_url).await?,
                caption: Some(replies::DOCUMENT_CAPTION.to_string()),
                as_voice: false,
            },
            Action::GroupInfo => {
                let chat = &message.chat;
                let participants = self.bot.participant_count(chat).await?;
                let name = chat.title.as_deref().unwrap_or("Unnamed group");
                OutboundMessage::text(replies::group_info(name, participants, &chat.id))
            }
            Action::Ping => OutboundMessage::text(replies::PONG),
            Action::Fact => OutboundMessage::text(replies::fact(&self.content.fact().await?)),
        };
        Ok(reply)
    }
}

#[async_trait]
impl Handler for CommandRouter {
    #[instrument(
        skip(self, message),
        fields(sender_id = %message.sender.id, chat_id = %message.chat.id, message_id = %message.id)
    )]
    async fn handle(&self, message: &InboundMessage) -> HandlerResponse {
        if !self.allow_list.permits(&message.sender) {
            debug!("sender not allow-listed, dropping message");
            return HandlerResponse::Dropped;
        }

        info!(body = %message.body.trim(), "processing command");

        match self.respond(message).await {
            Ok(Some(rule)) => HandlerResponse::Replied(rule.to_string()),
            Ok(None) => HandlerResponse::Ignored,
            Err(e) => {
                error!(error = %e, "message handling failed");
                HandlerResponse::Failed
            }
        }
    }
}
