//! Test doubles for router integration tests: a recording [`Bot`], stub content service and stub LLM.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use cmdbot_core::{Bot, BotError, Chat, InboundMessage, Media, OutboundMessage, Sender};
use command_router::CommandRouter;
use llm_client::LlmClient;
use web_content::{ContentError, ContentService};

pub const OWNER_ID: &str = "100";

/// Records every send and typing signal. Sends and typing can be forced to fail.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<(Chat, OutboundMessage)>>,
    pub typing: AtomicUsize,
    pub fail_send: bool,
    pub fail_typing: bool,
    /// `None` makes `participant_count` fail.
    pub participants: Option<u32>,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self {
            participants: Some(3),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<(Chat, OutboundMessage)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|(_, msg)| match msg {
                OutboundMessage::Text(text) => Some(text),
                OutboundMessage::Media { .. } => None,
            })
            .collect()
    }

    pub fn typing_count(&self) -> usize {
        self.typing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send(&self, chat: &Chat, message: &OutboundMessage) -> cmdbot_core::Result<()> {
        if self.fail_send {
            return Err(BotError::Transport("send rejected".to_string()));
        }
        self.sent.lock().unwrap().push((chat.clone(), message.clone()));
        Ok(())
    }

    async fn send_typing(&self, _chat: &Chat) -> cmdbot_core::Result<()> {
        self.typing.fetch_add(1, Ordering::SeqCst);
        if self.fail_typing {
            return Err(BotError::Transport("typing rejected".to_string()));
        }
        Ok(())
    }

    async fn participant_count(&self, _chat: &Chat) -> cmdbot_core::Result<u32> {
        self.participants
            .ok_or_else(|| BotError::Transport("chat not found".to_string()))
    }
}

/// Content service with canned answers; `None` fields fail.
#[derive(Default)]
pub struct StubContent {
    pub joke: Option<String>,
    pub fact: Option<String>,
    pub media: Option<Media>,
    pub media_requests: Mutex<Vec<String>>,
}

impl StubContent {
    pub fn working() -> Self {
        Self {
            joke: Some("I told a chemistry joke, no reaction.".to_string()),
            fact: Some("Bananas are berries.".to_string()),
            media: Some(sample_media()),
            media_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

pub fn sample_media() -> Media {
    Media {
        bytes: vec![1, 2, 3, 4],
        mime_type: "image/jpeg".to_string(),
        file_name: "400".to_string(),
    }
}

#[async_trait]
impl ContentService for StubContent {
    async fn joke(&self) -> web_content::Result<String> {
        self.joke
            .clone()
            .ok_or_else(|| ContentError::Malformed("no joke".to_string()))
    }

    async fn fact(&self) -> web_content::Result<String> {
        self.fact.clone().ok_or(ContentError::Status {
            status: 500,
            url: "http://facts.test".to_string(),
        })
    }

    async fn fetch_media(&self, url: &str) -> web_content::Result<Media> {
        self.media_requests.lock().unwrap().push(url.to_string());
        self.media
            .clone()
            .ok_or_else(|| ContentError::Empty(url.to_string()))
    }
}

/// LLM stub recording questions; `answer: None` fails with "invalid api key".
pub struct StubLlm {
    pub answer: Option<String>,
    pub questions: Mutex<Vec<String>>,
}

impl StubLlm {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            questions: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn complete(&self, question: &str) -> anyhow::Result<String> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer
            .clone()
            .ok_or_else(|| anyhow::anyhow!("invalid api key"))
    }
}

pub fn router(bot: Arc<RecordingBot>, content: Arc<StubContent>) -> CommandRouter {
    CommandRouter::builder(bot, OWNER_ID, content).build().unwrap()
}

pub fn router_with_llm(
    bot: Arc<RecordingBot>,
    content: Arc<StubContent>,
    llm: Arc<StubLlm>,
) -> CommandRouter {
    CommandRouter::builder(bot, OWNER_ID, content)
        .llm(Some(llm as Arc<dyn LlmClient>))
        .build()
        .unwrap()
}

pub fn message(sender_id: &str, chat: Chat, body: &str) -> InboundMessage {
    InboundMessage {
        id: "1".to_string(),
        sender: Sender {
            id: sender_id.to_string(),
            display_name: Some("Ada".to_string()),
        },
        chat,
        body: body.to_string(),
        received_at: Utc::now(),
    }
}

pub fn dm(body: &str) -> InboundMessage {
    message(OWNER_ID, Chat::private(OWNER_ID), body)
}

pub fn group(body: &str) -> InboundMessage {
    message(OWNER_ID, Chat::group("-1001", "Rustaceans"), body)
}
