//! # cmdbot-core
//!
//! Core types and traits for the command bot: [`Bot`], [`Handler`], inbound and outbound message types,
//! and tracing initialization. Transport-agnostic; used by command-router and cmdbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_chat_id, Bot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatKind, Handler, HandlerResponse, InboundMessage, Media, OutboundMessage, Sender,
    ToInboundMessage,
};
