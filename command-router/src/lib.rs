//! # Command router
//!
//! Decides whether and how to answer each inbound message: allow-list filter, body normalization,
//! best-effort typing indicator, ordered first-match rule evaluation, command execution, and the
//! default onboarding hint. Every failure is contained here; [`CommandRouter`] never returns an error.

mod auth;
mod error;
mod replies;
mod router;
mod rules;

pub use auth::SenderAllowList;
pub use error::CommandError;
pub use replies::{format_long_time, ONBOARDING_HINT, PONG};
pub use router::{
    CommandRouter, CommandRouterBuilder, MediaCatalog, DEFAULT_AUDIO_URL, DEFAULT_DOCUMENT_URL,
    DEFAULT_IMAGE_URL,
};
pub use rules::{Action, CommandMatch, CommandRule, Fallback, RuleScope, RuleSet};
