//! Reply texts.

use chrono::NaiveDateTime;

pub const HELP_HEADER: &str = "*Bot Commands:*";
pub const ONBOARDING_HINT: &str =
    "👋 Hi! Type *help* to see my commands.\nTry: \"ai what is the meaning of life?\"";
pub const PONG: &str = "pong!";

pub const IMAGE_CAPTION: &str = "Here is a cute kitten! 🐱";
pub const DOCUMENT_CAPTION: &str = "Here is your PDF document.";

pub const JOKE_FALLBACK: &str = "Could not fetch a joke right now.";
pub const FACT_FALLBACK: &str = "Could not fetch a fact.";
pub const IMAGE_FALLBACK: &str = "Could not fetch image.";
pub const AUDIO_FALLBACK: &str = "Could not fetch audio.";
pub const DOCUMENT_FALLBACK: &str = "Could not fetch document.";
pub const GROUP_INFO_FALLBACK: &str = "Could not fetch group info.";
pub const AI_ERROR_PREFIX: &str = "❌ AI error: ";

pub fn greeting(name: &str) -> String {
    format!("Hi {}! 👋", name)
}

pub fn current_time(now: NaiveDateTime) -> String {
    format!("🕒 Current time: {}", format_long_time(now))
}

/// Long human-readable form, e.g. `Thursday, September 4, 1986 8:30 PM`.
pub fn format_long_time(t: NaiveDateTime) -> String {
    t.format("%A, %B %-d, %Y %-I:%M %p").to_string()
}

pub fn joke(text: &str) -> String {
    format!("🤣 {}", text)
}

pub fn fact(text: &str) -> String {
    format!("🤓 Fact: {}", text)
}

pub fn group_info(name: &str, participants: u32, id: &str) -> String {
    format!(
        "*Group:* {}\n*Participants:* {}\n*ID:* {}",
        name, participants, id
    )
}
