//! Converts the router's chat markup (`*bold*`) to Telegram HTML.

use std::sync::OnceLock;

use regex::Regex;

static BOLD: OnceLock<Option<Regex>> = OnceLock::new();

fn bold_pattern() -> Option<&'static Regex> {
    BOLD.get_or_init(|| Regex::new(r"\*([^*\n]+)\*").ok()).as_ref()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes `&`, `<`, `>` and turns each `*span*` on a single line into `<b>span</b>`.
/// Unpaired asterisks stay literal.
pub fn to_telegram_html(text: &str) -> String {
    let escaped = escape_html(text);
    match bold_pattern() {
        Some(bold) => bold.replace_all(&escaped, "<b>$1</b>").into_owned(),
        None => escaped,
    }
}
