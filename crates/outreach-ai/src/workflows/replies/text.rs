//! Pre-processing applied to reply bodies before classification.

use regex::Regex;
use std::sync::OnceLock;

static REPLY_HEADER: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn reply_header() -> &'static Regex {
    // Everything from the first "On ... wrote:" header to the end is quoted history.
    REPLY_HEADER.get_or_init(|| Regex::new(r"(?s)On .* wrote:.*").expect("static pattern"))
}

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// Drops quoted lines and reply headers, then collapses whitespace.
pub fn clean_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let unquoted = raw
        .split('\n')
        .filter(|line| !line.trim().starts_with('>'))
        .collect::<Vec<_>>()
        .join("\n");
    let without_header = reply_header().replace(&unquoted, "");

    whitespace()
        .replace_all(&without_header, " ")
        .trim()
        .to_string()
}

/// Language tag for a cleaned reply. Only English is recognised for now.
pub fn detect_language(_text: &str) -> String {
    "en".to_string()
}
