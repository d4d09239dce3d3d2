use regex::Regex;
use std::sync::OnceLock;

static WINNER_RE: OnceLock<Regex> = OnceLock::new();

fn winner_re() -> &'static Regex {
    // The name must stay on the label's own line, so the separator and the
    // capture both exclude newlines.
    WINNER_RE.get_or_init(|| Regex::new(r"Winner:[^\S\n]*([^\n]+)").unwrap())
}

/// Pulls the declared winner out of resolver stdout. The first line carrying
/// the `Winner:` label wins; the name is the rest of that line, trimmed. A
/// label with nothing after it counts as no winner.
pub fn extract_winner(stdout: &str) -> Option<String> {
    winner_re()
        .captures(stdout)
        .map(|caps| caps[1].trim().to_string())
        .filter(|winner| !winner.is_empty())
}
