use once_cell::sync::Lazy;
use regex::Regex;

static NON_TERM_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid term regex"));

/// Lowercase, blank out everything outside `[a-z0-9]` and whitespace, split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_TERM_CHARS
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
