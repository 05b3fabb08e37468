/// Title and status normalizers
///
/// Pure functions shared by the interpreter and the bulk tools.

use super::aliases::{is_quote, lookup_status_alias, FILLER_PHRASE_RE, POSSESSIVE_RE};
use crate::catalog::WatchStatus;

/// Strip every quote character, trim, collapse internal whitespace
///
/// Idempotent: `normalize_title(&normalize_title(s)) == normalize_title(s)`.
pub fn normalize_title(raw: &str) -> String {
    raw.chars()
        .filter(|c| !is_quote(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strict status resolution
///
/// Accepts the canonical codes and every alias, any casing. Returns `None`
/// for anything else instead of guessing.
pub fn resolve_status(raw: &str) -> Option<WatchStatus> {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    key.parse::<WatchStatus>()
        .ok()
        .or_else(|| lookup_status_alias(&key))
}

/// Lenient status resolution: blank or unknown input means wanted
pub fn normalize_status(raw: &str) -> WatchStatus {
    resolve_status(raw).unwrap_or(WatchStatus::Wanted)
}

/// Remove list filler ("my list", "ma liste", bare possessives) from an
/// unquoted title fragment, then normalize what is left
pub fn strip_filler(fragment: &str) -> String {
    let without_phrases = FILLER_PHRASE_RE.replace_all(fragment, " ");
    let without_words = POSSESSIVE_RE.replace_all(&without_phrases, " ");
    normalize_title(&without_words)
}

/// Split a comma or newline separated list into normalized, non-blank titles
pub fn split_title_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(normalize_title)
        .filter(|t| !t.is_empty())
        .collect()
}
