// Vocabulary for the instruction interpreter
//
// English and French surface forms. Every table is matched case-insensitively
// on whole words; the compiled regexes live next to the tables they come from.

use crate::catalog::WatchStatus;
use regex::Regex;
use std::sync::LazyLock;

/// Characters treated as quotes, ASCII and typographic
pub const QUOTE_CHARS: &[char] = &['"', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{AB}', '\u{BB}'];

pub const ADD_VERBS: &[&str] = &[
    "add", "put", "place", "append", "include", "ajoute", "ajouter", "mets", "mettre", "placer",
];

pub const REMOVE_VERBS: &[&str] = &[
    "remove", "delete", "drop", "erase", "retire", "retirer", "supprime", "supprimer", "enleve",
    "enlève", "enlever",
];

/// Verbs that start a status change ("mark X as seen")
pub const STATUS_VERBS: &[&str] = &["mark", "set", "flag", "marque", "marquer", "mets", "mettre"];

pub const CONJUNCTIONS: &[&str] = &["and", "then", "et", "puis"];

/// Words separating titles from the status in a status change
pub const STATUS_PIVOTS: &[&str] = &["as", "to", "into", "comme", "en", "dans"];

/// Where an add window ends ("add X to my list")
pub const ADD_STOPS: &[&str] = &["to", "into", "onto", "in", "on", "à", "dans", "sur"];

/// Where a remove window ends ("remove X from my list")
pub const REMOVE_STOPS: &[&str] = &["from", "off", "out of", "de", "du", "des"];

pub const STATUS_ALIASES: &[(&str, WatchStatus)] = &[
    ("wanted", WatchStatus::Wanted),
    ("want", WatchStatus::Wanted),
    ("to watch", WatchStatus::Wanted),
    ("to see", WatchStatus::Wanted),
    ("wishlist", WatchStatus::Wanted),
    ("watchlist", WatchStatus::Wanted),
    ("envie", WatchStatus::Wanted),
    ("liste d'envie", WatchStatus::Wanted),
    ("seen", WatchStatus::Seen),
    ("watched", WatchStatus::Seen),
    ("already seen", WatchStatus::Seen),
    ("déjà vu", WatchStatus::Seen),
    ("deja vu", WatchStatus::Seen),
    ("déjà-vu", WatchStatus::Seen),
    ("deja-vu", WatchStatus::Seen),
    ("deja_vu", WatchStatus::Seen),
    ("vu", WatchStatus::Seen),
    ("disliked", WatchStatus::Disliked),
    ("dislike", WatchStatus::Disliked),
    ("not interested", WatchStatus::Disliked),
    ("uninterested", WatchStatus::Disliked),
    ("pas interessé", WatchStatus::Disliked),
    ("pas intéressé", WatchStatus::Disliked),
    ("pas interesse", WatchStatus::Disliked),
    ("pas_interesse", WatchStatus::Disliked),
];

/// Dropped anywhere in an unquoted title. List nouns only go as part of a
/// phrase ("my list"), so "Schindler's List" survives.
const POSSESSIVES: &[&str] = &["my", "your", "our", "ma", "mon", "mes", "ta", "ton"];

const LIST_NOUNS: &[&str] = &["watch list", "wish list", "watchlist", "wishlist", "list", "liste"];

const LIST_ARTICLES: &[&str] = &["the", "this", "la", "le", "les", "cette"];

/// Case-insensitive whole-word alternation. Longer forms go first so
/// "deja vu" wins over "vu" at the same position.
fn word_alternation(words: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

    let body = sorted
        .iter()
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");

    // Built from the constant tables above
    Regex::new(&format!(r"(?i)\b(?:{})\b", body)).expect("alias tables form a valid regex")
}

pub static ADD_VERB_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(ADD_VERBS));

pub static REMOVE_VERB_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(REMOVE_VERBS));

pub static STATUS_VERB_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(STATUS_VERBS));

pub static CONJUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(CONJUNCTIONS));

pub static PIVOT_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(STATUS_PIVOTS));

pub static ADD_STOP_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(ADD_STOPS));

pub static REMOVE_STOP_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(REMOVE_STOPS));

pub static STATUS_ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<&str> = STATUS_ALIASES.iter().map(|(alias, _)| *alias).collect();
    word_alternation(&words)
});

/// Clause delimiters: whole-word conjunctions, period, semicolon
pub static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let conj = word_alternation(CONJUNCTIONS);
    Regex::new(&format!(r"{}|[.;]", conj.as_str())).expect("delimiter regex")
});

/// "my list", "the wishlist", "la liste d'envie"...
pub static FILLER_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let article = word_alternation(&[POSSESSIVES, LIST_ARTICLES].concat());
    let noun = word_alternation(LIST_NOUNS);
    Regex::new(&format!(r"(?i)(?:{})\s+(?:{})(?:\s+d'envie)?", article.as_str(), noun.as_str()))
        .expect("filler phrase regex")
});

pub static POSSESSIVE_RE: LazyLock<Regex> = LazyLock::new(|| word_alternation(POSSESSIVES));

/// Strict alias lookup on an already case-folded, trimmed key
pub fn lookup_status_alias(key: &str) -> Option<WatchStatus> {
    let collapsed = key.split_whitespace().collect::<Vec<_>>().join(" ");
    STATUS_ALIASES
        .iter()
        .find(|(alias, _)| *alias == collapsed)
        .map(|(_, status)| *status)
}

pub fn is_quote(c: char) -> bool {
    QUOTE_CHARS.contains(&c)
}
