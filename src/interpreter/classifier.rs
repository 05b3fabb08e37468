/// Clause classifier and title extractor
///
/// Rules are tried in a fixed order and the first one that matches decides
/// the clause: status change, add, remove, bare quoted titles, nothing.
/// Verbs, pivots, stop words and aliases that sit inside a quoted title
/// are ignored.

use super::aliases::{
    ADD_STOP_RE, ADD_VERB_RE, CONJUNCTION_RE, PIVOT_RE, REMOVE_STOP_RE, REMOVE_VERB_RE,
    STATUS_ALIAS_RE, STATUS_VERB_RE,
};
use super::normalize::{normalize_status, strip_filler};
use super::plan::Action;
use super::quotes::{in_quotes, quoted_spans, quoted_titles, without_quoted, QuotedSpan};
use regex::{Match, Regex};
use std::collections::HashSet;

/// What a clause asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    StatusChange,
    Add,
    Remove,
    QuotedFallback,
    Unrecognized,
}

pub struct ClauseClassifier;

impl ClauseClassifier {
    /// Decide which rule applies to a clause
    pub fn kind(clause: &str) -> ClauseKind {
        let spans = quoted_spans(clause);
        Self::kind_with_spans(clause, &spans)
    }

    /// Actions for one clause. An unrecognized clause yields none.
    pub fn classify(clause: &str) -> Vec<Action> {
        let spans = quoted_spans(clause);

        match Self::kind_with_spans(clause, &spans) {
            ClauseKind::StatusChange => status_actions(clause, &spans),
            ClauseKind::Add => verb_titles(clause, &spans, &ADD_VERB_RE, &ADD_STOP_RE)
                .into_iter()
                .map(|title| Action::Add { title })
                .collect(),
            ClauseKind::Remove => verb_titles(clause, &spans, &REMOVE_VERB_RE, &REMOVE_STOP_RE)
                .into_iter()
                .map(|title| Action::Remove { title })
                .collect(),
            ClauseKind::QuotedFallback => quoted_titles(clause)
                .into_iter()
                .map(|title| Action::Add { title })
                .collect(),
            ClauseKind::Unrecognized => Vec::new(),
        }
    }

    fn kind_with_spans(clause: &str, spans: &[QuotedSpan]) -> ClauseKind {
        let has = |re: &Regex| first_unquoted(re, clause, spans, 0).is_some();

        if has(&STATUS_VERB_RE) && has(&STATUS_ALIAS_RE) {
            ClauseKind::StatusChange
        } else if has(&ADD_VERB_RE) {
            ClauseKind::Add
        } else if has(&REMOVE_VERB_RE) {
            ClauseKind::Remove
        } else if !quoted_titles(clause).is_empty() {
            ClauseKind::QuotedFallback
        } else {
            ClauseKind::Unrecognized
        }
    }
}

/// First match of `re` at or after byte `from` that is not inside quotes
fn first_unquoted<'t>(
    re: &Regex,
    text: &'t str,
    spans: &[QuotedSpan],
    from: usize,
) -> Option<Match<'t>> {
    let mut pos = from;
    while pos <= text.len() {
        let m = re.find_at(text, pos)?;
        if !in_quotes(spans, m.start()) {
            return Some(m);
        }
        pos = m.end().max(pos + 1);
    }
    None
}

/// "mark X, Y as seen": titles sit between the verb and the earliest pivot,
/// the status is the first alias after the pivot (or anywhere if none follows)
fn status_actions(clause: &str, spans: &[QuotedSpan]) -> Vec<Action> {
    let Some(verb) = first_unquoted(&STATUS_VERB_RE, clause, spans, 0) else {
        return Vec::new();
    };
    let pivot = first_unquoted(&PIVOT_RE, clause, spans, verb.end());

    let alias_from = pivot.map(|p| p.end()).unwrap_or(verb.end());
    let Some(alias) = first_unquoted(&STATUS_ALIAS_RE, clause, spans, alias_from)
        .or_else(|| first_unquoted(&STATUS_ALIAS_RE, clause, spans, 0))
    else {
        return Vec::new();
    };

    let title_end = match pivot {
        Some(p) => p.start(),
        None if alias.start() > verb.end() => alias.start(),
        None => clause.len(),
    };

    let slice = &clause[verb.end()..title_end];
    let status = normalize_status(alias.as_str()).to_string();

    let quoted = quoted_titles(slice);
    let titles = if quoted.is_empty() {
        split_titles(slice)
    } else {
        quoted
    };

    dedup_titles(titles)
        .into_iter()
        .map(|title| Action::SetStatus {
            title,
            status: status.clone(),
        })
        .collect()
}

/// Titles between the verb and the first stop preposition.
/// Quoted titles come first, then the unquoted remainder split on
/// commas and conjunctions with filler removed.
fn verb_titles(clause: &str, spans: &[QuotedSpan], verb_re: &Regex, stop_re: &Regex) -> Vec<String> {
    let Some(verb) = first_unquoted(verb_re, clause, spans, 0) else {
        return Vec::new();
    };

    let end = first_unquoted(stop_re, clause, spans, verb.end())
        .map(|m| m.start())
        .unwrap_or(clause.len());
    let window = &clause[verb.end()..end];

    let mut titles = quoted_titles(window);
    titles.extend(split_titles(&without_quoted(window)));

    dedup_titles(titles)
}

/// Unquoted path: split on commas, newlines and conjunctions, strip filler
fn split_titles(text: &str) -> Vec<String> {
    let joined = CONJUNCTION_RE.replace_all(text, ",");

    joined
        .split([',', '\n'])
        .map(strip_filler)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Case-insensitive dedup keeping the first spelling and input order
fn dedup_titles(titles: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|t| seen.insert(t.to_lowercase()))
        .collect()
}
