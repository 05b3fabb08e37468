/// Instruction interpreter
///
/// Turns one free-form instruction ("add Drive to my list and remove Dune")
/// into an ordered plan of catalog actions. Everything here is pure over
/// its string input.

pub mod aliases;
pub mod classifier;
pub mod normalize;
pub mod plan;
pub mod quotes;
pub mod segmenter;

pub use classifier::{ClauseClassifier, ClauseKind};
pub use normalize::{normalize_status, normalize_title, resolve_status, split_title_list};
pub use plan::{Action, Plan, PlanBuilder};
pub use segmenter::Segmenter;

// Verb stems, so conjugated forms ("ajouté", "removing") still count
const VERB_STEMS: &[&str] = &[
    "add", "ajout", "mets ", "met ", "mark", "marqu", "set ", "remov", "delet", "supprim",
    "retir", "enlèv", "enlev",
];

/// Cheap check for text that reads like several catalog actions at once:
/// a joiner (conjunction, `;` or `.`) plus at least one action verb stem
pub fn looks_like_multi_action(text: &str) -> bool {
    let lower = text.to_lowercase();

    let has_join = aliases::CONJUNCTION_RE.is_match(&lower) || lower.contains(';') || lower.contains('.');
    let has_verb = VERB_STEMS.iter().any(|stem| lower.contains(stem));

    has_join && has_verb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_multi_action() {
        assert!(looks_like_multi_action("add Drive and remove Dune"));
        assert!(looks_like_multi_action("ajoute Alien; supprime Heat"));
        assert!(looks_like_multi_action("Mark Heat as seen. Add Dune"));
        assert!(!looks_like_multi_action("add Drive"));
        assert!(!looks_like_multi_action("salt and pepper"));
        assert!(!looks_like_multi_action(""));
    }
}
