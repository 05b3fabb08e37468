/// Instruction segmenter
///
/// Splits a raw instruction into clauses on whole-word conjunctions
/// (and / then / et / puis), periods and semicolons. Delimiters inside a
/// quoted title do not split.

use super::aliases::DELIMITER_RE;
use super::quotes::{in_quotes, quoted_spans};

pub struct Segmenter;

impl Segmenter {
    /// Ordered, trimmed, non-empty clauses
    pub fn split(instruction: &str) -> Vec<String> {
        let spans = quoted_spans(instruction);
        let mut clauses = Vec::new();
        let mut start = 0;

        for m in DELIMITER_RE.find_iter(instruction) {
            if in_quotes(&spans, m.start()) {
                continue;
            }
            push_clause(&mut clauses, &instruction[start..m.start()]);
            start = m.end();
        }
        push_clause(&mut clauses, &instruction[start..]);

        clauses
    }
}

fn push_clause(clauses: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        clauses.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_conjunction() {
        let clauses = Segmenter::split("add Drive to my list and remove Dune from my list");
        assert_eq!(clauses, vec!["add Drive to my list", "remove Dune from my list"]);
    }

    #[test]
    fn test_split_on_punctuation_and_then() {
        let clauses = Segmenter::split(
            "add Alien, Heat and \"Blade Runner 2049\" to my wishlist; then remove Parasite.",
        );
        assert_eq!(
            clauses,
            vec![
                "add Alien, Heat",
                "\"Blade Runner 2049\" to my wishlist",
                "remove Parasite",
            ]
        );
    }

    #[test]
    fn test_french_conjunctions() {
        let clauses = Segmenter::split("ajoute Drive ET supprime Dune puis marque Heat comme vu");
        assert_eq!(clauses, vec!["ajoute Drive", "supprime Dune", "marque Heat comme vu"]);
    }

    #[test]
    fn test_conjunction_must_be_whole_word() {
        let clauses = Segmenter::split("add Brandy and Thenardier");
        assert_eq!(clauses, vec!["add Brandy", "Thenardier"]);
    }

    #[test]
    fn test_quoted_delimiters_do_not_split() {
        let clauses = Segmenter::split("remove « Pain and Chocolate » from my list; add \"Mr. Robot\"");
        assert_eq!(
            clauses,
            vec!["remove « Pain and Chocolate » from my list", "add \"Mr. Robot\""]
        );
    }

    #[test]
    fn test_empty_fragments_dropped() {
        assert!(Segmenter::split("").is_empty());
        assert!(Segmenter::split("  ; . and then ").is_empty());
        assert_eq!(Segmenter::split("hello, how are you?"), vec!["hello, how are you?"]);
    }
}
