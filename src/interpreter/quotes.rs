// Quoted span detection
//
// Any quote character opens a span and the next one closes it, so mixed
// pairs like “Title" still work. An unterminated quote opens nothing.

use super::aliases::is_quote;
use super::normalize::normalize_title;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct QuotedSpan {
    /// Byte range including both quote characters
    pub outer: Range<usize>,
    /// Byte range of the text between the quotes
    pub inner: Range<usize>,
}

pub fn quoted_spans(text: &str) -> Vec<QuotedSpan> {
    let mut spans = Vec::new();
    let mut open: Option<(usize, usize)> = None;

    for (idx, c) in text.char_indices() {
        if !is_quote(c) {
            continue;
        }

        match open.take() {
            None => open = Some((idx, idx + c.len_utf8())),
            Some((start, inner_start)) => spans.push(QuotedSpan {
                outer: start..idx + c.len_utf8(),
                inner: inner_start..idx,
            }),
        }
    }

    spans
}

/// True when byte offset `pos` falls inside one of `spans`
pub fn in_quotes(spans: &[QuotedSpan], pos: usize) -> bool {
    spans.iter().any(|s| s.outer.contains(&pos))
}

/// Normalized, non-blank contents of every closed quoted span, in order
pub fn quoted_titles(text: &str) -> Vec<String> {
    quoted_spans(text)
        .iter()
        .map(|s| normalize_title(&text[s.inner.clone()]))
        .filter(|t| !t.is_empty())
        .collect()
}

/// The text with every quoted span replaced by a comma, so the pieces
/// around a quoted title never merge into one
pub fn without_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in quoted_spans(text) {
        out.push_str(&text[cursor..span.outer.start]);
        out.push(',');
        cursor = span.outer.end;
    }
    out.push_str(&text[cursor..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_titles() {
        let titles = quoted_titles("add \"Blade Runner 2049\" and « Le Grand Badaud »");
        assert_eq!(titles, vec!["Blade Runner 2049", "Le Grand Badaud"]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(quoted_titles("add \"Heat").is_empty());
        assert_eq!(quoted_titles("\"Dune\" and \"Heat"), vec!["Dune"]);
    }

    #[test]
    fn test_empty_quotes_skipped() {
        assert!(quoted_titles("add \"  \" please").is_empty());
    }

    #[test]
    fn test_in_quotes() {
        let text = "remove “Pain and Chocolate” from";
        let spans = quoted_spans(text);
        let and_pos = text.find("and").unwrap();
        let from_pos = text.find("from").unwrap();

        assert!(in_quotes(&spans, and_pos));
        assert!(!in_quotes(&spans, from_pos));
    }

    #[test]
    fn test_without_quoted() {
        assert_eq!(without_quoted("Alien \"Heat\" Dune"), "Alien , Dune");
        assert_eq!(without_quoted("no quotes"), "no quotes");
    }
}
