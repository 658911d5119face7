//! Bracket-delimited inline math detection in plain text runs.
//!
//! Markdown parsers tag `$…$` math for us, but chat-style model output
//! also writes formulas as `[ x^2 + y^2 = r^2 ]` inside ordinary text.
//! This scanner re-segments such a run into alternating text and formula
//! segments. Matching is non-nested: brackets cannot appear inside a
//! formula, and the first `]` after an opening `[` always closes it.

use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

static BRACKET_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]").unwrap());

/// One segment of a scanned text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Literal text between formulas, never empty.
    Text(&'a str),
    /// A formula body, whitespace-normalized, always inline.
    Formula(String),
}

/// Lazy left-to-right segmentation of a text run.
///
/// Yields the literal text before each bracket match (when non-empty),
/// then the normalized formula, and finally any trailing text. Finite
/// and restartable via [`segments`]; no state survives between runs.
pub struct Segments<'a> {
    text: &'a str,
    matches: CaptureMatches<'static, 'a>,
    last_end: usize,
    queued_formula: Option<Segment<'a>>,
    exhausted: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(formula) = self.queued_formula.take() {
            return Some(formula);
        }
        if self.exhausted {
            return None;
        }

        match self.matches.next() {
            Some(captures) => {
                let span = captures.get(0)?;
                let body = captures.get(1)?;
                let before = &self.text[self.last_end..span.start()];
                self.last_end = span.end();

                let formula = Segment::Formula(normalize_formula(body.as_str()));
                if before.is_empty() {
                    Some(formula)
                } else {
                    self.queued_formula = Some(formula);
                    Some(Segment::Text(before))
                }
            }
            None => {
                self.exhausted = true;
                let trailing = &self.text[self.last_end..];
                (!trailing.is_empty()).then_some(Segment::Text(trailing))
            }
        }
    }
}

/// Scan `text` for bracket-delimited formulas.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        matches: BRACKET_MATH.captures_iter(text),
        last_end: 0,
        queued_formula: None,
        exhausted: false,
    }
}

/// Segment `text`, or return `None` when it contains no formula.
///
/// The `None` signal lets callers keep an untouched text run as a plain
/// leaf instead of wrapping it in a one-segment composite.
pub fn scan(text: &str) -> Option<Vec<Segment<'_>>> {
    BRACKET_MATH.is_match(text).then(|| segments(text).collect())
}

/// Trim the formula body and collapse internal whitespace runs
/// (including newlines) to single spaces. Multi-line formulas keep their
/// content, not their formatting.
fn normalize_formula(body: &str) -> String {
    body.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(value: &str) -> Segment<'_> {
        Segment::Text(value)
    }

    fn formula(value: &str) -> Segment<'static> {
        Segment::Formula(value.to_string())
    }

    #[test]
    fn test_no_brackets_is_untouched() {
        let actual = scan("just prose, nothing else");

        assert_eq!(actual, None);
    }

    #[test]
    fn test_unclosed_bracket_is_untouched() {
        let actual = scan("array[3 and beyond");

        assert_eq!(actual, None);
    }

    #[test]
    fn test_empty_brackets_are_untouched() {
        let actual = scan("a [] b");

        assert_eq!(actual, None);
    }

    #[test]
    fn test_single_formula_with_surrounding_text() {
        let actual = scan("a [ x^2 ] b");
        let expected = Some(vec![text("a "), formula("x^2"), text(" b")]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_formula_at_start_has_no_empty_leading_segment() {
        let actual = scan("[e=mc^2] done");
        let expected = Some(vec![formula("e=mc^2"), text(" done")]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_formula_at_end_has_no_empty_trailing_segment() {
        let actual = scan("see [a+b]");
        let expected = Some(vec![text("see "), formula("a+b")]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_adjacent_formulas_emit_no_empty_text_between() {
        let actual = scan("[a][b]");
        let expected = Some(vec![formula("a"), formula("b")]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_multiline_formula_collapses_whitespace() {
        let actual = scan("[ x\n + y ]");
        let expected = Some(vec![formula("x + y")]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_first_closing_bracket_wins() {
        // Nesting is unsupported: `[a` closes at the first `]`, the
        // stray closer stays literal text.
        let actual = scan("[a] b] c");
        let expected = Some(vec![formula("a"), text(" b] c")]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_whitespace_only_formula_normalizes_to_empty() {
        let actual = scan("x [   ] y");
        let expected = Some(vec![text("x "), formula(""), text(" y")]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_segments_iterator_is_restartable() {
        let fixture = "pi is [ 3.14 ] ish";
        let first: Vec<_> = segments(fixture).collect();
        let second: Vec<_> = segments(fixture).collect();

        assert_eq!(first, second);
    }
}
