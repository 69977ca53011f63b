//! Substring pattern matching of field names against candidate entries

use super::schema::{FillEntry, ReadEntry, TextEntry};

/// Anything that carries a field-name pattern
pub trait Candidate {
    fn pattern(&self) -> &str;
}

impl Candidate for FillEntry {
    fn pattern(&self) -> &str {
        self.pattern
    }
}

impl Candidate for ReadEntry {
    fn pattern(&self) -> &str {
        self.pattern
    }
}

impl Candidate for TextEntry {
    fn pattern(&self) -> &str {
        self.pattern
    }
}

/// Return the first candidate, in slice order, whose pattern occurs in `field_name`.
///
/// There is no specificity ranking: when two patterns both occur in a name,
/// whichever is declared first wins. The index is returned so callers that
/// consume candidates can remove the match.
pub fn match_candidate<'c, C: Candidate>(
    field_name: &str,
    candidates: &'c [C],
) -> Option<(usize, &'c C)> {
    candidates
        .iter()
        .enumerate()
        .find(|(_, c)| field_name.contains(c.pattern()))
}

/// Pairs `(earlier, later)` where an earlier pattern is a substring of a later one.
///
/// Any such pair means the later pattern can never be reached through a name
/// that also contains the earlier one.
pub fn shadowed_patterns<C: Candidate>(entries: &[C]) -> Vec<(String, String)> {
    let mut shadowed = Vec::new();
    for (i, earlier) in entries.iter().enumerate() {
        for later in &entries[i + 1..] {
            if earlier.pattern() != later.pattern() && later.pattern().contains(earlier.pattern())
            {
                shadowed.push((earlier.pattern().to_string(), later.pattern().to_string()));
            }
        }
    }
    shadowed
}
