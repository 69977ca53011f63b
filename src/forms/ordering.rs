//! Identifier ordering for presenting selected interrogatories.
//!
//! Identifiers are not uniformly typed ("1", "6.3", "16.10", "200.1"), so each
//! template picks the rule that fits its numbering.

use std::cmp::Ordering;

/// Ordering rule used by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingRule {
    /// Bare or single-dot numbers. Parsed identifiers compare by integer
    /// part, then by the fractional digits read as a counter, so "2.9"
    /// sorts before "2.10". Unparseable identifiers go last, in input order.
    Decimal,
    /// Two-component section numbers ("200.1"). Unparseable identifiers map
    /// to a fixed sentinel pair.
    SectionPair,
}

/// Sort key for [`OrderingRule::SectionPair`] identifiers that fail to parse
pub const SECTION_SENTINEL: (u64, u64) = (999, 999);

/// Parse a bare or single-dot decimal ("17", "6.3", "16.10")
pub fn decimal_key(id: &str) -> Option<(u64, u64)> {
    let (whole, fraction) = match id.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (id, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;

    let fraction = match fraction {
        None => 0,
        Some(f) if !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => f.parse().ok()?,
        Some(_) => return None,
    };

    Some((whole, fraction))
}

/// Parse a dotted section number into its first two components
pub fn section_key(id: &str) -> (u64, u64) {
    let mut parts = id.split('.');
    let major = parts.next().and_then(|p| p.parse::<u64>().ok());
    let minor = match parts.next() {
        Some(p) => p.parse::<u64>().ok(),
        None => Some(0),
    };

    match (major, minor) {
        (Some(major), Some(minor)) => (major, minor),
        _ => SECTION_SENTINEL,
    }
}

impl OrderingRule {
    /// Compare two identifiers under this rule
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            OrderingRule::Decimal => match (decimal_key(a), decimal_key(b)) {
                (Some(ka), Some(kb)) => ka.cmp(&kb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                // Stable sort keeps unparseable identifiers in input order
                (None, None) => Ordering::Equal,
            },
            OrderingRule::SectionPair => section_key(a).cmp(&section_key(b)),
        }
    }

    /// Stable in-place sort
    pub fn sort(&self, ids: &mut [String]) {
        ids.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(rule: OrderingRule, ids: &[&str]) -> Vec<String> {
        let mut ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        rule.sort(&mut ids);
        ids
    }

    #[test]
    fn test_decimal_orders_fraction_as_counter() {
        assert_eq!(
            sorted(OrderingRule::Decimal, &["2.9", "2.10", "2.2"]),
            vec!["2.2", "2.9", "2.10"]
        );
    }

    #[test]
    fn test_section_pair_orders_components() {
        assert_eq!(
            sorted(OrderingRule::SectionPair, &["200.10", "200.2", "16.9"]),
            vec!["16.9", "200.2", "200.10"]
        );
    }

    #[test]
    fn test_decimal_mixes_bare_and_dotted() {
        assert_eq!(
            sorted(OrderingRule::Decimal, &["17", "6.3", "1", "12", "6.10"]),
            vec!["1", "6.3", "6.10", "12", "17"]
        );
    }

    #[test]
    fn test_decimal_unparseable_last_in_input_order() {
        assert_eq!(
            sorted(OrderingRule::Decimal, &["zeta", "3", "alpha", "1.1.1", "2"]),
            vec!["2", "3", "zeta", "alpha", "1.1.1"]
        );
    }

    #[test]
    fn test_section_pair_sentinel() {
        assert_eq!(
            sorted(OrderingRule::SectionPair, &["abc", "1000.1", "216.1"]),
            vec!["216.1", "abc", "1000.1"]
        );
    }

    #[rstest]
    #[case("17", Some((17, 0)))]
    #[case("6.3", Some((6, 3)))]
    #[case("16.10", Some((16, 10)))]
    #[case("6.", None)]
    #[case(".5", None)]
    #[case("-1", None)]
    #[case("attorney_name", None)]
    fn test_decimal_key(#[case] id: &str, #[case] expected: Option<(u64, u64)>) {
        assert_eq!(decimal_key(id), expected);
    }

    #[rstest]
    #[case("200.1", (200, 1))]
    #[case("217", (217, 0))]
    #[case("213.1.4", (213, 1))]
    #[case("x.1", SECTION_SENTINEL)]
    #[case("201.x", SECTION_SENTINEL)]
    fn test_section_key(#[case] id: &str, #[case] expected: (u64, u64)) {
        assert_eq!(section_key(id), expected);
    }
}
