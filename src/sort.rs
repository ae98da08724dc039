//! Label ordering for column snapshots.

use std::cmp::Ordering;

/// How the distinct labels of a column are ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Integers by value. Any pair with a non-integer side compares by bytes.
    #[default]
    Numeric,
    /// Plain byte order.
    Lexical,
}

impl SortPolicy {
    /// Builds the policy from the `numeric_sort` flag.
    #[must_use]
    pub fn from_numeric_flag(numeric: bool) -> Self {
        if numeric {
            Self::Numeric
        } else {
            Self::Lexical
        }
    }

    /// Orders a set of labels. The result depends only on the set, not on
    /// the order the labels were handed in.
    #[must_use]
    pub fn order<'a, I>(self, labels: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut labels: Vec<&str> = labels.into_iter().collect();
        match self {
            Self::Numeric => merge_numeric(labels),
            Self::Lexical => {
                labels.sort_unstable();
                labels
            }
        }
    }

    /// Compares two labels under this policy.
    ///
    /// Under [`SortPolicy::Numeric`] this relation is not transitive over
    /// mixed sets (`9 < 10`, `10 < 1x`, `1x < 9`), so [`SortPolicy::order`]
    /// does not sort with it directly. Every adjacent pair of its output
    /// still compares `Less`.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Numeric => compare_numeric((a.parse().ok(), a), (b.parse().ok(), b)),
            Self::Lexical => a.cmp(b),
        }
    }
}

/// Two integers compare by value, ties broken by bytes. Anything else
/// compares by bytes.
fn compare_numeric(a: (Option<i64>, &str), b: (Option<i64>, &str)) -> Ordering {
    match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.1.cmp(b.1)),
        _ => a.1.cmp(b.1),
    }
}

/// Sorts integers by value and the rest by bytes, then merges the two runs
/// taking the lexically smaller head. Two-element sets come out exactly as
/// [`compare_numeric`] orders them.
fn merge_numeric(labels: Vec<&str>) -> Vec<&str> {
    let mut integers: Vec<(i64, &str)> = Vec::new();
    let mut words: Vec<&str> = Vec::new();
    for label in labels {
        match label.parse::<i64>() {
            Ok(value) => integers.push((value, label)),
            Err(_) => words.push(label),
        }
    }
    integers.sort_unstable();
    words.sort_unstable();

    let mut merged = Vec::with_capacity(integers.len() + words.len());
    let mut integers = integers.into_iter().map(|(_, l)| l).peekable();
    let mut words = words.into_iter().peekable();
    loop {
        let next = match (integers.peek(), words.peek()) {
            (Some(i), Some(w)) if i <= w => integers.next(),
            (Some(_), Some(_)) => words.next(),
            (Some(_), None) => integers.next(),
            (None, Some(_)) => words.next(),
            (None, None) => break,
        };
        merged.extend(next);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_mixed_labels() {
        let order = SortPolicy::Numeric.order(["10", "2", "9", "x"]);
        assert_eq!(order, vec!["2", "9", "10", "x"]);
    }

    #[test]
    fn test_lexical_labels() {
        let order = SortPolicy::Lexical.order(["10", "2", "9", "x"]);
        assert_eq!(order, vec!["10", "2", "9", "x"]);
    }

    #[test]
    fn test_numeric_negative_and_signed() {
        let order = SortPolicy::Numeric.order(["3", "-1", "+2", "0"]);
        assert_eq!(order, vec!["-1", "0", "+2", "3"]);
    }

    #[test]
    fn test_numeric_equal_values_tie_break_lexically() {
        let order = SortPolicy::Numeric.order(["01", "1", "+1"]);
        assert_eq!(order, vec!["+1", "01", "1"]);
    }

    #[test]
    fn test_non_numeric_labels_sorted_lexically() {
        let order = SortPolicy::Numeric.order(["b", "a", "", "c"]);
        assert_eq!(order, vec!["", "a", "b", "c"]);
    }

    #[test]
    fn test_overflowing_integer_is_lexical() {
        let order = SortPolicy::Numeric.order(["99999999999999999999", "5"]);
        assert_eq!(order, vec!["5", "99999999999999999999"]);
    }

    #[test]
    fn test_compare_matches_order() {
        assert_eq!(SortPolicy::Numeric.compare("9", "10"), Ordering::Less);
        assert_eq!(SortPolicy::Lexical.compare("9", "10"), Ordering::Greater);
        assert_eq!(SortPolicy::Numeric.compare("x", "10"), Ordering::Greater);
        assert_eq!(SortPolicy::Numeric.compare("-", "200"), Ordering::Less);
        assert_eq!(SortPolicy::Numeric.compare("1a", "5"), Ordering::Less);
    }

    #[test]
    fn test_numeric_dash_precedes_status_codes() {
        let order = SortPolicy::Numeric.order(["200", "-"]);
        assert_eq!(order, vec!["-", "200"]);
        let order = SortPolicy::Numeric.order(["404", "-", "200"]);
        assert_eq!(order, vec!["-", "200", "404"]);
    }

    #[test]
    fn test_numeric_mixed_pair_falls_back_to_lexical() {
        let order = SortPolicy::Numeric.order(["5", "1a"]);
        assert_eq!(order, vec!["1a", "5"]);
    }

    #[test]
    fn test_from_numeric_flag() {
        assert_eq!(SortPolicy::from_numeric_flag(true), SortPolicy::Numeric);
        assert_eq!(SortPolicy::from_numeric_flag(false), SortPolicy::Lexical);
        assert_eq!(SortPolicy::default(), SortPolicy::Numeric);
    }
}
