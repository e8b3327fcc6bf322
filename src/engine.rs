//! Single-column Levenshtein engine.
//!
//! The engine runs in three phases:
//! 1. Short-circuit when either sequence is empty.
//! 2. Fill the initial column against the first unit of the column-driving
//!    sequence.
//! 3. Sweep the column once per remaining unit, optionally stopping as soon
//!    as the column minimum exceeds the configured threshold.
//!
//! The free functions [`distance`], [`distance_bounded`] and
//! [`distance_within`] accept anything implementing [`EditSequence`]; the
//! [`LevenshteinEngine`] type works directly on slices.

use crate::column::WorkingColumn;
use crate::traits::EditSequence;
use crate::utils::{exceeded, orient};

/// Levenshtein engine for one pair of sequences.
///
/// Typical usage:
/// ```
/// use lev_dp::LevenshteinEngine;
///
/// let a: Vec<char> = "Kartoffelsalat".chars().collect();
/// let b: Vec<char> = "Runkelrüben".chars().collect();
///
/// assert_eq!(LevenshteinEngine::new(&a, &b).run(), 12);
/// assert_eq!(LevenshteinEngine::new(&a, &b).with_max_distance(2).run(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LevenshteinEngine<'a, T> {
    a: &'a [T],
    b: &'a [T],
    max_distance: Option<usize>,
}

impl<'a, T: PartialEq> LevenshteinEngine<'a, T> {
    /// Create an unbounded engine.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self {
            a,
            b,
            max_distance: None,
        }
    }

    /// Stop early once the distance is known to exceed `max_distance`.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Return the configured threshold, if any.
    pub fn max_distance(&self) -> Option<usize> {
        self.max_distance
    }

    /// Compute the distance.
    ///
    /// Unbounded engines return the exact Levenshtein distance. Bounded
    /// engines return the exact distance when it is at most the threshold
    /// and `max_distance + 1` otherwise.
    ///
    /// When either sequence is empty the length of the other is returned
    /// as is, even if a threshold is configured and the length exceeds it.
    pub fn run(&self) -> usize {
        if self.a.is_empty() {
            return self.b.len();
        }
        if self.b.is_empty() {
            return self.a.len();
        }

        let (rows, cols) = orient(self.a, self.b);

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "levenshtein_run",
            rows = rows.len(),
            cols = cols.len(),
            max_distance = ?self.max_distance
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (mut column, mut sweep) = WorkingColumn::initial(rows, &cols[0]);
        if let Some(limit) = self.cutoff(sweep.smallest, 1) {
            return limit;
        }

        for (offset, unit) in cols.iter().enumerate().skip(1) {
            let j = offset + 1;
            sweep = column.sweep(j, unit);
            if let Some(limit) = self.cutoff(sweep.smallest, j) {
                return limit;
            }
        }

        match self.max_distance {
            Some(max) if sweep.value > max => exceeded(max),
            _ => sweep.value,
        }
    }

    /// Sentinel to return if a column minimum of `smallest` already rules
    /// out a distance within the threshold.
    #[inline]
    fn cutoff(&self, smallest: usize, _column: usize) -> Option<usize> {
        let max = self.max_distance?;
        if smallest <= max {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            column = _column,
            smallest,
            max_distance = max,
            "threshold exceeded; stopping early"
        );
        Some(exceeded(max))
    }
}

/// Exact Levenshtein distance between `a` and `b`.
///
/// ```
/// assert_eq!(lev_dp::distance("Haus", "Maus"), 1);
/// assert_eq!(lev_dp::distance("Haus", "Mausi"), 2);
/// assert_eq!(lev_dp::distance("", "Haus"), 4);
/// ```
pub fn distance<A, B>(a: A, b: B) -> usize
where
    A: EditSequence,
    B: EditSequence<Unit = A::Unit>,
{
    let a = a.units();
    let b = b.units();
    LevenshteinEngine::new(&a, &b).run()
}

/// Levenshtein distance, or `max_distance + 1` once it is known to exceed
/// `max_distance`.
///
/// An empty input still yields the other input's length, whatever the
/// threshold.
///
/// ```
/// assert_eq!(lev_dp::distance_bounded("Haus", "Mausi", 2), 2);
/// assert_eq!(lev_dp::distance_bounded("Kartoffelsalat", "Runkelrüben", 2), 3);
/// assert_eq!(lev_dp::distance_bounded("", "Runkelrüben", 2), 11);
/// ```
pub fn distance_bounded<A, B>(a: A, b: B, max_distance: usize) -> usize
where
    A: EditSequence,
    B: EditSequence<Unit = A::Unit>,
{
    let a = a.units();
    let b = b.units();
    LevenshteinEngine::new(&a, &b)
        .with_max_distance(max_distance)
        .run()
}

/// `Some(distance)` if the distance is at most `max_distance`, else `None`.
///
/// ```
/// assert_eq!(lev_dp::distance_within("Haus", "Maus", 1), Some(1));
/// assert_eq!(lev_dp::distance_within("Haus", "Mausi", 1), None);
/// assert_eq!(lev_dp::distance_within("", "Haus", 3), None);
/// ```
pub fn distance_within<A, B>(a: A, b: B, max_distance: usize) -> Option<usize>
where
    A: EditSequence,
    B: EditSequence<Unit = A::Unit>,
{
    let d = distance_bounded(a, b, max_distance);
    (d <= max_distance).then_some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_pairs() {
        assert_eq!(distance("Haus", "Maus"), 1);
        assert_eq!(distance("Haus", "Mausi"), 2);
        assert_eq!(distance("Haus", "Häuser"), 3);
        assert_eq!(distance("Kartoffelsalat", "Runkelrüben"), 12);
    }

    #[test]
    fn reference_pairs_bounded() {
        assert_eq!(distance_bounded("Haus", "Maus", 2), 1);
        assert_eq!(distance_bounded("Haus", "Mausi", 2), 2);
        assert_eq!(distance_bounded("Haus", "Häuser", 2), 3);
        assert_eq!(distance_bounded("Kartoffelsalat", "Runkelrüben", 2), 3);
    }

    #[test]
    fn empty_inputs_short_circuit() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abcd", ""), 4);
        assert_eq!(distance_bounded("", "abcdef", 1), 6);
        assert_eq!(distance_bounded("abcdef", "", 0), 6);
    }

    #[test]
    fn absent_sequences_are_empty() {
        let none: Option<&str> = None;
        assert_eq!(distance(none, Some("abc")), 3);
        assert_eq!(distance(Some("abc"), none), 3);
        assert_eq!(distance(none, none), 0);
        assert_eq!(distance_bounded(none, Some("abc"), 0), 3);
    }

    #[test]
    fn single_unit_column_driver() {
        assert_eq!(distance("a", "a"), 0);
        assert_eq!(distance("a", "b"), 1);
        assert_eq!(distance("aa", "a"), 1);
        assert_eq!(distance("abc", "b"), 2);
        assert_eq!(distance_bounded("abc", "x", 1), 2);
    }

    #[test]
    fn byte_and_generic_slices() {
        assert_eq!(distance(b"kitten", b"sitting"), 3);
        assert_eq!(distance(vec![1u32, 2, 3], vec![1u32, 3]), 1);
        assert_eq!(distance(&[1i64, 2, 3][..], &[4i64, 5, 6][..]), 3);
        // Bytes and chars disagree on multi-byte characters.
        assert_eq!(distance("ü".as_bytes(), "u".as_bytes()), 2);
        assert_eq!(distance("ü", "u"), 1);
    }

    #[test]
    fn threshold_zero_is_equality_test() {
        assert_eq!(distance_bounded("same", "same", 0), 0);
        assert_eq!(distance_bounded("same", "sane", 0), 1);
    }

    #[test]
    fn final_value_above_threshold_reports_sentinel() {
        // Column minima never pass 4 here, but the bottom cell reaches 8.
        assert_eq!(distance("aaaaxxxx", "yyyyaaaa"), 8);
        assert_eq!(distance_bounded("aaaaxxxx", "yyyyaaaa", 4), 5);
        assert_eq!(distance_within("aaaaxxxx", "yyyyaaaa", 4), None);
        assert_eq!(distance_within("aaaaxxxx", "yyyyaaaa", 8), Some(8));
    }

    #[test]
    fn engine_exposes_configuration() {
        let a = [1u8, 2, 3];
        let b = [1u8, 2, 4];
        let engine = LevenshteinEngine::new(&a, &b);
        assert_eq!(engine.max_distance(), None);
        assert_eq!(engine.run(), 1);
        let engine = engine.with_max_distance(0);
        assert_eq!(engine.max_distance(), Some(0));
        assert_eq!(engine.run(), 1);
    }

    #[test]
    fn orientation_does_not_change_result() {
        let short = b"ab".as_slice();
        let long = b"xaybz".as_slice();
        assert_eq!(
            LevenshteinEngine::new(short, long).run(),
            LevenshteinEngine::new(long, short).run()
        );
    }
}
