//! Assorted helpers shared by the engine and its builder.

/// Order two sequences so that the shorter one runs along the rows.
///
/// Edit distance is symmetric, so the engine is free to pick the orientation
/// that keeps the working column at `min(m, n) + 1` cells. Ties keep the
/// caller's order.
#[inline]
pub fn orient<'a, T>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    if b.len() < a.len() {
        (b, a)
    } else {
        (a, b)
    }
}

/// Value reported when the distance exceeds `max_distance`.
#[inline]
pub fn exceeded(max_distance: usize) -> usize {
    max_distance.saturating_add(1)
}
