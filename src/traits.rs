//! Sequence abstraction consumed by the distance engine.
//!
//! The engine only needs an indexable run of comparable units. Implement
//! [`EditSequence`] for your own containers to plug them in; the crate ships
//! implementations for the usual suspects:
//! - slices, arrays and `Vec<T>` compare element-wise,
//! - `str` and `String` compare Unicode scalar values (`char`), not bytes
//!   and not grapheme clusters,
//! - `Option<S>` treats `None` as the empty sequence,
//! - references forward to the referent.

use std::borrow::Cow;

/// A finite, ordered sequence of units that can be compared for equality.
///
/// Semantics:
/// - `units()` must return the same contents for the duration of a call.
/// - Units are indivisible: an edit inserts, deletes or substitutes exactly
///   one of them.
pub trait EditSequence {
    /// The indivisible element compared by the engine.
    type Unit: PartialEq + Clone;

    /// Borrow (or, for encodings that need decoding, materialise) the units.
    fn units(&self) -> Cow<'_, [Self::Unit]>;
}

impl<T: PartialEq + Clone> EditSequence for [T] {
    type Unit = T;

    fn units(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }
}

impl<T: PartialEq + Clone, const N: usize> EditSequence for [T; N] {
    type Unit = T;

    fn units(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: PartialEq + Clone> EditSequence for Vec<T> {
    type Unit = T;

    fn units(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl EditSequence for str {
    type Unit = char;

    fn units(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl EditSequence for String {
    type Unit = char;

    fn units(&self) -> Cow<'_, [char]> {
        self.as_str().units()
    }
}

impl<S: EditSequence + ?Sized> EditSequence for &S {
    type Unit = S::Unit;

    fn units(&self) -> Cow<'_, [S::Unit]> {
        (**self).units()
    }
}

/// Absent sequences behave as empty ones.
impl<S: EditSequence> EditSequence for Option<S> {
    type Unit = S::Unit;

    fn units(&self) -> Cow<'_, [S::Unit]> {
        match self {
            Some(seq) => seq.units(),
            None => Cow::Borrowed(&[]),
        }
    }
}
