//! Levenshtein edit distance in a single rolling column.
//!
//! The Levenshtein distance between two sequences is the minimum number of
//! single-unit insertions, deletions and substitutions that turn one into
//! the other. This crate computes it with the classic dynamic program, but
//! never materialises the full `m × n` table: only one column of it is live
//! at a time, oriented along the shorter input, so memory is
//! `O(min(m, n))`.
//!
//! ## Core idea
//! 1. Fill the first column against the first unit of the longer input.
//! 2. Sweep the column in place once per remaining unit, writing each cell
//!    one row behind the read position.
//! 3. Optionally stop as soon as the column minimum exceeds a threshold: the
//!    minimum never decreases from one column to the next, so the final
//!    distance cannot fall back under it.
//!
//! ## Quick start
//! ```
//! use lev_dp::{distance, distance_bounded};
//!
//! assert_eq!(distance("Haus", "Maus"), 1);
//! assert_eq!(distance("Kartoffelsalat", "Runkelrüben"), 12);
//!
//! // Anything above the threshold collapses to `threshold + 1`.
//! assert_eq!(distance_bounded("Kartoffelsalat", "Runkelrüben", 2), 3);
//! ```
//!
//! ## Units
//! Strings are compared by `char`; slices, arrays and vectors element-wise.
//! Absent inputs (`None`) count as empty. See [`EditSequence`].

pub mod builder;
pub mod column;
pub mod engine;
pub mod traits;
pub mod utils;

pub use crate::builder::LevenshteinBuilder;
pub use crate::engine::{distance, distance_bounded, distance_within, LevenshteinEngine};
pub use crate::traits::EditSequence;
