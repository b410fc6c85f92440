//! Threshold helpers.
//!
//! Predicates parameterized by a count of truthy elements: tallies,
//! "exactly n", "at least n", "at most n", and majority/quorum votes.
//!
//! Thresholds are signed so that out-of-range requests resolve to a
//! fixed answer instead of failing: a negative `n` can never be matched
//! exactly or as an upper bound, and is always met as a lower bound.
//! Each predicate stops scanning as soon as its outcome is decided.

mod counting;
mod predicates;

pub use counting::{count_false, count_true};
pub use predicates::{at_least, at_most, exactly, majority, quorum};
