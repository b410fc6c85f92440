//! Data-parallel reductions over large slices.
//!
//! Enabled by the `parallel` feature. Results match the sequential
//! functions (vacuous empty-input convention); only the evaluation
//! strategy differs. Short-circuiting is best effort: rayon stops
//! scheduling new work once the outcome of `all`/`any` is known.

use crate::truth::Truthy;
use rayon::prelude::*;

/// Parallel [`count_true`](crate::count_true).
pub fn par_count_true<T: Truthy + Sync>(values: &[T]) -> usize {
    values.par_iter().filter(|v| v.is_truthy()).count()
}

/// Parallel [`count_false`](crate::count_false).
pub fn par_count_false<T: Truthy + Sync>(values: &[T]) -> usize {
    values.par_iter().filter(|v| !v.is_truthy()).count()
}

/// Parallel [`and_`](crate::and_).
pub fn par_and<T: Truthy + Sync>(values: &[T]) -> bool {
    values.par_iter().all(|v| v.is_truthy())
}

/// Parallel [`or_`](crate::or_).
pub fn par_or<T: Truthy + Sync>(values: &[T]) -> bool {
    values.par_iter().any(|v| v.is_truthy())
}

/// Parallel [`majority`](crate::majority). Counts every element.
pub fn par_majority<T: Truthy + Sync>(values: &[T]) -> bool {
    !values.is_empty() && par_count_true(values) > values.len() / 2
}
