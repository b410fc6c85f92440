//! Truthy/falsy tallies.

use crate::truth::Group;

/// Number of truthy elements.
///
/// # Examples
///
/// ```
/// use group_logic::count_true;
///
/// assert_eq!(count_true([1, 0, 3]), 2);
/// assert_eq!(count_true("abc"), 1);
/// ```
pub fn count_true<G: Group>(values: G) -> usize {
    values.truths().filter(|&t| t).count()
}

/// Number of falsy elements.
pub fn count_false<G: Group>(values: G) -> usize {
    values.truths().filter(|&t| !t).count()
}
