//! Count-based predicates with early exit.

use crate::truth::Group;

/// Returns `true` if exactly `n` elements are truthy.
///
/// A negative `n` is never satisfied and returns `false` without
/// scanning. The scan stops once more than `n` truthy elements are seen.
///
/// # Examples
///
/// ```
/// use group_logic::exactly;
///
/// assert!(exactly(2, [true, false, true]));
/// assert!(!exactly(1, [true, false, true]));
/// assert!(!exactly(-1, [true]));
/// ```
pub fn exactly<G: Group>(n: i64, values: G) -> bool {
    if n < 0 {
        return false;
    }
    let Ok(n) = usize::try_from(n) else {
        return false;
    };
    values.truths().filter(|&t| t).take(n.saturating_add(1)).count() == n
}

/// Returns `true` if at least `n` elements are truthy.
///
/// `n <= 0` is trivially satisfied without scanning. Otherwise returns
/// as soon as the `n`-th truthy element is seen.
///
/// # Examples
///
/// ```
/// use group_logic::at_least;
///
/// assert!(at_least(0, Vec::<bool>::new()));
/// assert!(at_least(2, [1, 0, 1, 1]));
/// assert!(!at_least(3, [1, 0, 1]));
/// ```
pub fn at_least<G: Group>(n: i64, values: G) -> bool {
    if n <= 0 {
        return true;
    }
    let Ok(n) = usize::try_from(n) else {
        return false;
    };
    let mut seen = 0usize;
    for t in values.truths() {
        if t {
            seen += 1;
            if seen >= n {
                return true;
            }
        }
    }
    false
}

/// Returns `true` if at most `n` elements are truthy.
///
/// A negative `n` returns `false` immediately. Otherwise returns `false`
/// as soon as the `(n + 1)`-th truthy element is seen.
pub fn at_most<G: Group>(n: i64, values: G) -> bool {
    if n < 0 {
        return false;
    }
    let Ok(n) = usize::try_from(n) else {
        return true;
    };
    let mut seen = 0usize;
    for t in values.truths() {
        if t {
            seen += 1;
            if seen > n {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if strictly more than half of the elements are truthy.
///
/// Empty input returns `false`: no majority exists over zero elements.
///
/// A single forward scan keeps a running truthy count. It succeeds as
/// soon as `len / 2 + 1` truthy elements are seen, and fails as soon as
/// the remaining elements could no longer reach that threshold even if
/// all of them were truthy.
///
/// The length must be known before scanning. Slices, vectors, arrays,
/// scalars and exact-size iterators in [`Each`](crate::Each) report it
/// up front and are streamed. Other iterators (e.g. a `filter`) are
/// first buffered into a `Vec<bool>` of the whole input.
///
/// # Examples
///
/// ```
/// use group_logic::majority;
///
/// assert!(!majority(Vec::<bool>::new()));
/// assert!(majority([true]));
/// assert!(!majority([true, false]));
/// assert!(majority([true, true, false]));
/// ```
pub fn majority<G: Group>(values: G) -> bool {
    quorum(1, 2, values)
}

/// Returns `true` if the truthy share strictly exceeds
/// `numerator / denominator` of all elements.
///
/// Generalizes [`majority`], which is `quorum(1, 2, ..)`. For instance
/// `quorum(2, 3, ..)` asks for a strict two-thirds supermajority.
/// Empty input and a zero `denominator` return `false`. A fraction of
/// one or more can never be exceeded and also returns `false`.
///
/// # Examples
///
/// ```
/// use group_logic::quorum;
///
/// assert!(quorum(2, 3, [1, 1, 1, 0]));
/// assert!(!quorum(2, 3, [1, 1, 0]));
/// assert!(quorum(0, 1, [0, 0, 1]));
/// ```
pub fn quorum<G: Group>(numerator: u64, denominator: u64, values: G) -> bool {
    if denominator == 0 {
        return false;
    }
    let truths = values.truths();
    match truths.size_hint() {
        (lower, Some(upper)) if lower == upper => {
            exceeds_share(truths, lower, numerator, denominator)
        }
        _ => {
            let buffered: Vec<bool> = truths.collect();
            let total = buffered.len();
            exceeds_share(buffered.into_iter(), total, numerator, denominator)
        }
    }
}

fn exceeds_share<I>(truths: I, total: usize, numerator: u64, denominator: u64) -> bool
where
    I: Iterator<Item = bool>,
{
    if total == 0 {
        return false;
    }

    // Smallest count c with c / total > numerator / denominator.
    let needed = (total as u128) * u128::from(numerator) / u128::from(denominator) + 1;
    let Ok(needed) = usize::try_from(needed) else {
        return false;
    };
    if needed > total {
        return false;
    }
    reaches(truths, total, needed)
}

/// Forward scan with pruning in both directions.
fn reaches<I>(truths: I, total: usize, needed: usize) -> bool
where
    I: Iterator<Item = bool>,
{
    let mut seen = 0usize;
    let mut remaining = total;
    for t in truths {
        if t {
            seen += 1;
            if seen >= needed {
                return true;
            }
        }
        remaining = remaining.saturating_sub(1);
        if seen + remaining < needed {
            return false;
        }
    }
    false
}
