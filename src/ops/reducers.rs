//! Boolean reductions over a [`Group`].

use crate::truth::Group;

/// Returns `true` if every element is truthy.
///
/// Empty input is vacuously `true`. Stops at the first falsy element.
///
/// # Examples
///
/// ```
/// use group_logic::and_;
///
/// assert!(and_([true, true]));
/// assert!(!and_(vec![1, 0]));
/// assert!(and_(Vec::<bool>::new()));
/// assert!(and_("abc"));
/// ```
pub fn and_<G: Group>(values: G) -> bool {
    values.truths().all(|t| t)
}

/// Returns `true` if at least one element is truthy.
///
/// Empty input is `false`. Stops at the first truthy element.
pub fn or_<G: Group>(values: G) -> bool {
    values.truths().any(|t| t)
}

/// Returns `true` if exactly one element is truthy.
///
/// Stops as soon as a second truthy element is seen.
///
/// # Examples
///
/// ```
/// use group_logic::xor_;
///
/// assert!(xor_([true, false, false]));
/// assert!(!xor_([true, true, false]));
/// assert!(!xor_(Vec::<bool>::new()));
/// ```
pub fn xor_<G: Group>(values: G) -> bool {
    values.truths().filter(|&t| t).take(2).count() == 1
}

/// Returns `true` if no element is truthy. Complement of [`or_`].
pub fn nor_<G: Group>(values: G) -> bool {
    !or_(values)
}

/// Returns `true` if at least one element is falsy. Complement of [`and_`].
pub fn nand_<G: Group>(values: G) -> bool {
    !and_(values)
}

/// Returns `true` if all elements share the same truthiness.
///
/// Empty input is vacuously `true`. The scan aborts as soon as both a
/// truthy and a falsy element have been observed.
///
/// # Examples
///
/// ```
/// use group_logic::xnor_;
///
/// assert!(xnor_([true, true]));
/// assert!(xnor_([0, 0, 0]));
/// assert!(!xnor_([true, false]));
/// ```
pub fn xnor_<G: Group>(values: G) -> bool {
    const SEEN_TRUE: u8 = 0b01;
    const SEEN_FALSE: u8 = 0b10;

    let mut mask = 0u8;
    for t in values.truths() {
        mask |= if t { SEEN_TRUE } else { SEEN_FALSE };
        if mask == SEEN_TRUE | SEEN_FALSE {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::truth::{Each, Value};
    use std::cell::Cell;

    #[test]
    fn test_bool_inputs() {
        assert!(and_([true, true]));
        assert!(!and_([true, false]));
        assert!(or_([true, false]));
        assert!(!or_([false, false]));
        assert!(xor_([true, false, false]));
        assert!(!xor_([true, true, false]));
        assert!(nor_([false, false]));
        assert!(!nor_([false, true]));
        assert!(nand_([true, false]));
        assert!(!nand_([true, true]));
        assert!(xnor_([true, true]));
        assert!(!xnor_([true, false]));
    }

    #[test]
    fn test_int_inputs() {
        assert!(and_([1, 1]));
        assert!(!and_([1, 0]));
        assert!(or_([1, 0]));
        assert!(!or_([0, 0]));
        assert!(xor_([1, 0, 0]));
        assert!(!xor_([1, 1, 0]));
        assert!(nor_([0, 0]));
        assert!(!nor_([0, 1]));
        assert!(nand_([1, 0]));
        assert!(!nand_([1, 1]));
        assert!(xnor_([1, 1]));
        assert!(!xnor_([1, 0]));
    }

    #[test]
    fn test_empty_input_vacuous() {
        let empty: [bool; 0] = [];
        assert!(and_(empty));
        assert!(!or_(empty));
        assert!(!xor_(empty));
        assert!(nor_(empty));
        assert!(!nand_(empty));
        assert!(xnor_(empty));
    }

    #[test]
    fn test_scalars() {
        assert!(and_(true));
        assert!(!and_(0));
        assert!(and_("abc"));
        assert!(!or_(""));
        assert!(xor_(7u64));
        assert!(nor_(None::<i32>));
        assert!(xnor_(false));
    }

    #[test]
    fn test_mixed_values() {
        let row = Value::list(vec![Value::Int(2), Value::from("on"), Value::Bool(true)]);
        assert!(and_(&row));
        assert!(!nand_(&row));
        let sparse = Value::list(vec![Value::Null, Value::Float(0.0), Value::from("x")]);
        assert!(xor_(&sparse));
        assert!(or_(sparse));
    }

    #[test]
    fn test_and_short_circuits() {
        let scanned = Cell::new(0);
        let input = [true, false, true, true];
        let seq = input.iter().inspect(|_| scanned.set(scanned.get() + 1));
        assert!(!and_(Each(seq)));
        assert_eq!(scanned.get(), 2);
    }

    #[test]
    fn test_xor_stops_at_second_truthy() {
        let scanned = Cell::new(0);
        let input = [true, true, false, false, false];
        let seq = input.iter().inspect(|_| scanned.set(scanned.get() + 1));
        assert!(!xor_(Each(seq)));
        assert_eq!(scanned.get(), 2);
    }

    #[test]
    fn test_xnor_aborts_on_mixed() {
        let scanned = Cell::new(0);
        let input = [false, false, true, false, true];
        let seq = input.iter().inspect(|_| scanned.set(scanned.get() + 1));
        assert!(!xnor_(Each(seq)));
        assert_eq!(scanned.get(), 3);
    }
}
