//! The truthiness predicate.

use std::collections::VecDeque;

/// A value that can be judged truthy or falsy.
///
/// Truthiness follows the familiar scripting convention:
///
/// - numbers are truthy when non-zero (`NaN` counts as non-zero),
/// - text and containers are truthy when non-empty,
/// - `None` and `()` are falsy,
/// - `bool` is itself.
///
/// Every reducer in this crate evaluates its elements through this trait,
/// so implementing it for a domain type is all that is needed to aggregate
/// collections of that type.
///
/// # Examples
///
/// ```
/// use group_logic::Truthy;
///
/// struct Flag { raised: bool }
///
/// impl Truthy for Flag {
///     fn is_truthy(&self) -> bool {
///         self.raised
///     }
/// }
///
/// assert!(Flag { raised: true }.is_truthy());
/// assert!(!0u8.is_truthy());
/// assert!("x".is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if this value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

// A char is a one-character text, never empty.
impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    fn is_truthy(&self) -> bool {
        N > 0
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for VecDeque<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// `None` is falsy; `Some(v)` is as truthy as `v`.
impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Evaluates an owned element. Used where a plain `fn` pointer is needed.
pub(crate) fn truthy_owned<T: Truthy>(value: T) -> bool {
    value.is_truthy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool() {
        assert!(true.is_truthy());
        assert!(!false.is_truthy());
    }

    #[test]
    fn test_numbers() {
        assert!(1i32.is_truthy());
        assert!((-3i64).is_truthy());
        assert!(!0u8.is_truthy());
        assert!(!0usize.is_truthy());
        assert!(0.5f64.is_truthy());
        assert!(!0.0f64.is_truthy());
        assert!(!(-0.0f32).is_truthy());
        assert!(f64::NAN.is_truthy());
    }

    #[test]
    fn test_text() {
        assert!("abc".is_truthy());
        assert!(!"".is_truthy());
        assert!(String::from("x").is_truthy());
        assert!(!String::new().is_truthy());
        assert!('a'.is_truthy());
    }

    #[test]
    fn test_containers() {
        assert!(vec![0].is_truthy());
        assert!(!Vec::<i32>::new().is_truthy());
        assert!([false].is_truthy());
        assert!(![0u8; 0].is_truthy());
        assert!(!VecDeque::<bool>::new().is_truthy());
        let empty: &[i32] = &[];
        assert!(!empty.is_truthy());
    }

    #[test]
    fn test_option_and_unit() {
        assert!(!None::<bool>.is_truthy());
        assert!(Some(1).is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(!().is_truthy());
    }

    #[test]
    fn test_references_delegate() {
        let n = 7;
        assert!((&n).is_truthy());
        assert!((&&"x").is_truthy());
        assert!(!Box::new(0.0f64).is_truthy());
    }
}
