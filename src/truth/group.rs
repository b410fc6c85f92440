//! Input normalization: turning any argument into a run of truth values.

use super::types::{truthy_owned, Truthy};
use super::value::Value;
use std::collections::{vec_deque, VecDeque};
use std::iter::{self, Map, Once};
use std::{array, slice, vec};

/// An argument that the reducers accept.
///
/// `Group` normalizes its input into an ordered sequence of truth values:
///
/// - **Scalars** (`bool`, numbers, `char`, `&str`, `String`, `Option<T>`,
///   `()`) become a one-element sequence. Text is atomic and never
///   iterated character by character.
/// - **Sequences** (`Vec<T>`, `&[T]`, `[T; N]`, `VecDeque<T>` and their
///   references) yield one truth value per element.
/// - **Arbitrary iterables** are accepted through the [`Each`] wrapper.
/// - [`Value`] is a sequence when it is a `List` and a scalar otherwise.
///
/// Normalization never fails.
///
/// # Examples
///
/// ```
/// use group_logic::{Each, Group};
///
/// assert_eq!(true.truths().collect::<Vec<_>>(), vec![true]);
/// assert_eq!("abc".truths().count(), 1);
/// assert_eq!(vec![1, 0, 2i32].truths().collect::<Vec<_>>(), vec![true, false, true]);
/// assert_eq!(Each(0..3i32).truths().filter(|&t| t).count(), 2);
/// ```
pub trait Group {
    /// Iterator over the truth value of each element.
    type Truths: Iterator<Item = bool>;

    /// Consumes the input and yields the truth value of each element.
    fn truths(self) -> Self::Truths;
}

/// Wraps any iterable so it can be passed where a [`Group`] is expected.
///
/// # Examples
///
/// ```
/// use group_logic::{and_, Each};
///
/// let readings = [3u32, 5, 8];
/// // odd readings only?
/// assert!(!and_(Each(readings.iter().map(|r| r % 2))));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<I>(pub I);

impl<I> Group for Each<I>
where
    I: IntoIterator,
    I::Item: Truthy,
{
    type Truths = Map<I::IntoIter, fn(I::Item) -> bool>;

    fn truths(self) -> Self::Truths {
        self.0.into_iter().map(truthy_owned::<I::Item> as fn(I::Item) -> bool)
    }
}

macro_rules! impl_scalar_group {
    ($($t:ty),* $(,)?) => {
        $(
            impl Group for $t {
                type Truths = Once<bool>;

                fn truths(self) -> Once<bool> {
                    iter::once(self.is_truthy())
                }
            }
        )*
    };
}

impl_scalar_group!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String,
    (),
);

impl Group for &str {
    type Truths = Once<bool>;

    fn truths(self) -> Once<bool> {
        iter::once(self.is_truthy())
    }
}

impl Group for &String {
    type Truths = Once<bool>;

    fn truths(self) -> Once<bool> {
        iter::once(self.is_truthy())
    }
}

impl<T: Truthy> Group for Option<T> {
    type Truths = Once<bool>;

    fn truths(self) -> Once<bool> {
        iter::once(self.is_truthy())
    }
}

impl<'a, T: Truthy> Group for &'a [T] {
    type Truths = Map<slice::Iter<'a, T>, fn(&'a T) -> bool>;

    fn truths(self) -> Self::Truths {
        self.iter().map(<T as Truthy>::is_truthy as fn(&'a T) -> bool)
    }
}

impl<'a, T: Truthy> Group for &'a Vec<T> {
    type Truths = Map<slice::Iter<'a, T>, fn(&'a T) -> bool>;

    fn truths(self) -> Self::Truths {
        self.as_slice().truths()
    }
}

impl<'a, T: Truthy, const N: usize> Group for &'a [T; N] {
    type Truths = Map<slice::Iter<'a, T>, fn(&'a T) -> bool>;

    fn truths(self) -> Self::Truths {
        self.as_slice().truths()
    }
}

impl<T: Truthy> Group for Vec<T> {
    type Truths = Map<vec::IntoIter<T>, fn(T) -> bool>;

    fn truths(self) -> Self::Truths {
        self.into_iter().map(truthy_owned::<T> as fn(T) -> bool)
    }
}

impl<T: Truthy, const N: usize> Group for [T; N] {
    type Truths = Map<array::IntoIter<T, N>, fn(T) -> bool>;

    fn truths(self) -> Self::Truths {
        self.into_iter().map(truthy_owned::<T> as fn(T) -> bool)
    }
}

impl<T: Truthy> Group for VecDeque<T> {
    type Truths = Map<vec_deque::IntoIter<T>, fn(T) -> bool>;

    fn truths(self) -> Self::Truths {
        self.into_iter().map(truthy_owned::<T> as fn(T) -> bool)
    }
}

impl<'a, T: Truthy> Group for &'a VecDeque<T> {
    type Truths = Map<vec_deque::Iter<'a, T>, fn(&'a T) -> bool>;

    fn truths(self) -> Self::Truths {
        self.iter().map(<T as Truthy>::is_truthy as fn(&'a T) -> bool)
    }
}

/// Truth values of a [`Value`]: one for a scalar, one per item for a list.
#[derive(Debug, Clone)]
pub enum ValueTruths<I> {
    /// A scalar value, not yet yielded.
    Scalar(Once<bool>),
    /// The items of a list.
    List(I),
}

impl<I> Iterator for ValueTruths<I>
where
    I: Iterator,
    I::Item: Truthy,
{
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        match self {
            ValueTruths::Scalar(once) => once.next(),
            ValueTruths::List(items) => items.next().map(|v| v.is_truthy()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ValueTruths::Scalar(once) => once.size_hint(),
            ValueTruths::List(items) => items.size_hint(),
        }
    }
}

impl Group for Value {
    type Truths = ValueTruths<vec::IntoIter<Value>>;

    fn truths(self) -> Self::Truths {
        match self {
            Value::List(items) => ValueTruths::List(items.into_iter()),
            scalar => ValueTruths::Scalar(iter::once(scalar.is_truthy())),
        }
    }
}

impl<'a> Group for &'a Value {
    type Truths = ValueTruths<slice::Iter<'a, Value>>;

    fn truths(self) -> Self::Truths {
        match self {
            Value::List(items) => ValueTruths::List(items.iter()),
            scalar => ValueTruths::Scalar(iter::once(scalar.is_truthy())),
        }
    }
}
