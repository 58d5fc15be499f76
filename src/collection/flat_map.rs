//! Flattening map.
//!
//! A mapping function may return a sequence or a single value. [`Spread`]
//! decides which: sequences splice their items into the output, scalars
//! contribute themselves. Flattening is exactly one level deep, so a
//! `Vec<Vec<T>>` result contributes its inner `Vec<T>`s as elements.

use std::collections::VecDeque;
use std::iter::Once;

/// A mapping result that contributes zero or more items to a flattened
/// sequence.
///
/// Sequence types yield their items. Scalar types yield themselves once.
/// Wrap any other type in [`Scalar`] to contribute it as a single item.
///
/// `Option<T>` is a sequence of zero or one item: `None` contributes
/// nothing.
pub trait Spread {
    /// The item contributed to the output.
    type Item;

    /// The iterator over contributed items.
    type Iter: Iterator<Item = Self::Item>;

    /// Converts this result into its contributed items.
    fn spread(self) -> Self::Iter;
}

impl<T> Spread for Vec<T> {
    type Item = T;
    type Iter = std::vec::IntoIter<T>;

    #[inline]
    fn spread(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<T, const N: usize> Spread for [T; N] {
    type Item = T;
    type Iter = std::array::IntoIter<T, N>;

    #[inline]
    fn spread(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<T> Spread for VecDeque<T> {
    type Item = T;
    type Iter = std::collections::vec_deque::IntoIter<T>;

    #[inline]
    fn spread(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<T> Spread for Box<[T]> {
    type Item = T;
    type Iter = std::vec::IntoIter<T>;

    #[inline]
    fn spread(self) -> Self::Iter {
        self.into_vec().into_iter()
    }
}

impl<T> Spread for Option<T> {
    type Item = T;
    type Iter = std::option::IntoIter<T>;

    #[inline]
    fn spread(self) -> Self::Iter {
        self.into_iter()
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Spread for smallvec::SmallVec<A> {
    type Item = A::Item;
    type Iter = smallvec::IntoIter<A>;

    #[inline]
    fn spread(self) -> Self::Iter {
        self.into_iter()
    }
}

/// Contributes the wrapped value as a single item.
///
/// # Examples
///
/// ```
/// use fnkit::collection::{Scalar, flat_map};
///
/// #[derive(Debug, PartialEq)]
/// struct Label(&'static str);
///
/// let labels = flat_map(|name: &'static str| Scalar(Label(name)), ["a", "b"]);
/// assert_eq!(labels, vec![Label("a"), Label("b")]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar<T>(pub T);

impl<T> Spread for Scalar<T> {
    type Item = T;
    type Iter = Once<T>;

    #[inline]
    fn spread(self) -> Self::Iter {
        std::iter::once(self.0)
    }
}

macro_rules! impl_spread_for_scalar {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Spread for $scalar {
                type Item = Self;
                type Iter = Once<Self>;

                #[inline]
                fn spread(self) -> Self::Iter {
                    std::iter::once(self)
                }
            }
        )*
    };
}

impl_spread_for_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    (),
);

impl<'a> Spread for &'a str {
    type Item = &'a str;
    type Iter = Once<&'a str>;

    #[inline]
    fn spread(self) -> Self::Iter {
        std::iter::once(self)
    }
}

/// Maps every element and flattens the results one level.
///
/// `function` runs exactly once per element, in input order. Sequence
/// results are spliced in place; scalar results contribute one element.
///
/// # Examples
///
/// ```
/// use fnkit::collection::flat_map;
///
/// assert_eq!(flat_map(|value: i32| [value, value * 10], [1, 2, 3]), vec![1, 10, 2, 20, 3, 30]);
/// assert_eq!(flat_map(|value: i32| value * 2, [1, 2, 3]), vec![2, 4, 6]);
///
/// // One level only
/// let nested = flat_map(|value: i32| vec![vec![value]], [1, 2]);
/// assert_eq!(nested, vec![vec![1], vec![2]]);
/// ```
pub fn flat_map<T, U, I, F>(mut function: F, items: I) -> Vec<U::Item>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
    U: Spread,
{
    items
        .into_iter()
        .flat_map(|item| function(item).spread())
        .collect()
}

/// Maps every element together with its position and flattens the results
/// one level.
///
/// # Examples
///
/// ```
/// use fnkit::collection::flat_map_indexed;
///
/// let tagged = flat_map_indexed(|value: char, index| vec![index.to_string(), value.to_string()], ['a', 'b']);
/// assert_eq!(tagged, vec!["0", "a", "1", "b"]);
/// ```
pub fn flat_map_indexed<T, U, I, F>(mut function: F, items: I) -> Vec<U::Item>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, usize) -> U,
    U: Spread,
{
    items
        .into_iter()
        .enumerate()
        .flat_map(|(index, item)| function(item, index).spread())
        .collect()
}
