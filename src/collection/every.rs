//! Universal predicate over keyed collections.

use std::collections::{BTreeMap, VecDeque, btree_map, vec_deque};
use std::iter::Enumerate;

/// A collection that yields `(key, element)` pairs in its natural order.
///
/// Sequences are keyed by position. Maps are keyed by their own keys, in the
/// map's iteration order. [`entries`] adapts an iterator of pairs that is
/// already in insertion order; [`indexed`] keys any iterator by position.
pub trait Keyed {
    /// The key paired with each element.
    type Key;

    /// The element type.
    type Element;

    /// The iterator over `(key, element)` pairs.
    type Entries: Iterator<Item = (Self::Key, Self::Element)>;

    /// Converts this collection into its `(key, element)` pairs.
    fn into_entries(self) -> Self::Entries;
}

impl<'a, T> Keyed for &'a [T] {
    type Key = usize;
    type Element = &'a T;
    type Entries = Enumerate<std::slice::Iter<'a, T>>;

    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<'a, T> Keyed for &'a Vec<T> {
    type Key = usize;
    type Element = &'a T;
    type Entries = Enumerate<std::slice::Iter<'a, T>>;

    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<'a, T, const N: usize> Keyed for &'a [T; N] {
    type Key = usize;
    type Element = &'a T;
    type Entries = Enumerate<std::slice::Iter<'a, T>>;

    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<T> Keyed for Vec<T> {
    type Key = usize;
    type Element = T;
    type Entries = Enumerate<std::vec::IntoIter<T>>;

    fn into_entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }
}

impl<T, const N: usize> Keyed for [T; N] {
    type Key = usize;
    type Element = T;
    type Entries = Enumerate<std::array::IntoIter<T, N>>;

    fn into_entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }
}

impl<'a, T> Keyed for &'a VecDeque<T> {
    type Key = usize;
    type Element = &'a T;
    type Entries = Enumerate<vec_deque::Iter<'a, T>>;

    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<'a, K, V> Keyed for &'a BTreeMap<K, V> {
    type Key = &'a K;
    type Element = &'a V;
    type Entries = btree_map::Iter<'a, K, V>;

    fn into_entries(self) -> Self::Entries {
        self.iter()
    }
}

impl<K, V> Keyed for BTreeMap<K, V> {
    type Key = K;
    type Element = V;
    type Entries = btree_map::IntoIter<K, V>;

    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }
}

/// An iterator of `(key, element)` pairs used as a keyed collection.
///
/// Created by [`entries`].
#[derive(Clone, Debug)]
pub struct Entries<I>(I);

/// Uses an iterator of `(key, element)` pairs as a keyed collection, keeping
/// the order the iterator yields them in.
///
/// # Examples
///
/// ```
/// use fnkit::collection::{array_every, entries};
///
/// let scores = vec![("alice", 90), ("bob", 72)];
/// assert!(array_every(entries(scores), |score, name| name.len() <= 5 && score >= 70));
/// ```
pub fn entries<I, K, V>(pairs: I) -> Entries<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
{
    Entries(pairs.into_iter())
}

impl<I, K, V> Keyed for Entries<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Element = V;
    type Entries = I;

    fn into_entries(self) -> Self::Entries {
        self.0
    }
}

/// An iterator keyed by position.
///
/// Created by [`indexed`].
#[derive(Clone, Debug)]
pub struct Indexed<I>(I);

/// Uses any iterator as a keyed collection whose keys are positions.
///
/// # Examples
///
/// ```
/// use fnkit::collection::{array_every, indexed};
///
/// assert!(array_every(indexed("abc".chars()), |letter, index| letter as usize - 'a' as usize == index));
/// ```
pub fn indexed<I>(items: I) -> Indexed<I::IntoIter>
where
    I: IntoIterator,
{
    Indexed(items.into_iter())
}

impl<I: Iterator> Keyed for Indexed<I> {
    type Key = usize;
    type Element = I::Item;
    type Entries = Enumerate<I>;

    fn into_entries(self) -> Self::Entries {
        self.0.enumerate()
    }
}

/// Returns whether `predicate` holds for every `(element, key)` pair.
///
/// Pairs are visited in the collection's natural order. The first pair for
/// which `predicate` returns `false` ends the iteration: later pairs are
/// never visited. An empty collection yields `true` without calling
/// `predicate`.
///
/// # Examples
///
/// ```
/// use fnkit::collection::array_every;
///
/// assert!(array_every(&[2, 4, 6], |value, _index| value % 2 == 0));
/// assert!(!array_every(vec![1, 2, 3], |value, index| value == index + 1 && value < 3));
///
/// let empty: Vec<i32> = Vec::new();
/// assert!(array_every(&empty, |_value, _index| false));
/// ```
pub fn array_every<C, F>(items: C, mut predicate: F) -> bool
where
    C: Keyed,
    F: FnMut(C::Element, C::Key) -> bool,
{
    items
        .into_entries()
        .all(|(key, element)| predicate(element, key))
}
