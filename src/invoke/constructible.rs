//! [`Constructible`] implementations for standard library types.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

use super::Constructible;

// Wrappers built from the value they hold.
macro_rules! impl_constructible_wrapper {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T> Constructible<(T,)> for $wrapper<T> {
                #[inline]
                fn construct((value,): (T,)) -> Self {
                    $wrapper::new(value)
                }
            }
        )*
    };
}

impl_constructible_wrapper!(Box, Rc, Arc, Cell, RefCell, Mutex, RwLock);

impl Constructible<()> for String {
    #[inline]
    fn construct((): ()) -> Self {
        Self::new()
    }
}

impl<'a> Constructible<(&'a str,)> for String {
    #[inline]
    fn construct((text,): (&'a str,)) -> Self {
        Self::from(text)
    }
}

impl<T> Constructible<()> for Vec<T> {
    #[inline]
    fn construct((): ()) -> Self {
        Self::new()
    }
}

impl<T> Constructible<(usize,)> for Vec<T> {
    #[inline]
    fn construct((capacity,): (usize,)) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T> Constructible<()> for VecDeque<T> {
    #[inline]
    fn construct((): ()) -> Self {
        Self::new()
    }
}

impl<K, V> Constructible<()> for BTreeMap<K, V> {
    #[inline]
    fn construct((): ()) -> Self {
        Self::new()
    }
}
