//! Thunks: zero-argument callables that defer evaluation.
//!
//! - [`fn_return`]: Re-invokes a producer on every call
//! - [`fn_return_new`] / [`fn_return_new!`]: Constructs a fresh instance on
//!   every call from arguments captured once
//!
//! Both capture what they wrap by value. A thunk never observes later
//! changes to the binding it was created from.
//!
//! # Examples
//!
//! ```
//! use fnkit::fn_return_new;
//! use fnkit::invoke::Constructible;
//!
//! #[derive(Debug, PartialEq)]
//! struct Cart { owner: String, items: Vec<String> }
//!
//! impl Constructible<(String,)> for Cart {
//!     fn construct((owner,): (String,)) -> Self { Self { owner, items: Vec::new() } }
//! }
//!
//! let new_cart = fn_return_new!(Cart, "alice".to_string());
//! let mut first = new_cart();
//! let second = new_cart();
//!
//! first.items.push("book".to_string());
//! assert!(second.items.is_empty());
//! assert_eq!(second.owner, "alice");
//! ```

mod fn_return_new_macro;

use crate::invoke::Constructible;

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::fn_return_new;

/// Returns a zero-argument callable that calls `producer` every time it is
/// called.
///
/// # Examples
///
/// ```
/// use fnkit::thunk::fn_return;
/// use std::cell::Cell;
///
/// let counter = Cell::new(0);
/// let next = fn_return(|| {
///     counter.set(counter.get() + 1);
///     counter.get()
/// });
///
/// assert_eq!(next(), 1);
/// assert_eq!(next(), 2);
/// ```
#[inline]
pub fn fn_return<F, R>(producer: F) -> impl Fn() -> R
where
    F: Fn() -> R,
{
    producer
}

/// Returns a zero-argument callable that constructs a new `T` from
/// `arguments` every time it is called.
///
/// `arguments` is captured once and cloned for every construction, so each
/// instance is independent of the others.
///
/// # Examples
///
/// ```
/// use fnkit::thunk::fn_return_new;
/// use std::rc::Rc;
///
/// let fresh = fn_return_new::<Rc<Vec<i32>>, _>((vec![1, 2],));
/// let first = fresh();
/// let second = fresh();
///
/// assert_eq!(first, second);
/// assert!(!Rc::ptr_eq(&first, &second));
/// ```
#[inline]
pub fn fn_return_new<T, Arguments>(arguments: Arguments) -> impl Fn() -> T
where
    T: Constructible<Arguments>,
    Arguments: Clone,
{
    move || T::construct(arguments.clone())
}
