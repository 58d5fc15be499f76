//! Uniform invocation: calling a function or constructing a value.
//!
//! This module provides the building block every other combinator in the
//! crate is written against. An *invocable* is anything that can be applied
//! to an argument list; an argument list is a tuple.
//!
//! # Overview
//!
//! - [`Invocable`]: A stage that can be applied to an argument tuple
//! - [`Constructible`]: A type that can be built from an argument tuple
//! - [`Call`] / [`call`]: Tags a function as "call this"
//! - [`Construct`] / [`construct`]: Tags a type as "construct this"
//! - [`invoke`]: Applies an invocable to its arguments
//!
//! # Call or Construct
//!
//! Whether a stage calls or constructs is decided by the caller, at the type
//! level, when the stage is created. There is no run-time guessing: a
//! [`Call`] always calls and a [`Construct`] always constructs. Callers that
//! only learn the kind of a reference at run time should use
//! [`crate::dynamic`] instead.
//!
//! Passing the wrong number of arguments, or arguments of the wrong type, is
//! a compile error.
//!
//! # Examples
//!
//! ## Calling a function
//!
//! ```
//! use fnkit::invoke::{call, invoke};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! assert_eq!(invoke(&call(add), (2, 3)), 5);
//! ```
//!
//! ## Constructing a value
//!
//! ```
//! use fnkit::invoke::{Constructible, construct, invoke};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! impl Constructible<(i32, i32)> for Point {
//!     fn construct((x, y): (i32, i32)) -> Self { Self { x, y } }
//! }
//!
//! assert_eq!(invoke(&construct::<Point>(), (1, 2)), Point { x: 1, y: 2 });
//! ```

mod constructible;
mod error;
mod tuples;

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

pub use error::{InvokeError, Result};

/// A stage that can be applied to an argument list.
///
/// `Arguments` is a tuple: `()` for no arguments, `(A,)` for one argument,
/// `(A, B)` for two, and so on.
///
/// # Examples
///
/// ```
/// use fnkit::invoke::{Invocable, call};
///
/// let greet = call(|name: &str| format!("hello, {name}"));
/// assert_eq!(greet.invoke(("world",)), "hello, world");
/// ```
pub trait Invocable<Arguments> {
    /// The value produced by invoking this stage.
    type Output;

    /// Applies this stage to `arguments`.
    fn invoke(&self, arguments: Arguments) -> Self::Output;

    /// Converts this stage into a plain closure over the argument tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnkit::invoke::{Invocable, call};
    ///
    /// let double = call(|value: i32| value * 2).into_fn();
    /// let doubled: Vec<i32> = vec![(1,), (2,), (3,)].into_iter().map(double).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn into_fn(self) -> impl Fn(Arguments) -> Self::Output
    where
        Self: Sized,
    {
        move |arguments| self.invoke(arguments)
    }
}

/// A type that can be constructed from an argument list.
///
/// This is the "constructor" half of invocation. Implement it once per
/// accepted argument shape.
///
/// # Examples
///
/// ```
/// use fnkit::invoke::Constructible;
///
/// struct Account { owner: String, balance: u64 }
///
/// impl Constructible<(String,)> for Account {
///     fn construct((owner,): (String,)) -> Self {
///         Self { owner, balance: 0 }
///     }
/// }
///
/// impl Constructible<(String, u64)> for Account {
///     fn construct((owner, balance): (String, u64)) -> Self {
///         Self { owner, balance }
///     }
/// }
///
/// let opened = Account::construct(("alice".to_string(), 10));
/// assert_eq!(opened.balance, 10);
/// ```
pub trait Constructible<Arguments>: Sized {
    /// Builds a new instance from `arguments`.
    fn construct(arguments: Arguments) -> Self;
}

/// Tags a function as a stage that is called with its arguments.
///
/// `Call<F>` is [`Invocable`] for every `F: Fn(A, B, ..) -> R` with up to six
/// parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Call<F>(pub F);

impl<F> Call<F> {
    /// Wraps `function` as a call stage.
    pub const fn new(function: F) -> Self {
        Self(function)
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.0
    }
}

/// Tags a type as a stage that is constructed from its arguments.
///
/// `Construct<T>` is [`Invocable`] for every argument tuple `Args` where
/// `T: Constructible<Args>`. Every invocation builds a new instance.
pub struct Construct<T>(PhantomData<fn() -> T>);

impl<T> Construct<T> {
    /// Creates a construct stage for `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Construct<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Construct<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Construct<T> {}

impl<T> fmt::Debug for Construct<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Construct<{}>", std::any::type_name::<T>())
    }
}

impl<T, Arguments> Invocable<Arguments> for Construct<T>
where
    T: Constructible<Arguments>,
{
    type Output = T;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> T {
        T::construct(arguments)
    }
}

/// Wraps `function` as a [`Call`] stage.
///
/// # Examples
///
/// ```
/// use fnkit::invoke::{call, invoke};
///
/// assert_eq!(invoke(&call(|| 42), ()), 42);
/// ```
#[inline]
pub const fn call<F>(function: F) -> Call<F> {
    Call(function)
}

/// Creates a [`Construct`] stage for `T`.
///
/// # Examples
///
/// ```
/// use fnkit::invoke::{construct, invoke};
///
/// let boxed: Box<i32> = invoke(&construct::<Box<i32>>(), (7,));
/// assert_eq!(*boxed, 7);
/// ```
#[inline]
pub const fn construct<T>() -> Construct<T> {
    Construct::new()
}

/// Applies `invocable` to `arguments`.
///
/// A [`Call`] stage calls its function; a [`Construct`] stage builds a new
/// instance. Composed stages apply each of their stages in turn.
///
/// # Examples
///
/// ```
/// use fnkit::invoke::{call, construct, invoke};
///
/// let length = invoke(&call(|text: String| text.len()), ("four".to_string(),));
/// assert_eq!(length, 4);
///
/// let text: String = invoke(&construct::<String>(), ());
/// assert!(text.is_empty());
/// ```
#[inline]
pub fn invoke<I, Arguments>(invocable: &I, arguments: Arguments) -> I::Output
where
    I: Invocable<Arguments> + ?Sized,
{
    invocable.invoke(arguments)
}

// =============================================================================
// Forwarding implementations
// =============================================================================

impl<I, Arguments> Invocable<Arguments> for &I
where
    I: Invocable<Arguments> + ?Sized,
{
    type Output = I::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        (**self).invoke(arguments)
    }
}

impl<I, Arguments> Invocable<Arguments> for Box<I>
where
    I: Invocable<Arguments> + ?Sized,
{
    type Output = I::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        (**self).invoke(arguments)
    }
}

impl<I, Arguments> Invocable<Arguments> for Rc<I>
where
    I: Invocable<Arguments> + ?Sized,
{
    type Output = I::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        (**self).invoke(arguments)
    }
}

impl<I, Arguments> Invocable<Arguments> for Arc<I>
where
    I: Invocable<Arguments> + ?Sized,
{
    type Output = I::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        (**self).invoke(arguments)
    }
}
