//! The composed stage and the empty composition.

use crate::invoke::Invocable;

/// Two stages applied right-to-left: `outer(inner(arguments..))`.
///
/// `inner` receives the full argument list; `outer` receives the single value
/// `inner` returns.
///
/// # Examples
///
/// ```
/// use fnkit::compose::Composed;
/// use fnkit::invoke::{Invocable, call};
///
/// let composed = Composed::new(call(|total: i32| total * 10), call(|a: i32, b: i32| a + b));
/// assert_eq!(composed.invoke((1, 2)), 30);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Composed<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Composed<Outer, Inner> {
    /// Composes `outer` after `inner`.
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }

    /// Returns the stage applied last.
    pub const fn outer(&self) -> &Outer {
        &self.outer
    }

    /// Returns the stage applied first.
    pub const fn inner(&self) -> &Inner {
        &self.inner
    }

    /// Splits the composition back into its two stages.
    pub fn into_parts(self) -> (Outer, Inner) {
        (self.outer, self.inner)
    }
}

impl<Arguments, Outer, Inner> Invocable<Arguments> for Composed<Outer, Inner>
where
    Inner: Invocable<Arguments>,
    Outer: Invocable<(Inner::Output,)>,
{
    type Output = Outer::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        self.outer.invoke((self.inner.invoke(arguments),))
    }
}

/// Composes `outer` after `inner`.
///
/// This is the two-stage form of [`compose!`](crate::compose!).
///
/// # Examples
///
/// ```
/// use fnkit::compose::compose;
/// use fnkit::invoke::{Invocable, call};
///
/// let shout = compose(call(|text: String| text.to_uppercase()), call(|name: &str| format!("hi {name}")));
/// assert_eq!(shout.invoke(("bob",)), "HI BOB");
/// ```
#[inline]
pub const fn compose<Outer, Inner>(outer: Outer, inner: Inner) -> Composed<Outer, Inner> {
    Composed::new(outer, inner)
}

/// The composition of zero stages.
///
/// Returns its first argument unchanged and drops the rest. Invoking it with
/// no arguments does not compile.
///
/// # Examples
///
/// ```
/// use fnkit::compose;
/// use fnkit::invoke::Invocable;
///
/// let empty = compose!();
/// assert_eq!(empty.invoke(("first", "second")), "first");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Passthrough;

macro_rules! impl_passthrough_for_arity {
    ($($rest:ident),*) => {
        impl<First, $($rest),*> Invocable<(First, $($rest,)*)> for Passthrough {
            type Output = First;

            #[inline]
            fn invoke(&self, arguments: (First, $($rest,)*)) -> First {
                arguments.0
            }
        }
    };
}

impl_passthrough_for_arity!();
impl_passthrough_for_arity!(B);
impl_passthrough_for_arity!(B, C);
impl_passthrough_for_arity!(B, C, D);
impl_passthrough_for_arity!(B, C, D, E);
impl_passthrough_for_arity!(B, C, D, E, F);
