//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes invocable
//! stages from right to left, following the mathematical notation for
//! function composition.

/// Composes invocable stages from right to left.
///
/// `compose!(f, g, h)` invoked with `(x, y, z)` is equivalent to
/// `f(g(h(x, y, z)))`.
///
/// Each stage must implement [`Invocable`](crate::invoke::Invocable). Wrap
/// functions with [`call`](crate::invoke::call) and types with
/// [`construct`](crate::invoke::construct).
///
/// # Syntax
///
/// - `compose!()` - Returns [`Passthrough`](crate::compose::Passthrough), which returns its first argument
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `Composed(f, g)`
/// - `compose!(f, g, h, ...)` - Composes any number of stages
///
/// # Type Requirements
///
/// The rightmost stage accepts the caller's argument tuple. Every other stage
/// must accept a one-element tuple holding the output of the stage to its
/// right.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use fnkit::compose;
/// use fnkit::invoke::{Invocable, call};
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(call(add_one), call(double));
/// assert_eq!(composed.invoke((5,)), 11);
/// ```
///
/// ## Only the innermost stage sees every argument
///
/// ```
/// use fnkit::compose;
/// use fnkit::invoke::{Invocable, call};
///
/// let composed = compose!(
///     call(|inner: String| format!("f({inner})")),
///     call(|inner: String| format!("g({inner})")),
///     call(|x: i32, y: i32, z: i32| format!("h({x}, {y}, {z})")),
/// );
/// assert_eq!(composed.invoke((1, 2, 3)), "f(g(h(1, 2, 3)))");
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use fnkit::compose;
/// use fnkit::invoke::{Invocable, call};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(call(f), compose!(call(g), call(h)));
/// let right = compose!(compose!(call(f), call(g)), call(h));
///
/// assert_eq!(left.invoke((10,)), right.invoke((10,)));
/// ```
#[macro_export]
macro_rules! compose {
    // No stages: return the first argument
    () => {
        $crate::compose::Passthrough
    };

    // Single stage: returned as-is
    ($stage:expr $(,)?) => {
        $stage
    };

    // Two or more stages: compose!(f, g, h, ...) = Composed(f, compose!(g, h, ...))
    ($outer_stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::compose::Composed::new($outer_stage, $crate::compose!($($remaining_stages),+))
    };
}
