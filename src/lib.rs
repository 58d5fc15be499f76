//! # fnkit
//!
//! A minimal toolkit of function combinators for Rust.
//!
//! ## Overview
//!
//! The crate provides five small, independent operations over arbitrary
//! callables and ordered collections:
//!
//! - **Invocation**: call a function or construct a value through one
//!   interface ([`invoke::invoke`], [`invoke::Call`], [`invoke::Construct`])
//! - **Composition**: right-to-left pipelines of invocable stages
//!   ([`compose!`], [`compose::compose`])
//! - **Flat mapping**: map and flatten exactly one level ([`collection::flat_map`])
//! - **Universal predicate**: short-circuiting "every" over keyed collections
//!   ([`collection::array_every`])
//! - **Thunks**: zero-argument wrappers that re-invoke or re-construct on each
//!   call ([`thunk::fn_return`], [`thunk::fn_return_new`])
//!
//! The [`dynamic`] module offers a type-erased rendition of invocation and
//! composition for references whose kind is only known at run time.
//!
//! ## Feature Flags
//!
//! - `invoke`: The `Invocable` / `Constructible` traits (required by the others)
//! - `compose`: Function composition
//! - `collection`: `flat_map` and `array_every`
//! - `thunk`: `fn_return` and `fn_return_new`
//! - `dynamic`: Type-erased values, stages and pipelines
//! - `smallvec`: Splice `SmallVec` results in `flat_map`
//! - `tracing`: Emit `trace`-level events from the dynamic layer
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let shout = compose!(
//!     call(|text: String| format!("{text}!")),
//!     call(|name: &str, count: usize| name.repeat(count)),
//! );
//! assert_eq!(shout.invoke(("ha", 3)), "hahaha!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `trace`-level event when the `tracing` feature is enabled.
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($argument)*);
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "invoke")]
    pub use crate::invoke::{
        Call, Construct, Constructible, Invocable, InvokeError, call, construct, invoke,
    };

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "thunk")]
    pub use crate::thunk::*;
}

#[cfg(feature = "invoke")]
pub mod invoke;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "thunk")]
pub mod thunk;

#[cfg(feature = "dynamic")]
pub mod dynamic;
