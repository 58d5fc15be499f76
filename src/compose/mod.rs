//! Function composition.
//!
//! This module composes [`Invocable`](crate::invoke::Invocable) stages into
//! a single stage that applies them right-to-left, following mathematical
//! notation.
//!
//! # Overview
//!
//! - [`compose!`]: Compose any number of stages right-to-left
//! - [`compose()`]: Compose exactly two stages
//! - [`Composed`]: The stage produced by composition
//! - [`Passthrough`]: The empty composition, returning its first argument
//!
//! # Semantics
//!
//! `compose!(f, g, h)` applied to `(x, y, z)` computes `f(g(h(x, y, z)))`.
//! Only the innermost stage `h` receives the full argument list; every other
//! stage receives exactly one argument, the result of the stage to its right.
//!
//! Stages are moved into the composed value. The composition is an immutable
//! snapshot: nothing done to the original bindings afterwards is observed.
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use fnkit::compose;
//! use fnkit::invoke::{Invocable, call};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(call(add_one), call(double));
//! assert_eq!(composed.invoke((5,)), 11); // add_one(double(5)) = add_one(10) = 11
//! ```
//!
//! ## Mixing calls and constructions
//!
//! ```
//! use fnkit::compose;
//! use fnkit::invoke::{Constructible, Invocable, call, construct};
//!
//! #[derive(Debug, PartialEq)]
//! struct Celsius(f64);
//!
//! impl Constructible<(f64,)> for Celsius {
//!     fn construct((degrees,): (f64,)) -> Self { Self(degrees) }
//! }
//!
//! let from_fahrenheit = compose!(
//!     construct::<Celsius>(),
//!     call(|fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0),
//! );
//! assert_eq!(from_fahrenheit.invoke((212.0,)), Celsius(100.0));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(Passthrough, f) == f`
//! - **Right Identity**: `compose!(f, Passthrough) == f` for single-argument `f`

mod compose_macro;
mod composed;

pub use composed::{Composed, Passthrough, compose};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::compose;
