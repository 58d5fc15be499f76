//! Type-erased invocation and composition.
//!
//! The statically typed [`crate::invoke`] and [`crate::compose`] modules
//! require the caller to know, at compile time, whether a stage calls or
//! constructs and what its argument types are. This module covers the
//! remaining case: references and arguments whose types are only known at
//! run time.
//!
//! # Overview
//!
//! - [`Value`]: A type-erased, cheaply clonable value
//! - [`DynFunction`]: A type-erased function with a checked arity
//! - [`TypeFactory`]: A type-erased constructor
//! - [`Stage`]: Either [`Stage::Call`] or [`Stage::Construct`]
//! - [`invoke`]: Resolves a [`Value`] reference and applies it
//! - [`compose`] / [`Pipeline`]: Right-to-left composition of stages
//! - [`fn_return`] / [`fn_return_new`]: Dynamic thunks
//!
//! # Errors
//!
//! Every operation returns [`InvokeError`](crate::invoke::InvokeError) for
//! references that are not invocable and for argument lists of the wrong
//! length or type. Errors are returned to the caller as-is; nothing is
//! retried or recovered.
//!
//! # Examples
//!
//! ```
//! use fnkit::dynamic::{DynFunction, TypeFactory, Value, invoke};
//! use fnkit::invoke::InvokeError;
//!
//! let references = [
//!     Value::new(DynFunction::new(|count: usize| "ab".repeat(count))),
//!     Value::new(TypeFactory::of::<Box<usize>, (usize,)>()),
//! ];
//!
//! let repeated = invoke(&references[0], &[Value::new(2_usize)]).unwrap();
//! assert_eq!(repeated.extract::<String>().unwrap(), "abab");
//!
//! let boxed = invoke(&references[1], &[Value::new(2_usize)]).unwrap();
//! assert_eq!(*boxed.extract::<Box<usize>>().unwrap(), 2);
//!
//! let error = invoke(&Value::new("not callable"), &[]).unwrap_err();
//! assert!(matches!(error, InvokeError::NotInvocable { .. }));
//! ```

mod arguments;
mod function;
mod pipeline;
mod stage;
mod value;

pub use arguments::FromValues;
pub use function::{DynFunction, IntoDynFunction, TypeFactory};
pub use pipeline::{Pipeline, compose, fn_return, fn_return_new};
pub use stage::Stage;
pub use value::Value;

use crate::invoke::{InvokeError, Result};

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(DynFunction: Send, Sync, Clone);
static_assertions::assert_impl_all!(TypeFactory: Send, Sync, Clone);
static_assertions::assert_impl_all!(Stage: Send, Sync, Clone);
static_assertions::assert_impl_all!(Pipeline: Send, Sync, Clone);

/// Resolves `reference` and applies it to `arguments`.
///
/// The kind of `reference` is inspected on every call:
///
/// - a [`TypeFactory`] constructs a new instance,
/// - a [`DynFunction`], [`Stage`] or [`Pipeline`] is called,
/// - anything else fails with [`InvokeError::NotInvocable`].
///
/// # Errors
///
/// Returns [`InvokeError::NotInvocable`] when `reference` is neither
/// callable nor constructible, and [`InvokeError::Arity`] or
/// [`InvokeError::TypeMismatch`] when `arguments` does not fit it.
pub fn invoke(reference: &Value, arguments: &[Value]) -> Result<Value> {
    if let Some(factory) = reference.downcast_ref::<TypeFactory>() {
        trace_event!(
            target: "fnkit::dynamic",
            type_name = factory.type_name(),
            arguments = arguments.len(),
            "resolved reference to constructor"
        );
        return factory.construct(arguments);
    }
    if let Some(function) = reference.downcast_ref::<DynFunction>() {
        trace_event!(
            target: "fnkit::dynamic",
            function = function.name(),
            arguments = arguments.len(),
            "resolved reference to function"
        );
        return function.call(arguments);
    }
    if let Some(stage) = reference.downcast_ref::<Stage>() {
        return stage.invoke(arguments);
    }
    if let Some(pipeline) = reference.downcast_ref::<Pipeline>() {
        return pipeline.call(arguments);
    }
    Err(InvokeError::NotInvocable {
        type_name: reference.type_name(),
    })
}
