//! The call-or-construct tagged stage.

use std::any::Any;

use super::{DynFunction, FromValues, IntoDynFunction, TypeFactory, Value};
use crate::invoke::{Constructible, InvokeError, Result};

/// One stage of a dynamic pipeline: either a function to call or a type to
/// construct.
///
/// # Examples
///
/// ```
/// use fnkit::dynamic::{Stage, Value};
///
/// let length = Stage::call(|text: String| text.len());
/// let result = length.invoke(&[Value::new("four".to_string())]).unwrap();
/// assert_eq!(result.extract::<usize>(), Some(4));
///
/// let empty = Stage::construct::<Vec<u8>, ()>();
/// assert_eq!(empty.invoke(&[]).unwrap().extract::<Vec<u8>>(), Some(Vec::new()));
/// ```
#[derive(Clone, Debug)]
pub enum Stage {
    /// Calls the function with the stage's arguments.
    Call(DynFunction),
    /// Constructs a new instance from the stage's arguments.
    Construct(TypeFactory),
}

impl Stage {
    /// Creates a call stage from a typed function.
    pub fn call<F, Marker>(function: F) -> Self
    where
        F: IntoDynFunction<Marker>,
    {
        Self::Call(DynFunction::new(function))
    }

    /// Creates a construct stage for `T`.
    pub fn construct<T, Arguments>() -> Self
    where
        T: Constructible<Arguments> + Any + Send + Sync,
        Arguments: FromValues + 'static,
    {
        Self::Construct(TypeFactory::of::<T, Arguments>())
    }

    /// Returns the function name or constructed type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Call(function) => function.name(),
            Self::Construct(factory) => factory.type_name(),
        }
    }

    /// Applies the stage to `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Arity`] or [`InvokeError::TypeMismatch`] when
    /// `arguments` does not fit the stage.
    pub fn invoke(&self, arguments: &[Value]) -> Result<Value> {
        match self {
            Self::Call(function) => function.call(arguments),
            Self::Construct(factory) => factory.construct(arguments),
        }
    }
}

impl From<DynFunction> for Stage {
    fn from(function: DynFunction) -> Self {
        Self::Call(function)
    }
}

impl From<TypeFactory> for Stage {
    fn from(factory: TypeFactory) -> Self {
        Self::Construct(factory)
    }
}

impl TryFrom<&Value> for Stage {
    type Error = InvokeError;

    /// Resolves a type-erased reference into a stage.
    ///
    /// A [`TypeFactory`] becomes a construct stage; a [`DynFunction`],
    /// [`Stage`] or [`Pipeline`](super::Pipeline) becomes a call stage.
    fn try_from(reference: &Value) -> Result<Self> {
        if let Some(function) = reference.downcast_ref::<DynFunction>() {
            return Ok(Self::Call(function.clone()));
        }
        if let Some(stage) = reference.downcast_ref::<Self>() {
            return Ok(stage.clone());
        }
        if let Some(pipeline) = reference.downcast_ref::<super::Pipeline>() {
            return Ok(pipeline.clone().into_stage());
        }
        if let Some(factory) = reference.downcast_ref::<TypeFactory>() {
            return Ok(Self::Construct(factory.clone()));
        }
        Err(InvokeError::NotInvocable {
            type_name: reference.type_name(),
        })
    }
}
