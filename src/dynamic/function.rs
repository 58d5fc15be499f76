//! Type-erased callables and constructors.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::{FromValues, Value};
use crate::invoke::{Constructible, InvokeError, Result};

// Receives the callee name reported in errors, then the arguments.
type Body = dyn Fn(&str, &[Value]) -> Result<Value> + Send + Sync;

/// A type-erased function over [`Value`]s.
///
/// A `DynFunction` either has a fixed arity, checked before every call, or
/// is variadic and accepts any number of arguments.
///
/// # Examples
///
/// ```
/// use fnkit::dynamic::{DynFunction, Value};
///
/// let add = DynFunction::new(|first: i32, second: i32| first + second).with_name("add");
/// assert_eq!(add.arity(), Some(2));
///
/// let sum = add.call(&[Value::new(2_i32), Value::new(3_i32)]).unwrap();
/// assert_eq!(sum.extract::<i32>(), Some(5));
///
/// let error = add.call(&[Value::new(2_i32)]).unwrap_err();
/// assert_eq!(error.to_string(), "add: expected 2 argument(s), got 1");
/// ```
#[derive(Clone)]
pub struct DynFunction {
    name: Cow<'static, str>,
    arity: Option<usize>,
    body: Arc<Body>,
}

impl DynFunction {
    /// Erases a typed function of up to six arguments.
    pub fn new<F, Marker>(function: F) -> Self
    where
        F: IntoDynFunction<Marker>,
    {
        function.into_dyn_function()
    }

    /// Creates a function that accepts any number of arguments.
    ///
    /// `body` receives the argument slice as-is and is responsible for
    /// validating it.
    pub fn variadic<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: None,
            body: Arc::new(move |_: &str, values: &[Value]| body(values)),
        }
    }

    /// Replaces the name reported in errors.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the name reported in errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of accepted arguments, or `None` if variadic.
    pub const fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Calls the function with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Arity`] when a fixed-arity function receives
    /// the wrong number of arguments and [`InvokeError::TypeMismatch`] when
    /// an argument has the wrong type.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        if let Some(expected) = self.arity
            && expected != arguments.len()
        {
            return Err(InvokeError::arity(&*self.name, expected, arguments.len()));
        }
        (self.body)(&self.name, arguments)
    }
}

impl fmt::Debug for DynFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DynFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Conversion of a typed function into a [`DynFunction`].
///
/// `Marker` is the function's argument tuple; it only exists to keep the
/// implementations for different arities apart. Implemented for every
/// `Fn(A, B, ..) -> R` of up to six arguments whose argument types are
/// `Any + Clone` and whose return type is `Any + Send + Sync`.
pub trait IntoDynFunction<Marker> {
    /// Erases the function's types.
    fn into_dyn_function(self) -> DynFunction;
}

macro_rules! impl_into_dyn_function {
    ($($position:tt $argument_type:ident),*) => {
        impl<Function, Return, $($argument_type),*> IntoDynFunction<($($argument_type,)*)> for Function
        where
            Function: Fn($($argument_type),*) -> Return + Send + Sync + 'static,
            Return: Any + Send + Sync,
            ($($argument_type,)*): FromValues + 'static,
        {
            fn into_dyn_function(self) -> DynFunction {
                DynFunction {
                    name: Cow::Borrowed(std::any::type_name::<Function>()),
                    arity: Some(<($($argument_type,)*) as FromValues>::ARITY),
                    body: Arc::new(move |name: &str, values: &[Value]| -> Result<Value> {
                        #[allow(unused_variables)]
                        let arguments = <($($argument_type,)*) as FromValues>::from_values(name, values)?;
                        Ok(Value::new(self($(arguments.$position),*)))
                    }),
                }
            }
        }
    };
}

impl_into_dyn_function!();
impl_into_dyn_function!(0 A);
impl_into_dyn_function!(0 A, 1 B);
impl_into_dyn_function!(0 A, 1 B, 2 C);
impl_into_dyn_function!(0 A, 1 B, 2 C, 3 D);
impl_into_dyn_function!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_dyn_function!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

/// A type-erased constructor.
///
/// Every call to [`TypeFactory::construct`] builds a new instance.
///
/// # Examples
///
/// ```
/// use fnkit::dynamic::{TypeFactory, Value};
///
/// let factory = TypeFactory::of::<Box<String>, (String,)>();
/// let built = factory.construct(&[Value::new("text".to_string())]).unwrap();
/// assert_eq!(*built.extract::<Box<String>>().unwrap(), "text");
/// ```
#[derive(Clone)]
pub struct TypeFactory {
    type_name: &'static str,
    arity: usize,
    body: Arc<Body>,
}

impl TypeFactory {
    /// Creates a factory constructing `T` from the argument tuple `Arguments`.
    pub fn of<T, Arguments>() -> Self
    where
        T: Constructible<Arguments> + Any + Send + Sync,
        Arguments: FromValues + 'static,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            arity: Arguments::ARITY,
            body: Arc::new(|type_name: &str, values: &[Value]| -> Result<Value> {
                let arguments = Arguments::from_values(type_name, values)?;
                Ok(Value::new(T::construct(arguments)))
            }),
        }
    }

    /// Returns the name of the constructed type.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the number of constructor arguments.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Constructs a new instance from `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Arity`] or [`InvokeError::TypeMismatch`] when
    /// `arguments` does not match the constructor.
    pub fn construct(&self, arguments: &[Value]) -> Result<Value> {
        (self.body)(self.type_name, arguments)
    }
}

impl fmt::Debug for TypeFactory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TypeFactory")
            .field("type_name", &self.type_name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_nullary_function() {
        let answer = DynFunction::new(|| 42_u8);
        assert_eq!(answer.arity(), Some(0));
        assert_eq!(answer.call(&[]).unwrap().extract::<u8>(), Some(42));
    }

    #[rstest]
    fn test_type_mismatch_names_callee() {
        let negate = DynFunction::new(|value: i64| -value).with_name("negate");
        let error = negate.call(&[Value::new("nope")]).unwrap_err();
        assert_eq!(
            error,
            InvokeError::type_mismatch("negate", 0, "i64", "&str")
        );
    }

    #[rstest]
    fn test_variadic_receives_all_arguments() {
        let count = DynFunction::variadic("count", |values| Ok(Value::new(values.len())));
        let result = count
            .call(&[Value::new(1_i32), Value::new(2_i32), Value::new(3_i32)])
            .unwrap();
        assert_eq!(result.extract::<usize>(), Some(3));
    }

    #[rstest]
    fn test_factory_rejects_wrong_arity() {
        let factory = TypeFactory::of::<Vec<u8>, ()>();
        let error = factory.construct(&[Value::new(1_u8)]).unwrap_err();
        assert!(matches!(error, InvokeError::Arity { expected: 0, actual: 1, .. }));
    }
}
