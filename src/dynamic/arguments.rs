//! Typed extraction of argument lists.

use std::any::Any;

use super::Value;
use crate::invoke::{InvokeError, Result};

/// An argument tuple that can be extracted from a slice of [`Value`]s.
///
/// Implemented for tuples of up to six `Any + Clone` types.
pub trait FromValues: Sized {
    /// The number of values the tuple consumes.
    const ARITY: usize;

    /// Extracts the tuple from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Arity`] when `values` has the wrong length and
    /// [`InvokeError::TypeMismatch`] when a value has the wrong type.
    /// `callee` names the function or type in the error.
    fn from_values(callee: &str, values: &[Value]) -> Result<Self>;
}

fn extract_argument<T: Any + Clone>(callee: &str, position: usize, value: &Value) -> Result<T> {
    value.extract::<T>().ok_or_else(|| {
        InvokeError::type_mismatch(
            callee,
            position,
            std::any::type_name::<T>(),
            value.type_name(),
        )
    })
}

macro_rules! impl_from_values {
    ($arity:literal; $($position:tt $argument_type:ident),*) => {
        impl<$($argument_type: Any + Clone),*> FromValues for ($($argument_type,)*) {
            const ARITY: usize = $arity;

            #[allow(unused_variables)]
            fn from_values(callee: &str, values: &[Value]) -> Result<Self> {
                if values.len() != Self::ARITY {
                    return Err(InvokeError::arity(callee, Self::ARITY, values.len()));
                }
                Ok(($(extract_argument::<$argument_type>(callee, $position, &values[$position])?,)*))
            }
        }
    };
}

impl_from_values!(0;);
impl_from_values!(1; 0 A);
impl_from_values!(2; 0 A, 1 B);
impl_from_values!(3; 0 A, 1 B, 2 C);
impl_from_values!(4; 0 A, 1 B, 2 C, 3 D);
impl_from_values!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
impl_from_values!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
