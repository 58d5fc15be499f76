//! Error types for run-time invocation.
//!
//! The statically typed surface of the crate never fails on its own: a
//! mismatched argument list is rejected by the compiler. These errors are
//! produced by the [`crate::dynamic`] layer, where references and arguments
//! are only known at run time.

use thiserror::Error;

/// Represents a failure to invoke a type-erased reference.
///
/// Errors raised by the user's own functions are never wrapped in this type;
/// they flow through as the function's return value.
///
/// # Examples
///
/// ```rust
/// use fnkit::invoke::InvokeError;
///
/// let error = InvokeError::Arity {
///     callee: "greet".to_string(),
///     expected: 1,
///     actual: 2,
/// };
/// assert_eq!(format!("{error}"), "greet: expected 1 argument(s), got 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// The reference is neither a callable nor a constructible type.
    #[error("value of type `{type_name}` is neither callable nor constructible")]
    NotInvocable {
        /// The type name of the offending reference.
        type_name: &'static str,
    },

    /// The argument list has the wrong length.
    #[error("{callee}: expected {expected} argument(s), got {actual}")]
    Arity {
        /// The name of the function or type being invoked.
        callee: String,
        /// The number of parameters the callee accepts.
        expected: usize,
        /// The number of arguments supplied.
        actual: usize,
    },

    /// An argument has the wrong type.
    #[error("{callee}: argument {position} expected `{expected}`, got `{actual}`")]
    TypeMismatch {
        /// The name of the function or type being invoked.
        callee: String,
        /// The zero-based position of the argument.
        position: usize,
        /// The parameter type the callee accepts.
        expected: &'static str,
        /// The type of the supplied argument.
        actual: &'static str,
    },

    /// A pipeline without stages was called without arguments.
    #[error("empty pipeline called without arguments")]
    EmptyArguments,
}

impl InvokeError {
    /// Creates an [`InvokeError::Arity`] error.
    pub fn arity(callee: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::Arity {
            callee: callee.into(),
            expected,
            actual,
        }
    }

    /// Creates an [`InvokeError::TypeMismatch`] error.
    pub fn type_mismatch(
        callee: impl Into<String>,
        position: usize,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            callee: callee.into(),
            position,
            expected,
            actual,
        }
    }
}

/// A specialized `Result` for run-time invocation.
pub type Result<T> = std::result::Result<T, InvokeError>;
