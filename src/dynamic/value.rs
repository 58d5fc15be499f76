//! Type-erased values.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A cheaply clonable, type-erased value.
///
/// Cloning a `Value` shares the underlying allocation. Extracting a typed
/// value clones it out, so callers never observe each other's changes.
///
/// # Examples
///
/// ```
/// use fnkit::dynamic::Value;
///
/// let value = Value::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.extract::<i32>(), Some(42));
/// assert_eq!(value.extract::<String>(), None);
/// ```
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Erases the type of `value`.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the name of the erased type.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the erased type is `T`.
    pub fn is<T: Any>(&self) -> bool {
        (*self.inner).is::<T>()
    }

    /// Returns a reference to the value if its type is `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Returns a clone of the value if its type is `T`.
    pub fn extract<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Unwraps the value if its type is `T`, cloning only when the
    /// allocation is shared. Returns `self` unchanged otherwise.
    ///
    /// # Errors
    ///
    /// Returns the original `Value` when its type is not `T`.
    pub fn into_inner<T>(self) -> Result<T, Self>
    where
        T: Any + Send + Sync + Clone,
    {
        let type_name = self.type_name;
        self.inner
            .downcast::<T>()
            .map(Arc::unwrap_or_clone)
            .map_err(|inner| Self { inner, type_name })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Value({})", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_clone_shares_allocation() {
        let value = Value::new(String::from("shared"));
        let copy = value.clone();
        assert!(std::ptr::eq(
            value.downcast_ref::<String>().unwrap(),
            copy.downcast_ref::<String>().unwrap()
        ));
    }

    #[rstest]
    fn test_into_inner_wrong_type_returns_value() {
        let value = Value::new(1_u8);
        let error = value.into_inner::<u16>().unwrap_err();
        assert!(error.is::<u8>());
    }

    #[rstest]
    fn test_into_inner_unique_value() {
        assert_eq!(Value::new(vec![1, 2]).into_inner::<Vec<i32>>().unwrap(), vec![1, 2]);
    }

    #[rstest]
    fn test_debug_shows_type_name() {
        assert_eq!(format!("{:?}", Value::new(true)), "Value(bool)");
    }
}
