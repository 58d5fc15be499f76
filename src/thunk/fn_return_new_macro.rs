//! The `fn_return_new!` macro.

/// Wraps a type and its constructor arguments into a zero-argument callable
/// that constructs a new instance on every call.
///
/// `fn_return_new!(Type, a, b)` is shorthand for
/// `fn_return_new::<Type, _>((a, b))`.
///
/// # Examples
///
/// ```
/// use fnkit::fn_return_new;
/// use fnkit::invoke::Constructible;
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl Constructible<(i32, i32)> for Point {
///     fn construct((x, y): (i32, i32)) -> Self { Self { x, y } }
/// }
///
/// let origin = fn_return_new!(Point, 0, 0);
/// assert_eq!(origin(), Point { x: 0, y: 0 });
///
/// let empty = fn_return_new!(String);
/// assert_eq!(empty(), "");
/// ```
#[macro_export]
macro_rules! fn_return_new {
    ($constructed:ty $(,)?) => {
        $crate::thunk::fn_return_new::<$constructed, ()>(())
    };

    ($constructed:ty, $($argument:expr),+ $(,)?) => {
        $crate::thunk::fn_return_new::<$constructed, _>(($($argument,)+))
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    #[test]
    fn test_fn_return_new_macro_single_argument() {
        let shared = fn_return_new!(Arc<u8>, 3);
        assert_eq!(*shared(), 3);
        assert!(!Arc::ptr_eq(&shared(), &shared()));
    }
}
