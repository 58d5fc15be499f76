//! Collection combinators.
//!
//! - [`flat_map`] / [`flat_map_indexed`]: Map every element and flatten the
//!   results exactly one level
//! - [`array_every`]: Test a predicate against every `(element, key)` pair,
//!   stopping at the first failure
//!
//! # Examples
//!
//! ```
//! use fnkit::collection::{array_every, flat_map};
//!
//! let expanded = flat_map(|value: i32| vec![value, value * 10], vec![1, 2, 3]);
//! assert_eq!(expanded, vec![1, 10, 2, 20, 3, 30]);
//!
//! assert!(array_every(&expanded, |value, _index| *value > 0));
//! ```

mod every;
mod flat_map;

pub use every::{Entries, Indexed, Keyed, array_every, entries, indexed};
pub use flat_map::{Scalar, Spread, flat_map, flat_map_indexed};
