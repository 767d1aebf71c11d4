//! This crate offers [`DynArray`], a growable array with the method surface
//! of a scripting-language array: `push`/`pop`/`shift`/`unshift`, slicing
//! with negative indices, searching, `map`/`filter`/`reduce` style traversal,
//! `join` and an in-place randomized sort.
//!
//! The container is generic. Arrays that mix element types use [`Value`],
//! which carries strings, numbers, booleans, nested arrays and objects, with
//! [`Value::NULL`] as the placeholder for absent elements.
//!
//! ```
//! use jsarray::{values, DynArray, Value};
//!
//! let mut arr = values!["str1", 2, true];
//! arr.push(Value::from(4.5));
//! assert_eq!(arr.join(", "), "str1, 2, true, 4.5");
//!
//! let nums: DynArray<i64> = (1..=6).collect();
//! let evens = nums.filter(|v, _, _| v % 2 == 0);
//! assert_eq!(evens.as_slice(), &[2, 4, 6]);
//! ```
//!
//! Indices are signed: a negative index `-k` counts from the end, and
//! [`LAST_ELEMENT`] names the final element. Operations that can fail return
//! an [`ArrayError`] rather than panicking.
#![deny(missing_docs)]

mod macros;

pub mod array;
pub mod error;
pub mod number;
mod sort;
mod traverse;
pub mod value;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use array::{DynArray, LAST_ELEMENT, NOT_FOUND};
pub use error::ArrayError;
pub use number::Number;
pub use value::{Object, Value, ValueType};

#[cfg(test)]
#[global_allocator]
static ALLOCATOR: mockalloc::Mockalloc<std::alloc::System> = mockalloc::Mockalloc(std::alloc::System);
