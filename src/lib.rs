#![no_std]

//! `DArray`: a growable contiguous array over a closed set of numeric kinds.
//!
//! A `DArray<T>` stores `i32`, `f32` or `f64` values in one contiguous buffer and
//! provides append, ordered insertion and removal, indexed access, linear and
//! binary search, in-place reversal and sorting. Every fallible operation
//! returns a [`DArrayError`]; a failed operation leaves the array unchanged.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Capacity
//!
//! The buffer grows by half of its capacity (`floor(capacity * 1.5)`), and by
//! one slot when that would not increase it (capacity 1 grows to 2). `append`
//! grows when the buffer is full; `insert` grows when fewer than two slots are
//! free. `shrink` reallocates down to exactly `len()` elements.
//!
//! ```
//! # use darray::DArray;
//! let mut array = DArray::<i32>::new(5).unwrap();
//! for value in [10, 20, 30, 40, 50, 60, 70] {
//!     array.append(value).unwrap();
//! }
//! assert_eq!(array.len(), 7);
//! assert_eq!(array.capacity(), 7); // 5 -> 7
//!
//! array.set(3, 99).unwrap();
//! assert_eq!(array.pop(), Ok(70));
//! array.insert(2, 55).unwrap(); // 7 -> 10
//! assert_eq!(array.as_slice(), &[10, 20, 55, 30, 99, 50, 60]);
//! assert_eq!(array.find(55), Ok(2));
//!
//! array.shrink().unwrap();
//! assert_eq!(array.capacity(), array.len());
//! ```
//!
//! # Search and Ordering
//!
//! `sort` and `binary_search` share one three-way comparator per element kind.
//! `binary_search` sorts first unless told the array is already sorted:
//!
//! ```
//! # use darray::DArray;
//! let mut array = DArray::from_slice(&[5.5f64, 3.25, 1.0]).unwrap();
//! array.reverse();
//! assert_eq!(array.as_slice(), &[1.0, 3.25, 5.5]);
//!
//! array.set(0, 9.0).unwrap();
//! assert_eq!(array.binary_search(9.0, false), Ok(2));
//! assert_eq!(array.as_slice(), &[3.25, 5.5, 9.0]);
//! ```
//!
//! # Lifecycle
//!
//! Dropping the array releases its buffer. `DArray::destroy` does the same
//! through a handle slot and reports a second destroy:
//!
//! ```
//! # use darray::{DArray, DArrayError};
//! let mut handle = Some(DArray::<f32>::new(3).unwrap());
//! assert!(DArray::destroy(&mut handle).is_ok());
//! assert!(handle.is_none());
//! assert_eq!(DArray::destroy(&mut handle), Err(DArrayError::InvalidHandle));
//! ```
//!
//! # Logging
//!
//! Growth and shrink are reported at `debug` level through the `log` facade;
//! failed allocations at `warn`. Install any `log` backend to see them.

extern crate alloc;

mod core;
mod element;
mod error;
mod iter;
mod search;

// Re-export public types and traits
pub use crate::core::DArray;
pub use element::{Element, ElementKind};
pub use error::{DArrayError, Result};
pub use iter::{DArrayIter, DArrayRevIter};
