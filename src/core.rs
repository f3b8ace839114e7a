use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace, warn};

use crate::element::{Element, ElementKind};
use crate::error::{DArrayError, Result};
use crate::iter::{DArrayIter, DArrayRevIter};

const DEFAULT_CAPACITY: usize = 8;

/// Capacity after one growth step: `floor(capacity * 1.5)`, or `capacity + 1`
/// when that does not increase. `None` if the next capacity overflows `usize`.
pub(crate) fn grown_capacity(capacity: usize) -> Option<usize> {
    let candidate = capacity.checked_add(capacity >> 1)?;
    if candidate > capacity {
        Some(candidate)
    } else {
        capacity.checked_add(1)
    }
}

fn allocation_failure(requested: usize) -> DArrayError {
    warn!("darray: unable to allocate storage for {requested} elements");
    DArrayError::AllocationFailure { requested }
}

/// A growable contiguous array of one numeric element kind.
///
/// Every slot of `buffer` is backed storage: `buffer.len()` is the capacity and
/// only `[0, length)` is live. Slots past `length` keep whatever was last
/// written there (`pop` and `clear` do not erase).
pub struct DArray<T: Element> {
    buffer: Vec<T>,
    length: usize,
}

impl<T: Element> DArray<T> {
    /// Creates an empty array able to hold `initial_capacity` elements without
    /// reallocating.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::InvalidArgument` if `initial_capacity` is 0 and
    /// `DArrayError::AllocationFailure` if the storage cannot be allocated.
    pub fn new(initial_capacity: usize) -> Result<Self> {
        if initial_capacity == 0 {
            return Err(DArrayError::InvalidArgument {
                reason: "initial capacity must be at least 1",
            });
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(initial_capacity)
            .map_err(|_| allocation_failure(initial_capacity))?;
        buffer.resize(initial_capacity, T::default());

        trace!(
            "darray: created {:?} array with capacity {initial_capacity}",
            T::KIND
        );
        Ok(Self { buffer, length: 0 })
    }

    /// Creates an empty array with the default capacity (8).
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::AllocationFailure` if the storage cannot be allocated.
    pub fn with_default_capacity() -> Result<Self> {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Creates an array holding a copy of `values`, with capacity
    /// `max(1, values.len())`.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::AllocationFailure` if the storage cannot be allocated.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let mut array = Self::new(values.len().max(1))?;
        array.buffer[..values.len()].copy_from_slice(values);
        array.length = values.len();
        Ok(array)
    }

    /// Releases the array held in `handle` and leaves `None` behind.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::InvalidHandle` if `handle` is already empty; nothing
    /// is released in that case.
    pub fn destroy(handle: &mut Option<Self>) -> Result<()> {
        let array = handle.take().ok_or(DArrayError::InvalidHandle)?;
        trace!(
            "darray: destroyed {:?} array with capacity {}",
            T::KIND,
            array.capacity()
        );
        drop(array);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// Width of one element in bytes.
    #[must_use]
    pub fn element_width(&self) -> usize {
        T::KIND.width()
    }

    /// The live elements, `[0, len())`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.length]
    }

    pub(crate) fn live_mut(&mut self) -> &mut [T] {
        &mut self.buffer[..self.length]
    }

    fn is_full(&self) -> bool {
        self.length == self.buffer.len()
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.length {
            Err(DArrayError::IndexOutOfRange {
                index,
                length: self.length,
            })
        } else {
            Ok(())
        }
    }

    /// Extends the capacity by one growth step. On failure the buffer and the
    /// capacity are unchanged.
    fn grow(&mut self) -> Result<()> {
        let old_capacity = self.buffer.len();
        let new_capacity =
            grown_capacity(old_capacity).ok_or_else(|| allocation_failure(usize::MAX))?;

        self.buffer
            .try_reserve_exact(new_capacity - old_capacity)
            .map_err(|_| allocation_failure(new_capacity))?;
        self.buffer.resize(new_capacity, T::default());

        debug!("darray: grew capacity from {old_capacity} to {new_capacity}");
        Ok(())
    }

    /// Reallocates the storage down to exactly `len()` elements.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::Empty` if there are no elements,
    /// `DArrayError::AlreadyMinimal` if the capacity already equals the length and
    /// `DArrayError::AllocationFailure` if the smaller storage cannot be
    /// allocated. The array is unchanged on error.
    pub fn shrink(&mut self) -> Result<()> {
        if self.length == 0 {
            return Err(DArrayError::Empty);
        }
        if self.is_full() {
            return Err(DArrayError::AlreadyMinimal {
                capacity: self.buffer.len(),
            });
        }

        let mut shrunk = Vec::new();
        shrunk
            .try_reserve_exact(self.length)
            .map_err(|_| allocation_failure(self.length))?;
        shrunk.extend_from_slice(self.as_slice());

        let old_capacity = self.buffer.len();
        self.buffer = shrunk;

        debug!("darray: shrank capacity from {old_capacity} to {}", self.length);
        Ok(())
    }

    /// Appends `value` after the last element, growing the storage when full.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::AllocationFailure` if growth was needed and failed.
    pub fn append(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            self.grow()?;
        }

        self.buffer[self.length] = value;
        self.length += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, shifting `[index, len())` one slot right.
    /// `index == len()` appends.
    ///
    /// Growth is triggered while fewer than two slots are free, so the array
    /// always has a spare slot after an insert.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::IndexOutOfRange` if `index > len()` and
    /// `DArrayError::AllocationFailure` if growth was needed and failed.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.length {
            return Err(DArrayError::IndexOutOfRange {
                index,
                length: self.length,
            });
        }

        if self.length + 1 >= self.buffer.len() {
            self.grow()?;
        }

        self.buffer.copy_within(index..self.length, index + 1);
        self.buffer[index] = value;
        self.length += 1;
        Ok(())
    }

    /// Removes the element at `index`, shifting `[index + 1, len())` one slot left.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::IndexOutOfRange` if `index >= len()`.
    pub fn remove_by_index(&mut self, index: usize) -> Result<()> {
        self.check_bounds(index)?;

        self.buffer.copy_within(index + 1..self.length, index);
        self.length -= 1;
        Ok(())
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::NotFound` if no element equals `value`.
    pub fn remove_by_value(&mut self, value: T) -> Result<()> {
        let index = self.find(value)?;
        self.remove_by_index(index)
    }

    /// Removes and returns the last element. The slot is not erased.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::Empty` if the array is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.length == 0 {
            return Err(DArrayError::Empty);
        }

        self.length -= 1;
        Ok(self.buffer[self.length])
    }

    /// Returns the last element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::Empty` if the array is empty.
    pub fn top(&self) -> Result<T> {
        self.as_slice().last().copied().ok_or(DArrayError::Empty)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_bounds(index)?;
        Ok(self.buffer[index])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_bounds(index)?;
        self.buffer[index] = value;
        Ok(())
    }

    /// Forgets all elements. Capacity and slot contents are kept.
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> DArrayIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> DArrayRevIter<'_, T> {
        DArrayRevIter::new(self.as_slice())
    }
}

impl<T: Element> fmt::Debug for DArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DArray")
            .field("kind", &T::KIND)
            .field("len", &self.length)
            .field("capacity", &self.buffer.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}
