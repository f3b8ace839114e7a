use crate::core::DArray;
use crate::element::Element;
use crate::error::{DArrayError, Result};

impl<T: Element> DArray<T> {
    /// Returns the index of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::NotFound` if no element equals `value`.
    pub fn find(&self, value: T) -> Result<usize> {
        self.as_slice()
            .iter()
            .position(|element| *element == value)
            .ok_or(DArrayError::NotFound)
    }

    /// Sorts the elements in ascending order. Not stable.
    pub fn sort(&mut self) {
        self.live_mut().sort_unstable_by(T::three_way);
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.live_mut().reverse();
    }

    /// Binary search for `value`.
    ///
    /// Unless `already_sorted` is true the array is sorted first, and stays
    /// sorted afterwards. With duplicates, any matching index may be returned.
    ///
    /// # Errors
    ///
    /// Returns `DArrayError::NotFound` if no element compares equal to `value`,
    /// including when the array is empty.
    pub fn binary_search(&mut self, value: T, already_sorted: bool) -> Result<usize> {
        if !already_sorted {
            self.sort();
        }

        self.as_slice()
            .binary_search_by(|probe| probe.three_way(&value))
            .map_err(|_| DArrayError::NotFound)
    }
}
