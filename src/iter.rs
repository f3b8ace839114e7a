use core::iter::Rev;
use core::slice;

use crate::core::DArray;
use crate::element::Element;

/// Iterator over the elements of a `DArray`, yielding copies
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DArrayIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T: Element> Iterator for DArrayIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Element> DoubleEndedIterator for DArrayIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl<T: Element> ExactSizeIterator for DArrayIter<'_, T> {}

impl<'a, T: Element> IntoIterator for &'a DArray<T> {
    type Item = T;
    type IntoIter = DArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DArrayIter {
            inner: self.as_slice().iter(),
        }
    }
}

/// Reverse iterator over the elements of a `DArray`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DArrayRevIter<'a, T> {
    inner: Rev<slice::Iter<'a, T>>,
}

impl<'a, T: Element> DArrayRevIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter().rev(),
        }
    }
}

impl<T: Element> Iterator for DArrayRevIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Element> ExactSizeIterator for DArrayRevIter<'_, T> {}
