use core::{cell::Cell, fmt, iter::FusedIterator, slice};

/// Iterator over copies of a view's elements.
///
/// Double-ended: `.rev()` walks the view back to front.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Cell<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(cells: &'a [Cell<T>]) -> Self {
        Iter {
            inner: cells.iter(),
        }
    }
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(Cell::get)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n).map(Cell::get)
    }
}

impl<T: Copy> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(Cell::get)
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<T: Copy> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
