//! Dynamic-extent views.

use alloc::vec::Vec;
use core::{cell::Cell, fmt, mem::size_of, ops::Index};

use crate::{Extent, FixedSpan, Iter, SpanError};

/// A view whose length is decided when it is built.
///
/// Two words wide: a pointer and a length. Copying a `Span` copies that
/// pair, never the elements. Elements are reached through [`Cell`], so a
/// write through one copy shows up in every other view of the same storage.
///
/// # Example
///
/// ```
/// use spanscope_span::Span;
///
/// let mut storage = [3, 3, 3];
/// let a = Span::from_mut(&mut storage);
/// let b = a;
/// a.fill(5);
/// assert_eq!(b.to_vec(), [5, 5, 5]);
/// ```
pub struct Span<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T> Span<'a, T> {
    pub const EXTENT: Extent = Extent::Dynamic;

    pub const fn new(cells: &'a [Cell<T>]) -> Self {
        Span { cells }
    }

    /// Views a mutable slice for as long as it is borrowed.
    pub fn from_mut(slice: &'a mut [T]) -> Self {
        Span::new(Cell::from_mut(slice).as_slice_of_cells())
    }

    pub fn empty() -> Self {
        Span::from_mut(&mut [])
    }

    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub const fn extent(&self) -> Extent {
        Self::EXTENT
    }

    /// Number of bytes covered by the view.
    pub const fn size_bytes(&self) -> usize {
        self.cells.len() * size_of::<T>()
    }

    pub const fn as_ptr(&self) -> *const T {
        self.cells.as_ptr().cast()
    }

    pub const fn as_cells(&self) -> &'a [Cell<T>] {
        self.cells
    }

    // ===================
    // Subviews
    // ===================

    /// The `count` elements starting at `offset`.
    ///
    /// # Errors
    ///
    /// [`SpanError::OutOfRange`] when `offset + count` exceeds the length.
    pub fn try_subspan(self, offset: usize, count: usize) -> Result<Self, SpanError> {
        let len = self.len();
        offset
            .checked_add(count)
            .and_then(|end| self.cells.get(offset..end))
            .map(Span::new)
            .ok_or(SpanError::OutOfRange { offset, count, len })
    }

    /// The leading `count` elements.
    ///
    /// # Errors
    ///
    /// [`SpanError::OutOfRange`] when `count` exceeds the length.
    pub fn try_first(self, count: usize) -> Result<Self, SpanError> {
        self.try_subspan(0, count)
    }

    /// The trailing `count` elements.
    ///
    /// # Errors
    ///
    /// [`SpanError::OutOfRange`] when `count` exceeds the length.
    pub fn try_last(self, count: usize) -> Result<Self, SpanError> {
        let len = self.len();
        match len.checked_sub(count) {
            Some(offset) => self.try_subspan(offset, count),
            None => Err(SpanError::OutOfRange {
                offset: 0,
                count,
                len,
            }),
        }
    }

    /// # Panics
    ///
    /// Panics if `offset + count` exceeds the length.
    #[track_caller]
    pub fn subspan(self, offset: usize, count: usize) -> Self {
        self.try_subspan(offset, count)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Everything from `offset` to the end.
    ///
    /// # Panics
    ///
    /// Panics if `offset` exceeds the length.
    #[track_caller]
    pub fn tail(self, offset: usize) -> Self {
        let count = self.len().saturating_sub(offset);
        self.subspan(offset, count)
    }

    /// # Panics
    ///
    /// Panics if `count` exceeds the length.
    #[track_caller]
    pub fn first(self, count: usize) -> Self {
        self.try_first(count).unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics if `count` exceeds the length.
    #[track_caller]
    pub fn last(self, count: usize) -> Self {
        self.try_last(count).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The leading `M` elements as a fixed view.
    ///
    /// # Panics
    ///
    /// Panics if `M` exceeds the length.
    #[track_caller]
    pub fn first_n<const M: usize>(self) -> FixedSpan<'a, T, M> {
        self.first(M).to_fixed()
    }

    /// The trailing `M` elements as a fixed view.
    ///
    /// # Panics
    ///
    /// Panics if `M` exceeds the length.
    #[track_caller]
    pub fn last_n<const M: usize>(self) -> FixedSpan<'a, T, M> {
        self.last(M).to_fixed()
    }

    /// # Panics
    ///
    /// Panics if `OFFSET + COUNT` exceeds the length.
    #[track_caller]
    pub fn subspan_n<const OFFSET: usize, const COUNT: usize>(self) -> FixedSpan<'a, T, COUNT> {
        self.subspan(OFFSET, COUNT).to_fixed()
    }

    // Only called on views already cut to length `M`.
    #[track_caller]
    fn to_fixed<const M: usize>(self) -> FixedSpan<'a, T, M> {
        FixedSpan::try_from(self).unwrap_or_else(|e| panic!("{e}"))
    }

    // ===================
    // Element access
    // ===================

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&self, index: usize, value: T) {
        self.cells[index].set(value);
    }

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&self, a: usize, b: usize) {
        self.cells[a].swap(&self.cells[b]);
    }
}

impl<'a, T: Copy> Span<'a, T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.cells.get(index).map(Cell::get)
    }

    pub fn front(&self) -> Option<T> {
        self.cells.first().map(Cell::get)
    }

    pub fn back(&self) -> Option<T> {
        self.cells.last().map(Cell::get)
    }

    pub fn fill(&self, value: T) {
        for cell in self.cells {
            cell.set(value);
        }
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.cells)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Span<'_, T> {}

impl<T> Default for Span<'_, T> {
    fn default() -> Self {
        Span::empty()
    }
}

impl<T> Index<usize> for Span<'_, T> {
    type Output = Cell<T>;

    fn index(&self, index: usize) -> &Cell<T> {
        &self.cells[index]
    }
}

impl<'a, T: Copy> IntoIterator for Span<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'b, T: Copy + PartialEq> PartialEq<Span<'b, T>> for Span<'_, T> {
    fn eq(&self, other: &Span<'b, T>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq<[T; N]> for Span<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl<'a, T> From<&'a [Cell<T>]> for Span<'a, T> {
    fn from(cells: &'a [Cell<T>]) -> Self {
        Span::new(cells)
    }
}

impl<'a, T> From<&'a mut [T]> for Span<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Span::from_mut(slice)
    }
}

impl<'a, T, const N: usize> From<FixedSpan<'a, T, N>> for Span<'a, T> {
    fn from(fixed: FixedSpan<'a, T, N>) -> Self {
        fixed.as_span()
    }
}

/// Anything that can be viewed as a [`Span`] over the same storage.
///
/// The generic algorithms in [`crate::algo`] take `impl AsSpan` so fixed
/// and dynamic views mix freely.
pub trait AsSpan<'a, T> {
    fn as_span(&self) -> Span<'a, T>;
}

impl<'a, T> AsSpan<'a, T> for Span<'a, T> {
    fn as_span(&self) -> Span<'a, T> {
        *self
    }
}

impl<'a, T, const N: usize> AsSpan<'a, T> for FixedSpan<'a, T, N> {
    fn as_span(&self) -> Span<'a, T> {
        Span::new(self.as_cells())
    }
}

impl<'a, T> AsSpan<'a, T> for &'a [Cell<T>] {
    fn as_span(&self) -> Span<'a, T> {
        Span::new(*self)
    }
}
