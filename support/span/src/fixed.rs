//! Static-extent views.

use alloc::vec::Vec;
use core::{cell::Cell, fmt, marker::PhantomData, mem::size_of, ops::Index, ptr::NonNull};

use crate::{Extent, Iter, Span, SpanError};

/// A view of exactly `N` elements.
///
/// The length lives in the type, so a `FixedSpan` is pointer-sized (`usize`)
/// where a [`Span`] needs two words. Assigning one fixed view to another only
/// type-checks when both extents agree:
///
/// ```compile_fail
/// use spanscope_span::FixedSpan;
///
/// let mut a = [1, 2, 3, 4];
/// let mut b = [3, 4, 5];
/// let mut four = FixedSpan::from_mut(&mut a);
/// let three = FixedSpan::from_mut(&mut b);
/// four = three;
/// ```
///
/// Converting into a dynamic view always works; coming back is checked:
///
/// ```
/// use spanscope_span::{FixedSpan, Span, SpanError};
///
/// let mut a = [1, 2, 3, 4];
/// let dynamic: Span<i32> = FixedSpan::from_mut(&mut a).into();
/// assert!(FixedSpan::<i32, 4>::try_from(dynamic).is_ok());
/// assert_eq!(
///     FixedSpan::<i32, 3>::try_from(dynamic).unwrap_err(),
///     SpanError::ExtentMismatch { expected: 3, found: 4 },
/// );
/// ```
pub struct FixedSpan<'a, T, const N: usize> {
    ptr: NonNull<Cell<T>>,
    phantom: PhantomData<&'a [Cell<T>; N]>,
}

impl<'a, T, const N: usize> FixedSpan<'a, T, N> {
    pub const EXTENT: Extent = Extent::Static(N);

    pub fn new(cells: &'a [Cell<T>; N]) -> Self {
        FixedSpan {
            ptr: NonNull::from(cells).cast(),
            phantom: PhantomData,
        }
    }

    /// Views a mutable array for as long as it is borrowed.
    pub fn from_mut(array: &'a mut [T; N]) -> Self {
        // `Cell<T>` is `repr(transparent)` over `T`, and the exclusive borrow
        // is held for `'a`; this is what `Cell::from_mut` relies on too.
        FixedSpan {
            ptr: NonNull::from(array).cast(),
            phantom: PhantomData,
        }
    }

    /// # Errors
    ///
    /// [`SpanError::ExtentMismatch`] unless `cells` holds exactly `N` elements.
    pub fn try_from_cells(cells: &'a [Cell<T>]) -> Result<Self, SpanError> {
        <&[Cell<T>; N]>::try_from(cells)
            .map(FixedSpan::new)
            .map_err(|_| SpanError::ExtentMismatch {
                expected: N,
                found: cells.len(),
            })
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn extent(&self) -> Extent {
        Self::EXTENT
    }

    pub const fn size_bytes(&self) -> usize {
        N * size_of::<T>()
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const().cast()
    }

    pub fn as_cells(&self) -> &'a [Cell<T>; N] {
        // SAFETY: ptr came from a `&'a [Cell<T>; N]` or `&'a mut [T; N]`;
        // the lifetime 'a keeps that storage alive and borrowed.
        unsafe { self.ptr.cast::<[Cell<T>; N]>().as_ref() }
    }

    pub fn as_span(&self) -> Span<'a, T> {
        Span::new(self.as_cells())
    }

    // ===================
    // Subviews
    // ===================

    /// The leading `M` elements; `M > N` fails to compile.
    pub fn first_n<const M: usize>(self) -> FixedSpan<'a, T, M> {
        const { assert!(M <= N, "first_n: count exceeds extent") };
        FixedSpan {
            ptr: self.ptr,
            phantom: PhantomData,
        }
    }

    /// The trailing `M` elements; `M > N` fails to compile.
    pub fn last_n<const M: usize>(self) -> FixedSpan<'a, T, M> {
        const { assert!(M <= N, "last_n: count exceeds extent") };
        // SAFETY: N - M <= N, so the offset stays inside the viewed array.
        let ptr = unsafe { self.ptr.add(N - M) };
        FixedSpan {
            ptr,
            phantom: PhantomData,
        }
    }

    /// `COUNT` elements starting at `OFFSET`; out-of-range bounds fail to compile.
    pub fn subspan_n<const OFFSET: usize, const COUNT: usize>(self) -> FixedSpan<'a, T, COUNT> {
        const {
            assert!(
                OFFSET <= N && COUNT <= N - OFFSET,
                "subspan_n: range exceeds extent"
            )
        };
        // SAFETY: OFFSET + COUNT <= N, checked above at compile time.
        let ptr = unsafe { self.ptr.add(OFFSET) };
        FixedSpan {
            ptr,
            phantom: PhantomData,
        }
    }

    /// # Errors
    ///
    /// See [`Span::try_subspan`].
    pub fn try_subspan(self, offset: usize, count: usize) -> Result<Span<'a, T>, SpanError> {
        self.as_span().try_subspan(offset, count)
    }

    /// # Panics
    ///
    /// See [`Span::subspan`].
    #[track_caller]
    pub fn subspan(self, offset: usize, count: usize) -> Span<'a, T> {
        self.as_span().subspan(offset, count)
    }

    /// # Panics
    ///
    /// See [`Span::tail`].
    #[track_caller]
    pub fn tail(self, offset: usize) -> Span<'a, T> {
        self.as_span().tail(offset)
    }

    /// # Panics
    ///
    /// See [`Span::first`].
    #[track_caller]
    pub fn first(self, count: usize) -> Span<'a, T> {
        self.as_span().first(count)
    }

    /// # Panics
    ///
    /// See [`Span::last`].
    #[track_caller]
    pub fn last(self, count: usize) -> Span<'a, T> {
        self.as_span().last(count)
    }

    // ===================
    // Element access
    // ===================

    pub fn set(&self, index: usize, value: T) {
        self.as_span().set(index, value);
    }

    pub fn swap(&self, a: usize, b: usize) {
        self.as_span().swap(a, b);
    }
}

impl<'a, T: Copy, const N: usize> FixedSpan<'a, T, N> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.as_span().get(index)
    }

    pub fn front(&self) -> Option<T> {
        self.as_span().front()
    }

    pub fn back(&self) -> Option<T> {
        self.as_span().back()
    }

    pub fn fill(&self, value: T) {
        self.as_span().fill(value);
    }

    pub fn iter(&self) -> Iter<'a, T> {
        self.as_span().iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_span().to_vec()
    }
}

impl<T, const N: usize> Clone for FixedSpan<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for FixedSpan<'_, T, N> {}

impl<T, const N: usize> Index<usize> for FixedSpan<'_, T, N> {
    type Output = Cell<T>;

    fn index(&self, index: usize) -> &Cell<T> {
        &self.as_cells()[index]
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for FixedSpan<'a, T, N> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for FixedSpan<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'b, T: Copy + PartialEq, const N: usize> PartialEq<FixedSpan<'b, T, N>>
    for FixedSpan<'_, T, N>
{
    fn eq(&self, other: &FixedSpan<'b, T, N>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq<[T; N]> for FixedSpan<'_, T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl<'a, T, const N: usize> From<&'a [Cell<T>; N]> for FixedSpan<'a, T, N> {
    fn from(cells: &'a [Cell<T>; N]) -> Self {
        FixedSpan::new(cells)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for FixedSpan<'a, T, N> {
    fn from(array: &'a mut [T; N]) -> Self {
        FixedSpan::from_mut(array)
    }
}

impl<'a, T, const N: usize> TryFrom<Span<'a, T>> for FixedSpan<'a, T, N> {
    type Error = SpanError;

    fn try_from(span: Span<'a, T>) -> Result<Self, SpanError> {
        FixedSpan::try_from_cells(span.as_cells())
    }
}
