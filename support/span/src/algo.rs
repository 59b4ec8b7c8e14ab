//! Generic algorithms over views.
//!
//! Every function takes `impl AsSpan`, so fixed and dynamic views (and plain
//! slices of cells) can be mixed. None of them fail: a request that runs past
//! the end produces an empty view or `false`.

use core::fmt;

use crate::{AsSpan, Span};

/// The `width` elements starting at `offset`, or an empty view if they do
/// not all fit.
///
/// ```
/// use spanscope_span::{Span, algo::slide};
///
/// let mut data = [0, 1, 2, 3, 4, 5, 6, 7, 8];
/// let span = Span::from_mut(&mut data);
/// assert_eq!(slide(span, 3, 6), [3, 4, 5, 6, 7, 8]);
/// assert!(slide(span, 4, 6).is_empty());
/// ```
pub fn slide<'a, T>(view: impl AsSpan<'a, T>, offset: usize, width: usize) -> Span<'a, T> {
    view.as_span()
        .try_subspan(offset, width)
        .unwrap_or_else(|_| Span::empty())
}

/// Whether `data` begins with the elements of `prefix`.
pub fn starts_with<'a, 'b, T: Copy + PartialEq + 'a + 'b>(
    data: impl AsSpan<'a, T>,
    prefix: impl AsSpan<'b, T>,
) -> bool {
    let (data, prefix) = (data.as_span(), prefix.as_span());
    data.len() >= prefix.len() && data.iter().zip(prefix.iter()).all(|(a, b)| a == b)
}

/// Whether `data` ends with the elements of `suffix`.
pub fn ends_with<'a, 'b, T: Copy + PartialEq + 'a + 'b>(
    data: impl AsSpan<'a, T>,
    suffix: impl AsSpan<'b, T>,
) -> bool {
    let (data, suffix) = (data.as_span(), suffix.as_span());
    data.len() >= suffix.len() && data.last(suffix.len()).iter().eq(suffix.iter())
}

/// Offset of the first run in `data` equal to `sub`.
///
/// An empty `sub` matches at offset 0, even in an empty `data`. This differs
/// from an iterator search that reports "not found" as the end position,
/// which cannot tell an empty match in empty data apart from a miss.
pub fn find<'a, 'b, T: Copy + PartialEq + 'a + 'b>(
    data: impl AsSpan<'a, T>,
    sub: impl AsSpan<'b, T>,
) -> Option<usize> {
    let (data, sub) = (data.as_span(), sub.as_span());
    let last_offset = data.len().checked_sub(sub.len())?;
    (0..=last_offset).find(|&offset| data.subspan(offset, sub.len()).iter().eq(sub.iter()))
}

/// Whether `sub` occurs as a contiguous run anywhere in `data`.
pub fn contains<'a, 'b, T: Copy + PartialEq + 'a + 'b>(
    data: impl AsSpan<'a, T>,
    sub: impl AsSpan<'b, T>,
) -> bool {
    find(data, sub).is_some()
}

/// Every full window of `width` elements, front to back.
///
/// Stops at the first [`slide`] that comes back empty, so a `width` of zero
/// yields nothing.
pub fn windows<'a, T>(view: impl AsSpan<'a, T>, width: usize) -> Windows<'a, T> {
    Windows {
        view: view.as_span(),
        offset: 0,
        width,
    }
}

/// Iterator returned by [`windows`].
pub struct Windows<'a, T> {
    view: Span<'a, T>,
    offset: usize,
    width: usize,
}

impl<'a, T> Iterator for Windows<'a, T> {
    type Item = Span<'a, T>;

    fn next(&mut self) -> Option<Span<'a, T>> {
        let window = slide(self.view, self.offset, self.width);
        if window.is_empty() {
            return None;
        }
        self.offset += 1;
        Some(window)
    }
}

impl<T> fmt::Debug for Windows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Windows")
            .field("len", &self.view.len())
            .field("offset", &self.offset)
            .field("width", &self.width)
            .finish()
    }
}
