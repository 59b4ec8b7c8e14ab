//! Viewing the memory under a span as raw bytes.

use core::{cell::Cell, slice};

use crate::{FixedSpan, Span};

mod private {
    pub trait Sealed {}
}

/// Element types that have no padding and accept any bit pattern.
///
/// This is a sealed trait - it cannot be implemented outside this crate.
pub trait Plain: private::Sealed + Copy {}

macro_rules! impl_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl Plain for $ty {}
        )*
    };
}

impl_plain!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl<'a, T: Plain> Span<'a, T> {
    /// The same memory as `size_bytes()` bytes in native byte order.
    ///
    /// The byte view is writable: setting a byte changes the element it
    /// belongs to.
    ///
    /// ```
    /// use spanscope_span::Span;
    ///
    /// let mut data = [3.141592f32];
    /// let floats = Span::from_mut(&mut data);
    /// let bytes = floats.as_bytes();
    /// assert_eq!(bytes.len(), 4);
    ///
    /// let msb = if cfg!(target_endian = "little") { 3 } else { 0 };
    /// bytes[msb].set(bytes[msb].get() | 0x80);
    /// assert_eq!(floats.front(), Some(-3.141592));
    /// ```
    pub fn as_bytes(self) -> Span<'a, u8> {
        let cells = self.as_cells();
        // SAFETY: `Plain` types have no padding and every byte pattern is a
        // valid value, so each byte may be read and written on its own.
        // `Cell<u8>` has alignment 1 and the same interior mutability as
        // `Cell<T>`, and the byte range covers exactly the viewed elements.
        let bytes = unsafe {
            slice::from_raw_parts(cells.as_ptr().cast::<Cell<u8>>(), self.size_bytes())
        };
        Span::new(bytes)
    }
}

impl<'a, T: Plain, const N: usize> FixedSpan<'a, T, N> {
    /// See [`Span::as_bytes`].
    pub fn as_bytes(self) -> Span<'a, u8> {
        self.as_span().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{FixedSpan, Span};

    #[test]
    fn int_bytes_match_native_order() {
        let mut data = [1i32, 2, 3, 4, 5];
        let span = FixedSpan::from_mut(&mut data);
        let bytes = span.as_bytes();
        assert_eq!(bytes.len(), 20);
        assert_eq!(bytes.len(), span.size_bytes());
        assert_eq!(bytes.first(4).to_vec(), 1i32.to_ne_bytes());
        assert_eq!(bytes.last(4).to_vec(), 5i32.to_ne_bytes());
    }

    #[test]
    fn float_sign_bit_flip() {
        let mut data = [3.141592f32];
        let span = Span::from_mut(&mut data);
        let bytes = span.as_bytes();
        assert_eq!(bytes.to_vec(), 3.141592f32.to_ne_bytes());

        let msb = if cfg!(target_endian = "little") { 3 } else { 0 };
        bytes.set(msb, bytes.get(msb).unwrap() | 0b1000_0000);
        assert_eq!(span.front(), Some(-3.141592f32));
        assert_eq!(bytes.to_vec(), (-3.141592f32).to_ne_bytes());
    }

    #[test]
    fn empty_bytes() {
        let span = Span::<u64>::empty();
        assert!(span.as_bytes().is_empty());
    }
}
