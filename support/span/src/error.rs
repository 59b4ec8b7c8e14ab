use thiserror::Error;

/// Failure to derive or convert a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// A dynamic view was converted to a fixed view of a different length.
    #[error("extent mismatch: expected {expected} elements, found {found}")]
    ExtentMismatch { expected: usize, found: usize },

    /// A subview reached past the end of its parent.
    #[error("subspan out of range: offset {offset} + count {count} exceeds length {len}")]
    OutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::SpanError;

    #[test]
    fn messages() {
        let e = SpanError::ExtentMismatch {
            expected: 4,
            found: 3,
        };
        assert_eq!(e.to_string(), "extent mismatch: expected 4 elements, found 3");

        let e = SpanError::OutOfRange {
            offset: 2,
            count: 8,
            len: 9,
        };
        assert_eq!(
            e.to_string(),
            "subspan out of range: offset 2 + count 8 exceeds length 9"
        );
    }
}
