use std::io;

use spanscope_span::SpanError;
use thiserror::Error;

/// Result type for tour sections.
pub type TourResult<T> = Result<T, TourError>;

#[derive(Debug, Error)]
pub enum TourError {
    #[error("failed to write transcript: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Span(#[from] SpanError),

    #[error("unknown section `{name}` (expected one of: {known})")]
    UnknownSection { name: String, known: String },
}
