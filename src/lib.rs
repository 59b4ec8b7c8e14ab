//! spanscope - non-owning views over contiguous storage, and a tour of them
//!
//! # Overview
//!
//! A span is a pointer into storage someone else owns, plus a count of
//! elements. This crate bundles:
//!
//! - [`span`]: the views themselves ([`Span`], [`FixedSpan`]) and the generic
//!   algorithms in [`algo`] (`slide`, `starts_with`, `ends_with`, `contains`)
//! - [`tour`]: a catalogue of demonstration sections that print what the
//!   views do
//!
//! # Quick Start
//!
//! ```
//! use spanscope::{FixedSpan, Span, algo};
//!
//! let mut data = [0, 1, 2, 3, 4, 5, 6, 7, 8];
//! let whole = FixedSpan::from_mut(&mut data);
//!
//! // Every window of six, front to back
//! let windows: Vec<Vec<i32>> = algo::windows(whole, 6).map(|w| w.to_vec()).collect();
//! assert_eq!(windows.len(), 4);
//!
//! // Subviews share storage with their parent
//! let tail: Span<i32> = whole.last(3);
//! tail.fill(0);
//! assert!(algo::ends_with(whole, tail));
//! assert_eq!(whole.back(), Some(0));
//! ```
//!
//! # Running the tour
//!
//! ```
//! let mut out = Vec::new();
//! spanscope::tour::run_selected(&mut out, &["rbegin"]).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("password"));
//! ```

pub use spanscope_span as span;
pub use spanscope_tour as tour;

pub use spanscope_span::{
    AsSpan, DYNAMIC_EXTENT, Extent, FixedSpan, Iter, Plain, Span, SpanError, algo,
};
pub use spanscope_tour::{TourError, TourResult};
