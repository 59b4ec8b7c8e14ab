//! Non-owning views over contiguous storage.
//!
//! A view is a pointer into caller-owned storage plus a count of elements.
//! It never owns what it points at: the lifetime `'a` ties every view to the
//! array, buffer or vector it was built from, so a view cannot outlive it.
//!
//! Two flavours exist, differing only in where the count lives:
//!
//! | Type                   | Extent                  | Size          |
//! |------------------------|-------------------------|---------------|
//! | [`FixedSpan<T, N>`]    | `N`, part of the type   | one `usize`   |
//! | [`Span<T>`]            | decided at construction | two `usize`s  |
//!
//! # Shallow copies
//!
//! Views are `Copy`. Copying one duplicates the (pointer, length) pair, not
//! the elements. Elements are accessed through [`Cell`](core::cell::Cell), so
//! a write through any copy is visible through all views of the same
//! storage:
//!
//! ```
//! use spanscope_span::FixedSpan;
//!
//! let mut a1 = [3; 6];
//! let mut a2 = [4; 6];
//! let mut s1 = FixedSpan::from_mut(&mut a1);
//! let s2 = FixedSpan::from_mut(&mut a2);
//!
//! s1 = s2;
//! s1.fill(5);
//! assert_eq!(s2.to_vec(), [5; 6]);
//! ```
//!
//! # Gotchas
//!
//! - **Not `Sync`**: cell-based views stay on the thread that built them.
//! - **Subview bounds**: `first`/`last`/`subspan` panic like slice indexing;
//!   use the `try_` variants or [`algo::slide`] for a non-panicking cut.

#![no_std]

extern crate alloc;

pub mod algo;
mod bytes;
mod error;
mod extent;
mod fixed;
mod iter;
mod span;

pub use bytes::Plain;
pub use error::SpanError;
pub use extent::{DYNAMIC_EXTENT, Extent};
pub use fixed::FixedSpan;
pub use iter::Iter;
pub use span::{AsSpan, Span};

static_assertions::assert_eq_size!(FixedSpan<'static, i32, 4>, usize);
static_assertions::assert_eq_size!(FixedSpan<'static, u128, 1>, usize);
static_assertions::assert_eq_size!(Span<'static, i32>, [usize; 2]);
static_assertions::assert_not_impl_any!(Span<'static, i32>: Sync, Send);
static_assertions::assert_not_impl_any!(FixedSpan<'static, i32, 4>: Sync, Send);
