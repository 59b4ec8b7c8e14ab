//! The catalogue of demonstration sections.
//!
//! Each section builds its own storage, views it, and writes what it observes.
//! Nothing is shared between sections.

use std::fmt::Display;
use std::io::{self, Write};

use spanscope_span::AsSpan;

use crate::TourResult;

mod access;
mod algorithms;
mod assignment;
mod bytes;
mod extent;
mod iterators;
mod observers;
mod subviews;

/// One demonstration: a short name for selection, a title line, a body.
#[derive(Debug)]
pub struct Section {
    pub name: &'static str,
    pub title: &'static str,
    pub run: fn(&mut dyn Write) -> TourResult<()>,
}

/// Every section, in transcript order.
pub static SECTIONS: [Section; 17] = [
    Section {
        name: "algorithms",
        title: "span, slide / starts_with / ends_with / contains",
        run: algorithms::run,
    },
    Section {
        name: "assignment",
        title: "span, assignment",
        run: assignment::run,
    },
    Section {
        name: "begin-end",
        title: "span, iter",
        run: iterators::begin_end,
    },
    Section {
        name: "rbegin",
        title: "span, iter().rev()",
        run: iterators::rbegin,
    },
    Section {
        name: "rend",
        title: "span, iter().rev() to the front",
        run: iterators::rend,
    },
    Section {
        name: "front",
        title: "span, front",
        run: access::front,
    },
    Section {
        name: "back",
        title: "span, back",
        run: access::back,
    },
    Section {
        name: "index",
        title: "span, index",
        run: access::index,
    },
    Section {
        name: "data",
        title: "span, last(n) suffixes",
        run: access::data,
    },
    Section {
        name: "size",
        title: "span, len",
        run: observers::size,
    },
    Section {
        name: "size-bytes",
        title: "span, size_bytes",
        run: observers::size_bytes,
    },
    Section {
        name: "empty",
        title: "span, is_empty",
        run: observers::empty,
    },
    Section {
        name: "first",
        title: "span, first",
        run: subviews::first,
    },
    Section {
        name: "last",
        title: "span, last",
        run: subviews::last,
    },
    Section {
        name: "subspan",
        title: "span, subspan",
        run: subviews::subspan,
    },
    Section {
        name: "as-bytes",
        title: "span, as_bytes",
        run: bytes::run,
    },
    Section {
        name: "extent",
        title: "span, extent",
        run: extent::run,
    },
];

/// Writes each element followed by a space, then a newline.
fn write_row<'a, T: Copy + Display + 'a>(
    out: &mut dyn Write,
    view: impl AsSpan<'a, T>,
) -> io::Result<()> {
    for element in view.as_span() {
        write!(out, "{element} ")?;
    }
    writeln!(out)
}

/// Writes `title[len]{ a, b, c, };`.
fn write_titled<'a, T: Copy + Display + 'a>(
    out: &mut dyn Write,
    title: &str,
    view: impl AsSpan<'a, T>,
) -> io::Result<()> {
    let view = view.as_span();
    write!(out, "{title}[{}]{{ ", view.len())?;
    for element in view {
        write!(out, "{element}, ")?;
    }
    writeln!(out, "}};")
}
