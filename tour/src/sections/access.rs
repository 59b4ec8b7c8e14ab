//! Element access: front, back, indexing and suffix views.

use std::io::Write;

use spanscope_span::{FixedSpan, Span};

use super::write_row;
use crate::TourResult;

pub(super) fn front(out: &mut dyn Write) -> TourResult<()> {
    let mut data = [0, 1, 2, 3, 4, 5, 6];
    let data = Span::from_mut(&mut data).first(4);

    for offset in 0..data.len() {
        if let Some(x) = data.tail(offset).front() {
            write!(out, "{x} ")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub(super) fn back(out: &mut dyn Write) -> TourResult<()> {
    let mut numbers = [0, 1, 2, 3, 4];
    let span = FixedSpan::from_mut(&mut numbers);

    for nr in (1..=span.len()).rev() {
        if let Some(x) = span.last(nr).front() {
            write!(out, "{x} ")?;
        }
    }
    writeln!(out)?;

    for nr in (1..=span.len()).rev() {
        if let Some(x) = span.first(nr).back() {
            write!(out, "{x} ")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Reverses in place by swapping through the indexed cells.
fn reverse<T>(span: Span<'_, T>) {
    let (mut ix, mut jx) = (0, span.len());
    while ix < jx {
        jx -= 1;
        span[ix].swap(&span[jx]);
        ix += 1;
    }
}

pub(super) fn index(out: &mut dyn Write) -> TourResult<()> {
    let mut data = [1, 2, 3, 4, 5];
    let span = Span::from_mut(&mut data);
    write_row(out, span)?;
    reverse(span);
    write_row(out, span)?;
    Ok(())
}

pub(super) fn data(out: &mut dyn Write) -> TourResult<()> {
    let mut text: Vec<char> = "ABCDEF\n".chars().collect();
    let sp = Span::from_mut(&mut text);

    for nr in (2..=sp.len()).rev() {
        let suffix: String = sp.last(nr).iter().collect();
        write!(out, "{suffix}")?;
    }
    Ok(())
}
