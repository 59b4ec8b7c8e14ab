use std::cell::Cell;
use std::io::Write;

use spanscope_span::{FixedSpan, Span};
use tracing::trace;

use super::write_titled;
use crate::TourResult;

pub(super) fn first(out: &mut dyn Write) -> TourResult<()> {
    let mut storage = [1, 2, 3, 4, 5, 6, 7, 8];
    let ary = Cell::from_mut(&mut storage[..]).as_slice_of_cells();
    write_titled(out, "i32  ary", ary)?;

    let span = Span::new(ary);
    write_titled(out, "span: ", span)?;

    let span_first: FixedSpan<'_, i32, 5> = span.first_n();
    write_titled(out, "span.first_n::<5>(): ", span_first)?;

    let span_first_dynamic: Span<'_, i32> = span.first(4);
    write_titled(out, "span.first(4):       ", span_first_dynamic)?;
    Ok(())
}

pub(super) fn last(out: &mut dyn Write) -> TourResult<()> {
    let mut storage = [1, 2, 3, 4, 5, 6, 7, 8];
    let ary = Cell::from_mut(&mut storage[..]).as_slice_of_cells();
    write_titled(out, "i32  ary", ary)?;

    let span = Span::new(ary);
    write_titled(out, "span: ", span)?;

    let span_last: FixedSpan<'_, i32, 3> = span.last_n();
    write_titled(out, "span.last_n::<3>(): ", span_last)?;

    let span_last_dynamic: Span<'_, i32> = span.last(2);
    write_titled(out, "span.last(2):       ", span_last_dynamic)?;
    Ok(())
}

pub(super) fn subspan(out: &mut dyn Write) -> TourResult<()> {
    const COLUMNS: usize = 20;

    let mut abc = [0u8; 26];
    for (slot, letter) in abc.iter_mut().zip(b'A'..=b'Z') {
        *slot = letter;
    }
    let abc = Span::from_mut(&mut abc);

    let rows = abc.len() - COLUMNS + 1;
    trace!(rows, columns = COLUMNS, "sliding window");
    for offset in 0..rows {
        let line: String = abc.subspan(offset, COLUMNS).iter().map(char::from).collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}
