use std::cell::Cell;
use std::io::Write;

use spanscope_span::{
    FixedSpan, Span,
    algo::{contains, ends_with, slide, starts_with},
};

use super::write_row;
use crate::TourResult;

pub(super) fn run(out: &mut dyn Write) -> TourResult<()> {
    const WIDTH: usize = 6;

    let mut a = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    let mut b = [8, 7, 6];
    let ary_a = Cell::from_mut(&mut a[..]).as_slice_of_cells();
    let ary_b = Span::from_mut(&mut b);

    for offset in 0.. {
        let window = slide(ary_a, offset, WIDTH);
        if window.is_empty() {
            break;
        }
        write_row(out, window)?;
    }

    let tests = [
        starts_with(ary_a, &ary_a[..4]),
        starts_with(&ary_a[1..5], &ary_a[1..4]),
        starts_with(ary_a, ary_b),
        starts_with(&ary_a[..8], &ary_a[1..4]),
        ends_with(ary_a, &ary_a[6..9]),
        ends_with(ary_a, &ary_a[6..8]),
        contains(ary_a, &ary_a[1..5]),
        contains(&ary_a[..8], ary_a),
    ];
    for (n, result) in tests.iter().enumerate() {
        writeln!(out, "test {}: {result}", n + 1)?;
    }

    let aspan = FixedSpan::<_, 9>::try_from_cells(ary_a)?;
    writeln!(out, "span size: {}", aspan.len())?;
    writeln!(out, "span extent: {}", aspan.extent())?;
    Ok(())
}
