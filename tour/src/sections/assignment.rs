//! Assignment copies the view, not the elements.

use std::cell::Cell;
use std::io::{self, Write};
use std::mem::size_of_val;

use spanscope_span::{AsSpan, Extent, FixedSpan, Span};
use tracing::trace;

use crate::TourResult;

/// `label[len] { a b c }`, optionally followed by the extent and the size of
/// the view value itself.
fn describe<'a>(
    out: &mut dyn Write,
    label: &str,
    view: impl AsSpan<'a, i32>,
    details: Option<(Extent, usize)>,
) -> io::Result<()> {
    let view = view.as_span();
    write!(out, "{label}[{}] {{", view.len())?;
    for x in view {
        write!(out, " {x}")?;
    }
    write!(out, " }}")?;
    if let Some((extent, size_of)) = details {
        write!(out, " extent = {extent}, size_of = {size_of}")?;
    }
    writeln!(out)
}

pub(super) fn run(out: &mut dyn Write) -> TourResult<()> {
    let mut a1 = [3; 6];
    let mut a2 = [4; 6];

    let mut s1 = FixedSpan::from_mut(&mut a1);
    let s2 = FixedSpan::from_mut(&mut a2);
    describe(out, "s1", s1, Some((s1.extent(), size_of_val(&s1))))?;
    describe(out, "s2", s2, Some((s2.extent(), size_of_val(&s2))))?;

    s1 = s2;
    if s1.as_ptr() == s2.as_ptr() && s1.len() == s2.len() {
        writeln!(out, "s1 = s2; is a shallow copy!")?;
    } else {
        writeln!(out, "s1 = s2; is a deep copy!")?;
    }
    describe(out, "s1", s1, None)?;

    writeln!(out, "Fill s1 with 5:")?;
    s1.fill(5);
    // s2 sees the writes: both views point at a2.
    debug_assert_eq!(s1, s2);
    describe(out, "s1", s1, None)?;
    describe(out, "s2", s2, None)?;
    writeln!(out)?;

    let mut a3 = [1, 2, 3, 4];
    let mut a4 = [2, 3, 4, 5];
    let mut a5 = [3, 4, 5];
    let a3 = Cell::from_mut(&mut a3[..]).as_slice_of_cells();
    let a4 = Cell::from_mut(&mut a4[..]).as_slice_of_cells();

    let mut dynamic_1 = Span::new(a3);
    let dynamic_2 = Span::new(&a4[..3]);
    let mut static_1 = FixedSpan::<_, 4>::try_from_cells(a3)?;
    let static_2 = FixedSpan::<_, 4>::try_from_cells(a4)?;
    let static_3 = FixedSpan::from_mut(&mut a5);

    for (label, view, extent, size_of) in [
        ("dynamic_1", dynamic_1, dynamic_1.extent(), size_of_val(&dynamic_1)),
        ("dynamic_2", dynamic_2, dynamic_2.extent(), size_of_val(&dynamic_2)),
        ("static_1", static_1.as_span(), static_1.extent(), size_of_val(&static_1)),
        ("static_2", static_2.as_span(), static_2.extent(), size_of_val(&static_2)),
        ("static_3", static_3.as_span(), static_3.extent(), size_of_val(&static_3)),
    ] {
        describe(out, label, view, Some((extent, size_of)))?;
    }

    dynamic_1 = dynamic_2;
    writeln!(out, "dynamic_1 = dynamic_2;")?;
    describe(out, "dynamic_1", dynamic_1, None)?;

    dynamic_1 = static_1.into();
    writeln!(out, "dynamic_1 = static_1.into();")?;
    describe(out, "dynamic_1", dynamic_1, None)?;

    // `static_1 = static_3` does not compile: the extents are 4 and 3.
    static_1 = static_2;
    writeln!(out, "static_1 = static_2;")?;
    describe(out, "static_1", static_1, None)?;

    // Dynamic to fixed is the direction that needs a runtime check.
    for (label, source) in [("dynamic_1", dynamic_1), ("dynamic_2", dynamic_2)] {
        write!(out, "static_1 = {label}.try_into(): ")?;
        match FixedSpan::<_, 4>::try_from(source) {
            Ok(converted) => {
                static_1 = converted;
                writeln!(out, "ok")?;
            }
            Err(e) => {
                trace!(%e, "rejected conversion");
                writeln!(out, "{e}")?;
            }
        }
    }
    describe(out, "static_1", static_1, None)?;
    Ok(())
}
