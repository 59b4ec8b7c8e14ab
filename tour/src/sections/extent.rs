//! Which backing storage yields which extent.

use std::cell::Cell;
use std::io::{self, Write};

use bumpalo::Bump;
use smallvec::{SmallVec, smallvec};
use spanscope_span::{Extent, FixedSpan, Span};

use crate::TourResult;

fn print(out: &mut dyn Write, name: &str, extent: Extent) -> io::Result<()> {
    match extent {
        Extent::Dynamic => writeln!(out, "{name}, dynamic extent"),
        Extent::Static(n) => writeln!(out, "{name}, static extent = {n}"),
    }
}

pub(super) fn run(out: &mut dyn Write) -> TourResult<()> {
    let mut ary1 = [1, 2, 3, 4, 5];
    let ary1 = Cell::from_mut(&mut ary1[..]).as_slice_of_cells();

    let span1 = FixedSpan::<_, 5>::try_from_cells(ary1)?;
    print(out, "span1", span1.extent())?;

    let span2 = Span::new(ary1);
    print(out, "span2", span2.extent())?;

    let mut ary2: [i32; 5] = [1, 2, 3, 4, 5];
    let span3 = FixedSpan::from_mut(&mut ary2);
    print(out, "span3", span3.extent())?;

    let mut vec1 = vec![1, 2, 3, 4, 5];
    let span4 = Span::from_mut(&mut vec1);
    print(out, "span4", span4.extent())?;

    let mut small: SmallVec<[i32; 8]> = smallvec![1, 2, 3, 4, 5];
    let span5 = Span::from_mut(&mut small);
    print(out, "span5", span5.extent())?;

    let arena = Bump::new();
    let span6 = Span::from_mut(arena.alloc_slice_copy(&[1, 2, 3, 4, 5]));
    print(out, "span6", span6.extent())?;
    Ok(())
}
