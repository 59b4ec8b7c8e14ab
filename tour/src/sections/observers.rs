use std::io::Write;
use std::mem::{size_of, size_of_val};

use spanscope_span::{FixedSpan, Span};
use static_assertions::const_assert_eq;

use crate::TourResult;

pub(super) fn size(out: &mut dyn Write) -> TourResult<()> {
    let mut antique_array = [1, 2, 3, 4, 5, 6, 7, 8];
    let span = Span::from_mut(&mut antique_array);

    writeln!(
        out,
        "{} {} {} {} {} {} {} ",
        span.len(),
        span.first(7).len(),
        span.first_n::<6>().len(),
        span.last(5).len(),
        span.last_n::<4>().len(),
        span.subspan(2, 3).len(),
        span.subspan_n::<3, 2>().len(),
    )?;
    Ok(())
}

const_assert_eq!(size_of::<i32>(), 4);
const_assert_eq!(size_of::<[i32; 5]>(), 20);

pub(super) fn size_bytes(out: &mut dyn Write) -> TourResult<()> {
    let mut ary: [i32; 5] = [1, 2, 3, 4, 5];
    let (count, bytes) = (ary.len(), size_of_val(&ary));
    let spn = FixedSpan::from_mut(&mut ary);

    writeln!(out, "size_of::<i32>()  : {}", size_of::<i32>())?;
    writeln!(out, "ary.len()         : {count}")?;
    writeln!(out, "size_of_val(&ary) : {bytes}")?;
    writeln!(out, "spn.len()         : {}", spn.len())?;
    writeln!(out, "spn.size_bytes()  : {}", spn.size_bytes())?;
    Ok(())
}

pub(super) fn empty(out: &mut dyn Write) -> TourResult<()> {
    let mut text = *b"ABCDEF";
    let mut span = Span::from_mut(&mut text);

    loop {
        let rest: String = span.iter().map(char::from).collect();
        writeln!(out, "{rest:?}")?;
        if span.is_empty() {
            return Ok(());
        }
        span = span.last(span.len() - 1);
    }
}
