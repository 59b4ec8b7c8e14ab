use std::io::{self, Write};

use spanscope_span::Span;

use super::write_row;
use crate::TourResult;

/// Prints the first element, then overwrites it.
fn transmogrify(out: &mut dyn Write, span: Span<'_, i32>) -> io::Result<()> {
    if let Some(first) = span.front() {
        writeln!(out, "{first}")?;
        span.set(0, 2);
    }
    Ok(())
}

pub(super) fn begin_end(out: &mut dyn Write) -> TourResult<()> {
    let mut array = [1, 3, 4, 5];
    let span = Span::from_mut(&mut array);
    write_row(out, span)?;
    transmogrify(out, span)?;
    write_row(out, span)?;
    Ok(())
}

pub(super) fn rbegin(out: &mut dyn Write) -> TourResult<()> {
    let mut code = *b"@droNE_T0P_w$s@s#_SECRET_a,p^42!";
    let code = Span::from_mut(&mut code);

    let hacker = |c: u8| c.wrapping_sub(0o141) < 120;
    let revealed: String = code
        .iter()
        .rev()
        .filter(|&c| hacker(c))
        .map(char::from)
        .collect();
    writeln!(out, "{revealed}")?;
    Ok(())
}

pub(super) fn rend(out: &mut dyn Write) -> TourResult<()> {
    let mut bars = [
        "\u{2581}", "\u{2582}", "\u{2583}", "\u{2584}", "\u{2585}", "\u{2586}", "\u{2587}",
        "\u{2588}",
    ];
    let bars = Span::from_mut(&mut bars);

    for bar in bars {
        write!(out, "{bar} ")?;
    }
    write!(out, " ")?;
    for bar in bars.iter().rev() {
        write!(out, "{bar} ")?;
    }
    writeln!(out)?;
    Ok(())
}
