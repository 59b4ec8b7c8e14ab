use std::io::{self, Write};

use spanscope_span::Span;

use crate::TourResult;

/// Index of the byte holding the IEEE 754 sign bit of an `f32`.
const SIGN_BYTE: usize = if cfg!(target_endian = "little") { 3 } else { 0 };

fn dump(out: &mut dyn Write, value: f32, bytes: Span<'_, u8>) -> io::Result<()> {
    write!(out, "{value:>8.5} = {{ ")?;
    for b in bytes {
        write!(out, "{b:02X} ")?;
    }
    writeln!(out, "}}")
}

pub(super) fn run(out: &mut dyn Write) -> TourResult<()> {
    let mut data = [3.141_592_f32];
    let floats = Span::from_mut(&mut data);
    let bytes = floats.as_bytes();

    dump(out, floats[0].get(), bytes)?;

    bytes[SIGN_BYTE].set(bytes[SIGN_BYTE].get() | 0b1000_0000);

    dump(out, floats[0].get(), bytes)?;
    Ok(())
}
