//! Layout of the printed transcript: header, rules and section framing.

use std::io::Write;

use crate::{Section, TourResult};

/// Width of the `-` and `.` rule lines.
pub const RULE_WIDTH: usize = 80;

/// A rule line of `width` copies of `fill`.
pub fn delimiter(fill: char, width: usize) -> String {
    std::iter::repeat_n(fill, width).collect()
}

/// Writes sections to a sink, framed by rules.
pub struct Transcript<'w> {
    out: &'w mut dyn Write,
}

impl<'w> Transcript<'w> {
    pub fn new(out: &'w mut dyn Write) -> Self {
        Transcript { out }
    }

    pub fn header(&mut self) -> TourResult<()> {
        writeln!(self.out, "spanscope")?;
        writeln!(self.out, "Span tour version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", delimiter('-', RULE_WIDTH))?;
        Ok(())
    }

    /// Dotted rule, title, body, then a blank separator line.
    pub fn section(&mut self, section: &Section) -> TourResult<()> {
        writeln!(self.out, "{}", delimiter('.', RULE_WIDTH))?;
        writeln!(self.out, "{}", section.title)?;
        (section.run)(self.out)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn finish(self) -> TourResult<()> {
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
