//! A guided tour of `spanscope-span`.
//!
//! The tour is a fixed catalogue of independent [`Section`]s. Each one builds
//! some storage, views it in a few different ways, and writes what it sees.
//! Output goes to any [`std::io::Write`], so the binary prints to stdout and
//! the tests capture into a `Vec<u8>`.
//!
//! ```
//! let mut out = Vec::new();
//! spanscope_tour::run_selected(&mut out, &["size"]).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("8 7 6 5 4 3 2 \n"));
//! ```

mod error;
mod sections;
mod transcript;

use std::io::Write;

use tracing::debug;

pub use error::{TourError, TourResult};
pub use sections::{SECTIONS, Section};
pub use transcript::{RULE_WIDTH, Transcript, delimiter};

/// Looks a section up by its short name.
///
/// # Errors
///
/// [`TourError::UnknownSection`] listing the valid names.
pub fn find_section(name: &str) -> TourResult<&'static Section> {
    SECTIONS
        .iter()
        .find(|section| section.name == name)
        .ok_or_else(|| TourError::UnknownSection {
            name: name.to_string(),
            known: SECTIONS
                .iter()
                .map(|section| section.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Writes the whole transcript.
///
/// # Errors
///
/// Fails if the sink rejects a write.
pub fn run_all(out: &mut dyn Write) -> TourResult<()> {
    run_sections(out, SECTIONS.iter())
}

/// Writes the transcript restricted to `names`, in the order given.
///
/// # Errors
///
/// Fails on an unknown name before anything is written, or if the sink
/// rejects a write.
pub fn run_selected(out: &mut dyn Write, names: &[impl AsRef<str>]) -> TourResult<()> {
    let sections = names
        .iter()
        .map(|name| find_section(name.as_ref()))
        .collect::<TourResult<Vec<_>>>()?;
    run_sections(out, sections)
}

fn run_sections<'s>(
    out: &mut dyn Write,
    sections: impl IntoIterator<Item = &'s Section>,
) -> TourResult<()> {
    let mut transcript = Transcript::new(out);
    transcript.header()?;
    for section in sections {
        debug!(section = section.name, "running section");
        transcript.section(section)?;
    }
    transcript.finish()
}
