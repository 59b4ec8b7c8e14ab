//! Tests for the assembled transcript.

use pretty_assertions::assert_eq;
use spanscope_tour::{RULE_WIDTH, SECTIONS, TourError, delimiter, run_all, run_selected};

fn transcript(run: impl FnOnce(&mut Vec<u8>) -> spanscope_tour::TourResult<()>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn full_transcript_frames_every_section() {
    let text = transcript(|out| run_all(out));
    let dots = delimiter('.', RULE_WIDTH);
    let dashes = delimiter('-', RULE_WIDTH);

    assert!(text.starts_with("spanscope\n"));
    assert_eq!(text.matches(dashes.as_str()).count(), 1);
    assert_eq!(text.matches(dots.as_str()).count(), SECTIONS.len());
    for section in &SECTIONS {
        let framed = format!("{dots}\n{}\n", section.title);
        assert!(text.contains(&framed), "missing section {}", section.name);
    }
    assert!(text.ends_with("\n\n\n"));
}

#[test]
fn sections_appear_in_catalogue_order() {
    let text = transcript(|out| run_all(out));
    let positions: Vec<usize> = SECTIONS
        .iter()
        .map(|section| text.find(&format!("\n{}\n", section.title)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn selected_sections_only() {
    let text = transcript(|out| run_selected(out, &["size", "front"]));
    let dots = delimiter('.', RULE_WIDTH);

    assert_eq!(text.matches(dots.as_str()).count(), 2);
    let size_at = text.find("span, len\n").unwrap();
    let front_at = text.find("span, front\n").unwrap();
    assert!(size_at < front_at);
    assert!(text.contains("8 7 6 5 4 3 2 \n"));
    assert!(!text.contains("password"));
}

#[test]
fn unknown_section_writes_nothing() {
    let mut out = Vec::new();
    let err = run_selected(&mut out, &["size", "nope"]).unwrap_err();
    assert!(matches!(&err, TourError::UnknownSection { name, .. } if name == "nope"));
    assert!(err.to_string().contains("algorithms, assignment, begin-end"));
    assert!(out.is_empty());
}

#[test]
fn section_names_are_unique() {
    let mut names: Vec<&str> = SECTIONS.iter().map(|section| section.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), SECTIONS.len());
}

#[test]
fn runs_with_tracing_enabled() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let text = transcript(|out| run_selected(out, &["assignment", "subspan"]));
        assert!(text.contains("extent mismatch"));
    });
}
