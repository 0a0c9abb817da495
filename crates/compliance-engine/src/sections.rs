//! Section boundary detection over loosely formatted notes
//!
//! Generated notes rarely agree on header style: `SUBJECTIVE`,
//! `**SUBJECTIVE**`, `Subjective:` and `**SUBJECTIVE (S):**` all occur.
//! A header must start a line (or the text). The window handed to content
//! rules is a fixed budget of characters after the section name and is not
//! clipped at the next header, so short sections bleed into their
//! neighbours.

use lazy_static::lazy_static;
use regex::Regex;

/// Characters of note text kept after a section name
pub const SECTION_WINDOW_CHARS: usize = 800;

/// The four sections of a SOAP note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoapSection {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl SoapSection {
    pub const ALL: [SoapSection; 4] = [
        SoapSection::Subjective,
        SoapSection::Objective,
        SoapSection::Assessment,
        SoapSection::Plan,
    ];

    /// Canonical lowercase header name
    pub fn header_name(&self) -> &'static str {
        match self {
            SoapSection::Subjective => "subjective",
            SoapSection::Objective => "objective",
            SoapSection::Assessment => "assessment",
            SoapSection::Plan => "plan",
        }
    }

    fn header_pattern(&self) -> &'static Regex {
        match self {
            SoapSection::Subjective => &SUBJECTIVE_HEADER,
            SoapSection::Objective => &OBJECTIVE_HEADER,
            SoapSection::Assessment => &ASSESSMENT_HEADER,
            SoapSection::Plan => &PLAN_HEADER,
        }
    }
}

lazy_static! {
    static ref SUBJECTIVE_HEADER: Regex = header_regex("subjective").unwrap();
    static ref OBJECTIVE_HEADER: Regex = header_regex("objective").unwrap();
    static ref ASSESSMENT_HEADER: Regex = header_regex("assessment").unwrap();
    static ref PLAN_HEADER: Regex = header_regex("plan").unwrap();
}

/// Header pattern for `name`: optional `**`, the name, an optional one-letter
/// abbreviation like `(S)`, then any run of colons, asterisks or whitespace.
fn header_regex(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i)(?:^|\n)\s*\*{{0,2}}\s*(?P<name>{})\s*(?:\([a-z]\))?\s*[:*\s]*\*{{0,2}}",
        regex::escape(name)
    ))
}

/// Result of looking for a section in a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionMatch<'a> {
    /// Whether a header for the section was found
    pub present: bool,
    /// Text from the section name onward, bounded by the window budget.
    /// Empty when the section is absent.
    pub window_text: &'a str,
}

impl SectionMatch<'_> {
    pub fn absent() -> Self {
        Self::default()
    }
}

/// Find one of the standard SOAP sections in `note`
pub fn locate_section(note: &str, section: SoapSection) -> SectionMatch<'_> {
    locate_with(note, section.header_pattern())
}

/// Find a section by an arbitrary header name, e.g. "history".
///
/// Compiles a header pattern on every call; prefer [`locate_section`] for the
/// SOAP sections.
pub fn locate_header<'a>(note: &'a str, name: &str) -> SectionMatch<'a> {
    match header_regex(name) {
        Ok(pattern) => locate_with(note, &pattern),
        Err(_) => SectionMatch::absent(),
    }
}

fn locate_with<'a>(note: &'a str, header: &Regex) -> SectionMatch<'a> {
    let Some(name) = header.captures(note).and_then(|caps| caps.name("name")) else {
        return SectionMatch::absent();
    };

    let tail = &note[name.start()..];
    let budget = name.as_str().chars().count() + SECTION_WINDOW_CHARS;
    let end = tail
        .char_indices()
        .nth(budget)
        .map(|(offset, _)| offset)
        .unwrap_or(tail.len());

    SectionMatch {
        present: true,
        window_text: &tail[..end],
    }
}
