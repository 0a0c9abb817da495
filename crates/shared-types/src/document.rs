//! Input contract for a compliance check.
//!
//! The engine itself accepts any pair of strings. Callers validate the note
//! here before handing it over, so an empty note is rejected as a request
//! error rather than evaluated.

use thiserror::Error;

/// Caller-level validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("SOAP note is required")]
    EmptyNote,
}

/// A generated note paired with the transcript it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalDocument {
    note: String,
    transcript: String,
}

impl ClinicalDocument {
    /// Validate and wrap a note. A missing transcript is treated as empty.
    pub fn new<N, T>(note: N, transcript: Option<T>) -> Result<Self, InvalidInputError>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let note = note.into();
        if note.trim().is_empty() {
            return Err(InvalidInputError::EmptyNote);
        }

        Ok(Self {
            note,
            transcript: transcript.map(Into::into).unwrap_or_default(),
        })
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any note with a non-whitespace character is accepted
        #[test]
        fn accepts_notes_with_content(pad in "[ \t\n]{0,5}", body in "[A-Za-z]{1,40}") {
            let note = format!("{}{}{}", pad, body, pad);
            prop_assert!(ClinicalDocument::new(note, None::<String>).is_ok());
        }

        /// Property: whitespace-only notes are always rejected
        #[test]
        fn rejects_whitespace_notes(note in "[ \t\r\n]{0,20}") {
            prop_assert_eq!(
                ClinicalDocument::new(note, Some("x")),
                Err(InvalidInputError::EmptyNote)
            );
        }
    }
}
