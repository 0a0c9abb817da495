//! Reading notes and transcripts from files or stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a file, or stdin when the path is `-`
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Name shown in report headers
pub fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("-")), "<stdin>");
        assert_eq!(display_name(Path::new("notes/visit.txt")), "notes/visit.txt");
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_source(&PathBuf::from("/nonexistent/note.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/note.txt"));
    }
}
