//! File loading and line normalization.
//!
//! The recognizer operates on normalized lines: runs of whitespace collapsed
//! to a single space, leading/trailing whitespace trimmed, blank lines
//! dropped. This module produces that form; the parser never sees raw text.

use std::fs;
use std::path::Path;

use crate::diagnostics::ExtractError;

/// Normalize raw source text into the line form the recognizer expects.
///
/// Tabs and other whitespace collapse along with spaces, so `\t$x  =  5;`
/// becomes `$x = 5;`. Lines that are empty after trimming are removed
/// entirely, which is why the parser tracks its own line numbers against the
/// normalized sequence rather than the original file.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Read a file and normalize it. Missing or unreadable files are rejected
/// here, before the recognizer is ever invoked.
pub fn load_lines(path: &Path) -> Result<Vec<String>, ExtractError> {
    let text = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_lines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        let lines = normalize_lines("  $x   =\t\t5;  \n");
        assert_eq!(lines, vec!["$x = 5;"]);
    }

    #[test]
    fn drops_blank_lines() {
        let lines = normalize_lines("<?php\n\n   \n\t\nclass Foo\n");
        assert_eq!(lines, vec!["<?php", "class Foo"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = load_lines(Path::new("/nonexistent/nope.php"));
        assert!(err.is_err());
    }

    #[test]
    fn load_reads_and_normalizes() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("f.php");
        std::fs::write(&path, "<?php\n\n  function  foo()  \n").expect("write");
        let lines = load_lines(&path).expect("load");
        assert_eq!(lines, vec!["<?php", "function foo()"]);
    }
}
