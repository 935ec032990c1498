//! Diagnostic events produced during extraction.
//!
//! Extraction never aborts on malformed input: every problem is recorded as
//! a [`Diagnostic`] and the scan continues on a best-effort basis. File-level
//! I/O failures, which happen before any line is seen, are the one hard
//! error and are typed as [`ExtractError`].

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Hard failure producing no tree at all.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Classification of a recoverable diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// Structural problem on one line: content outside `<?php ... ?>`, or a
    /// line not recognized in a state that requires recognition. The line is
    /// skipped and extraction continues.
    FormatError,
    /// Docblock style advisory (missing summary, description, or tags).
    StyleWarning,
    /// Scope still open at end of input. The entity stays in the tree,
    /// marked incomplete.
    StructuralInconsistency,
}

/// One diagnostic event: kind, message, and the 1-based source line it was
/// raised on (absent for end-of-input conditions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn format_error(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::FormatError,
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn style_warning(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::StyleWarning,
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::StructuralInconsistency,
            message: message.into(),
            line: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DiagnosticKind::FormatError => "format error",
            DiagnosticKind::StyleWarning => "style",
            DiagnosticKind::StructuralInconsistency => "structure",
        };
        match self.line {
            Some(line) => write!(f, "{kind}: line {line}: {}", self.message),
            None => write!(f, "{kind}: {}", self.message),
        }
    }
}
