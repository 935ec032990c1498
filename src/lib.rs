//! Lightweight PHP structure extraction.
//!
//! phpoutline pulls a structural model out of PHP source text — namespaces,
//! classes, interfaces, traits, functions, methods, properties, constants,
//! global variables, and the docblocks attached to them — in a single
//! line-oriented pass. It is a documentation/metadata front end, not a
//! compiler: lines are classified by heuristic pattern matching, block
//! nesting is tracked by counting brace lines, and no expression is ever
//! tokenized.
//!
//! The usual entry points are [`extract_source`] for text already in
//! memory and [`extract_file`] for a path; both return an [`Extraction`]
//! holding the root [`Namespace`] of the declaration tree plus any
//! diagnostics raised along the way. Malformed input never aborts a run —
//! offending lines are skipped and reported, and scopes left open at end of
//! input stay in the tree marked incomplete.
//!
//! Known limitations, by design: declarations split across physical lines
//! are not recognized, and braces inside string or comment literals are
//! indistinguishable from syntactic ones when they begin a line.

use std::path::Path;

pub mod classifier;
pub mod diagnostics;
pub mod docblock;
pub mod loader;
pub mod parser;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticKind, ExtractError};
pub use parser::{Extraction, Extractor, State, extract_lines};
pub use types::{
    Class, ClassConst, Docblock, Function, GlobalConst, GlobalVar, Interface, Method, Namespace,
    Property, Trait, Visibility,
};

/// Normalize and extract raw PHP source text.
pub fn extract_source(text: &str) -> Extraction {
    extract_lines(loader::normalize_lines(text))
}

/// Load, normalize, and extract a PHP source file.
pub fn extract_file(path: &Path) -> Result<Extraction, ExtractError> {
    Ok(extract_lines(loader::load_lines(path)?))
}
