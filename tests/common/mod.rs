#![allow(dead_code)]

use phpoutline::{Extraction, Namespace};

/// Helper: run a full extraction over raw PHP source text.
pub fn extract(source: &str) -> Extraction {
    phpoutline::extract_source(source)
}

/// Helper: extract and assert the run produced no diagnostics at all.
pub fn extract_clean(source: &str) -> Namespace {
    let extraction = phpoutline::extract_source(source);
    assert!(
        extraction.diagnostics.is_empty(),
        "expected a clean extraction, got: {:?}",
        extraction.diagnostics
    );
    extraction.root
}
