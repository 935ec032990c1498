//! Line classification.
//!
//! `classify` pattern-matches one normalized line against the declaration
//! grammar fragments and reports which kind of line it is. Only the kinds
//! legal for the current state are considered, and the first match wins, so
//! the same text can classify differently in different scopes (`const X = 1;`
//! is a global constant at file scope but a class constant inside a class).
//!
//! Everything here is heuristic prefix matching, not tokenization: a header
//! split across several physical lines will not be recognized, and braces
//! are only ever inspected as the first character of a line.

use crate::parser::State;
use crate::types::Visibility;

/// What a single normalized line represents, given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `<?php` opener, only meaningful outside PHP code.
    EnterPhp,
    /// `?>` closer at global scope.
    ExitPhp,
    /// `/**` opening a docblock that continues on later lines.
    DocblockOpen,
    /// A docblock opened and closed on one line (`/** Summary */`).
    DocblockInline,
    /// A line terminating an open docblock (`*/`).
    DocblockClose,
    NamespaceDecl,
    FunctionDecl,
    ClassDecl,
    InterfaceDecl,
    TraitDecl,
    /// A `$name` property inside a class or trait body.
    PropertyVarDecl,
    /// A `const` inside a class or interface body.
    PropertyConstDecl,
    MethodDecl,
    /// `$GLOBALS['name']` in any position where globals are scanned for.
    GlobalVarDecl,
    /// A bare `$name = ...;` at global scope.
    PlainVarDecl,
    /// A `define('NAME', value);` call at global scope.
    DefineDecl,
    /// A `const NAME = value;` at global scope.
    ConstDecl,
    /// A line whose first character is `{`.
    BlockOpen,
    /// A line whose first character is `}`.
    BlockClose,
    Unrecognized,
}

/// Classify one normalized line within the subset of kinds legal for
/// `state`.
pub fn classify(line: &str, state: State) -> LineKind {
    match state {
        State::OutOfPhp => {
            if line.starts_with("<?php") {
                LineKind::EnterPhp
            } else {
                LineKind::Unrecognized
            }
        }
        State::Global => classify_global(line),
        State::InClass => classify_class_body(line),
        State::InInterface => classify_interface_body(line),
        State::InTrait => classify_trait_body(line),
        State::InFunction | State::InMethod => classify_code_body(line),
        State::InDocblock => {
            if line.ends_with("*/") {
                LineKind::DocblockClose
            } else {
                LineKind::Unrecognized
            }
        }
    }
}

fn classify_global(line: &str) -> LineKind {
    if line == "?>" {
        return LineKind::ExitPhp;
    }
    if let Some(kind) = classify_docblock_delimiter(line) {
        return kind;
    }
    if line.starts_with("namespace ") {
        return LineKind::NamespaceDecl;
    }
    if line.starts_with("$GLOBALS[") {
        return LineKind::GlobalVarDecl;
    }
    if line.starts_with('$') {
        return LineKind::PlainVarDecl;
    }
    if line.starts_with("define(") || line.starts_with("define (") {
        return LineKind::DefineDecl;
    }
    if line.starts_with("const ") {
        return LineKind::ConstDecl;
    }
    if line.starts_with("function ") {
        return LineKind::FunctionDecl;
    }
    if is_class_header(line) {
        return LineKind::ClassDecl;
    }
    if line.starts_with("interface ") {
        return LineKind::InterfaceDecl;
    }
    if line.starts_with("trait ") {
        return LineKind::TraitDecl;
    }
    LineKind::Unrecognized
}

fn classify_class_body(line: &str) -> LineKind {
    if line.starts_with('}') {
        return LineKind::BlockClose;
    }
    if let Some(kind) = classify_docblock_delimiter(line) {
        return kind;
    }
    if is_property_var(line) {
        return LineKind::PropertyVarDecl;
    }
    if is_property_const(line) {
        return LineKind::PropertyConstDecl;
    }
    if is_method_header(line) {
        return LineKind::MethodDecl;
    }
    if line.starts_with('{') {
        return LineKind::BlockOpen;
    }
    LineKind::Unrecognized
}

fn classify_interface_body(line: &str) -> LineKind {
    if line.starts_with('}') {
        return LineKind::BlockClose;
    }
    if let Some(kind) = classify_docblock_delimiter(line) {
        return kind;
    }
    if is_property_const(line) {
        return LineKind::PropertyConstDecl;
    }
    if is_method_header(line) {
        return LineKind::MethodDecl;
    }
    if line.starts_with('{') {
        return LineKind::BlockOpen;
    }
    LineKind::Unrecognized
}

fn classify_trait_body(line: &str) -> LineKind {
    if line.starts_with('}') {
        return LineKind::BlockClose;
    }
    if let Some(kind) = classify_docblock_delimiter(line) {
        return kind;
    }
    if is_property_var(line) {
        return LineKind::PropertyVarDecl;
    }
    if is_method_header(line) {
        return LineKind::MethodDecl;
    }
    if line.starts_with('{') {
        return LineKind::BlockOpen;
    }
    LineKind::Unrecognized
}

/// Inside a function or method body only the brace lines and `$GLOBALS`
/// declarations matter; everything else is opaque body text.
fn classify_code_body(line: &str) -> LineKind {
    if line.starts_with('{') {
        return LineKind::BlockOpen;
    }
    if line.starts_with('}') {
        return LineKind::BlockClose;
    }
    if line.starts_with("$GLOBALS[") {
        return LineKind::GlobalVarDecl;
    }
    LineKind::Unrecognized
}

fn classify_docblock_delimiter(line: &str) -> Option<LineKind> {
    if !line.starts_with("/**") {
        return None;
    }
    if line != "/**" && line.ends_with("*/") {
        Some(LineKind::DocblockInline)
    } else {
        Some(LineKind::DocblockOpen)
    }
}

fn is_class_header(line: &str) -> bool {
    let line = line
        .strip_prefix("abstract ")
        .or_else(|| line.strip_prefix("final "))
        .unwrap_or(line);
    line.starts_with("class ")
}

fn is_property_var(line: &str) -> bool {
    let (rest, _, _) = strip_member_modifiers(line);
    rest.starts_with('$')
}

fn is_property_const(line: &str) -> bool {
    let (rest, _, _) = strip_member_modifiers(line);
    rest.starts_with("const ")
}

fn is_method_header(line: &str) -> bool {
    let (rest, _, _) = strip_member_modifiers(line);
    rest.starts_with("function ")
}

/// Strip leading member modifiers in either order (`public static` or
/// `static public`), returning the remainder, the visibility if one was
/// named, and whether `static` appeared.
pub(crate) fn strip_member_modifiers(line: &str) -> (&str, Option<Visibility>, bool) {
    let (rest, static_first) = strip_static(line);
    let (rest, visibility) = strip_visibility(rest);
    let (rest, static_second) = strip_static(rest);
    (rest, visibility, static_first || static_second)
}

/// Strip a leading visibility keyword, returning the remainder and the
/// visibility it named (or `None` when absent, which PHP treats as public).
pub(crate) fn strip_visibility(line: &str) -> (&str, Option<Visibility>) {
    if let Some(rest) = line.strip_prefix("public ") {
        (rest, Some(Visibility::Public))
    } else if let Some(rest) = line.strip_prefix("protected ") {
        (rest, Some(Visibility::Protected))
    } else if let Some(rest) = line.strip_prefix("private ") {
        (rest, Some(Visibility::Private))
    } else {
        (line, None)
    }
}

/// Strip a leading `static` keyword, returning the remainder and whether it
/// was present.
pub(crate) fn strip_static(line: &str) -> (&str, bool) {
    match line.strip_prefix("static ") {
        Some(rest) => (rest, true),
        None => (line, false),
    }
}
