//! Function, method, and global declaration parsers.
//!
//! Each parser takes one already-classified line and extracts its semantic
//! payload by positional substring slicing relative to the fixed keywords
//! and punctuation of the declaration grammar. All of them assume the
//! whitespace conventions produced by normalization: single spaces, no
//! leading/trailing whitespace.

use crate::classifier::strip_member_modifiers;
use crate::types::{Function, GlobalConst, GlobalVar, Method};

/// Strip a trailing `{` (K&R-style headers) from a declaration line.
pub(crate) fn strip_trailing_brace(line: &str) -> &str {
    match line.strip_suffix('{') {
        Some(rest) => rest.trim_end(),
        None => line,
    }
}

/// Whether a declaration header also opens its block on the same line.
pub(crate) fn header_opens_block(line: &str) -> bool {
    line.ends_with('{')
}

/// Whether a line carries a `namespace` declaration, including the combined
/// `<?php namespace Foo;` form.
pub(crate) fn is_namespace_line(line: &str) -> bool {
    line.contains("namespace ")
}

/// Extract the namespace name from a `namespace Foo\Bar;` line (possibly
/// prefixed with `<?php`).
pub(crate) fn parse_namespace(line: &str) -> String {
    let rest = match line.find("namespace ") {
        Some(pos) => &line[pos + "namespace ".len()..],
        None => line,
    };
    rest.trim_end_matches(';').trim().to_string()
}

/// Parse a standalone function header: `function name($a, $b = 5): type {`.
///
/// The body stays empty here; the state machine accumulates it while the
/// function scope is open.
pub(crate) fn parse_function(line: &str) -> Function {
    let header = strip_trailing_brace(line);
    let open = header.find('(');
    let name = match (header.find("function "), open) {
        (Some(kw), Some(paren)) if kw + 9 <= paren => header[kw + 9..paren].trim().to_string(),
        (Some(kw), None) => header[kw + 9..].trim().to_string(),
        _ => String::new(),
    };
    let parameters = match open {
        Some(paren) => parse_parameters(&header[paren..]),
        None => Vec::new(),
    };
    Function {
        name,
        return_type: parse_return_type(header),
        parameters,
        ..Function::default()
    }
}

/// Parse a method header: optional visibility, optional `static`, then a
/// function header.
pub(crate) fn parse_method(line: &str) -> Method {
    let (rest, visibility, is_static) = strip_member_modifiers(line);
    let function = parse_function(rest);
    Method {
        name: function.name,
        visibility: visibility.unwrap_or_default(),
        is_static,
        return_type: function.return_type,
        parameters: function.parameters,
        ..Method::default()
    }
}

/// Walk a parameter list left to right. While a `$` remains, the parameter
/// name runs from just after it to the next `,` (or `)` when no comma
/// remains); a default value after the name is dropped.
fn parse_parameters(mut rest: &str) -> Vec<String> {
    let mut parameters = Vec::new();
    while let Some(dollar) = rest.find('$') {
        let after = &rest[dollar + 1..];
        let end = match after.find(',') {
            Some(comma) => comma,
            None => after.find(')').unwrap_or(after.len()),
        };
        if let Some(name) = after[..end].trim().split([' ', '=']).next()
            && !name.is_empty()
        {
            parameters.push(name.to_string());
        }
        rest = after.get(end + 1..).unwrap_or("");
    }
    parameters
}

/// Extract a PHP return-type annotation (`): int`) from a header already
/// stripped of its trailing brace. Empty string when absent.
fn parse_return_type(header: &str) -> String {
    let Some(close) = header.rfind(')') else {
        return String::new();
    };
    let tail = header[close + 1..].trim();
    let tail = match tail.strip_suffix(';') {
        Some(rest) => rest.trim_end(),
        None => tail,
    };
    match tail.strip_prefix(':') {
        Some(annotation) => annotation.trim().to_string(),
        None => String::new(),
    }
}

/// Parse a `define('NAME', value);` call into a global constant.
pub(crate) fn parse_define(line: &str) -> GlobalConst {
    let open = line.find('(');
    let comma = line.find(',');
    let close = line.rfind(')');
    let name = match (open, comma) {
        (Some(open), Some(comma)) if open + 1 < comma => {
            line[open + 1..comma].trim().trim_matches(['\'', '"']).to_string()
        }
        _ => String::new(),
    };
    let value = match (comma, close) {
        (Some(comma), Some(close)) if comma + 1 < close => line[comma + 1..close].trim().to_string(),
        _ => String::new(),
    };
    GlobalConst { name, value }
}

/// Parse a global `const NAME = value;` declaration.
pub(crate) fn parse_global_const(line: &str) -> GlobalConst {
    let rest = line.strip_prefix("const ").unwrap_or(line);
    let (name, value) = split_assignment(rest);
    GlobalConst {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Parse a bare `$name = value;` declaration at global scope.
pub(crate) fn parse_plain_var(line: &str) -> GlobalVar {
    let rest = line.strip_prefix('$').unwrap_or(line);
    let end = rest
        .find('=')
        .or_else(|| rest.find(';'))
        .unwrap_or(rest.len());
    GlobalVar::new(rest[..end].trim())
}

/// Parse a `$GLOBALS['name']` declaration, wherever it appears.
pub(crate) fn parse_global_var(line: &str) -> GlobalVar {
    let name = match (line.find('['), line.find(']')) {
        (Some(open), Some(close)) if open + 1 < close => {
            line[open + 1..close].trim().trim_matches(['\'', '"'])
        }
        _ => "",
    };
    GlobalVar::new(name)
}

/// Split `NAME = value;` into name and value, tolerating a missing
/// initializer or terminator.
pub(crate) fn split_assignment(rest: &str) -> (&str, &str) {
    match rest.find('=') {
        Some(eq) => {
            let name = rest[..eq].trim();
            let tail = &rest[eq + 1..];
            let value = match tail.find(';') {
                Some(semi) => tail[..semi].trim(),
                None => tail.trim(),
            };
            (name, value)
        }
        None => (rest.trim_end_matches(';').trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Visibility;

    #[test]
    fn function_header_with_parameters() {
        let f = parse_function("function greet($name, $greeting = 'hi')");
        assert_eq!(f.name, "greet");
        assert_eq!(f.parameters, vec!["name", "greeting"]);
        assert_eq!(f.return_type, "");
    }

    #[test]
    fn function_header_kr_brace_and_return_type() {
        let f = parse_function("function count($items): int {");
        assert_eq!(f.name, "count");
        assert_eq!(f.parameters, vec!["items"]);
        assert_eq!(f.return_type, "int");
    }

    #[test]
    fn function_without_parameters() {
        let f = parse_function("function init()");
        assert_eq!(f.name, "init");
        assert!(f.parameters.is_empty());
    }

    #[test]
    fn method_modifiers() {
        let m = parse_method("private static function make($config) {");
        assert_eq!(m.name, "make");
        assert_eq!(m.visibility, Visibility::Private);
        assert!(m.is_static);
        assert_eq!(m.parameters, vec!["config"]);

        let m = parse_method("function helper($x)");
        assert_eq!(m.visibility, Visibility::Public);
        assert!(!m.is_static);
    }

    #[test]
    fn interface_signature_return_type() {
        let m = parse_method("public function area(): float;");
        assert_eq!(m.name, "area");
        assert_eq!(m.return_type, "float");
        assert!(m.parameters.is_empty());
    }

    #[test]
    fn define_call() {
        let c = parse_define("define('MAX', 10);");
        assert_eq!(c.name, "MAX");
        assert_eq!(c.value, "10");

        let c = parse_define("define(\"GREETING\", 'hello world');");
        assert_eq!(c.name, "GREETING");
        assert_eq!(c.value, "'hello world'");
    }

    #[test]
    fn global_const() {
        let c = parse_global_const("const VERSION = '1.0';");
        assert_eq!(c.name, "VERSION");
        assert_eq!(c.value, "'1.0'");
    }

    #[test]
    fn plain_and_bracketed_globals() {
        assert_eq!(parse_plain_var("$x = 5;").name, "x");
        assert_eq!(parse_plain_var("$flag;").name, "flag");
        assert_eq!(parse_global_var("$GLOBALS['debug'] = true;").name, "debug");
    }

    #[test]
    fn namespace_lines() {
        assert_eq!(parse_namespace("namespace App\\Models;"), "App\\Models");
        assert_eq!(parse_namespace("<?php namespace App;"), "App");
        assert!(is_namespace_line("<?php namespace App;"));
        assert!(!is_namespace_line("<?php"));
    }
}
