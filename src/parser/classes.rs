//! Class, interface, trait, and member declaration parsers.

use crate::classifier::strip_member_modifiers;
use crate::types::{Class, ClassConst, Interface, Property, Trait};

use super::functions::{split_assignment, strip_trailing_brace};

/// Parse a class header: `class Name`, optionally `extends Parent` or
/// `implements A, B`. When both keywords appear, whichever occurs first in
/// the line wins; the grammar does not model the combined form.
pub(crate) fn parse_class(line: &str) -> Class {
    let header = strip_trailing_brace(line);
    let header = header
        .strip_prefix("abstract ")
        .or_else(|| header.strip_prefix("final "))
        .unwrap_or(header);
    let rest = header.strip_prefix("class ").unwrap_or(header);

    let mut class = Class::default();
    let extends = rest.find("extends ");
    let implements = rest.find("implements ");
    if let Some(ext) = extends
        && implements.is_none_or(|imp| ext < imp)
    {
        class.name = rest[..ext].trim().to_string();
        class.parent_class = Some(rest[ext + "extends ".len()..].trim().to_string());
    } else if let Some(imp) = implements {
        class.name = rest[..imp].trim().to_string();
        class.implements = split_name_list(&rest[imp + "implements ".len()..]);
    } else {
        class.name = rest.trim().to_string();
    }
    class
}

/// Parse an interface header: `interface Name`, optionally
/// `extends Parent1, Parent2, ...`.
pub(crate) fn parse_interface(line: &str) -> Interface {
    let header = strip_trailing_brace(line);
    let rest = header.strip_prefix("interface ").unwrap_or(header);

    let mut interface = Interface::default();
    match rest.find("extends ") {
        Some(ext) => {
            interface.name = rest[..ext].trim().to_string();
            interface.parents = split_name_list(&rest[ext + "extends ".len()..]);
        }
        None => interface.name = rest.trim().to_string(),
    }
    interface
}

/// Parse a trait header: `trait Name`.
pub(crate) fn parse_trait(line: &str) -> Trait {
    let header = strip_trailing_brace(line);
    let rest = header.strip_prefix("trait ").unwrap_or(header);
    Trait {
        name: rest.trim().to_string(),
        ..Trait::default()
    }
}

/// Parse a property declaration inside a class or trait body:
/// optional visibility, optional `static`, `$name`, optional initializer.
pub(crate) fn parse_property(line: &str) -> Property {
    let (rest, visibility, is_static) = strip_member_modifiers(line);
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let (name, value) = split_assignment(rest);
    Property {
        name: name.to_string(),
        visibility: visibility.unwrap_or_default(),
        is_static,
        value: if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        },
        docblock: None,
    }
}

/// Parse a `const` declaration inside a class or interface body.
pub(crate) fn parse_class_const(line: &str) -> ClassConst {
    let (rest, visibility, _) = strip_member_modifiers(line);
    let rest = rest.strip_prefix("const ").unwrap_or(rest);
    let (name, value) = split_assignment(rest);
    ClassConst {
        name: name.to_string(),
        visibility: visibility.unwrap_or_default(),
        value: value.to_string(),
        docblock: None,
    }
}

fn split_name_list(names: &str) -> Vec<String> {
    names
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
