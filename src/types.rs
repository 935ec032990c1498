//! Data types used throughout phpoutline.
//!
//! This module contains all the "model" structs and enums that represent
//! extracted PHP structure (namespaces, classes, interfaces, traits,
//! functions, methods, properties, constants) together with the `add_*`
//! operations used by the scope state machine to grow the declaration tree.
//!
//! The root of every extraction is a [`Namespace`] named `"/"`; all other
//! entities are descendants of it. Everything is owned, serializable and
//! freely shareable once extraction has finished.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Visibility of a class member (method, property, or constant).
///
/// In PHP, members without an explicit visibility modifier default to `Public`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A parsed documentation comment (`/** ... */`).
///
/// Tag lines (`@param`, `@return`, ...) are captured raw; this tool does not
/// interpret them further.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docblock {
    /// The first content line, unless that line is itself a tag line.
    pub summary: String,
    /// Content lines between the summary and the first tag line,
    /// concatenated.
    pub description: String,
    /// Remaining lines, each starting with `@`, left as raw text.
    pub tags: Vec<String>,
}

impl Docblock {
    /// Whether the docblock carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.description.is_empty() && self.tags.is_empty()
    }
}

/// A property declared in a class or trait body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// The property name WITHOUT the `$` prefix (e.g. "name", "age").
    /// This matches PHP access syntax: `$this->name` not `$this->$name`.
    pub name: String,
    /// Visibility of the property (public, protected, or private).
    pub visibility: Visibility,
    /// Whether the property is static.
    pub is_static: bool,
    /// The literal initializer text after `=`, if any (e.g. "0", "[]").
    pub value: Option<String>,
    /// The docblock immediately preceding the declaration, if any.
    pub docblock: Option<Docblock>,
}

/// A `const` declared in a class or interface body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConst {
    /// The constant name (e.g. "MAX_SIZE", "STATUS_ACTIVE").
    pub name: String,
    /// Visibility of the constant (public, protected, or private).
    pub visibility: Visibility,
    /// The literal value text between `=` and `;`.
    pub value: String,
    /// The docblock immediately preceding the declaration, if any.
    pub docblock: Option<Docblock>,
}

/// A variable declared at global scope, either directly (`$x = 5;`) or via
/// the `$GLOBALS['x']` superglobal (which may appear inside function bodies
/// and is still promoted to the root namespace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalVar {
    /// The variable name WITHOUT the `$` prefix.
    pub name: String,
    /// Optional type annotation; empty extraction leaves this `None`.
    pub type_hint: Option<String>,
}

impl GlobalVar {
    pub fn new(name: impl Into<String>) -> Self {
        GlobalVar {
            name: name.into(),
            type_hint: None,
        }
    }
}

/// A constant declared at global scope via `define('NAME', value)` or a
/// top-level `const NAME = value;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConst {
    /// The constant name (quotes stripped for the `define()` form).
    pub name: String,
    /// The literal value text as written in source.
    pub value: String,
}

/// A standalone function declared at namespace scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// The function name (e.g. "session").
    pub name: String,
    /// Return-type annotation text (e.g. "int", "?Foo"); empty if unknown.
    pub return_type: String,
    /// Parameter names in declaration order, WITHOUT the `$` prefix.
    pub parameters: Vec<String>,
    /// The raw source body, one normalized line per element, inclusive of
    /// the brace lines that delimit it.
    pub body: Vec<String>,
    /// The docblock immediately preceding the declaration, if any.
    pub docblock: Option<Docblock>,
    /// Set when the block was still open at end of input.
    pub incomplete: bool,
}

/// A method declared in a class, interface, or trait body.
///
/// Interface methods are signatures only and carry an empty `body`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// The method name (e.g. "updateText").
    pub name: String,
    /// Visibility of the method (public, protected, or private).
    pub visibility: Visibility,
    /// Whether the method is static.
    pub is_static: bool,
    /// Return-type annotation text; empty if unknown.
    pub return_type: String,
    /// Parameter names in declaration order, WITHOUT the `$` prefix.
    pub parameters: Vec<String>,
    /// The raw source body; empty for bodiless signatures.
    pub body: Vec<String>,
    /// The docblock immediately preceding the declaration, if any.
    pub docblock: Option<Docblock>,
    /// Set when the block was still open at end of input.
    pub incomplete: bool,
}

/// A class declaration and the members extracted from its body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// The name of the class (e.g. "User").
    pub name: String,
    /// The parent class name from the `extends` clause, if any. At most one.
    pub parent_class: Option<String>,
    /// Interface names from the `implements` clause.
    pub implements: Vec<String>,
    /// The properties defined directly in this class, in source order.
    pub properties: Vec<Property>,
    /// The constants defined directly in this class, in source order.
    pub constants: Vec<ClassConst>,
    /// The methods defined directly in this class, in source order.
    pub methods: Vec<Method>,
    /// The docblock immediately preceding the declaration, if any.
    pub docblock: Option<Docblock>,
    /// Set when the body was still open at end of input.
    pub incomplete: bool,
}

/// An interface declaration. Bodies hold constants and method signatures
/// only; no brace tracking happens inside an interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// The name of the interface (e.g. "Loggable").
    pub name: String,
    /// Parent interface names from the `extends` clause, zero or more.
    pub parents: Vec<String>,
    /// The constants defined in this interface, in source order.
    pub constants: Vec<ClassConst>,
    /// The method signatures declared in this interface, in source order.
    pub methods: Vec<Method>,
    /// The docblock immediately preceding the declaration, if any.
    pub docblock: Option<Docblock>,
    /// Set when the body was still open at end of input.
    pub incomplete: bool,
}

/// A trait declaration and the members extracted from its body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    /// The name of the trait (e.g. "Notifiable").
    pub name: String,
    /// The properties defined in this trait, in source order.
    pub properties: Vec<Property>,
    /// The methods defined in this trait, in source order.
    pub methods: Vec<Method>,
    /// The docblock immediately preceding the declaration, if any.
    pub docblock: Option<Docblock>,
    /// Set when the body was still open at end of input.
    pub incomplete: bool,
}

/// A namespace node. The extraction root is the namespace named `"/"`;
/// file-level `namespace Foo\Bar;` declarations become its children.
///
/// Global variables and constants always live on the root namespace, no
/// matter which namespace was current when they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// The namespace name as written in source; `"/"` for the root.
    pub name: String,
    /// Child namespaces, in declaration order. Duplicate names append a
    /// second sibling rather than merging.
    pub namespaces: Vec<Namespace>,
    /// Standalone functions declared in this namespace, in source order.
    pub functions: Vec<Function>,
    /// Classes declared in this namespace, in source order.
    pub classes: Vec<Class>,
    /// Interfaces declared in this namespace, in source order.
    pub interfaces: Vec<Interface>,
    /// Traits declared in this namespace, in source order.
    pub traits: Vec<Trait>,
    /// Global variables by name. Root namespace only.
    pub global_vars: BTreeMap<String, GlobalVar>,
    /// Global constants by name. Root namespace only.
    pub constants: BTreeMap<String, GlobalConst>,
    /// File-level documentation, if the file opens with a docblock that is
    /// superseded by a second docblock before any declaration.
    pub docblock: Option<Docblock>,
}

impl Namespace {
    /// Create the extraction root, named `"/"`.
    pub fn root() -> Self {
        Namespace {
            name: "/".to_string(),
            ..Namespace::default()
        }
    }

    pub fn new(name: impl Into<String>) -> Self {
        Namespace {
            name: name.into(),
            ..Namespace::default()
        }
    }

    /// Append a child namespace and return its index, usable as the new
    /// current scope. A duplicate name appends a second sibling.
    pub fn add_namespace(&mut self, name: impl Into<String>) -> usize {
        self.namespaces.push(Namespace::new(name));
        self.namespaces.len() - 1
    }

    /// Look up a child namespace by exact (case-sensitive) name. Returns the
    /// first declaration when duplicates exist.
    pub fn find_namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn add_class(&mut self, class: Class) {
        self.classes.push(class);
    }

    pub fn add_interface(&mut self, interface: Interface) {
        self.interfaces.push(interface);
    }

    pub fn add_trait(&mut self, trait_: Trait) {
        self.traits.push(trait_);
    }

    /// Record a global variable, keyed by name. A redeclaration replaces the
    /// earlier entry.
    pub fn add_global_var(&mut self, var: GlobalVar) {
        self.global_vars.insert(var.name.clone(), var);
    }

    /// Record a global constant, keyed by name.
    pub fn add_constant(&mut self, constant: GlobalConst) {
        self.constants.insert(constant.name.clone(), constant);
    }
}
