mod common;

use common::extract_clean;
use phpoutline::Visibility;

// ─── Interface Extraction Tests ─────────────────────────────────────────────

#[test]
fn interface_with_parent_list() {
    let root = extract_clean(concat!(
        "<?php\n",
        "interface Shape extends Drawable, Movable {\n",
        "}\n",
    ));
    let shape = &root.interfaces[0];
    assert_eq!(shape.name, "Shape");
    assert_eq!(shape.parents, vec!["Drawable", "Movable"]);
}

#[test]
fn interface_methods_are_signatures_only() {
    let root = extract_clean(concat!(
        "<?php\n",
        "interface Loggable {\n",
        "    const DEFAULT_LEVEL = 1;\n",
        "    public function log($message);\n",
        "    public function getLogLevel(): int;\n",
        "}\n",
        "class After {\n",
        "}\n",
    ));
    let loggable = &root.interfaces[0];
    assert_eq!(loggable.constants.len(), 1);
    assert_eq!(loggable.constants[0].name, "DEFAULT_LEVEL");

    assert_eq!(loggable.methods.len(), 2);
    assert_eq!(loggable.methods[0].name, "log");
    assert_eq!(loggable.methods[0].parameters, vec!["message"]);
    assert!(loggable.methods[0].body.is_empty());
    assert_eq!(loggable.methods[1].return_type, "int");

    // Signature lines never opened a scope: the class after the interface
    // is still recognized.
    assert_eq!(root.classes.len(), 1);
}

#[test]
fn interface_without_parents() {
    let root = extract_clean(concat!("<?php\n", "interface Countable {\n", "}\n"));
    assert_eq!(root.interfaces[0].name, "Countable");
    assert!(root.interfaces[0].parents.is_empty());
}

// ─── Trait Extraction Tests ─────────────────────────────────────────────────

#[test]
fn trait_with_property_and_method() {
    let root = extract_clean(concat!(
        "<?php\n",
        "trait Greets {\n",
        "    public $greeting = 'hi';\n",
        "    public function greet($name) {\n",
        "        echo $this->greeting . $name;\n",
        "    }\n",
        "}\n",
    ));
    let greets = &root.traits[0];
    assert_eq!(greets.name, "Greets");
    assert_eq!(greets.properties.len(), 1);
    assert_eq!(greets.properties[0].value.as_deref(), Some("'hi'"));
    assert_eq!(greets.methods.len(), 1);
    assert_eq!(greets.methods[0].name, "greet");
    assert_eq!(
        greets.methods[0].body,
        vec!["echo $this->greeting . $name;", "}"]
    );
}

#[test]
fn trait_method_visibility_defaults_to_public() {
    let root = extract_clean(concat!(
        "<?php\n",
        "trait Boots {\n",
        "    protected function boot() {\n",
        "    }\n",
        "}\n",
    ));
    let boots = &root.traits[0];
    assert_eq!(boots.methods[0].visibility, Visibility::Protected);
}
