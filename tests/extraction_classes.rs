mod common;

use common::extract_clean;
use phpoutline::Visibility;

// ─── Class Extraction Tests ─────────────────────────────────────────────────

#[test]
fn class_with_one_public_property() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class Foo {\n",
        "    public $bar;\n",
        "}\n",
        "?>\n",
    ));
    assert_eq!(root.classes.len(), 1);
    let foo = &root.classes[0];
    assert_eq!(foo.name, "Foo");
    assert_eq!(foo.properties.len(), 1);
    assert_eq!(foo.properties[0].name, "bar");
    assert_eq!(foo.properties[0].visibility, Visibility::Public);
    assert!(foo.methods.is_empty());
}

#[test]
fn class_extends_single_parent() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class Admin extends User {\n",
        "}\n",
    ));
    let admin = &root.classes[0];
    assert_eq!(admin.name, "Admin");
    assert_eq!(admin.parent_class.as_deref(), Some("User"));
    assert!(admin.implements.is_empty());
}

#[test]
fn class_implements_interface_list() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class Circle implements Shape, Drawable {\n",
        "}\n",
    ));
    let circle = &root.classes[0];
    assert_eq!(circle.implements, vec!["Shape", "Drawable"]);
    assert!(circle.parent_class.is_none());
}

#[test]
fn class_members_in_source_order() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class Config {\n",
        "    const DEFAULTS = [];\n",
        "    private const SECRET = 'x';\n",
        "    public $loaded = false;\n",
        "    private static $instance;\n",
        "    public function get($key) {\n",
        "    }\n",
        "    protected function reload() {\n",
        "    }\n",
        "}\n",
    ));
    let config = &root.classes[0];

    assert_eq!(config.constants.len(), 2);
    assert_eq!(config.constants[0].name, "DEFAULTS");
    assert_eq!(config.constants[0].visibility, Visibility::Public);
    assert_eq!(config.constants[1].name, "SECRET");
    assert_eq!(config.constants[1].visibility, Visibility::Private);

    assert_eq!(config.properties.len(), 2);
    assert_eq!(config.properties[0].name, "loaded");
    assert_eq!(config.properties[0].value.as_deref(), Some("false"));
    assert!(config.properties[1].is_static);
    assert_eq!(config.properties[1].visibility, Visibility::Private);

    assert_eq!(config.methods.len(), 2);
    assert_eq!(config.methods[0].name, "get");
    assert_eq!(config.methods[0].parameters, vec!["key"]);
    assert_eq!(config.methods[1].name, "reload");
    assert_eq!(config.methods[1].visibility, Visibility::Protected);
}

#[test]
fn method_bodies_accumulate_with_nested_blocks() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class Worker {\n",
        "    public function run($job)\n",
        "    {\n",
        "        while (true)\n",
        "        {\n",
        "            step($job);\n",
        "        }\n",
        "    }\n",
        "    public $done = false;\n",
        "}\n",
    ));
    let worker = &root.classes[0];
    assert_eq!(worker.methods.len(), 1);
    let run = &worker.methods[0];
    assert_eq!(
        run.body,
        vec!["{", "while (true)", "{", "step($job);", "}", "}"]
    );
    // The scope popped back to the class: the property after the method
    // still lands on the class.
    assert_eq!(worker.properties.len(), 1);
}

#[test]
fn static_method_and_return_type() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class Factory {\n",
        "    public static function make($config): self {\n",
        "    }\n",
        "}\n",
    ));
    let make = &root.classes[0].methods[0];
    assert!(make.is_static);
    assert_eq!(make.return_type, "self");
}

#[test]
fn allman_style_class_and_method() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class Legacy\n",
        "{\n",
        "    function helper()\n",
        "    {\n",
        "        work();\n",
        "    }\n",
        "}\n",
    ));
    let legacy = &root.classes[0];
    assert_eq!(legacy.name, "Legacy");
    assert_eq!(legacy.methods.len(), 1);
    assert_eq!(legacy.methods[0].name, "helper");
    assert_eq!(legacy.methods[0].visibility, Visibility::Public);
}

#[test]
fn abstract_class_header() {
    let root = extract_clean(concat!(
        "<?php\n",
        "abstract class Controller extends Base {\n",
        "}\n",
    ));
    assert_eq!(root.classes[0].name, "Controller");
    assert_eq!(root.classes[0].parent_class.as_deref(), Some("Base"));
}

#[test]
fn two_classes_in_one_file() {
    let root = extract_clean(concat!(
        "<?php\n",
        "class First {\n",
        "}\n",
        "class Second extends First {\n",
        "}\n",
    ));
    assert_eq!(root.classes.len(), 2);
    assert_eq!(root.classes[0].name, "First");
    assert_eq!(root.classes[1].name, "Second");
}

#[test]
fn classes_inside_a_namespace() {
    let root = extract_clean(concat!(
        "<?php\n",
        "namespace App\\Models;\n",
        "class User {\n",
        "    public $name;\n",
        "}\n",
    ));
    assert!(root.classes.is_empty());
    let ns = root.find_namespace("App\\Models").expect("namespace");
    assert_eq!(ns.classes.len(), 1);
    assert_eq!(ns.classes[0].name, "User");
}
