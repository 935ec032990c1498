//! The scope state machine.
//!
//! This is the single-pass recognizer at the heart of phpoutline. It
//! consumes one normalized line at a time, asks the [classifier] which kind
//! of line it is, and drives the scope transitions: entering PHP code,
//! opening and closing namespaces, classes, interfaces, traits, functions,
//! and methods, and holding a parsed docblock pending until the next
//! declaration consumes it.
//!
//! Sub-modules:
//! - [`classes`]: class, interface, trait, and member header parsers
//! - [`functions`]: function, method, and global declaration parsers
//!
//! Open scopes live on an explicit stack of frames that own the entity
//! under construction; popping a frame moves the finished entity into its
//! parent. Function and method frames carry their own brace-depth counter,
//! incremented or decremented purely from the first character of each line.
//! That approximation is deliberate: full brace matching would need a real
//! tokenizer, which this tool intentionally is not.
//!
//! [classifier]: crate::classifier

pub(crate) mod classes;
pub(crate) mod functions;

use serde::Serialize;
use tracing::warn;

use crate::classifier::{self, LineKind};
use crate::diagnostics::Diagnostic;
use crate::docblock;
use crate::types::{Class, Docblock, Function, Interface, Method, Namespace, Trait};

/// The scope the recognizer currently stands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Outside `<?php ... ?>`.
    OutOfPhp,
    /// At file/namespace scope.
    Global,
    /// Between `/**` and `*/`.
    InDocblock,
    InFunction,
    InClass,
    InInterface,
    InTrait,
    InMethod,
}

/// One open scope: the entity being built plus, for code bodies, the
/// brace-depth bookkeeping that detects its closing line.
enum ScopeFrame {
    Class(Class),
    Interface(Interface),
    Trait(Trait),
    Function {
        function: Function,
        depth: i32,
        opened: bool,
    },
    Method {
        method: Method,
        depth: i32,
        opened: bool,
    },
}

impl ScopeFrame {
    fn describe(&self) -> (&'static str, &str) {
        match self {
            ScopeFrame::Class(class) => ("class", &class.name),
            ScopeFrame::Interface(interface) => ("interface", &interface.name),
            ScopeFrame::Trait(trait_) => ("trait", &trait_.name),
            ScopeFrame::Function { function, .. } => ("function", &function.name),
            ScopeFrame::Method { method, .. } => ("method", &method.name),
        }
    }
}

/// The result of one extraction run: the declaration tree plus every
/// diagnostic raised along the way.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub root: Namespace,
    pub diagnostics: Vec<Diagnostic>,
}

/// Feed every line of an already-normalized sequence through a fresh
/// [`Extractor`].
pub fn extract_lines<I, S>(lines: I) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = Extractor::new();
    for line in lines {
        extractor.feed_line(line.as_ref());
    }
    extractor.finish()
}

/// The line-by-line recognizer. Create one per extraction run, feed it
/// normalized lines in order, then call [`Extractor::finish`].
pub struct Extractor {
    root: Namespace,
    /// Index into `root.namespaces` of the current namespace; `None` is the
    /// root itself.
    current_namespace: Option<usize>,
    state: State,
    /// Where to return when the open docblock closes.
    prev_state: State,
    frames: Vec<ScopeFrame>,
    /// A parsed docblock waiting for the next declaration to consume it.
    pending_docblock: Option<Docblock>,
    /// True until the first declaration at file scope; gates promotion of a
    /// leading docblock to file-level documentation.
    at_file_level: bool,
    docblock_body: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    line: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            root: Namespace::root(),
            current_namespace: None,
            state: State::OutOfPhp,
            prev_state: State::Global,
            frames: Vec::new(),
            pending_docblock: None,
            at_file_level: true,
            docblock_body: Vec::new(),
            diagnostics: Vec::new(),
            line: 0,
        }
    }

    /// Process one normalized line to completion.
    pub fn feed_line(&mut self, line: &str) {
        self.line += 1;
        match self.state {
            State::OutOfPhp => self.on_out_of_php(line),
            State::Global => self.on_global(line),
            State::InDocblock => self.on_docblock(line),
            State::InClass => self.on_class(line),
            State::InInterface => self.on_interface(line),
            State::InTrait => self.on_trait(line),
            State::InFunction | State::InMethod => self.on_code_body(line),
        }
    }

    /// End of input. Every scope still open is reported once and its entity
    /// is attached to the tree marked incomplete.
    pub fn finish(mut self) -> Extraction {
        if self.state == State::InDocblock {
            self.diagnostics
                .push(Diagnostic::structural("unterminated docblock at end of input"));
        }
        while let Some(frame) = self.frames.pop() {
            let (kind, name) = frame.describe();
            self.diagnostics.push(Diagnostic::structural(format!(
                "unterminated {kind} `{name}` at end of input"
            )));
            match frame {
                ScopeFrame::Class(mut class) => {
                    class.incomplete = true;
                    self.namespace_mut().add_class(class);
                }
                ScopeFrame::Interface(mut interface) => {
                    interface.incomplete = true;
                    self.namespace_mut().add_interface(interface);
                }
                ScopeFrame::Trait(mut trait_) => {
                    trait_.incomplete = true;
                    self.namespace_mut().add_trait(trait_);
                }
                ScopeFrame::Function { mut function, .. } => {
                    function.incomplete = true;
                    self.namespace_mut().add_function(function);
                }
                ScopeFrame::Method { mut method, .. } => {
                    method.incomplete = true;
                    self.attach_method(method);
                }
            }
        }
        Extraction {
            root: self.root,
            diagnostics: self.diagnostics,
        }
    }

    // ─── State handlers ─────────────────────────────────────────────────

    fn on_out_of_php(&mut self, line: &str) {
        match classifier::classify(line, State::OutOfPhp) {
            LineKind::EnterPhp => {
                // `<?php namespace Foo;` opens code and a namespace at once.
                if functions::is_namespace_line(line) {
                    let name = functions::parse_namespace(line);
                    self.current_namespace = Some(self.root.add_namespace(name));
                }
                self.state = State::Global;
            }
            _ => self.format_error(format!("`{line}` outside <?php block")),
        }
    }

    fn on_global(&mut self, line: &str) {
        match classifier::classify(line, State::Global) {
            LineKind::ExitPhp => {
                // A docblock left pending here never attaches to anything.
                self.pending_docblock = None;
                self.state = State::OutOfPhp;
            }
            LineKind::DocblockOpen => {
                self.promote_file_docblock();
                self.open_docblock(State::Global);
            }
            LineKind::DocblockInline => {
                self.promote_file_docblock();
                self.inline_docblock(line);
            }
            LineKind::NamespaceDecl => {
                self.at_file_level = false;
                self.pending_docblock = None;
                let name = functions::parse_namespace(line);
                self.current_namespace = Some(self.root.add_namespace(name));
            }
            LineKind::GlobalVarDecl => {
                self.at_file_level = false;
                self.pending_docblock = None;
                self.root.add_global_var(functions::parse_global_var(line));
            }
            LineKind::PlainVarDecl => {
                self.at_file_level = false;
                self.pending_docblock = None;
                self.root.add_global_var(functions::parse_plain_var(line));
            }
            LineKind::DefineDecl => {
                self.at_file_level = false;
                self.pending_docblock = None;
                self.root.add_constant(functions::parse_define(line));
            }
            LineKind::ConstDecl => {
                self.at_file_level = false;
                self.pending_docblock = None;
                self.root.add_constant(functions::parse_global_const(line));
            }
            LineKind::FunctionDecl => {
                self.at_file_level = false;
                let mut function = functions::parse_function(line);
                function.docblock = self.pending_docblock.take();
                self.push_code_frame(line, |opened| ScopeFrame::Function {
                    function,
                    depth: opened as i32,
                    opened,
                });
                self.state = State::InFunction;
            }
            LineKind::ClassDecl => {
                self.at_file_level = false;
                let mut class = classes::parse_class(line);
                class.docblock = self.pending_docblock.take();
                self.frames.push(ScopeFrame::Class(class));
                self.state = State::InClass;
            }
            LineKind::InterfaceDecl => {
                self.at_file_level = false;
                let mut interface = classes::parse_interface(line);
                interface.docblock = self.pending_docblock.take();
                self.frames.push(ScopeFrame::Interface(interface));
                self.state = State::InInterface;
            }
            LineKind::TraitDecl => {
                self.at_file_level = false;
                let mut trait_ = classes::parse_trait(line);
                trait_.docblock = self.pending_docblock.take();
                self.frames.push(ScopeFrame::Trait(trait_));
                self.state = State::InTrait;
            }
            _ => self.format_error(format!("`{line}` is not recognized in global scope")),
        }
    }

    fn on_docblock(&mut self, line: &str) {
        match classifier::classify(line, State::InDocblock) {
            LineKind::DocblockClose => {
                // The closing line may carry trailing content: `* done */`.
                let before = line[..line.len() - 2].trim();
                if !before.is_empty() {
                    self.docblock_body.push(before.to_string());
                }
                let (parsed, style) = docblock::parse(&self.docblock_body, self.line);
                self.diagnostics.extend(style);
                self.docblock_body.clear();
                self.pending_docblock = Some(parsed);
                self.state = self.prev_state;
            }
            _ => self.docblock_body.push(line.to_string()),
        }
    }

    fn on_class(&mut self, line: &str) {
        match classifier::classify(line, State::InClass) {
            LineKind::BlockClose => {
                if let Some(ScopeFrame::Class(class)) = self.frames.pop() {
                    self.namespace_mut().add_class(class);
                }
                self.pending_docblock = None;
                self.state = State::Global;
            }
            LineKind::DocblockOpen => self.open_docblock(State::InClass),
            LineKind::DocblockInline => self.inline_docblock(line),
            LineKind::PropertyVarDecl => {
                let mut property = classes::parse_property(line);
                property.docblock = self.pending_docblock.take();
                if let Some(ScopeFrame::Class(class)) = self.frames.last_mut() {
                    class.properties.push(property);
                }
            }
            LineKind::PropertyConstDecl => {
                let mut constant = classes::parse_class_const(line);
                constant.docblock = self.pending_docblock.take();
                if let Some(ScopeFrame::Class(class)) = self.frames.last_mut() {
                    class.constants.push(constant);
                }
            }
            LineKind::MethodDecl => self.open_method(line),
            // Body noise, including a stray `{` from an Allman-style class
            // header, is skipped without comment.
            _ => {}
        }
    }

    fn on_interface(&mut self, line: &str) {
        match classifier::classify(line, State::InInterface) {
            LineKind::BlockClose => {
                if let Some(ScopeFrame::Interface(interface)) = self.frames.pop() {
                    self.namespace_mut().add_interface(interface);
                }
                self.pending_docblock = None;
                self.state = State::Global;
            }
            LineKind::DocblockOpen => self.open_docblock(State::InInterface),
            LineKind::DocblockInline => self.inline_docblock(line),
            LineKind::PropertyConstDecl => {
                let mut constant = classes::parse_class_const(line);
                constant.docblock = self.pending_docblock.take();
                if let Some(ScopeFrame::Interface(interface)) = self.frames.last_mut() {
                    interface.constants.push(constant);
                }
            }
            // Interface methods are signatures only; no body is tracked.
            LineKind::MethodDecl => {
                let mut method = functions::parse_method(line);
                method.docblock = self.pending_docblock.take();
                if let Some(ScopeFrame::Interface(interface)) = self.frames.last_mut() {
                    interface.methods.push(method);
                }
            }
            _ => {}
        }
    }

    fn on_trait(&mut self, line: &str) {
        match classifier::classify(line, State::InTrait) {
            LineKind::BlockClose => {
                if let Some(ScopeFrame::Trait(trait_)) = self.frames.pop() {
                    self.namespace_mut().add_trait(trait_);
                }
                self.pending_docblock = None;
                self.state = State::Global;
            }
            LineKind::DocblockOpen => self.open_docblock(State::InTrait),
            LineKind::DocblockInline => self.inline_docblock(line),
            LineKind::PropertyVarDecl => {
                let mut property = classes::parse_property(line);
                property.docblock = self.pending_docblock.take();
                if let Some(ScopeFrame::Trait(trait_)) = self.frames.last_mut() {
                    trait_.properties.push(property);
                }
            }
            LineKind::MethodDecl => self.open_method(line),
            _ => {}
        }
    }

    /// Inside a function or method body: count braces from the first
    /// character of the line, accumulate the source body, and promote
    /// `$GLOBALS` declarations to the root namespace (function bodies only).
    fn on_code_body(&mut self, line: &str) {
        let kind = classifier::classify(line, self.state);
        if kind == LineKind::GlobalVarDecl && self.state == State::InFunction {
            self.root.add_global_var(functions::parse_global_var(line));
        }
        let closed = match self.frames.last_mut() {
            Some(ScopeFrame::Function {
                function,
                depth,
                opened,
            }) => Self::track_body_line(&mut function.body, depth, opened, line),
            Some(ScopeFrame::Method {
                method,
                depth,
                opened,
            }) => Self::track_body_line(&mut method.body, depth, opened, line),
            _ => false,
        };
        if closed {
            self.close_code_body();
        }
    }

    // ─── Shared transitions ─────────────────────────────────────────────

    fn open_docblock(&mut self, from: State) {
        self.prev_state = from;
        self.docblock_body.clear();
        self.state = State::InDocblock;
    }

    /// A docblock opened and closed on the same line: parse its single body
    /// segment immediately, without entering the docblock state.
    fn inline_docblock(&mut self, line: &str) {
        let body = line
            .strip_prefix("/**")
            .and_then(|rest| rest.strip_suffix("*/"))
            .unwrap_or("")
            .trim();
        let segments: Vec<String> = if body.is_empty() {
            Vec::new()
        } else {
            vec![body.to_string()]
        };
        let (parsed, style) = docblock::parse(&segments, self.line);
        self.diagnostics.extend(style);
        self.pending_docblock = Some(parsed);
    }

    fn open_method(&mut self, line: &str) {
        let mut method = functions::parse_method(line);
        method.docblock = self.pending_docblock.take();
        if line.ends_with(';') {
            // Bodiless signature (e.g. abstract); attach without a scope.
            match self.frames.last_mut() {
                Some(ScopeFrame::Class(class)) => class.methods.push(method),
                Some(ScopeFrame::Trait(trait_)) => trait_.methods.push(method),
                _ => {}
            }
            return;
        }
        self.push_code_frame(line, |opened| ScopeFrame::Method {
            method,
            depth: opened as i32,
            opened,
        });
        self.state = State::InMethod;
    }

    fn push_code_frame(&mut self, line: &str, make: impl FnOnce(bool) -> ScopeFrame) {
        let opened = functions::header_opens_block(line);
        self.frames.push(make(opened));
    }

    /// Brace bookkeeping for one body line. Returns true when the block has
    /// been open and its depth just returned to zero, i.e. this line closes
    /// the scope.
    fn track_body_line(body: &mut Vec<String>, depth: &mut i32, opened: &mut bool, line: &str) -> bool {
        if line.starts_with('{') {
            *depth += 1;
            *opened = true;
        } else if line.starts_with('}') {
            *depth -= 1;
        }
        body.push(line.to_string());
        *opened && *depth <= 0
    }

    fn close_code_body(&mut self) {
        match self.frames.pop() {
            Some(ScopeFrame::Function { function, .. }) => {
                self.namespace_mut().add_function(function);
                self.state = State::Global;
            }
            Some(ScopeFrame::Method { method, .. }) => self.attach_method(method),
            _ => {}
        }
        self.pending_docblock = None;
    }

    /// Attach a finished method to the enclosing class or trait frame and
    /// resume that scope.
    fn attach_method(&mut self, method: Method) {
        match self.frames.last_mut() {
            Some(ScopeFrame::Class(class)) => {
                class.methods.push(method);
                self.state = State::InClass;
            }
            Some(ScopeFrame::Trait(trait_)) => {
                trait_.methods.push(method);
                self.state = State::InTrait;
            }
            _ => self.state = State::Global,
        }
    }

    /// A file that opens with a docblock and then a second docblock before
    /// any declaration is treating the first one as file-level
    /// documentation: move it onto the root namespace.
    fn promote_file_docblock(&mut self) {
        if self.at_file_level
            && let Some(docblock) = self.pending_docblock.take()
        {
            self.root.docblock = Some(docblock);
            self.at_file_level = false;
        }
    }

    fn namespace_mut(&mut self) -> &mut Namespace {
        match self.current_namespace {
            Some(index) => &mut self.root.namespaces[index],
            None => &mut self.root,
        }
    }

    fn format_error(&mut self, message: String) {
        warn!(line = self.line, "{message}");
        self.diagnostics
            .push(Diagnostic::format_error(self.line, message));
    }
}
