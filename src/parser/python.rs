// Python parser using tree-sitter
//
// Reduces the concrete tree-sitter tree to the definition tree the generator
// consumes: functions, async functions, and classes, in declaration order.
// Everything else (statements, expressions, decorators) is descended through
// transparently so nested definitions are still found.

use crate::error::{Error, Result};
use crate::parser::ast::SyntaxNode;
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Parser for Python source files
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_python::language();
        parser
            .set_language(&language)
            .map_err(|e| Error::parser(format!("Failed to set Python language: {}", e)))?;
        Ok(Self { parser })
    }

    /// Parse a Python file into a definition tree
    pub fn parse_file(&mut self, path: &Path) -> Result<SyntaxNode> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;

        self.parse_source(&source, path)
    }

    /// Parse Python source code into a definition tree
    ///
    /// Fails with a parse error when the source is malformed; callers must
    /// not write any output for a module that fails here.
    pub fn parse_source(&mut self, source: &str, path: &Path) -> Result<SyntaxNode> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parse(path, "failed to parse source"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(Error::parse(path, "invalid syntax"));
        }

        Ok(SyntaxNode::module(collect_definitions(
            &root,
            source.as_bytes(),
        )))
    }
}

/// Collect definitions beneath a node in document order
///
/// Non-definition constructs are not represented in the output tree; the
/// walk descends through them so a `def` under `if` or `try` still counts.
fn collect_definitions(node: &Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut defs = Vec::new();
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        match child.kind() {
            "function_definition" => defs.extend(build_function(&child, source)),
            "class_definition" => defs.extend(build_class(&child, source)),
            "decorated_definition" => defs.extend(build_decorated(&child, source)),
            _ => defs.extend(collect_definitions(&child, source)),
        }
    }

    defs
}

/// Build a function or async function node
fn build_function(node: &Node, source: &[u8]) -> Option<SyntaxNode> {
    let mut name = None;
    let mut is_async = false;
    let mut children = Vec::new();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "async" => is_async = true,
            "identifier" => {
                if name.is_none() {
                    name = child.utf8_text(source).ok().map(str::to_string);
                }
            }
            "block" => children = collect_definitions(&child, source),
            _ => {}
        }
    }

    let name = name?;
    if is_async {
        Some(SyntaxNode::async_function(&name, children))
    } else {
        Some(SyntaxNode::function(&name, children))
    }
}

/// Build a class node
fn build_class(node: &Node, source: &[u8]) -> Option<SyntaxNode> {
    let mut name = None;
    let mut children = Vec::new();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                if name.is_none() {
                    name = child.utf8_text(source).ok().map(str::to_string);
                }
            }
            "block" => children = collect_definitions(&child, source),
            _ => {}
        }
    }

    Some(SyntaxNode::class(&name?, children))
}

/// Unwrap a decorated definition to the function or class inside it
fn build_decorated(node: &Node, source: &[u8]) -> Option<SyntaxNode> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "function_definition" => return build_function(&child, source),
            "class_definition" => return build_class(&child, source),
            _ => {}
        }
    }
    None
}
