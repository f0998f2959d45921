// Test scaffold generator
//
// A stateful visitor over the definition tree. Walks definitions in
// declaration order and accumulates the lines of a pytest module: one
// placeholder test per function, one Test class per class. Blank-line
// counts are exact: two after a module-level test, one after a method.

use crate::config::GenerateConfig;
use crate::parser::{SourceModule, SyntaxNode};
use std::collections::BTreeSet;

const TAB: &str = "    ";
const PYTEST_IMPORT: &str = "import pytest";

/// Accumulated output state for one generation run
#[derive(Debug, Default)]
pub struct Scaffold {
    /// Docstring line naming the module under test
    module_docstring: String,
    /// Deduplicated import statements, rendered in sorted order
    imports: BTreeSet<String>,
    /// Body lines of the output file, in emission order
    lines: Vec<String>,
    /// Current nesting depth in tab stops
    indent: usize,
    /// Name of the enclosing class, if any
    current_class: Option<String>,
    /// Whether the class currently being visited has emitted a member
    emitted_member: bool,
}

impl Scaffold {
    /// Assemble the final test module text
    ///
    /// Docstring first, imports in sorted order, two blank lines, then the
    /// body. The result is trimmed and ends with exactly one newline.
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.imports.len() + self.lines.len() + 3);
        parts.push(self.module_docstring.as_str());
        parts.extend(self.imports.iter().map(String::as_str));
        parts.push("");
        parts.push("");
        parts.extend(self.lines.iter().map(String::as_str));
        format!("{}\n", parts.join("\n").trim())
    }

    /// Blank lines that follow a test: two at module level, one inside a class
    fn push_separator(&mut self) {
        let blanks = if self.current_class.is_some() { 1 } else { 2 };
        for _ in 0..blanks {
            self.lines.push(String::new());
        }
    }
}

/// Walks a definition tree and builds the scaffold for it
pub struct Generator {
    config: GenerateConfig,
}

impl Generator {
    /// Create a new generator with the given settings
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Walk the definition tree and accumulate the scaffold for one module
    ///
    /// Deterministic: the same tree always produces the same scaffold.
    pub fn generate(&self, module: &SourceModule, tree: &SyntaxNode) -> Scaffold {
        let mut scaffold = Scaffold::default();
        self.visit(&mut scaffold, module, tree);
        scaffold
    }

    fn visit(&self, scaffold: &mut Scaffold, module: &SourceModule, node: &SyntaxNode) {
        match node {
            SyntaxNode::Module { children } => {
                scaffold.module_docstring =
                    format!(r#""""Unit tests for `{}`""""#, module.name);
                scaffold.imports.insert(PYTEST_IMPORT.to_string());
                self.visit_all(scaffold, module, children);
            }
            SyntaxNode::FunctionDef { name, children } => {
                self.visit_function(scaffold, name);
                self.visit_all(scaffold, module, children);
            }
            SyntaxNode::AsyncFunctionDef { name, children } => {
                self.visit_async_function(scaffold, name);
                self.visit_all(scaffold, module, children);
            }
            SyntaxNode::ClassDef { name, children } => {
                self.visit_class(scaffold, module, name, children);
            }
        }
    }

    fn visit_all(&self, scaffold: &mut Scaffold, module: &SourceModule, nodes: &[SyntaxNode]) {
        for node in nodes {
            self.visit(scaffold, module, node);
        }
    }

    /// Emit a placeholder test for a function or method
    fn visit_function(&self, scaffold: &mut Scaffold, name: &str) {
        let receiver = if scaffold.current_class.is_some() {
            "self"
        } else {
            ""
        };
        let indent = TAB.repeat(scaffold.indent);
        let body = TAB.repeat(scaffold.indent + 1);
        scaffold
            .lines
            .push(format!("{}def test_{}({}):", indent, name, receiver));
        scaffold.lines.push(format!("{}{}", body, self.config.docstring));
        scaffold
            .lines
            .push(format!("{}{}", body, self.config.assert_line));
        scaffold.push_separator();
        scaffold.emitted_member = true;
    }

    /// Emit a placeholder test for an async function
    ///
    /// The marker line precedes the definition at the same indentation.
    /// Async tests never take a receiver, even when declared inside a class.
    fn visit_async_function(&self, scaffold: &mut Scaffold, name: &str) {
        let indent = TAB.repeat(scaffold.indent);
        let body = TAB.repeat(scaffold.indent + 1);
        scaffold
            .lines
            .push(format!("{}{}", indent, self.config.async_marker));
        scaffold
            .lines
            .push(format!("{}async def test_{}():", indent, name));
        scaffold.lines.push(format!("{}{}", body, self.config.docstring));
        scaffold
            .lines
            .push(format!("{}{}", body, self.config.assert_line));
        scaffold.push_separator();
        scaffold.emitted_member = true;
    }

    /// Emit a test class and recurse into its members
    ///
    /// `indent` and `current_class` are restored to their pre-visit values
    /// afterwards, so nested classes keep the enclosing bookkeeping intact.
    fn visit_class(
        &self,
        scaffold: &mut Scaffold,
        module: &SourceModule,
        name: &str,
        children: &[SyntaxNode],
    ) {
        let indent = TAB.repeat(scaffold.indent);
        let body = TAB.repeat(scaffold.indent + 1);
        scaffold.lines.push(format!("{}class Test{}:", indent, name));
        scaffold
            .lines
            .push(format!(r#"{}"""Tests for class `{}`""""#, body, name));
        scaffold.lines.push(String::new());

        let enclosing = scaffold.current_class.replace(name.to_string());
        scaffold.emitted_member = false;
        scaffold.indent += 1;

        self.visit_all(scaffold, module, children);

        // A class that produced no members still needs a body statement
        if !scaffold.emitted_member {
            scaffold
                .lines
                .push(format!("{}pass", TAB.repeat(scaffold.indent)));
            scaffold.lines.push(String::new());
        }

        scaffold.indent -= 1;
        scaffold.current_class = enclosing;
        scaffold.lines.push(String::new());
        scaffold.emitted_member = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn render(file_name: &str, tree: SyntaxNode) -> String {
        let module = SourceModule::from_path(Path::new(file_name)).unwrap();
        Generator::new(GenerateConfig::default())
            .generate(&module, &tree)
            .render()
    }

    #[test]
    fn test_single_function() {
        let tree = SyntaxNode::module(vec![SyntaxNode::function("add", vec![])]);
        let expected = r#""""Unit tests for `calc.py`"""
import pytest


def test_add():
    """Should ..."""
    assert False, "not implemented"
"#;
        assert_eq!(render("calc.py", tree), expected);
    }

    #[test]
    fn test_class_with_method() {
        let tree = SyntaxNode::module(vec![SyntaxNode::class(
            "Stack",
            vec![SyntaxNode::function("push", vec![])],
        )]);
        let expected = r#""""Unit tests for `stack.py`"""
import pytest


class TestStack:
    """Tests for class `Stack`"""

    def test_push(self):
        """Should ..."""
        assert False, "not implemented"
"#;
        assert_eq!(render("stack.py", tree), expected);
    }

    #[test]
    fn test_empty_class_gets_pass() {
        let tree = SyntaxNode::module(vec![SyntaxNode::class("Empty", vec![])]);
        let expected = r#""""Unit tests for `models.py`"""
import pytest


class TestEmpty:
    """Tests for class `Empty`"""

    pass
"#;
        assert_eq!(render("models.py", tree), expected);
    }

    #[test]
    fn test_class_with_member_has_no_pass() {
        let tree = SyntaxNode::module(vec![SyntaxNode::class(
            "Stack",
            vec![SyntaxNode::function("push", vec![])],
        )]);
        assert!(!render("stack.py", tree).contains("pass"));
    }

    #[test]
    fn test_async_function_marked() {
        let tree = SyntaxNode::module(vec![SyntaxNode::async_function("fetch", vec![])]);
        let expected = r#""""Unit tests for `client.py`"""
import pytest


@pytest.mark.asyncio
async def test_fetch():
    """Should ..."""
    assert False, "not implemented"
"#;
        assert_eq!(render("client.py", tree), expected);
    }

    #[test]
    fn test_async_method_has_no_receiver() {
        let tree = SyntaxNode::module(vec![SyntaxNode::class(
            "Client",
            vec![SyntaxNode::async_function("connect", vec![])],
        )]);
        let output = render("client.py", tree);
        assert!(output.contains("    @pytest.mark.asyncio\n    async def test_connect():"));
        assert!(!output.contains("self"));
    }

    #[test]
    fn test_two_functions_blank_lines() {
        let tree = SyntaxNode::module(vec![
            SyntaxNode::function("first", vec![]),
            SyntaxNode::function("second", vec![]),
        ]);
        let expected = r#""""Unit tests for `pair.py`"""
import pytest


def test_first():
    """Should ..."""
    assert False, "not implemented"


def test_second():
    """Should ..."""
    assert False, "not implemented"
"#;
        assert_eq!(render("pair.py", tree), expected);
    }

    #[test]
    fn test_two_methods_single_blank_line() {
        let tree = SyntaxNode::module(vec![SyntaxNode::class(
            "Stack",
            vec![
                SyntaxNode::function("push", vec![]),
                SyntaxNode::function("pop", vec![]),
            ],
        )]);
        let output = render("stack.py", tree);
        assert!(output.contains("assert False, \"not implemented\"\n\n    def test_pop(self):"));
    }

    #[test]
    fn test_class_then_function_spacing() {
        let tree = SyntaxNode::module(vec![
            SyntaxNode::class("Stack", vec![SyntaxNode::function("push", vec![])]),
            SyntaxNode::function("standalone", vec![]),
        ]);
        let expected = r#""""Unit tests for `stack.py`"""
import pytest


class TestStack:
    """Tests for class `Stack`"""

    def test_push(self):
        """Should ..."""
        assert False, "not implemented"


def test_standalone():
    """Should ..."""
    assert False, "not implemented"
"#;
        assert_eq!(render("stack.py", tree), expected);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let tree = SyntaxNode::module(vec![
            SyntaxNode::function("one", vec![]),
            SyntaxNode::class("Two", vec![]),
            SyntaxNode::function("three", vec![]),
        ]);
        let output = render("ordered.py", tree);
        let one = output.find("def test_one").unwrap();
        let two = output.find("class TestTwo").unwrap();
        let three = output.find("def test_three").unwrap();
        assert!(one < two);
        assert!(two < three);
    }

    #[test]
    fn test_nested_function_emitted_after_outer() {
        let tree = SyntaxNode::module(vec![SyntaxNode::function(
            "outer",
            vec![SyntaxNode::function("inner", vec![])],
        )]);
        let output = render("nested.py", tree);
        let outer = output.find("def test_outer():").unwrap();
        let inner = output.find("def test_inner():").unwrap();
        assert!(outer < inner);
        assert!(output.contains("\ndef test_inner():"));
    }

    #[test]
    fn test_nested_class_restores_enclosing_class() {
        let tree = SyntaxNode::module(vec![SyntaxNode::class(
            "Outer",
            vec![
                SyntaxNode::class("Inner", vec![]),
                SyntaxNode::function("method", vec![]),
            ],
        )]);
        let output = render("nested.py", tree);
        assert!(output.contains("    class TestInner:"));
        assert!(output.contains("        pass"));
        // The method after the nested class is still a method of Outer
        assert!(output.contains("    def test_method(self):"));
    }

    #[test]
    fn test_empty_module() {
        let tree = SyntaxNode::module(vec![]);
        let expected = "\"\"\"Unit tests for `empty.py`\"\"\"\nimport pytest\n";
        assert_eq!(render("empty.py", tree), expected);
    }

    #[test]
    fn test_custom_strings() {
        let config = GenerateConfig {
            docstring: r#""""Verify ...""""#.to_string(),
            assert_line: "raise NotImplementedError".to_string(),
            async_marker: "@pytest.mark.anyio".to_string(),
        };
        let module = SourceModule::from_path(Path::new("calc.py")).unwrap();
        let tree = SyntaxNode::module(vec![
            SyntaxNode::function("add", vec![]),
            SyntaxNode::async_function("fetch", vec![]),
        ]);
        let output = Generator::new(config).generate(&module, &tree).render();
        assert!(output.contains("    \"\"\"Verify ...\"\"\""));
        assert!(output.contains("    raise NotImplementedError"));
        assert!(output.contains("@pytest.mark.anyio\nasync def test_fetch():"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let tree = SyntaxNode::module(vec![
            SyntaxNode::function("a", vec![]),
            SyntaxNode::class("B", vec![SyntaxNode::function("c", vec![])]),
        ]);
        let first = render("mod.py", tree.clone());
        let second = render("mod.py", tree);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_ends_with_single_newline() {
        let tree = SyntaxNode::module(vec![SyntaxNode::function("add", vec![])]);
        let output = render("calc.py", tree);
        assert!(output.ends_with("\n"));
        assert!(!output.ends_with("\n\n"));
    }
}
