// AST types for parsed Python modules
//
// `SourceModule` identifies the input file; `SyntaxNode` is the small tree of
// definitions the scaffold generator walks. Built by the Python parser,
// consumed read-only by the generator.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// The Python module a scaffold is generated for
#[derive(Debug, Clone, PartialEq)]
pub struct SourceModule {
    /// Path as given on the command line
    pub path: PathBuf,
    /// File name including extension, e.g. `calc.py`
    pub name: String,
    /// File name without extension, e.g. `calc`
    pub stem: String,
    /// Directory containing the module
    pub parent: PathBuf,
}

impl SourceModule {
    /// Build a source module from a file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;

        // `Path::parent` yields an empty path for bare file names
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            path: path.to_path_buf(),
            name,
            stem,
            parent,
        })
    }

    /// Name of the generated companion file, e.g. `test_calc.py`
    pub fn test_file_name(&self) -> String {
        format!("test_{}.py", self.stem)
    }
}

/// A definition discovered in the module
///
/// The variant set is closed: anything else the external parser surfaces
/// (statements, expressions, decorators) is descended through transparently
/// at tree-build time, so nested definitions still appear as children here
/// in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// Root of the tree; children are the module's definitions
    Module { children: Vec<SyntaxNode> },
    /// `def name(...)`
    FunctionDef { name: String, children: Vec<SyntaxNode> },
    /// `async def name(...)`
    AsyncFunctionDef { name: String, children: Vec<SyntaxNode> },
    /// `class Name:`
    ClassDef { name: String, children: Vec<SyntaxNode> },
}

impl SyntaxNode {
    pub fn module(children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Module { children }
    }

    pub fn function(name: &str, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::FunctionDef {
            name: name.to_string(),
            children,
        }
    }

    pub fn async_function(name: &str, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::AsyncFunctionDef {
            name: name.to_string(),
            children,
        }
    }

    pub fn class(name: &str, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::ClassDef {
            name: name.to_string(),
            children,
        }
    }

    /// Name of the definition; `None` for the module root
    pub fn name(&self) -> Option<&str> {
        match self {
            SyntaxNode::Module { .. } => None,
            SyntaxNode::FunctionDef { name, .. }
            | SyntaxNode::AsyncFunctionDef { name, .. }
            | SyntaxNode::ClassDef { name, .. } => Some(name),
        }
    }

    /// Child definitions in declaration order
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Module { children }
            | SyntaxNode::FunctionDef { children, .. }
            | SyntaxNode::AsyncFunctionDef { children, .. }
            | SyntaxNode::ClassDef { children, .. } => children,
        }
    }
}
