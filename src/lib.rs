//! Testplate - Generate pytest boilerplate from Python modules
//!
//! Parses a Python module with tree-sitter and writes a companion test file
//! containing one placeholder test per function, method, and class, plus an
//! empty `conftest.py` the first time the tests directory is created.

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod scaffold;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use scaffold::Scaffolder;
