// Scaffold module for generating pytest boilerplate

pub mod generator;
pub mod writer;

pub use generator::*;
pub use writer::*;

use crate::config::Config;
use crate::error::Result;
use crate::parser::{PythonParser, SourceModule};
use std::path::{Path, PathBuf};

/// Orchestrates the parse, generate, and write steps for single modules
pub struct Scaffolder {
    parser: PythonParser,
    generator: Generator,
    writer: TestWriter,
}

impl Scaffolder {
    /// Create a new scaffolder with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let parser = PythonParser::new()?;

        Ok(Self {
            parser,
            generator: Generator::new(config.generate),
            writer: TestWriter::new(config.output),
        })
    }

    /// Generate and write the test scaffold for one Python module
    ///
    /// Parsing happens before any filesystem change, so a module that fails
    /// to parse leaves no output behind. Returns the path written.
    pub fn scaffold_file(&mut self, path: &Path) -> Result<PathBuf> {
        let module = SourceModule::from_path(path)?;
        let tree = self.parser.parse_file(path)?;
        let scaffold = self.generator.generate(&module, &tree);
        self.writer.write(&module, &scaffold.render())
    }
}
