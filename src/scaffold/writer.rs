// Test file writer
//
// Creates the tests directory next to the source module, seeds an empty
// conftest once, and writes the generated module. The conftest is never
// truncated if it already exists; the test file is replaced on every run.

use crate::config::OutputConfig;
use crate::error::Result;
use crate::parser::SourceModule;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Writes rendered test modules to the filesystem
pub struct TestWriter {
    config: OutputConfig,
}

impl TestWriter {
    /// Create a new writer with the given output settings
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Directory that receives generated tests for a module
    pub fn tests_dir(&self, module: &SourceModule) -> PathBuf {
        module.parent.join(&self.config.directory)
    }

    /// Write the rendered test module, returning the path written
    ///
    /// The test file is overwritten unconditionally; regeneration always
    /// replaces prior output.
    pub fn write(&self, module: &SourceModule, code: &str) -> Result<PathBuf> {
        let dir = self.tests_dir(module);
        fs::create_dir_all(&dir)?;
        self.touch_conftest(&dir)?;

        let path = dir.join(module.test_file_name());
        fs::write(&path, code)?;
        Ok(path)
    }

    /// Create the conftest marker if absent
    ///
    /// Concurrent creation attempts must both succeed, so an existing file
    /// is treated as success and its contents are left untouched.
    fn touch_conftest(&self, dir: &Path) -> Result<()> {
        let path = dir.join(&self.config.conftest);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
