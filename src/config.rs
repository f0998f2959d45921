use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generate: GenerateConfig,
    pub output: OutputConfig,
}

/// Settings for the generated test bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Placeholder docstring line inside every generated test
    pub docstring: String,
    /// Failing assertion line inside every generated test
    pub assert_line: String,
    /// Marker line emitted above async tests
    pub async_marker: String,
}

/// Settings for where generated files land
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Name of the test directory created next to each module
    pub directory: String,
    /// Name of the marker file touched once in the test directory
    pub conftest: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            docstring: r#""""Should ...""""#.to_string(),
            assert_line: r#"assert False, "not implemented""#.to_string(),
            async_marker: "@pytest.mark.asyncio".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "tests".to_string(),
            conftest: "conftest.py".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, tests_dir: Option<String>) {
        if let Some(dir) = tests_dir {
            self.output.directory = dir;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.directory.is_empty() {
            return Err(Error::config_validation("output directory must not be empty"));
        }

        if self.output.directory.contains(['/', '\\']) {
            return Err(Error::config_validation(
                "output directory must be a bare name, not a path",
            ));
        }

        if self.output.conftest.is_empty() {
            return Err(Error::config_validation("conftest name must not be empty"));
        }

        if self.output.conftest.contains(['/', '\\']) {
            return Err(Error::config_validation(
                "conftest name must be a bare name, not a path",
            ));
        }

        if self.generate.docstring.is_empty() {
            return Err(Error::config_validation("docstring must not be empty"));
        }

        if self.generate.assert_line.is_empty() {
            return Err(Error::config_validation("assert line must not be empty"));
        }

        if self.generate.async_marker.is_empty() {
            return Err(Error::config_validation("async marker must not be empty"));
        }

        Ok(())
    }
}
