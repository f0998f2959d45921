//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Generate pytest boilerplate from Python modules
#[derive(Parser, Debug)]
#[command(name = "testplate")]
#[command(about = "Generate pytest boilerplate from Python modules")]
#[command(version)]
pub struct Args {
    /// Python modules to generate tests for
    #[arg(required = true)]
    pub modules: Vec<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory name for generated tests
    #[arg(long)]
    pub tests_dir: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
