//! CLI module for testplate

mod args;

pub use args::Args;

use crate::config::Config;
use crate::error::Result;
use crate::scaffold::Scaffolder;
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Process every module argument, returning the number of failures
fn execute(args: Args) -> Result<usize> {
    // Load config file if it exists
    let mut cfg = if let Some(config_path) = &args.config {
        Config::load_or_default(config_path)
    } else {
        Config::load_or_default(Path::new("testplate.toml"))
    };

    // Merge CLI arguments (CLI takes precedence)
    cfg.merge_cli(args.tests_dir.clone());
    cfg.validate()?;

    if args.verbose {
        println!("Modules: {}", args.modules.len());
        println!("Tests directory: {}", cfg.output.directory);
        println!("Conftest: {}", cfg.output.conftest);
        println!("Async marker: {}", cfg.generate.async_marker);
    }

    println!("Running testplate...");

    let mut scaffolder = Scaffolder::new(cfg)?;
    let mut failed = 0;

    for module in &args.modules {
        if should_skip(module) {
            continue;
        }

        let name = module
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| module.display().to_string());
        println!("-> Generating test boilerplate for {}", name);

        match scaffolder.scaffold_file(module) {
            Ok(written) => println!("   wrote {}", written.display()),
            Err(e) => {
                eprintln!("error: {}: {}", module.display(), e);
                failed += 1;
            }
        }
    }

    println!("Done");
    Ok(failed)
}

/// Directories and underscore-prefixed files are not processed
fn should_skip(path: &Path) -> bool {
    if path.is_dir() {
        return true;
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.starts_with('_'))
}
