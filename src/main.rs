use std::process::ExitCode;

fn main() -> ExitCode {
    testplate::cli::run()
}
