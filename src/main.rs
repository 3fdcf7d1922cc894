//! tablecheck CLI entry point
//!
//! Delegates to `cli::run` and maps the result to an exit code:
//! - 0: every file passed / was written
//! - 1: validation failures, or files skipped by the build
//! - 2: run aborted (no input, bad config, unwritable output)

use tablecheck::cli;

fn main() {
    let result = cli::run();
    if let Err(e) = &result {
        eprintln!("ERROR: {}", e.message());
    }
    std::process::exit(cli::exit_code(&result));
}
