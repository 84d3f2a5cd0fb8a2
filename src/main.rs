//! registrar CLI entry point
//!
//! main.rs must NOT:
//! - Load configuration
//! - Read input files
//!
//! All logic is delegated to the CLI module.

use registrar::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
