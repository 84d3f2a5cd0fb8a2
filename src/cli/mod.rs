//! CLI module for registrar
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - report / students / instructors / majors: Summary tables as JSON
//! - student / instructor: One entity's summary
//! - check: Load and validate only

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{
    check, init, instructor, instructors, majors, report, resolve_config, run, run_command,
    student, students,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
