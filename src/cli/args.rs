//! CLI argument definitions using clap
//!
//! Commands:
//! - registrar init --config <path> --data-dir <dir>
//! - registrar report [--config <path>] [--data-dir <dir>]
//! - registrar students | instructors | majors [...]
//! - registrar student --cwid <id> [...]
//! - registrar instructor --cwid <id> [...]
//! - registrar check [...]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// registrar - A strict, deterministic university records aggregator
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where to find the input files
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding majors.txt, students.txt, instructors.txt and grades.txt
    /// (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path of the configuration file to create
        #[arg(long, default_value = "./registrar.json")]
        config: PathBuf,

        /// Data directory recorded in the new file
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,
    },

    /// Print majors, students and instructor tables
    Report {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the student summary table
    Students {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the instructor course table
    Instructors {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the major requirements table
    Majors {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print one student's summary
    Student {
        #[command(flatten)]
        source: SourceArgs,

        /// Student CWID
        #[arg(long)]
        cwid: String,
    },

    /// Print one instructor's summary
    Instructor {
        #[command(flatten)]
        source: SourceArgs,

        /// Instructor CWID
        #[arg(long)]
        cwid: String,
    },

    /// Load and validate the input files, printing entity counts
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_student_command() {
        let cli = Cli::try_parse_from([
            "registrar", "student", "--data-dir", "/srv/uni", "--cwid", "10103",
        ])
        .unwrap();

        match cli.command {
            Command::Student { source, cwid } => {
                assert_eq!(cwid, "10103");
                assert_eq!(source.data_dir, Some(PathBuf::from("/srv/uni")));
                assert!(source.config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::try_parse_from(["registrar", "init"]).unwrap();
        match cli.command {
            Command::Init { config, data_dir } => {
                assert_eq!(config, PathBuf::from("./registrar.json"));
                assert_eq!(data_dir, PathBuf::from("./data"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
