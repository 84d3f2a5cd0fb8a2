//! CLI command implementations
//!
//! Every reporting command loads the university from scratch. A load
//! failure ends the command; there is no partial output.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::university::University;

use super::args::{Command, SourceArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments and run the selected command.
///
/// Failures are also reported as a JSON error object on stdout.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let result = run_command(cli.command);

    if let Err(ref e) = result {
        let _ = write_error(e.code_str(), e.message());
    }

    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, data_dir } => init(&config, &data_dir),
        Command::Report { source } => report(&source),
        Command::Students { source } => students(&source),
        Command::Instructors { source } => instructors(&source),
        Command::Majors { source } => majors(&source),
        Command::Student { source, cwid } => student(&source, &cwid),
        Command::Instructor { source, cwid } => instructor(&source, &cwid),
        Command::Check { source } => check(&source),
    }
}

/// Write a default configuration file pointing at `data_dir`.
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path, data_dir: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_exists(config_path.display()));
    }

    let config = Config::for_data_dir(data_dir);
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, content)?;

    write_response(&json!({ "config": config_path.display().to_string() }))
}

/// Resolve configuration from `--config` and/or `--data-dir`.
///
/// `--data-dir` overrides the file's `data_dir`; alone it implies defaults.
pub fn resolve_config(source: &SourceArgs) -> CliResult<Config> {
    let mut config = match (&source.config, &source.data_dir) {
        (Some(path), _) => Config::load(path)?,
        (None, Some(dir)) => Config::for_data_dir(dir),
        (None, None) => {
            return Err(CliError::config_error(
                "Either --config or --data-dir is required",
            ))
        }
    };

    if let (Some(_), Some(dir)) = (&source.config, &source.data_dir) {
        config.data_dir = dir.display().to_string();
    }

    Logger::set_min_severity(config.log_severity()?);
    log_event_with_fields(Event::ConfigLoaded, &[("data_dir", config.data_dir.as_str())]);

    Ok(config)
}

fn load_university(source: &SourceArgs) -> CliResult<University> {
    let config = resolve_config(source)?;
    let options = config.load_options()?;
    Ok(University::load_with(&options)?)
}

fn emit<T: serde::Serialize>(command: &str, data: &T) -> CliResult<()> {
    write_response(data)?;
    log_event_with_fields(Event::ReportWritten, &[("command", command)]);
    Ok(())
}

/// Full report: majors, students, instructor course rows
pub fn report(source: &SourceArgs) -> CliResult<()> {
    let university = load_university(source)?;
    emit("report", &university.report())
}

/// Student summary table
pub fn students(source: &SourceArgs) -> CliResult<()> {
    let university = load_university(source)?;
    emit("students", &university.student_summaries())
}

/// Instructor course rows
pub fn instructors(source: &SourceArgs) -> CliResult<()> {
    let university = load_university(source)?;
    let rows: Vec<_> = university
        .instructor_summaries()
        .iter()
        .flat_map(|summary| summary.rows())
        .collect();
    emit("instructors", &rows)
}

/// Major requirements table
pub fn majors(source: &SourceArgs) -> CliResult<()> {
    let university = load_university(source)?;
    emit("majors", &university.major_summaries())
}

/// One student's summary
pub fn student(source: &SourceArgs, cwid: &str) -> CliResult<()> {
    let university = load_university(source)?;
    let summary = university.student_summary(cwid)?;
    emit("student", &summary)
}

/// One instructor's summary
pub fn instructor(source: &SourceArgs, cwid: &str) -> CliResult<()> {
    let university = load_university(source)?;
    let summary = university.instructor_summary(cwid)?;
    emit("instructor", &summary)
}

/// Load only; prints entity counts
pub fn check(source: &SourceArgs) -> CliResult<()> {
    let university = load_university(source)?;
    emit(
        "check",
        &json!({
            "phase": university.phase().scope_name(),
            "majors": university.catalog().len(),
            "students": university.students().len(),
            "instructors": university.instructors().len(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("majors.txt"), "m\tt\tc\nSFEN\tR\tSSW 540\n").unwrap();
        fs::write(dir.path().join("students.txt"), "c\tn\tm\n10103\tBaldwin, C\tSFEN\n").unwrap();
        fs::write(dir.path().join("instructors.txt"), "c\tn\td\n98765\tEinstein, A\tSFEN\n").unwrap();
        fs::write(dir.path().join("grades.txt"), "s\tc\tg\ti\n10103\tSSW 540\tA\t98765\n").unwrap();
        dir
    }

    #[test]
    fn test_resolve_requires_a_source() {
        let err = resolve_config(&SourceArgs::default()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_data_dir_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registrar.json");
        fs::write(&path, r#"{"data_dir": "/from/file", "separator": "|"}"#).unwrap();

        let source = SourceArgs {
            config: Some(path),
            data_dir: Some(PathBuf::from("/from/flag")),
        };
        let config = resolve_config(&source).unwrap();
        assert_eq!(config.data_dir, "/from/flag");
        assert_eq!(config.separator, "|");
    }

    #[test]
    fn test_init_writes_config_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registrar.json");

        init(&path, Path::new("/srv/uni")).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir, "/srv/uni");

        let err = init(&path, Path::new("/srv/uni")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::AlreadyExists);
    }

    #[test]
    fn test_check_and_lookup_commands() {
        let dir = fixture();
        let source = SourceArgs {
            config: None,
            data_dir: Some(dir.path().to_path_buf()),
        };

        check(&source).unwrap();
        student(&source, "10103").unwrap();

        let err = instructor(&source, "00000").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NotFound);
    }

    #[test]
    fn test_load_failure_maps_to_load_failed() {
        let dir = fixture();
        fs::remove_file(dir.path().join("students.txt")).unwrap();
        let source = SourceArgs {
            config: None,
            data_dir: Some(dir.path().to_path_buf()),
        };

        let err = report(&source).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::LoadFailed);
        assert!(err.message().contains("REGISTRAR_SOURCE_NOT_FOUND"));
    }
}
