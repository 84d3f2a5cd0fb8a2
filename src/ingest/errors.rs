//! Ingest error types
//!
//! Error codes:
//! - REGISTRAR_SOURCE_NOT_FOUND (FATAL)
//! - REGISTRAR_MALFORMED_RECORD (FATAL)
//! - REGISTRAR_READ_FAILED (FATAL)

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Severity levels for ingest errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Construction must abort
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Ingest-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestErrorCode {
    /// Input file could not be opened
    SourceNotFound,
    /// Line field count does not match the expected arity
    MalformedRecord,
    /// I/O failure after the file was opened
    ReadFailed,
}

impl IngestErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            IngestErrorCode::SourceNotFound => "REGISTRAR_SOURCE_NOT_FOUND",
            IngestErrorCode::MalformedRecord => "REGISTRAR_MALFORMED_RECORD",
            IngestErrorCode::ReadFailed => "REGISTRAR_READ_FAILED",
        }
    }

    /// Every ingest failure aborts construction
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for IngestErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ingest error with file and line context
#[derive(Debug)]
pub struct IngestError {
    code: IngestErrorCode,
    message: String,
    path: PathBuf,
    /// 1-based physical line number, header included
    line: Option<usize>,
    /// (expected, actual) field counts for malformed records
    arity: Option<(usize, usize)>,
    source: Option<io::Error>,
}

impl IngestError {
    /// Create a source-not-found error
    pub fn source_not_found(path: &Path, source: io::Error) -> Self {
        Self {
            code: IngestErrorCode::SourceNotFound,
            message: format!("Cannot open '{}'", path.display()),
            path: path.to_path_buf(),
            line: None,
            arity: None,
            source: Some(source),
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(path: &Path, line: usize, expected: usize, actual: usize) -> Self {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            code: IngestErrorCode::MalformedRecord,
            message: format!(
                "{} has {} fields on line {} but expected {}",
                file, actual, line, expected
            ),
            path: path.to_path_buf(),
            line: Some(line),
            arity: Some((expected, actual)),
            source: None,
        }
    }

    /// Create a read failure error
    pub fn read_failed(path: &Path, line: usize, source: io::Error) -> Self {
        Self {
            code: IngestErrorCode::ReadFailed,
            message: format!("Failed to read '{}' at line {}", path.display(), line),
            path: path.to_path_buf(),
            line: Some(line),
            arity: None,
            source: Some(source),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> IngestErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the 1-based line number, if the error is tied to a line
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Returns the expected field count for malformed records
    pub fn expected_fields(&self) -> Option<usize> {
        self.arity.map(|(expected, _)| expected)
    }

    /// Returns the actual field count for malformed records
    pub fn actual_fields(&self) -> Option<usize> {
        self.arity.map(|(_, actual)| actual)
    }
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(IngestErrorCode::SourceNotFound.code(), "REGISTRAR_SOURCE_NOT_FOUND");
        assert_eq!(IngestErrorCode::MalformedRecord.code(), "REGISTRAR_MALFORMED_RECORD");
        assert_eq!(IngestErrorCode::ReadFailed.code(), "REGISTRAR_READ_FAILED");
    }

    #[test]
    fn test_malformed_record_context() {
        let err = IngestError::malformed_record(Path::new("/data/students.txt"), 7, 3, 2);
        assert_eq!(err.line(), Some(7));
        assert_eq!(err.expected_fields(), Some(3));
        assert_eq!(err.actual_fields(), Some(2));

        let display = format!("{}", err);
        assert!(display.contains("FATAL"));
        assert!(display.contains("students.txt has 2 fields on line 7 but expected 3"));
    }

    #[test]
    fn test_source_not_found_names_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = IngestError::source_not_found(Path::new("/nope/grades.txt"), io_err);
        assert_eq!(err.code(), IngestErrorCode::SourceNotFound);
        assert!(err.message().contains("/nope/grades.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
