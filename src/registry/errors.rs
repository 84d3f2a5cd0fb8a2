//! Registry error types
//!
//! Error codes:
//! - REGISTRAR_DUPLICATE_KEY (FATAL)
//! - REGISTRAR_UNKNOWN_MAJOR (FATAL)
//! - REGISTRAR_UNKNOWN_STUDENT (FATAL)
//! - REGISTRAR_UNKNOWN_INSTRUCTOR (FATAL)

use std::fmt;

/// Severity levels for registry errors
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

/// Registry-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryErrorCode {
    /// Identifier already registered in the same namespace
    DuplicateKey,
    /// Major referenced by a student is not in the catalog
    UnknownMajor,
    /// Student referenced by a grade is not registered
    UnknownStudent,
    /// Instructor referenced by a grade is not registered
    UnknownInstructor,
}

impl RegistryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            RegistryErrorCode::DuplicateKey => "REGISTRAR_DUPLICATE_KEY",
            RegistryErrorCode::UnknownMajor => "REGISTRAR_UNKNOWN_MAJOR",
            RegistryErrorCode::UnknownStudent => "REGISTRAR_UNKNOWN_STUDENT",
            RegistryErrorCode::UnknownInstructor => "REGISTRAR_UNKNOWN_INSTRUCTOR",
        }
    }

    /// Every registry failure aborts construction
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for RegistryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Identifier namespace an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Major,
    Student,
    Instructor,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Major => "major",
            EntityKind::Student => "student",
            EntityKind::Instructor => "instructor",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registry error with the offending key
#[derive(Debug, Clone)]
pub struct RegistryError {
    code: RegistryErrorCode,
    kind: EntityKind,
    key: String,
    message: String,
}

impl RegistryError {
    /// Create a duplicate key error
    pub fn duplicate_key(kind: EntityKind, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            code: RegistryErrorCode::DuplicateKey,
            kind,
            message: format!("A {} with the CWID '{}' already exists", kind, key),
            key,
        }
    }

    /// Create an unknown major error
    pub fn unknown_major(major: impl Into<String>) -> Self {
        let key = major.into();
        Self {
            code: RegistryErrorCode::UnknownMajor,
            kind: EntityKind::Major,
            message: format!("Major '{}' is not in the catalog", key),
            key,
        }
    }

    /// Create an unknown student error
    pub fn unknown_student(cwid: impl Into<String>) -> Self {
        let key = cwid.into();
        Self {
            code: RegistryErrorCode::UnknownStudent,
            kind: EntityKind::Student,
            message: format!("No student with the CWID '{}'", key),
            key,
        }
    }

    /// Create an unknown instructor error
    pub fn unknown_instructor(cwid: impl Into<String>) -> Self {
        let key = cwid.into();
        Self {
            code: RegistryErrorCode::UnknownInstructor,
            kind: EntityKind::Instructor,
            message: format!("No instructor with the CWID '{}'", key),
            key,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> RegistryErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the namespace of the offending key
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the offending key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for RegistryError {}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
