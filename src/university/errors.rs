//! # University Errors
//!
//! Construction failures, tagged with the phase that aborted.

use thiserror::Error;

use super::phase::LoadPhase;
use crate::ingest::{IngestError, IngestErrorCode};
use crate::registry::{RegistryError, RegistryErrorCode};

/// Result type for university construction
pub type UniversityResult<T> = Result<T, UniversityError>;

/// Fatal construction errors. No partially built university is ever returned.
#[derive(Debug, Error)]
pub enum UniversityError {
    /// A file was missing, unreadable, or had a malformed line
    #[error("{phase} aborted: {source}")]
    Ingest {
        phase: LoadPhase,
        #[source]
        source: IngestError,
    },

    /// A duplicate identifier or an unresolvable reference
    #[error("{phase} aborted: {source}")]
    Registry {
        phase: LoadPhase,
        #[source]
        source: RegistryError,
    },
}

impl UniversityError {
    pub fn ingest(phase: LoadPhase, source: IngestError) -> Self {
        UniversityError::Ingest { phase, source }
    }

    pub fn registry(phase: LoadPhase, source: RegistryError) -> Self {
        UniversityError::Registry { phase, source }
    }

    /// Phase in which construction aborted
    pub fn phase(&self) -> LoadPhase {
        match self {
            UniversityError::Ingest { phase, .. } | UniversityError::Registry { phase, .. } => *phase,
        }
    }

    /// Stable error code of the underlying failure
    pub fn code(&self) -> &'static str {
        match self {
            UniversityError::Ingest { source, .. } => source.code().code(),
            UniversityError::Registry { source, .. } => source.code().code(),
        }
    }

    pub fn ingest_code(&self) -> Option<IngestErrorCode> {
        match self {
            UniversityError::Ingest { source, .. } => Some(source.code()),
            UniversityError::Registry { .. } => None,
        }
    }

    pub fn registry_code(&self) -> Option<RegistryErrorCode> {
        match self {
            UniversityError::Registry { source, .. } => Some(source.code()),
            UniversityError::Ingest { .. } => None,
        }
    }

    /// Underlying ingest error, for file and line context
    pub fn as_ingest(&self) -> Option<&IngestError> {
        match self {
            UniversityError::Ingest { source, .. } => Some(source),
            UniversityError::Registry { .. } => None,
        }
    }

    /// Underlying registry error, for the offending key
    pub fn as_registry(&self) -> Option<&RegistryError> {
        match self {
            UniversityError::Registry { source, .. } => Some(source),
            UniversityError::Ingest { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_code_and_phase_pass_through() {
        let err = UniversityError::registry(
            LoadPhase::LoadGrades,
            RegistryError::unknown_instructor("00000"),
        );
        assert_eq!(err.phase(), LoadPhase::LoadGrades);
        assert_eq!(err.code(), "REGISTRAR_UNKNOWN_INSTRUCTOR");
        assert_eq!(err.registry_code(), Some(RegistryErrorCode::UnknownInstructor));
        assert!(err.ingest_code().is_none());
    }

    #[test]
    fn test_display_names_phase() {
        let err = UniversityError::ingest(
            LoadPhase::LoadStudents,
            IngestError::malformed_record(Path::new("students.txt"), 4, 3, 4),
        );
        let display = err.to_string();
        assert!(display.starts_with("LOAD_STUDENTS aborted"));
        assert!(display.contains("line 4"));
        assert_eq!(err.as_ingest().unwrap().line(), Some(4));
    }
}
