//! Load phases and load options

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ingest::DEFAULT_SEPARATOR;

/// Construction phases, in the only order they may run.
///
/// Majors must exist before students reference them; students and
/// instructors must exist before grades join them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    LoadCatalog,
    LoadStudents,
    LoadInstructors,
    LoadGrades,
    Ready,
}

impl LoadPhase {
    /// Ingestion phases in execution order
    pub const SEQUENCE: [LoadPhase; 4] = [
        LoadPhase::LoadCatalog,
        LoadPhase::LoadStudents,
        LoadPhase::LoadInstructors,
        LoadPhase::LoadGrades,
    ];

    /// Name used for BEGIN/COMPLETE/ERROR log events
    pub fn scope_name(&self) -> &'static str {
        match self {
            LoadPhase::LoadCatalog => "LOAD_CATALOG",
            LoadPhase::LoadStudents => "LOAD_STUDENTS",
            LoadPhase::LoadInstructors => "LOAD_INSTRUCTORS",
            LoadPhase::LoadGrades => "LOAD_GRADES",
            LoadPhase::Ready => "READY",
        }
    }

    /// Input file consumed by this phase
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            LoadPhase::LoadCatalog => Some("majors.txt"),
            LoadPhase::LoadStudents => Some("students.txt"),
            LoadPhase::LoadInstructors => Some("instructors.txt"),
            LoadPhase::LoadGrades => Some("grades.txt"),
            LoadPhase::Ready => None,
        }
    }

    /// The phase that follows this one
    pub fn next(&self) -> LoadPhase {
        match self {
            LoadPhase::LoadCatalog => LoadPhase::LoadStudents,
            LoadPhase::LoadStudents => LoadPhase::LoadInstructors,
            LoadPhase::LoadInstructors => LoadPhase::LoadGrades,
            LoadPhase::LoadGrades | LoadPhase::Ready => LoadPhase::Ready,
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scope_name())
    }
}

/// Where and how to read the four input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    root: PathBuf,
    separator: char,
    has_header: bool,
}

impl LoadOptions {
    /// Tab-separated files with a header line under `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            separator: DEFAULT_SEPARATOR,
            has_header: true,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Path of the file read in `phase`, if it reads one
    pub fn path_for(&self, phase: LoadPhase) -> Option<PathBuf> {
        phase.file_name().map(|name| self.root.join(name))
    }
}
