//! University aggregator for registrar
//!
//! Orchestrates ingestion of the four input files and owns the resulting
//! model.
//!
//! # Design Principles
//!
//! - Fixed phase order: catalog, students, instructors, grades
//! - All-or-nothing construction: any fatal error aborts, nothing partial escapes
//! - Grade rows are atomic: both references resolve before either side changes
//! - Explicit entry point, nothing runs at load time

mod errors;
mod loader;
mod phase;
mod report;

pub use errors::{UniversityError, UniversityResult};
pub use loader::{GradeRecord, University};
pub use phase::{LoadOptions, LoadPhase};
pub use report::UniversityReport;
