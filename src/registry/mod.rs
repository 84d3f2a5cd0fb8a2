//! Registry subsystem for registrar
//!
//! In-memory relational model: the course catalog, students, instructors,
//! and the grade scale used to derive GPA.
//!
//! # Design Principles
//!
//! - One entity per identifier; duplicates abort ingestion
//! - References resolve at insertion time or fail
//! - Iteration follows ingestion order
//! - Entities are never deleted

mod catalog;
mod errors;
mod grade;
mod instructor;
mod ordered;
mod student;

pub use catalog::{CourseCatalog, CourseType, Major, MajorSummary, Requirements};
pub use errors::{EntityKind, RegistryError, RegistryErrorCode, RegistryResult};
pub use grade::{GpaAccumulator, LetterGrade};
pub use instructor::{
    CourseLoad, Instructor, InstructorCourseRow, InstructorRegistry, InstructorSummary,
};
pub use ordered::OrderedRegistry;
pub use student::{Student, StudentRegistry, StudentSummary};
