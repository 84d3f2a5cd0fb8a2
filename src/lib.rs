//! registrar - A strict, deterministic university records aggregator
//!
//! Loads majors, students, instructors and grades from delimited text files
//! into an in-memory model and derives per-entity summaries.

pub mod cli;
pub mod ingest;
pub mod observability;
pub mod registry;
pub mod university;

pub use university::{LoadOptions, University, UniversityError, UniversityResult};
