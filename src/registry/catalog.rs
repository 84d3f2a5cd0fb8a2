//! Course catalog: one entry per major with its required and elective courses
//!
//! Catalog rows are classified by a one-letter course type. An unknown type
//! is a data-quality anomaly, not a structural error: the row is dropped
//! with a warning and ingestion continues.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::errors::{RegistryError, RegistryResult};
use super::ordered::OrderedRegistry;
use crate::observability::{log_event_with_fields, Event};

/// Classification of a catalog course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseType {
    /// Every required course must be completed
    Required,
    /// Any single completed elective satisfies the requirement
    Elective,
}

impl CourseType {
    /// Parses the catalog token (`R` or `E`, case-sensitive)
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "R" => Some(CourseType::Required),
            "E" => Some(CourseType::Elective),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            CourseType::Required => "R",
            CourseType::Elective => "E",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Snapshot of a major's course requirements.
///
/// Students take a copy of this at registration; later catalog changes
/// would not reach them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    pub required: BTreeSet<String>,
    pub electives: BTreeSet<String>,
}

/// An academic major
#[derive(Debug, Clone)]
pub struct Major {
    name: String,
    requirements: Requirements,
}

impl Major {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirements: Requirements::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> &BTreeSet<String> {
        &self.requirements.required
    }

    pub fn electives(&self) -> &BTreeSet<String> {
        &self.requirements.electives
    }

    fn add_course(&mut self, course_type: CourseType, course: String) {
        match course_type {
            CourseType::Required => self.requirements.required.insert(course),
            CourseType::Elective => self.requirements.electives.insert(course),
        };
    }

    pub fn summary(&self) -> MajorSummary {
        MajorSummary {
            major: self.name.clone(),
            required: self.requirements.required.iter().cloned().collect(),
            electives: self.requirements.electives.iter().cloned().collect(),
        }
    }
}

/// Per-major summary row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorSummary {
    pub major: String,
    pub required: Vec<String>,
    pub electives: Vec<String>,
}

/// All majors, in the order they first appear in the catalog file
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    majors: OrderedRegistry<Major>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a classified course to `major`, creating the major on first use.
    /// Listing the same course twice has no further effect.
    pub fn add_course(&mut self, major: &str, course_type: CourseType, course: impl Into<String>) {
        self.majors
            .get_or_insert_with(major, || Major::new(major))
            .add_course(course_type, course.into());
    }

    /// Adds one raw catalog row.
    ///
    /// Returns false, after logging `CATALOG_ROW_SKIPPED`, if `token` is not
    /// a known course type. A skipped row does not create its major.
    pub fn add_row(&mut self, major: &str, token: &str, course: &str) -> bool {
        match CourseType::parse(token) {
            Some(course_type) => {
                self.add_course(major, course_type, course);
                true
            }
            None => {
                log_event_with_fields(
                    Event::CatalogRowSkipped,
                    &[("major", major), ("course", course), ("token", token)],
                );
                false
            }
        }
    }

    pub fn get(&self, major: &str) -> Option<&Major> {
        self.majors.get(major)
    }

    /// Returns a copy of the requirements for `major`.
    ///
    /// # Errors
    ///
    /// `REGISTRAR_UNKNOWN_MAJOR` if the major is not in the catalog.
    pub fn requirements(&self, major: &str) -> RegistryResult<Requirements> {
        self.majors
            .get(major)
            .map(|m| m.requirements.clone())
            .ok_or_else(|| RegistryError::unknown_major(major))
    }

    pub fn len(&self) -> usize {
        self.majors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }

    /// Majors in catalog order
    pub fn majors(&self) -> impl Iterator<Item = &Major> {
        self.majors.iter()
    }

    pub fn summaries(&self) -> Vec<MajorSummary> {
        self.majors.iter().map(Major::summary).collect()
    }
}
