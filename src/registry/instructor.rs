//! Instructors and the instructor registry
//!
//! Instructor CWIDs live in their own namespace; a student may share one
//! without conflict.

use std::collections::BTreeMap;

use serde::Serialize;

use super::errors::{EntityKind, RegistryError, RegistryResult};
use super::ordered::OrderedRegistry;

/// A registered instructor
#[derive(Debug, Clone)]
pub struct Instructor {
    cwid: String,
    name: String,
    dept: String,
    /// taught course -> number of grade rows naming it
    courses: BTreeMap<String, usize>,
}

impl Instructor {
    pub fn new(cwid: impl Into<String>, name: impl Into<String>, dept: impl Into<String>) -> Self {
        Self {
            cwid: cwid.into(),
            name: name.into(),
            dept: dept.into(),
            courses: BTreeMap::new(),
        }
    }

    pub fn cwid(&self) -> &str {
        &self.cwid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dept(&self) -> &str {
        &self.dept
    }

    /// Registers `course` as taught and counts one more student in it
    pub fn add_student(&mut self, course: impl Into<String>) {
        *self.courses.entry(course.into()).or_insert(0) += 1;
    }

    /// Distinct courses taught, ascending
    pub fn courses_taught(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// Student count for `course`, zero if not taught
    pub fn students_in(&self, course: &str) -> usize {
        self.courses.get(course).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> InstructorSummary {
        InstructorSummary {
            cwid: self.cwid.clone(),
            name: self.name.clone(),
            dept: self.dept.clone(),
            courses: self
                .courses
                .iter()
                .map(|(course, &students)| CourseLoad {
                    course: course.clone(),
                    students,
                })
                .collect(),
        }
    }
}

/// Enrollment for one taught course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLoad {
    pub course: String,
    pub students: usize,
}

/// Instructor header with one course load per taught course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorSummary {
    pub cwid: String,
    pub name: String,
    pub dept: String,
    pub courses: Vec<CourseLoad>,
}

impl InstructorSummary {
    /// Flattens to one row per taught course
    pub fn rows(&self) -> Vec<InstructorCourseRow> {
        self.courses
            .iter()
            .map(|load| InstructorCourseRow {
                cwid: self.cwid.clone(),
                name: self.name.clone(),
                dept: self.dept.clone(),
                course: load.course.clone(),
                students: load.students,
            })
            .collect()
    }
}

/// Per-instructor, per-course summary row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorCourseRow {
    pub cwid: String,
    pub name: String,
    pub dept: String,
    pub course: String,
    pub students: usize,
}

/// Instructors keyed by CWID, in registration order
#[derive(Debug, Clone, Default)]
pub struct InstructorRegistry {
    instructors: OrderedRegistry<Instructor>,
}

impl InstructorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an instructor.
    ///
    /// # Errors
    ///
    /// `REGISTRAR_DUPLICATE_KEY` if `cwid` is already registered.
    pub fn register_instructor(&mut self, cwid: &str, name: &str, dept: &str) -> RegistryResult<()> {
        self.instructors
            .insert(cwid.to_owned(), Instructor::new(cwid, name, dept))
            .map_err(|_| RegistryError::duplicate_key(EntityKind::Instructor, cwid))
    }

    /// Counts one student taught in `course` by instructor `cwid`.
    ///
    /// # Errors
    ///
    /// `REGISTRAR_UNKNOWN_INSTRUCTOR` if `cwid` is not registered.
    pub fn record_teaching(&mut self, cwid: &str, course: &str) -> RegistryResult<()> {
        self.get_mut(cwid)?.add_student(course);
        Ok(())
    }

    /// Summary for one instructor.
    ///
    /// # Errors
    ///
    /// `REGISTRAR_UNKNOWN_INSTRUCTOR` if `cwid` is not registered.
    pub fn fetch_summary(&self, cwid: &str) -> RegistryResult<InstructorSummary> {
        self.instructors
            .get(cwid)
            .map(Instructor::summary)
            .ok_or_else(|| RegistryError::unknown_instructor(cwid))
    }

    pub fn get(&self, cwid: &str) -> Option<&Instructor> {
        self.instructors.get(cwid)
    }

    /// Mutable access, failing with `REGISTRAR_UNKNOWN_INSTRUCTOR`
    pub fn get_mut(&mut self, cwid: &str) -> RegistryResult<&mut Instructor> {
        self.instructors
            .get_mut(cwid)
            .ok_or_else(|| RegistryError::unknown_instructor(cwid))
    }

    pub fn contains(&self, cwid: &str) -> bool {
        self.instructors.contains(cwid)
    }

    pub fn len(&self) -> usize {
        self.instructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructors.is_empty()
    }

    /// Instructors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.iter()
    }

    pub fn summaries(&self) -> Vec<InstructorSummary> {
        self.instructors.iter().map(Instructor::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryErrorCode;

    #[test]
    fn test_course_counts() {
        let mut registry = InstructorRegistry::new();
        registry.register_instructor("98765", "Einstein, A", "SFEN").unwrap();

        registry.record_teaching("98765", "SSW 567").unwrap();
        registry.record_teaching("98765", "SSW 540").unwrap();
        registry.record_teaching("98765", "SSW 567").unwrap();

        let summary = registry.fetch_summary("98765").unwrap();
        assert_eq!(
            summary.courses,
            vec![
                CourseLoad { course: "SSW 540".into(), students: 1 },
                CourseLoad { course: "SSW 567".into(), students: 2 },
            ]
        );
    }

    #[test]
    fn test_rows_one_per_course() {
        let mut instructor = Instructor::new("98764", "Feynman, R", "SFEN");
        instructor.add_student("SSW 564");
        instructor.add_student("CS 501");
        instructor.add_student("SSW 564");

        let rows = instructor.summary().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].course, "CS 501");
        assert_eq!(rows[1].students, 2);
        assert!(rows.iter().all(|r| r.cwid == "98764" && r.dept == "SFEN"));
        assert_eq!(instructor.students_in("SSW 999"), 0);
    }

    #[test]
    fn test_instructor_without_courses_has_no_rows() {
        let instructor = Instructor::new("98760", "Darwin, C", "SYEN");
        assert!(instructor.summary().rows().is_empty());
        assert_eq!(instructor.courses_taught().count(), 0);
    }

    #[test]
    fn test_duplicate_cwid() {
        let mut registry = InstructorRegistry::new();
        registry.register_instructor("98765", "Einstein, A", "SFEN").unwrap();

        let err = registry.register_instructor("98765", "Newton, I", "SFEN").unwrap_err();
        assert_eq!(err.code(), RegistryErrorCode::DuplicateKey);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_instructor() {
        let mut registry = InstructorRegistry::new();
        let err = registry.record_teaching("00000", "SSW 540").unwrap_err();
        assert_eq!(err.code(), RegistryErrorCode::UnknownInstructor);
        assert!(registry.fetch_summary("00000").is_err());
    }
}
