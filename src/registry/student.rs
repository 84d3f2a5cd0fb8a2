//! Students and the student registry
//!
//! A student is created once from the students file and afterwards only
//! gains course grades. Remaining-course sets are derived from the major's
//! requirements captured at registration.

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::{CourseCatalog, Requirements};
use super::errors::{EntityKind, RegistryError, RegistryResult};
use super::grade::{GpaAccumulator, LetterGrade};
use super::ordered::OrderedRegistry;
use crate::observability::{log_event_with_fields, Event};

/// A registered student
#[derive(Debug, Clone)]
pub struct Student {
    cwid: String,
    name: String,
    major: String,
    /// course -> letter grade, one grade per course
    courses: BTreeMap<String, String>,
    requirements: Requirements,
}

impl Student {
    pub fn new(
        cwid: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
        requirements: Requirements,
    ) -> Self {
        Self {
            cwid: cwid.into(),
            name: name.into(),
            major: major.into(),
            courses: BTreeMap::new(),
            requirements,
        }
    }

    pub fn cwid(&self) -> &str {
        &self.cwid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    /// Records `grade` for `course`, replacing any earlier grade for it
    pub fn record_grade(&mut self, course: impl Into<String>, grade: impl Into<String>) {
        self.courses.insert(course.into(), grade.into());
    }

    /// Returns the recorded grade for `course`
    pub fn grade(&self, course: &str) -> Option<&str> {
        self.courses.get(course).map(String::as_str)
    }

    /// Courses with a recorded grade, ascending
    pub fn completed_courses(&self) -> Vec<String> {
        self.courses.keys().cloned().collect()
    }

    /// Required courses of the major not yet completed, ascending
    pub fn remaining_required(&self) -> Vec<String> {
        self.requirements
            .required
            .iter()
            .filter(|course| !self.courses.contains_key(*course))
            .cloned()
            .collect()
    }

    /// Electives still open, ascending.
    ///
    /// Empty once any elective of the major has been completed.
    pub fn remaining_electives(&self) -> Vec<String> {
        let satisfied = self
            .requirements
            .electives
            .iter()
            .any(|course| self.courses.contains_key(course));
        if satisfied {
            return Vec::new();
        }

        self.requirements.electives.iter().cloned().collect()
    }

    /// Grade point average over recognized letter grades.
    ///
    /// Unrecognized letters are logged and left out of the average.
    /// Returns `None` when no grade is recognized.
    pub fn gpa(&self) -> Option<f64> {
        let mut acc = GpaAccumulator::default();

        for (course, letter) in &self.courses {
            match LetterGrade::parse(letter) {
                Some(grade) => acc.add(grade),
                None => log_event_with_fields(
                    Event::GradeUnrecognized,
                    &[
                        ("cwid", self.cwid.as_str()),
                        ("course", course.as_str()),
                        ("grade", letter.as_str()),
                    ],
                ),
            }
        }

        acc.gpa()
    }

    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            cwid: self.cwid.clone(),
            name: self.name.clone(),
            major: self.major.clone(),
            completed_courses: self.completed_courses(),
            remaining_required: self.remaining_required(),
            remaining_electives: self.remaining_electives(),
            gpa: self.gpa(),
        }
    }
}

/// Per-student summary row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub cwid: String,
    pub name: String,
    pub major: String,
    pub completed_courses: Vec<String>,
    pub remaining_required: Vec<String>,
    pub remaining_electives: Vec<String>,
    /// `null` when the student has no gradable course
    pub gpa: Option<f64>,
}

/// Students keyed by CWID, in registration order
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: OrderedRegistry<Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a student in `major`.
    ///
    /// # Errors
    ///
    /// - `REGISTRAR_UNKNOWN_MAJOR` if `major` is not in `catalog`
    /// - `REGISTRAR_DUPLICATE_KEY` if `cwid` is already registered
    pub fn register_student(
        &mut self,
        cwid: &str,
        name: &str,
        major: &str,
        catalog: &CourseCatalog,
    ) -> RegistryResult<()> {
        let requirements = catalog.requirements(major)?;

        self.students
            .insert(cwid.to_owned(), Student::new(cwid, name, major, requirements))
            .map_err(|_| RegistryError::duplicate_key(EntityKind::Student, cwid))
    }

    /// Records `grade` for `course` on student `cwid`.
    ///
    /// # Errors
    ///
    /// `REGISTRAR_UNKNOWN_STUDENT` if `cwid` is not registered.
    pub fn assign_grade(&mut self, cwid: &str, course: &str, grade: &str) -> RegistryResult<()> {
        self.get_mut(cwid)?.record_grade(course, grade);
        Ok(())
    }

    /// Summary for one student.
    ///
    /// # Errors
    ///
    /// `REGISTRAR_UNKNOWN_STUDENT` if `cwid` is not registered.
    pub fn fetch_summary(&self, cwid: &str) -> RegistryResult<StudentSummary> {
        self.students
            .get(cwid)
            .map(Student::summary)
            .ok_or_else(|| RegistryError::unknown_student(cwid))
    }

    pub fn get(&self, cwid: &str) -> Option<&Student> {
        self.students.get(cwid)
    }

    /// Mutable access, failing with `REGISTRAR_UNKNOWN_STUDENT`
    pub fn get_mut(&mut self, cwid: &str) -> RegistryResult<&mut Student> {
        self.students
            .get_mut(cwid)
            .ok_or_else(|| RegistryError::unknown_student(cwid))
    }

    pub fn contains(&self, cwid: &str) -> bool {
        self.students.contains(cwid)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn summaries(&self) -> Vec<StudentSummary> {
        self.students.iter().map(Student::summary).collect()
    }
}
