//! Serializable summary tables for presentation collaborators

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::loader::University;
use crate::registry::{InstructorCourseRow, MajorSummary, StudentSummary};

/// Majors, students and instructor course rows of one loaded university
#[derive(Debug, Clone, Serialize)]
pub struct UniversityReport {
    pub generated_at: DateTime<Utc>,
    pub root: String,
    pub majors: Vec<MajorSummary>,
    pub students: Vec<StudentSummary>,
    /// One row per (instructor, taught course)
    pub instructors: Vec<InstructorCourseRow>,
}

impl UniversityReport {
    pub fn build(university: &University) -> Self {
        Self {
            generated_at: Utc::now(),
            root: university.root().display().to_string(),
            majors: university.major_summaries(),
            students: university.student_summaries(),
            instructors: university
                .instructor_summaries()
                .iter()
                .flat_map(|summary| summary.rows())
                .collect(),
        }
    }
}
