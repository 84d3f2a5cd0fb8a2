//! University construction
//!
//! # Load Sequence (strict order)
//!
//! 1. Catalog (`majors.txt`)
//! 2. Students (`students.txt`), each resolved against the catalog
//! 3. Instructors (`instructors.txt`)
//! 4. Grades (`grades.txt`), each joining one student and one instructor
//!
//! Each phase consumes its file fully before the next begins. The first
//! fatal error aborts the whole construction.

use std::path::{Path, PathBuf};

use super::errors::{UniversityError, UniversityResult};
use super::phase::{LoadOptions, LoadPhase};
use super::report::UniversityReport;
use crate::ingest::RecordReader;
use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::registry::{
    CourseCatalog, InstructorRegistry, InstructorSummary, Major, MajorSummary, RegistryResult,
    StudentRegistry, StudentSummary,
};

/// One parsed row of the grades file. Applied immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub student_cwid: String,
    pub course: String,
    pub grade: String,
    pub instructor_cwid: String,
}

impl From<[String; 4]> for GradeRecord {
    fn from([student_cwid, course, grade, instructor_cwid]: [String; 4]) -> Self {
        Self {
            student_cwid,
            course,
            grade,
            instructor_cwid,
        }
    }
}

/// Fully loaded university model. Only obtainable in the Ready state.
#[derive(Debug, Clone)]
pub struct University {
    root: PathBuf,
    catalog: CourseCatalog,
    students: StudentRegistry,
    instructors: InstructorRegistry,
}

impl University {
    /// Loads tab-separated files with header lines from `root`.
    pub fn load(root: impl AsRef<Path>) -> UniversityResult<Self> {
        Self::load_with(&LoadOptions::new(root))
    }

    /// Loads the four input files described by `options`.
    ///
    /// Returns a university in the Ready state, or the first fatal error.
    pub fn load_with(options: &LoadOptions) -> UniversityResult<Self> {
        let root = options.root().display().to_string();
        log_event_with_fields(Event::LoadBegin, &[("root", root.as_str())]);

        match Self::build(options) {
            Ok(university) => {
                let instructors = university.instructors.len().to_string();
                let majors = university.catalog.len().to_string();
                let students = university.students.len().to_string();
                log_event_with_fields(
                    Event::LoadComplete,
                    &[
                        ("instructors", instructors.as_str()),
                        ("majors", majors.as_str()),
                        ("root", root.as_str()),
                        ("students", students.as_str()),
                    ],
                );
                Ok(university)
            }
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::LoadFailed,
                    &[
                        ("code", e.code()),
                        ("phase", e.phase().scope_name()),
                        ("reason", reason.as_str()),
                    ],
                );
                Err(e)
            }
        }
    }

    fn build(options: &LoadOptions) -> UniversityResult<Self> {
        let catalog = load_catalog(options)?;
        let mut students = load_students(options, &catalog)?;
        let mut instructors = load_instructors(options)?;
        load_grades(options, &mut students, &mut instructors)?;

        Ok(Self {
            root: options.root().to_path_buf(),
            catalog,
            students,
            instructors,
        })
    }

    /// Directory the files were loaded from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Always `Ready`: construction never yields an intermediate state
    pub fn phase(&self) -> LoadPhase {
        LoadPhase::Ready
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Majors in catalog order
    pub fn majors(&self) -> impl Iterator<Item = &Major> {
        self.catalog.majors()
    }

    pub fn students(&self) -> &StudentRegistry {
        &self.students
    }

    pub fn instructors(&self) -> &InstructorRegistry {
        &self.instructors
    }

    /// Per-major rows in catalog order
    pub fn major_summaries(&self) -> Vec<MajorSummary> {
        self.catalog.summaries()
    }

    /// Per-student rows in students-file order
    pub fn student_summaries(&self) -> Vec<StudentSummary> {
        self.students.summaries()
    }

    /// Per-instructor summaries in instructors-file order
    pub fn instructor_summaries(&self) -> Vec<InstructorSummary> {
        self.instructors.summaries()
    }

    pub fn student_summary(&self, cwid: &str) -> RegistryResult<StudentSummary> {
        self.students.fetch_summary(cwid)
    }

    pub fn instructor_summary(&self, cwid: &str) -> RegistryResult<InstructorSummary> {
        self.instructors.fetch_summary(cwid)
    }

    /// All three summary tables with a generation timestamp
    pub fn report(&self) -> UniversityReport {
        UniversityReport::build(self)
    }
}

fn open_phase<const N: usize>(
    options: &LoadOptions,
    phase: LoadPhase,
) -> UniversityResult<RecordReader<N>> {
    let path = options.path_for(phase).unwrap_or_else(|| options.root().to_path_buf());
    RecordReader::<N>::open(&path, options.separator(), options.has_header())
        .map_err(|e| UniversityError::ingest(phase, e))
}

fn begin_scope(phase: LoadPhase) -> ObservationScope {
    ObservationScope::with_fields(phase.scope_name(), &[("file", phase.file_name().unwrap_or(""))])
}

fn load_catalog(options: &LoadOptions) -> UniversityResult<CourseCatalog> {
    let phase = LoadPhase::LoadCatalog;
    let scope = begin_scope(phase);
    let mut catalog = CourseCatalog::new();
    let mut skipped = 0usize;

    for row in open_phase::<3>(options, phase)? {
        let [major, token, course] = row.map_err(|e| UniversityError::ingest(phase, e))?;
        if !catalog.add_row(&major, &token, &course) {
            skipped += 1;
        }
    }

    let majors = catalog.len().to_string();
    let skipped = skipped.to_string();
    scope.complete(&[("majors", majors.as_str()), ("skipped", skipped.as_str())]);
    Ok(catalog)
}

fn load_students(options: &LoadOptions, catalog: &CourseCatalog) -> UniversityResult<StudentRegistry> {
    let phase = LoadPhase::LoadStudents;
    let scope = begin_scope(phase);
    let mut students = StudentRegistry::new();

    for row in open_phase::<3>(options, phase)? {
        let [cwid, name, major] = row.map_err(|e| UniversityError::ingest(phase, e))?;
        students
            .register_student(&cwid, &name, &major, catalog)
            .map_err(|e| UniversityError::registry(phase, e))?;
    }

    let count = students.len().to_string();
    scope.complete(&[("students", count.as_str())]);
    Ok(students)
}

fn load_instructors(options: &LoadOptions) -> UniversityResult<InstructorRegistry> {
    let phase = LoadPhase::LoadInstructors;
    let scope = begin_scope(phase);
    let mut instructors = InstructorRegistry::new();

    for row in open_phase::<3>(options, phase)? {
        let [cwid, name, dept] = row.map_err(|e| UniversityError::ingest(phase, e))?;
        instructors
            .register_instructor(&cwid, &name, &dept)
            .map_err(|e| UniversityError::registry(phase, e))?;
    }

    let count = instructors.len().to_string();
    scope.complete(&[("instructors", count.as_str())]);
    Ok(instructors)
}

/// Applies every grade row to its student and instructor.
///
/// Both CWIDs are resolved before either side is touched, so a failing row
/// never updates only one of them.
fn load_grades(
    options: &LoadOptions,
    students: &mut StudentRegistry,
    instructors: &mut InstructorRegistry,
) -> UniversityResult<()> {
    let phase = LoadPhase::LoadGrades;
    let scope = begin_scope(phase);
    let mut applied = 0usize;

    for row in open_phase::<4>(options, phase)? {
        let record = GradeRecord::from(row.map_err(|e| UniversityError::ingest(phase, e))?);

        let student = students
            .get_mut(&record.student_cwid)
            .map_err(|e| UniversityError::registry(phase, e))?;
        let instructor = instructors
            .get_mut(&record.instructor_cwid)
            .map_err(|e| UniversityError::registry(phase, e))?;

        student.record_grade(record.course.as_str(), record.grade);
        instructor.add_student(record.course);
        applied += 1;
    }

    let applied = applied.to_string();
    scope.complete(&[("grades", applied.as_str())]);
    Ok(())
}
