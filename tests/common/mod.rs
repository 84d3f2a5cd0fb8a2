//! Shared fixtures for registrar integration tests
//!
//! Builds tab-separated input directories with header lines inside a
//! `TempDir`. The default dataset is two majors, ten students, six
//! instructors and twenty-two grade rows.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const MAJORS: &[[&str; 3]] = &[
    ["SFEN", "R", "SSW 540"],
    ["SFEN", "R", "SSW 564"],
    ["SFEN", "R", "SSW 555"],
    ["SFEN", "R", "SSW 567"],
    ["SFEN", "E", "CS 501"],
    ["SFEN", "E", "CS 513"],
    ["SFEN", "E", "CS 545"],
    ["SYEN", "R", "SYS 671"],
    ["SYEN", "R", "SYS 612"],
    ["SYEN", "R", "SYS 800"],
    ["SYEN", "E", "SSW 810"],
    ["SYEN", "E", "SSW 565"],
    ["SYEN", "E", "SSW 540"],
];

pub const STUDENTS: &[[&str; 3]] = &[
    ["10103", "Baldwin, C", "SFEN"],
    ["10115", "Wyatt, X", "SFEN"],
    ["10172", "Forbes, I", "SFEN"],
    ["10175", "Erickson, D", "SFEN"],
    ["10183", "Chapman, O", "SFEN"],
    ["11399", "Cordova, I", "SYEN"],
    ["11461", "Wright, U", "SYEN"],
    ["11658", "Kelly, P", "SYEN"],
    ["11714", "Morton, A", "SYEN"],
    ["11788", "Fuller, E", "SYEN"],
];

pub const INSTRUCTORS: &[[&str; 3]] = &[
    ["98765", "Einstein, A", "SFEN"],
    ["98764", "Feynman, R", "SFEN"],
    ["98763", "Newton, I", "SFEN"],
    ["98762", "Hawking, S", "SYEN"],
    ["98761", "Edison, A", "SYEN"],
    ["98760", "Darwin, C", "SYEN"],
];

pub const GRADES: &[[&str; 4]] = &[
    ["10103", "SSW 567", "A", "98765"],
    ["10103", "SSW 564", "A-", "98764"],
    ["10103", "SSW 687", "B", "98764"],
    ["10103", "CS 501", "B", "98764"],
    ["10115", "SSW 567", "A", "98765"],
    ["10115", "SSW 564", "B+", "98764"],
    ["10115", "SSW 687", "A", "98764"],
    ["10115", "CS 545", "A", "98764"],
    ["10172", "SSW 555", "A", "98763"],
    ["10172", "SSW 567", "A-", "98765"],
    ["10175", "SSW 567", "A", "98765"],
    ["10175", "SSW 564", "A", "98764"],
    ["10175", "SSW 687", "B-", "98764"],
    ["10183", "SSW 689", "A", "98763"],
    ["11399", "SSW 540", "B", "98765"],
    ["11461", "SYS 800", "A", "98760"],
    ["11461", "SYS 750", "A-", "98760"],
    ["11461", "SYS 611", "A", "98760"],
    ["11658", "SSW 540", "F", "98764"],
    ["11714", "SYS 611", "A", "98760"],
    ["11714", "SYS 645", "C", "98760"],
    ["11788", "SSW 540", "A", "98765"],
];

/// Writes `rows` tab-separated under `header` to `dir/name`
pub fn write_rows<const N: usize>(dir: &Path, name: &str, header: &str, rows: &[[&str; N]]) {
    let mut body = String::from(header);
    body.push('\n');
    for row in rows {
        body.push_str(&row.join("\t"));
        body.push('\n');
    }
    fs::write(dir.join(name), body).expect("failed to write fixture file");
}

/// Writes raw file content, for malformed inputs
pub fn write_raw(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("failed to write fixture file");
}

/// Input directory built from explicit row sets
pub fn university_dir(
    majors: &[[&str; 3]],
    students: &[[&str; 3]],
    instructors: &[[&str; 3]],
    grades: &[[&str; 4]],
) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_rows(dir.path(), "majors.txt", "Major\tRequired, Elective\tCourse", majors);
    write_rows(dir.path(), "students.txt", "CWID\tName\tMajor", students);
    write_rows(dir.path(), "instructors.txt", "CWID\tName\tDept", instructors);
    write_rows(dir.path(), "grades.txt", "Student CWID\tCourse\tGrade\tInstructor CWID", grades);
    dir
}

/// Input directory with the default dataset
pub fn sample_dir() -> TempDir {
    university_dir(MAJORS, STUDENTS, INSTRUCTORS, GRADES)
}

/// Default dataset rows with `extra` appended
pub fn with_extra<const N: usize>(base: &[[&'static str; N]], extra: [&'static str; N]) -> Vec<[&'static str; N]> {
    let mut rows = base.to_vec();
    rows.push(extra);
    rows
}
