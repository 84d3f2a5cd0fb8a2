//! Delimited record reader with strict arity checking
//!
//! - One record per physical line, split on a single separator character
//! - Every data line must have exactly `N` fields; the first mismatch aborts the read
//! - An optional header line is discarded without being checked
//! - One pass only: re-reading requires a fresh `open`

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use super::errors::{IngestError, IngestResult};

/// Default field separator for registrar input files
pub const DEFAULT_SEPARATOR: char = '\t';

/// Lazy reader yielding fixed-arity records from a delimited text file.
///
/// The file handle is held only while records remain. It is released at end
/// of file, on the first error, or when the reader is dropped.
pub struct RecordReader<const N: usize> {
    path: PathBuf,
    separator: char,
    lines: Option<Lines<BufReader<File>>>,
    /// Physical lines consumed so far (header included)
    line_no: usize,
    skip_header: bool,
}

impl<const N: usize> RecordReader<N> {
    /// Opens `path` for a single read pass.
    ///
    /// # Errors
    ///
    /// Returns `REGISTRAR_SOURCE_NOT_FOUND` if the file cannot be opened.
    pub fn open(path: &Path, separator: char, has_header: bool) -> IngestResult<Self> {
        let file = File::open(path).map_err(|e| IngestError::source_not_found(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            separator,
            lines: Some(BufReader::new(file).lines()),
            line_no: 0,
            skip_header: has_header,
        })
    }

    /// Returns the file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of physical lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Returns true once the file handle has been released.
    pub fn is_closed(&self) -> bool {
        self.lines.is_none()
    }

    /// Reads the next record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(fields))` for the next data line
    /// - `Ok(None)` at end of file or after a previous error
    /// - `Err(REGISTRAR_MALFORMED_RECORD)` if the field count is not `N`
    /// - `Err(REGISTRAR_READ_FAILED)` on I/O or encoding failure
    pub fn read_next(&mut self) -> IngestResult<Option<[String; N]>> {
        loop {
            let Some(lines) = self.lines.as_mut() else {
                return Ok(None);
            };

            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.line_no += 1;
                    self.lines = None;
                    return Err(IngestError::read_failed(&self.path, self.line_no, e));
                }
                None => {
                    self.lines = None;
                    return Ok(None);
                }
            };
            self.line_no += 1;

            if self.skip_header && self.line_no == 1 {
                continue;
            }

            return self.split_line(&line).map(Some).map_err(|e| {
                self.lines = None;
                e
            });
        }
    }

    fn split_line(&self, line: &str) -> IngestResult<[String; N]> {
        let fields: Vec<String> = line.split(self.separator).map(str::to_owned).collect();

        fields.try_into().map_err(|fields: Vec<String>| {
            IngestError::malformed_record(&self.path, self.line_no, N, fields.len())
        })
    }
}

impl<const N: usize> Iterator for RecordReader<N> {
    type Item = IngestResult<[String; N]>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

impl<const N: usize> std::iter::FusedIterator for RecordReader<N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::IngestErrorCode;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_records_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "students.txt", b"10103\tBaldwin, C\tSFEN\n10115\tWyatt, X\tSFEN\n");

        let rows: Vec<[String; 3]> = RecordReader::<3>::open(&path, '\t', false)
            .unwrap()
            .collect::<IngestResult<_>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["10103", "Baldwin, C", "SFEN"].map(String::from));
        assert_eq!(rows[1][1], "Wyatt, X");
    }

    #[test]
    fn test_header_is_skipped_without_arity_check() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "majors.txt", b"only one header column\nSFEN\tR\tSSW 540\n");

        let rows: Vec<[String; 3]> = RecordReader::<3>::open(&path, '\t', true)
            .unwrap()
            .collect::<IngestResult<_>>()
            .unwrap();

        assert_eq!(rows, vec![["SFEN", "R", "SSW 540"].map(String::from)]);
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "crlf.txt", b"a|b\r\nc|d\r\n");

        let rows: Vec<[String; 2]> = RecordReader::<2>::open(&path, '|', false)
            .unwrap()
            .collect::<IngestResult<_>>()
            .unwrap();

        assert_eq!(rows[1], ["c", "d"].map(String::from));
    }

    #[test]
    fn test_malformed_line_reports_line_number_counting_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "grades.txt", b"h1\th2\th3\th4\n1\tSSW 540\tA\t9\n2\tSSW 540\tA\n");

        let mut reader = RecordReader::<4>::open(&path, '\t', true).unwrap();
        assert!(reader.next().unwrap().is_ok());

        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.code(), IngestErrorCode::MalformedRecord);
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.expected_fields(), Some(4));
        assert_eq!(err.actual_fields(), Some(3));
    }

    #[test]
    fn test_reader_is_fused_and_closed_after_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.txt", b"a\tb\tc\td\na\tb\n");

        let mut reader = RecordReader::<2>::open(&path, '\t', false).unwrap();
        assert!(reader.next().unwrap().is_err());
        assert!(reader.is_closed());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_closed_at_end_of_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "one.txt", b"x\n");

        let mut reader = RecordReader::<1>::open(&path, '\t', false).unwrap();
        assert!(reader.next().is_some());
        assert!(!reader.is_closed());
        assert!(reader.next().is_none());
        assert!(reader.is_closed());
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "blank.txt", b"a\tb\n\na\tb\n");

        let err = RecordReader::<2>::open(&path, '\t', false)
            .unwrap()
            .collect::<IngestResult<Vec<_>>>()
            .unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.actual_fields(), Some(1));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = RecordReader::<3>::open(&dir.path().join("absent.txt"), '\t', true);

        match result {
            Err(e) => assert_eq!(e.code(), IngestErrorCode::SourceNotFound),
            Ok(_) => panic!("expected SourceNotFound"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bin.txt", b"a\tb\n\xff\xfe\tb\n");

        let mut reader = RecordReader::<2>::open(&path, '\t', false).unwrap();
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.code(), IngestErrorCode::ReadFailed);
        assert_eq!(err.line(), Some(2));
    }
}
