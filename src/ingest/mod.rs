//! Ingest subsystem for registrar
//!
//! Turns delimited text files into lazy sequences of fixed-arity records.
//!
//! # Design Principles
//!
//! - Arity is checked on every data line
//! - First violation aborts the read, no skipping
//! - Single pass, file handle released as soon as the pass ends

mod errors;
mod reader;

pub use errors::{IngestError, IngestErrorCode, IngestResult};
pub use reader::{RecordReader, DEFAULT_SEPARATOR};
