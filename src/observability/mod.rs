//! Observability subsystem for registrar
//!
//! Provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle and data-quality events
//! - Phase scopes with begin/complete/error logging
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on ingestion
//! 3. Synchronous, no background threads
//! 4. Deterministic field ordering
//!
//! # Usage
//!
//! ```ignore
//! use registrar::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::GradeUnrecognized, &[("cwid", "10103"), ("grade", "P")]);
//!
//! let scope = ObservationScope::new("LOAD_CATALOG");
//! // ... do work ...
//! scope.complete(&[("majors", "2")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

fn event_severity(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_anomaly() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event_severity(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severity_mapping() {
        assert_eq!(event_severity(Event::LoadFailed), Severity::Fatal);
        assert_eq!(event_severity(Event::CatalogRowSkipped), Severity::Warn);
        assert_eq!(event_severity(Event::LoadComplete), Severity::Info);
    }

    #[test]
    fn test_log_event() {
        log_event(Event::LoadBegin);
        log_event_with_fields(Event::ConfigLoaded, &[("data_dir", "/tmp/test")]);
    }
}
