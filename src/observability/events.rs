//! Observable events for registrar
//!
//! Events are explicit and typed. Phase begin/complete events are produced
//! by `ObservationScope` from the phase name instead.

use std::fmt;

/// Observable events during a registrar run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded and validated
    ConfigLoaded,

    // Construction
    /// University construction begins
    LoadBegin,
    /// University reached the Ready state
    LoadComplete,
    /// Construction aborted (FATAL)
    LoadFailed,

    // Data quality
    /// Catalog row dropped for an unknown course type
    CatalogRowSkipped,
    /// Letter grade excluded from GPA
    GradeUnrecognized,

    // Output
    /// Command output written to stdout
    ReportWritten,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::LoadBegin => "UNIVERSITY_LOAD_BEGIN",
            Event::LoadComplete => "UNIVERSITY_LOAD_COMPLETE",
            Event::LoadFailed => "UNIVERSITY_LOAD_FAILED",
            Event::CatalogRowSkipped => "CATALOG_ROW_SKIPPED",
            Event::GradeUnrecognized => "GRADE_UNRECOGNIZED",
            Event::ReportWritten => "REPORT_WRITTEN",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::LoadFailed)
    }

    /// Returns true for skip-and-continue data quality events
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Event::CatalogRowSkipped | Event::GradeUnrecognized)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::LoadBegin.as_str(), "UNIVERSITY_LOAD_BEGIN");
        assert_eq!(Event::CatalogRowSkipped.to_string(), "CATALOG_ROW_SKIPPED");
    }

    #[test]
    fn test_classification() {
        assert!(Event::LoadFailed.is_fatal());
        assert!(!Event::CatalogRowSkipped.is_fatal());
        assert!(Event::GradeUnrecognized.is_anomaly());
        assert!(!Event::LoadComplete.is_anomaly());
    }
}
