//! ObservationScope for phase begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` when `complete` is called
//! - Logs `{name}_ERROR` on drop if never completed (early `?` return)

use std::time::Instant;

use super::logger::Logger;

/// A scope that logs the start and end of one unit of work.
///
/// ```ignore
/// let scope = ObservationScope::new("LOAD_GRADES");
/// let rows = load_rows()?; // an early return logs LOAD_GRADES_ERROR
/// scope.complete(&[("rows", &rows.to_string())]);
/// ```
pub struct ObservationScope {
    name: String,
    completed: bool,
    timer: Timer,
}

impl ObservationScope {
    /// Create a new observation scope and log `{name}_BEGIN`
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_fields(name, &[])
    }

    /// Create a new observation scope with fields on the BEGIN event
    pub fn with_fields(name: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        let name = name.into();
        Logger::info(&format!("{}_BEGIN", name), fields);

        Self {
            name,
            completed: false,
            timer: Timer::new(),
        }
    }

    /// Mark the scope as completed, logging `{name}_COMPLETE` with
    /// `elapsed_ms` and the given fields
    pub fn complete(mut self, fields: &[(&str, &str)]) {
        self.completed = true;
        let elapsed = self.timer.elapsed_ms();

        let mut all_fields: Vec<(&str, &str)> = vec![("elapsed_ms", elapsed.as_str())];
        all_fields.extend(fields.iter().copied());

        Logger::info(&format!("{}_COMPLETE", self.name), &all_fields);
    }

    /// Returns the scope name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the scope has been completed
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.completed {
            Logger::error(
                &format!("{}_ERROR", self.name),
                &[("elapsed_ms", self.timer.elapsed_ms().as_str())],
            );
        }
    }
}

/// A simple duration timer for logging elapsed time
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed milliseconds as a string
    pub fn elapsed_ms(&self) -> String {
        self.start.elapsed().as_millis().to_string()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_starts_incomplete() {
        let scope = ObservationScope::new("TEST");
        assert!(!scope.is_completed());
        assert_eq!(scope.name(), "TEST");
        scope.complete(&[]);
    }

    #[test]
    fn test_scope_complete_with_fields() {
        let scope = ObservationScope::with_fields("TEST", &[("file", "majors.txt")]);
        scope.complete(&[("rows", "12")]);
    }

    #[test]
    fn test_scope_drop_without_complete() {
        let scope = ObservationScope::new("TEST");
        drop(scope);
    }

    #[test]
    fn test_timer_reports_number() {
        let timer = Timer::default();
        assert!(timer.elapsed_ms().parse::<u128>().is_ok());
    }
}
