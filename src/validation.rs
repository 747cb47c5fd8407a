//! Input validation for process lists.
//!
//! Checks structural integrity of the processes before any discipline
//! runs. Detects:
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive burst durations
//! - Time horizons that do not fit in `i64`
//!
//! All issues are collected rather than stopping at the first one, so a
//! malformed input file can be fixed in a single pass.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Process, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// `max(arrival) + sum(burst)` does not fit in the time type.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every arrival time is >= 0
/// 3. Every burst duration is > 0
/// 4. The latest possible completion, `max(arrival) + sum(burst)`, fits in
///    [`Time`]
///
/// An empty list is valid here; callers that need at least one process
/// reject it separately.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every completion time any discipline can produce.
///
/// No schedule can finish later than the last arrival plus the total
/// CPU work. Returns `None` if that bound overflows. Negative values are
/// ignored; they are reported by [`validate_processes`] separately.
pub fn time_horizon(processes: &[Process]) -> Option<Time> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_duration.max(0)))
}

/// Whether the list is already in non-decreasing arrival order.
///
/// FCFS runs processes in input order and assumes this holds.
pub fn is_arrival_ordered(processes: &[Process]) -> bool {
    processes
        .windows(2)
        .all(|w| w[0].arrival_time <= w[1].arrival_time)
}
