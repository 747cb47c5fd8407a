//! Timeline and result models.
//!
//! An [`ExecutionInterval`] is one contiguous slice of CPU time. A
//! [`ProcessResult`] is the statistics row for a finished process.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Time};

/// One contiguous slice of CPU time assigned to a process.
///
/// Covers `[start, stop)`. Non-preemptive disciplines emit exactly one
/// interval per process; round-robin may emit several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Start time (inclusive).
    pub start: Time,
    /// Stop time (exclusive).
    pub stop: Time,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: ProcessId, start: Time, stop: Time) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Interval length (stop - start).
    #[inline]
    pub fn duration(&self) -> Time {
        self.stop - self.start
    }
}

/// Per-process statistics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: ProcessId,
    /// Priority as supplied on input.
    pub priority: i64,
    /// Original burst duration.
    pub burst_duration: Time,
    /// Original arrival time.
    pub arrival_time: Time,
    /// Time spent ready but not running.
    pub waiting_time: Time,
    /// completion - arrival.
    pub turnaround_time: Time,
    /// Time the process finished.
    pub completion_time: Time,
}

impl ProcessResult {
    /// Builds a row for `process` finishing at `completion_time`.
    ///
    /// Turnaround and waiting are derived so that
    /// `turnaround = completion - arrival = burst + waiting` always holds.
    pub fn completed(process: &Process, completion_time: Time) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id,
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            waiting_time: turnaround_time - process.burst_duration,
            turnaround_time,
            completion_time,
        }
    }
}
