//! Process (job) model.
//!
//! A process is a unit of CPU work known up front: it becomes eligible at
//! its arrival time and needs a fixed amount of CPU time.

use serde::{Deserialize, Serialize};

/// Process identifier, unique within one input set.
pub type ProcessId = i64;

/// Simulation time in abstract integer units.
pub type Time = i64;

/// A process to be scheduled.
///
/// Schedulers never mutate a `Process` they are handed; any per-discipline
/// bookkeeping happens on an internal working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run (>= 0).
    pub arrival_time: Time,
    /// Total CPU time required (> 0).
    pub burst_duration: Time,
    /// Tie-break priority. Lower value sorts first. Defaults to 0.
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    ///
    /// Argument order follows the input record layout: `id, burst, arrival`.
    pub fn new(id: ProcessId, burst_duration: Time, arrival_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest time the process could possibly finish.
    #[inline]
    pub fn earliest_completion(&self) -> Time {
        self.arrival_time + self.burst_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 7, 2).with_priority(5);
        assert_eq!(p.id, 3);
        assert_eq!(p.burst_duration, 7);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.priority, 5);
        assert_eq!(p.earliest_completion(), 9);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(Process::new(1, 4, 0).priority, 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let p = Process::new(1, 5, 0).with_priority(2);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
