//! Round-robin scheduling with a fixed quantum.
//!
//! # Algorithm
//!
//! State: a FIFO ready queue, the not-yet-admitted processes in arrival
//! order, and the clock. Until both are empty:
//!
//! 1. Admit every pending process with `arrival <= now` to the back of
//!    the ready queue, in arrival order.
//! 2. If the ready queue is empty, jump the clock to the next arrival.
//! 3. Otherwise run the head for `min(quantum, remaining)` units.
//! 4. A process with work left goes straight to the back of the queue,
//!    ahead of anything that arrived during its slice.
//! 5. A finished process gets its row, built from its original arrival
//!    and burst.
//!
//! Rows are reported in completion order.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{ensure_time_range, CpuScheduler, SchedulerRun};
use crate::error::{Result, SimError};
use crate::models::{ExecutionInterval, Process, ProcessResult, Time};
use crate::ordering::{rules, RuleEngine};

pub(super) const TITLE: &str = "Round-robin";

/// Default time quantum.
pub const DEFAULT_QUANTUM: Time = 4;

/// Working copy of a process inside the ready queue.
#[derive(Debug, Clone, Copy)]
struct ReadyEntry {
    process: Process,
    remaining: Time,
}

/// Preemptive round-robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let rr = RoundRobinScheduler::new(4).unwrap();
/// let run = rr.schedule(&[Process::new(1, 5, 0), Process::new(2, 3, 0)]).unwrap();
/// assert_eq!(run.gantt.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Time,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// # Errors
    /// `DegenerateInput` if `quantum <= 0`.
    pub fn new(quantum: Time) -> Result<Self> {
        if quantum <= 0 {
            return Err(SimError::DegenerateInput(format!(
                "round-robin quantum must be positive, got {quantum}"
            )));
        }
        Ok(Self { quantum })
    }

    /// The configured quantum.
    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn title(&self) -> &'static str {
        TITLE
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulerRun> {
        ensure_time_range(processes)?;
        let mut pending: VecDeque<Process> = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .sort(processes)
            .into();
        let mut ready: VecDeque<ReadyEntry> = VecDeque::with_capacity(processes.len());
        let mut gantt = Vec::new();
        let mut rows = Vec::with_capacity(processes.len());
        let mut now: Time = 0;

        while !pending.is_empty() || !ready.is_empty() {
            while let Some(next) = pending.front().copied() {
                if next.arrival_time > now {
                    break;
                }
                pending.pop_front();
                trace!(pid = next.id, now, "admitted");
                ready.push_back(ReadyEntry {
                    process: next,
                    remaining: next.burst_duration,
                });
            }

            let mut entry = match ready.pop_front() {
                Some(entry) => entry,
                None => {
                    // Idle; the loop condition guarantees a pending arrival
                    if let Some(next) = pending.front() {
                        trace!(from = now, to = next.arrival_time, "cpu idle");
                        now = next.arrival_time;
                    }
                    continue;
                }
            };

            let exec = self.quantum.min(entry.remaining);
            gantt.push(ExecutionInterval::new(entry.process.id, now, now + exec));
            now += exec;
            entry.remaining -= exec;
            debug!(
                pid = entry.process.id,
                start = now - exec,
                stop = now,
                remaining = entry.remaining,
                "rr slice"
            );

            if entry.remaining > 0 {
                ready.push_back(entry);
            } else {
                rows.push(ProcessResult::completed(&entry.process, now));
            }
        }

        Ok(SchedulerRun::new(TITLE, gantt, rows))
    }
}
