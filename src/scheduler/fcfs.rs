//! First-come, first-serve scheduling.
//!
//! # Algorithm
//!
//! Processes run strictly in input order, without preemption. The input
//! is expected to be in arrival order already; this scheduler does not
//! sort. For each process:
//!
//! 1. `waiting = max(0, service_time - arrival)`
//! 2. `start = arrival + waiting`
//! 3. `completion = start + burst`, and the CPU is next free at `completion`
//!
//! Waiting time is recomputed for every process, including those that
//! arrive at t=0.

use tracing::debug;

use super::{ensure_time_range, CpuScheduler, SchedulerRun};
use crate::error::Result;
use crate::models::{ExecutionInterval, Process, ProcessResult, Time};

pub(super) const TITLE: &str = "First-come, first-serve";

/// First-come, first-serve scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
/// let run = FcfsScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(run.row(2).unwrap().completion_time, 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for FcfsScheduler {
    fn title(&self) -> &'static str {
        TITLE
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulerRun> {
        ensure_time_range(processes)?;
        let mut service_time: Time = 0;
        let mut gantt = Vec::with_capacity(processes.len());
        let mut rows = Vec::with_capacity(processes.len());

        for p in processes {
            let waiting = (service_time - p.arrival_time).max(0);
            let start = p.arrival_time + waiting;
            let completion = start + p.burst_duration;
            debug!(pid = p.id, start, completion, waiting, "fcfs dispatch");

            gantt.push(ExecutionInterval::new(p.id, start, completion));
            rows.push(ProcessResult::completed(p, completion));
            service_time = completion;
        }

        Ok(SchedulerRun::new(TITLE, gantt, rows))
    }
}
