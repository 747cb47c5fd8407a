//! CPU scheduling disciplines and run summaries.
//!
//! Each discipline turns a static process list into a Gantt timeline and
//! one statistics row per process.
//!
//! # Disciplines
//!
//! | Discipline | Order | Preemptive |
//! |------------|-------|------------|
//! | FCFS | input (arrival) order | no |
//! | SJF | ascending burst | no |
//! | Priority | ascending burst, then priority | no |
//! | Round-robin | arrival order, fixed quantum | yes |
//!
//! Every scheduler borrows its input and works on a private copy, so one
//! loaded process list can be fed to all disciplines in turn.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use kpi::RunSummary;
pub use priority::PriorityScheduler;
pub use round_robin::{RoundRobinScheduler, DEFAULT_QUANTUM};
pub use sjf::SjfScheduler;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::{ExecutionInterval, Process, ProcessId, ProcessResult, Time};
use crate::validation;

/// A CPU scheduling discipline.
pub trait CpuScheduler: fmt::Debug {
    /// Title shown above the rendered output.
    fn title(&self) -> &'static str;

    /// Builds the timeline and statistics for `processes`.
    ///
    /// Must not depend on any state from an earlier call.
    fn schedule(&self, processes: &[Process]) -> Result<SchedulerRun>;
}

/// Output of one discipline run, handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerRun {
    /// Discipline title.
    pub title: String,
    /// Execution intervals in time order.
    pub gantt: Vec<ExecutionInterval>,
    /// Per-process rows, in discipline-defined order.
    pub rows: Vec<ProcessResult>,
    /// Averages and throughput.
    pub summary: RunSummary,
}

impl SchedulerRun {
    /// Creates a run and computes its summary from `rows`.
    pub fn new(
        title: impl Into<String>,
        gantt: Vec<ExecutionInterval>,
        rows: Vec<ProcessResult>,
    ) -> Self {
        let summary = RunSummary::calculate(&rows);
        Self {
            title: title.into(),
            gantt,
            rows,
            summary,
        }
    }

    /// Row for a given process.
    pub fn row(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Intervals for a given process, in time order.
    pub fn intervals_for(&self, id: ProcessId) -> impl Iterator<Item = &ExecutionInterval> {
        self.gantt.iter().filter(move |iv| iv.process_id == id)
    }

    /// Total CPU time granted to a process.
    pub fn cpu_time(&self, id: ProcessId) -> Time {
        self.intervals_for(id).map(|iv| iv.duration()).sum()
    }

    /// Latest stop time in the timeline (0 if empty).
    pub fn makespan(&self) -> Time {
        self.gantt.iter().map(|iv| iv.stop).max().unwrap_or(0)
    }

    /// Time units between first start and makespan during which the CPU idled.
    pub fn idle_time(&self) -> Time {
        let first = match self.gantt.iter().map(|iv| iv.start).min() {
            Some(t) => t,
            None => return 0,
        };
        let busy: Time = self.gantt.iter().map(|iv| iv.duration()).sum();
        self.makespan() - first - busy
    }

    /// Number of processes that completed.
    pub fn completed_count(&self) -> usize {
        self.rows.len()
    }
}

/// The scheduling disciplines this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-come, first-serve.
    Fcfs,
    /// Shortest-job-first (non-preemptive).
    Sjf,
    /// Burst-first with priority tie-break.
    Priority,
    /// Round-robin with a fixed quantum.
    RoundRobin,
}

impl Discipline {
    /// All disciplines, in the order they are reported.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::Priority,
        Discipline::RoundRobin,
    ];

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Discipline::Fcfs => fcfs::TITLE,
            Discipline::Sjf => sjf::TITLE,
            Discipline::Priority => priority::TITLE,
            Discipline::RoundRobin => round_robin::TITLE,
        }
    }

    /// Builds the scheduler for this discipline.
    ///
    /// `quantum` is only consulted by round-robin.
    pub fn scheduler(&self, quantum: Time) -> Result<Box<dyn CpuScheduler>> {
        Ok(match self {
            Discipline::Fcfs => Box::new(FcfsScheduler::new()),
            Discipline::Sjf => Box::new(SjfScheduler::new()),
            Discipline::Priority => Box::new(PriorityScheduler::new()),
            Discipline::RoundRobin => Box::new(RoundRobinScheduler::new(quantum)?),
        })
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = match self {
            Discipline::Fcfs => "fcfs",
            Discipline::Sjf => "sjf",
            Discipline::Priority => "priority",
            Discipline::RoundRobin => "rr",
        };
        f.write_str(short)
    }
}

impl FromStr for Discipline {
    type Err = SimError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Discipline::Fcfs),
            "sjf" => Ok(Discipline::Sjf),
            "priority" | "prio" => Ok(Discipline::Priority),
            "rr" | "round-robin" | "roundrobin" => Ok(Discipline::RoundRobin),
            other => Err(SimError::InvalidArguments(format!(
                "unknown discipline '{other}' (expected fcfs, sjf, priority or rr)"
            ))),
        }
    }
}

/// Rejects inputs whose time arithmetic could leave the `i64` range.
///
/// Every discipline calls this before touching the clock, so direct
/// callers that skip [`crate::validation::validate_processes`] still get
/// an error instead of an overflow.
pub(crate) fn ensure_time_range(processes: &[Process]) -> Result<Time> {
    if let Some(p) = processes
        .iter()
        .find(|p| p.arrival_time < 0 || p.burst_duration <= 0)
    {
        return Err(SimError::DegenerateInput(format!(
            "process {} needs arrival >= 0 and burst > 0, got arrival {} burst {}",
            p.id, p.arrival_time, p.burst_duration
        )));
    }
    validation::time_horizon(processes).ok_or_else(|| {
        SimError::DegenerateInput(
            "latest arrival plus total burst overflows the time range".to_string(),
        )
    })
}

/// Runs each discipline over the same process list.
///
/// Disciplines are independent; the list is only borrowed.
pub fn run_all(
    processes: &[Process],
    disciplines: &[Discipline],
    quantum: Time,
) -> Result<Vec<SchedulerRun>> {
    disciplines
        .iter()
        .map(|d| -> Result<SchedulerRun> {
            let run = d.scheduler(quantum)?.schedule(processes)?;
            tracing::info!(
                discipline = %d,
                avg_wait = run.summary.average_waiting_time,
                avg_turnaround = run.summary.average_turnaround_time,
                throughput = run.summary.throughput,
                "discipline complete"
            );
            Ok(run)
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SchedulerRun;
    use crate::models::Process;

    /// Asserts the row invariants every discipline must honor.
    pub fn assert_row_invariants(run: &SchedulerRun, processes: &[Process]) {
        assert_eq!(run.rows.len(), processes.len());
        for p in processes {
            let row = run
                .row(p.id)
                .unwrap_or_else(|| panic!("{}: missing row for {}", run.title, p.id));
            assert_eq!(row.arrival_time, p.arrival_time);
            assert_eq!(row.burst_duration, p.burst_duration);
            assert_eq!(row.turnaround_time, row.burst_duration + row.waiting_time);
            assert_eq!(
                row.completion_time,
                row.arrival_time + row.waiting_time + row.burst_duration
            );
            assert!(row.waiting_time >= 0, "{}: negative wait", run.title);
            assert_eq!(run.cpu_time(p.id), p.burst_duration);
        }
    }

    /// Asserts the timeline never runs two processes at once.
    pub fn assert_non_overlapping(run: &SchedulerRun) {
        for w in run.gantt.windows(2) {
            assert!(w[0].stop <= w[1].start, "{}: overlap {:?}", run.title, w);
        }
    }
}
