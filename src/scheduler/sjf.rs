//! Shortest-job-first scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Stable-sort a copy of the input by ascending burst duration.
//! 2. Run each process to completion in that order. If the next process
//!    has not arrived yet, the CPU idles until it does.
//!
//! Ordering ignores arrival time entirely: every process is assumed to be
//! known up front, so this is not "shortest among those arrived so far".
//! Arrival only shifts the start of a process that would otherwise run
//! before it exists.
//!
//! Rows are reported in ascending process-ID order; the Gantt timeline
//! stays in execution order.

use std::collections::BTreeMap;

use tracing::debug;

use super::{ensure_time_range, CpuScheduler, SchedulerRun};
use crate::error::{Result, SimError};
use crate::models::{ExecutionInterval, Process, ProcessId, ProcessResult, Time};
use crate::ordering::{rules, RuleEngine};

pub(super) const TITLE: &str = "Shortest-job-first";

/// Non-preemptive shortest-job-first scheduler.
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    order: RuleEngine,
}

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            order: RuleEngine::new().with_rule(rules::ShortestBurst),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for SjfScheduler {
    fn title(&self) -> &'static str {
        TITLE
    }

    /// # Errors
    /// `InvalidProcessId` if two processes share an ID.
    fn schedule(&self, processes: &[Process]) -> Result<SchedulerRun> {
        ensure_time_range(processes)?;
        let mut current_time: Time = 0;
        let mut gantt = Vec::with_capacity(processes.len());
        let mut by_id: BTreeMap<ProcessId, ProcessResult> = BTreeMap::new();

        for p in self.order.sort(processes) {
            let idle = (p.arrival_time - current_time).max(0);
            let start = current_time + idle;
            let completion = start + p.burst_duration;
            debug!(pid = p.id, start, completion, idle, "sjf dispatch");

            if by_id
                .insert(p.id, ProcessResult::completed(&p, completion))
                .is_some()
            {
                return Err(SimError::InvalidProcessId(p.id));
            }
            gantt.push(ExecutionInterval::new(p.id, start, completion));
            current_time = completion;
        }

        Ok(SchedulerRun::new(TITLE, gantt, by_id.into_values().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::*;

    #[test]
    fn test_shorter_burst_runs_first() {
        let processes = vec![Process::new(1, 8, 0), Process::new(2, 4, 1)];
        let run = SjfScheduler::new().schedule(&processes).unwrap();

        assert_eq!(
            run.gantt,
            vec![ExecutionInterval::new(2, 1, 5), ExecutionInterval::new(1, 5, 13)]
        );
        let p2 = run.row(2).unwrap();
        assert_eq!((p2.waiting_time, p2.turnaround_time, p2.completion_time), (0, 4, 5));
        let p1 = run.row(1).unwrap();
        assert_eq!((p1.waiting_time, p1.turnaround_time, p1.completion_time), (5, 13, 13));
        assert_row_invariants(&run, &processes);
    }

    #[test]
    fn test_rows_sorted_by_id() {
        let processes = vec![
            Process::new(30, 2, 0),
            Process::new(7, 9, 0),
            Process::new(12, 1, 0),
        ];
        let run = SjfScheduler::new().schedule(&processes).unwrap();
        let ids: Vec<_> = run.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 12, 30]);
        let order: Vec<_> = run.gantt.iter().map(|iv| iv.process_id).collect();
        assert_eq!(order, vec![12, 30, 7]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let processes = vec![Process::new(2, 3, 0), Process::new(1, 3, 0)];
        let run = SjfScheduler::new().schedule(&processes).unwrap();
        assert_eq!(run.gantt[0].process_id, 2);
    }

    #[test]
    fn test_sparse_ids() {
        let processes = vec![Process::new(100, 4, 0), Process::new(5, 2, 0)];
        let run = SjfScheduler::new().schedule(&processes).unwrap();
        assert_eq!(run.rows.len(), 2);
        assert_eq!(run.row(100).unwrap().completion_time, 6);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let processes = vec![Process::new(1, 4, 0), Process::new(1, 2, 0)];
        let err = SjfScheduler::new().schedule(&processes).unwrap_err();
        assert!(matches!(err, SimError::InvalidProcessId(1)));
    }

    #[test]
    fn test_empty() {
        let run = SjfScheduler::new().schedule(&[]).unwrap();
        assert!(run.rows.is_empty());
        assert_eq!(run.summary.throughput, 0.0);
    }
}
