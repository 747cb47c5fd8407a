//! Burst-first priority scheduling.
//!
//! Despite the name, the primary key is burst duration; priority only
//! breaks ties between equal bursts (lower value first). Processes run to
//! completion in that order, idling the CPU when the next one has not
//! arrived yet.

use tracing::debug;

use super::{ensure_time_range, CpuScheduler, SchedulerRun};
use crate::error::Result;
use crate::models::{ExecutionInterval, Process, ProcessResult, Time};
use crate::ordering::{rules, RuleEngine};

pub(super) const TITLE: &str = "Priority";

/// Non-preemptive scheduler ordered by (burst, priority).
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    order: RuleEngine,
}

impl PriorityScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            order: RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::LowestPriority),
        }
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for PriorityScheduler {
    fn title(&self) -> &'static str {
        TITLE
    }

    fn schedule(&self, processes: &[Process]) -> Result<SchedulerRun> {
        ensure_time_range(processes)?;
        let mut service_time: Time = 0;
        let mut gantt = Vec::with_capacity(processes.len());
        let mut rows = Vec::with_capacity(processes.len());

        for p in self.order.sort(processes) {
            if p.arrival_time > service_time {
                // CPU idles until the process arrives
                service_time = p.arrival_time;
            }
            let start = service_time;
            let completion = start + p.burst_duration;
            debug!(
                pid = p.id,
                priority = p.priority,
                start,
                completion,
                "priority dispatch"
            );

            gantt.push(ExecutionInterval::new(p.id, start, completion));
            rows.push(ProcessResult::completed(&p, completion));
            service_time = completion;
        }

        Ok(SchedulerRun::new(TITLE, gantt, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::*;
    use crate::scheduler::RunSummary;

    #[test]
    fn test_burst_then_priority() {
        let processes = vec![
            Process::new(1, 6, 0).with_priority(1),
            Process::new(2, 3, 0).with_priority(5),
            Process::new(3, 3, 0).with_priority(2),
        ];
        let run = PriorityScheduler::new().schedule(&processes).unwrap();

        let order: Vec<_> = run.rows.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert_eq!(
            run.gantt,
            vec![
                ExecutionInterval::new(3, 0, 3),
                ExecutionInterval::new(2, 3, 6),
                ExecutionInterval::new(1, 6, 12),
            ]
        );
        assert_eq!(run.row(1).unwrap().waiting_time, 6);
        assert_row_invariants(&run, &processes);
    }

    #[test]
    fn test_idle_until_arrival() {
        let processes = vec![Process::new(1, 2, 5), Process::new(2, 4, 1)];
        let run = PriorityScheduler::new().schedule(&processes).unwrap();

        // P1 (burst 2) is picked first but has not arrived until t=5
        assert_eq!(run.gantt[0], ExecutionInterval::new(1, 5, 7));
        let p1 = run.row(1).unwrap();
        assert_eq!(p1.waiting_time, 0);
        // P2 arrived at 1 and waits until 7
        let p2 = run.row(2).unwrap();
        assert_eq!((p2.waiting_time, p2.completion_time), (6, 11));
    }

    #[test]
    fn test_input_not_reordered() {
        let processes = vec![Process::new(1, 9, 0), Process::new(2, 1, 0)];
        let _ = PriorityScheduler::new().schedule(&processes).unwrap();
        assert_eq!(processes[0].id, 1);
    }

    #[test]
    fn test_average_and_throughput() {
        let processes = vec![Process::new(1, 4, 0), Process::new(2, 2, 0)];
        let run = PriorityScheduler::new().schedule(&processes).unwrap();
        // P2: wait 0, tat 2; P1: wait 2, tat 6
        assert!((run.summary.average_waiting_time - 1.0).abs() < 1e-10);
        assert!((run.summary.average_turnaround_time - 4.0).abs() < 1e-10);
        assert!((run.summary.throughput - 2.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let processes = vec![
            Process::new(7, 3, 0).with_priority(1),
            Process::new(2, 3, 0).with_priority(1),
            Process::new(5, 3, 0).with_priority(1),
        ];
        let run = PriorityScheduler::new().schedule(&processes).unwrap();

        let order: Vec<_> = run.gantt.iter().map(|iv| iv.process_id).collect();
        assert_eq!(order, vec![7, 2, 5]);
        assert_eq!(run.row(5).unwrap().waiting_time, 6);
        assert_row_invariants(&run, &processes);
    }

    #[test]
    fn test_empty() {
        let run = PriorityScheduler::new().schedule(&[]).unwrap();
        assert!(run.gantt.is_empty());
        assert!(run.rows.is_empty());
        assert_eq!(run.summary, RunSummary::default());
    }
}
