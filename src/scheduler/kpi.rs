//! Run summary metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting time | mean(waiting) over completed processes |
//! | Average turnaround time | mean(completion - arrival) over completed processes |
//! | Throughput | completed count / last completion time |
//!
//! Every division is guarded: an empty run reports 0.0 for all three.

use serde::{Deserialize, Serialize};

use crate::models::ProcessResult;

/// Per-discipline summary statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Mean waiting time over completed processes.
    pub average_waiting_time: f64,
    /// Mean turnaround time over completed processes.
    pub average_turnaround_time: f64,
    /// Completed processes per time unit, up to the last completion.
    pub throughput: f64,
}

impl RunSummary {
    /// Computes the summary from completed rows.
    pub fn calculate(rows: &[ProcessResult]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let count = rows.len() as f64;
        // Summed as f64: per-row values fit in i64, their total may not.
        let total_wait: f64 = rows.iter().map(|r| r.waiting_time as f64).sum();
        let total_turnaround: f64 = rows.iter().map(|r| r.turnaround_time as f64).sum();
        let last_completion = rows
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0);

        let throughput = if last_completion > 0 {
            count / last_completion as f64
        } else {
            0.0
        };

        Self {
            average_waiting_time: total_wait / count,
            average_turnaround_time: total_turnaround / count,
            throughput,
        }
    }
}
