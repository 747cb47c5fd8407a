//! Built-in ordering rules.
//!
//! All rules return lower keys for processes that should run first.

use super::{OrderingRule, RuleKey};
use crate::models::Process;

/// Shortest burst first (SPT).
///
/// Minimizes mean flow time on a single CPU when all processes are
/// available at t=0.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl OrderingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.burst_duration
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl OrderingRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.priority
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl OrderingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.arrival_time
    }
}
