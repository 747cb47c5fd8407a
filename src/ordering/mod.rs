//! Ordering rules and rule engine for ready-sequence construction.
//!
//! The non-preemptive disciplines differ mainly in the order they pick
//! processes. This module expresses each order as a chain of rules:
//! a primary rule, then tie-breakers consulted only when every earlier
//! rule ties.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::ordering::{rules, RuleEngine};
//! use cpu_sched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::LowestPriority);
//!
//! let processes = vec![Process::new(1, 8, 0), Process::new(2, 4, 1)];
//! let order = engine.sort(&processes);
//! assert_eq!(order[0].id, 2);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by an ordering rule.
///
/// Lower keys are picked first.
pub type RuleKey = i64;

/// A rule that assigns a sort key to a process.
///
/// # Key Convention
/// **Lower key = picked earlier.**
pub trait OrderingRule: Send + Sync + Debug {
    /// Short rule name (e.g., "SPT").
    fn name(&self) -> &'static str;

    /// Sort key for `process`.
    fn key(&self, process: &Process) -> RuleKey;
}
