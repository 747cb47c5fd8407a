//! Rule engine for multi-key process ordering.
//!
//! Applies rules in sequence: the next rule is consulted only when every
//! earlier rule ties. Sorting is stable, so processes that tie on every
//! rule keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::OrderingRule;
use crate::models::Process;

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use cpu_sched::ordering::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_tie_breaker(rules::LowestPriority);
/// assert_eq!(engine.rule_names(), vec!["SPT", "PRIORITY"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn OrderingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules, sorting returns the input order unchanged.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Rules are consulted in the order they were added.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Alias for [`with_rule`](Self::with_rule), for secondary keys.
    pub fn with_tie_breaker<R: OrderingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Returns a sorted copy of `processes`. The input is left untouched.
    pub fn sort(&self, processes: &[Process]) -> Vec<Process> {
        let mut sorted = processes.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.key(a).cmp(&rule.key(b)))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
