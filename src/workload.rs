//! Synthetic workload generation.
//!
//! Produces deterministic process lists from a seed, for demos and for
//! exercising the schedulers over many inputs. Arrivals follow a
//! Bernoulli process: at every time unit a new process arrives with
//! probability `arrival_probability`, so gaps between arrivals are
//! geometrically distributed.

use rand::prelude::*;

use crate::models::{Process, Time};

/// Parameters for [`generate_processes`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// RNG seed.
    pub seed: u64,
    /// Per-time-unit arrival probability, in (0, 1].
    pub arrival_probability: f64,
    /// Smallest burst duration (>= 1).
    pub min_burst: Time,
    /// Largest burst duration (>= `min_burst`).
    pub max_burst: Time,
    /// Largest priority value; priorities fall in `0..=max_priority`.
    pub max_priority: i64,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default parameters.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: 0,
            arrival_probability: 0.3,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the arrival probability, clamped to `[0.01, 1.0]`.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = if p.is_nan() { 1.0 } else { p.clamp(0.01, 1.0) };
        self
    }

    /// Sets the burst range. Bounds are normalised so `1 <= min <= max`.
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the largest priority value (negative values become 0).
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }
}

impl WorkloadSpec {
    fn normalised(&self) -> Self {
        self.clone()
            .with_arrival_probability(self.arrival_probability)
            .with_burst_range(self.min_burst, self.max_burst)
            .with_max_priority(self.max_priority)
    }
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Generates a process list in non-decreasing arrival order.
///
/// IDs are dense, `1..=count`. The first process always arrives at t=0.
/// The same spec always yields the same list. Fields set directly are
/// normalised the same way the `with_*` builders normalise them.
pub fn generate_processes(spec: &WorkloadSpec) -> Vec<Process> {
    let spec = spec.normalised();
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut processes = Vec::with_capacity(spec.count);
    let mut now: Time = 0;

    for i in 0..spec.count {
        if i > 0 {
            now += 1;
            while rng.random::<f64>() >= spec.arrival_probability {
                now += 1;
            }
        }

        let burst = rng.random_range(spec.min_burst..=spec.max_burst);
        let priority = rng.random_range(0..=spec.max_priority);
        processes.push(Process::new(i as i64 + 1, burst, now).with_priority(priority));
    }

    processes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{is_arrival_ordered, validate_processes};

    #[test]
    fn test_deterministic() {
        let spec = WorkloadSpec::new(30).with_seed(42);
        assert_eq!(generate_processes(&spec), generate_processes(&spec));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_processes(&WorkloadSpec::new(30).with_seed(1));
        let b = generate_processes(&WorkloadSpec::new(30).with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_list_is_valid() {
        let spec = WorkloadSpec::new(50)
            .with_seed(7)
            .with_burst_range(2, 6)
            .with_max_priority(3);
        let processes = generate_processes(&spec);

        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        assert!(is_arrival_ordered(&processes));
        assert_eq!(processes[0].arrival_time, 0);
        assert!(processes
            .iter()
            .all(|p| (2..=6).contains(&p.burst_duration) && (0..=3).contains(&p.priority)));
        let ids: Vec<_> = processes.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
    }

    #[test]
    fn test_certain_arrival_spacing() {
        let spec = WorkloadSpec::new(4).with_arrival_probability(1.0);
        let arrivals: Vec<_> = generate_processes(&spec)
            .iter()
            .map(|p| p.arrival_time)
            .collect();
        assert_eq!(arrivals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_builder_normalises() {
        let spec = WorkloadSpec::new(1)
            .with_burst_range(0, -5)
            .with_max_priority(-1)
            .with_arrival_probability(0.0);
        assert_eq!((spec.min_burst, spec.max_burst), (1, 1));
        assert_eq!(spec.max_priority, 0);
        assert!((spec.arrival_probability - 0.01).abs() < 1e-10);
    }

    #[test]
    fn test_direct_fields_normalised() {
        let spec = WorkloadSpec {
            count: 5,
            seed: 3,
            arrival_probability: 0.0,
            min_burst: 5,
            max_burst: 2,
            max_priority: -3,
        };
        let processes = generate_processes(&spec);

        assert_eq!(processes.len(), 5);
        assert!(validate_processes(&processes).is_ok());
        assert!(processes
            .iter()
            .all(|p| p.burst_duration == 5 && p.priority == 0));

        let nan = WorkloadSpec {
            arrival_probability: f64::NAN,
            ..WorkloadSpec::new(3)
        };
        let arrivals: Vec<_> = generate_processes(&nan)
            .iter()
            .map(|p| p.arrival_time)
            .collect();
        assert_eq!(arrivals, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_count() {
        assert!(generate_processes(&WorkloadSpec::new(0)).is_empty());
    }
}
