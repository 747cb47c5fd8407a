//! Educational CPU scheduling simulator.
//!
//! Computes deterministic timelines and statistics for four classic
//! disciplines over a static process list: first-come first-serve,
//! shortest-job-first, burst-first priority, and round-robin.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ExecutionInterval`, `ProcessResult`
//! - **`ordering`**: composable sort rules used to build ready sequences
//! - **`scheduler`**: the four disciplines, `SchedulerRun`, `RunSummary`
//! - **`validation`**: input integrity checks (duplicate IDs, bad times)
//! - **`loader`** / **`render`**: CSV input and text/JSON output
//! - **`workload`**: seeded synthetic process lists
//!
//! # Example
//!
//! ```
//! use cpu_sched::{simulate, SimulationConfig};
//! use cpu_sched::models::Process;
//!
//! let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
//! let runs = simulate(&processes, &SimulationConfig::default()).unwrap();
//! assert_eq!(runs.len(), 4);
//! assert!((runs[0].summary.average_waiting_time - 2.0).abs() < 1e-10);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod ordering;
pub mod render;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::{OutputFormat, SimulationConfig};
pub use error::{Result, SimError};
pub use scheduler::{CpuScheduler, Discipline, SchedulerRun};

use models::Process;

/// Validates `processes` and runs every configured discipline over them.
///
/// # Errors
/// - `DegenerateInput` for an empty list or a bad configuration
/// - `InvalidInput` when validation finds problems
pub fn simulate(processes: &[Process], config: &SimulationConfig) -> Result<Vec<SchedulerRun>> {
    config.validate()?;
    if processes.is_empty() {
        return Err(SimError::DegenerateInput("process list is empty".to_string()));
    }
    validation::validate_processes(processes)?;

    if config.disciplines.contains(&Discipline::Fcfs) && !validation::is_arrival_ordered(processes)
    {
        tracing::warn!("input is not in arrival order; FCFS runs it in input order");
    }

    scheduler::run_all(processes, &config.disciplines, config.quantum)
}
