//! Simulation configuration.

use crate::error::{Result, SimError};
use crate::models::Time;
use crate::scheduler::{Discipline, DEFAULT_QUANTUM};

/// Output format for rendered runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Title, Gantt bar and schedule table per discipline.
    #[default]
    Text,
    /// One pretty-printed JSON array of runs.
    Json,
}

/// Configuration for a simulation session.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Round-robin time quantum (> 0).
    pub quantum: Time,
    /// Disciplines to run, in report order.
    pub disciplines: Vec<Discipline>,
    /// Output format.
    pub format: OutputFormat,
    /// Log verbosity, 0 (silent) to 3 (debug). See [`crate::logging`].
    pub verbosity: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            disciplines: Discipline::ALL.to_vec(),
            format: OutputFormat::Text,
            verbosity: 0,
        }
    }
}

impl SimulationConfig {
    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the disciplines to run.
    pub fn with_disciplines(mut self, disciplines: Vec<Discipline>) -> Self {
        self.disciplines = disciplines;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the log verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Checks the configuration is usable.
    ///
    /// # Errors
    /// `DegenerateInput` if the quantum is not positive or no discipline
    /// is selected.
    pub fn validate(&self) -> Result<()> {
        if self.quantum <= 0 {
            return Err(SimError::DegenerateInput(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }
        if self.disciplines.is_empty() {
            return Err(SimError::DegenerateInput(
                "no scheduling discipline selected".to_string(),
            ));
        }
        Ok(())
    }
}
