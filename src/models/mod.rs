//! CPU scheduling domain models.
//!
//! Provides the input record ([`Process`]) and the output records a
//! scheduling discipline produces: the Gantt timeline
//! ([`ExecutionInterval`]) and one statistics row per process
//! ([`ProcessResult`]).
//!
//! # Time Representation
//!
//! All times are integer time units relative to t=0. The simulator does
//! not attach a wall-clock meaning to a unit.

mod process;
mod schedule;

pub use process::{Process, ProcessId, Time};
pub use schedule::{ExecutionInterval, ProcessResult};
