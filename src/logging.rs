//! Logging setup with verbosity level control.
//!
//! Verbosity levels:
//! - 0: SILENT (warnings and errors only)
//! - 1: CHANGES (one line per discipline run)
//! - 2: CHECKS (every dispatch decision)
//! - 3: DEBUG (admissions and idle jumps)
//!
//! `RUST_LOG`, when set, overrides the verbosity.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Maps a verbosity level to a tracing level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        VERBOSITY_SILENT => LevelFilter::WARN,
        VERBOSITY_CHANGES => LevelFilter::INFO,
        VERBOSITY_CHECKS => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a stderr subscriber for the given verbosity.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
