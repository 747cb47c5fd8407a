//! CSV process loader.
//!
//! Each record is `id,burst,arrival[,priority]`. A record with three
//! fields has priority 0. Fields are trimmed, blank lines are skipped and
//! lines starting with `#` are comments. There is no header row.
//!
//! ```text
//! # id, burst, arrival, priority
//! 1, 5, 0, 2
//! 2, 3, 1
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Result, SimError};
use crate::models::Process;

/// Reads processes from CSV text.
///
/// # Errors
/// `MalformedRecord` for a wrong field count, a non-integer field or
/// unreadable CSV.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut processes = Vec::new();
    for record in csv.records() {
        let record = record.map_err(|e| SimError::MalformedRecord {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        processes.push(parse_record(&record, line)?);
    }

    debug!(count = processes.len(), "loaded processes");
    Ok(processes)
}

/// Opens `path` and reads processes from it.
///
/// # Errors
/// `FileAccess` if the file cannot be opened, otherwise as
/// [`load_processes`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    load_processes(file)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Process> {
    if record.len() != 3 && record.len() != 4 {
        return Err(SimError::MalformedRecord {
            line,
            reason: format!("expected 3 or 4 fields, got {}", record.len()),
        });
    }

    let field = |index: usize, name: &str| -> Result<i64> {
        let raw = &record[index];
        raw.parse::<i64>().map_err(|e| SimError::MalformedRecord {
            line,
            reason: format!("field '{name}' = {raw:?}: {e}"),
        })
    };

    let mut process = Process::new(field(0, "id")?, field(1, "burst")?, field(2, "arrival")?);
    if record.len() == 4 {
        process = process.with_priority(field(3, "priority")?);
    }
    Ok(process)
}
