//! Text and JSON rendering of scheduler runs.
//!
//! The text layout is a title banner, a Gantt bar with its time axis, and
//! a schedule table whose footer carries the run averages.
//!
//! # Layout
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |
//! 0       5       8
//!
//! Schedule table
//! +----+----------+-------+---------+---------+------------+------------+
//! | ID | PRIORITY | BURST | ARRIVAL |    WAIT | TURNAROUND |       EXIT |
//! +----+----------+-------+---------+---------+------------+------------+
//! |  1 |        0 |     5 |       0 |       0 |          5 |          5 |
//! |  2 |        0 |     3 |       1 |       4 |          7 |          8 |
//! +----+----------+-------+---------+---------+------------+------------+
//! |    |          |       |         | Average |    Average | Throughput |
//! |    |          |       |         |    2.00 |       6.00 |     0.25/t |
//! +----+----------+-------+---------+---------+------------+------------+
//! ```
//!
//! The banner rule is twice the title length. Each Gantt cell pads the pid
//! by `(8 - len) / 2` spaces on both sides; the axis lists every interval
//! start, tab separated, then the final stop. Table columns are as wide as
//! their widest cell and every cell is right-aligned.

use std::io::Write;

use crate::error::Result;
use crate::scheduler::SchedulerRun;

const HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Writes one run as text.
pub fn render_text<W: Write>(w: &mut W, run: &SchedulerRun) -> Result<()> {
    write_title(w, &run.title)?;
    write_gantt(w, run)?;
    write_table(w, run)?;
    Ok(())
}

/// Writes every run as text, in order.
pub fn render_all_text<W: Write>(w: &mut W, runs: &[SchedulerRun]) -> Result<()> {
    for run in runs {
        render_text(w, run)?;
    }
    Ok(())
}

/// Writes all runs as a pretty-printed JSON array.
pub fn render_json<W: Write>(w: &mut W, runs: &[SchedulerRun]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, runs)?;
    writeln!(w)?;
    Ok(())
}

fn write_title<W: Write>(w: &mut W, title: &str) -> Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")?;
    Ok(())
}

fn write_gantt<W: Write>(w: &mut W, run: &SchedulerRun) -> Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for iv in &run.gantt {
        let pid = iv.process_id.to_string();
        let padding = " ".repeat(8usize.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for iv in &run.gantt {
        write!(w, "{}\t", iv.start)?;
    }
    if let Some(last) = run.gantt.last() {
        write!(w, "{}", last.stop)?;
    }
    write!(w, "\n\n")?;
    Ok(())
}

fn write_table<W: Write>(w: &mut W, run: &SchedulerRun) -> Result<()> {
    writeln!(w, "Schedule table")?;

    let body: Vec<[String; 7]> = run
        .rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst_duration.to_string(),
                r.arrival_time.to_string(),
                r.waiting_time.to_string(),
                r.turnaround_time.to_string(),
                r.completion_time.to_string(),
            ]
        })
        .collect();

    let s = &run.summary;
    let footer: [[String; 7]; 2] = [
        [
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            "Average".into(),
            "Average".into(),
            "Throughput".into(),
        ],
        [
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format!("{:.2}", s.average_waiting_time),
            format!("{:.2}", s.average_turnaround_time),
            format!("{:.2}/t", s.throughput),
        ],
    ];

    let mut widths = HEADERS.map(str::len);
    for row in body.iter().chain(footer.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let separator = widths
        .iter()
        .map(|&n| "-".repeat(n + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{separator}+");

    writeln!(w, "{separator}")?;
    write_row(w, &widths, &HEADERS.map(str::to_uppercase))?;
    writeln!(w, "{separator}")?;
    for row in &body {
        write_row(w, &widths, row)?;
    }
    writeln!(w, "{separator}")?;
    for row in &footer {
        write_row(w, &widths, row)?;
    }
    writeln!(w, "{separator}")?;
    Ok(())
}

fn write_row<W: Write>(w: &mut W, widths: &[usize; 7], cells: &[String; 7]) -> Result<()> {
    write!(w, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(w, " {cell:>width$} |")?;
    }
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{CpuScheduler, FcfsScheduler};

    fn fcfs_run() -> SchedulerRun {
        FcfsScheduler::new()
            .schedule(&[Process::new(1, 5, 0), Process::new(2, 3, 1)])
            .unwrap()
    }

    fn render(run: &SchedulerRun) -> String {
        let mut out = Vec::new();
        render_text(&mut out, run).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_title_banner() {
        let text = render(&fcfs_run());
        let mut lines = text.lines();
        let rule = "-".repeat("First-come, first-serve".len() * 2);
        assert_eq!(lines.next(), Some(rule.as_str()));
        assert_eq!(lines.next().map(str::trim), Some("First-come, first-serve"));
        assert_eq!(lines.next(), Some(rule.as_str()));
    }

    #[test]
    fn test_gantt_lines() {
        let text = render(&fcfs_run());
        assert!(text.contains("Gantt schedule\n|   1   |   2   |\n0\t5\t8\n\n"));
    }

    #[test]
    fn test_table_footer() {
        let text = render(&fcfs_run());
        assert!(text.contains("Schedule table"));
        assert!(text.contains("TURNAROUND"));
        assert!(text.contains("2.00"));
        assert!(text.contains("6.00"));
        assert!(text.contains("0.25/t"));
    }

    #[test]
    fn test_table_columns_align() {
        let text = render(&fcfs_run());
        let table: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "Schedule table")
            .skip(1)
            .collect();
        assert_eq!(table.len(), 9);
        let width = table[0].len();
        assert!(table.iter().all(|l| l.len() == width));
        assert_eq!(
            table[1],
            "| ID | PRIORITY | BURST | ARRIVAL |    WAIT | TURNAROUND |       EXIT |"
        );
        assert_eq!(
            table[4],
            "|  2 |        0 |     3 |       1 |       4 |          7 |          8 |"
        );
        assert_eq!(
            table[7],
            "|    |          |       |         |    2.00 |       6.00 |     0.25/t |"
        );
    }

    #[test]
    fn test_empty_run() {
        let run = FcfsScheduler::new().schedule(&[]).unwrap();
        let text = render(&run);
        assert!(text.contains("Gantt schedule\n|\n\n\n"));
        assert!(text.contains("0.00/t"));
    }

    #[test]
    fn test_json_output() {
        let runs = vec![fcfs_run()];
        let mut out = Vec::new();
        render_json(&mut out, &runs).unwrap();
        let parsed: Vec<SchedulerRun> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, runs);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["rows"][1]["waiting_time"], 4);
    }
}
