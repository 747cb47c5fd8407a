//! Command-line argument parsing.

use std::path::PathBuf;

use crate::config::{OutputFormat, SimulationConfig};
use crate::error::{Result, SimError};
use crate::scheduler::Discipline;
use crate::workload::WorkloadSpec;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: cpu-sched [OPTIONS] <FILE>
       cpu-sched [OPTIONS] --generate <N>

Simulates FCFS, SJF, priority and round-robin scheduling over a CSV
process list (id,burst,arrival[,priority] per line).

Options:
  -q, --quantum <N>        Round-robin time quantum [default: 4]
  -d, --disciplines <LIST> Comma-separated subset of fcfs,sjf,priority,rr
      --json               Emit JSON instead of text
      --generate <N>       Use N synthetic processes instead of a file
      --seed <N>           Seed for --generate [default: 0]
  -v                       Increase log verbosity (repeatable)
  -h, --help               Print this help
";

/// Where processes come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// CSV file on disk.
    File(PathBuf),
    /// Seeded synthetic workload.
    Generated(WorkloadSpec),
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub source: InputSource,
    pub config: SimulationConfig,
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Invocation),
    Help,
}

/// Parses arguments, excluding the program name.
///
/// # Errors
/// `InvalidArguments` for unknown flags, missing values, non-numeric
/// values, or anything other than exactly one input source.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = SimulationConfig::default();
    let mut files: Vec<PathBuf> = Vec::new();
    let mut generate: Option<usize> = None;
    let mut seed: u64 = 0;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-q" | "--quantum" => {
                config.quantum = parse_number(&arg, args.next())?;
            }
            "-d" | "--disciplines" => {
                let list = required(&arg, args.next())?;
                config.disciplines = list
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(str::parse)
                    .collect::<Result<Vec<Discipline>>>()?;
            }
            "--json" => config.format = OutputFormat::Json,
            "--generate" => generate = Some(parse_number(&arg, args.next())?),
            "--seed" => seed = parse_number(&arg, args.next())?,
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                config.verbosity = config.verbosity.saturating_add((flag.len() - 1) as u8);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(SimError::InvalidArguments(format!("unknown option '{flag}'")));
            }
            _ => files.push(PathBuf::from(&arg)),
        }
    }

    let source = match (files.len(), generate) {
        (1, None) => InputSource::File(files.remove(0)),
        (0, Some(count)) => InputSource::Generated(WorkloadSpec::new(count).with_seed(seed)),
        _ => {
            return Err(SimError::InvalidArguments(
                "must give exactly one scheduling file to process (or --generate)".to_string(),
            ))
        }
    };

    Ok(Command::Run(Invocation { source, config }))
}

fn required(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| SimError::InvalidArguments(format!("{flag} requires a value")))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = required(flag, value)?;
    value
        .parse()
        .map_err(|_| SimError::InvalidArguments(format!("{flag}: '{value}' is not a valid number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Invocation {
        match parse_args(args.iter().copied()).unwrap() {
            Command::Run(inv) => inv,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_single_file() {
        let inv = run(&["procs.csv"]);
        assert_eq!(inv.source, InputSource::File(PathBuf::from("procs.csv")));
        assert_eq!(inv.config, SimulationConfig::default());
    }

    #[test]
    fn test_options() {
        let inv = run(&["-q", "2", "--json", "-vv", "-d", "rr,sjf", "in.csv"]);
        assert_eq!(inv.config.quantum, 2);
        assert_eq!(inv.config.format, OutputFormat::Json);
        assert_eq!(inv.config.verbosity, 2);
        assert_eq!(
            inv.config.disciplines,
            vec![Discipline::RoundRobin, Discipline::Sjf]
        );
    }

    #[test]
    fn test_generate() {
        let inv = run(&["--generate", "12", "--seed", "9"]);
        assert_eq!(
            inv.source,
            InputSource::Generated(WorkloadSpec::new(12).with_seed(9))
        );
    }

    #[test]
    fn test_wrong_arity() {
        for args in [&[][..], &["a.csv", "b.csv"][..], &["a.csv", "--generate", "3"][..]] {
            let err = parse_args(args.iter().copied()).unwrap_err();
            assert!(matches!(err, SimError::InvalidArguments(_)), "{args:?}");
        }
    }

    #[test]
    fn test_bad_values() {
        assert!(parse_args(["-q"]).is_err());
        assert!(parse_args(["-q", "four", "a.csv"]).is_err());
        assert!(parse_args(["-d", "lottery", "a.csv"]).is_err());
        assert!(parse_args(["--bogus", "a.csv"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(["--help"]).unwrap(), Command::Help);
        assert!(USAGE.contains("--quantum"));
    }
}
