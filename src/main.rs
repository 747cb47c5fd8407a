use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use cpu_sched::cli::{self, Command, InputSource, Invocation};
use cpu_sched::render;
use cpu_sched::workload::generate_processes;
use cpu_sched::{loader, logging, simulate, OutputFormat, Result};

fn main() -> ExitCode {
    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Help => {
            print!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Command::Run(invocation) => {
            logging::init(invocation.config.verbosity);
            match run(&invocation) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run(invocation: &Invocation) -> Result<()> {
    let processes = match &invocation.source {
        InputSource::File(path) => loader::load_file(path)?,
        InputSource::Generated(spec) => generate_processes(spec),
    };
    tracing::info!(count = processes.len(), "processes loaded");

    let runs = simulate(&processes, &invocation.config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match invocation.config.format {
        OutputFormat::Text => render::render_all_text(&mut out, &runs)?,
        OutputFormat::Json => render::render_json(&mut out, &runs)?,
    }
    out.flush()?;
    Ok(())
}
