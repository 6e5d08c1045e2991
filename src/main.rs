//! Command-line entry point.
//!
//! Loads a process list once, then runs all four disciplines over it in
//! the canonical order and prints each report to stdout. Every
//! discipline copies what it needs, so the single loaded list is safe to
//! share.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use proc_sim::loader::load_processes;
use proc_sim::report::write_report;
use proc_sim::scheduler::disciplines;
use proc_sim::validation::InputError;

#[derive(Debug, Parser)]
#[command(
    name = "proc-sim",
    version,
    about = "Simulates FCFS, shortest-remaining-time, priority, and round-robin scheduling"
)]
struct Cli {
    /// Process list file, one `id,burst,arrival[,priority]` row per line.
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("proc-sim: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let file =
        File::open(&cli.input).map_err(|e| format!("{}: {e}", cli.input.display()))?;
    let processes = load_processes(file).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for discipline in disciplines() {
        let run = discipline.run(&processes).map_err(describe_input_errors)?;
        write_report(&mut out, &run).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn describe_input_errors(errors: Vec<InputError>) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
