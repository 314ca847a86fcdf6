//! acertijos — six command-line puzzle solvers over flat text files.
//!
//! Each `acertijoN` binary is a thin wrapper around [`run`]:
//!
//! ```text
//! Cli ──► Invocation ──► Puzzle::execute ──► output file(s)
//!                              │
//!                              └──► InvocationError ──► stdout, exit 1
//! ```
//!
//! The shared plumbing lives in `acertijos-core` and the transformations in
//! `acertijos-solvers`; this crate only wires them to the process.

pub mod cli;
pub mod puzzle;

use std::process::ExitCode;

use acertijos_core::config::Config;
use acertijos_core::{Invocation, InvocationError};

pub use puzzle::Puzzle;

/// Entry point shared by every binary.
pub fn run(puzzle: Puzzle) -> ExitCode {
    let cli = cli::Cli::parse_for(puzzle.command_name(), puzzle.about());

    if cli.debug {
        if let Err(e) = cli::init_logging() {
            eprintln!("no se pudo abrir el log de depuracion: {e:#}");
        }
    }

    let invocation = Invocation::new(cli::program_name(), cli.args);
    let config = Config::load();

    match puzzle.execute(&invocation, &config) {
        Ok(()) => {
            tracing::info!(puzzle = puzzle.command_name(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<InvocationError>() {
            Some(invocation_error) => {
                tracing::warn!(error = %invocation_error, "invalid invocation");
                println!("{invocation_error}");
                ExitCode::FAILURE
            }
            None => {
                tracing::error!(error = %e, "run failed");
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
