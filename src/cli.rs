//! Command-line surface shared by the six binaries.
//!
//! Only `--debug` is a real flag. Everything else, `-h` and `--version`
//! included, is collected verbatim as a positional argument so that values
//! like `-12` or `""` reach the puzzle's own validation instead of being
//! answered by the parser.

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Write debug logs to <temp dir>/acertijos-debug.log (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,

    /// Input file, then the puzzle's remaining parameters.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, naming the command after the binary.
    pub fn parse_for(name: &'static str, about: &'static str) -> Self {
        let matches = Cli::command().name(name).about(about).get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// `argv[0]` exactly as the user typed it.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn debug_log_path() -> PathBuf {
    std::env::temp_dir().join("acertijos-debug.log")
}

/// Install a file-backed subscriber. Without it every `tracing` call is a
/// no-op and standard output only carries the puzzle messages.
pub fn init_logging() -> anyhow::Result<PathBuf> {
    let path = debug_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    tracing::info!(path = %path.display(), "acertijos debug log started");
    Ok(path)
}
