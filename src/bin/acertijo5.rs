use std::process::ExitCode;

use acertijos::Puzzle;

fn main() -> ExitCode {
    acertijos::run(Puzzle::Diario)
}
