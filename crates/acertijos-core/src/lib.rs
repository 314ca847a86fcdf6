//! acertijos-core — shared plumbing for the acertijos command-line solvers.
//!
//! Every acertijo has the same outer shape; only the transformation in the
//! middle differs:
//!
//! ```text
//! Invocation ──► validate ──► read_input ──► (solver) ──► write_output
//!      │             │
//!      └─────────────┴──► InvocationError ──► stdout + exit 1
//! ```
//!
//! This crate owns that outer shape: the argument validator, the error
//! vocabulary, configuration, whole-file I/O and the parsed record types.
//! The transformations themselves live in `acertijos-solvers`.

pub mod config;
pub mod error;
pub mod invocation;
pub mod io;
pub mod types;

pub use error::{InvocationError, ParseError, SolveError};
pub use invocation::{Arity, Invocation, Signature};
pub use types::{Infraction, LogEntry};
