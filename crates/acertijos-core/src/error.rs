//! Error vocabulary for acertijos.
//!
//! [`InvocationError`] is the user-facing category: its `Display` output is
//! the exact message printed on standard output before exiting with code 1.
//! [`ParseError`] describes a single malformed record and is only ever logged,
//! never shown to the user. [`SolveError`] covers the ways a transformation itself
//! can fail.

use thiserror::Error;

/// A violation detected before any transformation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// Wrong number of positional arguments.
    #[error("Uso: {program} {usage}")]
    Usage { program: String, usage: &'static str },

    /// The input path does not name an existing file.
    #[error("El archivo '{path}' no existe")]
    InputNotFound { path: String },

    /// Puzzle 5's repetition count is not a non-negative integer.
    #[error("El parametro <repeticiones mabel> debe ser un numero entero positivo no '{value}'")]
    InvalidRepetitions { value: String },
}

/// A record that could not be parsed. Callers skip the record and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed log line: {0:?}")]
    MalformedLogLine(String),

    #[error("invalid clock time: {0:?}")]
    InvalidClock(String),

    #[error("expected 3 comma-separated fields, found {found}: {line:?}")]
    WrongFieldCount { found: usize, line: String },

    #[error("empty group key: {0:?}")]
    EmptyKey(String),

    #[error("invalid DD/MM/YYYY date: {0:?}")]
    InvalidDate(String),

    #[error("invalid integer score: {0:?}")]
    InvalidScore(String),
}

/// Failure inside a transformation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("la sucesion para {n} repeticiones no cabe en 128 bits")]
    SequenceOverflow { n: u32 },

    #[error("palabra clave invalida {keyword:?}: {reason}")]
    InvalidKeyword { keyword: String, reason: String },
}
