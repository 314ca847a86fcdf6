//! Argument validation shared by all six commands.
//!
//! Each command declares a [`Signature`]: how many positional arguments it
//! takes and the usage template printed when the count is wrong. The first
//! positional argument is always the input file, and [`Invocation::validate`]
//! checks that it exists before anything else happens.

use std::path::Path;

use crate::error::InvocationError;

/// How many positional arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// At least this many; trailing extras are ignored.
    AtLeast(usize),
    /// Exactly `short`, or at least `long`. Counts in between are rejected.
    ShortOrLong { short: usize, long: usize },
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::AtLeast(min) => count >= min,
            Arity::ShortOrLong { short, long } => count == short || count >= long,
        }
    }
}

/// Static description of a command's positional interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub arity: Arity,
    /// Everything after `Uso: <program> `.
    pub usage: &'static str,
}

/// The program path and positional arguments of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `argv[0]` exactly as the command was invoked.
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Check the argument count, then that the input file exists.
    ///
    /// Returns the input path on success. Nothing on disk is modified.
    pub fn validate(&self, signature: &Signature) -> Result<&Path, InvocationError> {
        if !signature.arity.accepts(self.args.len()) {
            return Err(InvocationError::Usage {
                program: self.program.clone(),
                usage: signature.usage,
            });
        }

        // Arity guarantees at least one argument for every signature in use,
        // but an `AtLeast(0)` signature would still land here.
        let raw = self.args.first().map(String::as_str).unwrap_or_default();
        let input = Path::new(raw);
        if !input.is_file() {
            return Err(InvocationError::InputNotFound {
                path: raw.to_string(),
            });
        }

        tracing::debug!(program = %self.program, input = %input.display(), "invocation validated");
        Ok(input)
    }
}
