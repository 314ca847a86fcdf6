//! Test builders — a scratch directory plus a fluent runner for the binaries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Absolute path of a compiled `acertijoN` binary.
pub fn bin_path(n: u8) -> &'static str {
    match n {
        1 => env!("CARGO_BIN_EXE_acertijo1"),
        2 => env!("CARGO_BIN_EXE_acertijo2"),
        3 => env!("CARGO_BIN_EXE_acertijo3"),
        4 => env!("CARGO_BIN_EXE_acertijo4"),
        5 => env!("CARGO_BIN_EXE_acertijo5"),
        6 => env!("CARGO_BIN_EXE_acertijo6"),
        other => panic!("there is no acertijo{other}"),
    }
}

// ---------------------------------------------------------------------------
// Sandbox
// ---------------------------------------------------------------------------

/// A temporary working directory, removed on drop.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create sandbox dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` and return its absolute path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("write sandbox file");
        path
    }

    /// Put `name` into one of the pre-run states: absent or holding `content`.
    pub fn prepare(&self, name: &str, content: Option<&str>) -> PathBuf {
        match content {
            Some(content) => self.file(name, content),
            None => {
                let path = self.path(name);
                let _ = std::fs::remove_file(&path);
                path
            }
        }
    }

    pub fn read(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.path(name)).ok()
    }

    /// Start building a run of `acertijo{n}` inside this sandbox.
    pub fn run(&self, n: u8) -> RunBuilder {
        RunBuilder {
            program: bin_path(n).into(),
            args: Vec::new(),
            cwd: self.root().to_path_buf(),
            config: self.path("no-config.toml"),
        }
    }
}

// ---------------------------------------------------------------------------
// RunBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one process invocation.
///
/// # Example
///
/// ```rust
/// let outcome = sandbox.run(1).arg(&input).arg(&output).output();
/// assert_eq!(outcome.code, 0);
/// ```
pub struct RunBuilder {
    program: OsString,
    args: Vec<OsString>,
    cwd: PathBuf,
    config: PathBuf,
}

impl RunBuilder {
    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Point `ACERTIJOS_CONFIG` at a specific file.
    pub fn config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = path.into();
        self
    }

    pub fn output(self) -> Outcome {
        let out = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .env("ACERTIJOS_CONFIG", &self.config)
            .output()
            .expect("spawn acertijo binary");
        Outcome {
            program: self.program.to_string_lossy().into_owned(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            code: out.status.code(),
        }
    }
}

/// What a finished process left behind.
#[derive(Debug)]
pub struct Outcome {
    /// The `argv[0]` the process was started with.
    pub program: String,
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}
