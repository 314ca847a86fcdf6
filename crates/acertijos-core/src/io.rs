//! Whole-file input and output.
//!
//! Inputs are small flat text files, so they are read in one go. Outputs are
//! always rewritten from scratch: whatever the file held before is gone.

use std::path::Path;

use anyhow::Context;

/// Read `path` as text. Invalid UTF-8 sequences become U+FFFD.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("no se pudo leer '{}'", path.display()))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "input read");
    Ok(text)
}

/// Truncate `path` and write `content` to it, creating the file if needed.
pub fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("no se pudo escribir '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "output written");
    Ok(())
}

/// Lines of `text` with any trailing `\r` removed.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Join output lines with `\n`, no trailing newline.
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}
