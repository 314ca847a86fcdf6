//! Acertijo 2: Mabel's revenge on Sev'ral Timez.
//!
//! Each lyric line is handled on its own:
//!
//! 1. Lines that give themselves away are dropped entirely: blank lines,
//!    lines with a digit, lines starting with a lowercase letter, lines with
//!    a shouted word (two or more letters, all uppercase) and lines with the
//!    same letter three times running.
//! 2. Every lowercase vowel becomes the placeholder.
//! 3. Short lines (up to `reverse_max_words` words) are written backwards.

use acertijos_core::config::VenganzaConfig;
use acertijos_core::io;

/// Encode a single line, or `None` when the line is suppressed.
pub fn encode_line(line: &str, cfg: &VenganzaConfig) -> Option<String> {
    let line = line.trim();
    if let Some(reason) = suppression(line) {
        tracing::debug!(line, reason, "line suppressed");
        return None;
    }

    let masked: String = line
        .chars()
        .map(|c| if is_masked_vowel(c) { cfg.placeholder } else { c })
        .collect();

    if line.split_whitespace().count() <= cfg.reverse_max_words {
        Some(masked.chars().rev().collect())
    } else {
        Some(masked)
    }
}

/// Encode every line of `text`, dropping suppressed ones.
pub fn solve(text: &str, cfg: &VenganzaConfig) -> String {
    io::join_lines(io::lines(text).filter_map(|line| encode_line(line, cfg)))
}

fn is_masked_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn suppression(line: &str) -> Option<&'static str> {
    if line.is_empty() {
        return Some("blank");
    }
    if line.chars().any(|c| c.is_ascii_digit()) {
        return Some("digit");
    }
    if line.chars().next().is_some_and(char::is_lowercase) {
        return Some("lowercase start");
    }
    if line.split_whitespace().any(is_shouted) {
        return Some("shouted word");
    }
    if has_letter_triplet(line) {
        return Some("letter triplet");
    }
    None
}

/// Two or more letters, none of them lowercase.
fn is_shouted(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

fn has_letter_triplet(line: &str) -> bool {
    let chars: Vec<char> = line.chars().flat_map(char::to_lowercase).collect();
    chars
        .windows(3)
        .any(|w| w[0].is_alphabetic() && w[0] == w[1] && w[1] == w[2])
}
