//! Acertijo 5: the diary page and Mabel's repetitions.
//!
//! The output has two lines: how many times the keyword appears on the page
//! as a word of its own (any case), and a number derived from Mabel's
//! repetition count `n`:
//!
//! - even `n`: `min(n, factorial_cap)!`
//! - odd `n`: the `n`-th Fibonacci number, `fib(1) = fib(2) = 1`

use std::fmt;
use std::str::FromStr;

use acertijos_core::config::DiarioConfig;
use acertijos_core::{InvocationError, SolveError};
use regex::RegexBuilder;

/// A validated repetition count: decimal digits only.
///
/// Counts beyond `u32::MAX` saturate to the largest `u32` of the same parity,
/// which keeps the factorial/Fibonacci branch and the capped factorial
/// value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetitions(pub u32);

impl FromStr for Repetitions {
    type Err = InvocationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || InvocationError::InvalidRepetitions {
            value: raw.to_string(),
        };
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match raw.parse() {
            Ok(n) => Ok(Repetitions(n)),
            Err(_) => {
                let odd = raw.bytes().last().is_some_and(|b| (b - b'0') % 2 == 1);
                let n = if odd { u32::MAX } else { u32::MAX - 1 };
                tracing::debug!(raw, n, "repetition count saturated");
                Ok(Repetitions(n))
            }
        }
    }
}

impl fmt::Display for Repetitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whole-word, case-insensitive occurrences of `keyword` in `text`.
pub fn count_keyword(text: &str, keyword: &str) -> Result<usize, SolveError> {
    if keyword.is_empty() {
        return Ok(0);
    }
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| SolveError::InvalidKeyword {
            keyword: keyword.to_string(),
            reason: e.to_string(),
        })?;
    Ok(re.find_iter(text).count())
}

pub fn factorial(k: u32) -> Option<u128> {
    (1..=u128::from(k)).try_fold(1u128, |acc, i| acc.checked_mul(i))
}

pub fn fibonacci(n: u32) -> Option<u128> {
    if n == 0 {
        return Some(0);
    }
    let (mut prev, mut cur) = (0u128, 1u128);
    for _ in 1..n {
        let next = prev.checked_add(cur)?;
        prev = cur;
        cur = next;
    }
    Some(cur)
}

/// The number on the second output line.
pub fn sequence(n: Repetitions, factorial_cap: u32) -> Result<u128, SolveError> {
    let Repetitions(n) = n;
    let value = if n % 2 == 0 {
        factorial(n.min(factorial_cap))
    } else {
        fibonacci(n)
    };
    value.ok_or(SolveError::SequenceOverflow { n })
}

pub fn solve(text: &str, n: Repetitions, cfg: &DiarioConfig) -> Result<String, SolveError> {
    let count = count_keyword(text, &cfg.keyword)?;
    let value = sequence(n, cfg.factorial_cap)?;
    tracing::debug!(count, %n, value = %value, "diary decoded");
    Ok(format!("{count}\n{value}"))
}
