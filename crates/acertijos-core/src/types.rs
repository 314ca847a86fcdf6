//! Core types for acertijos-core.
//!
//! Parsed records shared between the runner and the solvers: the duck's
//! activity log line ([`LogEntry`]) and one row of the infraction ledger
//! ([`Infraction`]). Both parse from a single text line via [`FromStr`] and
//! are immutable once built.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::Regex;

use crate::error::ParseError;

/// `HH:MM <energy> <description>`; the description may be empty.
static LOG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}:\d{2})\s+(\d+)(?:\s+(.*))?$").expect("log line pattern is valid")
});

/// Date format used both to parse and to render infraction rows.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// ---------------------------------------------------------------------------
// LogEntry
// ---------------------------------------------------------------------------

/// One line of the duck's activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Same-day wall clock, minute precision.
    pub time: NaiveTime,
    /// Energy spent by the activity.
    pub energy: u32,
    pub description: String,
}

impl LogEntry {
    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> i64 {
        i64::from(self.time.hour() * 60 + self.time.minute())
    }
}

impl FromStr for LogEntry {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let caps = LOG_LINE
            .captures(line)
            .ok_or_else(|| ParseError::MalformedLogLine(line.to_string()))?;

        let time = NaiveTime::parse_from_str(&caps[1], "%H:%M")
            .map_err(|_| ParseError::InvalidClock(caps[1].to_string()))?;
        let energy = caps[2]
            .parse()
            .map_err(|_| ParseError::MalformedLogLine(line.to_string()))?;
        let description = caps
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        Ok(Self {
            time,
            energy,
            description,
        })
    }
}

// ---------------------------------------------------------------------------
// Infraction
// ---------------------------------------------------------------------------

/// One `<key>, <DD/MM/YYYY>, <score>` row of the infraction ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infraction {
    pub key: String,
    pub date: NaiveDate,
    pub score: i64,
}

impl Infraction {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl FromStr for Infraction {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [key, date, score] = fields[..] else {
            return Err(ParseError::WrongFieldCount {
                found: fields.len(),
                line: line.to_string(),
            });
        };

        if key.is_empty() {
            return Err(ParseError::EmptyKey(line.to_string()));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| ParseError::InvalidDate(date.to_string()))?;
        let score = score
            .parse()
            .map_err(|_| ParseError::InvalidScore(score.to_string()))?;

        Ok(Self {
            key: key.to_string(),
            date,
            score,
        })
    }
}

impl fmt::Display for Infraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.key,
            self.date.format(DATE_FORMAT),
            self.score
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
