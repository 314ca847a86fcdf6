//! Acertijo 1: when to capture Pato.
//!
//! Pato's activity log is scanned in file order. For each entry, the energy
//! spent by the *earlier* entries inside the trailing window is summed; the
//! first entry at which that sum reaches the threshold is the moment Pato is
//! tired enough to be caught.
//!
//! Times are same-day `HH:MM` clocks. An entry earlier than the one before it
//! means the log restarted, so the window is emptied.

use std::collections::VecDeque;

use acertijos_core::config::PatoConfig;
use acertijos_core::{io, LogEntry};
use chrono::NaiveTime;

/// Parse every well-formed line of `text`. Malformed lines are skipped.
pub fn parse_log(text: &str) -> Vec<LogEntry> {
    io::lines(text)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match line.parse::<LogEntry>() {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping log line");
                None
            }
        })
        .collect()
}

/// Time of the first entry whose trailing-window energy reaches the threshold.
pub fn capture_time(entries: &[LogEntry], cfg: &PatoConfig) -> Option<NaiveTime> {
    let mut window: VecDeque<(i64, u64)> = VecDeque::new();
    let mut sum: u64 = 0;

    for entry in entries {
        let now = entry.minute_of_day();

        if window.back().is_some_and(|&(last, _)| last > now) {
            tracing::debug!(time = %entry.time, "clock went backwards, window cleared");
            window.clear();
            sum = 0;
        }
        while let Some(&(start, energy)) = window.front() {
            if now - start < cfg.window_minutes {
                break;
            }
            window.pop_front();
            sum -= energy;
        }

        if sum >= cfg.threshold {
            tracing::info!(time = %entry.time, sum, "capture threshold reached");
            return Some(entry.time);
        }

        let energy = u64::from(entry.energy);
        window.push_back((now, energy));
        sum += energy;
    }
    None
}

/// Render the capture hour, or an empty string when Pato never tires.
pub fn solve(text: &str, cfg: &PatoConfig) -> String {
    capture_time(&parse_log(text), cfg)
        .map(|time| format!("Hora indicada para capturar a Pato: {}", time.format("%H:%M")))
        .unwrap_or_default()
}
