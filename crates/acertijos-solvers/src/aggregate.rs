//! Acertijo 3: infraction podiums.
//!
//! The ledger is a list of `<key>, <DD/MM/YYYY>, <score>` rows. Lower scores
//! rank first; ties go to the earlier date, then to the earlier row. Two
//! podiums are produced from that ranking:
//!
//! - **yearly**: for each calendar year, oldest year first, the best
//!   `podium_size` rows of that year;
//! - **historic**: the best `podium_size` rows over the whole ledger.

use std::collections::BTreeMap;

use acertijos_core::{io, Infraction};

/// Both podiums, already in output order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Podiums {
    pub yearly: Vec<Infraction>,
    pub historic: Vec<Infraction>,
}

impl Podiums {
    pub fn render_yearly(&self) -> String {
        io::join_lines(self.yearly.iter().map(ToString::to_string))
    }

    pub fn render_historic(&self) -> String {
        io::join_lines(self.historic.iter().map(ToString::to_string))
    }
}

/// Parse every well-formed row of `text`. Malformed rows are skipped.
pub fn parse_ledger(text: &str) -> Vec<Infraction> {
    io::lines(text)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match line.parse::<Infraction>() {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!(error = %e, "skipping ledger row");
                None
            }
        })
        .collect()
}

/// Sort by score, then date. The sort is stable, so file order breaks the
/// remaining ties.
pub fn rank(rows: &mut [Infraction]) {
    rows.sort_by(|a, b| a.score.cmp(&b.score).then(a.date.cmp(&b.date)));
}

/// Build both podiums from the parsed ledger.
pub fn podiums(mut rows: Vec<Infraction>, podium_size: usize) -> Podiums {
    rank(&mut rows);

    let mut by_year: BTreeMap<i32, Vec<&Infraction>> = BTreeMap::new();
    for row in &rows {
        by_year.entry(row.year()).or_default().push(row);
    }

    let yearly = by_year
        .values()
        .flat_map(|ranked| ranked.iter().take(podium_size))
        .map(|row| (*row).clone())
        .collect();
    let historic = rows.iter().take(podium_size).cloned().collect();

    tracing::debug!(rows = rows.len(), years = by_year.len(), "podiums built");
    Podiums { yearly, historic }
}

pub fn solve(text: &str, podium_size: usize) -> Podiums {
    podiums(parse_ledger(text), podium_size)
}
