// ---------------------------------------------------------------------------
// Puzzle
// ---------------------------------------------------------------------------

use std::path::Path;

use acertijos_core::config::Config;
use acertijos_core::{io, Arity, Invocation, Signature};
use acertijos_solvers::keyword::Repetitions;
use acertijos_solvers::{aggregate, cipher, grid, keyword, time_window};
use anyhow::Context;

/// The six acertijos, one per binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    // 1: when to capture Pato
    Pato,
    // 2: Mabel's revenge lyrics
    Venganza,
    // 3: infraction podiums
    Infractores,
    // 4: Ford's papyrus
    Papiro,
    // 5: diary page and Mabel's repetitions
    Diario,
    // 6: the painted wall
    Pared,
}

impl Puzzle {
    pub const ALL: [Puzzle; 6] = [
        Puzzle::Pato,
        Puzzle::Venganza,
        Puzzle::Infractores,
        Puzzle::Papiro,
        Puzzle::Diario,
        Puzzle::Pared,
    ];

    pub fn command_name(self) -> &'static str {
        match self {
            Puzzle::Pato => "acertijo1",
            Puzzle::Venganza => "acertijo2",
            Puzzle::Infractores => "acertijo3",
            Puzzle::Papiro => "acertijo4",
            Puzzle::Diario => "acertijo5",
            Puzzle::Pared => "acertijo6",
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Puzzle::Pato => "Hora indicada para capturar a Pato",
            Puzzle::Venganza => "Venganza de Mabel sobre las canciones",
            Puzzle::Infractores => "Podios anuales e historicos de infractores",
            Puzzle::Papiro => "Mensaje oculto en el papiro",
            Puzzle::Diario => "Clave secreta de la pagina del diario",
            Puzzle::Pared => "Codigo pintado en la pared",
        }
    }

    pub fn signature(self) -> Signature {
        match self {
            Puzzle::Pato => Signature {
                arity: Arity::AtLeast(2),
                usage: "<archivo registro> <archivo captura>",
            },
            Puzzle::Venganza => Signature {
                arity: Arity::AtLeast(2),
                usage: "<archivo canciones> <archivo venganza>",
            },
            Puzzle::Infractores => Signature {
                arity: Arity::ShortOrLong { short: 1, long: 3 },
                usage: "<archivo infractores>",
            },
            Puzzle::Papiro => Signature {
                arity: Arity::AtLeast(2),
                usage: "<archivo papiro> <archivo mensaje>",
            },
            Puzzle::Diario => Signature {
                arity: Arity::AtLeast(3),
                usage: "<archivo pagina diario> <repeticiones mabel> <archivo clave secreta>",
            },
            Puzzle::Pared => Signature {
                arity: Arity::AtLeast(2),
                usage: "<archivo pared> <archivo codigo>",
            },
        }
    }

    /// Validate, read, transform, write.
    ///
    /// Validation failures surface as [`acertijos_core::InvocationError`]
    /// inside the returned error; no file is written in that case.
    pub fn execute(self, invocation: &Invocation, config: &Config) -> anyhow::Result<()> {
        let input = invocation.validate(&self.signature())?;
        tracing::info!(puzzle = self.command_name(), input = %input.display(), "solving");

        match self {
            Puzzle::Pato => {
                let output = positional(invocation, 1)?;
                let text = io::read_input(input)?;
                io::write_output(output, &time_window::solve(&text, &config.pato))
            }
            Puzzle::Venganza => {
                let output = positional(invocation, 1)?;
                let text = io::read_input(input)?;
                io::write_output(output, &cipher::solve(&text, &config.venganza))
            }
            Puzzle::Infractores => {
                let (yearly, historic) = if invocation.args().len() >= 3 {
                    (positional(invocation, 1)?, positional(invocation, 2)?)
                } else {
                    (
                        Path::new(config.infractores.yearly_output.as_str()),
                        Path::new(config.infractores.historic_output.as_str()),
                    )
                };
                let text = io::read_input(input)?;
                let podiums = aggregate::solve(&text, config.infractores.podium_size);
                io::write_output(yearly, &podiums.render_yearly())?;
                io::write_output(historic, &podiums.render_historic())
            }
            Puzzle::Papiro => {
                let output = positional(invocation, 1)?;
                let text = io::read_input(input)?;
                io::write_output(output, &grid::solve_papyrus(&text))
            }
            Puzzle::Diario => {
                let repetitions: Repetitions = invocation.arg(1).unwrap_or_default().parse()?;
                let output = positional(invocation, 2)?;
                let text = io::read_input(input)?;
                let secret = keyword::solve(&text, repetitions, &config.diario)?;
                io::write_output(output, &secret)
            }
            Puzzle::Pared => {
                let output = positional(invocation, 1)?;
                let text = io::read_input(input)?;
                io::write_output(output, &grid::solve_wall(&text))
            }
        }
    }
}

fn positional(invocation: &Invocation, index: usize) -> anyhow::Result<&Path> {
    invocation
        .arg(index)
        .map(Path::new)
        .with_context(|| format!("falta el argumento posicional {}", index + 1))
}
