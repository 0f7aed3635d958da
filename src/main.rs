//! Ghost Leg entry point
//!
//! Builds a session from the command line, generates a seeded ladder and
//! reveals where each selected player ends up.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::process::ExitCode;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;
    use serde::Serialize;

    use ghost_leg::renderer::{SvgCanvas, draw_session};
    use ghost_leg::{Pairing, Result, Session, Settings};

    #[derive(Parser, Debug)]
    #[command(author, version, about)]
    struct Cli {
        /// Comma-separated player names
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<String>,
        /// Comma-separated result names (same count as players)
        #[arg(long, value_delimiter = ',', required = true)]
        results: Vec<String>,
        /// RNG seed (defaults to the clock)
        #[arg(long)]
        seed: Option<u64>,
        /// Lane to reveal (repeatable; every lane when omitted)
        #[arg(long)]
        select: Vec<usize>,
        /// JSON settings file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Write the ladder with the last revealed path as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Print the pairings as JSON instead of text
        #[arg(long)]
        json: bool,
    }

    #[derive(Serialize)]
    struct Report<'a> {
        seed: u64,
        players: &'a [String],
        results: &'a [String],
        pairings: Vec<Pairing>,
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    fn run(cli: Cli) -> Result<()> {
        let settings = match &cli.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let seed = cli.seed.unwrap_or_else(clock_seed);
        log::info!("Ghost Leg starting (seed {})", seed);

        let mut session = Session::with_settings(seed, settings)?;
        session.set_roster(cli.players, cli.results)?;
        session.start_game()?;

        let lanes: Vec<usize> = if cli.select.is_empty() {
            (0..session.lane_count()).collect()
        } else {
            cli.select
        };

        let mut pairings = Vec::with_capacity(lanes.len());
        for lane in lanes {
            let pairing = session.select_lane(lane)?;
            if !cli.json {
                if let Some(outcome) = session.outcome() {
                    println!("{}", outcome);
                }
            }
            pairings.push(pairing);
        }

        if cli.json {
            let report = Report {
                seed,
                players: session.players(),
                results: session.results(),
                pairings,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        if let Some(path) = &cli.svg {
            let mut svg = SvgCanvas::new(&session.settings().canvas);
            draw_session(&mut svg, &session);
            std::fs::write(path, svg.to_svg())?;
            log::info!("Ladder written to {}", path.display());
        }

        Ok(())
    }

    pub fn main() -> ExitCode {
        env_logger::init();
        match run(Cli::parse()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{}", err);
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on wasm
}
