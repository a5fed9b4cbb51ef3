//! Batch simulation CLI.
//!
//! Plays many games with a random attacking policy and prints aggregate
//! statistics as JSON, per mission and overall.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use war_mission::board::Color;
use war_mission::logging;
use war_mission::simulate::{run_simulation, summarize, GameSummary, SimulationConfig};

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Play automated games and report mission win rates")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Attacks allowed per game.
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Number of parallel threads.
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Random seed, 0 for entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Color of the simulated player.
    #[arg(long, default_value = "yellow")]
    color: String,

    /// Also print one JSON line per game before the summary.
    #[arg(long)]
    per_game: bool,

    /// Log level for diagnostics on stderr.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level.as_deref());

    let Some(player) = Color::from_name(&args.color) else {
        eprintln!("unknown color: '{}'", args.color);
        return ExitCode::FAILURE;
    };
    let config = SimulationConfig {
        num_games: args.games,
        max_turns: args.max_turns,
        threads: args.threads,
        seed: args.seed,
        player,
    };

    let start = Instant::now();
    let games = match run_simulation(&config) {
        Ok(games) => games,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        games = games.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "simulation finished"
    );

    let stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &games, args.per_game) {
        eprintln!("failed to write summary: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Writes optional per-game lines followed by the pretty-printed summary.
fn write_report<W: Write>(
    out: &mut W,
    games: &[GameSummary],
    per_game: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if per_game {
        for game in games {
            serde_json::to_writer(&mut *out, game)?;
            writeln!(out)?;
        }
    }
    serde_json::to_writer_pretty(&mut *out, &summarize(games))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
