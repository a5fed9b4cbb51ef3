//! War -- a single-player territorial conquest game.
//!
//! Reads menu choices and territory IDs from stdin and writes the map,
//! battle reports, and mission checks to stdout. Diagnostics go to stderr.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use war_mission::cli::play;
use war_mission::config::GameConfig;
use war_mission::logging;
use war_mission::record::save_record;
use war_mission::session::Session;

#[derive(Debug, Parser)]
#[command(name = "war-mission", version, about = "Conquer territories to fulfil your secret mission")]
struct Args {
    /// Color of your army.
    #[arg(long, default_value = "yellow")]
    color: String,

    /// Fixed random seed; omit to seed from the operating system.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a JSON record of the session to this file when the game ends.
    #[arg(long)]
    record: Option<PathBuf>,

    /// Log level for diagnostics on stderr (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level.as_deref());

    let config = match GameConfig::default().with_player_name(&args.color) {
        Ok(config) => GameConfig {
            seed: args.seed,
            record: args.record,
            ..config
        },
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = match Session::new(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let end = match play(&mut session, &mut stdin.lock(), &mut out) {
        Ok(end) => end,
        Err(e) => {
            eprintln!("i/o error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(?end, battles = session.battles().len(), "game over");

    if let Some(path) = &config.record {
        if let Err(e) = save_record(&session.to_record(), path) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
