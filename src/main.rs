use std::fs;
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chess_tracker::correlation::change_correlator::{ChangeCorrelator, MoveResult};
use chess_tracker::correlation::config::CorrelatorConfig;
use chess_tracker::correlation::touched_square::{parse_touched_square, Orientation};
use chess_tracker::errors::TrackerError;
use chess_tracker::game_state::chess_types::{file_of, rank_of};
use chess_tracker::game_state::game_state::GameState;
use chess_tracker::utils::render_game_state::render_game_state;

/// Replay recorded change sets through the move correlator.
///
/// A script holds one change set per line: whitespace-separated square names,
/// each optionally suffixed with `:score`. The commands `undo`, `reset` and
/// `promote <square> <Q|R|B|N>` are also accepted, and `#` starts a comment.
#[derive(Parser)]
#[command(name = "chess_tracker")]
#[command(about = "Infer chess moves from changed board squares")]
#[command(version)]
struct Args {
    /// TOML file overriding the correlator thresholds
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// The dark pieces sit nearest the camera
    #[arg(long, global = true)]
    dark_near: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Feed every line of SCRIPT to the correlator and print the outcome
    Replay {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Print the board after every accepted move
        #[arg(short, long)]
        board: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), TrackerError> {
    let mut config = match &args.config {
        Some(path) => CorrelatorConfig::load(path)?,
        None => CorrelatorConfig::default(),
    };
    if args.dark_near {
        config.orientation = Orientation::DarkNear;
    }

    match args.command {
        Command::Replay { script, board } => replay(&script, config, board),
    }
}

#[derive(Default)]
struct ReplaySummary {
    valid: usize,
    illegal: usize,
    noise: usize,
    empty: usize,
}

fn replay(script: &PathBuf, config: CorrelatorConfig, show_board: bool) -> Result<(), TrackerError> {
    let text = fs::read_to_string(script).map_err(|source| TrackerError::ReadFile {
        path: script.display().to_string(),
        source,
    })?;

    let started = Local::now();
    let orientation = config.orientation;
    let correlator = ChangeCorrelator::new(config);
    let mut game = GameState::new_game();
    let mut summary = ReplaySummary::default();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some("undo") => {
                let undone = game.undo();
                println!("{:>4}: undo -> {}", line_no + 1, if undone { "ok" } else { "nothing to undo" });
            }
            Some("reset") => {
                game.reset();
                println!("{:>4}: reset", line_no + 1);
            }
            Some("promote") => {
                let (Some(square), Some(letter)) = (words.next(), words.next()) else {
                    warn!(line = line_no + 1, "promote needs a square and a piece letter");
                    continue;
                };
                let square = parse_touched_square(square, orientation)?.square;
                game.override_promotion(rank_of(square), file_of(square), letter)?;
                println!("{:>4}: promote {} -> {}", line_no + 1, letter, game.fen());
            }
            Some(_) => {
                let names: Vec<&str> = line.split_whitespace().collect();
                let result = correlator.correlate_names(&mut game, &names)?;
                match &result {
                    MoveResult::Valid { notation } => {
                        summary.valid += 1;
                        println!("{:>4}: {:<20} {}", line_no + 1, notation, game.fen());
                        if show_board {
                            println!("{}", render_game_state(&game));
                        }
                    }
                    MoveResult::Illegal { reason, .. } => {
                        summary.illegal += 1;
                        println!("{:>4}: illegal: {}", line_no + 1, reason);
                    }
                    MoveResult::Noise => {
                        summary.noise += 1;
                        println!("{:>4}: noise", line_no + 1);
                    }
                    MoveResult::None => summary.empty += 1,
                }
            }
        }
    }

    let finished = Local::now();
    info!(
        valid = summary.valid,
        illegal = summary.illegal,
        noise = summary.noise,
        empty = summary.empty,
        "replay finished"
    );
    println!();
    println!("Replayed {} at {}", script.display(), finished.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "  {} moves, {} illegal, {} noise in {} ms",
        summary.valid,
        summary.illegal,
        summary.noise,
        (finished - started).num_milliseconds()
    );
    println!("  history: {}", game.move_history().join(" "));
    println!("  fen:     {}", game.fen());
    if game.is_game_over() {
        println!("  game over");
    }
    Ok(())
}
