mod display;
mod logging;
mod tui;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use breakthrough_core::game_state::GameState;
use clap::{Parser, Subcommand};

use crate::tui::AppMode;

#[derive(Parser, Debug)]
#[command(version, about = "Breakthrough in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Write logs to FILE (filtered by RUST_LOG, default "info")
    #[arg(
        long = "log-file",
        value_name = "FILE",
        value_hint = clap::ValueHint::FilePath,
        global = true
    )]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Replay a transcript such as "a2-a3;b7-b6;a3xb4" read from standard input
    Replay {
        /// Advance one move automatically every MS milliseconds
        #[arg(long = "tick-ms", value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: Option<u64>,

        /// Print the final position instead of opening the board
        #[arg(long)]
        print: bool,
    },
}

fn main() {
    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Replay { tick_ms, print }) => {
            init_logging(args.log_file.as_deref(), print);

            let line = read_transcript().unwrap_or_else(|err| {
                eprintln!("Failed to read transcript: {err}");
                std::process::exit(1);
            });
            let mut game = GameState::from_transcript(&line).unwrap_or_else(|err| {
                eprintln!("Invalid transcript: {err}");
                std::process::exit(1);
            });
            tracing::info!(plies = game.grid_index(), "transcript loaded");

            if print {
                display::print(&game);
                return;
            }

            game.beginning();
            tui::run(game, AppMode::Replay, tick_ms.map(Duration::from_millis)).unwrap_or_else(
                |err| {
                    eprintln!("Failed to run UI: {err}");
                    std::process::exit(1);
                },
            );
        }
        None => {
            init_logging(args.log_file.as_deref(), false);
            tui::run(GameState::new(), AppMode::Play, None).unwrap_or_else(|err| {
                eprintln!("Failed to run UI: {err}");
                std::process::exit(1);
            });
        }
    }
}

fn init_logging(log_file: Option<&std::path::Path>, stderr: bool) {
    if let Err(err) = logging::init(log_file, stderr) {
        eprintln!("Failed to initialize logging: {err}");
        std::process::exit(1);
    }
}

/// Reads a single transcript line from standard input.
///
/// An interactive terminal gets a line editor with a prompt; piped input is
/// read as-is.
fn read_transcript() -> Result<String, String> {
    if io::stdin().is_terminal() {
        let mut editor = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
        return editor.readline("transcript> ").map_err(|e| e.to_string());
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    Ok(line)
}
