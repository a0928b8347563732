use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_cli::{CliConfig, Session};
use chess_rules::{Color, Game, RuleSet, parse_fen};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess", version, about = "Two-player chess at the terminal")]
struct Args {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Allow castling through check and score stalemate as checkmate
    #[arg(long)]
    legacy: bool,

    /// Do not print the board after each move
    #[arg(long)]
    no_board: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if args.legacy {
        config.rules = RuleSet::legacy();
    }
    if args.no_board {
        config.display.show_board = false;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (game, to_move) = match &args.fen {
        Some(fen) => {
            let (board, side) = parse_fen(fen).with_context(|| format!("bad FEN '{fen}'"))?;
            (Game::from_board(board, config.rules), side)
        }
        None => (Game::with_rules(config.rules), Color::White),
    };
    info!(rules = ?config.rules, %to_move, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        Session::new(game, to_move, stdin.lock(), stdout.lock()).show_board(config.display.show_board);
    let outcome = session.run()?;
    info!(?outcome, "game over");
    Ok(())
}
