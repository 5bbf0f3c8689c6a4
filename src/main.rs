//! Terminal front end for the tic-tac-toe engine.
//!
//! Human vs. engine on a 3x3 grid. The engine plays the optimal
//! minimax move, with a small blunder probability for approachability.

use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tictactoe_engine::{
    GameFinished, GameInProgress, GameResult, GameSetup, Move, Player, Position, Searcher,
    Verdict, DEFAULT_BLUNDER_RATE,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Probability of the engine playing a random move instead of searching
    #[arg(long, default_value_t = DEFAULT_BLUNDER_RATE)]
    blunder_rate: f64,

    /// Let the engine take X and move first
    #[arg(long)]
    engine_first: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if !(0.0..=1.0).contains(&cli.blunder_rate) {
        bail!("blunder rate must be between 0.0 and 1.0");
    }

    let engine_mark = if cli.engine_first { Player::X } else { Player::O };
    let engine = Searcher::with_blunder_rate(engine_mark, cli.blunder_rate);
    info!(?engine_mark, blunder_rate = cli.blunder_rate, "Starting game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let finished = play_game(&engine, &mut lines)?;
        report(&finished);

        print!("Play again? (y/n): ");
        io::stdout().flush()?;
        let Some(answer) = lines.next().transpose()? else {
            break;
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    Ok(())
}

/// Runs one game to completion.
fn play_game(
    engine: &Searcher,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<GameFinished> {
    let mut rng = rand::thread_rng();
    let mut game = GameSetup::new().start(Player::X);

    loop {
        let action = if game.to_move() == engine.mark() {
            let pos = engine.choose_move(game.board(), &mut rng)?;
            debug!(%pos, "Engine move");
            println!("Engine plays {}.", pos);
            Move::new(engine.mark(), pos)
        } else {
            println!("\n{}\n", game.board().display());
            Move::new(game.to_move(), prompt_move(&game, lines)?)
        };

        match game.make_move(action)? {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(finished) => return Ok(finished),
        }
    }
}

/// Prompts until the human enters a legal move.
fn prompt_move(
    game: &GameInProgress,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Position> {
    loop {
        print!("Your move ({}), cell 1-9 or name: ", game.to_move());
        io::stdout().flush()?;

        let Some(input) = lines.next().transpose()? else {
            bail!("input closed");
        };
        let trimmed = input.trim();

        // Cells are shown 1-based on the board; names also work.
        let parsed = match trimmed.parse::<usize>() {
            Ok(n) => n.checked_sub(1).and_then(Position::from_index),
            Err(_) => Position::from_label_or_number(trimmed),
        };

        match parsed {
            Some(pos) if game.board().is_empty(pos) => return Ok(pos),
            Some(pos) => println!("{} is already taken.", pos),
            None => println!("Unrecognized move: {trimmed}"),
        }
    }
}

/// Prints the final board, verdict, and winning line.
fn report(finished: &GameFinished) {
    println!("\n{}\n", finished.board().display());
    println!("{}!", finished.verdict());

    if let (Verdict::Winner(_), Some(line)) = (finished.verdict(), finished.winning_line()) {
        let labels: Vec<&str> = line.iter().map(|pos| pos.label()).collect();
        println!("Winning line: {}", labels.join(", "));
    }
}
