//! The turn loop: prompt, read a line, play it, report.

use std::io::{self, BufRead, Write};

use chess_rules::{Color, Game, GameStatus};
use tracing::{debug, info};

use crate::input::{Command, parse_command};
use crate::render::render_board;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    DrawAgreed,
    Resigned { winner: Color },
    /// Input ran out before the game was decided.
    Abandoned,
}

pub struct Session<R, W> {
    game: Game,
    to_move: Color,
    /// Side whose last move carried `draw?`, until the opponent answers.
    draw_offered_by: Option<Color>,
    show_board: bool,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, to_move: Color, input: R, out: W) -> Self {
        Self {
            game,
            to_move,
            draw_offered_by: None,
            show_board: true,
            input,
            out,
        }
    }

    pub fn show_board(mut self, show: bool) -> Self {
        self.show_board = show;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self) -> io::Result<Outcome> {
        self.print_board()?;
        if let Some(end) = self.report(self.game.status(self.to_move))? {
            return Ok(end);
        }

        let mut line = String::new();
        loop {
            write!(self.out, "{}'s move: ", self.to_move)?;
            self.out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                info!(side = %self.to_move, "input closed");
                return Ok(Outcome::Abandoned);
            }

            let command = match parse_command(&line) {
                Ok(c) => c,
                Err(err) => {
                    debug!(input = line.trim(), %err, "unreadable move");
                    self.illegal()?;
                    continue;
                }
            };

            match command {
                Command::Resign => {
                    let winner = self.to_move.other();
                    writeln!(self.out, "{winner} wins")?;
                    info!(%winner, "resignation");
                    return Ok(Outcome::Resigned { winner });
                }
                Command::AcceptDraw => {
                    if self.draw_offered_by != Some(self.to_move.other()) {
                        self.illegal()?;
                        continue;
                    }
                    writeln!(self.out, "Draw")?;
                    info!("draw agreed");
                    return Ok(Outcome::DrawAgreed);
                }
                Command::Move { mv, offers_draw } => {
                    let Ok(played) = self.game.play(mv, self.to_move) else {
                        self.illegal()?;
                        continue;
                    };
                    self.draw_offered_by = offers_draw.then_some(self.to_move);

                    writeln!(self.out)?;
                    self.print_board()?;
                    self.to_move = self.to_move.other();
                    if let Some(end) = self.report(played.opponent_status)? {
                        return Ok(end);
                    }
                }
            }
        }
    }

    /// Prints the status of the side about to move and returns the outcome
    /// if the game is over.
    fn report(&mut self, status: GameStatus) -> io::Result<Option<Outcome>> {
        match status {
            GameStatus::Ongoing => Ok(None),
            GameStatus::Check => {
                writeln!(self.out, "Check")?;
                Ok(None)
            }
            GameStatus::Checkmate => {
                let winner = self.to_move.other();
                writeln!(self.out, "Checkmate")?;
                writeln!(self.out, "{winner} wins")?;
                info!(%winner, "checkmate");
                Ok(Some(Outcome::Checkmate { winner }))
            }
            GameStatus::Stalemate => {
                writeln!(self.out, "Stalemate")?;
                writeln!(self.out, "Draw")?;
                info!("stalemate");
                Ok(Some(Outcome::Stalemate))
            }
        }
    }

    fn illegal(&mut self) -> io::Result<()> {
        writeln!(self.out, "Illegal move, try again")
    }

    fn print_board(&mut self) -> io::Result<()> {
        if self.show_board {
            write!(self.out, "{}", render_board(self.game.board()))?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
