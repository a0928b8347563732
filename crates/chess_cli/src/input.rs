//! Parsing of one line typed at the move prompt.
//!
//! Accepted forms (case-insensitive):
//!
//! ```text
//! e2 e4           move
//! e7 e8 n         move with promotion choice (r, n, b, q)
//! e2 e4 draw?     move and offer a draw
//! draw            accept the opponent's offer
//! resign
//! ```

use chess_rules::{Move, PieceKind, Square, promotion};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move { mv: Move, offers_draw: bool },
    AcceptDraw,
    Resign,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("bad square `{0}`")]
    Square(String),
    #[error("source and destination are the same square")]
    NullMove,
    #[error("unknown promotion piece `{0}`")]
    Promotion(String),
    #[error("unexpected `{0}`")]
    Trailing(String),
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim().to_ascii_lowercase();
    let mut tokens = line.split_whitespace();

    let first = tokens.next().ok_or(ParseError::Empty)?;
    match first {
        "resign" | "draw" => {
            if let Some(extra) = tokens.next() {
                return Err(ParseError::Trailing(extra.to_string()));
            }
            return Ok(if first == "resign" {
                Command::Resign
            } else {
                Command::AcceptDraw
            });
        }
        _ => {}
    }

    let from = parse_square(first)?;
    let to = parse_square(tokens.next().ok_or(ParseError::Empty)?)?;
    if from == to {
        return Err(ParseError::NullMove);
    }

    let mut mv = Move::new(from, to);
    let mut offers_draw = false;
    let mut next = tokens.next();

    if let Some(tok) = next
        && tok != "draw?"
    {
        mv.promotion = Some(parse_promotion(tok)?);
        next = tokens.next();
    }
    if let Some(tok) = next {
        if tok != "draw?" {
            return Err(ParseError::Trailing(tok.to_string()));
        }
        offers_draw = true;
    }
    if let Some(extra) = tokens.next() {
        return Err(ParseError::Trailing(extra.to_string()));
    }

    Ok(Command::Move { mv, offers_draw })
}

fn parse_square(tok: &str) -> Result<Square, ParseError> {
    Square::parse(tok).ok_or_else(|| ParseError::Square(tok.to_string()))
}

fn parse_promotion(tok: &str) -> Result<PieceKind, ParseError> {
    let mut chars = tok.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            promotion::kind_from_char(c).ok_or_else(|| ParseError::Promotion(tok.to_string()))
        }
        _ => Err(ParseError::Promotion(tok.to_string())),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
