//! Rules engine for two-player chess.
//!
//! Given a board and a proposed move, the engine decides whether the move is
//! legal, applies it, and reports check, checkmate and stalemate. It never
//! chooses moves itself and keeps no notion of whose turn it is: every call
//! names the moving side.
//!
//! ```
//! use chess_rules::{Color, Game, GameStatus, sq};
//!
//! let mut game = Game::new();
//! let outcome = game
//!     .validate_and_apply(sq("e2"), sq("e4"), None, Color::White)
//!     .unwrap();
//! assert_eq!(outcome.opponent_status, GameStatus::Ongoing);
//! assert!(game.board().piece_at(sq("e2")).is_none());
//! ```

pub mod board;
pub mod check;
pub mod error;
pub mod fen;
pub mod game;
pub mod legality;
pub mod perft;
pub mod pieces;
pub mod promotion;
pub mod rules;
pub mod types;

// Re-export the rules surface
pub use board::*;
pub use check::*;
pub use error::*;
pub use fen::parse_fen;
pub use game::*;
pub use legality::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;
