//! Error types for the rules engine.

use crate::types::{Color, Square};

/// Why a requested move was refused. The board is unchanged whenever one of
/// these is returned; callers are free to treat every variant the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("the piece on {square} belongs to {owner}")]
    WrongSide { square: Square, owner: Color },

    #[error("{0} is occupied by a piece of the same colour")]
    OwnPieceOnTarget(Square),

    #[error("the piece cannot move from {from} to {to}")]
    BadShape { from: Square, to: Square },

    #[error("the path from {from} to {to} is blocked")]
    Obstructed { from: Square, to: Square },

    #[error("the king may not castle out of, through or into check")]
    CastlingThroughCheck,

    #[error("the move would leave the king in check")]
    LeavesKingInCheck,
}

/// Errors from reading a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("FEN is empty")]
    Empty,

    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 squares")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    PieceChar(char),

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling field '{0}'")]
    Castling(String),

    #[error("invalid en-passant field '{0}'")]
    EnPassant(String),

    #[error("expected exactly one {0} king")]
    KingCount(Color),

    #[error("{0} is in check although it is not their move")]
    OpponentInCheck(Color),
}
