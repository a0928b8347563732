use crate::{
    board::Board, legality::check_move_in_place, pieces, rules::RuleSet, types::*,
};

/// Where a side stands when it is about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(from, _)| pieces::attacks(board, from, target))
}

/// Whether `side`'s king is attacked. Panics if `side` has no king.
pub fn in_check(board: &Board, side: Color) -> bool {
    is_square_attacked(board, board.king_square(side), side.other())
}

/// Whether `side` has at least one legal move. Searches a scratch copy with
/// apply/undo, so `board` is left exactly as it was.
pub fn has_legal_move(board: &Board, side: Color, rules: &RuleSet) -> bool {
    let mut scratch = *board;
    let own: Vec<Square> = scratch.pieces(side).map(|(s, _)| s).collect();
    let found = own.into_iter().any(|from| {
        Square::all()
            .any(|to| check_move_in_place(&mut scratch, Move::new(from, to), side, rules).is_ok())
    });
    debug_assert_eq!(&scratch, board, "legal move search left the board modified");
    found
}

pub fn status(board: &Board, side: Color, rules: &RuleSet) -> GameStatus {
    let checked = in_check(board, side);
    if has_legal_move(board, side, rules) {
        return if checked {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        };
    }
    if checked || rules.stalemate_is_checkmate {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

pub fn is_checkmate(board: &Board, side: Color, rules: &RuleSet) -> bool {
    status(board, side, rules) == GameStatus::Checkmate
}

pub fn is_stalemate(board: &Board, side: Color, rules: &RuleSet) -> bool {
    status(board, side, rules) == GameStatus::Stalemate
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
