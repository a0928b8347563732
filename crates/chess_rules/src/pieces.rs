//! Per-kind movement rules.
//!
//! Each piece kind has a *shape* (does the offset match the way it moves) and an
//! obstruction rule (must the squares in between be empty). Everything is
//! dispatched through a `match` on [`PieceKind`], so a rule added for one kind
//! has to be considered for all of them.

use crate::{board::Board, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

pub fn knight_shape(from: Square, to: Square) -> bool {
    KNIGHT_DELTAS.contains(&delta(from, to))
}

pub fn bishop_shape(from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    dr != 0 && dr.abs() == dc.abs()
}

pub fn rook_shape(from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    (dr == 0) != (dc == 0)
}

pub fn queen_shape(from: Square, to: Square) -> bool {
    bishop_shape(from, to) || rook_shape(from, to)
}

pub fn king_step(from: Square, to: Square) -> bool {
    KING_DELTAS.contains(&delta(from, to))
}

/// Squares strictly between `from` and `to` on a shared rank, file or
/// diagonal. Empty when the two squares are not aligned or are adjacent.
pub fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (dr, dc) = delta(from, to);
    let aligned = rook_shape(from, to) || bishop_shape(from, to);
    let steps = if aligned { dr.abs().max(dc.abs()) - 1 } else { 0 };
    let (sr, sc) = (dr.signum(), dc.signum());
    (1..=steps).filter_map(move |i| from.offset(sr * i, sc * i))
}

/// Whether a piece of `kind` going from `from` to `to` is blocked by an
/// intervening piece. Knights jump and kings step, so they are never blocked;
/// the castling path is checked by the king's shape.
pub fn is_obstructed(board: &Board, kind: PieceKind, from: Square, to: Square) -> bool {
    match kind {
        PieceKind::Knight | PieceKind::King => false,
        PieceKind::Pawn | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            between(from, to).any(|s| !board.is_empty(s))
        }
    }
}

fn plain(board: &Board, to: Square) -> MoveKind {
    if board.is_empty(to) {
        MoveKind::Quiet
    } else {
        MoveKind::Capture
    }
}

/// Matches the move against `piece`'s movement pattern and classifies it.
///
/// Occupancy only matters where the pattern itself depends on it (pawn
/// pushes and captures, en passant, castling). Own-colour targets and
/// obstruction are checked separately.
pub fn shape(board: &Board, piece: Piece, from: Square, to: Square) -> Option<MoveKind> {
    match piece.kind {
        PieceKind::Pawn => pawn_shape(board, piece, from, to),
        PieceKind::Knight => knight_shape(from, to).then(|| plain(board, to)),
        PieceKind::Bishop => bishop_shape(from, to).then(|| plain(board, to)),
        PieceKind::Rook => rook_shape(from, to).then(|| plain(board, to)),
        PieceKind::Queen => queen_shape(from, to).then(|| plain(board, to)),
        PieceKind::King => king_shape(board, piece, from, to),
    }
}

fn pawn_shape(board: &Board, pawn: Piece, from: Square, to: Square) -> Option<MoveKind> {
    let (dr, dc) = delta(from, to);
    let fwd = pawn.color.forward();
    let target = board.piece_at(to);

    if dc == 0 && dr == fwd {
        return target.is_none().then_some(MoveKind::Quiet);
    }
    if dc == 0 && dr == 2 * fwd {
        // the skipped square is covered by `is_obstructed`
        let unmoved = !pawn.has_moved && from.row() == pawn.color.pawn_row();
        return (unmoved && target.is_none()).then_some(MoveKind::DoubleStep);
    }
    if dc.abs() == 1 && dr == fwd {
        return match target {
            Some(pc) if pc.color != pawn.color => Some(MoveKind::Capture),
            Some(_) => None,
            None => en_passant_victim(board, pawn.color, from, to)
                .map(|captured| MoveKind::EnPassant { captured }),
        };
    }
    None
}

/// Square of the enemy pawn a diagonal step onto the empty `to` would take en
/// passant, if the previous move makes that capture available.
fn en_passant_victim(board: &Board, color: Color, from: Square, to: Square) -> Option<Square> {
    let last = board.last_move()?;
    if !last.is_double_step() || last.piece.color == color {
        return None;
    }
    if last.to.row() != from.row() || last.to.col() != to.col() {
        return None;
    }
    board
        .piece_at(last.to)
        .is_some_and(|pc| pc.is(color.other(), PieceKind::Pawn))
        .then_some(last.to)
}

fn king_shape(board: &Board, king: Piece, from: Square, to: Square) -> Option<MoveKind> {
    if king_step(from, to) {
        return Some(plain(board, to));
    }
    let (dr, dc) = delta(from, to);
    if dr == 0 && dc.abs() == 2 {
        return castle_shape(board, king, from, to);
    }
    None
}

/// Castling geometry and preconditions that do not involve attacks: unmoved
/// king on its home row, unmoved rook in the corner on the side of travel,
/// nothing between them.
fn castle_shape(board: &Board, king: Piece, from: Square, to: Square) -> Option<MoveKind> {
    let home = king.color.home_row();
    if king.has_moved || from.row() != home || to.row() != home {
        return None;
    }
    let (rook_col, step) = if to.col() > from.col() { (7, 1) } else { (0, -1) };
    let rook_from = Square::new(home, rook_col)?;
    let rook = board.piece_at(rook_from)?;
    if !rook.is(king.color, PieceKind::Rook) || rook.has_moved {
        return None;
    }
    if between(from, rook_from).any(|s| !board.is_empty(s)) {
        return None;
    }
    let rook_to = from.offset(0, step)?;
    Some(MoveKind::Castle { rook_from, rook_to })
}

/// Whether the piece on `from` attacks `target`, whatever stands there.
///
/// Differs from [`shape`] in two places: pawns attack diagonally even onto
/// empty squares, and castling is never an attack.
pub fn attacks(board: &Board, from: Square, target: Square) -> bool {
    let Some(pc) = board.piece_at(from) else {
        return false;
    };
    match pc.kind {
        PieceKind::Pawn => {
            let (dr, dc) = delta(from, target);
            dr == pc.color.forward() && dc.abs() == 1
        }
        PieceKind::Knight => knight_shape(from, target),
        PieceKind::King => king_step(from, target),
        PieceKind::Bishop => {
            bishop_shape(from, target) && !is_obstructed(board, pc.kind, from, target)
        }
        PieceKind::Rook => rook_shape(from, target) && !is_obstructed(board, pc.kind, from, target),
        PieceKind::Queen => {
            queen_shape(from, target) && !is_obstructed(board, pc.kind, from, target)
        }
    }
}

#[cfg(test)]
#[path = "pieces_tests.rs"]
mod pieces_tests;
