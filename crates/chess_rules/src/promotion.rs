use crate::{
    board::{AppliedMove, Board},
    types::*,
};

pub fn is_promotion_eligible(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
}

/// The piece a pawn of `color` turns into. Anything other than a rook,
/// knight, bishop or queen (including no choice at all) yields a queen.
pub fn promoted_piece(color: Color, requested: Option<PieceKind>) -> Piece {
    let kind = match requested {
        Some(k @ (PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen)) => k,
        _ => PieceKind::Queen,
    };
    Piece::new(color, kind)
}

/// Reads the promotion suffix letter (`r`, `n`, `b`, `q`, any case).
pub fn kind_from_char(c: char) -> Option<PieceKind> {
    match PieceKind::from_letter(c)? {
        k @ (PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen) => Some(k),
        _ => None,
    }
}

/// Replaces the pawn of a committed move with its promoted piece when the
/// move reached the last row. Returns the new piece.
///
/// [`Board::undo`] restores the pawn from the record, so a promoted move can
/// still be taken back.
pub fn resolve(board: &mut Board, record: &AppliedMove, requested: Option<PieceKind>) -> Option<Piece> {
    if !is_promotion_eligible(record.moved, record.mv.to) {
        return None;
    }
    let pc = promoted_piece(record.moved.color, requested);
    board.set_piece(record.mv.to, Some(pc));
    Some(pc)
}
