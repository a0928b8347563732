use crate::{
    board::Board, check::is_square_attacked, check::in_check, error::IllegalMove, pieces,
    rules::RuleSet, types::*,
};

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Validates `mv` for `side` and returns how it would change the board.
///
/// Works on a scratch copy; `board` is never touched.
pub fn check_move(
    board: &Board,
    mv: Move,
    side: Color,
    rules: &RuleSet,
) -> Result<MoveKind, IllegalMove> {
    let mut scratch = *board;
    check_move_in_place(&mut scratch, mv, side, rules)
}

pub fn is_legal(board: &Board, mv: Move, side: Color, rules: &RuleSet) -> bool {
    check_move(board, mv, side, rules).is_ok()
}

/// Same as [`check_move`] but probes self-check by applying and undoing the
/// move on `board` itself. The board is identical before and after the call.
pub fn check_move_in_place(
    board: &mut Board,
    mv: Move,
    side: Color,
    rules: &RuleSet,
) -> Result<MoveKind, IllegalMove> {
    let piece = board.piece_at(mv.from).ok_or(IllegalMove::NoPiece(mv.from))?;
    if piece.color != side {
        return Err(IllegalMove::WrongSide {
            square: mv.from,
            owner: piece.color,
        });
    }
    if board.piece_at(mv.to).is_some_and(|pc| pc.color == side) {
        return Err(IllegalMove::OwnPieceOnTarget(mv.to));
    }

    let kind = pieces::shape(board, piece, mv.from, mv.to).ok_or(IllegalMove::BadShape {
        from: mv.from,
        to: mv.to,
    })?;
    if pieces::is_obstructed(board, piece.kind, mv.from, mv.to) {
        return Err(IllegalMove::Obstructed {
            from: mv.from,
            to: mv.to,
        });
    }
    if matches!(kind, MoveKind::Castle { .. })
        && !rules.castle_through_check
        && !castling_path_safe(board, side, mv.from, mv.to)
    {
        return Err(IllegalMove::CastlingThroughCheck);
    }

    let record = board.apply(mv, kind);
    let exposed = in_check(board, side);
    board.undo(record);

    if exposed {
        Err(IllegalMove::LeavesKingInCheck)
    } else {
        Ok(kind)
    }
}

/// The king's start square, the square it crosses and its destination must
/// all be free of enemy attack.
fn castling_path_safe(board: &Board, side: Color, from: Square, to: Square) -> bool {
    let enemy = side.other();
    std::iter::once(from)
        .chain(pieces::between(from, to))
        .chain(std::iter::once(to))
        .all(|s| !is_square_attacked(board, s, enemy))
}

/// Every square the piece on `from` may legally move to. Empty if `from` is
/// empty.
pub fn legal_destinations(board: &Board, from: Square, rules: &RuleSet) -> Vec<Square> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut scratch = *board;
    Square::all()
        .filter(|&to| check_move_in_place(&mut scratch, Move::new(from, to), pc.color, rules).is_ok())
        .collect()
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Pawn moves onto the last row appear once per promotion choice.
pub fn legal_moves(board: &Board, side: Color, rules: &RuleSet) -> Vec<Move> {
    let mut tmp = *board;
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, side, rules, &mut out);
    out.into_iter().map(|(mv, _)| mv).collect()
}

/// Generate all legal moves with their classification into the provided
/// buffer, reusing it across calls.
pub fn legal_moves_into(
    board: &mut Board,
    side: Color,
    rules: &RuleSet,
    out: &mut Vec<(Move, MoveKind)>,
) {
    out.clear();
    let own: Vec<(Square, Piece)> = board.pieces(side).collect();
    for (from, pc) in own {
        for to in Square::all() {
            let Ok(kind) = check_move_in_place(board, Move::new(from, to), side, rules) else {
                continue;
            };
            if pc.kind == PieceKind::Pawn && to.row() == side.promotion_row() {
                for promo in PROMOTION_CHOICES {
                    out.push((Move::with_promotion(from, to, promo), kind));
                }
            } else {
                out.push((Move::new(from, to), kind));
            }
        }
    }
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
