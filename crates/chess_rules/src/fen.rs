//! Forsyth-Edwards Notation reader used by tests and for starting a game
//! from an arbitrary position.
//!
//! The board has no castling-rights or en-passant fields of its own, so they
//! are translated: a missing castling right marks the king or rook as moved,
//! and an en-passant square becomes the board's last move. Fields after the
//! piece placement are optional.

use crate::{board::Board, check::in_check, error::FenError, types::*};

/// Parses a FEN string into a board and the side to move.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(FenError::Empty)?;
    let side_part = parts.next();
    let castle_part = parts.next();
    let ep_part = parts.next();

    let mut board = parse_placement(placement)?;

    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces(color)
            .filter(|(_, pc)| pc.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(FenError::KingCount(color));
        }
    }

    let side = match side_part {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(FenError::SideToMove(other.to_string())),
    };

    if let Some(rights) = castle_part {
        apply_castling_field(&mut board, rights)?;
    }
    if let Some(ep) = ep_part {
        apply_en_passant_field(&mut board, ep, side)?;
    }

    // The side that just moved cannot be left in check.
    if in_check(&board, side.other()) {
        return Err(FenError::OpponentInCheck(side.other()));
    }

    Ok((board, side))
}

impl Board {
    /// Board part of a FEN string; the side to move is discarded.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        parse_fen(fen).map(|(board, _)| board)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col: u8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                col += d as u8;
                if d == 0 || col > 8 {
                    return Err(FenError::RankWidth { rank: 8 - row });
                }
                continue;
            }
            let kind = PieceKind::from_letter(ch).ok_or(FenError::PieceChar(ch))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let s = Square::new(row as u8, col).ok_or(FenError::RankWidth { rank: 8 - row })?;
            let pc = Piece {
                has_moved: !on_initial_square(kind, color, s),
                ..Piece::new(color, kind)
            };
            board.set_piece(s, Some(pc));
            col += 1;
        }
        if col != 8 {
            return Err(FenError::RankWidth { rank: 8 - row });
        }
    }
    Ok(board)
}

/// Whether a piece of this kind could still be unmoved on `s`. Only pawns,
/// kings and rooks care.
fn on_initial_square(kind: PieceKind, color: Color, s: Square) -> bool {
    match kind {
        PieceKind::Pawn => s.row() == color.pawn_row(),
        PieceKind::King => s.row() == color.home_row() && s.col() == 4,
        PieceKind::Rook => s.row() == color.home_row() && (s.col() == 0 || s.col() == 7),
        _ => true,
    }
}

fn apply_castling_field(board: &mut Board, rights: &str) -> Result<(), FenError> {
    if rights != "-" && !rights.chars().all(|c| "KQkq".contains(c)) {
        return Err(FenError::Castling(rights.to_string()));
    }
    for (color, king_side, queen_side) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
        let home = color.home_row();
        let has_k = rights.contains(king_side);
        let has_q = rights.contains(queen_side);
        for (col, keep) in [(7, has_k), (0, has_q), (4, has_k || has_q)] {
            if keep {
                continue;
            }
            let Some(s) = Square::new(home, col) else {
                continue;
            };
            if let Some(pc) = board.piece_at(s)
                && pc.color == color
            {
                board.set_piece(
                    s,
                    Some(Piece {
                        has_moved: true,
                        ..pc
                    }),
                );
            }
        }
    }
    Ok(())
}

/// Rebuilds the double step that made `ep` capturable as the board's last
/// move.
fn apply_en_passant_field(board: &mut Board, ep: &str, side: Color) -> Result<(), FenError> {
    if ep == "-" {
        return Ok(());
    }
    let invalid = || FenError::EnPassant(ep.to_string());
    let target = Square::parse(ep).ok_or_else(invalid)?;
    let mover = side.other();
    // The skipped square sits one row ahead of the mover's pawn row.
    if target.row() as i8 != mover.pawn_row() as i8 + mover.forward() {
        return Err(invalid());
    }
    let from = target.offset(-mover.forward(), 0).ok_or_else(invalid)?;
    let to = target.offset(mover.forward(), 0).ok_or_else(invalid)?;
    let piece = board
        .piece_at(to)
        .filter(|pc| pc.is(mover, PieceKind::Pawn))
        .ok_or_else(invalid)?;
    if !board.is_empty(from) || !board.is_empty(target) {
        return Err(invalid());
    }
    board.set_last_move(Some(LastMove { from, to, piece }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_roundtrip() {
        let (board, side) =
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(side, Color::White);
        assert_eq!(board, Board::startpos());
        assert_eq!(
            board.to_fen_placement(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_placement_only() {
        let (board, side) = parse_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(side, Color::White);
        assert!(!board.piece_at(sq("e1")).unwrap().has_moved);
    }

    #[test]
    fn test_castling_field_marks_moved() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert!(!board.piece_at(sq("h1")).unwrap().has_moved);
        assert!(board.piece_at(sq("a1")).unwrap().has_moved);
        assert!(!board.piece_at(sq("e1")).unwrap().has_moved);
        assert!(board.piece_at(sq("h8")).unwrap().has_moved);
        assert!(!board.piece_at(sq("a8")).unwrap().has_moved);

        let none = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        assert!(none.piece_at(sq("e1")).unwrap().has_moved);
        assert!(none.piece_at(sq("e8")).unwrap().has_moved);
    }

    #[test]
    fn test_en_passant_field_sets_last_move() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .unwrap();
        let last = board.last_move().unwrap();
        assert_eq!(last.from, sq("d7"));
        assert_eq!(last.to, sq("d5"));
        assert!(last.is_double_step());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(parse_fen(""), Err(FenError::Empty));
        assert_eq!(parse_fen("8/8/8/8/8/8/8"), Err(FenError::RankCount(7)));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K2"),
            Err(FenError::RankWidth { .. })
        ));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X3"),
            Err(FenError::PieceChar('X'))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3"),
            Err(FenError::KingCount(Color::Black))
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x"),
            Err(FenError::SideToMove(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w KX"),
            Err(FenError::Castling(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - e3"),
            Err(FenError::EnPassant(_))
        ));
    }

    #[test]
    fn test_rejects_side_not_to_move_in_check() {
        // black king attacked by the rook while white is to move
        assert!(parse_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_ok());
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1"),
            Err(FenError::OpponentInCheck(Color::Black))
        );
    }
}
