use tracing::trace;

use crate::types::*;

/// The 8×8 grid. Row 0 is rank 8, so the white pieces start on rows 6 and 7.
///
/// The board owns every piece it holds. Besides the grid it remembers the
/// most recently applied move, which is all the history en passant needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    last_move: Option<LastMove>,
}

/// Undo record returned by [`Board::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub kind: MoveKind,
    /// The mover as it was before the move (unpromoted, prior `has_moved`).
    pub moved: Piece,
    /// Captured piece and the square it was taken from.
    pub captured: Option<(Square, Piece)>,
    /// Castling rook as it was before the move.
    pub rook: Option<Piece>,
    pub prev_last_move: Option<LastMove>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            last_move: None,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                b.cells[home][col] = Some(Piece::new(color, kind));
                b.cells[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn set_last_move(&mut self, last: Option<LastMove>) {
        self.last_move = last;
    }

    /// Every piece of `color` with its square, rank 8 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |s| match self.piece_at(s) {
            Some(pc) if pc.color == color => Some((s, pc)),
            _ => None,
        })
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// If the board has no such king. Legal play never removes a king, so this
    /// only happens on a corrupted board.
    pub fn king_square(&self, color: Color) -> Square {
        Square::all()
            .find(|&s| {
                self.piece_at(s)
                    .is_some_and(|pc| pc.is(color, PieceKind::King))
            })
            .unwrap_or_else(|| panic!("board has no {color} king"))
    }

    /// Plays a move that has already been classified. The move is not
    /// validated here; see `legality::check_move`.
    ///
    /// Promotion is not performed: the pawn lands as a pawn and the caller
    /// resolves the replacement afterwards.
    pub fn apply(&mut self, mv: Move, kind: MoveKind) -> AppliedMove {
        let moved = self.take_piece(mv.from).expect("no piece on from-square");
        let prev_last_move = self.last_move;

        let captured = match kind {
            MoveKind::EnPassant { captured } => self.take_piece(captured).map(|pc| (captured, pc)),
            _ => self.take_piece(mv.to).map(|pc| (mv.to, pc)),
        };

        let mut rook = None;
        if let MoveKind::Castle { rook_from, rook_to } = kind {
            let r = self.take_piece(rook_from).expect("no rook on castling square");
            self.set_piece(
                rook_to,
                Some(Piece {
                    has_moved: true,
                    ..r
                }),
            );
            rook = Some(r);
        }

        let landed = Piece {
            has_moved: true,
            ..moved
        };
        self.set_piece(mv.to, Some(landed));
        self.last_move = Some(LastMove {
            from: mv.from,
            to: mv.to,
            piece: landed,
        });

        trace!(%mv, ?kind, "applied");
        AppliedMove {
            mv,
            kind,
            moved,
            captured,
            rook,
            prev_last_move,
        }
    }

    /// Reverts `record`, which must be the most recent move applied to this
    /// board. Restores captured pieces, the castling rook, the unpromoted
    /// mover and every flag the move changed.
    pub fn undo(&mut self, record: AppliedMove) {
        let AppliedMove {
            mv,
            kind,
            moved,
            captured,
            rook,
            prev_last_move,
        } = record;

        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(moved));

        if let (MoveKind::Castle { rook_from, rook_to }, Some(r)) = (kind, rook) {
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, Some(r));
        }

        if let Some((at, pc)) = captured {
            self.set_piece(at, Some(pc));
        }

        self.last_move = prev_last_move;
        trace!(%mv, "undone");
    }

    /// Piece placement field of a FEN string (rank 8 first).
    pub fn to_fen_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8u8 {
            let mut gap = 0;
            for col in 0..8u8 {
                let Some(s) = Square::new(row, col) else {
                    continue;
                };
                match self.piece_at(s) {
                    None => gap += 1,
                    Some(pc) => {
                        if gap > 0 {
                            out.push(char::from(b'0' + gap));
                            gap = 0;
                        }
                        let c = pc.kind.letter();
                        out.push(match pc.color {
                            Color::White => c,
                            Color::Black => c.to_ascii_lowercase(),
                        });
                    }
                }
            }
            if gap > 0 {
                out.push(char::from(b'0' + gap));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
