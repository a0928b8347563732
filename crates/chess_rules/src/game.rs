//! The rules engine as seen by a turn loop.
//!
//! A [`Game`] owns the board and the rule switches. It does not know whose
//! turn it is: the caller says which side is moving and gets back either the
//! applied move with the opponent's resulting status, or the reason it was
//! refused with the board untouched.

use tracing::{debug, info};

use crate::{
    board::Board,
    check::{self, GameStatus},
    error::IllegalMove,
    legality, promotion,
    rules::RuleSet,
    types::*,
};

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    /// Piece the pawn was replaced by, for moves onto the last row.
    pub promoted: Option<Piece>,
    /// Status of the side that moves next.
    pub opponent_status: GameStatus,
}

impl MoveOutcome {
    pub fn gives_check(&self) -> bool {
        matches!(
            self.opponent_status,
            GameStatus::Check | GameStatus::Checkmate
        )
    }

    pub fn is_checkmate(&self) -> bool {
        self.opponent_status == GameStatus::Checkmate
    }
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    rules: RuleSet,
}

impl Game {
    /// Standard starting position, standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            board: Board::startpos(),
            rules,
        }
    }

    pub fn from_board(board: Board, rules: RuleSet) -> Self {
        Self { board, rules }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates the move for `side` and, if legal, applies it and resolves
    /// promotion (queen when `promotion` is `None`).
    pub fn validate_and_apply(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        side: Color,
    ) -> Result<MoveOutcome, IllegalMove> {
        let mv = Move {
            from,
            to,
            promotion,
        };
        self.play(mv, side)
    }

    pub fn play(&mut self, mv: Move, side: Color) -> Result<MoveOutcome, IllegalMove> {
        let kind = legality::check_move_in_place(&mut self.board, mv, side, &self.rules)
            .inspect_err(|reason| debug!(%mv, %side, %reason, "move rejected"))?;

        let record = self.board.apply(mv, kind);
        let promoted = promotion::resolve(&mut self.board, &record, mv.promotion);
        let opponent_status = check::status(&self.board, side.other(), &self.rules);

        info!(%mv, %side, ?kind, ?opponent_status, "move committed");
        Ok(MoveOutcome {
            kind,
            captured: record.captured.map(|(_, pc)| pc),
            promoted,
            opponent_status,
        })
    }

    pub fn is_legal(&self, mv: Move, side: Color) -> bool {
        legality::is_legal(&self.board, mv, side, &self.rules)
    }

    pub fn legal_moves(&self, side: Color) -> Vec<Move> {
        legality::legal_moves(&self.board, side, &self.rules)
    }

    pub fn in_check(&self, side: Color) -> bool {
        check::in_check(&self.board, side)
    }

    pub fn is_checkmate(&self, side: Color) -> bool {
        check::is_checkmate(&self.board, side, &self.rules)
    }

    pub fn is_stalemate(&self, side: Color) -> bool {
        check::is_stalemate(&self.board, side, &self.rules)
    }

    pub fn status(&self, side: Color) -> GameStatus {
        check::status(&self.board, side, &self.rules)
    }
}
