use serde::{Deserialize, Serialize};

/// Optional relaxations of the laws of chess. Both default to the correct
/// rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSet {
    /// Allow castling while in check or across an attacked square.
    pub castle_through_check: bool,
    /// Report a side with no legal move as checkmated even when its king is
    /// not attacked.
    pub stalemate_is_checkmate: bool,
}

impl RuleSet {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Both relaxations on.
    pub fn legacy() -> Self {
        Self {
            castle_through_check: true,
            stalemate_is_checkmate: true,
        }
    }
}
