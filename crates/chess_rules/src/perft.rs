use crate::{
    board::Board, legality::legal_moves_into, promotion, rules::RuleSet, types::*,
};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with
/// `side` to move first. The board is restored before returning.
pub fn perft(board: &mut Board, side: Color, depth: u8, rules: &RuleSet) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(
        board: &mut Board,
        side: Color,
        depth: u8,
        rules: &RuleSet,
        layers: &mut [Vec<(Move, MoveKind)>],
    ) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(board, side, rules, buf);

        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for &(mv, kind) in buf.iter() {
            let record = board.apply(mv, kind);
            promotion::resolve(board, &record, mv.promotion);
            nodes += inner(board, side.other(), depth - 1, rules, rest);
            board.undo(record);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, side, depth, rules, &mut layers[..])
}
