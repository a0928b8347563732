use std::fmt::Write;

use chess_rules::{Board, Square};

/// Draws the board rank 8 first. Pieces print as `wP`/`bK`, empty dark
/// squares as `##`, with rank numbers on the right and files underneath.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for sq in Square::all() {
        match board.piece_at(sq) {
            Some(pc) => {
                let _ = write!(out, "{pc} ");
            }
            None if is_light(sq) => out.push_str("   "),
            None => out.push_str("## "),
        }
        if sq.col() == 7 {
            out.push(sq.rank_char());
            out.push('\n');
        }
    }
    for file in 'a'..='h' {
        let _ = write!(out, " {file} ");
    }
    out.push('\n');
    out
}

// a8 is a light square
fn is_light(sq: Square) -> bool {
    sq.row() % 2 == sq.col() % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_layout() {
        let text = render_board(&Board::startpos());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "bR bN bB bQ bK bB bN bR 8");
        assert_eq!(lines[1], "bP bP bP bP bP bP bP bP 7");
        assert_eq!(lines[2], "   ##    ##    ##    ## 6");
        assert_eq!(lines[3], "##    ##    ##    ##    5");
        assert_eq!(lines[7], "wR wN wB wQ wK wB wN wR 1");
        assert_eq!(lines[8], " a  b  c  d  e  f  g  h ");
    }
}
