use std::io::Cursor;

use super::*;
use chess_rules::{Board, PieceKind, RuleSet, sq};

fn run_lines(game: Game, to_move: Color, lines: &str) -> (Outcome, String, Game) {
    let mut out = Vec::new();
    let mut session = Session::new(game, to_move, Cursor::new(lines.to_string()), &mut out)
        .show_board(false);
    let outcome = session.run().unwrap();
    let game = session.game().clone();
    drop(session);
    (outcome, String::from_utf8(out).unwrap(), game)
}

#[test]
fn test_fools_mate_session() {
    let (outcome, text, _) = run_lines(Game::new(), Color::White, "f2 f3\ne7 e5\ng2 g4\nd8 h4\n");
    assert_eq!(
        outcome,
        Outcome::Checkmate {
            winner: Color::Black
        }
    );
    assert!(text.contains("White's move: "));
    assert!(text.contains("Black's move: "));
    assert!(text.ends_with("Checkmate\nBlack wins\n"));
}

#[test]
fn test_illegal_input_reprompts_same_side() {
    let (outcome, text, game) = run_lines(Game::new(), Color::White, "e2 e5\nhello\ne7 e5\ne2 e4\n");
    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(text.matches("Illegal move, try again").count(), 3);
    assert_eq!(text.matches("White's move: ").count(), 4);
    assert_eq!(text.matches("Black's move: ").count(), 1);
    assert!(game.board().piece_at(sq("e4")).is_some());
}

#[test]
fn test_resignation() {
    let (outcome, text, _) = run_lines(Game::new(), Color::White, "e2 e4\nresign\n");
    assert_eq!(
        outcome,
        Outcome::Resigned {
            winner: Color::White
        }
    );
    assert!(text.ends_with("White wins\n"));
}

#[test]
fn test_draw_needs_pending_offer() {
    let (outcome, text, _) =
        run_lines(Game::new(), Color::White, "draw\ne2 e4 draw?\ndraw\n");
    assert_eq!(outcome, Outcome::DrawAgreed);
    assert_eq!(text.matches("Illegal move, try again").count(), 1);
    assert!(text.ends_with("Draw\n"));
}

#[test]
fn test_offer_lapses_after_a_reply() {
    let (outcome, text, _) = run_lines(
        Game::new(),
        Color::White,
        "e2 e4 draw?\ne7 e5\ndraw\n",
    );
    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(text.matches("Illegal move, try again").count(), 1);
}

#[test]
fn test_check_and_promotion_choice() {
    let board = Board::from_fen("k7/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let game = Game::from_board(board, RuleSet::standard());
    let (_, text, game) = run_lines(game, Color::White, "e7 e8 r\n");
    let rook = game.board().piece_at(sq("e8")).unwrap();
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(text.contains("Check\n"));
}

#[test]
fn test_stalemate_ends_in_draw() {
    let board = Board::from_fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1").unwrap();
    let game = Game::from_board(board, RuleSet::standard());
    let (outcome, text, _) = run_lines(game, Color::White, "b5 b6\n");
    assert_eq!(outcome, Outcome::Stalemate);
    assert!(text.ends_with("Stalemate\nDraw\n"));
}

#[test]
fn test_board_printed_when_enabled() {
    let mut out = Vec::new();
    let mut session = Session::new(Game::new(), Color::White, Cursor::new("e2 e4\n"), &mut out);
    session.run().unwrap();
    drop(session);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("bR bN bB bQ bK bB bN bR 8\n"));
    assert_eq!(text.matches(" a  b  c  d  e  f  g  h \n").count(), 2);
    assert!(text.contains("wP wP wP wP    wP wP wP 2\n"));
}

#[test]
fn test_position_already_decided() {
    let board = Board::from_fen("6k1/8/8/8/8/8/5PPP/3r2K1 w - - 0 1").unwrap();
    let game = Game::from_board(board, RuleSet::standard());
    let (outcome, text, _) = run_lines(game, Color::White, "");
    assert_eq!(
        outcome,
        Outcome::Checkmate {
            winner: Color::Black
        }
    );
    assert!(!text.contains("move: "));
}
