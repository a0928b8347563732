use super::*;

const STANDARD: RuleSet = RuleSet {
    castle_through_check: false,
    stalemate_is_checkmate: false,
};

#[test]
fn test_startpos_not_in_check() {
    let b = Board::startpos();
    assert!(!in_check(&b, Color::White));
    assert!(!in_check(&b, Color::Black));
    assert_eq!(status(&b, Color::White, &STANDARD), GameStatus::Ongoing);
}

#[test]
fn test_each_attacker_gives_check() {
    let cases = [
        ("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1", true),  // pawn d2
        ("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1", false), // pawn straight ahead
        ("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1", true),  // knight f3
        ("4k3/8/8/8/8/8/8/1b2K3 w - - 0 1", false), // bishop on the rank
        ("4k3/8/8/8/1b6/8/8/4K3 w - - 0 1", true),  // bishop b4
        ("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", true),   // rook a1
        ("4k3/8/8/8/8/8/8/rN2K3 w - - 0 1", false), // rook blocked by b1
        ("4k3/4q3/8/8/8/8/8/4K3 w - - 0 1", true),  // queen e7
    ];
    for (fen, expected) in cases {
        let b = Board::from_fen(fen).unwrap();
        assert_eq!(in_check(&b, Color::White), expected, "{fen}");
    }
}

#[test]
fn test_back_rank_mate() {
    let b = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(in_check(&b, Color::Black));
    assert!(is_checkmate(&b, Color::Black, &STANDARD));
    assert!(!is_stalemate(&b, Color::Black, &STANDARD));

    // an escape square on h7 turns it into plain check
    let b = Board::from_fen("3R2k1/5pp1/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert_eq!(status(&b, Color::Black, &STANDARD), GameStatus::Check);
}

#[test]
fn test_capture_escapes_mate() {
    // the rook can take the checking queen
    let b = Board::from_fen("r2Q2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert_eq!(status(&b, Color::Black, &STANDARD), GameStatus::Check);
    assert!(!is_checkmate(&b, Color::Black, &STANDARD));
    let b = Board::from_fen("Q5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(is_checkmate(&b, Color::Black, &STANDARD));
}

#[test]
fn test_stalemate_distinguished_unless_legacy() {
    // Black king in corner, white queen stalemates
    let b = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!in_check(&b, Color::Black));
    assert!(!has_legal_move(&b, Color::Black, &STANDARD));
    assert!(is_stalemate(&b, Color::Black, &STANDARD));
    assert!(!is_checkmate(&b, Color::Black, &STANDARD));
    assert!(GameStatus::Stalemate.is_over());

    let legacy = RuleSet::legacy();
    assert!(is_checkmate(&b, Color::Black, &legacy));
    assert!(!is_stalemate(&b, Color::Black, &legacy));
}

#[test]
fn test_search_leaves_board_untouched() {
    let b = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    let before = b;
    assert!(has_legal_move(&b, Color::White, &STANDARD));
    assert_eq!(status(&b, Color::Black, &STANDARD), GameStatus::Ongoing);
    assert_eq!(b, before);
}

#[test]
fn test_square_attacked_by_either_side() {
    let b = Board::startpos();
    assert!(is_square_attacked(&b, sq("f3"), Color::White));
    assert!(is_square_attacked(&b, sq("f6"), Color::Black));
    assert!(!is_square_attacked(&b, sq("e4"), Color::White));
    assert!(!is_square_attacked(&b, sq("e5"), Color::Black));
}
