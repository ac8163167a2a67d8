use chess_rules::board::Board;
use chess_rules::chess::piece::{Color, PieceKind};
use chess_rules::core::coord::Coord;
use chess_rules::error::MoveError;

fn sq(name: &str) -> Coord {
    name.parse().unwrap()
}

fn setup(pieces: &[(Color, PieceKind, &str)]) -> Board {
    let mut board = Board::empty();
    for &(color, kind, at) in pieces {
        board.place(color, kind, sq(at)).unwrap();
    }
    board.generate_moves();
    board
}

fn exposes(origin: &str, destination: &str) -> Result<(), MoveError> {
    Err(MoveError::ExposesCheck {
        origin: sq(origin),
        destination: sq(destination),
    })
}

#[test]
fn pinned_bishop_cannot_move() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "e1"),
        (Color::White, PieceKind::Bishop, "e2"),
        (Color::Black, PieceKind::Rook, "e8"),
        (Color::Black, PieceKind::King, "a8"),
    ]);
    assert!(board.available_moves(sq("e2")).unwrap().contains(&sq("d3")));

    assert_eq!(board.apply_move(sq("e2"), sq("d3")).map(|_| ()), exposes("e2", "d3"));
    assert!(board.legal_moves(sq("e2")).is_empty());
}

#[test]
fn pinned_rook_may_slide_along_the_pin() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "e1"),
        (Color::White, PieceKind::Rook, "e2"),
        (Color::Black, PieceKind::Rook, "e8"),
        (Color::Black, PieceKind::King, "a8"),
    ]);
    assert_eq!(board.apply_move(sq("e2"), sq("d2")).map(|_| ()), exposes("e2", "d2"));

    let legal = board.legal_moves(sq("e2"));
    let want: Vec<Coord> = ["e3", "e4", "e5", "e6", "e7", "e8"].into_iter().map(sq).collect();
    assert_eq!(legal, want);

    let record = board.apply_move(sq("e2"), sq("e8")).unwrap();
    assert_eq!(record.captured.map(|c| c.kind), Some(PieceKind::Rook));
}

#[test]
fn king_cannot_step_into_attack() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "e1"),
        (Color::Black, PieceKind::Rook, "d8"),
        (Color::Black, PieceKind::King, "a8"),
    ]);
    let available = board.available_moves(sq("e1")).unwrap();
    assert!(available.contains(&sq("d1")) && available.contains(&sq("d2")));

    assert_eq!(board.apply_move(sq("e1"), sq("d1")).map(|_| ()), exposes("e1", "d1"));
    assert_eq!(board.legal_moves(sq("e1")), vec![sq("e2"), sq("f1"), sq("f2")]);
}

#[test]
fn king_cannot_take_a_defended_piece() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "e1"),
        (Color::Black, PieceKind::Knight, "e2"),
        (Color::Black, PieceKind::Rook, "e8"),
        (Color::Black, PieceKind::King, "a8"),
    ]);
    assert!(board.available_moves(sq("e1")).unwrap().contains(&sq("e2")));
    assert_eq!(board.apply_move(sq("e1"), sq("e2")).map(|_| ()), exposes("e1", "e2"));
}

#[test]
fn pawn_diagonal_counts_as_attack_on_the_king() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "e1"),
        (Color::Black, PieceKind::Pawn, "e3"),
        (Color::Black, PieceKind::King, "a8"),
    ]);
    assert_eq!(board.apply_move(sq("e1"), sq("d2")).map(|_| ()), exposes("e1", "d2"));
    assert_eq!(board.apply_move(sq("e1"), sq("f2")).map(|_| ()), exposes("e1", "f2"));
    board.apply_move(sq("e1"), sq("e2")).unwrap();
}

#[test]
fn a_side_in_check_must_answer_it() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "e1"),
        (Color::White, PieceKind::Pawn, "a2"),
        (Color::White, PieceKind::Bishop, "d1"),
        (Color::Black, PieceKind::Rook, "e8"),
        (Color::Black, PieceKind::King, "a8"),
    ]);
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));

    assert_eq!(board.apply_move(sq("a2"), sq("a3")).map(|_| ()), exposes("a2", "a3"));
    assert!(board.legal_moves(sq("a2")).is_empty());

    board.apply_move(sq("d1"), sq("e2")).unwrap();
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn rejected_move_leaves_the_board_untouched() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "e1"),
        (Color::White, PieceKind::Knight, "e2"),
        (Color::Black, PieceKind::Queen, "e7"),
        (Color::Black, PieceKind::King, "a8"),
    ]);
    let moves_before = board.moves().clone();
    let places_before: Vec<(Coord, PieceKind)> =
        board.active_pieces().map(|p| (p.location, p.kind)).collect();

    assert_eq!(board.apply_move(sq("e2"), sq("c3")).map(|_| ()), exposes("e2", "c3"));

    assert_eq!(board.moves(), &moves_before);
    let places_after: Vec<(Coord, PieceKind)> =
        board.active_pieces().map(|p| (p.location, p.kind)).collect();
    assert_eq!(places_before, places_after);
    assert!(board.move_log().is_empty());
    assert_eq!(board.captured_pieces().count(), 0);
}

#[test]
fn moving_into_a_discovered_check_on_the_opponent_is_fine() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "a1"),
        (Color::White, PieceKind::Rook, "e1"),
        (Color::White, PieceKind::Knight, "e4"),
        (Color::Black, PieceKind::King, "e8"),
    ]);
    board.apply_move(sq("e4"), sq("c5")).unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_in_check(Color::White));
}
