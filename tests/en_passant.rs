use chess_rules::board::{Board, SpecialMove};
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

fn kings_and(pieces: &[(Color, PieceKind, &str)]) -> Board {
    let mut all = vec![
        (Color::White, PieceKind::King, "a1"),
        (Color::Black, PieceKind::King, "a8"),
    ];
    all.extend_from_slice(pieces);
    setup(&all)
}

#[test]
fn black_captures_a_two_step_pawn_in_passing() {
    let mut board = kings_and(&[
        (Color::White, PieceKind::Pawn, "e2"),
        (Color::Black, PieceKind::Pawn, "d4"),
    ]);
    assert!(!board.available_moves(sq("d4")).unwrap().contains(&sq("e3")));

    board.apply_move(sq("e2"), sq("e4")).unwrap();
    assert!(board.available_moves(sq("d4")).unwrap().contains(&sq("e3")));
    assert!(board.legal_moves(sq("d4")).contains(&sq("e3")));

    let record = board.apply_move(sq("d4"), sq("e3")).unwrap();
    assert_eq!(
        record.special,
        Some(SpecialMove::EnPassant {
            captured_at: sq("e4")
        })
    );
    let captured = record.captured.unwrap();
    assert_eq!(captured.kind, PieceKind::Pawn);
    assert_eq!(captured.color, Color::White);

    assert!(board.piece_at(sq("e4")).is_none());
    assert!(board.piece_at(sq("d4")).is_none());
    assert_eq!(board.piece_at(sq("e3")).unwrap().color, Color::Black);
    assert_eq!(board.captured_pieces().count(), 1);
    assert!(board.is_consistent());
}

#[test]
fn the_chance_expires_after_one_move() {
    let mut board = kings_and(&[
        (Color::White, PieceKind::Pawn, "e2"),
        (Color::White, PieceKind::Pawn, "h2"),
        (Color::Black, PieceKind::Pawn, "d4"),
        (Color::Black, PieceKind::Pawn, "h7"),
    ]);
    board.apply_move(sq("e2"), sq("e4")).unwrap();
    board.apply_move(sq("h7"), sq("h6")).unwrap();
    board.apply_move(sq("h2"), sq("h3")).unwrap();

    assert!(!board.available_moves(sq("d4")).unwrap().contains(&sq("e3")));
    assert_eq!(
        board.apply_move(sq("d4"), sq("e3")),
        Err(MoveError::NotAMove {
            origin: sq("d4"),
            destination: sq("e3"),
        })
    );
}

#[test]
fn white_captures_on_the_passed_file_only() {
    let mut board = kings_and(&[
        (Color::White, PieceKind::Pawn, "e5"),
        (Color::Black, PieceKind::Pawn, "d7"),
        (Color::Black, PieceKind::Pawn, "f7"),
    ]);
    board.apply_move(sq("d7"), sq("d5")).unwrap();

    let moves = board.available_moves(sq("e5")).unwrap();
    assert!(moves.contains(&sq("d6")));
    assert!(!moves.contains(&sq("f6")));

    board.apply_move(sq("e5"), sq("d6")).unwrap();
    assert!(board.piece_at(sq("d5")).is_none());
    assert_eq!(board.material(Color::Black), 100);
}

#[test]
fn single_step_advance_gives_no_chance() {
    let mut board = kings_and(&[
        (Color::White, PieceKind::Pawn, "e5"),
        (Color::Black, PieceKind::Pawn, "d6"),
    ]);
    board.apply_move(sq("d6"), sq("d5")).unwrap();
    assert!(!board.available_moves(sq("e5")).unwrap().contains(&sq("d6")));
}

#[test]
fn pawn_off_its_fifth_rank_cannot_capture_in_passing() {
    let mut board = kings_and(&[
        (Color::White, PieceKind::Pawn, "e4"),
        (Color::Black, PieceKind::Pawn, "d7"),
    ]);
    board.apply_move(sq("d7"), sq("d5")).unwrap();
    let moves = board.available_moves(sq("e4")).unwrap();
    assert!(moves.contains(&sq("d5")));
    assert!(!moves.contains(&sq("d6")));
}

#[test]
fn capture_in_passing_that_opens_the_rank_is_rejected() {
    let mut board = setup(&[
        (Color::White, PieceKind::King, "a5"),
        (Color::White, PieceKind::Pawn, "b5"),
        (Color::Black, PieceKind::Pawn, "c7"),
        (Color::Black, PieceKind::Rook, "h5"),
        (Color::Black, PieceKind::King, "h8"),
    ]);
    board.apply_move(sq("c7"), sq("c5")).unwrap();
    assert!(!board.is_in_check(Color::White));
    assert!(board.available_moves(sq("b5")).unwrap().contains(&sq("c6")));

    assert_eq!(
        board.apply_move(sq("b5"), sq("c6")),
        Err(MoveError::ExposesCheck {
            origin: sq("b5"),
            destination: sq("c6"),
        })
    );
    assert!(!board.legal_moves(sq("b5")).contains(&sq("c6")));
    assert_eq!(board.move_log().len(), 1);
    assert_eq!(board.piece_at(sq("c5")).unwrap().kind, PieceKind::Pawn);
    assert_eq!(board.piece_at(sq("b5")).unwrap().color, Color::White);
}
