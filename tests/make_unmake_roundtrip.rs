//! State restoration across apply/undo, including the castling counters.

use cobalt_chess::position::move_encoding::{from_square, to_square, Move};
use cobalt_chess::position::piece::{
    Piece, Square, BLACK, KING, NONE, QUEEN, ROOK, WHITE,
};
use cobalt_chess::position::position::Position;

fn find_move(position: &mut Position, from: Square, to: Square) -> Move {
    position
        .legal_moves()
        .into_iter()
        .find(|&mv| from_square(mv) == from && to_square(mv) == to)
        .unwrap_or_else(|| panic!("expected a legal move from {from} to {to}"))
}

fn walk(position: &mut Position, depth: u8) {
    if depth == 0 {
        return;
    }
    for mv in position.legal_moves() {
        let snapshot = position.clone();
        position.apply(mv);
        walk(position, depth - 1);
        position.undo().unwrap();
        assert_eq!(*position, snapshot, "undo diverged after move {mv:#x}");
    }
}

#[test]
fn every_undo_in_a_depth_three_walk_restores_the_state() {
    let mut position = Position::initial();
    walk(&mut position, 3);
    assert_eq!(position, Position::initial());
}

#[test]
fn castling_round_trips_through_undo() {
    let mut position = Position::initial();
    let line: [(Square, Square); 7] = [
        (12, 28), // e4
        (52, 36), // e5
        (6, 21),  // Nf3
        (57, 42), // Nc6
        (5, 26),  // Bc4
        (61, 34), // Bc5
        (4, 6),   // O-O
    ];
    for (from, to) in line {
        let mv = find_move(&mut position, from, to);
        position.apply(mv);
    }

    assert_eq!(position.piece_at(6), WHITE | KING);
    assert_eq!(position.piece_at(5), WHITE | ROOK);
    assert_eq!(position.piece_at(7), NONE);
    assert_eq!(position.castle_short[WHITE], 0);
    assert_eq!(position.castle_long[WHITE], 0);

    for _ in 0..line.len() {
        position.undo().unwrap();
    }
    assert_eq!(position, Position::initial());
}

#[test]
fn capturing_a_home_rook_revokes_and_undo_restores_the_right() {
    let mut arrangement: [Piece; 64] = [NONE; 64];
    arrangement[4] = WHITE | KING;
    arrangement[31] = WHITE | QUEEN; // h4
    arrangement[60] = BLACK | KING;
    arrangement[63] = BLACK | ROOK; // h8, unmoved
    let mut position =
        Position::from_arrangement(&arrangement, WHITE, 0b0010, None).unwrap();
    let snapshot = position.clone();
    assert_eq!(position.castle_short[BLACK], 1);

    let capture = find_move(&mut position, 31, 63);
    position.apply(capture);
    assert_eq!(position.castle_short[BLACK], 0);

    position.undo().unwrap();
    assert_eq!(position, snapshot);
    assert_eq!(position.castle_short[BLACK], 1);
}

#[test]
fn capturing_a_home_rook_after_the_right_was_lost() {
    let mut arrangement: [Piece; 64] = [NONE; 64];
    arrangement[4] = WHITE | KING;
    arrangement[31] = WHITE | QUEEN; // h4
    arrangement[60] = BLACK | KING;
    arrangement[63] = BLACK | ROOK; // h8, but the right is gone
    let mut position = Position::from_arrangement(&arrangement, WHITE, 0, None).unwrap();
    let snapshot = position.clone();

    let capture = find_move(&mut position, 31, 63);
    position.apply(capture);
    assert_eq!(position.castle_short[BLACK], -1);

    position.undo().unwrap();
    assert_eq!(position, snapshot);
    assert_eq!(position.castle_short[BLACK], 0);
}

#[test]
fn lost_rights_age_one_ply_at_a_time() {
    let mut position = Position::initial();
    let mv = find_move(&mut position, 6, 21); // Nf3
    position.apply(mv);
    let mv = find_move(&mut position, 48, 40); // a6
    position.apply(mv);
    let mv = find_move(&mut position, 7, 6); // Rg1 loses the right
    position.apply(mv);
    assert_eq!(position.castle_short[WHITE], 0);

    let mv = find_move(&mut position, 49, 41); // b6
    position.apply(mv);
    assert_eq!(position.castle_short[WHITE], -1);

    position.undo().unwrap();
    assert_eq!(position.castle_short[WHITE], 0);
    position.undo().unwrap();
    assert_eq!(position.castle_short[WHITE], 1);

    position.undo().unwrap();
    position.undo().unwrap();
    assert_eq!(position, Position::initial());
}
