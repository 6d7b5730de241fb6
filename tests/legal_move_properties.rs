//! Rule-level properties of the generated move lists.

use cobalt_chess::position::move_encoding::{
    from_square, is_en_passant, is_promotion, promotion_piece, to_square, Move,
};
use cobalt_chess::position::perft::perft;
use cobalt_chess::position::piece::{
    Piece, Square, BISHOP, BLACK, KING, KNIGHT, NONE, PAWN, QUEEN, ROOK, WHITE,
};
use cobalt_chess::position::position::{GameStatus, Position};

fn find_move(position: &mut Position, from: Square, to: Square) -> Move {
    position
        .legal_moves()
        .into_iter()
        .find(|&mv| from_square(mv) == from && to_square(mv) == to)
        .unwrap_or_else(|| panic!("expected a legal move from {from} to {to}"))
}

#[test]
fn perft_matches_the_known_counts() {
    let mut position = Position::initial();
    assert_eq!(perft(&mut position, 1), 20);
    assert_eq!(perft(&mut position, 2), 400);
    assert_eq!(perft(&mut position, 3), 8902);
    assert_eq!(perft(&mut position, 4), 197_281);
}

#[test]
fn no_legal_move_leaves_the_mover_in_check() {
    let mut position = Position::initial();
    // Reach a middlegame-ish position with checks available.
    for (from, to) in [(12, 28), (52, 36), (3, 39), (57, 42)] {
        let mv = find_move(&mut position, from, to);
        position.apply(mv);
    }

    let mover = position.color_to_move;
    for mv in position.legal_moves() {
        position.apply(mv);
        assert!(
            !position.is_in_check(mover),
            "move {mv:#x} left the mover in check"
        );
        position.undo().unwrap();
    }
}

#[test]
fn en_passant_is_offered_exactly_once_and_removes_the_victim() {
    let mut position = Position::initial();
    for (from, to) in [(12, 28), (48, 40), (28, 36), (51, 35)] {
        let mv = find_move(&mut position, from, to);
        position.apply(mv);
    }
    assert_eq!(position.en_passant_square(), Some(43)); // d6

    let ep_moves: Vec<Move> = position
        .legal_moves()
        .into_iter()
        .filter(|&mv| is_en_passant(mv))
        .collect();
    assert_eq!(ep_moves.len(), 1);
    let ep = ep_moves[0];
    assert_eq!(from_square(ep), 36); // e5
    assert_eq!(to_square(ep), 43); // d6

    let snapshot = position.clone();
    position.apply(ep);
    assert_eq!(position.piece_at(43), WHITE | PAWN);
    assert_eq!(position.piece_at(35), NONE); // the d5 pawn is gone
    position.undo().unwrap();
    assert_eq!(position, snapshot);
}

#[test]
fn the_en_passant_window_closes_after_one_ply() {
    let mut position = Position::initial();
    for (from, to) in [(12, 28), (48, 40), (28, 36), (51, 35), (6, 21)] {
        let mv = find_move(&mut position, from, to);
        position.apply(mv);
    }
    assert_eq!(position.en_passant_square(), None);

    let mv = find_move(&mut position, 40, 32); // a5
    position.apply(mv);
    assert!(position.legal_moves().iter().all(|&mv| !is_en_passant(mv)));
}

#[test]
fn knight_shuffling_reaches_the_fifty_move_draw() {
    let mut position = Position::initial();
    let cycle: [(Square, Square); 4] = [(6, 21), (62, 45), (21, 6), (45, 62)];

    let mut index = 0;
    while position.fifty_count() < 50 {
        let (from, to) = cycle[index % 4];
        let mv = find_move(&mut position, from, to);
        position.apply(mv);
        index += 1;
    }

    assert_eq!(position.fifty_count(), 50);
    assert_eq!(position.status(), GameStatus::DrawByFiftyMoveRule);
    assert!(position.game_finished());
    assert!(position.legal_moves().is_empty());
}

#[test]
fn promotions_come_in_four_flavors() {
    let mut arrangement: [Piece; 64] = [NONE; 64];
    arrangement[4] = WHITE | KING;
    arrangement[48] = WHITE | PAWN; // a7
    arrangement[63] = BLACK | KING;
    let mut position = Position::from_arrangement(&arrangement, WHITE, 0, None).unwrap();

    let promotions: Vec<Move> = position
        .legal_moves()
        .into_iter()
        .filter(|&mv| is_promotion(mv))
        .collect();
    assert_eq!(promotions.len(), 4);
    for piece in [QUEEN, KNIGHT, ROOK, BISHOP] {
        assert!(promotions
            .iter()
            .any(|&mv| promotion_piece(mv) == WHITE | piece));
    }

    let snapshot = position.clone();
    let queen_promo = *promotions
        .iter()
        .find(|&&mv| promotion_piece(mv) == WHITE | QUEEN)
        .unwrap();
    position.apply(queen_promo);
    assert_eq!(position.piece_at(56), WHITE | QUEEN);
    assert_eq!(position.piece_bitboards[WHITE | PAWN], 0);
    position.undo().unwrap();
    assert_eq!(position, snapshot);
}

#[test]
fn promotions_that_ignore_a_check_are_filtered_together() {
    let mut arrangement: [Piece; 64] = [NONE; 64];
    arrangement[4] = WHITE | KING; // e1, in check from e8
    arrangement[48] = WHITE | PAWN; // a7
    arrangement[60] = BLACK | ROOK; // e8
    arrangement[63] = BLACK | KING;
    let mut position = Position::from_arrangement(&arrangement, WHITE, 0, None).unwrap();

    assert!(position.check());
    let moves = position.legal_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|&mv| !is_promotion(mv)));
}

#[test]
fn checkmate_and_stalemate_are_reported() {
    let mut mated: [Piece; 64] = [NONE; 64];
    mated[63] = BLACK | KING; // h8
    mated[54] = WHITE | QUEEN; // g7
    mated[46] = WHITE | KING; // g6
    let mut position = Position::from_arrangement(&mated, BLACK, 0, None).unwrap();
    assert!(position.checkmate());
    assert!(position.legal_moves().is_empty());
    assert_eq!(position.status(), GameStatus::WhiteWinsByCheckmate);

    let mut stale: [Piece; 64] = [NONE; 64];
    stale[63] = BLACK | KING; // h8
    stale[53] = WHITE | KING; // f7
    stale[46] = WHITE | QUEEN; // g6
    let mut position = Position::from_arrangement(&stale, BLACK, 0, None).unwrap();
    assert!(position.stalemate());
    assert_eq!(position.status(), GameStatus::DrawByStalemate);
}
