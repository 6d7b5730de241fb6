//! Capture-first move ordering.
//!
//! Moves are rated most-valuable-victim / least-valuable-attacker, with a
//! bonus for recapturing on the square the previous move landed on. Quiet
//! moves keep their generation order behind every capture (the sort is
//! stable).

use crate::position::move_encoding::{self, Move};
use crate::position::piece::{self, Square, NONE};
use crate::position::position::Position;

/// Legal moves of the side to move, captures ordered to the front.
pub fn sorted_moves(position: &mut Position) -> Vec<Move> {
    let mut moves = position.legal_moves();
    let last_target = position.last_move().map(move_encoding::to_square);
    moves.sort_by(|&a, &b| move_rating(b, last_target).cmp(&move_rating(a, last_target)));
    moves
}

fn move_rating(mv: Move, last_target: Option<Square>) -> i32 {
    let victim = move_encoding::to_piece(mv);
    if victim == NONE {
        return 0;
    }

    let attacker = move_encoding::from_piece(mv);
    let difference = piece::kind(victim) as i32 - piece::kind(attacker) as i32;
    if difference >= 0 {
        let mut rating = (difference + 2) * 5;
        if last_target == Some(move_encoding::to_square(mv)) {
            rating += 200;
        }
        rating
    } else {
        (difference - 2) * 5
    }
}
