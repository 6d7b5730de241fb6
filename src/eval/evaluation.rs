//! Static position scoring.
//!
//! The score is material plus piece-square bonuses, always from white's point
//! of view: positive favors white. Queens are counted as bare material. The
//! position is treated as an ending once neither side has a queen, which
//! switches the king and pawn tables.

use crate::board::bit_ops::{pop_count, pop_ls};
use crate::eval::piece_tables::{
    BISHOP_COST, BISHOP_TABLE, KING_COST, KING_ENDING_TABLE, KING_TABLE, KNIGHT_COST,
    KNIGHT_TABLE, PAWN_COST, PAWN_ENDING_TABLE, PAWN_TABLE, QUEEN_COST, ROOK_COST, ROOK_TABLE,
};
use crate::position::piece::{BISHOP, BLACK, KNIGHT, PAWN, QUEEN, ROOK, WHITE};
use crate::position::position::Position;

/// Lower bound of any reachable score.
pub const EVAL_MIN: i32 = -500_000;
/// Upper bound of any reachable score.
pub const EVAL_MAX: i32 = 500_000;
/// Base score for delivering checkmate; reduced by the ply distance so the
/// search prefers the faster mate.
pub const CHECKMATE_BONUS: i32 = 100_000;

#[derive(Debug, Default, Clone)]
pub struct Evaluation {
    pub stats_evaluated: u64,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, position: &Position) -> i32 {
        self.stats_evaluated += 1;

        let ending = position.piece_bitboards[WHITE | QUEEN] == 0
            && position.piece_bitboards[BLACK | QUEEN] == 0;

        let mut value = [0i32; 2];
        for color in [WHITE, BLACK] {
            // Table index from the side's own perspective: black reads the
            // display-order tables directly, white mirrors vertically.
            let table_square = |square: usize| if color == WHITE { square ^ 56 } else { square };

            let pawn_table = if ending { &PAWN_ENDING_TABLE } else { &PAWN_TABLE };
            let mut pawns = position.piece_bitboards[color | PAWN];
            while pawns != 0 {
                value[color] += PAWN_COST + pawn_table[table_square(pop_ls(&mut pawns))];
            }

            let mut knights = position.piece_bitboards[color | KNIGHT];
            while knights != 0 {
                value[color] += KNIGHT_COST + KNIGHT_TABLE[table_square(pop_ls(&mut knights))];
            }

            let mut bishops = position.piece_bitboards[color | BISHOP];
            while bishops != 0 {
                value[color] += BISHOP_COST + BISHOP_TABLE[table_square(pop_ls(&mut bishops))];
            }

            let mut rooks = position.piece_bitboards[color | ROOK];
            while rooks != 0 {
                value[color] += ROOK_COST + ROOK_TABLE[table_square(pop_ls(&mut rooks))];
            }

            value[color] +=
                QUEEN_COST * pop_count(position.piece_bitboards[color | QUEEN]) as i32;

            let king_table = if ending { &KING_ENDING_TABLE } else { &KING_TABLE };
            value[color] += KING_COST + king_table[table_square(position.king_square(color))];
        }

        value[WHITE] - value[BLACK]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::piece::{Piece, KING, NONE};

    #[test]
    fn starting_position_is_balanced() {
        let mut evaluation = Evaluation::new();
        assert_eq!(evaluation.evaluate(&Position::initial()), 0);
        assert_eq!(evaluation.stats_evaluated, 1);
    }

    #[test]
    fn extra_material_shifts_the_score() {
        let mut arrangement = [NONE; 64];
        arrangement[4] = WHITE | KING;
        arrangement[60] = BLACK | KING;
        arrangement[27] = WHITE | ROOK; // d4
        let position = Position::from_arrangement(&arrangement, WHITE, 0, None).unwrap();

        let mut evaluation = Evaluation::new();
        assert!(evaluation.evaluate(&position) >= ROOK_COST - 10);
    }

    #[test]
    fn mirrored_positions_score_symmetrically() {
        let mut white_up = [NONE; 64];
        white_up[4] = WHITE | KING;
        white_up[60] = BLACK | KING;
        white_up[11] = WHITE | KNIGHT; // d2

        let mut black_up: [Piece; 64] = [NONE; 64];
        for square in 0..64 {
            let piece = white_up[square];
            if piece != NONE {
                // Flip the board vertically and swap the colors.
                black_up[square ^ 56] = piece ^ 1;
            }
        }

        let mut evaluation = Evaluation::new();
        let white_score =
            evaluation.evaluate(&Position::from_arrangement(&white_up, WHITE, 0, None).unwrap());
        let black_score =
            evaluation.evaluate(&Position::from_arrangement(&black_up, BLACK, 0, None).unwrap());
        assert_eq!(white_score, -black_score);
    }

    #[test]
    fn queenless_boards_use_the_ending_tables() {
        let mut arrangement = [NONE; 64];
        arrangement[4] = WHITE | KING;
        arrangement[60] = BLACK | KING;
        arrangement[51] = WHITE | PAWN; // d7, one step from promotion
        let position = Position::from_arrangement(&arrangement, WHITE, 0, None).unwrap();

        let mut evaluation = Evaluation::new();
        let score = evaluation.evaluate(&position);
        // The advanced passer is worth far more than its midgame table value.
        assert!(score > PAWN_COST + 50);
    }
}
