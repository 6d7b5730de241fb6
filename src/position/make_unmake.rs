//! Reversible move application.
//!
//! `apply` and `undo` are exact inverses: applying a legal move and undoing
//! it reproduces the previous state bit for bit, including the castling
//! counters and all three history stacks. `apply` assumes the move came from
//! `legal_moves` for this position and performs no re-validation.

use crate::errors::{ChessError, ChessResult};
use crate::position::move_encoding::{
    from_piece, from_square, is_castling, is_en_passant, is_promotion, promotion_piece, to_piece,
    to_square, Move,
};
use crate::position::piece::{self, KING, NONE, PAWN, ROOK, WHITE};
use crate::position::position::Position;

impl Position {
    pub fn apply(&mut self, mv: Move) {
        self.move_history.push(mv);

        let from_square = from_square(mv);
        let to_square = to_square(mv);
        let from_piece = from_piece(mv);
        let to_piece = to_piece(mv);

        // Fifty-move rule: captures and pawn moves reset the counter.
        if to_piece != NONE || piece::kind(from_piece) == PAWN {
            self.fifty_history.push(0);
        } else {
            let next = self.fifty_count() + 1;
            self.fifty_history.push(next);
        }

        // Move the piece in both representations.
        self.square_piece[to_square] = self.square_piece[from_square];
        self.square_piece[from_square] = NONE;

        self.occupied ^= 1u64 << from_square;
        self.occupied |= 1u64 << to_square;

        let move_mask = (1u64 << from_square) | (1u64 << to_square);
        self.piece_bitboards[from_piece] ^= move_mask;
        self.piece_bitboards[piece::color(from_piece)] ^= move_mask;

        let us = self.color_to_move;
        let them = 1 - us;

        // Age every already-lost right so its magnitude keeps counting the
        // plies since it was lost.
        for side in [us, them] {
            if self.castle_short[side] <= 0 {
                self.castle_short[side] -= 1;
            }
            if self.castle_long[side] <= 0 {
                self.castle_long[side] -= 1;
            }
        }

        if piece::kind(from_piece) == KING {
            if self.castle_short[us] == 1 {
                self.castle_short[us] = 0;
            }
            if self.castle_long[us] == 1 {
                self.castle_long[us] = 0;
            }
        } else if piece::kind(from_piece) == ROOK {
            if from_square == 56 * us + 7 {
                if self.castle_short[us] == 1 {
                    self.castle_short[us] = 0;
                }
            } else if from_square == 56 * us {
                if self.castle_long[us] == 1 {
                    self.castle_long[us] = 0;
                }
            }
        } else if piece::kind(from_piece) == PAWN
            && piece::rank(from_square) == 1 + 5 * us
            && to_square.abs_diff(from_square) == 16
        {
            // Double pawn push: record the square passed over and stop here;
            // no capture, castling, or promotion applies to this move type.
            let target = if us == WHITE {
                from_square + 8
            } else {
                from_square - 8
            };
            self.en_passant_history.push(Some(target));
            self.color_to_move = them;
            return;
        }

        if to_piece != NONE {
            self.piece_bitboards[to_piece] ^= 1u64 << to_square;
            self.piece_bitboards[piece::color(to_piece)] ^= 1u64 << to_square;

            // Capturing an unmoved rook on its home square revokes the
            // corresponding enemy right.
            let enemy_home = 56 * them;
            if to_square == enemy_home + 7
                && piece::kind(to_piece) == ROOK
                && self.castle_short[them] == 1
            {
                self.castle_short[them] = 0;
            } else if to_square == enemy_home
                && piece::kind(to_piece) == ROOK
                && self.castle_long[them] == 1
            {
                self.castle_long[them] = 0;
            }
        }

        if is_castling(mv) {
            let home = 56 * us;
            // King-side when the king lands on the g-file.
            let (rook_from, rook_to) = if piece::file(to_square) == 6 {
                (home + 7, from_square + 1)
            } else {
                (home, from_square - 1)
            };

            self.square_piece[rook_to] = self.square_piece[rook_from];
            self.square_piece[rook_from] = NONE;

            self.occupied ^= 1u64 << rook_from;
            self.occupied |= 1u64 << rook_to;

            let rook_mask = (1u64 << rook_from) | (1u64 << rook_to);
            self.piece_bitboards[ROOK | us] ^= rook_mask;
            self.piece_bitboards[us] ^= rook_mask;
        }

        if is_promotion(mv) {
            let promoted = promotion_piece(mv);
            self.square_piece[to_square] = promoted;

            // The pawn ceases to exist on the destination; the color and
            // occupancy boards are unchanged by the piece swap.
            self.piece_bitboards[from_piece] ^= 1u64 << to_square;
            self.piece_bitboards[promoted] ^= 1u64 << to_square;
        }

        if is_en_passant(mv) {
            // The captured pawn sits one rank behind the destination square.
            let victim_square = if us == WHITE {
                to_square - 8
            } else {
                to_square + 8
            };
            let victim_mask = 1u64 << victim_square;

            self.occupied ^= victim_mask;
            self.piece_bitboards[PAWN | them] ^= victim_mask;
            self.piece_bitboards[them] ^= victim_mask;
            self.square_piece[victim_square] = NONE;
        }

        self.color_to_move = them;
        self.en_passant_history.push(None);
    }

    pub fn undo(&mut self) -> ChessResult<()> {
        let mv = self
            .move_history
            .pop()
            .ok_or(ChessError::EmptyMoveHistory)?;
        let made = 1 - self.color_to_move;

        let from_square = from_square(mv);
        let to_square = to_square(mv);
        let from_piece = from_piece(mv);
        let to_piece = to_piece(mv);

        self.fifty_history.pop();

        // Move the piece back and restore any captured piece.
        self.square_piece[to_square] = to_piece;
        self.square_piece[from_square] = from_piece;

        let move_mask = (1u64 << from_square) | (1u64 << to_square);
        self.piece_bitboards[from_piece] ^= move_mask;
        self.piece_bitboards[piece::color(from_piece)] ^= move_mask;

        self.occupied ^= 1u64 << from_square;
        if to_piece != NONE {
            self.piece_bitboards[to_piece] ^= 1u64 << to_square;
            self.piece_bitboards[piece::color(to_piece)] ^= 1u64 << to_square;
        } else {
            self.occupied ^= 1u64 << to_square;
        }

        // Castling counters: apply's net effect per counter is 1 -> 0 when
        // the right was revoked this ply and c -> c-1 when already lost, so
        // one uniform increment of every non-available counter is its exact
        // inverse, whichever rule revoked the right.
        for side in [made, 1 - made] {
            if self.castle_short[side] <= 0 {
                self.castle_short[side] += 1;
            }
            if self.castle_long[side] <= 0 {
                self.castle_long[side] += 1;
            }
        }

        if is_castling(mv) {
            let home = 56 * made;
            let (rook_from, rook_to) = if piece::file(to_square) == 6 {
                (home + 7, from_square + 1)
            } else {
                (home, from_square - 1)
            };

            self.square_piece[rook_from] = self.square_piece[rook_to];
            self.square_piece[rook_to] = NONE;

            self.occupied ^= 1u64 << rook_from;
            self.occupied ^= 1u64 << rook_to;

            let rook_mask = (1u64 << rook_from) | (1u64 << rook_to);
            self.piece_bitboards[ROOK | made] ^= rook_mask;
            self.piece_bitboards[made] ^= rook_mask;
        }

        if is_promotion(mv) {
            let promoted = promotion_piece(mv);

            // The generic restore above put a pawn bit on the destination;
            // swap it for the promoted piece's bit.
            self.piece_bitboards[from_piece] ^= 1u64 << to_square;
            self.piece_bitboards[promoted] ^= 1u64 << to_square;
        }

        if is_en_passant(mv) {
            let victim_square = if made == WHITE {
                to_square - 8
            } else {
                to_square + 8
            };
            let victim_mask = 1u64 << victim_square;
            let victim_color = self.color_to_move;

            self.occupied ^= victim_mask;
            self.piece_bitboards[PAWN | victim_color] ^= victim_mask;
            self.piece_bitboards[victim_color] ^= victim_mask;
            self.square_piece[victim_square] = PAWN | victim_color;
        }

        self.color_to_move = made;
        self.en_passant_history.pop();
        Ok(())
    }
}
