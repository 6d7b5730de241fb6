//! Legal move generation.
//!
//! The generator avoids a full make/unmake legality filter. Pinned pieces are
//! detected up front and restricted to the line through their own king; only
//! king moves, en-passant captures, and positions already in check pay for a
//! tentative bitboard toggle plus attack query.

use crate::board::attacks;
use crate::board::bit_ops::pop_ls;
use crate::board::rays;
use crate::position::move_encoding::{
    create_move, Move, PROMOTION_TO_BISHOP, PROMOTION_TO_KNIGHT, PROMOTION_TO_QUEEN,
    PROMOTION_TO_ROOK, SPEC_CASTLING, SPEC_EN_PASSANT, SPEC_NONE, SPEC_PROMOTION,
};
use crate::position::piece::{self, Piece, Square, BISHOP, KING, KNIGHT, NONE, PAWN, QUEEN, ROOK,
    WHITE,
};
use crate::position::position::Position;

impl Position {
    /// All legal moves for the side to move. Empty when the game is over,
    /// including the fifty-move draw.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.stats_legal_move_calls
            .set(self.stats_legal_move_calls.get() + 1);

        if self.fifty_count() >= 50 {
            return Vec::new();
        }

        let us = self.color_to_move;
        let king = self.king_square(us);
        let check = self.is_attacked(us, king);

        // When in check every move is verified with a tentative toggle, so
        // the pin mask would be redundant work.
        let pinned = if check { 0 } else { self.pinned_pieces() };

        let mut moves = Vec::with_capacity(48);

        if !check {
            self.generate_castle_moves(&mut moves);
        }
        self.generate_en_passant_moves(&mut moves);
        self.generate_pawn_moves(&mut moves, king, check, pinned);
        self.generate_standard_piece_moves(
            &mut moves,
            KNIGHT,
            |square, _| attacks::knight(square),
            king,
            check,
            pinned,
        );
        self.generate_standard_piece_moves(&mut moves, BISHOP, attacks::bishop, king, check, pinned);
        self.generate_standard_piece_moves(&mut moves, ROOK, attacks::rook, king, check, pinned);
        self.generate_standard_piece_moves(&mut moves, QUEEN, attacks::queen, king, check, pinned);
        self.generate_king_moves(&mut moves, king);

        moves
    }

    /// Pieces of the side to move that stand between their own king and an
    /// enemy slider, alone on the line.
    pub fn pinned_pieces(&self) -> u64 {
        let us = self.color_to_move;
        let them = 1 - us;
        let king = self.king_square(us);

        let rook_queen = self.piece_bitboards[them | ROOK] | self.piece_bitboards[them | QUEEN];
        let bishop_queen =
            self.piece_bitboards[them | BISHOP] | self.piece_bitboards[them | QUEEN];
        let mut snipers =
            (rays::AXES[king] & rook_queen) | (rays::DIAGONALS[king] & bishop_queen);

        let mut pinned = 0u64;
        while snipers != 0 {
            let sniper = pop_ls(&mut snipers);
            let between = rays::SQUARES_BETWEEN[king][sniper] & self.occupied;
            if between.count_ones() == 1 && between & self.piece_bitboards[us] != 0 {
                pinned |= between;
            }
        }
        pinned
    }

    /// Tests a candidate move by toggling the occupancy (and any captured
    /// piece) and asking whether the mover's king would be attacked.
    ///
    /// When the destination is empty, `square_piece[to]` is 0 and the toggle
    /// hits bitboard index 0, the all-white board. That is harmless: attack
    /// queries never consult the per-color boards.
    fn is_pseudo_legal(&mut self, from_square: Square, to_square: Square, is_king_move: bool) -> bool {
        let us = self.color_to_move;
        let capture = self.square_piece[to_square];

        let saved_occupied = self.occupied;
        self.occupied ^= 1u64 << from_square;
        self.occupied |= 1u64 << to_square;
        self.piece_bitboards[capture] ^= 1u64 << to_square;

        let king = if is_king_move {
            to_square
        } else {
            self.king_square(us)
        };
        let legal = !self.is_attacked(us, king);

        self.piece_bitboards[capture] ^= 1u64 << to_square;
        self.occupied = saved_occupied;
        legal
    }

    fn generate_castle_moves(&self, moves: &mut Vec<Move>) {
        let us = self.color_to_move;
        let home = 56 * us;
        let king_from = home + 4;

        if self.castle_short[us] == 1
            && (self.square_piece[home + 5] | self.square_piece[home + 6]) == NONE
            && !self.is_attacked(us, home + 5)
            && !self.is_attacked(us, home + 6)
        {
            moves.push(create_move(
                king_from,
                home + 6,
                KING | us,
                NONE,
                SPEC_CASTLING,
                0,
            ));
        }

        if self.castle_long[us] == 1
            && (self.square_piece[home + 1]
                | self.square_piece[home + 2]
                | self.square_piece[home + 3])
                == NONE
            && !self.is_attacked(us, home + 3)
            && !self.is_attacked(us, home + 2)
        {
            moves.push(create_move(
                king_from,
                home + 2,
                KING | us,
                NONE,
                SPEC_CASTLING,
                0,
            ));
        }
    }

    /// En-passant legality cannot be expressed with the pin mask: the capture
    /// clears two squares on one rank at once. Each candidate is verified by
    /// toggling the full capture and probing the king.
    fn generate_en_passant_moves(&mut self, moves: &mut Vec<Move>) {
        let Some(target) = self.en_passant_square() else {
            return;
        };

        let us = self.color_to_move;
        let them = 1 - us;
        let victim_square = if us == WHITE { target - 8 } else { target + 8 };
        let victim_mask = 1u64 << victim_square;
        let target_mask = 1u64 << target;

        // Our pawns attacking the target are the squares an enemy pawn on the
        // target would attack.
        let mut candidates = attacks::pawn(them, target) & self.piece_bitboards[us | PAWN];

        while candidates != 0 {
            let from_square = pop_ls(&mut candidates);
            let from_mask = 1u64 << from_square;

            self.occupied ^= from_mask | victim_mask;
            self.occupied |= target_mask;
            self.piece_bitboards[them | PAWN] ^= victim_mask;

            let legal = !self.is_attacked(us, self.king_square(us));

            self.piece_bitboards[them | PAWN] ^= victim_mask;
            self.occupied &= !target_mask;
            self.occupied ^= from_mask | victim_mask;

            if legal {
                moves.push(create_move(
                    from_square,
                    target,
                    PAWN | us,
                    NONE,
                    SPEC_EN_PASSANT,
                    0,
                ));
            }
        }
    }

    fn generate_pawn_moves(&mut self, moves: &mut Vec<Move>, king: Square, check: bool, pinned: u64) {
        let us = self.color_to_move;
        let them = 1 - us;
        let promotion_ranks = rays::RANK_1_BB | rays::RANK_8_BB;

        let mut pawns = self.piece_bitboards[us | PAWN];
        while pawns != 0 {
            let from_square = pop_ls(&mut pawns);

            let mut targets = 0u64;
            let ahead = if us == WHITE {
                from_square + 8
            } else {
                from_square - 8
            };
            if self.occupied & (1u64 << ahead) == 0 {
                targets |= 1u64 << ahead;
                if piece::rank(from_square) == 1 + 5 * us {
                    let two_ahead = if us == WHITE {
                        from_square + 16
                    } else {
                        from_square - 16
                    };
                    if self.occupied & (1u64 << two_ahead) == 0 {
                        targets |= 1u64 << two_ahead;
                    }
                }
            }
            targets |= attacks::pawn(us, from_square) & self.piece_bitboards[them];

            while targets != 0 {
                let to_square = pop_ls(&mut targets);
                if !self.candidate_is_legal(king, check, pinned, from_square, to_square) {
                    continue;
                }

                let victim = self.square_piece[to_square];
                if (1u64 << to_square) & promotion_ranks != 0 {
                    // One legality decision covers all four promotions.
                    for code in [
                        PROMOTION_TO_QUEEN,
                        PROMOTION_TO_KNIGHT,
                        PROMOTION_TO_ROOK,
                        PROMOTION_TO_BISHOP,
                    ] {
                        moves.push(create_move(
                            from_square,
                            to_square,
                            PAWN | us,
                            victim,
                            SPEC_PROMOTION,
                            code,
                        ));
                    }
                } else {
                    moves.push(create_move(
                        from_square,
                        to_square,
                        PAWN | us,
                        victim,
                        SPEC_NONE,
                        0,
                    ));
                }
            }
        }
    }

    fn generate_standard_piece_moves(
        &mut self,
        moves: &mut Vec<Move>,
        kind: Piece,
        reach: fn(Square, u64) -> u64,
        king: Square,
        check: bool,
        pinned: u64,
    ) {
        let us = self.color_to_move;

        let mut pieces = self.piece_bitboards[us | kind];
        while pieces != 0 {
            let from_square = pop_ls(&mut pieces);
            let mut targets = reach(from_square, self.occupied) & !self.piece_bitboards[us];

            while targets != 0 {
                let to_square = pop_ls(&mut targets);
                if self.candidate_is_legal(king, check, pinned, from_square, to_square) {
                    moves.push(create_move(
                        from_square,
                        to_square,
                        kind | us,
                        self.square_piece[to_square],
                        SPEC_NONE,
                        0,
                    ));
                }
            }
        }
    }

    fn generate_king_moves(&mut self, moves: &mut Vec<Move>, king: Square) {
        let us = self.color_to_move;
        let mut targets = attacks::king(king) & !self.piece_bitboards[us];

        while targets != 0 {
            let to_square = pop_ls(&mut targets);
            if self.is_pseudo_legal(king, to_square, true) {
                moves.push(create_move(
                    king,
                    to_square,
                    KING | us,
                    self.square_piece[to_square],
                    SPEC_NONE,
                    0,
                ));
            }
        }
    }

    #[inline]
    fn candidate_is_legal(
        &mut self,
        king: Square,
        check: bool,
        pinned: u64,
        from_square: Square,
        to_square: Square,
    ) -> bool {
        if check {
            self.is_pseudo_legal(from_square, to_square, false)
        } else if pinned & (1u64 << from_square) != 0 {
            // A pinned piece may only slide along the pin line.
            rays::aligned(king, from_square, to_square)
        } else {
            true
        }
    }
}
