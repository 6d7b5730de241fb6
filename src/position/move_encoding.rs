//! Packed move encoding.
//!
//! A move is 26 bits, low to high: origin square (6), destination square (6),
//! moving piece (5), captured piece or none (5), special code (2), promotion
//! code (2). Move values are compared as raw integers inside the search, so
//! the field order and widths are fixed.

use crate::position::piece::{Piece, Square, COLOR_MASK};

pub type Move = u32;

pub const PROMOTION_TO_KNIGHT: u32 = 0;
pub const PROMOTION_TO_BISHOP: u32 = 1;
pub const PROMOTION_TO_ROOK: u32 = 2;
pub const PROMOTION_TO_QUEEN: u32 = 3;

pub const SPEC_NONE: u32 = 0;
pub const SPEC_PROMOTION: u32 = 1;
pub const SPEC_EN_PASSANT: u32 = 2;
pub const SPEC_CASTLING: u32 = 3;

const SQUARE_MASK: u32 = 0b11_1111;
const PIECE_MASK: u32 = 0b1_1111;

#[inline]
pub fn create_move(
    from_square: Square,
    to_square: Square,
    from_piece: Piece,
    to_piece: Piece,
    spec_code: u32,
    promotion_code: u32,
) -> Move {
    (from_square as u32)
        | ((to_square as u32) << 6)
        | ((from_piece as u32) << 12)
        | ((to_piece as u32) << 17)
        | (spec_code << 22)
        | (promotion_code << 24)
}

#[inline]
pub fn from_square(mv: Move) -> Square {
    (mv & SQUARE_MASK) as Square
}

#[inline]
pub fn to_square(mv: Move) -> Square {
    ((mv >> 6) & SQUARE_MASK) as Square
}

#[inline]
pub fn from_piece(mv: Move) -> Piece {
    ((mv >> 12) & PIECE_MASK) as Piece
}

#[inline]
pub fn to_piece(mv: Move) -> Piece {
    ((mv >> 17) & PIECE_MASK) as Piece
}

#[inline]
pub fn is_castling(mv: Move) -> bool {
    special_code(mv) == SPEC_CASTLING
}

#[inline]
pub fn is_en_passant(mv: Move) -> bool {
    special_code(mv) == SPEC_EN_PASSANT
}

#[inline]
pub fn is_promotion(mv: Move) -> bool {
    special_code(mv) == SPEC_PROMOTION
}

/// Concrete promoted piece: promotion codes 0..=3 map to knight, bishop,
/// rook, queen of the mover's color.
#[inline]
pub fn promotion_piece(mv: Move) -> Piece {
    (from_piece(mv) & COLOR_MASK) | ((promotion_code(mv) as Piece + 2) * 2)
}

#[inline]
fn special_code(mv: Move) -> u32 {
    (mv >> 22) & 0b11
}

#[inline]
fn promotion_code(mv: Move) -> u32 {
    mv >> 24
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::piece::{BISHOP, BLACK, KING, KNIGHT, PAWN, QUEEN, ROOK, WHITE};

    #[test]
    fn fields_round_trip() {
        let mv = create_move(12, 28, WHITE | PAWN, BLACK | KNIGHT, SPEC_NONE, 0);
        assert_eq!(from_square(mv), 12);
        assert_eq!(to_square(mv), 28);
        assert_eq!(from_piece(mv), WHITE | PAWN);
        assert_eq!(to_piece(mv), BLACK | KNIGHT);
        assert!(!is_castling(mv));
        assert!(!is_en_passant(mv));
        assert!(!is_promotion(mv));
    }

    #[test]
    fn special_codes_are_distinguished() {
        let castle = create_move(4, 6, WHITE | KING, 0, SPEC_CASTLING, 0);
        assert!(is_castling(castle));
        let ep = create_move(36, 43, WHITE | PAWN, 0, SPEC_EN_PASSANT, 0);
        assert!(is_en_passant(ep));
    }

    #[test]
    fn promotion_piece_carries_the_mover_color() {
        let white_queen =
            create_move(48, 56, WHITE | PAWN, 0, SPEC_PROMOTION, PROMOTION_TO_QUEEN);
        assert_eq!(promotion_piece(white_queen), WHITE | QUEEN);

        let black_knight =
            create_move(8, 0, BLACK | PAWN, 0, SPEC_PROMOTION, PROMOTION_TO_KNIGHT);
        assert_eq!(promotion_piece(black_knight), BLACK | KNIGHT);

        let black_rook = create_move(8, 0, BLACK | PAWN, 0, SPEC_PROMOTION, PROMOTION_TO_ROOK);
        assert_eq!(promotion_piece(black_rook), BLACK | ROOK);

        let white_bishop =
            create_move(48, 56, WHITE | PAWN, 0, SPEC_PROMOTION, PROMOTION_TO_BISHOP);
        assert_eq!(promotion_piece(white_bishop), WHITE | BISHOP);
    }
}
