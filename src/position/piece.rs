//! Piece, color, and square encodings.
//!
//! A piece is 4 bits: the high three bits select the kind, the low bit the
//! color. This lets a colored piece value index the position's bitboard array
//! directly, and the color alone (0 or 1) index the per-color boards.

pub type Square = usize;
pub type Piece = usize;
pub type Color = usize;

pub const NONE: Piece = 0;
pub const PAWN: Piece = 2;
pub const KNIGHT: Piece = 4;
pub const BISHOP: Piece = 6;
pub const ROOK: Piece = 8;
pub const QUEEN: Piece = 10;
pub const KING: Piece = 12;

pub const WHITE: Color = 0;
pub const BLACK: Color = 1;

pub const KIND_MASK: Piece = 0b1110;
pub const COLOR_MASK: Piece = 0b0001;

#[inline]
pub const fn color(piece: Piece) -> Color {
    piece & COLOR_MASK
}

#[inline]
pub const fn kind(piece: Piece) -> Piece {
    piece & KIND_MASK
}

#[inline]
pub const fn file(square: Square) -> usize {
    square & 7
}

#[inline]
pub const fn rank(square: Square) -> usize {
    square >> 3
}

pub fn to_char(piece: Piece) -> char {
    let symbol = match kind(piece) {
        PAWN => 'p',
        KNIGHT => 'n',
        BISHOP => 'b',
        ROOK => 'r',
        QUEEN => 'q',
        KING => 'k',
        _ => return '.',
    };

    if color(piece) == WHITE {
        symbol.to_ascii_uppercase()
    } else {
        symbol
    }
}

/// Arrangement of pieces in the starting position (index = square, a1 = 0).
pub const INITIAL_PIECES: [Piece; 64] = [
    WHITE | ROOK, WHITE | KNIGHT, WHITE | BISHOP, WHITE | QUEEN,
    WHITE | KING, WHITE | BISHOP, WHITE | KNIGHT, WHITE | ROOK,
    WHITE | PAWN, WHITE | PAWN, WHITE | PAWN, WHITE | PAWN,
    WHITE | PAWN, WHITE | PAWN, WHITE | PAWN, WHITE | PAWN,
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
    BLACK | PAWN, BLACK | PAWN, BLACK | PAWN, BLACK | PAWN,
    BLACK | PAWN, BLACK | PAWN, BLACK | PAWN, BLACK | PAWN,
    BLACK | ROOK, BLACK | KNIGHT, BLACK | BISHOP, BLACK | QUEEN,
    BLACK | KING, BLACK | BISHOP, BLACK | KNIGHT, BLACK | ROOK,
];
