//! Core position state.
//!
//! `Position` keeps two mutually redundant views of the board: per-piece
//! bitboards (indexed by the colored piece value, with indices 0 and 1
//! doubling as the all-white/all-black boards) and a square-indexed piece
//! array. Both are only ever updated together inside the mutation routines in
//! `make_unmake` and the temporary toggles of the move generator, preserving
//! their consistency invariant. Three parallel history stacks (moves,
//! en-passant targets, fifty-move counters) give unbounded reversible depth.

use std::cell::Cell;
use std::fmt;

use crate::board::attacks;
use crate::board::bit_ops::only_bit_index;
use crate::board::rays;
use crate::errors::{ChessError, ChessResult};
use crate::position::move_encoding::Move;
use crate::position::piece::{
    self, Color, Piece, Square, BISHOP, BLACK, KING, KIND_MASK, KNIGHT, NONE, PAWN, QUEEN, ROOK,
    WHITE,
};

/// Possible states of a game by the chess rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    WhiteWinsByCheckmate,
    BlackWinsByCheckmate,
    DrawByStalemate,
    DrawByFiftyMoveRule,
    InProgress,
}

#[derive(Debug, Clone)]
pub struct Position {
    /// Squares occupied by pieces of a given colored piece value. Indices 0
    /// and 1 hold the all-white and all-black boards.
    pub piece_bitboards: [u64; 15],
    /// Squares occupied by any piece.
    pub occupied: u64,
    /// Piece located on a given square.
    pub square_piece: [Piece; 64],

    /// King-side castling availability per color: 1 means available, 0 or
    /// negative means unavailable, with the magnitude counting plies since
    /// the right was lost (lets undo restore it without a separate history).
    pub castle_short: [i32; 2],
    /// Queen-side castling availability per color, same encoding.
    pub castle_long: [i32; 2],

    pub color_to_move: Color,

    /// En-passant target per ply (`None` when there is none). One entry is
    /// pushed per applied move and one at construction.
    pub en_passant_history: Vec<Option<Square>>,
    /// Half-moves since the last capture or pawn move, one entry per ply.
    pub fifty_history: Vec<u32>,
    /// Applied moves, newest last.
    pub move_history: Vec<Move>,

    pub stats_attack_queries: Cell<u64>,
    pub stats_legal_move_calls: Cell<u64>,
}

impl Position {
    /// Builds a position from a 64-entry arrangement (index = square), a side
    /// to move, a 4-bit castling mask (bit0 = white king-side, bit1 = black
    /// king-side, bit2 = white queen-side, bit3 = black queen-side), and an
    /// optional en-passant target square.
    pub fn from_arrangement(
        pieces: &[Piece],
        to_move: Color,
        castling_rights: u8,
        en_passant: Option<Square>,
    ) -> ChessResult<Self> {
        if pieces.len() != 64 {
            return Err(ChessError::InvalidArrangement(pieces.len()));
        }

        let mut position = Self {
            piece_bitboards: [0; 15],
            occupied: 0,
            square_piece: [NONE; 64],
            castle_short: [0; 2],
            castle_long: [0; 2],
            color_to_move: to_move,
            en_passant_history: Vec::new(),
            fifty_history: Vec::new(),
            move_history: Vec::new(),
            stats_attack_queries: Cell::new(0),
            stats_legal_move_calls: Cell::new(0),
        };

        for (square, &piece) in pieces.iter().enumerate() {
            position.square_piece[square] = piece;
            if piece == NONE {
                continue;
            }
            position.piece_bitboards[piece] |= 1u64 << square;
            position.piece_bitboards[piece::color(piece)] |= 1u64 << square;
            position.occupied |= 1u64 << square;
        }

        position.castle_short[WHITE] = (castling_rights & 0b0001) as i32;
        position.castle_short[BLACK] = ((castling_rights & 0b0010) >> 1) as i32;
        position.castle_long[WHITE] = ((castling_rights & 0b0100) >> 2) as i32;
        position.castle_long[BLACK] = ((castling_rights & 0b1000) >> 3) as i32;

        position.en_passant_history.push(en_passant);
        Ok(position)
    }

    /// The standard starting position.
    pub fn initial() -> Self {
        Self::from_arrangement(&piece::INITIAL_PIECES, WHITE, 0b1111, None)
            .expect("the starting arrangement has 64 squares")
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.square_piece[square]
    }

    /// Current en-passant target square, if any.
    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_history.last().copied().flatten()
    }

    /// Half-moves since the last capture or pawn move.
    #[inline]
    pub fn fifty_count(&self) -> u32 {
        self.fifty_history.last().copied().unwrap_or(0)
    }

    /// Total number of applied, not-yet-undone half-moves.
    #[inline]
    pub fn half_moves(&self) -> usize {
        self.move_history.len()
    }

    #[inline]
    pub fn any_moves(&self) -> bool {
        !self.move_history.is_empty()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        only_bit_index(self.piece_bitboards[color | KING])
    }

    /// Whether any enemy piece of `color`'s opponent attacks `square`.
    ///
    /// Non-sliders are answered from the static tables; sliders first pass a
    /// cheap reachability test against the full diagonal/axis masks before
    /// the ray computation is paid for.
    pub fn is_attacked(&self, color: Color, square: Square) -> bool {
        self.stats_attack_queries
            .set(self.stats_attack_queries.get() + 1);

        let enemy = 1 - color;

        if self.piece_bitboards[enemy | KNIGHT] & attacks::knight(square) != 0
            || self.piece_bitboards[enemy | PAWN] & attacks::pawn(color, square) != 0
            || self.piece_bitboards[enemy | KING] & attacks::king(square) != 0
        {
            return true;
        }

        let bishop_queen =
            self.piece_bitboards[enemy | BISHOP] | self.piece_bitboards[enemy | QUEEN];
        if bishop_queen & rays::DIAGONALS[square] != 0
            && bishop_queen & attacks::bishop(square, self.occupied) != 0
        {
            return true;
        }

        let rook_queen = self.piece_bitboards[enemy | ROOK] | self.piece_bitboards[enemy | QUEEN];
        if rook_queen & rays::AXES[square] != 0
            && rook_queen & attacks::rook(square, self.occupied) != 0
        {
            return true;
        }

        false
    }

    /// Whether the piece on `from_square` attacks `to_square`.
    pub fn attacks_from(&self, from_square: Square, to_square: Square) -> bool {
        self.stats_attack_queries
            .set(self.stats_attack_queries.get() + 1);

        let piece = self.square_piece[from_square];
        let target = 1u64 << to_square;
        match piece & KIND_MASK {
            PAWN => attacks::pawn(piece::color(piece), from_square) & target != 0,
            KNIGHT => attacks::knight(from_square) & target != 0,
            BISHOP => attacks::bishop(from_square, self.occupied) & target != 0,
            ROOK => attacks::rook(from_square, self.occupied) & target != 0,
            QUEEN => attacks::queen(from_square, self.occupied) & target != 0,
            KING => attacks::king(from_square) & target != 0,
            _ => false,
        }
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_attacked(color, self.king_square(color))
    }

    /// Check is given in the current position.
    #[inline]
    pub fn check(&self) -> bool {
        self.is_in_check(self.color_to_move)
    }

    pub fn checkmate(&mut self) -> bool {
        self.check() && self.legal_moves().is_empty()
    }

    pub fn stalemate(&mut self) -> bool {
        !self.check() && self.legal_moves().is_empty()
    }

    pub fn game_finished(&mut self) -> bool {
        self.fifty_count() >= 50 || self.legal_moves().is_empty()
    }

    pub fn status(&mut self) -> GameStatus {
        if self.fifty_count() >= 50 {
            return GameStatus::DrawByFiftyMoveRule;
        }
        if self.legal_moves().is_empty() {
            if self.check() {
                return if self.color_to_move == BLACK {
                    GameStatus::WhiteWinsByCheckmate
                } else {
                    GameStatus::BlackWinsByCheckmate
                };
            }
            return GameStatus::DrawByStalemate;
        }
        GameStatus::InProgress
    }

    pub fn stats_reset(&self) {
        self.stats_attack_queries.set(0);
        self.stats_legal_move_calls.set(0);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

/// State comparison ignores the statistics counters.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.piece_bitboards == other.piece_bitboards
            && self.occupied == other.occupied
            && self.square_piece == other.square_piece
            && self.castle_short == other.castle_short
            && self.castle_long == other.castle_long
            && self.color_to_move == other.color_to_move
            && self.en_passant_history == other.en_passant_history
            && self.fifty_history == other.fifty_history
            && self.move_history == other.move_history
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                write!(f, "{}", piece::to_char(self.square_piece[rank * 8 + file]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
