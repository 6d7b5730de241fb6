//! Attack masks for every piece type.
//!
//! Knight, king, and pawn attacks are fully precomputed per square. Sliding
//! attacks (rook/bishop/queen) are answered on demand from the precomputed
//! full-length rays: the ray is truncated at the first blocker, found with a
//! forward scan for rays pointing toward higher square indices and a reverse
//! scan for rays pointing toward lower ones. The blocker square itself stays
//! in the mask (it may be a capture target).

use crate::board::bit_ops::{bit_scan_forward, bit_scan_reverse};
use crate::board::rays;
use crate::position::piece::{Color, Square};

pub const KNIGHT_ATTACK: [u64; 64] = generate_knight_attacks();
pub const KING_ATTACK: [u64; 64] = generate_king_attacks();
pub const PAWN_ATTACK: [[u64; 64]; 2] = generate_pawn_attacks();

#[inline]
pub const fn knight(square: Square) -> u64 {
    KNIGHT_ATTACK[square]
}

#[inline]
pub const fn king(square: Square) -> u64 {
    KING_ATTACK[square]
}

/// Squares a pawn of `color` on `square` attacks (captures only).
#[inline]
pub const fn pawn(color: Color, square: Square) -> u64 {
    PAWN_ATTACK[color][square]
}

pub fn rook(square: Square, occupied: u64) -> u64 {
    let mut attack = rays::RAY_N[square];
    let blockers = attack & occupied;
    if blockers != 0 {
        attack ^= rays::RAY_N[bit_scan_forward(blockers)];
    }

    let mut part = rays::RAY_E[square];
    let blockers = part & occupied;
    if blockers != 0 {
        part ^= rays::RAY_E[bit_scan_forward(blockers)];
    }
    attack |= part;

    let mut part = rays::RAY_S[square];
    let blockers = part & occupied;
    if blockers != 0 {
        part ^= rays::RAY_S[bit_scan_reverse(blockers)];
    }
    attack |= part;

    let mut part = rays::RAY_W[square];
    let blockers = part & occupied;
    if blockers != 0 {
        part ^= rays::RAY_W[bit_scan_reverse(blockers)];
    }

    attack | part
}

pub fn bishop(square: Square, occupied: u64) -> u64 {
    let mut attack = rays::RAY_NE[square];
    let blockers = attack & occupied;
    if blockers != 0 {
        attack ^= rays::RAY_NE[bit_scan_forward(blockers)];
    }

    let mut part = rays::RAY_SE[square];
    let blockers = part & occupied;
    if blockers != 0 {
        part ^= rays::RAY_SE[bit_scan_reverse(blockers)];
    }
    attack |= part;

    let mut part = rays::RAY_SW[square];
    let blockers = part & occupied;
    if blockers != 0 {
        part ^= rays::RAY_SW[bit_scan_reverse(blockers)];
    }
    attack |= part;

    let mut part = rays::RAY_NW[square];
    let blockers = part & occupied;
    if blockers != 0 {
        part ^= rays::RAY_NW[bit_scan_forward(blockers)];
    }

    attack | part
}

#[inline]
pub fn queen(square: Square, occupied: u64) -> u64 {
    rook(square, occupied) | bishop(square, occupied)
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file + 1, rank + 2);
        attacks |= set_if_valid(file + 2, rank + 1);
        attacks |= set_if_valid(file + 2, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 2);
        attacks |= set_if_valid(file - 1, rank - 2);
        attacks |= set_if_valid(file - 2, rank - 1);
        attacks |= set_if_valid(file - 2, rank + 1);
        attacks |= set_if_valid(file - 1, rank + 2);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut dx = -1i32;

        while dx <= 1 {
            let mut dy = -1i32;
            while dy <= 1 {
                if dx != 0 || dy != 0 {
                    attacks |= set_if_valid(file + dx, rank + dy);
                }
                dy += 1;
            }
            dx += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_pawn_attacks() -> [[u64; 64]; 2] {
    let mut table = [[0u64; 64]; 2];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;

        table[0][sq] = set_if_valid(file - 1, rank + 1) | set_if_valid(file + 1, rank + 1);
        table[1][sq] = set_if_valid(file - 1, rank - 1) | set_if_valid(file + 1, rank - 1);

        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << ((rank as usize) * 8 + (file as usize))
}
