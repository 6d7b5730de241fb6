//! Precomputed ray masks and square-relation tables.
//!
//! Every table is built by a `const fn` generator at compile time and never
//! mutated afterwards, so the data is freely shared between concurrently
//! running engine instances. Rays extend from a square to the board edge,
//! excluding the origin square itself.

pub const RAY_N: [u64; 64] = generate_ray(0, 1);
pub const RAY_E: [u64; 64] = generate_ray(1, 0);
pub const RAY_S: [u64; 64] = generate_ray(0, -1);
pub const RAY_W: [u64; 64] = generate_ray(-1, 0);

pub const RAY_NE: [u64; 64] = generate_ray(1, 1);
pub const RAY_SE: [u64; 64] = generate_ray(1, -1);
pub const RAY_SW: [u64; 64] = generate_ray(-1, -1);
pub const RAY_NW: [u64; 64] = generate_ray(-1, 1);

/// Union of the four diagonal rays per square.
pub const DIAGONALS: [u64; 64] = union_rays(RAY_NE, RAY_SE, RAY_SW, RAY_NW);

/// Union of the four orthogonal rays per square.
pub const AXES: [u64; 64] = union_rays(RAY_N, RAY_E, RAY_S, RAY_W);

/// Squares strictly between two squares sharing a ray; empty for unaligned
/// pairs. Used for pin detection.
pub static SQUARES_BETWEEN: [[u64; 64]; 64] = generate_squares_between();

pub const RANK_1_BB: u64 = 0xFF;
pub const RANK_2_BB: u64 = 0xFF00;
pub const RANK_3_BB: u64 = 0xFF_0000;
pub const RANK_4_BB: u64 = 0xFF00_0000;
pub const RANK_5_BB: u64 = 0xFF_0000_0000;
pub const RANK_6_BB: u64 = 0xFF00_0000_0000;
pub const RANK_7_BB: u64 = 0xFF_0000_0000_0000;
pub const RANK_8_BB: u64 = 0xFF00_0000_0000_0000;

const fn generate_ray(file_step: i32, rank_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut file = (sq % 8) as i32 + file_step;
        let mut rank = (sq / 8) as i32 + rank_step;
        let mut ray = 0u64;

        while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            ray |= 1u64 << (rank * 8 + file) as usize;
            file += file_step;
            rank += rank_step;
        }

        table[sq] = ray;
        sq += 1;
    }

    table
}

const fn union_rays(
    a: [u64; 64],
    b: [u64; 64],
    c: [u64; 64],
    d: [u64; 64],
) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = a[sq] | b[sq] | c[sq] | d[sq];
        sq += 1;
    }

    table
}

const fn generate_squares_between() -> [[u64; 64]; 64] {
    const STEPS: [(i32, i32); 8] = [
        (0, 1),
        (1, 0),
        (0, -1),
        (-1, 0),
        (1, 1),
        (1, -1),
        (-1, -1),
        (-1, 1),
    ];

    let mut table = [[0u64; 64]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut dir = 0usize;
        while dir < 8 {
            let (file_step, rank_step) = STEPS[dir];
            let mut file = (sq % 8) as i32 + file_step;
            let mut rank = (sq / 8) as i32 + rank_step;
            let mut between = 0u64;

            while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
                let target = (rank * 8 + file) as usize;
                table[sq][target] = between;
                between |= 1u64 << target;
                file += file_step;
                rank += rank_step;
            }

            dir += 1;
        }
        sq += 1;
    }

    table
}

/// Collinearity test for three squares (cross-product form).
#[inline]
pub const fn aligned(square1: usize, square2: usize, square3: usize) -> bool {
    let x1 = (square1 & 7) as i32;
    let y1 = (square1 >> 3) as i32;
    let x2 = (square2 & 7) as i32;
    let y2 = (square2 >> 3) as i32;
    let x3 = (square3 & 7) as i32;
    let y3 = (square3 >> 3) as i32;

    (y2 - y1) * (x3 - x2) == (x2 - x1) * (y3 - y2)
}
