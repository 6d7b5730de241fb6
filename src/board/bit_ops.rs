//! Bit-scanning primitives over 64-bit masks.
//!
//! All functions are branch-light wrappers around hardware bit instructions.
//! `only_bit_index` assumes exactly one set bit; the result is meaningless
//! otherwise.

#[inline]
pub const fn bit_scan_forward(b: u64) -> usize {
    b.trailing_zeros() as usize
}

#[inline]
pub const fn bit_scan_reverse(b: u64) -> usize {
    63 - b.leading_zeros() as usize
}

#[inline]
pub const fn only_bit_index(b: u64) -> usize {
    b.trailing_zeros() as usize
}

/// Clears the least significant set bit and returns its index.
#[inline]
pub fn pop_ls(b: &mut u64) -> usize {
    let index = b.trailing_zeros() as usize;
    *b &= *b - 1;
    index
}

/// Keeps only the least significant set bit.
#[inline]
pub const fn isolate(b: u64) -> u64 {
    b & b.wrapping_neg()
}

#[inline]
pub const fn pop_count(b: u64) -> u32 {
    b.count_ones()
}
