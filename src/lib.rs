//! Crate root module declarations for the Cobalt Chess engine core.
//!
//! This file exposes all top-level subsystems (board tables, position state,
//! move generation, evaluation, and search) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod board {
    pub mod attacks;
    pub mod bit_ops;
    pub mod rays;
}

pub mod position {
    pub mod make_unmake;
    pub mod move_encoding;
    pub mod move_gen;
    pub mod perft;
    pub mod piece;
    pub mod position;
}

pub mod eval {
    pub mod evaluation;
    pub mod piece_tables;
}

pub mod engine {
    pub mod alpha_beta;
    pub mod engine;
    pub mod minimax;
    pub mod move_ordering;
}

pub mod errors;
