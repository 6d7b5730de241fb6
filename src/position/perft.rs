//! Node-counting traversal for validating the move generator.

use crate::position::position::Position;

/// Counts the leaf nodes of the legal move tree to the given depth.
pub fn perft(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        position.apply(mv);
        nodes += perft(position, depth - 1);
        position.undo().expect("a move was just applied");
    }
    nodes
}
