//! Alpha-beta search with randomized tie-breaking at the root.
//!
//! The interior search is a fail-hard alpha-beta over the capture-ordered
//! move list. The root keeps every move's score and then picks uniformly at
//! random among the best move and any move within a small margin of it, so
//! repeated games from the same position vary. The margin never admits
//! losing moves or dilutes a mate: candidates must not concede the advantage
//! (non-negative for white, non-positive for black) and forced mates stand
//! alone.

use std::collections::HashMap;

use rand::seq::IndexedRandom;

use crate::engine::engine::Engine;
use crate::engine::move_ordering::sorted_moves;
use crate::eval::evaluation::{CHECKMATE_BONUS, EVAL_MAX, EVAL_MIN};
use crate::position::move_encoding::Move;
use crate::position::piece::WHITE;
use crate::position::position::Position;

/// Widest score gap to the best move that still enters the random draw.
pub const RANDOMISATION_MAX_DIFFERENCE: i32 = 15;

impl Engine {
    /// Searches `position_to_analyze` to `depth` plies and returns one of
    /// the near-best moves, or `None` when the game is over.
    pub fn search_alpha_beta(
        &mut self,
        position_to_analyze: &Position,
        depth: i32,
    ) -> Option<Move> {
        self.position = position_to_analyze.clone();
        self.position.stats_reset();

        if self.position.fifty_count() >= 50 {
            return None;
        }
        let moves = sorted_moves(&mut self.position);
        if moves.is_empty() {
            return None;
        }

        let mut scored: HashMap<i32, Vec<Move>> = HashMap::new();

        if self.position.color_to_move == WHITE {
            let mut alpha = EVAL_MIN;
            for mv in moves {
                self.position.apply(mv);
                // The child window is widened by the randomization margin so
                // near-best moves come back with exact scores instead of
                // failing low.
                let score = self.alpha_beta_min(
                    depth - 1,
                    alpha - 1 - RANDOMISATION_MAX_DIFFERENCE,
                    EVAL_MAX,
                );
                self.position.undo().expect("a move was just applied");

                if score > alpha {
                    alpha = score;
                }
                scored.entry(score).or_default().push(mv);
            }

            let mut potential = Vec::new();
            for (&score, group) in &scored {
                let close = score >= alpha - RANDOMISATION_MAX_DIFFERENCE
                    && score >= 0
                    && score <= CHECKMATE_BONUS - 1000;
                if score == alpha || close {
                    potential.extend_from_slice(group);
                }
            }
            potential.choose(&mut rand::rng()).copied()
        } else {
            let mut beta = EVAL_MAX;
            for mv in moves {
                self.position.apply(mv);
                let score = self.alpha_beta_max(
                    depth - 1,
                    EVAL_MIN,
                    beta + 1 + RANDOMISATION_MAX_DIFFERENCE,
                );
                self.position.undo().expect("a move was just applied");

                if score < beta {
                    beta = score;
                }
                scored.entry(score).or_default().push(mv);
            }

            let mut potential = Vec::new();
            for (&score, group) in &scored {
                let close = score <= beta + RANDOMISATION_MAX_DIFFERENCE
                    && score <= 0
                    && score >= -CHECKMATE_BONUS + 1000;
                if score == beta || close {
                    potential.extend_from_slice(group);
                }
            }
            potential.choose(&mut rand::rng()).copied()
        }
    }

    /// Maximizing node (white to move). Fail-hard: the result never leaves
    /// the `[alpha, beta]` window.
    fn alpha_beta_max(&mut self, depth: i32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if self.position.fifty_count() >= 50 {
            return 0;
        }
        if depth <= 0 {
            return self.evaluate();
        }

        let moves = sorted_moves(&mut self.position);
        if moves.is_empty() {
            return self.terminal_score(depth);
        }

        for mv in moves {
            self.position.apply(mv);
            let score = self.alpha_beta_min(depth - 1, alpha, beta);
            self.position.undo().expect("a move was just applied");

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    /// Minimizing node (black to move).
    fn alpha_beta_min(&mut self, depth: i32, alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if self.position.fifty_count() >= 50 {
            return 0;
        }
        if depth <= 0 {
            return self.evaluate();
        }

        let moves = sorted_moves(&mut self.position);
        if moves.is_empty() {
            return self.terminal_score(depth);
        }

        for mv in moves {
            self.position.apply(mv);
            let score = self.alpha_beta_max(depth - 1, alpha, beta);
            self.position.undo().expect("a move was just applied");

            if score <= alpha {
                return alpha;
            }
            if score < beta {
                beta = score;
            }
        }
        beta
    }
}
