//! Plain minimax search.
//!
//! A reference search without pruning or move ordering. It visits the full
//! tree, so it is only practical at shallow depths, but its terminal handling
//! matches the alpha-beta path and it serves as a cross-check in tests.

use rand::seq::IndexedRandom;

use crate::engine::engine::Engine;
use crate::eval::evaluation::{EVAL_MAX, EVAL_MIN};
use crate::position::move_encoding::Move;
use crate::position::piece::WHITE;
use crate::position::position::Position;

impl Engine {
    /// Full-width search to `depth` plies, choosing uniformly at random
    /// among the moves sharing the best score.
    pub fn search_minimax(
        &mut self,
        position_to_analyze: &Position,
        depth: i32,
    ) -> Option<Move> {
        self.position = position_to_analyze.clone();
        self.position.stats_reset();

        if self.position.fifty_count() >= 50 {
            return None;
        }
        let moves = self.position.legal_moves();
        if moves.is_empty() {
            return None;
        }

        let maximizing = self.position.color_to_move == WHITE;
        let mut best_score = if maximizing { EVAL_MIN } else { EVAL_MAX };
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in moves {
            self.position.apply(mv);
            let score = self.minimax(depth - 1);
            self.position.undo().expect("a move was just applied");

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_moves.clear();
            }
            if score == best_score {
                best_moves.push(mv);
            }
        }

        best_moves.choose(&mut rand::rng()).copied()
    }

    fn minimax(&mut self, depth: i32) -> i32 {
        self.nodes += 1;

        if self.position.fifty_count() >= 50 {
            return 0;
        }
        if depth <= 0 {
            return self.evaluate();
        }

        let moves = self.position.legal_moves();
        if moves.is_empty() {
            return self.terminal_score(depth);
        }

        let maximizing = self.position.color_to_move == WHITE;
        let mut best = if maximizing { EVAL_MIN } else { EVAL_MAX };

        for mv in moves {
            self.position.apply(mv);
            let score = self.minimax(depth - 1);
            self.position.undo().expect("a move was just applied");

            if maximizing {
                best = best.max(score);
            } else {
                best = best.min(score);
            }
        }
        best
    }
}
