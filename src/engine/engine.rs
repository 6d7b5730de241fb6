//! Engine façade.
//!
//! `Engine` owns a private working copy of the position being analyzed plus
//! the evaluator, and exposes the search entry points implemented in the
//! sibling modules. Counters and the wall-clock thinking time are collected
//! into `EngineStats` after each search.

use chrono::{TimeDelta, Utc};

use crate::eval::evaluation::{Evaluation, CHECKMATE_BONUS};
use crate::position::move_encoding::Move;
use crate::position::piece::BLACK;
use crate::position::position::Position;

/// Default search horizon in plies.
pub const SEARCH_DEPTH: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Interior search nodes visited.
    pub nodes: u64,
    /// Static evaluations performed.
    pub evaluated: u64,
    /// Legal move generations performed.
    pub legal_move_calls: u64,
    /// Attack queries answered.
    pub attack_queries: u64,
    /// Wall-clock duration of the last search.
    pub think_time: TimeDelta,
}

pub struct Engine {
    pub(crate) position: Position,
    pub(crate) evaluation: Evaluation,
    pub(crate) depth: i32,
    pub(crate) nodes: u64,
    thinking: bool,
    think_time: TimeDelta,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    pub fn with_depth(depth: i32) -> Self {
        Self {
            position: Position::initial(),
            evaluation: Evaluation::new(),
            depth,
            nodes: 0,
            thinking: false,
            think_time: TimeDelta::zero(),
        }
    }

    /// Picks a move for the side to move in `position_to_analyze`, or `None`
    /// when the game is already over. The caller's position is never touched;
    /// the search works on an internal copy.
    pub fn best_move(&mut self, position_to_analyze: &Position) -> Option<Move> {
        self.stats_reset();
        self.thinking = true;
        let before = Utc::now();

        let depth = self.depth;
        let best = self.search_alpha_beta(position_to_analyze, depth);

        self.think_time = Utc::now() - before;
        self.thinking = false;
        best
    }

    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            nodes: self.nodes,
            evaluated: self.evaluation.stats_evaluated,
            legal_move_calls: self.position.stats_legal_move_calls.get(),
            attack_queries: self.position.stats_attack_queries.get(),
            think_time: self.think_time,
        }
    }

    pub fn stats_reset(&mut self) {
        self.nodes = 0;
        self.evaluation.stats_evaluated = 0;
        self.position.stats_reset();
        self.think_time = TimeDelta::zero();
    }

    #[inline]
    pub(crate) fn evaluate(&mut self) -> i32 {
        self.evaluation.evaluate(&self.position)
    }

    /// Score of an internal node with no legal moves: checkmate against the
    /// side to move, biased toward the shorter mate, or a stalemate draw.
    pub(crate) fn terminal_score(&mut self, depth: i32) -> i32 {
        if self.position.check() {
            let bonus = CHECKMATE_BONUS - (self.depth - depth);
            if self.position.color_to_move == BLACK {
                bonus
            } else {
                -bonus
            }
        } else {
            0
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_engine_has_clean_stats() {
        let engine = Engine::new();
        let stats = engine.stats();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.evaluated, 0);
        assert_eq!(stats.think_time, TimeDelta::zero());
        assert!(!engine.is_thinking());
        assert_eq!(engine.depth, SEARCH_DEPTH);
    }

    #[test]
    fn searching_populates_the_stats() {
        let mut engine = Engine::with_depth(2);
        let position = Position::initial();
        let best = engine.best_move(&position);
        assert!(best.is_some());

        let stats = engine.stats();
        assert!(stats.nodes > 0);
        assert!(stats.evaluated > 0);
        assert!(stats.legal_move_calls > 0);
        assert!(stats.attack_queries > 0);
        assert!(stats.think_time >= TimeDelta::zero());
    }
}
