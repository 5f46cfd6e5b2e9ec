#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements minimax search for a two agent, turn alternating game: one agent (the
//! maximizer) tries to push the score up while a single adversary tries to push it down.
//!
//! The game itself lives outside this crate. You describe it by implementing [GameState], and
//! then pick one of the two strategies in [search]:
//!
//! - [ExhaustiveSearch] searches all the way down to terminal states, skipping states that were
//!   already seen along the current path so that cycles in the game graph end
//! - [AlphaBetaSearch] searches a fixed number of plies with alpha-beta pruning, and scores the
//!   states it stops at with a [Scorable] evaluator
//!
//! Both are driven from the root by a [MoveSelector].
//!
//! ```rust
//! use pacman_minimax::{AgentId, GameState, MoveSelector, Position, Score};
//! use pacman_minimax::search::{AlphaBetaSearch, SearchOptions};
//!
//! // A tiny game: the maximizer walks right along a line towards a single pellet at x = 2
//! #[derive(Debug, Clone)]
//! struct Line {
//!     x: i32,
//!     score: Score,
//! }
//!
//! impl GameState for Line {
//!     type Action = char;
//!
//!     fn is_win(&self) -> bool { self.x == 2 }
//!     fn is_lose(&self) -> bool { false }
//!     fn score(&self) -> Score { self.score }
//!     fn maximizer_position(&self) -> Position { Position::new(self.x, 0) }
//!     fn adversary_position(&self, _adversary: AgentId) -> Position { Position::new(-5, 0) }
//!     fn remaining_targets(&self) -> Vec<Position> {
//!         if self.is_win() { vec![] } else { vec![Position::new(2, 0)] }
//!     }
//!     fn successors(&self, agent: AgentId) -> Vec<(Self, char)> {
//!         if self.is_win() {
//!             return vec![];
//!         }
//!         if agent == AgentId::MAXIMIZER {
//!             vec![
//!                 (Line { x: self.x - 1, score: self.score - 1 }, 'L'),
//!                 (Line { x: self.x + 1, score: self.score - 1 }, 'R'),
//!             ]
//!         } else {
//!             vec![(self.clone(), '-')]
//!         }
//!     }
//! }
//!
//! let selector = MoveSelector::new(AlphaBetaSearch::new(SearchOptions {
//!     max_depth: 3,
//!     ..Default::default()
//! }));
//!
//! assert_eq!(selector.select_move(&Line { x: 0, score: 0 }), Some('R'));
//! ```

mod eval;
pub use eval::{closest_target_distance, evaluate, ClosestTargetEval, Scorable};

mod fingerprint;
pub use fingerprint::{fingerprint, Fingerprint, SearchPath};

mod game;
pub use game::{AgentId, GameState, Position, Score};

pub mod search;
pub use search::{
    AlphaBetaSearch, Decision, ExhaustiveSearch, MoveSelector, SearchOptions, SearchStats,
    SearchStrategy,
};

#[cfg(test)]
mod test_support;
