//! The two search strategies and the [MoveSelector] that drives them
//!
//! Both strategies evaluate the game from the maximizer's point of view: MAX nodes take the
//! highest value among the maximizer's moves and MIN nodes take the lowest value among the
//! adversary's moves. They differ in where they stop.
//!
//! - [ExhaustiveSearch] only stops at terminal states. To stay finite on games that can loop it
//!   keeps a [crate::SearchPath] of the states above the current node and never revisits them.
//! - [AlphaBetaSearch] stops after [SearchOptions::max_depth] plies and prunes subtrees that
//!   can't change the result.
//!
//! ```rust
//! use pacman_minimax::search::{AlphaBetaSearch, ExhaustiveSearch, SearchOptions};
//! use pacman_minimax::AgentId;
//!
//! let options = SearchOptions {
//!     max_depth: 4,
//!     ..Default::default()
//! };
//! assert_eq!(options.adversary, AgentId(1));
//!
//! let bounded = AlphaBetaSearch::new(options);
//! let exhaustive = ExhaustiveSearch::new(options);
//! # let _ = (bounded, exhaustive);
//! ```

use crate::{GameState, Score};

mod alpha_beta;
pub use alpha_beta::{AlphaBetaSearch, Window};

mod exhaustive;
pub use exhaustive::ExhaustiveSearch;

mod decision;
pub use decision::Decision;

mod selector;
pub use selector::MoveSelector;

use crate::AgentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Settings shared by the searchers
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use pacman_minimax::{search::SearchOptions, AgentId};
///
/// let defaults: SearchOptions = Default::default();
///
/// assert_eq!(defaults.max_depth, 9);
/// assert_eq!(defaults.adversary, AgentId(1));
/// ```
pub struct SearchOptions {
    /// How many plies [AlphaBetaSearch] looks ahead from the root, counting the root move itself
    ///
    /// [ExhaustiveSearch] ignores this
    pub max_depth: u32,
    /// The agent playing against the maximizer
    pub adversary: AgentId,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: 9,
            adversary: AgentId::DEFAULT_ADVERSARY,
        }
    }
}

/// Counters collected while making one decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every call into a MAX or MIN node, leaves included
    pub nodes_visited: u64,
    /// Nodes whose value came straight from the state instead of from children: terminals,
    /// depth cutoffs, and exhaustive nodes with nothing left to visit
    pub leaf_evaluations: u64,
    /// Alpha-beta cutoffs that skipped the remaining siblings
    pub cutoffs: u64,
}

/// A way of valuing the adversary's reply to one of the maximizer's root moves
///
/// [MoveSelector] enumerates the root moves itself and asks the strategy for the value of each
/// one. Anything the strategy wants to carry from one root move to the next (a visited set, an
/// alpha-beta window) lives in its [SearchStrategy::RootFrame].
pub trait SearchStrategy<GameType: GameState> {
    /// Per decision bookkeeping, created fresh for every root
    type RootFrame;

    /// A short name used in traces
    fn name(&self) -> &'static str;

    /// How deep the strategy searches, if it is bounded
    fn max_depth(&self) -> Option<u32>;

    /// Set up the bookkeeping for a new decision at `root`
    fn root_frame(&self, root: &GameType) -> Self::RootFrame;

    /// The value of `child` (a state reached by one of the maximizer's root moves) with the
    /// adversary to move
    fn reply_value(
        &self,
        frame: &Self::RootFrame,
        child: &GameType,
        stats: &mut SearchStats,
    ) -> Score;

    /// Called after every evaluated root move with the best value found so far
    fn record_best(&self, _frame: &mut Self::RootFrame, _best: Score) {}
}
