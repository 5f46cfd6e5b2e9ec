use derivative::Derivative;

use crate::{AgentId, ClosestTargetEval, GameState, Scorable, Score};

use super::{SearchOptions, SearchStats, SearchStrategy};

/// The alpha-beta window
///
/// `alpha` is the value the maximizer is already guaranteed somewhere above the current node and
/// `beta` is the value the adversary is already guaranteed. Once a node's value falls outside of
/// the window the other player will never let the game reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    #[allow(missing_docs)]
    pub alpha: Score,
    #[allow(missing_docs)]
    pub beta: Score,
}

impl Window {
    /// The window before anything is known: negative to positive infinity
    pub const FULL: Window = Window {
        alpha: Score::MIN,
        beta: Score::MAX,
    };
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
/// Depth limited minimax with alpha-beta pruning
///
/// States at the depth limit, and won or lost states, are scored with the evaluator. That
/// includes terminal states: they are not special cased to their raw score, so a lost state with
/// targets left is still penalised by the distance to them.
pub struct AlphaBetaSearch<ScorableType = ClosestTargetEval> {
    options: SearchOptions,
    #[derivative(Debug = "ignore")]
    evaluator: ScorableType,
}

impl AlphaBetaSearch<ClosestTargetEval> {
    /// Construct a new `AlphaBetaSearch` using [ClosestTargetEval] at the leaves
    pub fn new(options: SearchOptions) -> Self {
        Self::with_evaluator(options, ClosestTargetEval)
    }
}

impl Default for AlphaBetaSearch<ClosestTargetEval> {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl<ScorableType> AlphaBetaSearch<ScorableType> {
    /// Construct a new `AlphaBetaSearch` with your own leaf evaluation
    ///
    /// ```rust
    /// use pacman_minimax::search::{AlphaBetaSearch, SearchOptions};
    /// use pacman_minimax::{GameState, Score};
    ///
    /// fn score_only<G: GameState>(game: &G) -> Score {
    ///     game.score()
    /// }
    ///
    /// let search = AlphaBetaSearch::with_evaluator(SearchOptions::default(), score_only::<MyGame>);
    /// # #[derive(Clone)]
    /// # struct MyGame;
    /// # impl GameState for MyGame {
    /// #     type Action = ();
    /// #     fn is_win(&self) -> bool { false }
    /// #     fn is_lose(&self) -> bool { false }
    /// #     fn score(&self) -> Score { 0 }
    /// #     fn maximizer_position(&self) -> pacman_minimax::Position { Default::default() }
    /// #     fn adversary_position(&self, _: pacman_minimax::AgentId) -> pacman_minimax::Position { Default::default() }
    /// #     fn remaining_targets(&self) -> Vec<pacman_minimax::Position> { vec![] }
    /// #     fn successors(&self, _: pacman_minimax::AgentId) -> Vec<(Self, ())> { vec![] }
    /// # }
    /// ```
    pub fn with_evaluator(options: SearchOptions, evaluator: ScorableType) -> Self {
        Self { options, evaluator }
    }

    /// The options this searcher was built with
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// The value of `node` with the maximizer to move, searching `depth` more plies
    pub fn max_value<GameType>(
        &self,
        node: &GameType,
        window: Window,
        depth: u32,
        stats: &mut SearchStats,
    ) -> Score
    where
        GameType: GameState,
        ScorableType: Scorable<GameType>,
    {
        stats.nodes_visited += 1;

        if let Some(leaf) = self.cutoff(node, depth, stats) {
            return leaf;
        }

        let Window { mut alpha, beta } = window;
        let mut value = Score::MIN;

        for (next, _) in node.successors(AgentId::MAXIMIZER) {
            value = value.max(self.min_value(&next, Window { alpha, beta }, depth - 1, stats));

            if value >= beta {
                stats.cutoffs += 1;
                return value;
            }

            alpha = alpha.max(value);
        }

        value
    }

    /// The value of `node` with the adversary to move, searching `depth` more plies
    pub fn min_value<GameType>(
        &self,
        node: &GameType,
        window: Window,
        depth: u32,
        stats: &mut SearchStats,
    ) -> Score
    where
        GameType: GameState,
        ScorableType: Scorable<GameType>,
    {
        stats.nodes_visited += 1;

        if let Some(leaf) = self.cutoff(node, depth, stats) {
            return leaf;
        }

        let Window { alpha, mut beta } = window;
        let mut value = Score::MAX;

        for (next, _) in node.successors(self.options.adversary) {
            value = value.min(self.max_value(&next, Window { alpha, beta }, depth - 1, stats));

            if value <= alpha {
                stats.cutoffs += 1;
                return value;
            }

            beta = beta.min(value);
        }

        value
    }

    fn cutoff<GameType>(
        &self,
        node: &GameType,
        depth: u32,
        stats: &mut SearchStats,
    ) -> Option<Score>
    where
        GameType: GameState,
        ScorableType: Scorable<GameType>,
    {
        if depth == 0 || node.is_over() {
            stats.leaf_evaluations += 1;
            Some(self.evaluator.score(node))
        } else {
            None
        }
    }
}

impl<GameType, ScorableType> SearchStrategy<GameType> for AlphaBetaSearch<ScorableType>
where
    GameType: GameState,
    ScorableType: Scorable<GameType>,
{
    type RootFrame = Window;

    fn name(&self) -> &'static str {
        "hminimax"
    }

    fn max_depth(&self) -> Option<u32> {
        Some(self.options.max_depth)
    }

    fn root_frame(&self, _root: &GameType) -> Window {
        Window::FULL
    }

    fn reply_value(&self, window: &Window, child: &GameType, stats: &mut SearchStats) -> Score {
        // The root move itself used up one ply
        self.min_value(
            child,
            *window,
            self.options.max_depth.saturating_sub(1),
            stats,
        )
    }

    fn record_best(&self, window: &mut Window, best: Score) {
        window.alpha = window.alpha.max(best);
    }
}
