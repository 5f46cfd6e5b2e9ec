use crate::{fingerprint, AgentId, GameState, Score, SearchPath};

use super::{SearchOptions, SearchStats, SearchStrategy};

/// Minimax all the way down to terminal states, without pruning
///
/// Every node adds its [crate::Fingerprint] to a copy of the path it was called with, and
/// successors whose fingerprint is already on that path are skipped. That is the only thing that
/// stops the recursion on games with cycles, so the run time grows with the number of distinct
/// paths through the game and can be very large on open boards.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveSearch {
    adversary: AgentId,
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl ExhaustiveSearch {
    /// Construct a new `ExhaustiveSearch`. Only [SearchOptions::adversary] is used
    pub fn new(options: SearchOptions) -> Self {
        Self {
            adversary: options.adversary,
        }
    }

    /// The value of `node` with the maximizer to move
    pub fn max_value<GameType: GameState>(
        &self,
        node: &GameType,
        path: &SearchPath,
        stats: &mut SearchStats,
    ) -> Score {
        self.expand(node, path, AgentId::MAXIMIZER, stats)
    }

    /// The value of `node` with the adversary to move
    pub fn min_value<GameType: GameState>(
        &self,
        node: &GameType,
        path: &SearchPath,
        stats: &mut SearchStats,
    ) -> Score {
        self.expand(node, path, self.adversary, stats)
    }

    fn expand<GameType: GameState>(
        &self,
        node: &GameType,
        path: &SearchPath,
        mover: AgentId,
        stats: &mut SearchStats,
    ) -> Score {
        stats.nodes_visited += 1;

        if node.is_over() {
            stats.leaf_evaluations += 1;
            return node.score();
        }

        let path = path.extended_with(fingerprint(node, self.adversary));
        let is_maximizing = mover == AgentId::MAXIMIZER;

        let mut chosen: Option<Score> = None;
        for (next, _) in node.successors(mover) {
            if path.contains(&fingerprint(&next, self.adversary)) {
                continue;
            }

            let value = if is_maximizing {
                self.min_value(&next, &path, stats)
            } else {
                self.max_value(&next, &path, stats)
            };

            chosen = Some(match chosen {
                None => value,
                Some(current) if is_maximizing => current.max(value),
                Some(current) => current.min(value),
            });
        }

        // Everything below us is already on the path, so score this node as if it ended here
        chosen.unwrap_or_else(|| {
            stats.leaf_evaluations += 1;
            node.score()
        })
    }
}

impl<GameType: GameState> SearchStrategy<GameType> for ExhaustiveSearch {
    type RootFrame = SearchPath;

    fn name(&self) -> &'static str {
        "minimax"
    }

    fn max_depth(&self) -> Option<u32> {
        None
    }

    fn root_frame(&self, root: &GameType) -> SearchPath {
        SearchPath::starting_at(fingerprint(root, self.adversary))
    }

    fn reply_value(&self, path: &SearchPath, child: &GameType, stats: &mut SearchStats) -> Score {
        self.min_value(child, path, stats)
    }
}
