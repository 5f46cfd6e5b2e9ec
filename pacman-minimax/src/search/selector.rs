use tracing::{debug, info, info_span, warn};

use crate::{AgentId, GameState};

use super::{Decision, SearchStats, SearchStrategy};

/// Picks the maximizer's move by running a [SearchStrategy] under each of its root moves
///
/// Root moves are looked at in the order the engine lists them. A move that wins on the spot is
/// taken right away without searching anything. Otherwise the move with the strictly highest
/// value wins, so ties go to the earliest move.
///
/// It also outputs traces using the [tracing] crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector<StrategyType> {
    strategy: StrategyType,
}

impl<StrategyType> MoveSelector<StrategyType> {
    /// Construct a new `MoveSelector` around the given strategy
    pub fn new(strategy: StrategyType) -> Self {
        Self { strategy }
    }

    /// The strategy used for each root move
    pub fn strategy(&self) -> &StrategyType {
        &self.strategy
    }

    /// Pick the next move to make
    ///
    /// This uses [MoveSelector::decide] and drops everything but the chosen move. `None` means
    /// the maximizer had no legal moves.
    pub fn select_move<GameType>(&self, root: &GameType) -> Option<GameType::Action>
    where
        GameType: GameState,
        StrategyType: SearchStrategy<GameType>,
    {
        self.decide(root).action()
    }

    /// Score the maximizer's root moves and pick one
    pub fn decide<GameType>(&self, root: &GameType) -> Decision<GameType::Action>
    where
        GameType: GameState,
        StrategyType: SearchStrategy<GameType>,
    {
        info_span!(
            "minimax_decision",
            strategy = self.strategy.name(),
            max_depth = ?self.strategy.max_depth(),
            chosen_score = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
            nodes_visited = tracing::field::Empty,
            leaf_evaluations = tracing::field::Empty,
        )
        .in_scope(|| {
            let decision = self.search_root(root);

            let current_span = tracing::Span::current();
            if let Some((action, score)) = decision.chosen {
                current_span.record("chosen_score", score);
                current_span.record("chosen_action", format!("{:?}", action).as_str());
            }
            current_span.record("nodes_visited", decision.stats.nodes_visited);
            current_span.record("leaf_evaluations", decision.stats.leaf_evaluations);

            decision
        })
    }

    fn search_root<GameType>(&self, root: &GameType) -> Decision<GameType::Action>
    where
        GameType: GameState,
        StrategyType: SearchStrategy<GameType>,
    {
        let mut stats = SearchStats::default();
        let mut frame = self.strategy.root_frame(root);
        let mut options = vec![];
        let mut chosen = None;

        for (child, action) in root.successors(AgentId::MAXIMIZER) {
            if child.is_win() {
                let score = child.score();
                info!(?action, score, "Found a move that wins right away");

                options.push((action, score));
                return Decision {
                    strategy: self.strategy.name(),
                    options,
                    chosen: Some((action, score)),
                    immediate_win: true,
                    stats,
                };
            }

            let value = self.strategy.reply_value(&frame, &child, &mut stats);
            debug!(?action, value, "Scored root move");
            options.push((action, value));

            let best = match chosen {
                Some((_, best)) if best >= value => best,
                _ => {
                    chosen = Some((action, value));
                    value
                }
            };

            self.strategy.record_best(&mut frame, best);
        }

        if chosen.is_none() {
            warn!("The maximizer has no legal moves");
        }

        Decision {
            strategy: self.strategy.name(),
            options,
            chosen,
            immediate_win: false,
            stats,
        }
    }
}
