use crate::{GameState, Score};

/// This trait is used to control something that can return a score from a game state
///
/// The bounded searcher calls this on every state it stops at. Closures of the right shape
/// implement it too, so a one-off evaluation function can be passed in directly.
pub trait Scorable<GameType> {
    /// Convert the given state into a Score
    fn score(&self, game: &GameType) -> Score;
}

impl<GameType, FnLike: Fn(&GameType) -> Score> Scorable<GameType> for FnLike {
    fn score(&self, game: &GameType) -> Score {
        (self)(game)
    }
}

/// The default evaluator: the game score minus the distance to the closest target
///
/// See [evaluate]
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestTargetEval;

impl<GameType: GameState> Scorable<GameType> for ClosestTargetEval {
    fn score(&self, game: &GameType) -> Score {
        evaluate(game)
    }
}

/// Manhattan distance from the maximizer to the nearest remaining target
///
/// This is 0 when there are no targets left, which keeps the evaluation finite on every state
pub fn closest_target_distance<GameType: GameState>(game: &GameType) -> u32 {
    let start = game.maximizer_position();

    game.remaining_targets()
        .iter()
        .map(|target| start.manhattan_distance(target))
        .min()
        .unwrap_or(0)
}

/// `score - closest_target_distance`
///
/// The distance is a lower bound on the moves still needed to reach the next target, so among
/// states with equal scores the ones closer to a target come out ahead.
pub fn evaluate<GameType: GameState>(game: &GameType) -> Score {
    game.score() - Score::from(closest_target_distance(game))
}
