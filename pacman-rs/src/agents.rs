use anyhow::{anyhow, Result};
use pacman_minimax::search::{
    AlphaBetaSearch, ExhaustiveSearch, MoveSelector, SearchOptions, SearchStrategy,
};
use tracing::debug;

use crate::{Direction, PacmanGame};

pub type BoxedAgent = Box<dyn PacmanAgent + Send + Sync>;
pub type BoxedFactory = Box<dyn AgentFactory + Send + Sync>;

pub trait PacmanAgent {
    fn name(&self) -> &'static str;
    fn get_action(&self, game: &PacmanGame) -> Result<Direction>;
}

pub trait AgentFactory {
    fn name(&self) -> String;
    fn create_agent(&self, options: SearchOptions) -> BoxedAgent;
}

/// A Pacman agent that plays whatever its [MoveSelector] picks
#[derive(Debug, Clone, Copy)]
pub struct SearchAgent<StrategyType> {
    selector: MoveSelector<StrategyType>,
}

impl<StrategyType> SearchAgent<StrategyType> {
    pub fn new(strategy: StrategyType) -> Self {
        Self {
            selector: MoveSelector::new(strategy),
        }
    }
}

impl<StrategyType> PacmanAgent for SearchAgent<StrategyType>
where
    StrategyType: SearchStrategy<PacmanGame>,
{
    fn name(&self) -> &'static str {
        self.selector.strategy().name()
    }

    fn get_action(&self, game: &PacmanGame) -> Result<Direction> {
        let decision = self.selector.decide(game);
        debug!("\n{}", decision.to_text_tree());

        decision
            .action()
            .ok_or_else(|| anyhow!("{} found no legal move from\n{}", self.name(), game))
    }
}

pub struct MinimaxFactory;

impl AgentFactory for MinimaxFactory {
    fn name(&self) -> String {
        "minimax".to_owned()
    }

    fn create_agent(&self, options: SearchOptions) -> BoxedAgent {
        Box::new(SearchAgent::new(ExhaustiveSearch::new(options)))
    }
}

pub struct HMinimaxFactory;

impl AgentFactory for HMinimaxFactory {
    fn name(&self) -> String {
        "hminimax".to_owned()
    }

    fn create_agent(&self, options: SearchOptions) -> BoxedAgent {
        Box::new(SearchAgent::new(AlphaBetaSearch::new(options)))
    }
}

pub fn all_factories() -> Vec<BoxedFactory> {
    vec![Box::new(MinimaxFactory), Box::new(HMinimaxFactory)]
}

pub fn factory_by_name(name: &str) -> Result<BoxedFactory> {
    all_factories()
        .into_iter()
        .find(|f| f.name() == name)
        .ok_or_else(|| anyhow!("No agent called {:?}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(name: &str, max_depth: u32) -> BoxedAgent {
        factory_by_name(name).unwrap().create_agent(SearchOptions {
            max_depth,
            ..Default::default()
        })
    }

    fn game(text: &str) -> PacmanGame {
        PacmanGame::from_layout_str(text).unwrap()
    }

    #[test]
    fn test_factory_names() {
        let names: Vec<_> = all_factories().iter().map(|f| f.name()).collect();

        assert_eq!(names, vec!["minimax", "hminimax"]);
        let err = factory_by_name("expectimax").err().unwrap();
        assert!(err.to_string().contains("expectimax"));
        assert_eq!(agent("minimax", 9).name(), "minimax");
        assert_eq!(agent("hminimax", 9).name(), "hminimax");
    }

    #[test]
    fn test_both_agents_take_the_winning_move() {
        let game = game(include_str!("../layouts/win_next_door.lay"));

        assert_eq!(
            agent("minimax", 9).get_action(&game).unwrap(),
            Direction::East
        );
        assert_eq!(
            agent("hminimax", 9).get_action(&game).unwrap(),
            Direction::East
        );
    }

    #[test]
    fn test_hminimax_heads_for_the_food() {
        let game = game(include_str!("../layouts/corridor.lay"));

        let selector = MoveSelector::new(AlphaBetaSearch::new(SearchOptions {
            max_depth: 3,
            ..Default::default()
        }));
        let decision = selector.decide(&game);

        assert_eq!(decision.chosen, Some((Direction::East, -3)));
        // Stop is cut off as soon as it can't beat East
        assert_eq!(
            decision.options,
            vec![(Direction::East, -3), (Direction::Stop, -4)]
        );
        assert_eq!(
            agent("hminimax", 3).get_action(&game).unwrap(),
            Direction::East
        );
    }

    #[test]
    fn test_ties_go_to_the_first_move() {
        let game = game(include_str!("../layouts/empty_hall.lay"));

        let decision = MoveSelector::new(AlphaBetaSearch::new(SearchOptions {
            max_depth: 1,
            ..Default::default()
        }))
        .decide(&game);

        assert_eq!(
            decision.options,
            vec![(Direction::East, -1), (Direction::Stop, -1)]
        );
        assert_eq!(decision.action(), Some(Direction::East));
    }

    #[test]
    fn test_exhaustive_agent_terminates_when_stuck() {
        // Pacman can only stop, so every line of play repeats a state
        let game = game(include_str!("../layouts/trapped.lay"));

        assert_eq!(
            agent("minimax", 9).get_action(&game).unwrap(),
            Direction::Stop
        );
    }

    #[test]
    fn test_no_moves_is_an_error() {
        let won = game(include_str!("../layouts/win_next_door.lay"))
            .apply_pacman(Direction::East)
            .unwrap();

        for factory in all_factories() {
            let agent = factory.create_agent(SearchOptions::default());
            assert!(agent.get_action(&won).is_err());
        }
    }
}
