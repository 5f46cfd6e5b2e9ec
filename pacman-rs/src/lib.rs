#[macro_use]
extern crate serde_derive;

pub use pacman_minimax::{AgentId, GameState, Position, Score};

pub mod agents;
pub mod ghosts;
pub mod layout;

mod game;
pub use game::{
    Direction, Outcome, PacmanGame, DEATH_PENALTY, FOOD_REWARD, GHOST, PACMAN, TIME_PENALTY,
    WIN_BONUS,
};

mod runner;
pub use runner::{run_game, GameRecord, RunOptions, Turn};

pub use agents::{
    all_factories, factory_by_name, AgentFactory, BoxedAgent, BoxedFactory, PacmanAgent,
    SearchAgent,
};
pub use ghosts::{GhostAgent, GreedyGhost, RandomGhost};
pub use layout::Layout;
