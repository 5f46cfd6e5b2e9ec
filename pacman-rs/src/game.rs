use std::{collections::BTreeSet, fmt, sync::Arc};

use anyhow::{bail, Result};

use crate::{
    layout::{Layout, Walls},
    AgentId, GameState, Position, Score,
};

/// Every turn costs Pacman this much, standing still included
pub const TIME_PENALTY: Score = 1;
/// Reward for each food eaten
pub const FOOD_REWARD: Score = 10;
/// Bonus for eating the last food
pub const WIN_BONUS: Score = 500;
/// Penalty for being caught by the ghost
pub const DEATH_PENALTY: Score = 500;

/// Pacman is always the first agent
pub const PACMAN: AgentId = AgentId::MAXIMIZER;
/// The only ghost
pub const GHOST: AgentId = AgentId::DEFAULT_ADVERSARY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// The moving directions, in the order legal actions are listed
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn apply(&self, position: Position) -> Position {
        let (dx, dy) = match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        };

        Position::new(position.x + dx, position.y + dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stop => "stop",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// A snapshot of a game in progress
///
/// Moving never changes a `PacmanGame`, it hands back a new one. The walls are shared between
/// all the snapshots of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacmanGame {
    walls: Arc<Walls>,
    food: BTreeSet<Position>,
    pacman: Position,
    ghost: Position,
    score: Score,
    outcome: Outcome,
}

impl From<Layout> for PacmanGame {
    fn from(layout: Layout) -> Self {
        Self {
            walls: Arc::new(layout.walls),
            food: layout.food,
            pacman: layout.pacman,
            ghost: layout.ghost,
            score: 0,
            outcome: Outcome::InProgress,
        }
    }
}

impl PacmanGame {
    /// Parse a layout and start a game on it
    pub fn from_layout_str(text: &str) -> Result<Self> {
        Ok(Layout::parse(text)?.into())
    }

    pub fn pacman(&self) -> Position {
        self.pacman
    }

    pub fn ghost(&self) -> Position {
        self.ghost
    }

    pub fn food(&self) -> &BTreeSet<Position> {
        &self.food
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    /// North, South, East, West where there's no wall, then Stop
    pub fn legal_pacman_actions(&self) -> Vec<Direction> {
        if self.is_over() {
            return vec![];
        }

        let mut actions = self.open_moves(self.pacman);
        actions.push(Direction::Stop);
        actions
    }

    /// Ghosts can't stop, so this can be empty in a dead end with no exits at all
    pub fn legal_ghost_actions(&self) -> Vec<Direction> {
        if self.is_over() {
            return vec![];
        }

        self.open_moves(self.ghost)
    }

    fn open_moves(&self, from: Position) -> Vec<Direction> {
        Direction::MOVES
            .into_iter()
            .filter(|d| !self.walls.is_wall(d.apply(from)))
            .collect()
    }

    /// Move Pacman, failing if the move isn't legal
    pub fn apply_pacman(&self, action: Direction) -> Result<Self> {
        if !self.legal_pacman_actions().contains(&action) {
            bail!(
                "Pacman can't move {} from {:?} ({:?})",
                action,
                self.pacman,
                self.outcome
            );
        }

        Ok(self.move_pacman(action))
    }

    /// Move the ghost, failing if the move isn't legal
    pub fn apply_ghost(&self, action: Direction) -> Result<Self> {
        if !self.legal_ghost_actions().contains(&action) {
            bail!(
                "The ghost can't move {} from {:?} ({:?})",
                action,
                self.ghost,
                self.outcome
            );
        }

        Ok(self.move_ghost(action))
    }

    fn move_pacman(&self, action: Direction) -> Self {
        let mut next = self.clone();
        next.pacman = action.apply(self.pacman);
        next.score -= TIME_PENALTY;

        if next.food.remove(&next.pacman) {
            next.score += FOOD_REWARD;

            if next.food.is_empty() {
                next.score += WIN_BONUS;
                next.outcome = Outcome::Won;
            }
        }

        next.check_caught();
        next
    }

    fn move_ghost(&self, action: Direction) -> Self {
        let mut next = self.clone();
        next.ghost = action.apply(self.ghost);
        next.check_caught();
        next
    }

    fn check_caught(&mut self) {
        if self.pacman == self.ghost && self.outcome != Outcome::Won {
            self.score -= DEATH_PENALTY;
            self.outcome = Outcome::Lost;
        }
    }
}

impl GameState for PacmanGame {
    type Action = Direction;

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lost
    }

    fn score(&self) -> Score {
        self.score
    }

    fn maximizer_position(&self) -> Position {
        self.pacman
    }

    fn adversary_position(&self, _adversary: AgentId) -> Position {
        self.ghost
    }

    fn remaining_targets(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn successors(&self, agent: AgentId) -> Vec<(Self, Direction)> {
        if agent == PACMAN {
            self.legal_pacman_actions()
                .into_iter()
                .map(|action| (self.move_pacman(action), action))
                .collect()
        } else {
            self.legal_ghost_actions()
                .into_iter()
                .map(|action| (self.move_ghost(action), action))
                .collect()
        }
    }
}

impl fmt::Display for PacmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            Layout::render(&self.walls, &self.food, self.pacman, self.ghost)
        )
    }
}
