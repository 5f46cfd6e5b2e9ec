use std::fmt::Debug;

/// Scores, heuristic values and the alpha-beta window all share this type
///
/// `Score::MIN` and `Score::MAX` stand in for negative and positive infinity
pub type Score = i64;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    /// Construct a new `Position`
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The L1 distance between two cells
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Identifies one of the agents taking turns in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentId(pub u8);

impl AgentId {
    /// The agent we are choosing moves for
    pub const MAXIMIZER: AgentId = AgentId(0);

    /// The adversary used when nothing else is configured
    pub const DEFAULT_ADVERSARY: AgentId = AgentId(1);
}

/// The contract a game engine has to satisfy for the searchers to run on it
///
/// States are treated as immutable snapshots. [GameState::successors] must hand back new states
/// and leave `self` untouched.
pub trait GameState: Sized {
    /// The move label handed back to whoever asked for a move
    type Action: Copy + PartialEq + Debug;

    /// True if the maximizer has won in this state
    fn is_win(&self) -> bool;

    /// True if the maximizer has lost in this state
    fn is_lose(&self) -> bool;

    /// Terminal states are won or lost ones
    fn is_over(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// The current game score, from the maximizer's point of view
    fn score(&self) -> Score;

    /// Where the maximizer currently is
    fn maximizer_position(&self) -> Position;

    /// Where the given adversary currently is
    fn adversary_position(&self, adversary: AgentId) -> Position;

    /// The cells of every objective item that still has to be collected
    fn remaining_targets(&self) -> Vec<Position>;

    /// Every legal move for `agent` in this state, paired with the state it leads to
    ///
    /// The order is significant: ties between equally valued moves go to the first one.
    /// Terminal states may return an empty list.
    fn successors(&self, agent: AgentId) -> Vec<(Self, Self::Action)>;
}
