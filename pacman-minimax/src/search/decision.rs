use std::fmt::Debug;

use text_trees::StringTreeNode;

use crate::Score;

use super::SearchStats;

#[derive(Debug, Clone)]
/// This is returned from [super::MoveSelector::decide]
/// It contains what we learned about each of the maximizer's moves at the root
pub struct Decision<Action: Copy + Debug> {
    /// Name of the strategy that produced this decision
    pub strategy: &'static str,
    /// Every root move that was looked at, in the order the engine listed them, with its value
    ///
    /// With [super::AlphaBetaSearch] the root window tightens after each move, so a later move
    /// that can't beat the best so far may be cut off early. Its number is then only an upper
    /// bound on its real value.
    ///
    /// When a move wins on the spot the moves after it are never looked at
    pub options: Vec<(Action, Score)>,
    /// The chosen move and its value. `None` when the root had no legal moves
    pub chosen: Option<(Action, Score)>,
    /// Whether the chosen move wins immediately, in which case nothing was searched
    pub immediate_win: bool,
    /// Counters from the search
    pub stats: SearchStats,
}

impl<Action: Copy + Debug> Decision<Action> {
    /// The move to make, if there is one
    pub fn action(&self) -> Option<Action> {
        self.chosen.map(|(action, _)| action)
    }

    /// The value of the chosen move
    pub fn score(&self) -> Option<Score> {
        self.chosen.map(|(_, score)| score)
    }

    /// This returns a visual representation of the decision
    /// It shows the chosen score at the top and each root move with its value below it
    ///
    /// ```text
    /// hminimax Some((East, -3))
    /// ├── North -20
    /// ├── East -3
    /// └── Stop -4
    /// ```
    pub fn to_text_tree(&self) -> String {
        let mut node = StringTreeNode::new(format!("{} {:?}", self.strategy, self.chosen));
        for (action, score) in &self.options {
            node.push_node(StringTreeNode::new(format!("{:?} {}", action, score)));
        }

        format!("{}", node)
    }
}
