//! An explicit game graph for exercising the searchers
//!
//! Every node gets its own maximizer position so fingerprints only collide when a test asks for
//! it. Each call to `successors` is logged along with the chain of nodes that led to the caller.

use std::{cell::RefCell, rc::Rc};

use crate::{AgentId, GameState, Position, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
struct Node {
    score: Score,
    outcome: Outcome,
    maximizer: Position,
    adversary: Position,
    targets: Vec<Position>,
    maximizer_moves: Vec<(usize, char)>,
    adversary_moves: Vec<(usize, char)>,
}

impl Node {
    fn new(id: usize, score: Score, outcome: Outcome) -> Self {
        Self {
            score,
            outcome,
            maximizer: Position::new(id as i32, 0),
            adversary: Position::new(-1, -1),
            targets: vec![],
            maximizer_moves: vec![],
            adversary_moves: vec![],
        }
    }
}

#[derive(Debug)]
struct Graph {
    nodes: Vec<Node>,
    root: usize,
    expansions: RefCell<Vec<Vec<usize>>>,
}

#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    nodes: Vec<Node>,
}

impl GraphBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, score: Score, outcome: Outcome) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, score, outcome));
        id
    }

    pub(crate) fn node(&mut self, score: Score) -> usize {
        self.push(score, Outcome::InProgress)
    }

    pub(crate) fn win(&mut self, score: Score) -> usize {
        self.push(score, Outcome::Won)
    }

    pub(crate) fn lose(&mut self, score: Score) -> usize {
        self.push(score, Outcome::Lost)
    }

    pub(crate) fn is_terminal(&self, id: usize) -> bool {
        self.nodes[id].outcome != Outcome::InProgress
    }

    pub(crate) fn targets(&mut self, id: usize, targets: Vec<Position>) {
        self.nodes[id].targets = targets;
    }

    /// Give `id` the same position, adversary and targets as `other`, so the two share a
    /// fingerprint while keeping their own score, outcome and moves
    pub(crate) fn same_features_as(&mut self, id: usize, other: usize) {
        let source = self.nodes[other].clone();

        let node = &mut self.nodes[id];
        node.maximizer = source.maximizer;
        node.adversary = source.adversary;
        node.targets = source.targets;
    }

    pub(crate) fn max_edge(&mut self, from: usize, to: usize, action: char) {
        self.nodes[from].maximizer_moves.push((to, action));
    }

    pub(crate) fn min_edge(&mut self, from: usize, to: usize, action: char) {
        self.nodes[from].adversary_moves.push((to, action));
    }

    pub(crate) fn build(self, root: usize) -> TreeGame {
        let graph = Graph {
            nodes: self.nodes,
            root,
            expansions: RefCell::new(vec![]),
        };

        TreeGame {
            graph: Rc::new(graph),
            node: root,
            history: vec![],
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    graph: Rc<Graph>,
    node: usize,
    history: Vec<usize>,
}

impl TreeGame {
    /// A game made of one state with no moves
    pub(crate) fn single(score: Score, maximizer: Position, targets: Vec<Position>) -> Self {
        let mut graph = GraphBuilder::new();
        let id = graph.node(score);
        graph.nodes[id].maximizer = maximizer;
        graph.targets(id, targets);
        graph.build(id)
    }

    fn with_node(self, change: impl FnOnce(&mut Node)) -> Self {
        let mut nodes = self.graph.nodes.clone();
        change(&mut nodes[self.node]);

        GraphBuilder { nodes }.build(self.node)
    }

    pub(crate) fn with_adversary_at(self, adversary: Position) -> Self {
        self.with_node(|node| node.adversary = adversary)
    }

    pub(crate) fn won(self) -> Self {
        self.with_node(|node| node.outcome = Outcome::Won)
    }

    pub(crate) fn lost(self) -> Self {
        self.with_node(|node| node.outcome = Outcome::Lost)
    }

    /// The root of the same graph with an empty expansion log
    pub(crate) fn restart(&self) -> Self {
        self.graph.expansions.borrow_mut().clear();

        Self {
            graph: Rc::clone(&self.graph),
            node: self.graph.root,
            history: vec![],
        }
    }

    /// The node behind every `successors` call so far, in call order
    pub(crate) fn expansions(&self) -> Vec<usize> {
        self.graph
            .expansions
            .borrow()
            .iter()
            .filter_map(|path| path.last().copied())
            .collect()
    }

    /// For every `successors` call, the nodes from the root down to the expanded node
    pub(crate) fn expansion_paths(&self) -> Vec<Vec<usize>> {
        self.graph.expansions.borrow().clone()
    }

    fn current(&self) -> &Node {
        &self.graph.nodes[self.node]
    }
}

impl GameState for TreeGame {
    type Action = char;

    fn is_win(&self) -> bool {
        self.current().outcome == Outcome::Won
    }

    fn is_lose(&self) -> bool {
        self.current().outcome == Outcome::Lost
    }

    fn score(&self) -> Score {
        self.current().score
    }

    fn maximizer_position(&self) -> Position {
        self.current().maximizer
    }

    fn adversary_position(&self, _adversary: AgentId) -> Position {
        self.current().adversary
    }

    fn remaining_targets(&self) -> Vec<Position> {
        self.current().targets.clone()
    }

    fn successors(&self, agent: AgentId) -> Vec<(Self, char)> {
        let mut path = self.history.clone();
        path.push(self.node);
        self.graph.expansions.borrow_mut().push(path.clone());

        let moves = if agent == AgentId::MAXIMIZER {
            &self.current().maximizer_moves
        } else {
            &self.current().adversary_moves
        };

        moves
            .iter()
            .map(|&(node, action)| {
                let next = TreeGame {
                    graph: Rc::clone(&self.graph),
                    node,
                    history: path.clone(),
                };
                (next, action)
            })
            .collect()
    }
}
