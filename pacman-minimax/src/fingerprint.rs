use std::hash::{Hash, Hasher};

use itertools::Itertools;
use rustc_hash::{FxHashSet, FxHasher};

use crate::{AgentId, GameState};

/// A compact identity for a state, used to spot states we have already seen on a search path
///
/// Only the maximizer's position, the remaining targets and the adversary's position go into it.
/// Two states that agree on those but got there differently (or have different scores) share a
/// fingerprint and are treated as the same state by [crate::ExhaustiveSearch]. Being a 64 bit
/// hash it can also collide outright, which is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// The raw hash value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Compute the [Fingerprint] for the given state
///
/// Targets are sorted before hashing so the order the engine lists them in doesn't matter
pub fn fingerprint<GameType: GameState>(game: &GameType, adversary: AgentId) -> Fingerprint {
    let mut hasher = FxHasher::default();

    game.maximizer_position().hash(&mut hasher);
    game.remaining_targets()
        .into_iter()
        .sorted()
        .collect_vec()
        .hash(&mut hasher);
    game.adversary_position(adversary).hash(&mut hasher);

    Fingerprint(hasher.finish())
}

/// The fingerprints of every state between the root and the node currently being searched
///
/// Paths are extended by copying, so a child never sees the fingerprints its siblings added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    visited: FxHashSet<Fingerprint>,
}

impl SearchPath {
    /// A path containing only the root
    pub fn starting_at(root: Fingerprint) -> Self {
        Self::default().extended_with(root)
    }

    /// A copy of this path with `fingerprint` added to the end
    pub fn extended_with(&self, fingerprint: Fingerprint) -> Self {
        let mut visited = self.visited.clone();
        visited.insert(fingerprint);

        Self { visited }
    }

    /// Has a state with this fingerprint already been visited on this path
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.visited.contains(fingerprint)
    }

    /// How many distinct fingerprints are on the path
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// True for the path of a search that hasn't started yet
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
