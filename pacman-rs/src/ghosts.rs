use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{Direction, PacmanGame};

/// Something that can pick moves for the ghost
///
/// `None` means the ghost has nowhere to go and stays where it is.
pub trait GhostAgent {
    fn name(&self) -> &'static str;
    fn get_action(&mut self, game: &PacmanGame) -> Option<Direction>;
}

/// Picks uniformly between the legal moves
#[derive(Debug, Clone)]
pub struct RandomGhost {
    rng: StdRng,
}

impl RandomGhost {
    /// The same seed always gives the same sequence of moves
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl GhostAgent for RandomGhost {
    fn name(&self) -> &'static str {
        "random"
    }

    fn get_action(&mut self, game: &PacmanGame) -> Option<Direction> {
        game.legal_ghost_actions().choose(&mut self.rng).copied()
    }
}

/// Heads straight for Pacman, ignoring walls when measuring the distance
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyGhost;

impl GhostAgent for GreedyGhost {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn get_action(&mut self, game: &PacmanGame) -> Option<Direction> {
        let pacman = game.pacman();

        // min_by_key keeps the first of equal elements
        game.legal_ghost_actions()
            .into_iter()
            .min_by_key(|d| d.apply(game.ghost()).manhattan_distance(&pacman))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MAZE: &str = include_str!("../layouts/small_maze.lay");

    #[test]
    fn test_random_ghost_only_picks_legal_moves() {
        let game = PacmanGame::from_layout_str(SMALL_MAZE).unwrap();
        let mut ghost = RandomGhost::new(7);

        for _ in 0..50 {
            let action = ghost.get_action(&game).unwrap();
            assert!(game.legal_ghost_actions().contains(&action));
        }
    }

    #[test]
    fn test_random_ghost_is_reproducible() {
        let game = PacmanGame::from_layout_str(SMALL_MAZE).unwrap();

        let mut first = RandomGhost::new(42);
        let mut second = RandomGhost::new(42);
        let a: Vec<_> = (0..20).map(|_| first.get_action(&game)).collect();
        let b: Vec<_> = (0..20).map(|_| second.get_action(&game)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_greedy_ghost_closes_in() {
        let game = PacmanGame::from_layout_str(include_str!("../layouts/corridor.lay")).unwrap();

        assert_eq!(GreedyGhost.get_action(&game), Some(Direction::West));
    }

    #[test]
    fn test_greedy_ghost_breaks_ties_in_order() {
        // Pacman is straight north, with both sideways moves the same distance away
        let game = PacmanGame::from_layout_str("%%%%%\n%%P%%\n% G %\n%%%%%\n").unwrap();

        assert_eq!(
            game.legal_ghost_actions(),
            vec![Direction::North, Direction::East, Direction::West]
        );
        assert_eq!(GreedyGhost.get_action(&game), Some(Direction::North));

        let game = PacmanGame::from_layout_str("%%%%%\n% P %\n%%%%%\n% G %\n%%%%%\n").unwrap();
        assert_eq!(
            game.legal_ghost_actions(),
            vec![Direction::East, Direction::West]
        );
        assert_eq!(GreedyGhost.get_action(&game), Some(Direction::East));
    }

    #[test]
    fn test_boxed_in_ghost_stays_put() {
        let game = PacmanGame::from_layout_str("%%%%%\n%P%G%\n%%%%%\n").unwrap();

        assert_eq!(GreedyGhost.get_action(&game), None);
        assert_eq!(RandomGhost::new(1).get_action(&game), None);
    }
}
