use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use crate::{Direction, GameState, GhostAgent, Outcome, PacmanAgent, PacmanGame, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Limits for a single game
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use pacman_rs::RunOptions;
///
/// assert_eq!(RunOptions::default().max_turns, 1000);
/// ```
pub struct RunOptions {
    /// Stop after this many Pacman moves even if nobody has won yet
    pub max_turns: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { max_turns: 1000 }
    }
}

/// One Pacman move and the ghost's answer to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub pacman: Direction,
    /// `None` when the game ended on Pacman's move or the ghost had nowhere to go
    pub ghost: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub pacman_agent: &'static str,
    pub ghost_agent: &'static str,
    pub outcome: Outcome,
    pub score: Score,
    pub turns: usize,
    pub actions: Vec<Turn>,
}

/// Play `game` out with Pacman moving first, then the ghost, until the game ends or
/// [RunOptions::max_turns] Pacman moves have been made
pub fn run_game(
    game: PacmanGame,
    pacman: &dyn PacmanAgent,
    ghost: &mut dyn GhostAgent,
    options: &RunOptions,
) -> Result<GameRecord> {
    let span = info_span!("run_game", pacman = pacman.name(), ghost = ghost.name());
    let _guard = span.enter();

    let mut game = game;
    let mut actions = vec![];

    while !game.is_over() && actions.len() < options.max_turns {
        let turn = actions.len() + 1;

        let pacman_action = pacman
            .get_action(&game)
            .with_context(|| format!("Pacman had no move on turn {}", turn))?;
        game = game
            .apply_pacman(pacman_action)
            .with_context(|| format!("{} picked an illegal move", pacman.name()))?;

        let ghost_action = if game.is_over() {
            None
        } else {
            let ghost_action = ghost.get_action(&game);
            match ghost_action {
                Some(action) => {
                    game = game
                        .apply_ghost(action)
                        .with_context(|| format!("{} picked an illegal move", ghost.name()))?;
                }
                None => warn!(turn, "The ghost has no legal moves"),
            }
            ghost_action
        };

        debug!(
            turn,
            %pacman_action,
            ?ghost_action,
            score = game.score(),
            "Played turn\n{}",
            game
        );
        actions.push(Turn {
            pacman: pacman_action,
            ghost: ghost_action,
        });
    }

    let record = GameRecord {
        pacman_agent: pacman.name(),
        ghost_agent: ghost.name(),
        outcome: game.outcome(),
        score: game.score(),
        turns: actions.len(),
        actions,
    };
    info!(
        outcome = ?record.outcome,
        score = record.score,
        turns = record.turns,
        "Game over"
    );

    Ok(record)
}
