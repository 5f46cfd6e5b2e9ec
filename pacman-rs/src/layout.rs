use std::{collections::BTreeSet, str::FromStr};

use anyhow::{anyhow, bail, Context, Result};
use tracing::warn;

use crate::Position;

const WALL: char = '%';
const FOOD: char = '.';
const PACMAN: char = 'P';
const GHOST: char = 'G';
const CAPSULE: char = 'o';
const EMPTY: char = ' ';

/// The static part of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Walls {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;

        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Anything off the board counts as a wall
    pub fn is_wall(&self, position: Position) -> bool {
        self.index(position).map_or(true, |i| self.cells[i])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// A parsed layout: walls, food and where the two agents start
///
/// Layouts use the classic text format, one character per cell:
///
/// ```text
/// %%%%%%%%
/// %P  . G%
/// %%%%%%%%
/// ```
///
/// `%` is a wall, `.` is food, `P` is Pacman, `G` is the ghost. The first line is the top of the
/// board, so `y` counts up from the last line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: Walls,
    pub food: BTreeSet<Position>,
    pub pacman: Position,
    pub ghost: Position,
}

impl Layout {
    /// Parse a layout from its text form
    pub fn parse(text: &str) -> Result<Layout> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows
            .first()
            .map(|row| row.chars().count())
            .ok_or_else(|| anyhow!("Layout is empty"))?;
        let height = rows.len();

        let mut walls = Walls::new(width, height);
        let mut food = BTreeSet::new();
        let mut pacman = None;
        let mut ghost = None;

        for (row_index, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                bail!(
                    "Row {} is {} cells wide but the first row is {}",
                    row_index,
                    row_width,
                    width
                );
            }

            let y = (height - 1 - row_index) as i32;
            for (x, c) in row.chars().enumerate() {
                let position = Position::new(x as i32, y);

                match c {
                    WALL => {
                        let i = walls.index(position).context("Cell outside the board")?;
                        walls.cells[i] = true;
                    }
                    FOOD => {
                        food.insert(position);
                    }
                    PACMAN => {
                        if let Some(first) = pacman.replace(position) {
                            bail!(
                                "Found a second Pacman at {:?}, the first is at {:?}",
                                position,
                                first
                            );
                        }
                    }
                    GHOST => {
                        if let Some(first) = ghost.replace(position) {
                            bail!(
                                "Found a second ghost at {:?}, the first is at {:?}. Only one ghost is supported",
                                position,
                                first
                            );
                        }
                    }
                    CAPSULE => {
                        warn!(
                            ?position,
                            "Capsules are not supported, treating as an empty cell"
                        );
                    }
                    EMPTY => {}
                    other => bail!("Unknown layout character {:?} at {:?}", other, position),
                }
            }
        }

        Ok(Layout {
            walls,
            food,
            pacman: pacman.ok_or_else(|| anyhow!("Layout has no Pacman"))?,
            ghost: ghost.ok_or_else(|| anyhow!("Layout has no ghost"))?,
        })
    }

    /// Render the layout back into the text form
    pub fn render(
        walls: &Walls,
        food: &BTreeSet<Position>,
        pacman: Position,
        ghost: Position,
    ) -> String {
        let mut out = String::with_capacity((walls.width + 1) * walls.height);

        for y in (0..walls.height as i32).rev() {
            for x in 0..walls.width as i32 {
                let position = Position::new(x, y);
                let c = if position == pacman {
                    PACMAN
                } else if position == ghost {
                    GHOST
                } else if walls.is_wall(position) {
                    WALL
                } else if food.contains(&position) {
                    FOOD
                } else {
                    EMPTY
                };
                out.push(c);
            }
            out.push('\n');
        }

        out
    }
}

impl FromStr for Layout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Layout::parse(s)
    }
}
