//! Maze geometry: positions, directions, walls, and ASCII layout parsing.
//!
//! Coordinates are column/row with `y` growing downward, matching the row
//! order of the layout text. Row 0 is the top line of the layout.

use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Errors produced while parsing a maze layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze text is empty")]
    Empty,

    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown tile '{tile}' at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },

    #[error("layout has no hunter start ('P')")]
    MissingHunter,
}

/// A grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(self, other: Pos) -> f64 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as f64
    }

    /// The cell one step in the given direction. `Stop` is the identity.
    pub fn step(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.delta();
        Pos::new(self.x + dx, self.y + dy)
    }
}

/// A movement direction. `Stop` is the reserved idle token: always legal,
/// never productive, and filtered out by the decision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    South,
    East,
    West,
    Stop,
}

impl Dir {
    /// The four movement directions, excluding `Stop`.
    pub const CARDINAL: [Dir; 4] = [Dir::North, Dir::South, Dir::East, Dir::West];

    /// Grid delta for one step. North is up the layout text, so negative `y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::North => (0, -1),
            Dir::South => (0, 1),
            Dir::East => (1, 0),
            Dir::West => (-1, 0),
            Dir::Stop => (0, 0),
        }
    }
}

/// Immutable wall geometry, shared between states via `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Maze {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell is blocked. Out-of-bounds counts as a wall, so
    /// movement code never needs a separate bounds check.
    pub fn is_wall(&self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return true;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.walls[y * self.width + x]
    }
}

/// A parsed layout: wall geometry plus the initial placement of everything
/// that moves or gets eaten.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub maze: Arc<Maze>,
    pub hunter: Pos,
    pub chasers: Vec<Pos>,
    pub food: BTreeSet<Pos>,
    pub capsules: BTreeSet<Pos>,
}

impl Layout {
    /// Parse an ASCII layout.
    ///
    /// Tiles: `%` wall, `.` food pellet, `o` power capsule, `P` hunter
    /// start, `G` chaser start, space for open floor. Rows must all be the
    /// same width and exactly one `P` is required.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(MazeError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = vec![false; width * height];
        let mut hunter = None;
        let mut chasers = Vec::new();
        let mut food = BTreeSet::new();
        let mut capsules = BTreeSet::new();

        for (row, line) in rows.iter().enumerate() {
            let tiles: Vec<char> = line.chars().collect();
            if tiles.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    found: tiles.len(),
                    expected: width,
                });
            }
            for (col, &tile) in tiles.iter().enumerate() {
                let pos = Pos::new(col as i32, row as i32);
                match tile {
                    '%' => walls[row * width + col] = true,
                    ' ' => {}
                    '.' => {
                        food.insert(pos);
                    }
                    'o' => {
                        capsules.insert(pos);
                    }
                    'P' => hunter = Some(pos),
                    'G' => chasers.push(pos),
                    _ => return Err(MazeError::UnknownTile { tile, row, col }),
                }
            }
        }

        let hunter = hunter.ok_or(MazeError::MissingHunter)?;
        Ok(Layout {
            maze: Arc::new(Maze {
                width,
                height,
                walls,
            }),
            hunter,
            chasers,
            food,
            capsules,
        })
    }
}
