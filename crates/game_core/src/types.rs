use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A grid cell: 0 for empty, otherwise a power of two >= 2.
pub type Cell = u32;

/// (row, column), 0-indexed, row-major.
pub type Coords = (usize, usize);

/// Origin -> destination for every tile that changed position during one move.
/// Both contributors of a merge map to the merge destination.
pub type SlideMap = BTreeMap<Coords, Coords>;

/// Merge destination -> merged value.
pub type MergeMap = BTreeMap<Coords, Cell>;

pub const EMPTY: Cell = 0;

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Maps position `k` along reduction line `line` to grid coordinates.
    ///
    /// Every direction is reduced as a "slide towards index 0" over lines, so
    /// LEFT reads rows forwards, RIGHT reads rows backwards, UP reads columns
    /// forwards and DOWN reads columns backwards.
    #[inline]
    pub(crate) fn coords(self, size: usize, line: usize, k: usize) -> Coords {
        match self {
            Direction::Left => (line, k),
            Direction::Right => (line, size - 1 - k),
            Direction::Up => (k, line),
            Direction::Down => (size - 1 - k, line),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Result of one whole-grid move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True iff at least one cell changed.
    pub moved: bool,
    pub slides: SlideMap,
    pub merges: MergeMap,
    /// Sum of the values created by merges in this move.
    pub score_delta: u64,
}

impl MoveOutcome {
    pub fn no_op() -> Self {
        Self::default()
    }
}
