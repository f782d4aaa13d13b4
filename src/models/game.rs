use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position reached after `steps` moves along `direction`.
    /// Returns `None` if the walk leaves the non-negative quadrant.
    pub fn step(self, direction: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        Some(Position {
            row: self.row.checked_add_signed(dr.checked_mul(steps)?)?,
            col: self.col.checked_add_signed(dc.checked_mul(steps)?)?,
        })
    }

    /// Displacement `(Δrow, Δcol)` from `self` to `other`.
    pub fn displacement_to(self, other: Position) -> (isize, isize) {
        (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        )
    }
}

/// One of the 8 straight lines a word can be read along.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    East,
    South,
    SouthEast,
    West,
    North,
    NorthWest,
    SouthWest,
    NorthEast,
}

impl Direction {
    /// Scan order used by board validation.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::South,
        Direction::SouthEast,
        Direction::West,
        Direction::North,
        Direction::NorthWest,
        Direction::SouthWest,
        Direction::NorthEast,
    ];

    /// Unit vector as `(Δrow, Δcol)`.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
        }
    }

    pub fn from_delta(delta: (isize, isize)) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.delta() == delta)
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthEast => Direction::SouthWest,
        }
    }

    /// Left-to-right or top-to-bottom reading directions.
    pub const fn is_forward(self) -> bool {
        let (dr, dc) = self.delta();
        dc > 0 || (dc == 0 && dr > 0)
    }
}

/// Rectangular letter matrix for one level. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid, rejecting empty or ragged input.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(BoardError::EmptyGrid);
        }

        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BoardError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }

        Ok(Self { rows })
    }

    /// Parse one string per row, e.g. `["CAT", "XOX"]`.
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn at(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A word laid into a grid by the board generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
    pub positions: Vec<Position>,
}

impl PlacedWord {
    pub fn end(&self) -> Position {
        *self.positions.last().unwrap_or(&self.start)
    }
}

/// A generated level: the grid and the words hidden in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub grid: Grid,
    pub placed: Vec<PlacedWord>,
}

impl Board {
    pub fn target_words(&self) -> impl Iterator<Item = &str> {
        self.placed.iter().map(|p| p.word.as_str())
    }
}

/// A word the player traced and matched against the level's word list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub positions: Vec<Position>,
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_delta(direction.delta()), Some(direction));
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.is_forward(), direction.opposite().is_forward());
        }
        assert_eq!(Direction::from_delta((0, 0)), None);
        assert_eq!(Direction::from_delta((0, 2)), None);
    }

    #[test]
    fn test_position_step() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::SouthEast, 2), Some(Position::new(2, 2)));
        assert_eq!(origin.step(Direction::North, 1), None);
        assert_eq!(origin.step(Direction::West, 0), Some(origin));
    }

    #[test]
    fn test_grid_rejects_ragged_rows() {
        assert_eq!(
            Grid::from_strings(&["ABC", "DE"]),
            Err(BoardError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(Grid::from_strings::<&str>(&[]), Err(BoardError::EmptyGrid));
    }

    #[test]
    fn test_grid_display() {
        let grid = Grid::from_strings(&["AB", "CD"]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC D");
        assert_eq!(grid.at(Position::new(1, 0)), Some('C'));
        assert_eq!(grid.at(Position::new(2, 0)), None);
    }
}
