use crate::models::{Direction, Grid, PlacedWord, Position};

pub struct BoardGeometry;

impl BoardGeometry {
    /// Check if `word` can be read in a straight line anywhere in the grid.
    /// An empty word is never present.
    pub fn word_exists_in_grid(grid: &Grid, word: &str) -> bool {
        Self::locate_word(grid, word).is_some()
    }

    /// Find the first occurrence of `word`, scanning cells in row-major order
    /// and directions in `Direction::ALL` order.
    pub fn locate_word(grid: &Grid, word: &str) -> Option<PlacedWord> {
        let letters: Vec<char> = word.chars().collect();
        let first = *letters.first()?;

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let start = Position::new(row, col);
                if grid.at(start) != Some(first) {
                    continue;
                }

                for direction in Direction::ALL {
                    if let Some(positions) = Self::match_from(grid, &letters, start, direction) {
                        return Some(PlacedWord {
                            word: word.to_string(),
                            start,
                            direction,
                            positions,
                        });
                    }
                }
            }
        }

        None
    }

    fn match_from(
        grid: &Grid,
        letters: &[char],
        start: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let mut positions = Vec::with_capacity(letters.len());
        for (i, expected) in letters.iter().enumerate() {
            let pos = start.step(direction, i)?;
            if grid.at(pos)? != *expected {
                return None;
            }
            positions.push(pos);
        }
        Some(positions)
    }

    /// Read `len` letters from `start` along `direction`.
    /// Returns `None` if the run leaves the grid.
    pub fn extract_run(
        grid: &Grid,
        start: Position,
        direction: Direction,
        len: usize,
    ) -> Option<String> {
        (0..len)
            .map(|i| start.step(direction, i).and_then(|pos| grid.at(pos)))
            .collect()
    }

    /// Extract the letters under a traced path
    pub fn letters_at(grid: &Grid, positions: &[Position]) -> Option<String> {
        positions.iter().map(|pos| grid.at(*pos)).collect()
    }

    /// Validate that positions form a single straight line with no gaps,
    /// repeats, or turns. A single cell is a valid selection.
    pub fn is_valid_linear_selection(positions: &[Position]) -> bool {
        match positions {
            [] => false,
            [_] => true,
            [first, second, ..] => {
                let step = first.displacement_to(*second);
                if Direction::from_delta(step).is_none() {
                    return false;
                }
                positions
                    .windows(2)
                    .all(|pair| pair[0].displacement_to(pair[1]) == step)
            }
        }
    }

    /// Direction of a linear selection of two or more cells
    pub fn selection_direction(positions: &[Position]) -> Option<Direction> {
        match positions {
            [first, second, ..] if Self::is_valid_linear_selection(positions) => {
                Direction::from_delta(first.displacement_to(*second))
            }
            _ => None,
        }
    }
}
