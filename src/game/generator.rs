use std::collections::HashSet;
use std::ops::Range;

use rand::Rng;

use crate::{
    config::BoardConfig,
    error::BoardError,
    game::geometry::BoardGeometry,
    models::{Board, Direction, Grid, PlacedWord, Position},
    utils::letters::random_letter,
};

type Cells = Vec<Vec<Option<char>>>;

pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a board hiding every word in `words`, longest first,
    /// then fill the remaining cells with weighted random letters.
    pub fn generate<S: AsRef<str>>(
        words: &[S],
        config: &BoardConfig,
        rng: &mut impl Rng,
    ) -> Result<Board, BoardError> {
        let words = Self::prepare_words(words, config)?;
        let mut cells: Cells = vec![vec![None; config.width]; config.height];

        let mut placed = Vec::with_capacity(words.len());
        for word in &words {
            placed.push(Self::place_word(&mut cells, word, config, rng)?);
        }

        let mut rows = Vec::with_capacity(config.height);
        for row in cells {
            let mut letters = Vec::with_capacity(config.width);
            for cell in row {
                letters.push(match cell {
                    Some(letter) => letter,
                    None => random_letter(rng),
                });
            }
            rows.push(letters);
        }
        let grid = Grid::new(rows)?;

        Self::verify(&grid, &placed)?;

        tracing::debug!(
            "Generated {}x{} board with {} words",
            grid.height(),
            grid.width(),
            placed.len()
        );

        Ok(Board { grid, placed })
    }

    /// Uppercase, reject unplaceable words, drop duplicates, sort longest first
    fn prepare_words<S: AsRef<str>>(
        words: &[S],
        config: &BoardConfig,
    ) -> Result<Vec<String>, BoardError> {
        let mut seen = HashSet::new();
        let mut prepared = Vec::with_capacity(words.len());

        for word in words {
            let word = word.as_ref().trim().to_uppercase();
            let len = word.chars().count();
            if len == 0 {
                return Err(BoardError::EmptyWord);
            }
            if len > config.longest_run() {
                return Err(BoardError::WordTooLong {
                    word,
                    len,
                    height: config.height,
                    width: config.width,
                });
            }
            if !seen.insert(word.clone()) {
                tracing::debug!("Skipping duplicate word {}", word);
                continue;
            }
            prepared.push(word);
        }

        prepared.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Ok(prepared)
    }

    fn directions(config: &BoardConfig) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|d| config.allow_reversed || d.is_forward())
    }

    fn place_word(
        cells: &mut Cells,
        word: &str,
        config: &BoardConfig,
        rng: &mut impl Rng,
    ) -> Result<PlacedWord, BoardError> {
        let letters: Vec<char> = word.chars().collect();
        let len = letters.len();

        // Only directions with at least one in-bounds start for this length
        let candidates: Vec<(Direction, Range<usize>, Range<usize>)> = Self::directions(config)
            .filter_map(|direction| {
                let (dr, dc) = direction.delta();
                Some((
                    direction,
                    start_range(config.height, dr, len)?,
                    start_range(config.width, dc, len)?,
                ))
            })
            .collect();

        if !candidates.is_empty() {
            for _ in 0..config.max_placement_attempts {
                let (direction, rows, cols) = &candidates[rng.random_range(0..candidates.len())];
                let start = Position::new(
                    rng.random_range(rows.clone()),
                    rng.random_range(cols.clone()),
                );

                if let Some(positions) = Self::try_fit(cells, &letters, start, *direction) {
                    for (pos, letter) in positions.iter().zip(&letters) {
                        cells[pos.row][pos.col] = Some(*letter);
                    }
                    return Ok(PlacedWord {
                        word: word.to_string(),
                        start,
                        direction: *direction,
                        positions,
                    });
                }
            }
        }

        Err(BoardError::PlacementFailed {
            word: word.to_string(),
            attempts: config.max_placement_attempts,
        })
    }

    /// Cells are free or already hold the same letter (crossing words)
    fn try_fit(
        cells: &Cells,
        letters: &[char],
        start: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let mut positions = Vec::with_capacity(letters.len());
        for (i, letter) in letters.iter().enumerate() {
            let pos = start.step(direction, i)?;
            match cells.get(pos.row)?.get(pos.col)? {
                Some(existing) if existing != letter => return None,
                _ => positions.push(pos),
            }
        }
        Some(positions)
    }

    /// Every placed word must be readable from the finished grid
    fn verify(grid: &Grid, placed: &[PlacedWord]) -> Result<(), BoardError> {
        for placement in placed {
            if !BoardGeometry::word_exists_in_grid(grid, &placement.word) {
                tracing::error!(
                    "Placed word {} is missing from the generated grid:\n{}",
                    placement.word,
                    grid
                );
                return Err(BoardError::MissingWord {
                    word: placement.word.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Start indices along one axis for which a run of `len` cells stays in bounds.
/// An axis the run does not move along only needs one cell.
fn start_range(extent: usize, delta: isize, len: usize) -> Option<Range<usize>> {
    if len == 0 || extent == 0 {
        return None;
    }
    match delta {
        0 => Some(0..extent),
        1 if len <= extent => Some(0..extent - len + 1),
        -1 if len <= extent => Some(len - 1..extent),
        _ => None,
    }
}
