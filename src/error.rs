use thiserror::Error;

/// Errors raised while building or generating a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot place an empty word")]
    EmptyWord,

    #[error("{word} ({len} letters) does not fit a {height}x{width} board")]
    WordTooLong {
        word: String,
        len: usize,
        height: usize,
        width: usize,
    },

    #[error("could not place {word} after {attempts} attempts")]
    PlacementFailed { word: String, attempts: u32 },

    /// Generator postcondition: a placed word cannot be read back from the grid.
    #[error("placed word {word} is missing from the generated grid")]
    MissingWord { word: String },
}
