pub mod game;

pub use game::{Board, Direction, FoundWord, Grid, PlacedWord, Position};
