pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod settings;
pub mod utils;

pub use error::BoardError;
