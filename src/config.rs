use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub board: BoardConfig,
    pub words: WordsConfig,
    pub settings: SettingsConfig,
}

/// Board dimensions and placement limits
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub max_placement_attempts: u32,
    /// Allow words to run right-to-left, bottom-to-top, and up-left diagonals
    pub allow_reversed: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            max_placement_attempts: 200,
            allow_reversed: true,
        }
    }
}

impl BoardConfig {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    /// Longest straight run on the board
    pub fn longest_run(&self) -> usize {
        self.height.max(self.width)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordsConfig {
    pub word_list_path: String,
    pub words_per_level: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingsConfig {
    pub game_settings_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = BoardConfig::default();
        let board = BoardConfig {
            height: env::var("BOARD_HEIGHT")
                .unwrap_or_else(|_| defaults.height.to_string())
                .parse()
                .context("BOARD_HEIGHT must be a number")?,
            width: env::var("BOARD_WIDTH")
                .unwrap_or_else(|_| defaults.width.to_string())
                .parse()
                .context("BOARD_WIDTH must be a number")?,
            max_placement_attempts: env::var("BOARD_MAX_PLACEMENT_ATTEMPTS")
                .unwrap_or_else(|_| defaults.max_placement_attempts.to_string())
                .parse()
                .unwrap_or(defaults.max_placement_attempts),
            allow_reversed: env::var("BOARD_ALLOW_REVERSED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("BOARD_ALLOW_REVERSED must be true or false")?,
        };

        if board.height == 0 || board.width == 0 {
            anyhow::bail!("Board dimensions must be at least 1x1");
        }

        let words = WordsConfig {
            word_list_path: env::var("WORD_LIST_PATH")
                .unwrap_or_else(|_| "./words.txt".to_string()),
            words_per_level: env::var("WORDS_PER_LEVEL")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .unwrap_or(8),
        };

        let settings = SettingsConfig {
            game_settings_path: env::var("GAME_SETTINGS_PATH")
                .unwrap_or_else(|_| "./game_settings.toml".to_string()),
        };

        Ok(Config {
            board,
            words,
            settings,
        })
    }

    pub fn board_size(&self) -> String {
        format!("{}x{}", self.board.height, self.board.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_defaults() {
        let board = BoardConfig::default();
        assert_eq!((board.height, board.width), (10, 10));
        assert!(board.allow_reversed);
        assert_eq!(BoardConfig::new(4, 7).longest_run(), 7);
    }
}
