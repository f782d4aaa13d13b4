use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use rand::{seq::IndexedRandom, Rng};
use tokio::fs;

/// Shortest word worth hiding on a board
pub const MIN_WORD_LEN: usize = 3;

/// Word list a level's targets are drawn from
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Load a word list from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read word list {}", path.display()))?;

        let bank = Self::from_lines(&content);
        tracing::info!("Loaded {} words into word bank", bank.len());

        Ok(bank)
    }

    /// Parse a word list. Blank lines and `#` comments are skipped,
    /// short words dropped, and duplicates removed keeping the first.
    pub fn from_lines(content: &str) -> Self {
        let mut seen = HashSet::new();
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_uppercase)
            .filter(|word| word.chars().count() >= MIN_WORD_LEN)
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words }
    }

    /// Check if a word is in the bank
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Draw up to `count` distinct words no longer than `max_len`
    pub fn pick(&self, count: usize, max_len: usize, rng: &mut impl Rng) -> Vec<String> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|word| word.chars().count() <= max_len)
            .collect();

        if candidates.len() < count {
            tracing::warn!(
                "Only {} words fit, wanted {}",
                candidates.len(),
                count
            );
        }

        candidates
            .choose_multiple(rng, count)
            .map(|word| (*word).clone())
            .collect()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_empty_bank() {
        let bank = WordBank::default();
        assert!(bank.is_empty());
        assert!(!bank.contains("TEST"));
    }

    #[test]
    fn test_from_lines_normalizes() {
        let bank = WordBank::from_lines("# animals\ncat\n  Dog \n\nox\nCAT\nelephant\n");
        assert_eq!(bank.words(), &["CAT", "DOG", "ELEPHANT"]);
        assert!(bank.contains("dog"));
        assert!(!bank.contains("OX"));
    }

    #[test]
    fn test_pick_respects_length_and_count() {
        let bank = WordBank::from_lines("cat\ndog\nelephant\nzebra\nhippopotamus\n");
        let mut rng = StdRng::seed_from_u64(11);

        let picked = bank.pick(3, 5, &mut rng);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|w| w.len() <= 5));

        let unique: HashSet<&String> = picked.iter().collect();
        assert_eq!(unique.len(), 3);

        // Asking for more than fit returns what there is
        assert_eq!(bank.pick(10, 5, &mut rng).len(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("word-bank-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "lion\ntiger\n").unwrap();

        let bank = tokio_test::block_on(WordBank::load(&path)).unwrap();
        assert_eq!(bank.len(), 2);

        std::fs::remove_file(&path).ok();
        assert!(tokio_test::block_on(WordBank::load(&path)).is_err());
    }
}
