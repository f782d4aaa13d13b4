use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::FoundWord;

/// Length bucket that decides a word's point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    ThreeToFive,
    SixToEight,
    NineToTen,
    ElevenPlus,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::ThreeToFive,
        Tier::SixToEight,
        Tier::NineToTen,
        Tier::ElevenPlus,
    ];

    /// Tier for a word of `len` characters. Words shorter than 3 score nothing.
    pub const fn for_length(len: usize) -> Option<Tier> {
        match len {
            0..=2 => None,
            3..=5 => Some(Tier::ThreeToFive),
            6..=8 => Some(Tier::SixToEight),
            9..=10 => Some(Tier::NineToTen),
            _ => Some(Tier::ElevenPlus),
        }
    }

    /// Settings key holding this tier's points.
    pub const fn key(self) -> &'static str {
        match self {
            Tier::ThreeToFive => "points_per_3_to_5_letter_word",
            Tier::SixToEight => "points_per_6_to_8_letter_word",
            // The stored key really does say 8_to_10
            Tier::NineToTen => "points_per_8_to_10_letter_word",
            Tier::ElevenPlus => "points_per_11_to_20_letter_word",
        }
    }

    pub const fn fallback(self) -> u32 {
        match self {
            Tier::ThreeToFive => 1,
            Tier::SixToEight => 2,
            Tier::NineToTen => 3,
            Tier::ElevenPlus => 6,
        }
    }

    pub fn from_key(key: &str) -> Option<Tier> {
        Self::ALL.into_iter().find(|tier| tier.key() == key)
    }
}

/// Point values per tier as fetched from the `game_settings` category.
/// Unset (or zero) tiers fall back to the built-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(rename = "points_per_3_to_5_letter_word", default)]
    pub three_to_five: Option<u32>,
    #[serde(rename = "points_per_6_to_8_letter_word", default)]
    pub six_to_eight: Option<u32>,
    #[serde(rename = "points_per_8_to_10_letter_word", default)]
    pub nine_to_ten: Option<u32>,
    #[serde(rename = "points_per_11_to_20_letter_word", default)]
    pub eleven_plus: Option<u32>,
}

impl ScoringConfig {
    pub fn configured(&self, tier: Tier) -> Option<u32> {
        match tier {
            Tier::ThreeToFive => self.three_to_five,
            Tier::SixToEight => self.six_to_eight,
            Tier::NineToTen => self.nine_to_ten,
            Tier::ElevenPlus => self.eleven_plus,
        }
    }

    pub fn with_tier(mut self, tier: Tier, points: u32) -> Self {
        let slot = match tier {
            Tier::ThreeToFive => &mut self.three_to_five,
            Tier::SixToEight => &mut self.six_to_eight,
            Tier::NineToTen => &mut self.nine_to_ten,
            Tier::ElevenPlus => &mut self.eleven_plus,
        };
        *slot = Some(points);
        self
    }

    /// Resolved points for a tier: the configured value when non-zero,
    /// otherwise the fallback.
    pub fn points_for(&self, tier: Tier) -> u32 {
        self.configured(tier)
            .filter(|points| *points != 0)
            .unwrap_or_else(|| tier.fallback())
    }

    /// Build a snapshot from a raw key-value settings category.
    /// Values may be JSON numbers or numeric strings; anything else is ignored.
    pub fn from_settings(settings: &HashMap<String, Value>) -> Self {
        let mut config = Self::default();

        for (key, value) in settings {
            let Some(tier) = Tier::from_key(key) else {
                continue;
            };

            match parse_points(value) {
                Some(points) => config = config.with_tier(tier, points),
                None => {
                    tracing::warn!("Ignoring non-numeric scoring setting {} = {}", key, value);
                }
            }
        }

        config
    }
}

/// Non-negative whole numbers, given as integers, floats like `5.0`,
/// or strings of either.
fn parse_points(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(n) => u32::try_from(n).ok(),
            None => n.as_f64().and_then(whole_points),
        },
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_points))
        }
        _ => None,
    }
}

fn whole_points(value: f64) -> Option<u32> {
    if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

pub struct WordScorer;

impl WordScorer {
    /// Points for a found word, by character length.
    ///
    /// | length | points (fallback) |
    /// |--------|-------------------|
    /// | 3-5    | 1                 |
    /// | 6-8    | 2                 |
    /// | 9-10   | 3                 |
    /// | 11+    | 6                 |
    ///
    /// Shorter words, including the empty word, score 0.
    pub fn points_for_word(word: &str, config: &ScoringConfig) -> u32 {
        Tier::for_length(word.chars().count())
            .map(|tier| config.points_for(tier))
            .unwrap_or(0)
    }

    /// Level total, recomputed from the found words.
    pub fn level_score(found: &[FoundWord], config: &ScoringConfig) -> u32 {
        found
            .iter()
            .map(|f| Self::points_for_word(&f.word, config))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn found(word: &str, points: u32) -> FoundWord {
        FoundWord {
            word: word.to_string(),
            positions: Vec::new(),
            points,
        }
    }

    #[test]
    fn test_fallback_tiers() {
        let config = ScoringConfig::default();
        assert_eq!(WordScorer::points_for_word("CAT", &config), 1);
        assert_eq!(WordScorer::points_for_word("HOUSE", &config), 1);
        assert_eq!(WordScorer::points_for_word("ELEPHANT", &config), 2);
        assert_eq!(WordScorer::points_for_word("DINOSSAURO", &config), 3);
        assert_eq!(WordScorer::points_for_word("EXTRAORDINARIO", &config), 6);
        assert_eq!(WordScorer::points_for_word("ABCDEFGHIJKLMNOPQRSTUVWXYZ", &config), 6);
    }

    #[test]
    fn test_short_words_score_nothing() {
        let config = ScoringConfig::default().with_tier(Tier::ThreeToFive, 5);
        assert_eq!(WordScorer::points_for_word("", &config), 0);
        assert_eq!(WordScorer::points_for_word("A", &config), 0);
        assert_eq!(WordScorer::points_for_word("AT", &config), 0);
    }

    #[test]
    fn test_length_counts_characters() {
        // 3 characters, 5 bytes
        assert_eq!(WordScorer::points_for_word("ÁÇO", &ScoringConfig::default()), 1);
        // 6 characters
        assert_eq!(WordScorer::points_for_word("AÇÃOXX", &ScoringConfig::default()), 2);
    }

    #[test]
    fn test_config_override() {
        let config = ScoringConfig::default().with_tier(Tier::ThreeToFive, 99);
        assert_eq!(WordScorer::points_for_word("CAT", &config), 99);
        // Other tiers keep their fallbacks
        assert_eq!(WordScorer::points_for_word("ELEPHANT", &config), 2);
    }

    #[test]
    fn test_zero_override_falls_back() {
        let config = ScoringConfig::default().with_tier(Tier::SixToEight, 0);
        assert_eq!(WordScorer::points_for_word("ELEPHANT", &config), 2);
    }

    #[test]
    fn test_from_settings() {
        let settings: HashMap<String, Value> = [
            ("points_per_3_to_5_letter_word", json!(10)),
            ("points_per_6_to_8_letter_word", json!("20")),
            ("points_per_8_to_10_letter_word", json!("lots")),
            ("points_per_11_to_20_letter_word", json!(-4)),
            ("daily_word_limit", json!(50)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let config = ScoringConfig::from_settings(&settings);
        assert_eq!(config.three_to_five, Some(10));
        assert_eq!(config.six_to_eight, Some(20));
        assert_eq!(config.nine_to_ten, None);
        assert_eq!(config.eleven_plus, None);
        assert_eq!(WordScorer::points_for_word("DINOSSAURO", &config), 3);
    }

    #[test]
    fn test_from_settings_accepts_whole_floats() {
        let settings: HashMap<String, Value> = [
            ("points_per_3_to_5_letter_word", json!(5.0)),
            ("points_per_6_to_8_letter_word", json!(" 8.0 ")),
            ("points_per_8_to_10_letter_word", json!(2.5)),
            ("points_per_11_to_20_letter_word", json!("NaN")),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let config = ScoringConfig::from_settings(&settings);
        assert_eq!(config.three_to_five, Some(5));
        assert_eq!(config.six_to_eight, Some(8));
        assert_eq!(config.nine_to_ten, None);
        assert_eq!(config.eleven_plus, None);
        assert_eq!(WordScorer::points_for_word("CAT", &config), 5);
    }

    #[test]
    fn test_deserialize_uses_setting_keys() {
        let config: ScoringConfig =
            serde_json::from_value(json!({ "points_per_8_to_10_letter_word": 7 })).unwrap();
        assert_eq!(config.points_for(Tier::NineToTen), 7);
        assert_eq!(config.points_for(Tier::ThreeToFive), 1);
    }

    #[test]
    fn test_level_score_is_a_fold() {
        let config = ScoringConfig::default();
        let words = vec![found("CAT", 1), found("ELEPHANT", 2)];
        let independent: u32 = words.iter().map(|f| f.points).sum();
        assert_eq!(WordScorer::level_score(&words, &config), 3);
        assert_eq!(WordScorer::level_score(&words, &config), independent);
        assert_eq!(WordScorer::level_score(&[], &config), 0);
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let config = ScoringConfig::default().with_tier(Tier::ElevenPlus, 12);
        for word in ["CAT", "EXTRAORDINARIO"] {
            assert_eq!(
                WordScorer::points_for_word(word, &config),
                WordScorer::points_for_word(word, &config)
            );
        }
    }
}
