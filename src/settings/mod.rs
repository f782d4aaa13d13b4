use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::game::ScoringConfig;

/// Settings category holding the scoring tiers
pub const GAME_SETTINGS_CATEGORY: &str = "game_settings";

/// Prefix for environment overrides, e.g. `WORDSEARCH__GAME_SETTINGS__POINTS_PER_3_TO_5_LETTER_WORD`
pub const ENV_PREFIX: &str = "WORDSEARCH";

/// Key-value settings store, grouped by category
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn fetch_category(&self, category: &str) -> Result<HashMap<String, Value>>;
}

/// In-memory settings, for tests and embedding hosts
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    categories: HashMap<String, HashMap<String, Value>>,
}

impl StaticSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: &str, key: &str, value: impl Into<Value>) -> Self {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }
}

#[async_trait]
impl SettingsSource for StaticSettings {
    async fn fetch_category(&self, category: &str) -> Result<HashMap<String, Value>> {
        Ok(self.categories.get(category).cloned().unwrap_or_default())
    }
}

/// Settings file (any format the `config` crate understands) with
/// environment overrides under `WORDSEARCH__<CATEGORY>__<KEY>`.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    required: bool,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    /// Fail the fetch when the file is missing
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[async_trait]
impl SettingsSource for FileSettings {
    async fn fetch_category(&self, category: &str) -> Result<HashMap<String, Value>> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(self.path.as_path()).required(self.required))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;

        match settings.get::<HashMap<String, Value>>(category) {
            Ok(values) => Ok(values),
            Err(::config::ConfigError::NotFound(_)) => Ok(HashMap::new()),
            Err(e) => Err(e).with_context(|| format!("Invalid settings category {}", category)),
        }
    }
}

/// Fetch the scoring snapshot. A failed fetch yields the fallback table.
pub async fn load_scoring_config(source: &dyn SettingsSource) -> Arc<ScoringConfig> {
    match source.fetch_category(GAME_SETTINGS_CATEGORY).await {
        Ok(values) => {
            let config = ScoringConfig::from_settings(&values);
            tracing::info!("Loaded scoring config: {:?}", config);
            Arc::new(config)
        }
        Err(e) => {
            tracing::warn!("Failed to load {}: {:#}. Using fallback scoring.", GAME_SETTINGS_CATEGORY, e);
            Arc::new(ScoringConfig::default())
        }
    }
}
