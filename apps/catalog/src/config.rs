use std::env;

use crate::domain::Category;

pub const DEFAULT_API_ROOT: &str = "https://bymykel.github.io/CSGO-API/api";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_DISPLAY_REGION: &str = "data-display";
pub const DEFAULT_AUDIO_SRC: &str = "csgo_theme.mp3";
pub const DEFAULT_AUDIO_VOLUME: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub src: String,
    pub volume: f64,
    pub looped: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            src: DEFAULT_AUDIO_SRC.to_string(),
            volume: DEFAULT_AUDIO_VOLUME,
            looped: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub api_root: String,
    pub language: String,
    pub display_region_id: String,
    pub audio: AudioConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            display_region_id: DEFAULT_DISPLAY_REGION.to_string(),
            audio: AudioConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `CATALOG_API_ROOT` and `CATALOG_LANGUAGE` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(root) = non_empty_var("CATALOG_API_ROOT") {
            config.api_root = root;
        }
        if let Some(language) = non_empty_var("CATALOG_LANGUAGE") {
            config.language = language;
        }
        config
    }

    /// Base every endpoint path is joined onto, always ending in `/`.
    pub fn base_url(&self) -> String {
        let root = self.api_root.trim_end_matches('/');
        let language = self.language.trim_matches('/');
        if language.is_empty() {
            format!("{root}/")
        } else {
            format!("{root}/{language}/")
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url(), endpoint.trim_start_matches('/'))
    }

    pub fn category_url(&self, category: Category) -> String {
        self.endpoint_url(category.endpoint())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
