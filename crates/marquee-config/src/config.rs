use marquee_models::profile::{DEFAULT_DISPLAY_NAME, DEFAULT_TAGLINE};
use marquee_models::WatchListVariant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("spotlight.interval_secs must be greater than zero")]
    ZeroSpotlightInterval,

    #[error("comments.author cannot be empty")]
    EmptyCommentAuthor,

    #[error("storage.file is only used by the file backend")]
    FileWithMemoryBackend,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub comments: CommentsConfig,
    #[serde(default)]
    pub spotlight: SpotlightConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Overrides the store location; defaults to `<data_dir>/profile.toml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub watch_list: WatchListVariant,
    #[serde(default = "default_display_name")]
    pub default_display_name: String,
    #[serde(default = "default_tagline")]
    pub default_tagline: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentsConfig {
    #[serde(default = "default_comment_author")]
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpotlightConfig {
    #[serde(default = "default_spotlight_interval")]
    pub interval_secs: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Force JSON log lines on or off. Unset means JSON whenever stdout is
    /// not a terminal, decided at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

fn default_tagline() -> String {
    DEFAULT_TAGLINE.to_string()
}

fn default_comment_author() -> String {
    "Movie Fan".to_string()
}

// Same pace as the home page slideshow
fn default_spotlight_interval() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            watch_list: WatchListVariant::default(),
            default_display_name: default_display_name(),
            default_tagline: default_tagline(),
        }
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self { author: default_comment_author() }
    }
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self { interval_secs: default_spotlight_interval() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spotlight.interval_secs == 0 {
            return Err(ConfigError::ZeroSpotlightInterval);
        }
        if self.comments.author.trim().is_empty() {
            return Err(ConfigError::EmptyCommentAuthor);
        }
        if self.storage.backend == StorageBackend::Memory && self.storage.file.is_some() {
            return Err(ConfigError::FileWithMemoryBackend);
        }
        Ok(())
    }
}
