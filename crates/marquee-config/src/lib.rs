pub mod config;
pub mod paths;

pub use config::{CommentsConfig, Config, ConfigError, LoggingConfig, PreferencesConfig, SpotlightConfig, StorageBackend, StorageConfig};
pub use paths::{base_path_override, PathManager};
