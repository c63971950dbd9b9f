pub mod browse;
pub mod clear;
pub mod comment;
pub mod config;
pub mod profile;
pub mod prompts;
pub mod show;
pub mod spotlight;
pub mod toggles;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use marquee_config::{Config, PathManager};
use marquee_core::Marquee;
use marquee_models::{Movie, MovieId};
use std::path::PathBuf;
use tracing::debug;

/// Resolved paths and configuration shared by every command.
pub struct Context {
    pub paths: PathManager,
    pub config_file: PathBuf,
    pub config: Config,
}

impl Context {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let paths = PathManager::default();
        let config_file = config_override.unwrap_or_else(|| paths.config_file());

        // A missing file is fine (defaults); an unreadable one is not
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        config
            .validate()
            .wrap_err_with(|| format!("Invalid configuration in {}", config_file.display()))?;

        Ok(Self {
            paths,
            config_file,
            config,
        })
    }

    pub fn open_app(&self) -> Result<Marquee> {
        let app = Marquee::open(&self.config, &self.paths).map_err(|e| eyre!("{:#}", e))?;
        debug!(operation = "open_app", watch_list = app.watch_list().label());
        Ok(app)
    }
}

/// Look up `id`, failing with a readable error for IDs outside the catalog.
pub fn require_movie(app: &Marquee, id: MovieId) -> Result<Movie> {
    app.catalog()
        .get(id)
        .cloned()
        .ok_or_else(|| eyre!("No movie with id {} in the catalog. Run 'marquee browse' to see available movies.", id))
}
