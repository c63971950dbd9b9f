use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base directory override from `MARQUEE_BASE_PATH`, if set.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("MARQUEE_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("marquee");

        Ok(Self::from_base(base_dir))
    }

    /// Config file at the base level, the store under `data/`. Logs only go to a
    /// file when `logging.file` names one.
    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// The key-value store backing preferences and comments.
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join("profile.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }

        // Platform config dir (e.g. ~/.config/marquee on Linux), or the working
        // directory when none can be determined.
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".marquee")))
    }
}
