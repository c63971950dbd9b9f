use crate::catalog::Catalog;
use crate::comments::{CommentLog, DEFAULT_AUTHOR};
use crate::filter::FilterQuery;
use crate::preferences::{PreferenceState, Preferences, Toggle, DISLIKED_KEY, LIKED_KEY, TAGLINE_KEY, USER_NAME_KEY};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, SharedStore};
use anyhow::{Context, Result};
use marquee_config::{Config, PathManager, StorageBackend};
use marquee_models::{Comment, Movie, MovieId, Profile, WatchListVariant};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Settings the application root needs from configuration.
#[derive(Debug, Clone)]
pub struct MarqueeOptions {
    pub watch_list: WatchListVariant,
    pub default_profile: Profile,
    pub comment_author: String,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            watch_list: WatchListVariant::default(),
            default_profile: Profile::default(),
            comment_author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl MarqueeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            watch_list: config.preferences.watch_list,
            default_profile: Profile {
                display_name: config.preferences.default_display_name.clone(),
                tagline: config.preferences.default_tagline.clone(),
            },
            comment_author: config.comments.author.clone(),
        }
    }
}

/// Everything the detail view shows for one movie.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    pub movie: Movie,
    pub liked: bool,
    pub disliked: bool,
    pub in_watch_later: bool,
    pub comments: Vec<Comment>,
}

/// Open the store selected by configuration.
pub fn open_store(config: &Config, paths: &PathManager) -> Result<SharedStore> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!(operation = "open_store", backend = "memory", "Using in-memory store; nothing will be saved");
            Ok(MemoryStore::shared())
        }
        StorageBackend::File => {
            let path = config
                .storage
                .file
                .clone()
                .unwrap_or_else(|| paths.store_file());
            let store = FileStore::open(&path)
                .with_context(|| format!("Failed to open store at {}", path.display()))?;
            info!(operation = "open_store", backend = "file", path = %path.display());
            Ok(Arc::new(store))
        }
    }
}

/// Application root: owns the catalog, the preference state and the comment
/// log, all sharing one store.
pub struct Marquee {
    catalog: Catalog,
    preferences: Preferences,
    comments: CommentLog,
    store: SharedStore,
    default_profile: Profile,
}

impl Marquee {
    pub fn with_store(catalog: Catalog, store: SharedStore, options: MarqueeOptions) -> Self {
        let preferences = Preferences::load(store.clone(), options.watch_list, options.default_profile.clone());
        let comments = CommentLog::new(store.clone(), options.comment_author);
        Self {
            catalog,
            preferences,
            comments,
            store,
            default_profile: options.default_profile,
        }
    }

    /// Built-in catalog with the store and options described by `config`.
    pub fn open(config: &Config, paths: &PathManager) -> Result<Self> {
        let store = open_store(config, paths)?;
        Ok(Self::with_store(Catalog::builtin(), store, MarqueeOptions::from_config(config)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn state(&self) -> &PreferenceState {
        self.preferences.state()
    }

    pub fn watch_list(&self) -> WatchListVariant {
        self.preferences.variant()
    }

    pub fn toggle_like(&mut self, id: MovieId) -> Toggle {
        self.preferences.toggle_like(id)
    }

    pub fn toggle_dislike(&mut self, id: MovieId) -> Toggle {
        self.preferences.toggle_dislike(id)
    }

    pub fn toggle_watch_later(&mut self, id: MovieId) -> Toggle {
        self.preferences.toggle_watch_later(id)
    }

    pub fn clear_watch_later(&mut self) {
        self.preferences.clear_watch_later()
    }

    pub fn set_profile(&mut self, display_name: &str, tagline: &str) {
        self.preferences.set_profile(display_name, tagline)
    }

    /// Browse view over the whole catalog.
    pub fn filter_and_sort(&self, query: &FilterQuery) -> Vec<Movie> {
        query.apply(self.catalog.movies())
    }

    pub fn by_genre(&self, genre: &str) -> Vec<Movie> {
        self.catalog.by_genre(genre)
    }

    pub fn genres(&self) -> Vec<String> {
        self.catalog.genres()
    }

    pub fn load_comments(&self, movie_id: MovieId) -> Vec<Comment> {
        self.comments.load(movie_id)
    }

    pub fn append_comment(&mut self, movie_id: MovieId, text: &str) -> Option<Comment> {
        self.comments.append(movie_id, text)
    }

    fn movies_in<F>(&self, member: F) -> Vec<Movie>
    where
        F: Fn(MovieId) -> bool,
    {
        self.catalog
            .movies()
            .iter()
            .filter(|m| member(m.id))
            .cloned()
            .collect()
    }

    /// Saved movies in catalog order. IDs no longer in the catalog are skipped.
    pub fn watch_later_movies(&self) -> Vec<Movie> {
        self.movies_in(|id| self.preferences.is_in_watch_later(id))
    }

    pub fn liked_movies(&self) -> Vec<Movie> {
        self.movies_in(|id| self.preferences.is_liked(id))
    }

    pub fn disliked_movies(&self) -> Vec<Movie> {
        self.movies_in(|id| self.preferences.is_disliked(id))
    }

    pub fn movie_detail(&self, id: MovieId) -> Option<MovieDetail> {
        let movie = self.catalog.get(id)?.clone();
        Some(MovieDetail {
            movie,
            liked: self.preferences.is_liked(id),
            disliked: self.preferences.is_disliked(id),
            in_watch_later: self.preferences.is_in_watch_later(id),
            comments: self.comments.load(id),
        })
    }

    /// Forget likes, dislikes, the watch list and the profile. Comments stay.
    pub fn clear_preferences(&mut self) -> Result<()> {
        let watch_key = self.watch_list().storage_key();
        for key in [LIKED_KEY, DISLIKED_KEY, watch_key, USER_NAME_KEY, TAGLINE_KEY] {
            self.store.remove(key)?;
        }
        self.reload();
        Ok(())
    }

    pub fn clear_comments(&mut self) -> Result<usize> {
        self.comments.clear_all()
    }

    /// Wipe the whole store: preferences, profile and every comment list.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear()?;
        self.reload();
        Ok(())
    }

    fn reload(&mut self) {
        let variant = self.preferences.variant();
        self.preferences = Preferences::load(self.store.clone(), variant, self.default_profile.clone());
    }
}
