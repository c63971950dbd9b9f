use crate::storage::{read_json, write_json, KeyValueStore, SharedStore};
use marquee_models::{MovieId, Profile, WatchListVariant};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub const LIKED_KEY: &str = "likedMovies";
pub const DISLIKED_KEY: &str = "dislikedMovies";
pub const USER_NAME_KEY: &str = "userName";
pub const TAGLINE_KEY: &str = "flexingTag";

/// What a toggle did to the targeted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

impl Toggle {
    pub fn is_added(self) -> bool {
        self == Toggle::Added
    }
}

/// Insertion-ordered set of movie IDs. Kept as a list so the stored encoding
/// stays a plain integer array in the order the user acted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdSet(Vec<MovieId>);

impl IdSet {
    pub fn from_ids(ids: impl IntoIterator<Item = MovieId>) -> Self {
        let mut set = Self::default();
        for id in ids {
            set.insert(id);
        }
        set
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.0.contains(&id)
    }

    /// Returns false if the id was already present.
    pub fn insert(&mut self, id: MovieId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Returns false if the id was not present.
    pub fn remove(&mut self, id: MovieId) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| *existing != id);
        self.0.len() != before
    }

    pub fn toggle(&mut self, id: MovieId) -> Toggle {
        if self.remove(id) {
            Toggle::Removed
        } else {
            self.0.push(id);
            Toggle::Added
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[MovieId] {
        &self.0
    }

    /// Order-independent view, for comparing sets.
    pub fn to_set(&self) -> BTreeSet<MovieId> {
        self.0.iter().copied().collect()
    }
}

/// Per-profile preferences. Mutators here only touch memory; see
/// [`Preferences`] for the persisted version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceState {
    pub liked: IdSet,
    pub disliked: IdSet,
    pub watch_later: IdSet,
    pub profile: Profile,
}

impl PreferenceState {
    /// Flip `id` in `liked`. Adding a like always clears a dislike.
    pub fn toggle_like(&mut self, id: MovieId) -> Toggle {
        let outcome = self.liked.toggle(id);
        self.disliked.remove(id);
        outcome
    }

    /// Flip `id` in `disliked`. Adding a dislike always clears a like.
    pub fn toggle_dislike(&mut self, id: MovieId) -> Toggle {
        let outcome = self.disliked.toggle(id);
        self.liked.remove(id);
        outcome
    }

    pub fn toggle_watch_later(&mut self, id: MovieId) -> Toggle {
        self.watch_later.toggle(id)
    }

    pub fn clear_watch_later(&mut self) {
        self.watch_later.clear();
    }

    pub fn set_profile(&mut self, display_name: &str, tagline: &str) {
        self.profile = Profile {
            display_name: display_name.to_string(),
            tagline: tagline.to_string(),
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreferenceStats {
    pub liked: usize,
    pub disliked: usize,
    pub watch_later: usize,
}

/// Preference state bound to a store. Every mutation is written through
/// before the call returns; write failures are logged and the in-memory
/// change stands.
pub struct Preferences {
    state: PreferenceState,
    store: SharedStore,
    variant: WatchListVariant,
}

impl Preferences {
    /// Hydrate from `store`. Missing or unreadable entries fall back to empty
    /// sets and the given default profile.
    pub fn load(store: SharedStore, variant: WatchListVariant, default_profile: Profile) -> Self {
        let liked = load_set(store.as_ref(), LIKED_KEY);
        let mut disliked = load_set(store.as_ref(), DISLIKED_KEY);
        let watch_later = load_set(store.as_ref(), variant.storage_key());

        // A movie stored in both sets keeps its like
        for id in liked.ids() {
            if disliked.remove(*id) {
                warn!(operation = "preferences_load", movie_id = id.get(), "Movie stored as both liked and disliked, keeping like");
            }
        }

        let profile = Profile {
            display_name: load_text(store.as_ref(), USER_NAME_KEY).unwrap_or(default_profile.display_name),
            tagline: load_text(store.as_ref(), TAGLINE_KEY).unwrap_or(default_profile.tagline),
        };

        debug!(
            operation = "preferences_load",
            liked = liked.len(),
            disliked = disliked.len(),
            watch_later = watch_later.len(),
            "Preferences hydrated"
        );

        Self {
            state: PreferenceState {
                liked,
                disliked,
                watch_later,
                profile,
            },
            store,
            variant,
        }
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn variant(&self) -> WatchListVariant {
        self.variant
    }

    pub fn is_liked(&self, id: MovieId) -> bool {
        self.state.liked.contains(id)
    }

    pub fn is_disliked(&self, id: MovieId) -> bool {
        self.state.disliked.contains(id)
    }

    pub fn is_in_watch_later(&self, id: MovieId) -> bool {
        self.state.watch_later.contains(id)
    }

    pub fn stats(&self) -> PreferenceStats {
        PreferenceStats {
            liked: self.state.liked.len(),
            disliked: self.state.disliked.len(),
            watch_later: self.state.watch_later.len(),
        }
    }

    pub fn toggle_like(&mut self, id: MovieId) -> Toggle {
        let outcome = self.state.toggle_like(id);
        debug!(operation = "toggle_like", movie_id = id.get(), added = outcome.is_added());
        self.persist_set(LIKED_KEY, &self.state.liked);
        self.persist_set(DISLIKED_KEY, &self.state.disliked);
        outcome
    }

    pub fn toggle_dislike(&mut self, id: MovieId) -> Toggle {
        let outcome = self.state.toggle_dislike(id);
        debug!(operation = "toggle_dislike", movie_id = id.get(), added = outcome.is_added());
        self.persist_set(DISLIKED_KEY, &self.state.disliked);
        self.persist_set(LIKED_KEY, &self.state.liked);
        outcome
    }

    pub fn toggle_watch_later(&mut self, id: MovieId) -> Toggle {
        let outcome = self.state.toggle_watch_later(id);
        debug!(operation = "toggle_watch_later", movie_id = id.get(), added = outcome.is_added());
        self.persist_set(self.variant.storage_key(), &self.state.watch_later);
        outcome
    }

    /// Empty the watch-later list and drop its stored key.
    pub fn clear_watch_later(&mut self) {
        self.state.clear_watch_later();
        let key = self.variant.storage_key();
        if let Err(e) = self.store.remove(key) {
            warn!(operation = "store_remove", key, error = %e, "Failed to remove stored list");
        }
    }

    pub fn set_profile(&mut self, display_name: &str, tagline: &str) {
        self.state.set_profile(display_name, tagline);
        self.persist_text(USER_NAME_KEY, display_name);
        self.persist_text(TAGLINE_KEY, tagline);
    }

    fn persist_set(&self, key: &str, set: &IdSet) {
        if let Err(e) = write_json(self.store.as_ref(), key, set) {
            warn!(operation = "store_write", key, error = %e, "Failed to persist preference set");
        }
    }

    fn persist_text(&self, key: &str, value: &str) {
        if let Err(e) = self.store.write(key, value) {
            warn!(operation = "store_write", key, error = %e, "Failed to persist profile field");
        }
    }
}

fn load_set(store: &dyn KeyValueStore, key: &str) -> IdSet {
    read_json::<Vec<MovieId>>(store, key)
        .map(IdSet::from_ids)
        .unwrap_or_default()
}

fn load_text(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    store.read(key).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests;
