use super::*;
use crate::storage::{FileStore, MemoryStore};
use std::sync::Arc;
use tempfile::TempDir;

fn fresh() -> (Preferences, SharedStore) {
    let store = MemoryStore::shared();
    let prefs = Preferences::load(store.clone(), WatchListVariant::WatchLater, Profile::default());
    (prefs, store)
}

fn stored_ids(store: &SharedStore, key: &str) -> Option<Vec<u32>> {
    read_json::<Vec<u32>>(store.as_ref(), key)
}

#[test]
fn test_toggle_like_adds_then_removes() {
    let (mut prefs, _) = fresh();
    let id = MovieId(4);

    assert_eq!(prefs.toggle_like(id), Toggle::Added);
    assert!(prefs.is_liked(id));

    assert_eq!(prefs.toggle_like(id), Toggle::Removed);
    assert!(prefs.state().liked.is_empty());
}

#[test]
fn test_like_then_dislike_moves_between_sets() {
    let (mut prefs, store) = fresh();
    let id = MovieId(9);

    prefs.toggle_like(id);
    prefs.toggle_dislike(id);

    assert!(!prefs.is_liked(id));
    assert!(prefs.is_disliked(id));
    assert_eq!(stored_ids(&store, LIKED_KEY), Some(vec![]));
    assert_eq!(stored_ids(&store, DISLIKED_KEY), Some(vec![9]));
}

#[test]
fn test_liked_and_disliked_never_overlap() {
    let (mut prefs, _) = fresh();
    let sequence = [
        (1, true),
        (1, false),
        (2, false),
        (2, true),
        (2, true),
        (3, true),
        (1, true),
        (3, false),
    ];

    for (raw, like) in sequence {
        let id = MovieId(raw);
        let was_liked = prefs.is_liked(id);
        if like {
            prefs.toggle_like(id);
            assert_ne!(prefs.is_liked(id), was_liked);
        } else {
            prefs.toggle_dislike(id);
        }
        assert!(!(prefs.is_liked(id) && prefs.is_disliked(id)));
        let overlap: Vec<_> = prefs
            .state()
            .liked
            .to_set()
            .intersection(&prefs.state().disliked.to_set())
            .copied()
            .collect();
        assert!(overlap.is_empty());
    }
}

#[test]
fn test_liking_clears_dislike_even_when_unliking() {
    let mut state = PreferenceState::default();
    let id = MovieId(5);
    state.liked.insert(id);
    state.disliked.insert(MovieId(6));

    assert_eq!(state.toggle_like(id), Toggle::Removed);
    assert!(!state.disliked.contains(id));
    assert!(state.disliked.contains(MovieId(6)));
}

#[test]
fn test_watch_later_double_toggle_restores_membership() {
    let (mut prefs, _) = fresh();
    let id = MovieId(12);
    prefs.toggle_like(id);

    prefs.toggle_watch_later(id);
    assert!(prefs.is_in_watch_later(id));
    prefs.toggle_watch_later(id);
    assert!(!prefs.is_in_watch_later(id));

    // Independent of likes
    assert!(prefs.is_liked(id));
}

#[test]
fn test_every_toggle_writes_through() {
    let (mut prefs, store) = fresh();

    prefs.toggle_watch_later(MovieId(3));
    assert_eq!(stored_ids(&store, "watchLaterMovies"), Some(vec![3]));

    prefs.toggle_watch_later(MovieId(8));
    assert_eq!(stored_ids(&store, "watchLaterMovies"), Some(vec![3, 8]));

    prefs.toggle_like(MovieId(1));
    assert_eq!(stored_ids(&store, LIKED_KEY), Some(vec![1]));
    assert_eq!(stored_ids(&store, DISLIKED_KEY), Some(vec![]));
}

#[test]
fn test_clear_watch_later_removes_key() {
    let (mut prefs, store) = fresh();
    prefs.toggle_watch_later(MovieId(3));
    prefs.toggle_watch_later(MovieId(4));

    prefs.clear_watch_later();

    assert!(prefs.state().watch_later.is_empty());
    assert_eq!(store.read("watchLaterMovies"), None);

    // Clearing an already empty list is fine
    prefs.clear_watch_later();
    assert!(prefs.state().watch_later.is_empty());
}

#[test]
fn test_round_trip_through_store() {
    let (mut prefs, store) = fresh();
    prefs.toggle_like(MovieId(1));
    prefs.toggle_like(MovieId(20));
    prefs.toggle_dislike(MovieId(13));
    prefs.toggle_watch_later(MovieId(29));
    prefs.toggle_watch_later(MovieId(2));
    prefs.set_profile("Ada", "Film Critic");

    let reloaded = Preferences::load(store, WatchListVariant::WatchLater, Profile::default());
    assert_eq!(reloaded.state().liked.to_set(), prefs.state().liked.to_set());
    assert_eq!(reloaded.state().disliked.to_set(), prefs.state().disliked.to_set());
    assert_eq!(reloaded.state().watch_later.to_set(), prefs.state().watch_later.to_set());
    assert_eq!(reloaded.state().profile.display_name, "Ada");
    assert_eq!(reloaded.state().profile.tagline, "Film Critic");
}

#[test]
fn test_round_trip_through_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.toml");

    {
        let store: SharedStore = Arc::new(FileStore::open(&path).unwrap());
        let mut prefs = Preferences::load(store, WatchListVariant::WatchLater, Profile::default());
        prefs.toggle_like(MovieId(4));
        prefs.toggle_watch_later(MovieId(7));
    }

    let store: SharedStore = Arc::new(FileStore::open(&path).unwrap());
    let prefs = Preferences::load(store, WatchListVariant::WatchLater, Profile::default());
    assert!(prefs.is_liked(MovieId(4)));
    assert!(prefs.is_in_watch_later(MovieId(7)));
}

#[test]
fn test_malformed_stored_values_fall_back_to_empty() {
    let store = MemoryStore::shared();
    store.write(LIKED_KEY, "not json").unwrap();
    store.write(DISLIKED_KEY, r#"{"ids":[1]}"#).unwrap();
    store.write("watchLaterMovies", "[1, \"two\"]").unwrap();

    let prefs = Preferences::load(store, WatchListVariant::WatchLater, Profile::default());
    assert!(prefs.state().liked.is_empty());
    assert!(prefs.state().disliked.is_empty());
    assert!(prefs.state().watch_later.is_empty());
}

#[test]
fn test_load_repairs_overlap_and_duplicates() {
    let store = MemoryStore::shared();
    store.write(LIKED_KEY, "[1,2,2]").unwrap();
    store.write(DISLIKED_KEY, "[2,3]").unwrap();

    let prefs = Preferences::load(store, WatchListVariant::WatchLater, Profile::default());
    assert_eq!(prefs.state().liked.ids(), &[MovieId(1), MovieId(2)]);
    assert_eq!(prefs.state().disliked.ids(), &[MovieId(3)]);
}

#[test]
fn test_wishlist_variant_uses_its_own_key() {
    let store = MemoryStore::shared();
    store.write("watchLaterMovies", "[5]").unwrap();

    let mut prefs = Preferences::load(store.clone(), WatchListVariant::Wishlist, Profile::default());
    assert!(prefs.state().watch_later.is_empty());

    prefs.toggle_watch_later(MovieId(6));
    assert_eq!(stored_ids(&store, "wishlistMovies"), Some(vec![6]));
    assert_eq!(stored_ids(&store, "watchLaterMovies"), Some(vec![5]));
}

#[test]
fn test_profile_defaults_and_empty_values() {
    let store = MemoryStore::shared();
    store.write(USER_NAME_KEY, "").unwrap();

    let mut prefs = Preferences::load(store.clone(), WatchListVariant::WatchLater, Profile::default());
    assert_eq!(prefs.state().profile, Profile::default());

    prefs.set_profile("", "");
    assert_eq!(prefs.state().profile.display_name, "");
    assert_eq!(store.read(TAGLINE_KEY), Some(String::new()));
}

#[test]
fn test_stats() {
    let (mut prefs, _) = fresh();
    prefs.toggle_like(MovieId(1));
    prefs.toggle_like(MovieId(2));
    prefs.toggle_dislike(MovieId(3));
    prefs.toggle_watch_later(MovieId(1));

    assert_eq!(
        prefs.stats(),
        PreferenceStats {
            liked: 2,
            disliked: 1,
            watch_later: 1,
        }
    );
}
