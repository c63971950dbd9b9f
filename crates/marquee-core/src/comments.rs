use crate::storage::{read_json, write_json, KeyValueStore, SharedStore};
use chrono::{Local, Utc};
use marquee_models::{Comment, CommentId, MovieId};
use tracing::{debug, warn};

pub const DEFAULT_AUTHOR: &str = "Movie Fan";

pub fn comments_key(movie_id: MovieId) -> String {
    format!("movie-comments-{}", movie_id)
}

/// Issues comment IDs from the wall clock in milliseconds, bumped past the
/// last issued value so two comments in the same tick still get distinct,
/// increasing IDs.
#[derive(Debug, Default)]
pub struct CommentIdGenerator {
    last: u64,
}

impl CommentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future IDs sort after `id`.
    pub fn observe(&mut self, id: CommentId) {
        self.last = self.last.max(id.0);
    }

    /// Saturates at `u64::MAX`; past that point IDs repeat instead of
    /// wrapping below earlier ones.
    pub fn issue_at(&mut self, now_millis: u64) -> CommentId {
        if self.last == u64::MAX {
            warn!(operation = "issue_comment_id", "Comment ID space exhausted, reusing the maximum ID");
        }
        self.last = now_millis.max(self.last.saturating_add(1));
        CommentId(self.last)
    }

    pub fn issue(&mut self) -> CommentId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.issue_at(now)
    }
}

/// Append-only notes per movie, stored as one list per movie key.
pub struct CommentLog {
    store: SharedStore,
    author: String,
    ids: CommentIdGenerator,
}

impl CommentLog {
    pub fn new(store: SharedStore, author: impl Into<String>) -> Self {
        Self {
            store,
            author: author.into(),
            ids: CommentIdGenerator::new(),
        }
    }

    /// Stored comments for a movie, oldest first. Nothing stored or an
    /// unreadable list both give an empty list.
    pub fn load(&self, movie_id: MovieId) -> Vec<Comment> {
        read_json::<Vec<Comment>>(self.store.as_ref(), &comments_key(movie_id)).unwrap_or_default()
    }

    /// Add a comment unless `text` is blank. Returns the stored entry, or
    /// `None` when nothing was added.
    pub fn append(&mut self, movie_id: MovieId, text: &str) -> Option<Comment> {
        let content = text.trim();
        if content.is_empty() {
            debug!(operation = "append_comment", movie_id = movie_id.get(), "Ignoring blank comment");
            return None;
        }

        let mut comments = self.load(movie_id);
        if let Some(max_id) = comments.iter().map(|c| c.id).max() {
            self.ids.observe(max_id);
        }

        let comment = Comment {
            id: self.ids.issue(),
            movie_id,
            author: self.author.clone(),
            content: content.to_string(),
            timestamp: Local::now().format("%-m/%-d/%Y").to_string(),
        };
        comments.push(comment.clone());

        let key = comments_key(movie_id);
        if let Err(e) = write_json(self.store.as_ref(), &key, &comments) {
            warn!(operation = "store_write", key = %key, error = %e, "Failed to persist comments");
        }
        debug!(
            operation = "append_comment",
            movie_id = movie_id.get(),
            comment_id = comment.id.0,
            total = comments.len()
        );

        Some(comment)
    }

    /// Movies that have at least one stored comment key.
    pub fn movies_with_comments(&self) -> Vec<MovieId> {
        self.store
            .keys()
            .iter()
            .filter_map(|key| key.strip_prefix("movie-comments-"))
            .filter_map(|raw| raw.parse::<MovieId>().ok())
            .collect()
    }

    /// Remove every stored comment list. Used by `clear --comments`.
    pub fn clear_all(&self) -> anyhow::Result<usize> {
        let movies = self.movies_with_comments();
        for movie_id in &movies {
            self.store.remove(&comments_key(*movie_id))?;
        }
        Ok(movies.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn log() -> (CommentLog, SharedStore) {
        let store = MemoryStore::shared();
        (CommentLog::new(store.clone(), DEFAULT_AUTHOR), store)
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (log, _) = log();
        assert!(log.load(MovieId(7)).is_empty());
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let (mut log, store) = log();
        assert!(log.append(MovieId(7), "").is_none());
        assert!(log.append(MovieId(7), "   \n\t").is_none());
        assert!(log.load(MovieId(7)).is_empty());
        assert_eq!(store.read("movie-comments-7"), None);
    }

    #[test]
    fn test_append_trims_and_persists() {
        let (mut log, store) = log();
        let added = log.append(MovieId(7), "  Great twist ending  ").unwrap();
        assert_eq!(added.content, "Great twist ending");
        assert_eq!(added.author, "Movie Fan");
        assert_eq!(added.movie_id, MovieId(7));

        let stored = log.load(MovieId(7));
        assert_eq!(stored, vec![added]);
        assert!(store.read("movie-comments-7").unwrap().contains("\"movieId\":7"));
    }

    #[test]
    fn test_lists_are_scoped_per_movie() {
        let (mut log, _) = log();
        log.append(MovieId(1), "first");
        log.append(MovieId(2), "second");
        log.append(MovieId(1), "third");

        let contents: Vec<_> = log.load(MovieId(1)).into_iter().map(|c| c.content).collect();
        assert_eq!(contents, vec!["first", "third"]);
        assert_eq!(log.load(MovieId(2)).len(), 1);

        let mut with_comments = log.movies_with_comments();
        with_comments.sort();
        assert_eq!(with_comments, vec![MovieId(1), MovieId(2)]);
    }

    #[test]
    fn test_rapid_appends_get_increasing_ids() {
        let (mut log, _) = log();
        for i in 0..20 {
            log.append(MovieId(3), &format!("comment {}", i));
        }
        let ids: Vec<_> = log.load(MovieId(3)).iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 20);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_continue_past_stored_ids() {
        let store = MemoryStore::shared();
        let far_future = u64::MAX / 2;
        store
            .write(
                "movie-comments-4",
                &format!(
                    r#"[{{"id":{},"movieId":4,"author":"Movie Fan","content":"old","timestamp":"1/1/2030"}}]"#,
                    far_future
                ),
            )
            .unwrap();

        let mut log = CommentLog::new(store, DEFAULT_AUTHOR);
        let added = log.append(MovieId(4), "new").unwrap();
        assert_eq!(added.id, CommentId(far_future + 1));
    }

    #[test]
    fn test_append_after_max_stored_id_does_not_wrap() {
        let store = MemoryStore::shared();
        store
            .write(
                "movie-comments-4",
                r#"[{"id":18446744073709551615,"movieId":4,"author":"Movie Fan","content":"old","timestamp":"1/1/2030"}]"#,
            )
            .unwrap();

        let mut log = CommentLog::new(store, DEFAULT_AUTHOR);
        let added = log.append(MovieId(4), "new").unwrap();
        assert_eq!(added.id, CommentId(u64::MAX));

        let ids: Vec<_> = log.load(MovieId(4)).iter().map(|c| c.id).collect();
        assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_generator_same_tick() {
        let mut ids = CommentIdGenerator::new();
        assert_eq!(ids.issue_at(1_000), CommentId(1_000));
        assert_eq!(ids.issue_at(1_000), CommentId(1_001));
        assert_eq!(ids.issue_at(999), CommentId(1_002));
        assert_eq!(ids.issue_at(5_000), CommentId(5_000));
    }

    #[test]
    fn test_malformed_list_loads_empty_and_is_replaced() {
        let (mut log, store) = log();
        store.write("movie-comments-9", "[{broken").unwrap();
        assert!(log.load(MovieId(9)).is_empty());

        log.append(MovieId(9), "fresh start");
        assert_eq!(log.load(MovieId(9)).len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let (mut log, store) = log();
        store.write("likedMovies", "[1]").unwrap();
        log.append(MovieId(1), "a");
        log.append(MovieId(2), "b");

        assert_eq!(log.clear_all().unwrap(), 2);
        assert!(log.movies_with_comments().is_empty());
        assert_eq!(store.read("likedMovies"), Some("[1]".to_string()));
    }
}
