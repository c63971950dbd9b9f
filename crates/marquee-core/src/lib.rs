pub mod app;
pub mod carousel;
pub mod catalog;
pub mod comments;
pub mod filter;
pub mod preferences;
pub mod storage;

pub use app::{open_store, Marquee, MarqueeOptions, MovieDetail};
pub use carousel::{Autoplay, Carousel};
pub use catalog::{Catalog, CatalogError, Shelf};
pub use comments::CommentLog;
pub use filter::{filter_and_sort, FilterQuery};
pub use preferences::{PreferenceState, PreferenceStats, Preferences, Toggle};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SharedStore};
