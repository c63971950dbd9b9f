pub mod comment;
pub mod genre;
pub mod movie;
pub mod profile;
pub mod sort;

pub use comment::{Comment, CommentId};
pub use genre::GenreFilter;
pub use movie::{Movie, MovieId};
pub use profile::{Profile, WatchListVariant};
pub use sort::SortMode;
