use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_NAME: &str = "Movie Enthusiast";
pub const DEFAULT_TAGLINE: &str = "Cinema Connoisseur";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub tagline: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

/// Which name the save-for-later list goes by. Both behave identically; the
/// variant only picks the storage key and the label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatchListVariant {
    #[default]
    WatchLater,
    Wishlist,
}

impl WatchListVariant {
    pub fn storage_key(&self) -> &'static str {
        match self {
            WatchListVariant::WatchLater => "watchLaterMovies",
            WatchListVariant::Wishlist => "wishlistMovies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WatchListVariant::WatchLater => "Watch Later",
            WatchListVariant::Wishlist => "Wishlist",
        }
    }
}
