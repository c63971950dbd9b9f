use serde::{Deserialize, Serialize};
use std::fmt;

/// Display ordering for a movie list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Newest release year first.
    #[default]
    Latest,
    /// Highest rating first.
    Rating,
    /// Title, A to Z.
    Alphabetical,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Latest, SortMode::Rating, SortMode::Alphabetical];

    /// Strict parse of a sort label; `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "newest" => Some(SortMode::Latest),
            "rating" => Some(SortMode::Rating),
            "alphabetical" | "title" | "a-z" => Some(SortMode::Alphabetical),
            _ => None,
        }
    }

    /// Parse a sort label. Unrecognized text falls back to `Latest` instead of failing.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Labels of every mode, for help and warning text.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|mode| mode.label()).collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Latest => "Latest",
            SortMode::Rating => "Rating",
            SortMode::Alphabetical => "Alphabetical",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
