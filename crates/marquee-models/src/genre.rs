use serde::{Deserialize, Serialize};
use std::fmt;

pub const ALL_GENRES: &str = "All";

/// Genre restriction applied by the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenreFilter {
    #[default]
    All,
    Exact(String),
}

impl GenreFilter {
    /// `"All"` (any case) or blank text means no restriction; anything else is
    /// an exact genre tag.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_GENRES) {
            GenreFilter::All
        } else {
            GenreFilter::Exact(trimmed.to_string())
        }
    }

    pub fn matches(&self, genre: &str) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Exact(wanted) => wanted == genre,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreFilter::All)
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str(ALL_GENRES),
            GenreFilter::Exact(genre) => f.write_str(genre),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!(GenreFilter::parse("All"), GenreFilter::All);
        assert_eq!(GenreFilter::parse("all"), GenreFilter::All);
        assert_eq!(GenreFilter::parse("  "), GenreFilter::All);
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let filter = GenreFilter::parse("Drama");
        assert!(filter.matches("Drama"));
        assert!(!filter.matches("drama"));
        assert!(GenreFilter::All.matches("anything"));
    }
}
