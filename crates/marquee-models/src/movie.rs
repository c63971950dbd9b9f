use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable catalog identifier. Serialized as a bare integer so persisted
/// lists look like `[1,4,9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl MovieId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(MovieId)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub rating: f32, // 0.0 means unreleased / not rated yet
    pub genre: String,
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Movie {
    pub fn new(id: u32, title: &str, year: i32, rating: f32, genre: &str, poster: &str) -> Self {
        Self {
            id: MovieId(id),
            title: title.to_string(),
            year,
            rating,
            genre: genre.to_string(),
            poster: poster.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }

    /// Rating as shown on a card: one decimal, or "TBA" for the unrated sentinel.
    pub fn rating_label(&self) -> String {
        if self.is_rated() {
            format!("{:.1}", self.rating)
        } else {
            "TBA".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_serializes_as_integer() {
        let ids = vec![MovieId(4), MovieId(1)];
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[4,1]");
        let parsed: Vec<MovieId> = serde_json::from_str("[7, 2]").unwrap();
        assert_eq!(parsed, vec![MovieId(7), MovieId(2)]);
    }

    #[test]
    fn test_movie_id_from_str() {
        assert_eq!(" 12 ".parse::<MovieId>().unwrap(), MovieId(12));
        assert!("abc".parse::<MovieId>().is_err());
    }

    #[test]
    fn test_rating_label_sentinel() {
        let released = Movie::new(1, "Shadow Hunter", 2024, 8.4, "Action", "movie-poster-1.jpg");
        let unreleased = Movie::new(6, "Quantum Leap", 2025, 0.0, "Sci-Fi", "movie-poster-3.jpg");
        assert_eq!(released.rating_label(), "8.4");
        assert!(!unreleased.is_rated());
        assert_eq!(unreleased.rating_label(), "TBA");
    }
}
