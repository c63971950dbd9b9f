// Static movie catalog and the shelves derived from it

mod builtin;

use marquee_models::genre::ALL_GENRES;
use marquee_models::{GenreFilter, Movie, MovieId};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const FEATURED_MIN_RATING: f32 = 8.2;
pub const FEATURED_LIMIT: usize = 5;
pub const TRENDING_YEAR: i32 = 2024;
pub const TRENDING_LIMIT: usize = 8;
pub const UPCOMING_YEAR: i32 = 2025;
pub const UPCOMING_LIMIT: usize = 6;
pub const PERSONALIZED_GENRES: [&str; 2] = ["Mystery", "Drama"];
pub const PERSONALIZED_LIMIT: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate movie id {0}")]
    DuplicateId(MovieId),

    #[error("movie {0} has an empty title")]
    EmptyTitle(MovieId),
}

/// Named slices of the catalog shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Featured,
    Trending,
    Upcoming,
    ForYou,
}

impl Shelf {
    pub const ALL: [Shelf; 4] = [Shelf::Featured, Shelf::Trending, Shelf::Upcoming, Shelf::ForYou];

    pub fn title(&self) -> &'static str {
        match self {
            Shelf::Featured => "Featured",
            Shelf::Trending => "Trending Now",
            Shelf::Upcoming => "Coming Soon",
            Shelf::ForYou => "Recommended for You",
        }
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Shelf {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "featured" => Ok(Shelf::Featured),
            "trending" => Ok(Shelf::Trending),
            "upcoming" => Ok(Shelf::Upcoming),
            "for-you" | "personalized" => Ok(Shelf::ForYou),
            other => Err(format!(
                "Unknown shelf: {}. Use 'featured', 'trending', 'upcoming' or 'for-you'",
                other
            )),
        }
    }
}

/// Immutable list of movies. Every query is a pure function of the list and
/// returns movies in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self { movies: builtin::movies() }
    }

    pub fn from_movies(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for movie in &movies {
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
            if movie.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(movie.id));
            }
        }
        Ok(Self { movies })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.get(id).is_some()
    }

    fn take_where<F>(&self, limit: usize, predicate: F) -> Vec<Movie>
    where
        F: Fn(&Movie) -> bool,
    {
        self.movies
            .iter()
            .filter(|m| predicate(m))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<Movie> {
        self.take_where(FEATURED_LIMIT, |m| m.rating >= FEATURED_MIN_RATING)
    }

    pub fn trending(&self) -> Vec<Movie> {
        self.take_where(TRENDING_LIMIT, |m| m.year == TRENDING_YEAR)
    }

    pub fn upcoming(&self) -> Vec<Movie> {
        self.take_where(UPCOMING_LIMIT, |m| m.year == UPCOMING_YEAR)
    }

    pub fn personalized(&self) -> Vec<Movie> {
        self.take_where(PERSONALIZED_LIMIT, |m| {
            PERSONALIZED_GENRES.contains(&m.genre.as_str())
        })
    }

    pub fn shelf(&self, shelf: Shelf) -> Vec<Movie> {
        match shelf {
            Shelf::Featured => self.featured(),
            Shelf::Trending => self.trending(),
            Shelf::Upcoming => self.upcoming(),
            Shelf::ForYou => self.personalized(),
        }
    }

    /// Every movie tagged `genre`, or the whole catalog for `"All"`.
    pub fn by_genre(&self, genre: &str) -> Vec<Movie> {
        if genre == ALL_GENRES {
            return self.movies.clone();
        }
        self.movies
            .iter()
            .filter(|m| m.genre == genre)
            .cloned()
            .collect()
    }

    /// Distinct genres in lexical order, with `"All"` first.
    pub fn genres(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.movies.iter().map(|m| m.genre.as_str()).collect();
        std::iter::once(ALL_GENRES.to_string())
            .chain(distinct.into_iter().map(str::to_string))
            .collect()
    }

    /// Map user-typed genre text onto a catalog genre. Unknown text resolves
    /// to `All` rather than an always-empty filter.
    pub fn resolve_genre(&self, input: &str) -> GenreFilter {
        match GenreFilter::parse(input) {
            GenreFilter::All => GenreFilter::All,
            GenreFilter::Exact(wanted) => self
                .movies
                .iter()
                .find(|m| m.genre.eq_ignore_ascii_case(&wanted))
                .map(|m| GenreFilter::Exact(m.genre.clone()))
                .unwrap_or(GenreFilter::All),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
