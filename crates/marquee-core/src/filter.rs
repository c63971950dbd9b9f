// Search, genre filtering and ordering for movie lists

use marquee_models::{GenreFilter, Movie, SortMode};
use std::cmp::Ordering;

/// Everything the browse view lets the user pick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub text: String,
    pub genre: GenreFilter,
    pub sort: SortMode,
}

impl FilterQuery {
    pub fn new(text: impl Into<String>, genre: GenreFilter, sort: SortMode) -> Self {
        Self {
            text: text.into(),
            genre,
            sort,
        }
    }

    /// True when neither a search term nor a genre restriction is active.
    pub fn is_default(&self) -> bool {
        self.text.trim().is_empty() && self.genre.is_all()
    }

    pub fn apply(&self, movies: &[Movie]) -> Vec<Movie> {
        filter_and_sort(movies, &self.text, &self.genre, self.sort)
    }
}

/// Case-insensitive substring match on title or genre. An empty query matches.
pub fn matches_query(movie: &Movie, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    movie.title.to_lowercase().contains(&needle) || movie.genre.to_lowercase().contains(&needle)
}

/// Produce the visible, ordered subset of `movies`. The input is left
/// untouched and the sort is stable, so ties keep their input order.
pub fn filter_and_sort(movies: &[Movie], query: &str, genre: &GenreFilter, sort: SortMode) -> Vec<Movie> {
    let mut visible: Vec<Movie> = movies
        .iter()
        .filter(|m| matches_query(m, query) && genre.matches(&m.genre))
        .cloned()
        .collect();

    match sort {
        SortMode::Latest => visible.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::Rating => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::Alphabetical => visible.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }

    visible
}

/// Title ordering in the manner of a locale collator: letters compare without
/// regard to case or accents first, and the raw text only breaks ties.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    s.chars().flat_map(|c| fold_accent(c).to_lowercase()).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(movies: &[Movie]) -> Vec<u32> {
        movies.iter().map(|m| m.id.get()).collect()
    }

    fn sample() -> Vec<Movie> {
        vec![
            Movie::new(1, "Shadow Hunter", 2024, 8.4, "Action", "movie-poster-1.jpg"),
            Movie::new(2, "Midnight in Paris", 2024, 7.9, "Romance", "movie-poster-2.jpg"),
        ]
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let result = filter_and_sort(&sample(), "paris", &GenreFilter::All, SortMode::Latest);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_query_matches_genre() {
        let result = filter_and_sort(&sample(), "ACTION", &GenreFilter::All, SortMode::Latest);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_genre_filter_and_query_combine() {
        let movies = sample();
        let romance = GenreFilter::Exact("Romance".to_string());
        assert_eq!(ids(&filter_and_sort(&movies, "", &romance, SortMode::Latest)), vec![2]);
        assert!(filter_and_sort(&movies, "shadow", &romance, SortMode::Latest).is_empty());
    }

    #[test]
    fn test_rating_sort_is_descending_and_stable() {
        let movies = vec![
            Movie::new(1, "A", 2020, 7.0, "Drama", "p.jpg"),
            Movie::new(2, "B", 2021, 9.0, "Drama", "p.jpg"),
            Movie::new(3, "C", 2022, 7.0, "Drama", "p.jpg"),
            Movie::new(4, "D", 2023, 0.0, "Drama", "p.jpg"),
            Movie::new(5, "E", 2024, 9.0, "Drama", "p.jpg"),
        ];
        let result = filter_and_sort(&movies, "", &GenreFilter::All, SortMode::Rating);
        assert_eq!(ids(&result), vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn test_latest_sort_keeps_ties_in_input_order() {
        let catalog = Catalog::builtin();
        let result = filter_and_sort(catalog.movies(), "", &GenreFilter::All, SortMode::Latest);
        assert_eq!(result.len(), catalog.len());
        assert!(result.windows(2).all(|w| w[0].year >= w[1].year));
        // 2025 releases first, in catalog order
        assert_eq!(ids(&result[..3]), vec![7, 19, 16]);
    }

    #[test]
    fn test_alphabetical_sort_folds_case_and_accents() {
        let movies = vec![
            Movie::new(1, "the Last Séance", 2024, 8.2, "Horror", "p.jpg"),
            Movie::new(2, "The Collector", 2025, 7.9, "Thriller", "p.jpg"),
            Movie::new(3, "Starbound", 2025, 8.5, "Sci-Fi", "p.jpg"),
            Movie::new(4, "The Last Seance", 2024, 8.2, "Horror", "p.jpg"),
        ];
        let result = filter_and_sort(&movies, "", &GenreFilter::All, SortMode::Alphabetical);
        assert_eq!(ids(&result), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let movies = sample();
        let before = movies.clone();
        let _ = filter_and_sort(&movies, "", &GenreFilter::All, SortMode::Alphabetical);
        assert_eq!(movies, before);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_and_sort(&sample(), "zzz", &GenreFilter::All, SortMode::Rating).is_empty());
    }

    #[test]
    fn test_filter_query_is_default() {
        assert!(FilterQuery::default().is_default());
        let query = FilterQuery::new("paris", GenreFilter::All, SortMode::Rating);
        assert!(!query.is_default());
        assert_eq!(ids(&query.apply(&sample())), vec![2]);
    }
}
