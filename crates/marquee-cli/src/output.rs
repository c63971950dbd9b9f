use clap::ValueEnum;
use comfy_table::{presets, modifiers, Attribute, Cell, Color, Table};
use marquee_core::PreferenceState;
use marquee_models::{Comment, Movie};
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message("success", msg.as_ref(), |m| println!("{} {}", "✓".green(), m));
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.message("info", msg.as_ref(), |m| println!("{}", m));
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message("warning", msg.as_ref(), |m| println!("{} {}", "⚠".yellow(), m));
    }

    fn message(&self, kind: &str, msg: &str, human: impl FnOnce(&str)) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => human(msg),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": kind, "message": msg }));
            }
        }
    }

    /// Structured payload for the JSON formats. Ignored in human mode.
    pub fn data<T: Serialize>(&self, data: &T) {
        if self.quiet || self.is_human() {
            return;
        }
        match serde_json::to_value(data) {
            Ok(value) => self.print_json(&value),
            Err(e) => eprintln!("{} Failed to serialize output: {}", "✗".red(), e),
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }

    /// A titled table of movie cards with the user's marks. JSON formats get
    /// the movies as an array.
    pub fn movies(&self, title: &str, movies: &[Movie], state: &PreferenceState) {
        if self.quiet {
            return;
        }
        if !self.is_human() {
            self.data(&movies);
            return;
        }

        println!("\n{}", title.bright_cyan().bold());
        if movies.is_empty() {
            println!("{}", "No movies found".bright_black());
            return;
        }
        println!("{}", movie_table(movies, state));
    }

    pub fn comments(&self, movie: &Movie, comments: &[Comment]) {
        if self.quiet {
            return;
        }
        if !self.is_human() {
            self.data(&comments);
            return;
        }

        println!("\n{} ({})", format!("Comments on {}", movie.title).bright_cyan().bold(), comments.len());
        if comments.is_empty() {
            println!("{}", "No comments yet".bright_black());
            return;
        }
        for comment in comments {
            println!(
                "{} {} {}",
                comment.author.bold(),
                comment.timestamp.bright_black(),
                format!("#{}", comment.id.0).bright_black()
            );
            println!("  {}", comment.content);
        }
    }
}

fn marks(movie: &Movie, state: &PreferenceState) -> String {
    let mut marks = Vec::new();
    if state.liked.contains(movie.id) {
        marks.push("♥".red().to_string());
    }
    if state.disliked.contains(movie.id) {
        marks.push("✗".bright_black().to_string());
    }
    if state.watch_later.contains(movie.id) {
        marks.push("⏱".yellow().to_string());
    }
    marks.join(" ")
}

pub fn movie_table(movies: &[Movie], state: &PreferenceState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Year").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
        Cell::new("Genre").add_attribute(Attribute::Bold),
        Cell::new("").add_attribute(Attribute::Bold),
    ]);
    for movie in movies {
        let rating = if movie.is_rated() {
            Cell::new(movie.rating_label()).fg(Color::Yellow)
        } else {
            Cell::new(movie.rating_label()).fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(movie.year),
            rating,
            Cell::new(&movie.genre),
            Cell::new(marks(movie, state)),
        ]);
    }
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_models::MovieId;

    #[test]
    fn test_movie_table_lists_every_movie() {
        let movies = vec![
            Movie::new(1, "Shadow Hunter", 2024, 8.4, "Action", "movie-poster-1.jpg"),
            Movie::new(7, "Quantum Paradox", 2025, 0.0, "Sci-Fi", "movie-poster-7.jpg"),
        ];
        let rendered = movie_table(&movies, &PreferenceState::default()).to_string();
        assert!(rendered.contains("Shadow Hunter"));
        assert!(rendered.contains("8.4"));
        assert!(rendered.contains("TBA"));
    }

    #[test]
    fn test_marks_reflect_state() {
        let movie = Movie::new(3, "Echoes", 2023, 7.0, "Drama", "movie-poster-3.jpg");
        let mut state = PreferenceState::default();
        assert!(marks(&movie, &state).is_empty());

        state.toggle_like(MovieId(3));
        state.toggle_watch_later(MovieId(3));
        let rendered = marks(&movie, &state);
        assert!(rendered.contains('♥'));
        assert!(rendered.contains('⏱'));
    }
}
