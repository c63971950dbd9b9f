use super::Context;
use crate::output::Output;
use color_eyre::Result;
use marquee_core::{FilterQuery, Shelf};
use marquee_models::SortMode;
use owo_colors::OwoColorize;
use tracing::{debug, warn};

pub fn run_browse(
    ctx: &Context,
    query: Option<String>,
    genre: Option<String>,
    sort: Option<String>,
    output: &Output,
) -> Result<()> {
    let app = ctx.open_app()?;

    let genre_input = genre.unwrap_or_default();
    let genre = app.catalog().resolve_genre(&genre_input);
    if !genre_input.is_empty() && genre.is_all() && !genre_input.eq_ignore_ascii_case("all") {
        warn!(operation = "browse", genre = %genre_input, "Unknown genre, showing all genres");
    }

    if let Some(raw) = sort.as_deref() {
        if SortMode::parse(raw).is_none() {
            warn!(
                operation = "browse",
                sort = %raw,
                options = %SortMode::labels().join(", "),
                "Unknown sort order, using Latest"
            );
        }
    }
    let sort = sort.as_deref().map(SortMode::parse_lenient).unwrap_or_default();
    let query = FilterQuery::new(query.unwrap_or_default(), genre, sort);
    debug!(operation = "browse", text = %query.text, genre = %query.genre, sort = %query.sort);

    let results = app.filter_and_sort(&query);
    let title = if query.is_default() {
        format!("All Movies ({})", results.len())
    } else {
        format!("{} results, {} / sorted by {}", results.len(), query.genre, query.sort.label())
    };
    output.movies(&title, &results, app.state());
    Ok(())
}

/// One shelf, or the whole home screen (every shelf in order) when none is named.
pub fn run_shelf(ctx: &Context, shelf: Option<Shelf>, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let shelves: Vec<Shelf> = match shelf {
        Some(shelf) => vec![shelf],
        None => Shelf::ALL.to_vec(),
    };

    if shelves.len() > 1 && !output.is_human() {
        let home: serde_json::Map<String, serde_json::Value> = shelves
            .iter()
            .map(|s| (s.title().to_string(), serde_json::json!(app.catalog().shelf(*s))))
            .collect();
        output.data(&home);
        return Ok(());
    }

    for shelf in shelves {
        let movies = app.catalog().shelf(shelf);
        output.movies(shelf.title(), &movies, app.state());
    }
    Ok(())
}

pub fn run_genres(ctx: &Context, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let genres = app.genres();

    if !output.is_human() {
        output.data(&genres);
        return Ok(());
    }
    for genre in &genres {
        let count = if genre == marquee_models::genre::ALL_GENRES {
            app.catalog().len()
        } else {
            app.by_genre(genre).len()
        };
        output.info(format!("{} {}", genre, format!("({})", count).bright_black()));
    }
    Ok(())
}
