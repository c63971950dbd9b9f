use super::{require_movie, Context};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use marquee_models::MovieId;
use owo_colors::OwoColorize;

fn yes_no(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".bright_black().to_string()
    }
}

pub fn run_show(ctx: &Context, id: MovieId, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let movie = require_movie(&app, id)?;
    let detail = app
        .movie_detail(id)
        .ok_or_else(|| eyre!("No movie with id {}", id))?;

    if !output.is_human() {
        output.data(&detail);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(&movie.title).fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Year"), Cell::new(movie.year)]);
    table.add_row(vec![Cell::new("Rating"), Cell::new(movie.rating_label())]);
    table.add_row(vec![Cell::new("Genre"), Cell::new(&movie.genre)]);
    table.add_row(vec![Cell::new("Poster"), Cell::new(&movie.poster)]);
    if let Some(description) = &movie.description {
        table.add_row(vec![Cell::new("About"), Cell::new(description)]);
    }
    table.add_row(vec![Cell::new("Liked"), Cell::new(yes_no(detail.liked))]);
    table.add_row(vec![Cell::new("Disliked"), Cell::new(yes_no(detail.disliked))]);
    table.add_row(vec![
        Cell::new(app.watch_list().label()),
        Cell::new(yes_no(detail.in_watch_later)),
    ]);
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());

    output.comments(&movie, &detail.comments);
    Ok(())
}
