use super::{prompts, require_movie, Context};
use crate::output::Output;
use color_eyre::Result;
use marquee_core::Toggle;
use marquee_models::MovieId;
use serde_json::json;
use tracing::info;

fn report(output: &Output, action: &str, title: &str, id: MovieId, outcome: Toggle, added: &str, removed: &str) {
    if output.is_human() {
        match outcome {
            Toggle::Added => output.success(format!("{} {}", added, title)),
            Toggle::Removed => output.success(format!("{} {}", removed, title)),
        }
    } else {
        output.data(&json!({
            "action": action,
            "id": id,
            "title": title,
            "active": outcome.is_added(),
        }));
    }
}

pub fn run_like(ctx: &Context, id: MovieId, output: &Output) -> Result<()> {
    let mut app = ctx.open_app()?;
    let movie = require_movie(&app, id)?;
    let outcome = app.toggle_like(id);
    info!(operation = "toggle_like", movie_id = id.get(), added = outcome.is_added());
    report(output, "like", &movie.title, id, outcome, "Liked", "Removed like from");
    Ok(())
}

pub fn run_dislike(ctx: &Context, id: MovieId, output: &Output) -> Result<()> {
    let mut app = ctx.open_app()?;
    let movie = require_movie(&app, id)?;
    let outcome = app.toggle_dislike(id);
    info!(operation = "toggle_dislike", movie_id = id.get(), added = outcome.is_added());
    report(output, "dislike", &movie.title, id, outcome, "Disliked", "Removed dislike from");
    Ok(())
}

pub fn run_liked(ctx: &Context, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let liked = app.liked_movies();
    let disliked = app.disliked_movies();

    if !output.is_human() {
        output.data(&json!({ "liked": liked, "disliked": disliked }));
        return Ok(());
    }
    output.movies(&format!("Liked ({})", liked.len()), &liked, app.state());
    output.movies(&format!("Disliked ({})", disliked.len()), &disliked, app.state());
    Ok(())
}

pub fn run_watch_later_toggle(ctx: &Context, id: MovieId, output: &Output) -> Result<()> {
    let mut app = ctx.open_app()?;
    let movie = require_movie(&app, id)?;
    let label = app.watch_list().label();
    let outcome = app.toggle_watch_later(id);
    info!(operation = "toggle_watch_later", movie_id = id.get(), added = outcome.is_added());
    report(
        output,
        "watch-later",
        &movie.title,
        id,
        outcome,
        &format!("Added to {}:", label),
        &format!("Removed from {}:", label),
    );
    Ok(())
}

pub fn run_watch_later_list(ctx: &Context, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let movies = app.watch_later_movies();
    let title = format!("{} ({})", app.watch_list().label(), movies.len());
    output.movies(&title, &movies, app.state());
    Ok(())
}

pub fn run_watch_later_clear(ctx: &Context, yes: bool, output: &Output) -> Result<()> {
    let mut app = ctx.open_app()?;
    let label = app.watch_list().label();
    let count = app.state().watch_later.len();

    if count == 0 {
        output.info(format!("{} is already empty", label));
        return Ok(());
    }

    if !yes {
        let prompt = format!("Remove all {} movie(s) from {}?", count, label);
        if !prompts::prompt_yes_no(&prompt, Some(false))? {
            output.info("Nothing cleared");
            return Ok(());
        }
    }

    app.clear_watch_later();
    info!(operation = "clear_watch_later", removed = count);
    output.success(format!("Cleared {} ({} movie(s))", label, count));
    Ok(())
}
