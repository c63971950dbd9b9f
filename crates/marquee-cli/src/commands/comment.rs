use super::{require_movie, Context};
use crate::output::Output;
use color_eyre::Result;
use marquee_models::MovieId;
use tracing::info;

pub fn run_add(ctx: &Context, id: MovieId, text: &str, output: &Output) -> Result<()> {
    let mut app = ctx.open_app()?;
    let movie = require_movie(&app, id)?;

    match app.append_comment(id, text) {
        Some(comment) => {
            info!(operation = "append_comment", movie_id = id.get(), comment_id = comment.id.0);
            if output.is_human() {
                output.success(format!("Comment added to {}", movie.title));
            } else {
                output.data(&comment);
            }
        }
        None => output.warn("Comment is empty, nothing added"),
    }
    Ok(())
}

pub fn run_list(ctx: &Context, id: MovieId, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let movie = require_movie(&app, id)?;
    output.comments(&movie, &app.load_comments(id));
    Ok(())
}
