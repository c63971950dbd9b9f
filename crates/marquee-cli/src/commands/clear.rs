use super::{prompts, Context};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use marquee_core::Marquee;
use tracing::info;

pub fn run_clear(ctx: &Context, all: bool, preferences: bool, comments: bool, yes: bool, output: &Output) -> Result<()> {
    let clear_preferences = all || preferences;
    let clear_comments = all || comments;

    if !clear_preferences && !clear_comments {
        output.warn("No clear option specified. Use --preferences, --comments, or --all");
        output.info("\nExample: marquee clear --comments");
        return Ok(());
    }

    // Ask before deleting anything unless --yes was given
    if !yes {
        let what = match (clear_preferences, clear_comments) {
            (true, true) => "all preferences and comments",
            (true, false) => "likes, dislikes, the watch list and your profile",
            _ => "all comments",
        };
        if !prompts::prompt_yes_no(&format!("Clear {}?", what), Some(false))? {
            output.info("Nothing cleared");
            return Ok(());
        }
    }

    let mut app = ctx.open_app()?;

    // Everything at once: wipe the store instead of removing keys one by one
    if clear_preferences && clear_comments {
        let stats = app.preferences().stats();
        app.clear_all().map_err(|e| eyre!("Failed to clear stored data: {}", e))?;
        info!(
            operation = "clear_all",
            liked = stats.liked,
            disliked = stats.disliked,
            watch_later = stats.watch_later
        );
        output.success("All preferences and comments cleared");
        return Ok(());
    }

    if clear_preferences {
        clear_preference_data(&mut app, output)?;
    }
    if clear_comments {
        clear_comment_data(&mut app, output)?;
    }
    Ok(())
}

fn clear_preference_data(app: &mut Marquee, output: &Output) -> Result<()> {
    let stats = app.preferences().stats();
    app.clear_preferences()
        .map_err(|e| eyre!("Failed to clear preferences: {}", e))?;
    info!(
        operation = "clear_preferences",
        liked = stats.liked,
        disliked = stats.disliked,
        watch_later = stats.watch_later
    );
    output.success(format!(
        "Cleared preferences ({} liked, {} disliked, {} saved)",
        stats.liked, stats.disliked, stats.watch_later
    ));
    Ok(())
}

fn clear_comment_data(app: &mut Marquee, output: &Output) -> Result<()> {
    let removed = app
        .clear_comments()
        .map_err(|e| eyre!("Failed to clear comments: {}", e))?;
    info!(operation = "clear_comments", movies = removed);
    if removed == 0 {
        output.info("No comments found to clear");
    } else {
        output.success(format!("Cleared comments on {} movie(s)", removed));
    }
    Ok(())
}
