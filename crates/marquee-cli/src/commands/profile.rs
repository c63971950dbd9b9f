use super::{prompts, Context};
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use serde_json::json;
use tracing::info;

pub fn run_show(ctx: &Context, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let profile = &app.state().profile;
    let stats = app.preferences().stats();

    if !output.is_human() {
        output.data(&json!({ "profile": profile, "stats": stats }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(&profile.display_name).fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(&profile.tagline),
    ]);
    table.add_row(vec![Cell::new("Liked"), Cell::new(stats.liked)]);
    table.add_row(vec![Cell::new("Disliked"), Cell::new(stats.disliked)]);
    table.add_row(vec![Cell::new(app.watch_list().label()), Cell::new(stats.watch_later)]);
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());
    Ok(())
}

/// Anything not passed on the command line is prompted for, with the
/// current value as default.
pub fn run_set(ctx: &Context, name: Option<String>, tag: Option<String>, output: &Output) -> Result<()> {
    let mut app = ctx.open_app()?;
    let current = app.state().profile.clone();

    let display_name = match name {
        Some(name) => name,
        None => prompts::prompt_string("Display name", Some(&current.display_name))?,
    };
    let tagline = match tag {
        Some(tag) => tag,
        None => prompts::prompt_string("Tag", Some(&current.tagline))?,
    };

    app.set_profile(display_name.trim(), tagline.trim());
    info!(operation = "set_profile", display_name = %display_name.trim());
    output.success(format!("Profile saved: {} ({})", display_name.trim(), tagline.trim()));
    Ok(())
}
