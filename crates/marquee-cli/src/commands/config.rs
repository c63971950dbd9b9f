use super::Context;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use marquee_config::{Config, StorageBackend};
use owo_colors::OwoColorize;
use serde_json::json;

fn section(title: &str, rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(title).fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    for (key, value) in rows {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

pub fn run_show(ctx: &Context, output: &Output) -> Result<()> {
    let config = &ctx.config;
    let exists = ctx.config_file.exists();

    if !output.is_human() {
        output.data(&json!({
            "config_file": ctx.config_file,
            "exists": exists,
            "config": config,
        }));
        return Ok(());
    }

    let file_note = if exists {
        ctx.config_file.display().to_string()
    } else {
        format!("{} {}", ctx.config_file.display(), "(not created, using defaults)".bright_black())
    };

    let store_location = match config.storage.backend {
        StorageBackend::Memory => "in memory (nothing is saved)".to_string(),
        StorageBackend::File => config
            .storage
            .file
            .clone()
            .unwrap_or_else(|| ctx.paths.store_file())
            .display()
            .to_string(),
    };

    let tables = [
        section("Configuration", vec![("Config file", file_note)]),
        section("Storage", vec![("Location", store_location)]),
        section(
            "Preferences",
            vec![
                ("Watch list", config.preferences.watch_list.label().to_string()),
                ("Default name", config.preferences.default_display_name.clone()),
                ("Default tag", config.preferences.default_tagline.clone()),
            ],
        ),
        section("Comments", vec![("Author", config.comments.author.clone())]),
        section("Spotlight", vec![("Interval", format!("{}s", config.spotlight.interval_secs))]),
        section(
            "Logging",
            vec![
                ("Level", config.logging.level.clone()),
                (
                    "JSON",
                    config
                        .logging
                        .json
                        .map(|json| json.to_string())
                        .unwrap_or_else(|| "auto (when piped)".to_string()),
                ),
                (
                    "File",
                    config
                        .logging
                        .file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "stderr".to_string()),
                ),
            ],
        ),
    ];

    for table in tables {
        output.info(table.to_string());
    }
    Ok(())
}

pub fn run_init(ctx: &Context, force: bool, output: &Output) -> Result<()> {
    let path = &ctx.config_file;
    if path.exists() && !force {
        output.warn(format!("Configuration already exists at {}", path.display()));
        output.info("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    Config::default()
        .save_to_file(path)
        .map_err(|e| eyre!("Failed to write config to {}: {}", path.display(), e))?;
    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create data directories: {}", e))?;

    tracing::info!(operation = "config_init", path = %path.display());
    output.success(format!("Configuration written to {}", path.display()));
    Ok(())
}
