use super::Context;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use marquee_core::{Autoplay, Carousel};
use marquee_models::Movie;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

fn slide_line(position: usize, total: usize, movie: &Movie) -> String {
    format!(
        "{} {} {} {}",
        format!("[{}/{}]", position + 1, total).bright_black(),
        movie.title.bright_cyan().bold(),
        format!("({})", movie.year).bright_black(),
        format!("★ {}  {}", movie.rating_label(), movie.genre).yellow()
    )
}

fn progress_bar(rounds: usize) -> ProgressBar {
    let pb = ProgressBar::new(rounds as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    pb
}

/// Rotate through the featured shelf the way the home page slideshow does,
/// one slide per interval, for `rounds` slides.
pub async fn run_spotlight(ctx: &Context, rounds: Option<usize>, interval: Option<u64>, output: &Output) -> Result<()> {
    let app = ctx.open_app()?;
    let slides = app.catalog().featured();
    if slides.is_empty() {
        output.warn("No featured movies to show");
        return Ok(());
    }

    let interval_secs = interval.unwrap_or(ctx.config.spotlight.interval_secs);
    if interval_secs == 0 {
        return Err(eyre!("Spotlight interval must be at least one second"));
    }
    // A single slide never rotates
    let rounds = if slides.len() == 1 { 1 } else { rounds.unwrap_or(slides.len()).max(1) };
    info!(operation = "spotlight", slides = slides.len(), rounds, interval_secs);

    let interactive = output.is_human() && std::io::stdout().is_terminal();
    let pb = if interactive { Some(progress_bar(rounds)) } else { None };
    let show = |index: usize| {
        let movie = &slides[index];
        match &pb {
            Some(pb) => {
                pb.println(slide_line(index, slides.len(), movie));
                pb.set_message(movie.title.clone());
                pb.inc(1);
            }
            None if output.is_human() => output.info(slide_line(index, slides.len(), movie)),
            None => output.data(movie),
        }
    };

    show(0);

    let carousel = Arc::new(Mutex::new(Carousel::new(slides.len())));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let autoplay = Autoplay::spawn(carousel, Duration::from_secs(interval_secs), move |index| {
        let _ = tx.send(index);
    });

    let mut shown = 1;
    while shown < rounds {
        match rx.recv().await {
            Some(index) => {
                show(index);
                shown += 1;
            }
            None => break,
        }
    }
    autoplay.cancel();

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_line_mentions_position_and_title() {
        let movie = Movie::new(1, "Shadow Hunter", 2024, 8.4, "Action", "movie-poster-1.jpg");
        let line = slide_line(0, 5, &movie);
        assert!(line.contains("1/5"));
        assert!(line.contains("Shadow Hunter"));
        assert!(line.contains("8.4"));
    }
}
