use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, clear, comment, config, profile, show, spotlight, toggles};
use marquee_core::Shelf;
use marquee_models::MovieId;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Marquee - browse movies, keep track of what you like and what to watch next")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort the catalog
    #[command(long_about = "List catalog movies matching a search term and genre. The search is a case-insensitive match on title or genre. Sort by 'latest' (default), 'rating' or 'alphabetical'; unknown sort names fall back to latest and unknown genres to all.")]
    Browse {
        /// Text to look for in titles and genres
        #[arg(long, visible_alias = "search", value_name = "TEXT")]
        query: Option<String>,

        /// Restrict to one genre ("All" for no restriction)
        #[arg(short, long)]
        genre: Option<String>,

        /// Sort order: latest, rating or alphabetical
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show the home screen shelves, or just one of them
    Shelf {
        /// featured, trending, upcoming or for-you (all shelves when omitted)
        shelf: Option<Shelf>,
    },
    /// List the genres present in the catalog
    Genres,
    /// Show details, your marks and comments for a movie
    Show {
        id: MovieId,
    },
    /// Like a movie, or remove an existing like
    Like {
        id: MovieId,
    },
    /// Dislike a movie, or remove an existing dislike
    Dislike {
        id: MovieId,
    },
    /// Show liked and disliked movies
    Liked,
    /// Manage the watch-later list
    #[command(visible_alias = "wishlist")]
    #[command(long_about = "Add or remove movies from the watch-later list (called the wishlist when preferences.watch_list = \"wishlist\"). Running without a subcommand lists the saved movies.")]
    WatchLater {
        #[command(subcommand)]
        cmd: Option<WatchLaterCommands>,
    },
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        cmd: Option<ProfileCommands>,
    },
    /// Read or write comments on a movie
    Comment {
        #[command(subcommand)]
        cmd: CommentCommands,
    },
    /// Cycle through the featured movies like the home page slideshow
    Spotlight {
        /// Number of slides to show before exiting (defaults to one full cycle)
        #[arg(long)]
        rounds: Option<usize>,

        /// Seconds per slide (defaults to spotlight.interval_secs)
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
    /// Clear saved preferences and comments
    #[command(long_about = "Clear stored data. Use --preferences to forget likes, dislikes, the watch-later list and the profile, --comments to delete every comment, or --all for both.")]
    Clear {
        /// Clear preferences and comments
        #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["preferences", "comments"])]
        all: bool,

        /// Clear likes, dislikes, watch-later list and profile
        #[arg(long, action = ArgAction::SetTrue)]
        preferences: bool,

        /// Clear all comments
        #[arg(long, action = ArgAction::SetTrue)]
        comments: bool,

        /// Don't ask for confirmation
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum WatchLaterCommands {
    /// Add a movie, or remove it if already saved
    #[command(alias = "add-or-remove")]
    Toggle { id: MovieId },
    /// List saved movies
    List,
    /// Remove every saved movie
    Clear {
        /// Don't ask for confirmation
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show name, tag and stats
    Show,
    /// Change display name and tag (prompts for anything not given)
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        tag: Option<String>,
    },
}

#[derive(Subcommand)]
enum CommentCommands {
    /// Add a comment to a movie
    Add {
        id: MovieId,
        /// Comment text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List comments for a movie
    List { id: MovieId },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let ctx = commands::Context::load(cli.config.clone())?;

    logging::init_logging(cli.verbose, cli.quiet, &ctx.config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Browse { query, genre, sort } => browse::run_browse(&ctx, query, genre, sort, &output),
        Commands::Shelf { shelf } => browse::run_shelf(&ctx, shelf, &output),
        Commands::Genres => browse::run_genres(&ctx, &output),
        Commands::Show { id } => show::run_show(&ctx, id, &output),
        Commands::Like { id } => toggles::run_like(&ctx, id, &output),
        Commands::Dislike { id } => toggles::run_dislike(&ctx, id, &output),
        Commands::Liked => toggles::run_liked(&ctx, &output),
        Commands::WatchLater { cmd } => match cmd.unwrap_or(WatchLaterCommands::List) {
            WatchLaterCommands::Toggle { id } => toggles::run_watch_later_toggle(&ctx, id, &output),
            WatchLaterCommands::List => toggles::run_watch_later_list(&ctx, &output),
            WatchLaterCommands::Clear { yes } => toggles::run_watch_later_clear(&ctx, yes, &output),
        },
        Commands::Profile { cmd } => match cmd.unwrap_or(ProfileCommands::Show) {
            ProfileCommands::Show => profile::run_show(&ctx, &output),
            ProfileCommands::Set { name, tag } => profile::run_set(&ctx, name, tag, &output),
        },
        Commands::Comment { cmd } => match cmd {
            CommentCommands::Add { id, text } => comment::run_add(&ctx, id, &text.join(" "), &output),
            CommentCommands::List { id } => comment::run_list(&ctx, id, &output),
        },
        Commands::Spotlight { rounds, interval } => spotlight::run_spotlight(&ctx, rounds, interval, &output).await,
        Commands::Config { cmd } => match cmd.unwrap_or(ConfigCommands::Show) {
            ConfigCommands::Show => config::run_show(&ctx, &output),
            ConfigCommands::Init { force } => config::run_init(&ctx, force, &output),
        },
        Commands::Clear { all, preferences, comments, yes } => clear::run_clear(&ctx, all, preferences, comments, yes, &output),
    }
}
