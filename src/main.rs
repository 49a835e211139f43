//! DevShelf - Developer tool catalog for the terminal
//!
//! Browse, search, and filter developer tool listings, like and bookmark
//! them, and submit new ones.

use clap::{Parser, Subcommand};
use devshelf::cli::{
    AddArgs, CategoriesArgs, CategoryArgs, CliResult, ConfigArgs, ExitCode, FeaturedArgs,
    LikeArgs, ListArgs, PrefsArgs, SaveArgs, ShowArgs, TrendingArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// DevShelf - Developer tool catalog for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tools with search, category filter, sort, and paging
    List(ListArgs),
    /// Show one tool in detail
    Show(ShowArgs),
    /// List featured tools
    Featured(FeaturedArgs),
    /// List trending tools
    Trending(TrendingArgs),
    /// Summarize every category
    Categories(CategoriesArgs),
    /// List the tools in one category
    Category(CategoryArgs),
    /// Toggle the like on a tool (like counts are not stored between runs)
    Like(LikeArgs),
    /// Toggle the bookmark on a tool
    Save(SaveArgs),
    /// Submit a new tool
    Add(AddArgs),
    /// Inspect or change stored preferences
    Prefs(PrefsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::List(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Featured(args) => args.execute(),
            Self::Trending(args) => args.execute(),
            Self::Categories(args) => args.execute(),
            Self::Category(args) => args.execute(),
            Self::Like(args) => args.execute(),
            Self::Save(args) => args.execute(),
            Self::Add(args) => args.execute(),
            Self::Prefs(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code.code());
}
