mod search;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "prodscout-cli")]
#[command(about = "Product discovery command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Discover and rank products for a category from community discussions.
    Search {
        /// Product category to search for, e.g. "blender".
        category: String,

        /// Override the configured subreddits (repeatable).
        #[arg(long = "subreddit")]
        subreddits: Vec<String>,
    },
    /// Print the extraction vocabulary generated for a category.
    Phrases {
        /// Product category to generate phrases for.
        category: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = prodscout_core::load_app_config()?;

    match cli.command {
        Commands::Search {
            category,
            subreddits,
        } => search::run_search(&config, &category, subreddits).await,
        Commands::Phrases { category } => search::run_phrases(&config, &category).await,
    }
}
