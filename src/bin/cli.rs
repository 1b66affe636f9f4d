//! Feed Crawler CLI
//!
//! One invocation performs one update run. Scheduling is left to cron or a
//! similar external runner.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use feed_crawler::{
    error::Result,
    models::Config,
    pipeline,
    storage::LocalStorage,
    utils::{SystemClock, http},
};

/// Periodical issue feed crawler
#[derive(Parser, Debug)]
#[command(
    name = "feed-crawler",
    version,
    about = "Keeps an RSS feed of newly published periodical issues"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Override the feed output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Fetch the source page and append new issues (default)
    Run,

    /// Validate configuration file
    Validate,

    /// Show current feed info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(path) = cli.output {
        config.feed.output_path = path;
    }

    let storage = LocalStorage::new(&config.feed.output_path);
    let clock = SystemClock;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            config.validate()?;
            let client = http::create_client(&config.crawler)?;

            match pipeline::run_update(&config, &client, &storage, &clock).await {
                Ok(summary) => {
                    if summary.first_run {
                        log::info!("Started new feed with {} entries", summary.total);
                    }
                }
                Err(e) => {
                    log::error!("Feed update failed: {e}");
                    return Err(e);
                }
            }
        }

        Command::Validate => pipeline::run_validate(&config)?,

        Command::Info => {
            pipeline::run_info(&config, &storage, &clock).await?;
        }
    }

    Ok(())
}
