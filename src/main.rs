use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod collector;
mod config;
mod content_type;
mod error;
mod finder;
mod models;
mod pipeline;
mod scrapers;
mod storage;
mod traits;
mod utils;

#[cfg(test)]
mod testing;

use config::Config;
use finder::Finder;
use scrapers::CheezburgerScraper;
use storage::RealFileSystem;
use utils::HttpClient;

#[derive(Parser)]
#[command(name = "catscraper")]
#[command(about = "Download memes from the Cheezburger gallery")]
#[command(version)]
struct Cli {
    /// How many memes to download [default: 10]
    #[arg(long)]
    amount: Option<usize>,

    /// Number of threads that will download images concurrently (max: 5) [default: 1]
    #[arg(long)]
    threads: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "catscraper.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let config = Config::load(&cli.config)?.with_overrides(cli.amount, cli.threads);
    info!("Using gallery at {}", config.scraper.base_url);

    run(config).await
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("catscraper={}", level))
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .init();

    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let download = &config.download;
    println!(
        "Downloading {} memes with {} threads",
        download.amount, download.threads
    );

    let http_client = HttpClient::new(&config.http)?;
    let scraper = CheezburgerScraper::new(http_client.clone(), config.scraper.clone());

    let finder = Finder::new(
        Arc::new(scraper),
        Arc::new(RealFileSystem),
        Arc::new(http_client),
        config.scraper.base_url.clone(),
    )
    .with_progress(download.progress);

    finder
        .collect_and_download_images(download.amount, download.threads, &download.output_dir)
        .await?;

    println!("Images saved successfully");
    Ok(())
}
