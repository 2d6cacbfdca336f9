mod config;
mod formatter;
mod http_client;
mod logging;
mod parser;
mod pipeline;

use anyhow::Context;
use config::ScrapeConfig;
use logging::LogConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init_logging(LogConfig::default())?;

    let config = ScrapeConfig::default();
    let links = pipeline::run(&config)
        .await
        .with_context(|| format!("failed to scrape links from {}", config.page_url))?;

    println!("{:?}", links);
    Ok(())
}
