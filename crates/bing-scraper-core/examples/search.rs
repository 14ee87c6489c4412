//! Debug script: run one deadline-bounded search and dump the outcome
//!
//! ```text
//! RUST_LOG=bing_scraper_core=debug cargo run --example search -- "rust tokio"
//! ```

use std::time::Duration;

use bing_scraper_core::{BingScraper, DenyList, SearchConfig, host_only};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bing_scraper_core=info".parse()?))
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "hello".to_string());
    let deny: DenyList = ["wiki"].into_iter().collect();

    let scraper = BingScraper::new()?;
    let config = SearchConfig::unbounded().with_deadline(Duration::from_secs(60));
    let outcome = scraper.search_with_config(&query, deny, config).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    println!("\n=== Hosts ===\n");
    for host in host_only(&outcome.results) {
        println!("{}", host);
    }

    Ok(())
}
