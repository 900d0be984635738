//! Grand Exchange catalogue scanner.
//!
//! Walks one catalogue category of the itemdb API letter by letter,
//! fetches per-item price-trend details, keeps items whose 30/90/180-day
//! trends are all non-negative and whose estimated flip margin is
//! positive, and writes them to a CSV file.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod price;
pub mod sink;
pub mod trend;

use tracing::info;

pub use config::Config;
pub use error::ScrapeError;

/// Runs the full scan for the configured category: crawl the catalogue,
/// evaluate every listed item, write the qualifying rows.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let client = fetch::build_client()?;

    let items = catalogue::crawl(&client, cfg, cfg.category).await;
    let item_ids: Vec<i64> = items.iter().map(|item| item.id).collect();

    let positive_items = pipeline::process_all(&client, cfg, &item_ids).await?;
    sink::write_csv(&cfg.output_file, &positive_items)?;

    info!(
        count = positive_items.len(),
        file = %cfg.output_file.display(),
        "Saved qualifying items"
    );
    Ok(())
}
