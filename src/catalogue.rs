use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::fetch;
use crate::models::{CatalogueItem, CataloguePage};

/// Walks one catalogue category letter by letter, page by page.
///
/// The inner loop stops at the first page that comes back absent or with
/// no items, then the next letter starts over at page 1. Duplicate ids
/// across overlapping letter/page windows are passed through as-is.
pub async fn crawl(client: &Client, cfg: &Config, category: u32) -> Vec<CatalogueItem> {
    let mut all_items = Vec::new();

    for letter in 'a'..='z' {
        let mut page = 1u32;
        loop {
            let url = format!(
                "{}?category={}&alpha={}&page={}",
                cfg.catalogue_url, category, letter, page
            );
            info!(%letter, page, "Checking catalogue page");

            let listing: Option<CataloguePage> =
                fetch::fetch_json(client, &url, cfg.retries, cfg.retry_delay).await;

            match listing {
                Some(listing) if !listing.items.is_empty() => {
                    info!(%letter, page, count = listing.items.len(), "Fetched items");
                    all_items.extend(listing.items);
                    page += 1;
                }
                _ => {
                    warn!(%letter, page, "No items returned or reached the end");
                    break;
                }
            }
        }
    }

    info!(total = all_items.len(), "Catalogue crawl finished");
    all_items
}
