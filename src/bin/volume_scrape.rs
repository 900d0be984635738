//! Prints the trade-volume figures embedded in one wiki item page.
//!
//! The infobox marks volume cells with `data-attr-param="volume"`; this
//! fetches the page once and prints each matching element's text.

use anyhow::bail;
use scraper::{Html, Selector};

const WIKI_URL: &str = "https://runescape.wiki/w/Zarosian_insignia";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = ge_scrape::fetch::build_client()?;

    let response = client.get(WIKI_URL).send().await?;
    if !response.status().is_success() {
        bail!("request to {} failed with status {}", WIKI_URL, response.status());
    }

    let html = response.text().await?;
    let document = Html::parse_document(&html);
    let selector = Selector::parse(r#"[data-attr-param="volume"]"#).unwrap();

    for element in document.select(&selector) {
        println!("{}", element.text().collect::<String>());
    }

    Ok(())
}
