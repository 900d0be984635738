use std::path::PathBuf;
use std::time::Duration;

/// Browser User-Agent sent with every request; the itemdb API rejects
/// clients without one.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Runtime settings for one scan.
#[derive(Debug, Clone)]
pub struct Config {
    /// Paginated catalogue listing endpoint.
    pub catalogue_url: String,
    /// Per-item detail endpoint.
    pub detail_url: String,
    /// Catalogue category to walk. 41 is the default; any category code
    /// from the itemdb API works.
    pub category: u32,
    /// Attempts per request before giving up on a URL.
    pub retries: u32,
    /// Fixed pause between attempts.
    pub retry_delay: Duration,
    /// Output CSV, overwritten on every run.
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalogue_url: "https://services.runescape.com/m=itemdb_rs/api/catalogue/items.json"
                .to_string(),
            detail_url: "https://services.runescape.com/m=itemdb_rs/api/catalogue/detail.json"
                .to_string(),
            category: 41,
            retries: 3,
            retry_delay: Duration::from_secs(4),
            output_file: PathBuf::from("positive_items.csv"),
        }
    }
}
