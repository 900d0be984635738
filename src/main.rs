use anyhow::Context;

use ge_scrape::{run, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut cfg = Config::default();
    // Optional category override, e.g. `ge_scrape 16` for runes.
    if let Some(arg) = std::env::args().nth(1) {
        cfg.category = arg
            .parse()
            .with_context(|| format!("invalid category code: {arg}"))?;
    }

    run(&cfg).await
}
