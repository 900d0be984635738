use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ScrapeError;
use crate::fetch;
use crate::models::{DetailEnvelope, QualifyingItem};
use crate::price;
use crate::trend;

/// Fetches the detail payload for every id, in order, and collects the
/// rising items whose estimated margin is positive.
///
/// Ids that fail to fetch are logged and skipped; a detail payload with a
/// missing trend window or price block aborts the run.
pub async fn process_all(
    client: &Client,
    cfg: &Config,
    item_ids: &[i64],
) -> Result<Vec<QualifyingItem>, ScrapeError> {
    let mut positive_items = Vec::new();

    for &item_id in item_ids {
        let url = format!("{}?item={}", cfg.detail_url, item_id);
        info!(item_id, "Fetching item detail");

        let Some(envelope) =
            fetch::fetch_json::<DetailEnvelope>(client, &url, cfg.retries, cfg.retry_delay).await
        else {
            warn!(item_id, "Failed to fetch item detail");
            continue;
        };

        let detail = envelope.item;
        if !trend::is_rising(&detail)? {
            info!(item_id, "Not showing a consistent rising trend");
            continue;
        }

        let estimate = price::estimate_margin(&detail)?;
        if estimate.margin > 0 {
            info!(
                item_id,
                buy = estimate.buy,
                sell = estimate.sell,
                margin = estimate.margin,
                "Rising item"
            );
            positive_items.push(QualifyingItem {
                id: item_id,
                name: detail.name,
                estimated_buy_price: estimate.buy,
                estimated_sell_price: estimate.sell,
                margin: estimate.margin,
            });
        }
    }

    Ok(positive_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn detail_body(name: &str, t30: &str, t90: &str, t180: &str, price_json: &str) -> String {
        format!(
            r#"{{"item":{{"name":"{name}","day30":{{"trend":"{t30}"}},"day90":{{"trend":"{t90}"}},"day180":{{"trend":"{t180}"}},"current":{{"price":{price_json}}}}}}}"#
        )
    }

    /// Stub detail endpoint keyed on the ?item= query parameter.
    /// Unknown ids get a 404.
    async fn spawn_detail_stub(routes: Vec<(i64, String)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).into_owned();
                let target = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or_default()
                    .to_string();

                let body = routes
                    .iter()
                    .find(|(id, _)| target.ends_with(&format!("?item={}", id)))
                    .map(|(_, body)| body.clone());
                let response = match body {
                    Some(body) => format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    ),
                    None => "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                        .to_string(),
                };
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{}", addr)
    }

    fn test_config(base: &str) -> Config {
        Config {
            detail_url: format!("{}/detail.json", base),
            retries: 2,
            retry_delay: Duration::from_millis(1),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn keeps_rising_items_drops_the_rest_preserving_order() {
        let base = spawn_detail_stub(vec![
            (1, detail_body("Rune bar", "positive", "neutral", "positive", "100")),
            (2, detail_body("Falling star", "negative", "positive", "positive", "100")),
            // id 3 has no route: fetch fails and the id is skipped
            (4, detail_body("Big ticket", "neutral", "neutral", "neutral", r#""2.5m""#)),
        ])
        .await;

        let cfg = test_config(&base);
        let client = fetch::build_client().unwrap();

        let items = process_all(&client, &cfg, &[1, 2, 3, 4]).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Rune bar");
        assert_eq!(items[0].estimated_buy_price, 95);
        assert_eq!(items[0].estimated_sell_price, 105);
        assert_eq!(items[0].margin, 10);
        assert_eq!(items[1].id, 4);
        assert_eq!(items[1].margin, 250_000);
    }

    #[tokio::test]
    async fn duplicate_ids_are_fetched_and_emitted_again() {
        let base = spawn_detail_stub(vec![(
            7,
            detail_body("Twice over", "positive", "positive", "positive", "1000"),
        )])
        .await;

        let cfg = test_config(&base);
        let client = fetch::build_client().unwrap();

        let items = process_all(&client, &cfg, &[7, 7]).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], items[1]);
    }

    #[tokio::test]
    async fn a_missing_trend_window_aborts_the_run() {
        let body = r#"{"item":{"name":"Broken","day30":{"trend":"positive"},"day180":{"trend":"positive"},"current":{"price":10}}}"#;
        let base = spawn_detail_stub(vec![(9, body.to_string())]).await;

        let cfg = test_config(&base);
        let client = fetch::build_client().unwrap();

        match process_all(&client, &cfg, &[9]).await {
            Err(ScrapeError::MissingField("day90")) => {}
            other => panic!("expected MissingField(day90), got {:?}", other),
        }
    }
}
