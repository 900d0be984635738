use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScrapeError;
use crate::models::{ItemDetail, PriceValue};

/// Price-string grammar: digits with optional comma thousands separators,
/// an optional decimal part, and an optional k/m/b multiplier suffix.
/// Examples: "525", "1,234", "194.3k", "2.5m", "1.1b".
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,3}(?:,[0-9]{3})*|[0-9]+)(?:\.([0-9]+))?\s*([kmb])?$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginEstimate {
    pub buy: i64,
    pub sell: i64,
    pub margin: i64,
}

/// Normalizes a price value to integer coins.
///
/// Numbers pass through; strings are parsed against the grammar above and
/// evaluated as mantissa x multiplier in decimal arithmetic, so "2.5m"
/// becomes 2_500_000. Any sub-unit remainder truncates toward zero.
pub fn normalize_price(value: &PriceValue) -> Result<i64, ScrapeError> {
    match value {
        PriceValue::Number(n) => Ok(*n),
        PriceValue::Text(s) => parse_price_text(s),
    }
}

fn parse_price_text(s: &str) -> Result<i64, ScrapeError> {
    let invalid = || ScrapeError::InvalidPrice(s.to_string());

    let caps = PRICE_RE.captures(s.trim()).ok_or_else(invalid)?;
    let whole: String = caps[1].chars().filter(|c| *c != ',').collect();
    let frac = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let multiplier: i128 = match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
        None => 1,
        Some(suffix) if suffix == "k" => 1_000,
        Some(suffix) if suffix == "m" => 1_000_000,
        Some(_) => 1_000_000_000,
    };

    let mantissa: i128 = format!("{whole}{frac}").parse().map_err(|_| invalid())?;
    let scale = 10i128.checked_pow(frac.len() as u32).ok_or_else(invalid)?;
    let coins = mantissa.checked_mul(multiplier).ok_or_else(invalid)? / scale;

    i64::try_from(coins).map_err(|_| invalid())
}

/// Derives the synthetic flip estimate from the current price:
/// buy at 95%, sell at 105%, both floored; margin is their difference.
///
/// No bounds checking on the price itself; a zero or negative price flows
/// through and is screened only by the caller's margin filter.
pub fn estimate_margin(detail: &ItemDetail) -> Result<MarginEstimate, ScrapeError> {
    let current = detail
        .current
        .as_ref()
        .ok_or(ScrapeError::MissingField("current"))?;
    let price = normalize_price(&current.price)?;

    let buy = price * 95 / 100;
    let sell = price * 105 / 100;

    Ok(MarginEstimate {
        buy,
        sell,
        margin: sell - buy,
    })
}
