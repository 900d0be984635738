use serde::{Deserialize, Serialize};

// --- Catalogue listing payload ---

#[derive(Debug, Deserialize)]
pub struct CataloguePage {
    /// A page past the end of a letter comes back without an items list;
    /// both that and an explicit empty list read as an empty page.
    #[serde(default)]
    pub items: Vec<CatalogueItem>,
}

/// One listing entry. The payload carries more fields (icon URLs, type,
/// description) but only the id flows into the detail pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueItem {
    pub id: i64,
}

// --- Item detail payload ---

#[derive(Debug, Deserialize)]
pub struct DetailEnvelope {
    pub item: ItemDetail,
}

/// The trend windows and current price are optional so that a payload
/// missing one of them still decodes; the evaluators turn the absence
/// into a `MissingField` error instead of a retried fetch.
#[derive(Debug, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    pub day30: Option<TrendWindow>,
    pub day90: Option<TrendWindow>,
    pub day180: Option<TrendWindow>,
    pub current: Option<CurrentPrice>,
}

#[derive(Debug, Deserialize)]
pub struct TrendWindow {
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Deserialize)]
pub struct CurrentPrice {
    pub price: PriceValue,
}

/// The API serves small prices as plain numbers and larger ones as
/// display strings like "194.3k" or "2.5m".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(i64),
    Text(String),
}

// --- Output row ---

/// A rising item with a positive estimated margin. Field order is the
/// CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifyingItem {
    pub id: i64,
    pub name: String,
    pub estimated_buy_price: i64,
    pub estimated_sell_price: i64,
    pub margin: i64,
}
