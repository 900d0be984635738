use crate::error::ScrapeError;
use crate::models::{ItemDetail, Trend};

/// An item is rising when none of the 30/90/180-day windows shows a
/// negative trend. A missing window is an upstream contract violation
/// and surfaces as an error rather than a silent skip.
pub fn is_rising(detail: &ItemDetail) -> Result<bool, ScrapeError> {
    let day30 = detail.day30.as_ref().ok_or(ScrapeError::MissingField("day30"))?;
    let day90 = detail.day90.as_ref().ok_or(ScrapeError::MissingField("day90"))?;
    let day180 = detail.day180.as_ref().ok_or(ScrapeError::MissingField("day180"))?;

    Ok(day30.trend != Trend::Negative
        && day90.trend != Trend::Negative
        && day180.trend != Trend::Negative)
}
