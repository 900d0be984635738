use std::path::Path;

use crate::error::ScrapeError;
use crate::models::QualifyingItem;

/// Writes the qualifying items to `path`, replacing any previous run.
///
/// The header row is derived from the row type on the first serialized
/// record, so a run with no qualifying items leaves a completely empty
/// file: no header, no rows.
pub fn write_csv(path: &Path, items: &[QualifyingItem]) -> Result<(), ScrapeError> {
    let mut writer = csv::Writer::from_path(path)?;
    for item in items {
        writer.serialize(item)?;
    }
    writer.flush()?;
    Ok(())
}
