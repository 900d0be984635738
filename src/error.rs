use std::fmt;

/// Errors the scan can surface to its caller.
///
/// Fetch-level failures (transport, bad status, undecodable bodies) never
/// appear here; the fetcher retries them and reports absence instead.
#[derive(Debug)]
pub enum ScrapeError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingField(&'static str),
    InvalidPrice(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScrapeError::Io(e) => write!(f, "IO error: {}", e),
            ScrapeError::Csv(e) => write!(f, "CSV error: {}", e),
            ScrapeError::MissingField(key) => {
                write!(f, "Item detail payload is missing the '{}' field", key)
            }
            ScrapeError::InvalidPrice(s) => write!(f, "Unparseable price value: {:?}", s),
        }
    }
}

impl std::error::Error for ScrapeError {}
impl From<std::io::Error> for ScrapeError { fn from(err: std::io::Error) -> Self { ScrapeError::Io(err) } }
impl From<csv::Error> for ScrapeError { fn from(err: csv::Error) -> Self { ScrapeError::Csv(err) } }
