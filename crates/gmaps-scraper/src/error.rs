use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid place URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("invalid page budget: {0}")]
    InvalidPageBudget(String),

    #[error("invalid output mode: {0}")]
    InvalidOutputMode(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}
