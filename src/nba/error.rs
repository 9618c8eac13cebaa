//! Error types for provider access and the lookup commands

use thiserror::Error;

/// Anything that can go wrong between issuing a request and pulling a
/// value out of the decoded response.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("response from {url} is not valid JSON: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("response has no result set named '{0}'")]
    MissingResultSet(String),

    #[error("result set has no column '{0}'")]
    MissingColumn(String),
}

/// Outcomes reported to the caller as `{"error": ...}`.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Player '{0}' not found in NBA API")]
    PlayerNotFound(String),

    #[error("No game logs found for {player} in {season}")]
    NoGameLogs { player: String, season: String },

    #[error("No career stats found for {0}")]
    NoCareerStats(String),

    #[error("{0} is not playing right now")]
    NotPlaying(String),

    #[error("Failed to fetch {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: FetchError,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Attaches the operation name to a fetch failure.
pub trait FetchContext<T> {
    fn fetching(self, what: &'static str) -> Result<T>;
}

impl<T> FetchContext<T> for std::result::Result<T, FetchError> {
    fn fetching(self, what: &'static str) -> Result<T> {
        self.map_err(|source| StatsError::Fetch { what, source })
    }
}
