use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Raised only while constructing a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("x-rapidapi-key is required")]
    MissingKey,
    #[error("Unable to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Why a single call did not produce a response value.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP error occurred: {code} - {body}")]
    Status { code: u16, body: String },
    #[error("An error occurred: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("An error occurred: x-rapidapi-key is not a valid header value: {0}")]
    InvalidKey(
        #[source]
        #[from]
        InvalidHeaderValue,
    ),
    #[error("Invalid request url: {0}")]
    InvalidUrl(
        #[source]
        #[from]
        url::ParseError,
    ),
    #[error("An error occurred: response was not valid JSON: {0}")]
    Decode(
        #[source]
        #[from]
        serde_json::Error,
    ),
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        RequestError::Transport(Box::new(e))
    }
}

impl RequestError {
    /// HTTP status code, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
