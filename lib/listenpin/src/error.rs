use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListenBrainzError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Base URL cannot be used to build API paths")]
    InvalidBaseUrl,

    /// Non-2xx response. `message` is the API's `error` field when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("ListenBrainz client is not configured")]
    NotConfigured,

    #[error("Invalid ListenBrainz user token")]
    InvalidToken,
}

impl ListenBrainzError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ListenBrainzError::Api { status, .. } => Some(*status),
            ListenBrainzError::InvalidToken => Some(401),
            ListenBrainzError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListenBrainzError>;
