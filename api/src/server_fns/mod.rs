use dioxus::prelude::*;

pub mod auth;
pub mod guard;
pub mod listens;
pub mod pin;

pub use auth::*;
pub use guard::*;
pub use listens::*;
pub use pin::*;

pub fn server_error<E: std::fmt::Display>(e: E) -> ServerFnError {
    ServerFnError::ServerError {
        message: e.to_string(),
        code: 500,
        details: None,
    }
}

/// Like [`server_error`], but keeps the HTTP status ListenBrainz answered with.
#[cfg(feature = "server")]
pub fn listenbrainz_error(e: listenpin::error::ListenBrainzError) -> ServerFnError {
    ServerFnError::ServerError {
        message: e.to_string(),
        code: e.status().unwrap_or(500),
        details: None,
    }
}

#[cfg(feature = "server")]
pub(crate) fn unavailable(what: &str) -> ServerFnError {
    ServerFnError::ServerError {
        message: format!("No {what} configured"),
        code: 503,
        details: None,
    }
}
