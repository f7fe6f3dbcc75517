use dioxus::prelude::*;
use shared::listen::Listen;

#[cfg(feature = "server")]
use super::{listenbrainz_error, unavailable};
#[cfg(feature = "server")]
use crate::{config::CONFIG, globals::SERVICES};

/// Most recent listens of `user_name`, newest first.
#[server]
pub async fn get_recent_listens(user_name: String) -> Result<Vec<Listen>, ServerFnError> {
    let source = SERVICES
        .listens(None)
        .ok_or_else(|| unavailable("listen source"))?;
    source
        .recent_listens(&user_name, CONFIG.listens_page_size())
        .await
        .map_err(listenbrainz_error)
}
