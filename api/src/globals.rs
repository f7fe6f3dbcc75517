#[cfg(feature = "server")]
use std::sync::LazyLock;

#[cfg(feature = "server")]
use listenpin::{listenbrainz::ListenBrainzClientBuilder, Services, ServicesBuilder};
#[cfg(feature = "server")]
use tracing::info;

#[cfg(feature = "server")]
use crate::config::CONFIG;

#[cfg(feature = "server")]
pub static SERVICES: LazyLock<Services> = LazyLock::new(|| {
    let client = ListenBrainzClientBuilder::new()
        .base_url(CONFIG.listenbrainz_url())
        .build()
        .expect("Failed to create ListenBrainz client");
    info!("Using ListenBrainz API at {}", CONFIG.listenbrainz_url());

    ServicesBuilder::new()
        .add_pins(client.clone())
        .add_listens(client.clone())
        .add_accounts(client)
        .build()
        .expect("Failed to build services")
});
