mod client;
pub(crate) mod models;

pub use client::{ListenBrainzClient, ListenBrainzClientBuilder, DEFAULT_API_URL};
