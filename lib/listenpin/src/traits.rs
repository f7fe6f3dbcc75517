use async_trait::async_trait;
use shared::{
    listen::{Listen, PinnedRecording},
    pin::PinRequest,
};

use crate::error::Result;

#[async_trait]
pub trait PinService: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// Pins a recording for the token's owner. Returns the response status
    /// for any successful (2xx) response.
    async fn submit_pin(&self, token: &str, request: &PinRequest) -> Result<u16>;

    async fn unpin(&self, token: &str) -> Result<u16>;

    async fn current_pin(&self, user_name: &str) -> Result<Option<PinnedRecording>>;
}

#[async_trait]
pub trait ListenSource: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    async fn recent_listens(&self, user_name: &str, count: usize) -> Result<Vec<Listen>>;
}

#[async_trait]
pub trait AccountProvider: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// Resolves a user token to its user name.
    async fn validate_token(&self, token: &str) -> Result<String>;
}
