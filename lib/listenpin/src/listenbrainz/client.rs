use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    listen::{Listen, PinnedRecording},
    pin::PinRequest,
};
use tracing::{debug, info};
use url::Url;

use super::models::{ApiErrorBody, CurrentPinResponse, ListensResponse, ValidateTokenResponse};
use crate::{
    error::{ListenBrainzError, Result},
    AccountProvider, ListenSource, PinService,
};

pub const DEFAULT_API_URL: &str = "https://api.listenbrainz.org";

/// Upper bound the API accepts for `count` on listen fetches.
const MAX_LISTEN_COUNT: usize = 1000;

#[derive(Debug, Clone)]
pub struct ListenBrainzClient {
    base_url: Url,
    client: Client,
}

#[derive(Default)]
pub struct ListenBrainzClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ListenBrainzClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.user_agent = Some(agent.to_string());
        self
    }

    pub fn build(self) -> Result<ListenBrainzClient> {
        let base_url_str = self.base_url.ok_or(ListenBrainzError::NotConfigured)?;
        let base_url = Url::parse(base_url_str.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(ListenBrainzError::InvalidBaseUrl);
        }

        let user_agent = self.user_agent.unwrap_or_else(|| {
            format!(
                "PinBeet/{} ( https://github.com/pinbeet/pinbeet )",
                env!("CARGO_PKG_VERSION")
            )
        });
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(ListenBrainzClient { base_url, client })
    }
}

impl ListenBrainzClient {
    /// Builds `{base}/1/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ListenBrainzError::InvalidBaseUrl)?
            .pop_if_empty()
            .push("1")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        debug!("Request: {} {}", method, url);
        let request = self.client.request(method, url);
        match token {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        }
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let status = response.status();
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ListenBrainzError::Api {
            status: status.as_u16(),
            message: format!("JSON parse error: {e}"),
        })
    }

    /// Passes 2xx responses through and turns anything else into `Api` errors.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        let message = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if text.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => text,
        };
        Err(ListenBrainzError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn submit_pin(&self, token: &str, request: &PinRequest) -> Result<u16> {
        let url = self.endpoint(&["pin"])?;
        let response = self
            .request(Method::POST, url, Some(token))
            .json(request)
            .send()
            .await?;
        let status = Self::check_status(response).await?.status().as_u16();
        info!(
            "Pinned recording {} (status {})",
            request.recording_msid, status
        );
        Ok(status)
    }

    pub async fn unpin(&self, token: &str) -> Result<u16> {
        let url = self.endpoint(&["pin", "unpin"])?;
        let response = self.request(Method::POST, url, Some(token)).send().await?;
        let status = Self::check_status(response).await?.status().as_u16();
        info!("Unpinned current recording (status {})", status);
        Ok(status)
    }

    pub async fn current_pin(&self, user_name: &str) -> Result<Option<PinnedRecording>> {
        let url = self.endpoint(&[user_name, "pins", "current"])?;
        let response = self.request(Method::GET, url, None).send().await?;
        let body: CurrentPinResponse = Self::handle_response(response).await?;
        Ok(body.pinned_recording)
    }

    pub async fn recent_listens(&self, user_name: &str, count: usize) -> Result<Vec<Listen>> {
        let mut url = self.endpoint(&["user", user_name, "listens"])?;
        url.query_pairs_mut()
            .append_pair("count", &count.clamp(1, MAX_LISTEN_COUNT).to_string());
        let response = self.request(Method::GET, url, None).send().await?;
        let body: ListensResponse = Self::handle_response(response).await?;
        Ok(body.payload.listens)
    }

    pub async fn validate_token(&self, token: &str) -> Result<String> {
        let url = self.endpoint(&["validate-token"])?;
        let response = self.request(Method::GET, url, Some(token)).send().await?;
        let body: ValidateTokenResponse = Self::handle_response(response).await?;
        match (body.valid, body.user_name) {
            (true, Some(user_name)) => Ok(user_name),
            _ => Err(ListenBrainzError::InvalidToken),
        }
    }
}

#[async_trait]
impl PinService for ListenBrainzClient {
    fn id(&self) -> &'static str {
        "listenbrainz"
    }

    fn name(&self) -> &'static str {
        "ListenBrainz"
    }

    async fn submit_pin(&self, token: &str, request: &PinRequest) -> Result<u16> {
        ListenBrainzClient::submit_pin(self, token, request).await
    }

    async fn unpin(&self, token: &str) -> Result<u16> {
        ListenBrainzClient::unpin(self, token).await
    }

    async fn current_pin(&self, user_name: &str) -> Result<Option<PinnedRecording>> {
        ListenBrainzClient::current_pin(self, user_name).await
    }
}

#[async_trait]
impl ListenSource for ListenBrainzClient {
    fn id(&self) -> &'static str {
        "listenbrainz"
    }

    fn name(&self) -> &'static str {
        "ListenBrainz"
    }

    async fn recent_listens(&self, user_name: &str, count: usize) -> Result<Vec<Listen>> {
        ListenBrainzClient::recent_listens(self, user_name, count).await
    }
}

#[async_trait]
impl AccountProvider for ListenBrainzClient {
    fn id(&self) -> &'static str {
        "listenbrainz"
    }

    fn name(&self) -> &'static str {
        "ListenBrainz"
    }

    async fn validate_token(&self, token: &str) -> Result<String> {
        ListenBrainzClient::validate_token(self, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path_and_encodes_segments() {
        let client = ListenBrainzClientBuilder::new()
            .base_url("http://localhost:8100/lb/")
            .build()
            .unwrap();
        let url = client
            .endpoint(&["user name", "pins", "current"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8100/lb/1/user%20name/pins/current"
        );
    }

    #[test]
    fn build_without_url_is_not_configured() {
        let err = ListenBrainzClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, ListenBrainzError::NotConfigured));
    }

    #[test]
    fn rejects_cannot_be_a_base_url() {
        let err = ListenBrainzClientBuilder::new()
            .base_url("mailto:someone@example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ListenBrainzError::InvalidBaseUrl));
    }
}
