use serde::Deserialize;
use shared::listen::{Listen, PinnedRecording};

/// Error body returned by the API on 4xx/5xx.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct CurrentPinResponse {
    pub pinned_recording: Option<PinnedRecording>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ListensPayload {
    #[serde(default)]
    pub listens: Vec<Listen>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ListensResponse {
    pub payload: ListensPayload,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ValidateTokenResponse {
    pub valid: bool,
    #[serde(default)]
    pub user_name: Option<String>,
}
