use dioxus::prelude::*;
use shared::listen::PinnedRecording;

#[cfg(feature = "server")]
use super::{listenbrainz_error, unavailable};
#[cfg(feature = "server")]
use crate::{globals::SERVICES, AuthSession};
#[cfg(feature = "server")]
use shared::pin::PinRequest;
#[cfg(feature = "server")]
use tracing::{info, warn};

/// Pins a recording on the session user's profile and returns the upstream status.
///
/// `auth_token` must be the token of the logged-in session; the call is
/// refused otherwise.
#[post("/api/pin", auth: AuthSession)]
pub async fn submit_pin_recording(
    auth_token: String,
    recording_msid: String,
    blurb_content: Option<String>,
) -> Result<u16, ServerFnError> {
    if auth.0.lb_token != auth_token {
        warn!("Pin attempt for {} with a foreign token", auth.0.sub);
        return Err(ServerFnError::ServerError {
            message: "Token does not belong to the current session".to_string(),
            code: 403,
            details: None,
        });
    }

    let pins = SERVICES.pins(None).ok_or_else(|| unavailable("pin service"))?;
    let request = PinRequest::new(recording_msid, blurb_content);
    let status = pins
        .submit_pin(&auth_token, &request)
        .await
        .map_err(listenbrainz_error)?;
    info!(
        "{} pinned {} via {} (status {})",
        auth.0.sub,
        request.recording_msid,
        pins.name(),
        status
    );
    Ok(status)
}

#[post("/api/pin/unpin", auth: AuthSession)]
pub async fn unpin_recording() -> Result<u16, ServerFnError> {
    let pins = SERVICES.pins(None).ok_or_else(|| unavailable("pin service"))?;
    let status = pins
        .unpin(&auth.0.lb_token)
        .await
        .map_err(listenbrainz_error)?;
    info!("{} unpinned their recording (status {})", auth.0.sub, status);
    Ok(status)
}

#[server]
pub async fn get_current_pin(user_name: String) -> Result<Option<PinnedRecording>, ServerFnError> {
    let pins = SERVICES.pins(None).ok_or_else(|| unavailable("pin service"))?;
    pins.current_pin(&user_name)
        .await
        .map_err(listenbrainz_error)
}
