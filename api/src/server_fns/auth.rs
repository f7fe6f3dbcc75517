use crate::auth::AuthResponse;
use dioxus::prelude::*;

#[cfg(feature = "server")]
use super::{listenbrainz_error, server_error, unavailable};
#[cfg(feature = "server")]
use crate::{auth, globals::SERVICES, AuthSession};
#[cfg(feature = "server")]
use tower_cookies::{
    cookie::{time, SameSite},
    Cookie, Cookies,
};
#[cfg(feature = "server")]
use tracing::info;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

/// Helper to configure the auth cookie consistently
#[cfg(feature = "server")]
fn build_auth_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE_NAME, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_expires(
        time::OffsetDateTime::now_utc() + time::Duration::days(auth::EXPIRATION_DAYS),
    );
    cookie
}

/// Logs in with a ListenBrainz user token.
#[post("/api/auth/login", cookies: Cookies)]
pub async fn login(user_token: String) -> Result<AuthResponse, ServerFnError> {
    let user_token = user_token.trim().to_string();
    if user_token.is_empty() {
        return Err(ServerFnError::ServerError {
            message: "A user token is required".to_string(),
            code: 400,
            details: None,
        });
    }

    let accounts = SERVICES
        .accounts(None)
        .ok_or_else(|| unavailable("account provider"))?;
    let user_name = accounts
        .validate_token(&user_token)
        .await
        .map_err(listenbrainz_error)?;

    let (jwt, response) = auth::create_token(user_name, user_token).map_err(server_error)?;
    cookies.add(build_auth_cookie(jwt));
    info!("User {} logged in", response.user_name);

    Ok(response)
}

#[post("/api/auth/logout", cookies: Cookies)]
pub async fn logout() -> Result<(), ServerFnError> {
    let mut cookie = Cookie::new(AUTH_COOKIE_NAME, "");
    cookie.set_path("/");

    cookies.remove(cookie);

    Ok(())
}

#[get("/api/auth/me", auth: AuthSession)]
pub async fn get_current_user() -> Result<Option<AuthResponse>, ServerFnError> {
    Ok(Some(auth.0.to_response()))
}
