use api::auth::AuthResponse;
use dioxus::prelude::*;
use shared::pin::Session;

#[derive(Clone, Copy, Debug)]
pub struct Auth {
    state: Signal<Option<AuthResponse>>,
}

impl Auth {
    pub fn new(state: Signal<Option<AuthResponse>>) -> Self {
        Self { state }
    }

    pub fn login(&mut self, response: AuthResponse) {
        self.state.set(Some(response));
    }

    pub async fn logout(&mut self) {
        let _ = api::logout().await;
        self.state.set(None);
    }

    /// Check if a server error is an authentication error.
    /// If it is, logs the user out locally.
    /// Returns true if the error was handled (user logged out), false otherwise.
    pub fn handle_error(&mut self, error: &ServerFnError) -> bool {
        if let ServerFnError::ServerError { code: 401, .. } = error {
            self.state.set(None);
            return true;
        }
        false
    }

    /// Wraps a server function call to automatically handle authentication errors.
    pub async fn call<T>(
        mut self,
        fut: impl std::future::Future<Output = Result<T, ServerFnError>>,
    ) -> Result<T, ServerFnError> {
        match fut.await {
            Ok(val) => Ok(val),
            Err(e) => {
                self.handle_error(&e);
                Err(e)
            }
        }
    }

    pub fn user_name(&self) -> Option<String> {
        self.state.read().as_ref().map(|a| a.user_name.clone())
    }

    pub fn auth_token(&self) -> Option<String> {
        self.state.read().as_ref().map(|a| a.auth_token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_some()
    }

    /// Whether the logged-in user is the owner of `profile`.
    pub fn owns_profile(&self, profile: &str) -> bool {
        self.state
            .read()
            .as_ref()
            .is_some_and(|a| a.user_name.eq_ignore_ascii_case(profile))
    }

    /// Session as seen by the pin flow, for an explicit ownership flag.
    pub fn session(&self, is_profile_owner: bool) -> Session {
        Session {
            auth_token: self.auth_token(),
            is_profile_owner,
        }
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// The human-readable part of a server function error.
pub fn server_error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
