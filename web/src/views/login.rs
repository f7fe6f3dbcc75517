use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;
use ui::{server_error_message, Login};

use crate::auth::use_auth;

#[component]
pub fn LoginPage() -> Element {
    let auth = use_auth();

    let login = use_callback(move |user_token: String| {
        let mut auth = auth;
        Box::pin(async move {
            match api::login(user_token).await {
                Ok(response) => {
                    auth.login(response);
                    Ok(())
                }
                Err(e) => Err(server_error_message(&e)),
            }
        }) as Pin<Box<dyn Future<Output = Result<(), String>>>>
    });

    rsx! {
        Login { login }
    }
}
