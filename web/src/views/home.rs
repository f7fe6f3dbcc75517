use dioxus::prelude::*;

use crate::{auth::use_auth, Route};

/// Sends the logged-in user to their own profile.
#[component]
pub fn HomePage() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(user_name) = auth.user_name() {
            nav.replace(Route::ProfilePage { user_name });
        }
    });

    rsx! {}
}
