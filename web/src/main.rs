use auth::{use_auth, AuthProvider};
use dioxus::prelude::*;

use ui::{AlertProvider, Layout, Navbar};
use views::{HomePage, LoginPage, ProfilePage};

mod auth;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthGuard)]
        #[route("/login")]
        LoginPage {},

        #[layout(WebNavbar)]
            #[route("/")]
            HomePage {},
            #[route("/user/:user_name")]
            ProfilePage { user_name: String },
}

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use tower_cookies::CookieManagerLayer;

        let _ = dotenvy::dotenv();

        dioxus::serve(|| async move {
            Ok(dioxus::server::router(App).layer(CookieManagerLayer::new()))
        });
    }

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "PinBeet" }

        AuthProvider {
            AlertProvider { Router::<Route> {} }
        }
    }
}

#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let current = use_route::<Route>();

    use_effect(move || {
        let is_logged_in = auth.is_logged_in();

        // If not logged in AND we're not already on /login -> go to login
        if !is_logged_in && !matches!(current, Route::LoginPage {}) {
            nav.replace(Route::LoginPage {});
        }

        // If logged in and on /login -> go to home
        if is_logged_in && matches!(current, Route::LoginPage {}) {
            nav.replace(Route::HomePage {});
        }
    });

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn WebNavbar() -> Element {
    let mut auth = use_auth();

    let logout = move |_| {
        spawn(async move {
            auth.logout().await;
        });
    };

    rsx! {
        Layout {
            Navbar {
                if let Some(user_name) = auth.user_name() {
                    Link {
                        class: "nav-link text-white font-medium border-b-2 border-transparent hover:border-pin-accent pb-0.5",
                        active_class: "border-pin-accent",
                        to: Route::ProfilePage { user_name: user_name.clone() },
                        "{user_name}"
                    }
                }

                // Separator
                div { class: "h-4 w-px bg-white/10" }

                button {
                    class: "nav-link text-red-400 hover:text-red-300 text-xs uppercase tracking-widest font-mono cursor-pointer",
                    onclick: logout,
                    "Logout"
                }
            }

            main { class: "px-4 sm:px-6 lg:px-8 flex-grow flex flex-col relative overflow-y-auto w-full py-8",
                Outlet::<Route> {}
            }
        }
    }
}
