use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;

type LoginCallback = Callback<String, Pin<Box<dyn Future<Output = Result<(), String>>>>>;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    login: LoginCallback,
}

/// Token login form. The token is handed to `login` untouched.
#[component]
pub fn Login(props: Props) -> Element {
    let mut user_token = use_signal(|| "".to_string());
    let mut error = use_signal(|| "".to_string());
    let mut pending = use_signal(|| false);

    let mut handle_login = move || {
        if pending() {
            return;
        }
        let token = user_token.read().to_string();
        pending.set(true);
        spawn(async move {
            error.set("".to_string());
            if let Err(e) = props.login.call(token).await {
                error.set(e);
            }
            pending.set(false);
        });
    };

    rsx! {
      div { class: "flex flex-col items-center justify-center min-h-screen text-white",
        div { class: "p-8 bg-pin-panel border border-white/10 rounded-lg shadow-2xl w-full max-w-md relative z-10",
          div { class: "flex flex-col items-center mb-8",
            h1 { class: "text-2xl font-bold tracking-tighter uppercase text-white", "PinBeet" }
            p { class: "text-sm text-pin-leaf font-mono mt-2 tracking-widest",
              "PIN WHAT YOU LOVE"
            }
          }

          div { class: "space-y-6",
            div {
              label { class: "block text-xs font-mono text-gray-400 mb-1 uppercase tracking-wider",
                "ListenBrainz user token"
              }
              input {
                class: "w-full bg-pin-dark border border-white/10 rounded p-3 text-white focus:outline-none focus:border-pin-accent transition-all font-mono",
                value: "{user_token}",
                oninput: move |e| user_token.set(e.value()),
                "type": "password",
                placeholder: "Paste your user token",
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        handle_login();
                    }
                },
              }
              p { class: "text-xs text-gray-500 mt-2",
                "Find it on "
                a {
                  class: "underline hover:text-pin-accent",
                  href: "https://listenbrainz.org/settings/",
                  target: "_blank",
                  "your ListenBrainz settings page"
                }
                "."
              }
            }

            if !error().is_empty() {
              div { class: "p-3 bg-red-500/10 border border-red-500/50 rounded text-red-400 text-sm font-mono",
                "{error}"
              }
            }

            button {
              class: "w-full bg-pin-leaf hover:bg-pin-leaf/80 text-white font-bold py-3 rounded transition-colors cursor-pointer",
              disabled: pending(),
              onclick: move |_| handle_login(),
              if pending() {
                "CHECKING TOKEN..."
              } else {
                "LOG IN"
              }
            }
          }
        }
      }
    }
}
