use dioxus::prelude::*;
use shared::alert::{Alert, AlertKind, AlertLog, AlertSink};

/// How long an alert stays on screen unless closed by hand.
#[cfg(target_arch = "wasm32")]
const ALERT_TIMEOUT_MS: u32 = 8_000;

/// Handle to the page-wide alert list, provided through context.
#[derive(Clone, Copy)]
pub struct Alerts {
    log: Signal<AlertLog>,
}

impl Alerts {
    pub fn new(log: Signal<AlertLog>) -> Self {
        Self { log }
    }

    pub fn list(&self) -> Vec<Alert> {
        self.log.read().alerts().to_vec()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.log.write().dismiss(id);
    }
}

impl AlertSink for Alerts {
    fn new_alert(&mut self, kind: AlertKind, title: &str, message: &str) {
        let id = self.log.write().push(kind, title, message);

        #[cfg(target_arch = "wasm32")]
        {
            let mut alerts = *self;
            spawn_forever(async move {
                gloo_timers::future::TimeoutFuture::new(ALERT_TIMEOUT_MS).await;
                alerts.dismiss(id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

pub fn use_alerts() -> Alerts {
    use_context::<Alerts>()
}

/// Provides [`Alerts`] to every child.
#[component]
pub fn AlertProvider(children: Element) -> Element {
    let log = use_signal(AlertLog::new);
    use_context_provider(|| Alerts::new(log));

    rsx! {
        {children}
    }
}

fn kind_classes(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "border-green-500/50 bg-green-900/30 text-green-300",
        AlertKind::Info => "border-sky-500/50 bg-sky-900/30 text-sky-300",
        AlertKind::Warning => "border-yellow-500/50 bg-yellow-900/30 text-yellow-300",
        AlertKind::Danger => "border-red-500/50 bg-red-900/30 text-red-300",
    }
}

#[component]
pub fn AlertStack() -> Element {
    let mut alerts = use_alerts();

    rsx! {
      div { class: "fixed top-4 right-4 z-[60] flex flex-col gap-2 w-80",
        for alert in alerts.list() {
          div {
            key: "{alert.id}",
            class: format!("border rounded p-3 shadow-lg font-mono text-sm {}", kind_classes(alert.kind)),
            role: "alert",
            "data-kind": alert.kind.as_str(),
            div { class: "flex justify-between items-start gap-2",
              div {
                p { class: "font-bold", "{alert.title}" }
                p { class: "text-gray-200 break-words", "{alert.message}" }
              }
              button {
                class: "text-gray-400 hover:text-white cursor-pointer",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| alerts.dismiss(alert.id),
                "×"
              }
            }
          }
        }
      }
    }
}
