use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "py-4 text-center border-t border-white/5",
        div { class: "flex justify-center gap-6 text-[10px] font-mono uppercase tracking-widest text-gray-500",
          a {
            class: "hover:text-pin-accent transition-colors",
            href: "https://listenbrainz.org",
            target: "_blank",
            "[ ListenBrainz ]"
          }
          a {
            class: "hover:text-pin-accent transition-colors",
            href: "https://listenbrainz.org/settings/",
            target: "_blank",
            "[ Get your user token ]"
          }
        }
      }
    }
}
