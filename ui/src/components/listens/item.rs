use dioxus::prelude::*;
use shared::listen::Listen;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub listen: Listen,
    pub can_pin: bool,
    pub on_pin: EventHandler<Listen>,
}

#[component]
pub fn ListenItem(props: Props) -> Element {
    let listen = props.listen.clone();
    let track = listen.track_name().unwrap_or("Unknown Track").to_string();
    let artist = listen.artist_name().unwrap_or("Unknown Artist").to_string();
    let release = listen.track_metadata.release_name.clone();
    let listened_at = listen.listened_at_display();

    rsx! {
      li { class: "bg-white/5 border border-white/5 p-4 rounded-lg hover:border-pin-accent/50 hover:bg-white/10 transition-all duration-200 group",
        div { class: "flex justify-between items-center gap-4",
          div { class: "min-w-0",
            h5 { class: "text-lg font-bold text-white group-hover:text-pin-accent transition-colors truncate",
              "{track}"
            }
            p { class: "text-md text-gray-400 font-mono truncate", "{artist}" }
            if let Some(release) = release {
              p { class: "text-sm text-gray-500 italic mt-1", "from \"{release}\"" }
            }
          }

          div { class: "flex items-center gap-4 shrink-0",
            if let Some(listened_at) = listened_at {
              p { class: "text-sm font-mono text-gray-500 whitespace-nowrap", "{listened_at}" }
            }
            if props.can_pin {
              button {
                class: "text-xs font-mono uppercase tracking-wider text-gray-400 hover:text-pin-accent transition-colors cursor-pointer",
                r#type: "button",
                title: "Pin this recording to your profile",
                onclick: move |_| props.on_pin.call(listen.clone()),
                "[ Pin ]"
              }
            }
          }
        }
      }
    }
}
