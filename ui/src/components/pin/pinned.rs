use dioxus::prelude::*;
use shared::listen::PinnedRecording;

use crate::components::{Button, ButtonVariant};

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub pin: PinnedRecording,
    /// Shows the unpin action; only meaningful for the profile owner.
    pub can_unpin: bool,
    pub on_unpin: EventHandler<MouseEvent>,
}

#[component]
pub fn PinnedRecordingCard(props: Props) -> Element {
    let pin = props.pin.clone();
    let metadata = pin.track_metadata.clone().unwrap_or_default();
    let track = metadata.track_name.unwrap_or_else(|| "Unknown Track".to_string());
    let artist = metadata
        .artist_name
        .unwrap_or_else(|| "Unknown Artist".to_string());
    let days_left = pin.days_remaining(chrono::Utc::now().timestamp());

    rsx! {
      div { class: "bg-pin-panel border border-pin-accent/40 p-5 rounded-lg",
        div { class: "flex justify-between items-start gap-4",
          div { class: "min-w-0",
            p { class: "text-xs font-mono uppercase tracking-widest text-pin-accent mb-1",
              "Pinned recording"
            }
            h3 { class: "text-xl font-bold text-white truncate", "{track}" }
            p { class: "text-gray-400 font-mono", "{artist}" }
            if let Some(blurb) = &pin.blurb_content {
              blockquote { class: "mt-3 pl-3 border-l-2 border-pin-accent/50 italic text-gray-300",
                "{blurb}"
              }
            }
          }
          div { class: "flex flex-col items-end gap-2 shrink-0",
            span { class: "text-xs font-mono text-gray-500",
              if days_left == 1 {
                "1 day left"
              } else {
                "{days_left} days left"
              }
            }
            if props.can_unpin {
              Button {
                variant: ButtonVariant::Danger,
                onclick: props.on_unpin,
                "Unpin"
              }
            }
          }
        }
      }
    }
}
