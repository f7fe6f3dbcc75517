mod item;

pub use item::ListenItem;

use dioxus::prelude::*;
use shared::listen::Listen;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub listens: Vec<Listen>,
    /// Shows a pin action on every listen.
    pub can_pin: bool,
    pub on_pin: EventHandler<Listen>,
}

#[component]
pub fn ListenList(props: Props) -> Element {
    if props.listens.is_empty() {
        return rsx! {
          p { class: "text-gray-500 font-mono italic", "No listens yet." }
        };
    }

    rsx! {
      ul { class: "space-y-2",
        for (index, listen) in props.listens.iter().cloned().enumerate() {
          ListenItem {
            key: "{index}",
            listen,
            can_pin: props.can_pin,
            on_pin: props.on_pin,
          }
        }
      }
    }
}
