use crate::components::{AlertStack, Footer};
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "relative z-10 flex flex-col h-screen max-w-5xl mx-auto px-4 sm:px-6 lg:px-8",
        {children}
        Footer {}
      }

      AlertStack {}
    }
}
