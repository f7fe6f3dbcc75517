use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "flex justify-between items-center py-6 border-b border-white/5",
            div { class: "flex items-center gap-3 group cursor-default",
                div { class: "w-10 h-10 bg-pin-accent rounded-sm flex items-center justify-center group-hover:-rotate-12 transition-transform",
                    // Pin icon
                    svg {
                        class: "w-6 h-6 text-white",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M5 5a2 2 0 012-2h10a2 2 0 012 2v16l-7-3.5L5 21V5z",
                        }
                    }
                }
                h1 { class: "text-2xl font-bold tracking-tighter uppercase text-white", "PinBeet" }
            }

            nav { class: "flex items-center gap-8 bg-pin-panel/50 px-6 py-2 rounded-full border border-white/5",
                {children}
            }
        }
    }
}
