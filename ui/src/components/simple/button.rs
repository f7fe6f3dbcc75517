use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-pin-leaf hover:bg-pin-leaf/80 text-white font-bold px-5 py-2 transition-colors cursor-pointer",
            ButtonVariant::Secondary => "px-5 py-2 border border-white/10 text-gray-300 transition-colors hover:bg-white/5 hover:text-white cursor-pointer",
            ButtonVariant::Danger => "px-3 py-1 text-xs font-mono uppercase tracking-wider text-red-400 border border-red-500/30 hover:bg-red-500/10 transition-colors cursor-pointer",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(into)]
    onclick: EventHandler<MouseEvent>,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, default)]
    disabled: bool,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn Button(props: Props) -> Element {
    let variant_classes = props.variant.get_classes();
    let disabled_classes = if props.disabled {
        "opacity-30 cursor-not-allowed pointer-events-none"
    } else {
        ""
    };
    let additional_classes = props.class;

    rsx! {
        button {
            class: "{variant_classes} {disabled_classes} {additional_classes} rounded",
            // Never submits an enclosing form
            r#type: "button",
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
            disabled: props.disabled,
            {props.children}
        }
    }
}
