use api::{get_current_pin, get_recent_listens, unpin_recording};
use dioxus::prelude::*;
use shared::{
    alert::{AlertKind, AlertSink},
    listen::Listen,
    pin::handle_error,
};
use ui::{server_error_message, use_alerts, ListenList, PinRecordingModal, PinnedRecordingCard};

use crate::auth::use_auth;

#[component]
pub fn ProfilePage(user_name: String) -> Element {
    let auth = use_auth();
    let alerts = use_alerts();
    let is_owner = auth.owns_profile(&user_name);

    let mut pin_modal_open = use_signal(|| false);
    let mut recording_to_pin = use_signal(|| None::<Listen>);

    let mut current_pin = use_resource({
        let user_name = user_name.clone();
        use_reactive!(|(user_name,)| async move {
            auth.call(get_current_pin(user_name)).await
        })
    });
    let listens = use_resource({
        let user_name = user_name.clone();
        use_reactive!(|(user_name,)| async move {
            auth.call(get_recent_listens(user_name)).await
        })
    });

    let handle_unpin = move |_: MouseEvent| async move {
        let mut alerts = alerts;
        match auth.call(unpin_recording()).await {
            Ok(_) => {
                alerts.new_alert(
                    AlertKind::Success,
                    "Recording unpinned",
                    "Your pinned recording was removed from your profile.",
                );
                current_pin.restart();
            }
            Err(e) => handle_error(
                &mut alerts,
                &server_error_message(&e),
                Some("Error while unpinning recording"),
            ),
        }
    };

    let pin_section = match &*current_pin.read() {
        None => rsx! {
          p { class: "text-gray-500 font-mono animate-pulse", "Loading pin..." }
        },
        Some(Ok(Some(pin))) => rsx! {
          PinnedRecordingCard { pin: pin.clone(), can_unpin: is_owner, on_unpin: handle_unpin }
        },
        Some(Ok(None)) => rsx! {
          p { class: "text-gray-500 font-mono italic",
            if is_owner {
              "Nothing pinned yet. Pick one of your listens below."
            } else {
              "{user_name} has not pinned anything."
            }
          }
        },
        Some(Err(e)) => {
            let message = server_error_message(e);
            rsx! {
              p { class: "text-red-400 font-mono text-sm", "Could not load pin: {message}" }
            }
        }
    };

    let listens_section = match &*listens.read() {
        None => rsx! {
          p { class: "text-gray-500 font-mono animate-pulse", "Loading listens..." }
        },
        Some(Ok(listens)) => rsx! {
          ListenList {
            listens: listens.clone(),
            can_pin: is_owner,
            on_pin: move |listen: Listen| {
                recording_to_pin.set(Some(listen));
                pin_modal_open.set(true);
            },
          }
        },
        Some(Err(e)) => {
            let message = server_error_message(e);
            rsx! {
              p { class: "text-red-400 font-mono text-sm", "Could not load listens: {message}" }
            }
        }
    };

    rsx! {
      div { class: "space-y-8 text-white w-full max-w-3xl mx-auto",
        div { class: "text-center",
          h1 { class: "text-4xl font-bold text-pin-accent mb-2", "{user_name}" }
          p { class: "text-gray-400 font-mono", "Pinned recording and recent listens." }
        }

        section { {pin_section} }

        section {
          h2 { class: "text-lg font-bold mb-3 text-white border-b border-white/10 pb-2",
            "Recent listens"
          }
          {listens_section}
        }

        PinRecordingModal {
          recording: recording_to_pin(),
          is_current_user: is_owner,
          is_open: pin_modal_open,
          on_pinned: move |_| current_pin.restart(),
        }
      }
    }
}
