use api::submit_pin_recording;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use shared::{
    listen::Listen,
    pin::{submit_pin, BlurbEditor, PinOutcome, MAX_BLURB_LENGTH},
};

use crate::{
    auth::{server_error_message, use_auth},
    components::{use_alerts, Button, ButtonVariant, Modal},
};

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// The listen to pin. Any of its fields may be missing.
    pub recording: Option<Listen>,
    /// Whether the viewer owns the profile the pin goes to.
    pub is_current_user: bool,
    /// Visibility. The component stays mounted while hidden so the blurb
    /// survives closing and reopening.
    pub is_open: Signal<bool>,
    /// Called once a pin was accepted with a 200.
    #[props(default)]
    pub on_pinned: EventHandler,
}

#[component]
pub fn PinRecordingModal(props: Props) -> Element {
    let mut editor = use_signal(BlurbEditor::new);
    let auth = use_auth();
    let alerts = use_alerts();
    let mut is_open = props.is_open;
    let on_pinned = props.on_pinned;
    let is_current_user = props.is_current_user;

    let recording = props.recording.clone();
    let track_name = recording
        .as_ref()
        .and_then(Listen::track_name)
        .unwrap_or_default()
        .to_string();
    let artist_name = recording
        .as_ref()
        .and_then(Listen::artist_name)
        .unwrap_or_default()
        .to_string();

    let handle_submit = move |_: MouseEvent| {
        // Closes right away; the request keeps running in this (still mounted) scope.
        is_open.set(false);
        let recording = recording.clone();
        let mut alerts = alerts;
        spawn(async move {
            let session = auth.session(is_current_user);
            let (next, outcome) = submit_pin(
                |token, request| async move {
                    auth.call(submit_pin_recording(
                        token,
                        request.recording_msid,
                        request.blurb_content,
                    ))
                    .await
                    .map_err(|e| server_error_message(&e))
                },
                &session,
                recording.as_ref(),
                editor(),
                &mut alerts,
            )
            .await;
            debug!("Pin submission settled: {:?}", outcome);
            if outcome.resets_editor() {
                editor.set(next);
            }
            if outcome == PinOutcome::Pinned {
                on_pinned.call(());
            }
        });
    };

    if !is_open() {
        return rsx! {};
    }

    let blurb_len = editor.read().len();
    let blurb_text = editor.read().text().to_string();

    rsx! {
      Modal {
        on_close: move |_| is_open.set(false),
        header: rsx! {
          h4 { class: "text-lg font-bold text-white", "Pin This Recording to Your Profile" }
        },
        footer: rsx! {
          Button {
            variant: ButtonVariant::Secondary,
            onclick: move |_: MouseEvent| is_open.set(false),
            "Cancel"
          }
          Button { onclick: handle_submit, "Pin" }
        },

        div { class: "space-y-3 text-gray-300",
          p {
            "Why are you pinning "
            b { class: "text-white", "{track_name} - {artist_name}" }
            "? (Optional)"
          }
          textarea {
            class: "w-full p-2 rounded bg-pin-dark border border-white/10 focus:border-pin-accent focus:outline-none text-white resize-y",
            id: "blurb-content",
            name: "blurb-content",
            placeholder: "Tell us why you love this recording!",
            rows: "4",
            spellcheck: "false",
            value: "{blurb_text}",
            oninput: move |e| {
                let next = editor().on_edit(&e.value());
                editor.set(next);
            },
          }
          small { class: "block text-right font-mono text-xs text-gray-500",
            "{blurb_len} / {MAX_BLURB_LENGTH}"
          }
          small { class: "block text-xs text-gray-500",
            "Pinning this recording will replace any recording currently pinned."
            br {}
            b { class: "text-gray-300", "{track_name} by {artist_name}" }
            " will be unpinned from your profile in one week."
          }
        }
      }
    }
}
