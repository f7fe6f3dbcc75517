//! Blurb editing and pin submission, independent of any rendering layer.
//!
//! The editor state is a plain value owned by the caller, and the submission
//! flow receives the pin call, the session and the alert sink as arguments.

use std::fmt::Display;
use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::alert::{AlertKind, AlertSink};
use crate::listen::Listen;

pub const MAX_BLURB_LENGTH: usize = 250;

pub const PIN_ERROR_TITLE: &str = "Error while pinning recording";
pub const PIN_SUCCESS_TITLE: &str = "You pinned a recording!";

/// Body of a pin request. Only lives for the duration of one call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PinRequest {
    pub recording_msid: String,
    pub blurb_content: Option<String>,
    /// Unix timestamp; the server applies its one week default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_until: Option<i64>,
}

impl PinRequest {
    pub fn new(recording_msid: impl Into<String>, blurb_content: Option<String>) -> Self {
        Self {
            recording_msid: recording_msid.into(),
            blurb_content,
            pinned_until: None,
        }
    }
}

/// What the submitter needs to know about the viewer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub auth_token: Option<String>,
    pub is_profile_owner: bool,
}

impl Session {
    /// The token to act with, if this viewer may pin on the profile at all.
    fn pin_token(&self) -> Option<&str> {
        if !self.is_profile_owner {
            return None;
        }
        self.auth_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Whitespace as matched by an ECMAScript `\s` class. Differs from
/// [`char::is_whitespace`]: U+FEFF is included and U+0085 is not.
fn is_blurb_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Length as the browser's textarea counts it, in UTF-16 code units.
fn blurb_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Replaces every run of two or more whitespace characters with one space.
pub fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run: Option<char> = None;
    let mut run_len = 0usize;

    let flush = |out: &mut String, run: Option<char>, run_len: usize| match (run, run_len) {
        (Some(c), 1) => out.push(c),
        (Some(_), _) => out.push(' '),
        (None, _) => {}
    };

    for c in input.chars() {
        if is_blurb_whitespace(c) {
            if run.is_none() {
                run = Some(c);
            }
            run_len += 1;
        } else {
            flush(&mut out, run.take(), run_len);
            run_len = 0;
            out.push(c);
        }
    }
    flush(&mut out, run, run_len);
    out
}

/// Text of the blurb being written. `text` never exceeds [`MAX_BLURB_LENGTH`] UTF-16 units.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlurbEditor {
    text: String,
}

impl BlurbEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one edit event. Edits whose collapsed form is too long are
    /// dropped whole and the previous state is returned.
    pub fn on_edit(self, raw_input: &str) -> Self {
        let collapsed = collapse_whitespace(raw_input);
        if blurb_len(&collapsed) > MAX_BLURB_LENGTH {
            return self;
        }
        Self { text: collapsed }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        blurb_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn remaining(&self) -> usize {
        MAX_BLURB_LENGTH - self.len()
    }

    /// The blurb to send, `None` when nothing was written.
    pub fn blurb(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.clone())
        }
    }

    pub fn reset(self) -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PinOutcome {
    /// Viewer is not the authenticated profile owner; nothing was sent.
    Skipped,
    Pinned,
    /// The call settled without error but with a status other than 200.
    UnhandledStatus(u16),
    Failed(String),
}

impl PinOutcome {
    /// Whether the editor returned with this outcome should replace the
    /// caller's state. Skipped and failed submissions leave it untouched.
    pub fn resets_editor(&self) -> bool {
        matches!(self, PinOutcome::Pinned | PinOutcome::UnhandledStatus(_))
    }
}

/// Reports an error through the sink. Errors with an empty message are dropped.
pub fn handle_error<A, E>(alerts: &mut A, error: &E, title: Option<&str>)
where
    A: AlertSink + ?Sized,
    E: Display + ?Sized,
{
    let message = error.to_string();
    if message.is_empty() {
        return;
    }
    alerts.new_alert(AlertKind::Danger, title.unwrap_or("Error"), &message);
}

/// Submits the pin for `recording` and reports the result through `alerts`.
///
/// `call` receives the auth token and the request. The editor is reset
/// whenever the call settles without error, and kept as-is when it fails.
pub async fn submit_pin<F, Fut, E, A>(
    call: F,
    session: &Session,
    recording: Option<&Listen>,
    editor: BlurbEditor,
    alerts: &mut A,
) -> (BlurbEditor, PinOutcome)
where
    F: FnOnce(String, PinRequest) -> Fut,
    Fut: Future<Output = Result<u16, E>>,
    E: Display,
    A: AlertSink + ?Sized,
{
    let Some(token) = session.pin_token() else {
        return (editor, PinOutcome::Skipped);
    };

    let recording_msid = recording
        .and_then(Listen::recording_msid)
        .unwrap_or_default()
        .to_string();
    let request = PinRequest::new(recording_msid, editor.blurb());

    match call(token.to_string(), request).await {
        Ok(status) => {
            let editor = editor.reset();
            if status != 200 {
                warn!("Pin request settled with unhandled status {}", status);
                return (editor, PinOutcome::UnhandledStatus(status));
            }
            let artist = recording
                .and_then(Listen::artist_name)
                .unwrap_or("Unknown Artist");
            let track = recording
                .and_then(Listen::track_name)
                .unwrap_or("Unknown Track");
            info!("Pinned '{} - {}'", artist, track);
            alerts.new_alert(
                AlertKind::Success,
                PIN_SUCCESS_TITLE,
                &format!("{artist} - {track}"),
            );
            (editor, PinOutcome::Pinned)
        }
        Err(e) => {
            handle_error(alerts, &e, Some(PIN_ERROR_TITLE));
            (editor, PinOutcome::Failed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertLog;
    use crate::listen::{AdditionalInfo, TrackMetadata};
    use std::cell::RefCell;

    fn recording() -> Listen {
        Listen {
            track_metadata: TrackMetadata {
                artist_name: Some("Artist A".to_string()),
                track_name: Some("Track B".to_string()),
                additional_info: Some(AdditionalInfo {
                    recording_msid: Some("msid-1".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn owner() -> Session {
        Session {
            auth_token: Some("token".to_string()),
            is_profile_owner: true,
        }
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(collapse_whitespace("a  b\n\nc\td"), "a b c\td");
        assert_eq!(collapse_whitespace("line one\nline two"), "line one\nline two");
        assert_eq!(collapse_whitespace(" \r\n trailing   "), " trailing ");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn collapse_is_idempotent() {
        for input in ["a   b", "\n\n\nx \t y\n", "plain", "  ", "é  ü\u{a0}\u{a0}z"] {
            let once = collapse_whitespace(input);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn edit_stores_collapsed_text() {
        let editor = BlurbEditor::new().on_edit("great\n\n\nsong");
        assert_eq!(editor.text(), "great song");
        assert_eq!(editor.len(), 10);
        assert_eq!(editor.remaining(), MAX_BLURB_LENGTH - 10);
    }

    #[test]
    fn edit_over_limit_is_rejected_not_truncated() {
        let editor = BlurbEditor::new().on_edit("keep me");
        let too_long = "x".repeat(MAX_BLURB_LENGTH + 1);
        let editor = editor.on_edit(&too_long);
        assert_eq!(editor.text(), "keep me");
    }

    #[test]
    fn edit_at_limit_after_collapsing_is_accepted() {
        let mut input = "y".repeat(MAX_BLURB_LENGTH - 1);
        input.push_str("     ");
        let editor = BlurbEditor::new().on_edit(&input);
        assert_eq!(editor.len(), MAX_BLURB_LENGTH);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let input = "é".repeat(MAX_BLURB_LENGTH);
        let editor = BlurbEditor::new().on_edit(&input);
        assert_eq!(editor.len(), MAX_BLURB_LENGTH);
        assert_eq!(editor.remaining(), 0);
    }

    #[test]
    fn astral_characters_count_twice() {
        let half = "🎵".repeat(MAX_BLURB_LENGTH / 2);
        let editor = BlurbEditor::new().on_edit(&half);
        assert_eq!(editor.len(), MAX_BLURB_LENGTH);

        let over = format!("{half}x");
        assert_eq!(editor.clone().on_edit(&over), editor);
    }

    #[test]
    fn whitespace_set_matches_browser_regex() {
        assert_eq!(collapse_whitespace("a\u{FEFF}\u{FEFF}b"), "a b");
        assert_eq!(collapse_whitespace("a\u{2003}\u{3000}b"), "a b");
        assert_eq!(collapse_whitespace("a\u{85}\u{85}b"), "a\u{85}\u{85}b");
    }

    #[test]
    fn only_settled_calls_reset_the_editor() {
        assert!(PinOutcome::Pinned.resets_editor());
        assert!(PinOutcome::UnhandledStatus(202).resets_editor());
        assert!(!PinOutcome::Skipped.resets_editor());
        assert!(!PinOutcome::Failed("network down".to_string()).resets_editor());
    }

    #[test]
    fn empty_blurb_is_none() {
        assert_eq!(BlurbEditor::new().blurb(), None);
        assert_eq!(
            BlurbEditor::new().on_edit("hi").blurb(),
            Some("hi".to_string())
        );
    }

    #[tokio::test]
    async fn non_owner_never_calls_or_alerts() {
        let called = RefCell::new(false);
        let mut alerts = AlertLog::new();
        let session = Session {
            auth_token: Some("token".to_string()),
            is_profile_owner: false,
        };
        let editor = BlurbEditor::new().on_edit("why");

        let (editor, outcome) = submit_pin(
            |_, _| {
                *called.borrow_mut() = true;
                async { Ok::<u16, String>(200) }
            },
            &session,
            Some(&recording()),
            editor,
            &mut alerts,
        )
        .await;

        assert_eq!(outcome, PinOutcome::Skipped);
        assert!(!*called.borrow());
        assert!(alerts.is_empty());
        assert_eq!(editor.text(), "why");
    }

    #[tokio::test]
    async fn missing_token_never_calls() {
        let called = RefCell::new(false);
        let mut alerts = AlertLog::new();
        let session = Session {
            auth_token: None,
            is_profile_owner: true,
        };

        let (_, outcome) = submit_pin(
            |_, _| {
                *called.borrow_mut() = true;
                async { Ok::<u16, String>(200) }
            },
            &session,
            Some(&recording()),
            BlurbEditor::new(),
            &mut alerts,
        )
        .await;

        assert_eq!(outcome, PinOutcome::Skipped);
        assert!(!*called.borrow());
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn empty_blurb_is_sent_as_none() {
        let seen = RefCell::new(None);
        let mut alerts = AlertLog::new();

        submit_pin(
            |token, request| {
                *seen.borrow_mut() = Some((token, request));
                async { Ok::<u16, String>(200) }
            },
            &owner(),
            Some(&recording()),
            BlurbEditor::new(),
            &mut alerts,
        )
        .await;

        let (token, request) = seen.into_inner().unwrap();
        assert_eq!(token, "token");
        assert_eq!(request.recording_msid, "msid-1");
        assert_eq!(request.blurb_content, None);
    }

    #[tokio::test]
    async fn success_alerts_once_and_resets_editor() {
        let mut alerts = AlertLog::new();
        let editor = BlurbEditor::new().on_edit("on repeat");

        let (editor, outcome) = submit_pin(
            |_, request| {
                assert_eq!(request.blurb_content.as_deref(), Some("on repeat"));
                async { Ok::<u16, String>(200) }
            },
            &owner(),
            Some(&recording()),
            editor,
            &mut alerts,
        )
        .await;

        assert_eq!(outcome, PinOutcome::Pinned);
        assert_eq!(editor.text(), "");
        assert_eq!(alerts.len(), 1);
        let alert = &alerts.alerts()[0];
        assert_eq!(alert.kind, AlertKind::Success);
        assert!(alert.message.contains("Artist A"));
        assert!(alert.message.contains("Track B"));
    }

    #[tokio::test]
    async fn failure_alerts_once_and_keeps_editor() {
        let mut alerts = AlertLog::new();
        let editor = BlurbEditor::new().on_edit("keep");

        let (editor, outcome) = submit_pin(
            |_, _| async { Err::<u16, String>("network down".to_string()) },
            &owner(),
            Some(&recording()),
            editor,
            &mut alerts,
        )
        .await;

        assert_eq!(outcome, PinOutcome::Failed("network down".to_string()));
        assert_eq!(editor.text(), "keep");
        assert_eq!(alerts.len(), 1);
        let alert = &alerts.alerts()[0];
        assert_eq!(alert.kind, AlertKind::Danger);
        assert_eq!(alert.title, PIN_ERROR_TITLE);
        assert_eq!(alert.message, "network down");
    }

    #[tokio::test]
    async fn unexpected_status_is_silent() {
        let mut alerts = AlertLog::new();
        let editor = BlurbEditor::new().on_edit("text");

        let (editor, outcome) = submit_pin(
            |_, _| async { Ok::<u16, String>(500) },
            &owner(),
            Some(&recording()),
            editor,
            &mut alerts,
        )
        .await;

        assert_eq!(outcome, PinOutcome::UnhandledStatus(500));
        assert!(alerts.is_empty());
        assert_eq!(editor.text(), "");
    }

    #[tokio::test]
    async fn missing_recording_sends_empty_msid() {
        let seen = RefCell::new(None);
        let mut alerts = AlertLog::new();

        let (_, outcome) = submit_pin(
            |_, request| {
                *seen.borrow_mut() = Some(request);
                async { Ok::<u16, String>(200) }
            },
            &owner(),
            None,
            BlurbEditor::new(),
            &mut alerts,
        )
        .await;

        assert_eq!(outcome, PinOutcome::Pinned);
        assert_eq!(seen.into_inner().unwrap().recording_msid, "");
        assert_eq!(alerts.alerts()[0].message, "Unknown Artist - Unknown Track");
    }

    #[test]
    fn handle_error_uses_default_title_and_skips_empty() {
        let mut alerts = AlertLog::new();
        handle_error(&mut alerts, "", None);
        assert!(alerts.is_empty());

        handle_error(&mut alerts, "boom", None);
        assert_eq!(alerts.alerts()[0].title, "Error");
    }
}
