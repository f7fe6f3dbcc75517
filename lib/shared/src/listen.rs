use serde::{Deserialize, Serialize};

/// Extra identifiers attached to a listen by the submitting client or the mapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_msid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_mbid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_mbid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artist_mbids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrackMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}

/// A single listen as returned by the ListenBrainz API.
///
/// Every field is optional: listens come from arbitrary submitting clients
/// and nothing guarantees that a given key is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Listen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listened_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_msid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub track_metadata: TrackMetadata,
}

impl Listen {
    pub fn track_name(&self) -> Option<&str> {
        self.track_metadata.track_name.as_deref()
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.track_metadata.artist_name.as_deref()
    }

    /// The msid nested under `track_metadata.additional_info`.
    pub fn recording_msid(&self) -> Option<&str> {
        self.track_metadata
            .additional_info
            .as_ref()
            .and_then(|info| info.recording_msid.as_deref())
    }

    /// Listen timestamp for display, if the listen carries one.
    pub fn listened_at_display(&self) -> Option<String> {
        let ts = self.listened_at?;
        chrono::DateTime::from_timestamp(ts, 0).map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// The recording currently pinned on a user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PinnedRecording {
    pub row_id: i64,
    pub recording_msid: String,
    #[serde(default)]
    pub recording_mbid: Option<String>,
    #[serde(default)]
    pub blurb_content: Option<String>,
    pub created: i64,
    pub pinned_until: i64,
    #[serde(default)]
    pub track_metadata: Option<TrackMetadata>,
}

impl PinnedRecording {
    /// Days left before the pin expires, never negative.
    pub fn days_remaining(&self, now: i64) -> i64 {
        let left = self.pinned_until.saturating_sub(now).max(0);
        left.saturating_add(86_399) / 86_400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listen_with_missing_fields() {
        let listen: Listen = serde_json::from_str(
            r#"{"listened_at": 1700000000, "track_metadata": {"track_name": "Track B"}}"#,
        )
        .unwrap();

        assert_eq!(listen.track_name(), Some("Track B"));
        assert_eq!(listen.artist_name(), None);
        assert_eq!(listen.recording_msid(), None);
    }

    #[test]
    fn reads_nested_recording_msid() {
        let listen: Listen = serde_json::from_str(
            r#"{
                "track_metadata": {
                    "artist_name": "Artist A",
                    "track_name": "Track B",
                    "additional_info": {"recording_msid": "abc-123", "duration_ms": 1000}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(listen.recording_msid(), Some("abc-123"));
    }

    #[test]
    fn deserializes_empty_object() {
        let listen: Listen = serde_json::from_str("{}").unwrap();
        assert_eq!(listen, Listen::default());
    }

    #[test]
    fn days_remaining_rounds_up_and_clamps() {
        let pin = PinnedRecording {
            row_id: 1,
            recording_msid: "m".to_string(),
            recording_mbid: None,
            blurb_content: None,
            created: 0,
            pinned_until: 7 * 86_400,
            track_metadata: None,
        };

        assert_eq!(pin.days_remaining(0), 7);
        assert_eq!(pin.days_remaining(86_400 * 6 + 10), 1);
        assert_eq!(pin.days_remaining(8 * 86_400), 0);
    }

    #[test]
    fn days_remaining_saturates_on_extreme_timestamps() {
        let pin = PinnedRecording {
            row_id: 1,
            recording_msid: "m".to_string(),
            recording_mbid: None,
            blurb_content: None,
            created: 0,
            pinned_until: i64::MAX,
            track_metadata: None,
        };

        assert_eq!(pin.days_remaining(0), i64::MAX / 86_400);
        assert_eq!(pin.days_remaining(i64::MIN), i64::MAX / 86_400);
        assert_eq!(PinnedRecording { pinned_until: i64::MIN, ..pin }.days_remaining(i64::MAX), 0);
    }
}
