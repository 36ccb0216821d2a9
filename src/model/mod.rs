//! Domain Model
//!
//! Journal entries, tiles and the typed views of tile content. Entries and
//! users are owned by the remote API; the client holds ephemeral, read-mostly
//! copies. Tiles have no lifecycle outside their parent entry.

pub mod draft;
pub mod layout;

pub use draft::{EntryDraft, PendingTile};
pub use layout::{arrange, TileLayout, MAX_SECONDARY_TILES};

use crate::api::ApiError;

/// Session projection of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Tile discriminator as it appears on the wire.
///
/// Kinds this client does not know about deserialize to `Unknown` and render
/// as the generic placeholder rather than failing the whole entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Image,
    Workout,
    Music,
    #[serde(other)]
    Unknown,
}

/// One unit of journal-entry content.
///
/// `content` is opaque on the wire: a URL for image tiles, a serialized
/// record for music and workout tiles. `rank` determines display position;
/// rank 0 is the featured tile.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Tile {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TileKind,
    pub content: String,
    #[serde(rename = "order")]
    pub rank: u32,
}

/// One journaled day or event.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub entry_date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tiles: Vec<Tile>,
}

/// Parsed payload of a music tile.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MusicContent {
    pub song: String,
    pub artist: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Parsed payload of a workout tile: an icon hint, a primary label and a
/// secondary value string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct WorkoutContent {
    #[serde(default)]
    pub icon_type: String,
    pub text: String,
    pub value: String,
}

/// Icon shown on a workout tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutIcon {
    Walk,
    Gym,
    Run,
}

impl WorkoutIcon {
    /// Map the server's `icon_type` hint; anything unrecognized falls back to
    /// the run icon.
    pub fn from_icon_type(icon_type: &str) -> Self {
        match icon_type {
            "walk" => Self::Walk,
            "gym" => Self::Gym,
            _ => Self::Run,
        }
    }

    pub fn asset_path(self) -> &'static str {
        match self {
            Self::Walk => "/walk.svg",
            Self::Gym => "/gym.svg",
            Self::Run => "/run.svg",
        }
    }
}

/// Typed view of a tile's opaque `content` string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileContent {
    Image(String),
    Music(MusicContent),
    Workout(WorkoutContent),
}

impl Tile {
    /// Parse the opaque content string into its typed form.
    ///
    /// This is the only place stringly-typed payloads become values; callers
    /// on the render path turn any error into the generic placeholder.
    pub fn parse_content(&self) -> Result<TileContent, ApiError> {
        match self.kind {
            TileKind::Image => Ok(TileContent::Image(self.content.clone())),
            TileKind::Music => serde_json::from_str(&self.content)
                .map(TileContent::Music)
                .map_err(|e| ApiError::Malformed(e.to_string())),
            TileKind::Workout => serde_json::from_str(&self.content)
                .map(TileContent::Workout)
                .map_err(|e| ApiError::Malformed(e.to_string())),
            TileKind::Unknown => Err(ApiError::Malformed("unknown tile kind".to_string())),
        }
    }
}

/// Qualify a root-relative media path with the remote base URL; absolute URLs
/// pass through unchanged.
pub fn resolve_media_url(base: &str, content: &str) -> String {
    if content.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), content)
    } else {
        content.to_string()
    }
}

/// Format an entry date like "July 5, 2026".
///
/// The API sends ISO dates; an RFC 3339 timestamp is accepted too, and
/// anything else is shown verbatim rather than dropped.
pub fn format_entry_date(raw: &str) -> String {
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(kind: TileKind, content: &str) -> Tile {
        Tile {
            id: 1,
            kind,
            content: content.to_string(),
            rank: 0,
        }
    }

    #[test]
    fn test_music_content_parses() {
        let t = tile(
            TileKind::Music,
            r#"{"song":"Holocene","artist":"Bon Iver","imageUrl":"https://img/a.jpg"}"#,
        );
        match t.parse_content() {
            Ok(TileContent::Music(m)) => {
                assert_eq!(m.song, "Holocene");
                assert_eq!(m.artist, "Bon Iver");
                assert_eq!(m.image_url.as_deref(), Some("https://img/a.jpg"));
            }
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_music_content_without_art() {
        let t = tile(TileKind::Music, r#"{"song":"Flume","artist":"Bon Iver"}"#);
        match t.parse_content() {
            Ok(TileContent::Music(m)) => assert!(m.image_url.is_none()),
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_workout_content_parses() {
        let t = tile(
            TileKind::Workout,
            r#"{"icon_type":"walk","text":"Morning walk","value":"3.2 km"}"#,
        );
        match t.parse_content() {
            Ok(TileContent::Workout(w)) => {
                assert_eq!(w.icon_type, "walk");
                assert_eq!(w.text, "Morning walk");
                assert_eq!(w.value, "3.2 km");
            }
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_content_is_error_not_panic() {
        for kind in [TileKind::Music, TileKind::Workout] {
            let t = tile(kind, "not json at all");
            assert!(matches!(t.parse_content(), Err(ApiError::Malformed(_))));
        }
    }

    #[test]
    fn test_image_content_is_passed_through() {
        let t = tile(TileKind::Image, "/uploads/a.png");
        assert_eq!(
            t.parse_content(),
            Ok(TileContent::Image("/uploads/a.png".to_string()))
        );
    }

    #[test]
    fn test_unknown_kind_deserializes_to_catch_all() {
        let t: Tile = serde_json::from_str(
            r#"{"id":7,"type":"video","content":"x","order":2}"#,
        )
        .unwrap();
        assert_eq!(t.kind, TileKind::Unknown);
        assert!(t.parse_content().is_err());
    }

    #[test]
    fn test_workout_icon_mapping() {
        assert_eq!(WorkoutIcon::from_icon_type("walk"), WorkoutIcon::Walk);
        assert_eq!(WorkoutIcon::from_icon_type("gym"), WorkoutIcon::Gym);
        assert_eq!(WorkoutIcon::from_icon_type("swim"), WorkoutIcon::Run);
        assert_eq!(WorkoutIcon::from_icon_type(""), WorkoutIcon::Run);
    }

    #[test]
    fn test_resolve_media_url_prefixes_root_relative() {
        assert_eq!(
            resolve_media_url("http://host", "/img/a.png"),
            "http://host/img/a.png"
        );
        assert_eq!(
            resolve_media_url("http://host/", "/img/a.png"),
            "http://host/img/a.png"
        );
    }

    #[test]
    fn test_resolve_media_url_keeps_absolute() {
        assert_eq!(
            resolve_media_url("http://host", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_format_entry_date() {
        assert_eq!(format_entry_date("2026-07-05"), "July 5, 2026");
        assert_eq!(format_entry_date("2026-07-05T10:30:00Z"), "July 5, 2026");
        // Unparseable dates are shown as-is
        assert_eq!(format_entry_date("someday"), "someday");
    }
}
