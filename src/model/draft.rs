//! Entry Draft
//!
//! The composer's in-progress entry: title, description and the locally-built
//! ordered tile list. Serializes directly as the creation payload.

use crate::api::ApiError;

use super::TileKind;

/// A tile pending submission; has no id until the server assigns one.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PendingTile {
    #[serde(rename = "type")]
    pub kind: TileKind,
    pub content: String,
    #[serde(rename = "order")]
    pub rank: u32,
}

/// In-progress entry state for the composer form.
///
/// Tiles are append-only: each acquisition flow contributes one tile, ranked
/// by its position at the time it was added. Reordering or removing pending
/// tiles is not supported in this version.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EntryDraft {
    pub title: String,
    pub description: String,
    pub tiles: Vec<PendingTile>,
}

impl EntryDraft {
    /// Append a tile, ranking it at its current position. The first tile
    /// added becomes the featured tile.
    pub fn push_tile(&mut self, kind: TileKind, content: String) {
        let rank = self.tiles.len() as u32;
        self.tiles.push(PendingTile {
            kind,
            content,
            rank,
        });
    }

    /// Pre-submit check: an entry needs at least one content tile. Runs
    /// before any network call.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.tiles.is_empty() {
            return Err(ApiError::Validation(
                "Please add at least one content tile.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_fails_validation() {
        let draft = EntryDraft {
            title: "A day".to_string(),
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_draft_with_tile_passes_validation() {
        let mut draft = EntryDraft::default();
        draft.push_tile(TileKind::Image, "/uploads/a.png".to_string());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_ranks_assigned_by_append_position() {
        let mut draft = EntryDraft::default();
        draft.push_tile(TileKind::Image, "/uploads/a.png".to_string());
        draft.push_tile(TileKind::Workout, "{}".to_string());
        draft.push_tile(TileKind::Music, "{}".to_string());

        let ranks: Vec<u32> = draft.tiles.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert_eq!(draft.tiles[0].kind, TileKind::Image);
    }

    #[test]
    fn test_submitted_tiles_arrange_as_featured_and_secondary() {
        let mut draft = EntryDraft::default();
        draft.push_tile(TileKind::Image, "/uploads/beach.png".to_string());
        draft.push_tile(
            TileKind::Workout,
            r#"{"icon_type":"run","text":"Evening run","value":"5 km"}"#.to_string(),
        );
        draft.push_tile(
            TileKind::Workout,
            r#"{"icon_type":"gym","text":"Gym","value":"45 min"}"#.to_string(),
        );

        // Simulate the server echoing the entry back with tile ids assigned
        let mut payload = serde_json::to_value(&draft).unwrap();
        for (i, tile) in payload["tiles"].as_array_mut().unwrap().iter_mut().enumerate() {
            tile["id"] = serde_json::json!(i as i64 + 1);
        }
        let tiles: Vec<crate::model::Tile> =
            serde_json::from_value(payload["tiles"].clone()).unwrap();

        let layout = crate::model::arrange(&tiles);
        assert_eq!(
            layout.featured.as_ref().map(|t| t.kind),
            Some(TileKind::Image)
        );
        let secondary: Vec<(TileKind, u32)> =
            layout.secondary.iter().map(|t| (t.kind, t.rank)).collect();
        assert_eq!(
            secondary,
            vec![(TileKind::Workout, 1), (TileKind::Workout, 2)]
        );
    }

    #[test]
    fn test_draft_serializes_as_creation_payload() {
        let mut draft = EntryDraft {
            title: "Beach day".to_string(),
            description: "Sun and sand".to_string(),
            tiles: Vec::new(),
        };
        draft.push_tile(TileKind::Image, "/uploads/beach.png".to_string());

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["title"], "Beach day");
        assert_eq!(json["tiles"][0]["type"], "image");
        assert_eq!(json["tiles"][0]["order"], 0);
        assert!(json["tiles"][0].get("id").is_none());
    }
}
