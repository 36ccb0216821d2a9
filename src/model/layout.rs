//! Tile Layout Engine
//!
//! Arranges an entry's unordered tile list into the featured/secondary grid
//! slots used by the feed.

use super::Tile;

/// At most this many secondary tiles are shown per entry; any beyond that are
/// dropped from the render pass only, never from the data.
pub const MAX_SECONDARY_TILES: usize = 4;

/// Display arrangement of one entry's tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileLayout {
    /// The rank-0 tile occupying the 2x2 region, if the entry has one.
    pub featured: Option<Tile>,
    /// Tiles with rank > 0 in ascending rank order, capped at
    /// [`MAX_SECONDARY_TILES`].
    pub secondary: Vec<Tile>,
}

/// Arrange tiles into one featured slot and up to four secondary slots.
///
/// The sort is stable, so tiles sharing a rank keep their incoming relative
/// order; which of several rank-0 tiles wins the featured slot is therefore
/// unspecified beyond "the first the server sent". Extra rank-0 tiles do not
/// join the secondary row.
pub fn arrange(tiles: &[Tile]) -> TileLayout {
    let mut sorted: Vec<Tile> = tiles.to_vec();
    sorted.sort_by_key(|t| t.rank);

    let featured = sorted.iter().find(|t| t.rank == 0).cloned();
    let secondary = sorted
        .into_iter()
        .filter(|t| t.rank > 0)
        .take(MAX_SECONDARY_TILES)
        .collect();

    TileLayout { featured, secondary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TileKind;

    fn tile(id: i64, rank: u32) -> Tile {
        Tile {
            id,
            kind: TileKind::Image,
            content: format!("/img/{}.png", id),
            rank,
        }
    }

    #[test]
    fn test_empty_entry_has_no_slots() {
        let layout = arrange(&[]);
        assert!(layout.featured.is_none());
        assert!(layout.secondary.is_empty());
    }

    #[test]
    fn test_rank_zero_is_featured() {
        let layout = arrange(&[tile(2, 1), tile(1, 0)]);
        assert_eq!(layout.featured.map(|t| t.id), Some(1));
        assert_eq!(layout.secondary.len(), 1);
    }

    #[test]
    fn test_no_rank_zero_means_no_featured() {
        let layout = arrange(&[tile(1, 3), tile(2, 1)]);
        assert!(layout.featured.is_none());
        // Secondary tiles still come out in ascending rank order
        let ids: Vec<i64> = layout.secondary.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_secondary_sorted_ascending_and_capped_at_four() {
        let tiles = [
            tile(1, 5),
            tile(2, 2),
            tile(3, 0),
            tile(4, 4),
            tile(5, 1),
            tile(6, 3),
            tile(7, 6),
        ];
        let layout = arrange(&tiles);
        assert_eq!(layout.featured.map(|t| t.id), Some(3));
        let ids: Vec<i64> = layout.secondary.iter().map(|t| t.id).collect();
        // Ranks 1..=4; ranks 5 and 6 are silently dropped
        assert_eq!(ids, vec![5, 2, 6, 4]);
    }

    #[test]
    fn test_duplicate_ranks_keep_incoming_order() {
        // Tie-break among equal ranks is unspecified; the stable sort keeps
        // whatever order the server returned.
        let layout = arrange(&[tile(1, 2), tile(2, 2), tile(3, 2)]);
        let ids: Vec<i64> = layout.secondary.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_rank_zero_takes_first_only() {
        let layout = arrange(&[tile(1, 0), tile(2, 0), tile(3, 1)]);
        assert_eq!(layout.featured.map(|t| t.id), Some(1));
        // The second rank-0 tile is neither featured nor secondary
        let ids: Vec<i64> = layout.secondary.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_at_most_one_featured_and_four_secondary() {
        let tiles: Vec<Tile> = (0..20).map(|i| tile(i, i as u32 % 6)).collect();
        let layout = arrange(&tiles);
        assert!(layout.featured.is_some());
        assert!(layout.secondary.len() <= MAX_SECONDARY_TILES);
    }
}
