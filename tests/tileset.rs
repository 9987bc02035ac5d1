//! Validates tileset catalogue construction and lookup

use wangtiles::GenerationError;
use wangtiles::tiles::Tileset;
use wangtiles::tiles::codec::encode;

fn two_color_tileset() -> Tileset {
    match Tileset::build(2) {
        Ok(tileset) => tileset,
        Err(error) => unreachable!("two colors are supported: {error}"),
    }
}

#[test]
fn test_build_two_colors_covers_every_index() {
    let tileset = two_color_tileset();

    assert_eq!(tileset.len(), 16);
    assert!(!tileset.is_empty());
    assert_eq!(tileset.color_count(), 2);

    for index in 0..16 {
        let tile = tileset.get(index);
        assert!(tile.is_some(), "index {index} missing from the catalogue");
        // The catalogue is keyed by the codec's own encoding
        assert!(tile.is_some_and(|t| encode(t) == index));
    }
}

#[test]
fn test_build_has_no_duplicate_tiles() {
    let tileset = two_color_tileset();

    let distinct: std::collections::HashSet<_> = tileset.iter().map(|(_, tile)| tile).collect();
    assert_eq!(distinct.len(), 16);
}

#[test]
fn test_lookup_past_the_catalogue_is_none() {
    let tileset = two_color_tileset();
    assert!(tileset.get(16).is_none());
    assert!(tileset.get(usize::MAX).is_none());
}

#[test]
fn test_unsupported_color_counts_are_rejected() {
    for color_count in [0, 1, 3, 4, 10] {
        let result = Tileset::build(color_count);
        assert!(
            matches!(
                result,
                Err(GenerationError::UnsupportedColorCount {
                    color_count: reported,
                    supported: 2,
                }) if reported == color_count
            ),
            "color count {color_count} should be rejected"
        );
    }
}

#[test]
fn test_iter_yields_pairs_in_index_order() {
    let tileset = two_color_tileset();

    let indices: Vec<_> = tileset.iter().map(|(index, _)| index).collect();
    let expected: Vec<_> = (0..16).collect();
    assert_eq!(indices, expected);
}
