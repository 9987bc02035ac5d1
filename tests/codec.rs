//! Validates the bijective mapping between tile indices and edge colors

use wangtiles::tiles::Tile;
use wangtiles::tiles::codec::{decode, encode};

#[test]
fn test_encode_inverts_decode_over_full_domain() {
    for index in 0..16 {
        assert_eq!(encode(decode(index)), index);
    }
}

#[test]
fn test_decode_inverts_encode_over_full_domain() {
    for index in 0..16 {
        let tile = decode(index);
        assert_eq!(decode(encode(tile)), tile);
    }
}

#[test]
fn test_decode_produces_binary_colors_only() {
    for index in 0..16 {
        let tile = decode(index);
        for color in [tile.top, tile.right, tile.bot, tile.left] {
            assert!(color <= 1, "index {index} decoded a non-binary color");
        }
    }
}

#[test]
fn test_concrete_scenario_from_edge_flags() {
    // right=2 and bot=4 set, top and left clear
    assert_eq!(decode(0b0110), Tile::new(0, 1, 1, 0));
    assert_eq!(encode(Tile::new(0, 1, 1, 0)), 6);
}

#[test]
fn test_decode_distinct_over_domain() {
    let mut seen = std::collections::HashSet::new();
    for index in 0..16 {
        assert!(seen.insert(decode(index)), "index {index} is a duplicate");
    }
    assert_eq!(seen.len(), 16);
}
