/// Block identifier tests: id parts, ordering, component data edits.
use std::collections::HashSet;

use snbt_core::{Block, ComponentData, HostValue, SnbtError};

fn data<const N: usize>(pairs: [(&str, HostValue); N]) -> ComponentData {
    ComponentData::from_entries(pairs).unwrap()
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn id_parts() {
    let block = Block::new("minecraft:acacia_stairs[facing=east]");
    assert_eq!(block.to_string(), "acacia_stairs[facing=east]");
    assert_eq!(block.id(), "minecraft:acacia_stairs");
    assert_eq!(block.block_type(), "acacia_stairs");
    assert_eq!(block.name(), "acacia_stairs");
    assert_eq!(block.namespace(), "minecraft");
    assert_eq!(block.data_str(), "[facing=east]");
    assert!(block.has_data());

    let other = Block::new("namespace:type[componentkey1=componentvalue1]");
    assert_eq!(other.id(), "namespace:type");
    assert_eq!(other.name(), "type");
    assert_eq!(other.namespace(), "namespace");
}

#[test]
fn bare_block_has_empty_data() {
    let block: Block = "stone".parse().unwrap();
    assert_eq!(block.data_str(), "[]");
    assert!(!block.has_data());
    assert!(block.data().unwrap().is_empty());
}

#[test]
fn ordering_uses_the_id() {
    let mut blocks = vec![
        Block::new("minecraft:stone"),
        Block::new("other:block_name"),
        Block::new("acacia_stairs"),
        Block::new("another:type"),
    ];
    blocks.sort();
    let ids: Vec<String> = blocks.iter().map(Block::id).collect();
    assert_eq!(
        ids,
        [
            "another:type",
            "minecraft:acacia_stairs",
            "minecraft:stone",
            "other:block_name"
        ]
    );
}

#[test]
fn equality_ignores_data_but_equals_does_not() {
    let block = Block::new("acacia_stairs[facing=east]");
    assert!(block == "acacia_stairs");
    assert!(block == "minecraft:acacia_stairs");
    assert_eq!(block, Block::new("acacia_stairs[half=top]"));

    assert!(!block.equals("acacia_stairs"));
    assert!(!block.equals("acacia_stairs[half=top,facing=east]"));
    assert!(block.equals("acacia_stairs[facing=east]"));
    assert!(block.equals("minecraft:acacia_stairs[ facing = east ]"));
    assert!(!block.equals("acacia_stairs[facing="));
}

#[test]
fn hashing_follows_the_id() {
    let set: HashSet<Block> = ["stone", "minecraft:stone", "stone[x=1]", "dirt"]
        .into_iter()
        .map(Block::from)
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn data_parses_components() {
    let block = Block::new("acacia_stairs[facing=east]");
    assert_eq!(block.data().unwrap(), data([("facing", "east".into())]));
    assert!(matches!(
        Block::new("stone[1,2]").data(),
        Err(SnbtError::TypeMismatch { .. })
    ));
}

// ============================================================================
// Edits
// ============================================================================

#[test]
fn with_id_keeps_the_data() {
    let block = Block::new("acacia_stairs[waterlogged=true]");
    let sign = Block::new("oak_sign");
    assert!(block.with_id("oak_sign") == "oak_sign[waterlogged=true]");
    assert!(block.with_id("oak_sign").equals("oak_sign[waterlogged=true]"));
    assert!(block.with_id(&sign) == "oak_sign[waterlogged=true]");
    assert!(block.with_id("minecraft:oak_sign[rotation=4]").equals("oak_sign[waterlogged=true]"));
    assert_eq!(Block::new("stone").with_id("dirt").as_str(), "dirt");
}

#[test]
fn with_data_replaces_the_data() {
    let block = Block::new("acacia_stairs[facing=east]");
    let other = Block::new("other_block[waterlogged=true]");
    let expected = "acacia_stairs[waterlogged=true]";

    let replaced = block.with_data(&data([("waterlogged", true.into())]));
    assert!(replaced == expected);
    assert!(replaced.equals(expected));

    let from_other = block.with_data(&other.data().unwrap());
    assert!(from_other == expected);
    assert!(from_other.equals(expected));

    let parsed = ComponentData::parse("[waterlogged=true]").unwrap();
    assert!(block.with_data(&parsed).equals(expected));
}

#[test]
fn without_data_drops_the_brackets() {
    let block = Block::new("acacia_stairs[facing=east]");
    let bare = block.without_data();
    assert!(bare == "acacia_stairs");
    assert!(bare.equals("acacia_stairs"));
    assert!(bare != "acacia_stairs[]");
    assert!(bare.equals("acacia_stairs[]"));
    assert!(block.with_data(&ComponentData::new()) == "acacia_stairs");
}

#[test]
fn with_merge_data_overrides_and_appends() {
    let block = Block::new("acacia_stairs[facing=east,half=top]");
    let other = Block::new("other_block[waterlogged=true,half=bottom]");
    let expected_text = r#"acacia_stairs[facing="east",half="bottom",waterlogged=true]"#;
    let expected = "acacia_stairs[facing=east,half=bottom,waterlogged=true]";

    let merged = block
        .with_merge_data(&data([("waterlogged", true.into()), ("half", "bottom".into())]))
        .unwrap();
    assert!(merged.equals(expected));
    assert!(merged == expected_text);

    let merged = block.with_merge_data(&other.data().unwrap()).unwrap();
    assert!(merged.equals(expected));
    assert_eq!(merged.as_str(), expected_text);

    assert!(Block::new("stone[oops").with_merge_data(&ComponentData::new()).is_err());
}

#[test]
fn block_state_for_item() {
    let block = Block::new("oak_stairs[half=top,waterlogged=true,distance=2]");
    let item = block.as_block_state_for_item().unwrap();
    assert_eq!(
        item.as_str(),
        r#"oak_stairs[block_state={half:"top",waterlogged:"true",distance:"2"}]"#
    );
    assert!(item.equals(r#"oak_stairs[block_state={half:"top",waterlogged:"true",distance:"2"}]"#));

    let plain = Block::new("stone").as_block_state_for_item().unwrap();
    assert_eq!(plain.as_str(), "stone[block_state={}]");
}

#[test]
fn serde_uses_the_text() {
    let block = Block::new("minecraft:stone[x=1]");
    let json = serde_json::to_string(&block).unwrap();
    assert_eq!(json, r#""stone[x=1]""#);
    let back: Block = serde_json::from_str(r#""minecraft:dirt""#).unwrap();
    assert_eq!(back.as_str(), "dirt");
}
