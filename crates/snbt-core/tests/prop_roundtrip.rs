/// Property-based tests for SNBT text.
///
/// Uses the `proptest` crate to generate random tag trees and verify that
/// `parse(tag.to_string()) == tag` and that the canonical text is stable.
/// The remaining properties cover numeric string promotion and check that
/// the parser never panics on arbitrary input.
///
/// Strategies generate:
/// - Every scalar kind across its full range (floats limited to finite values)
/// - Strings and keys with quotes, backslashes, spaces and unicode
/// - Homogeneous lists, the three array kinds and nested compounds
use proptest::prelude::*;
use snbt_core::{
    parse, parse_component, to_tag, Byte, ByteArray, Compound, Double, Float, HostValue, Int,
    IntArray, List, Long, LongArray, Short, Tag,
};

// ============================================================================
// Strategies for generating tags
// ============================================================================

/// A string value or key, including characters that force quoting.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_.+-]{0,12}",
        prop::string::string_regex("[a-zA-Z0-9 :,=;'\"\\\\\\[\\]{}]{0,16}").unwrap(),
        "\\PC{0,12}",
        Just("true".to_string()),
        Just("1b".to_string()),
        Just("1.5".to_string()),
        Just(String::new()),
    ]
}

fn arb_float() -> impl Strategy<Value = Float> {
    any::<f32>()
        .prop_filter("finite", |v| v.is_finite())
        .prop_filter_map("below the float limit", |v| Float::new(f64::from(v)).ok())
}

fn arb_double() -> impl Strategy<Value = Double> {
    any::<f64>().prop_filter_map("finite", |v| Double::new(v).ok())
}

fn arb_scalar() -> impl Strategy<Value = Tag> {
    prop_oneof![
        any::<bool>().prop_map(Tag::Bool),
        any::<i8>().prop_map(|v| Tag::Byte(Byte::from(v))),
        any::<i16>().prop_map(|v| Tag::Short(Short::from(v))),
        any::<i32>().prop_map(|v| Tag::Int(Int::from(v))),
        any::<i64>().prop_map(|v| Tag::Long(Long::from(v))),
        arb_float().prop_map(Tag::Float),
        arb_double().prop_map(Tag::Double),
        arb_text().prop_map(Tag::String),
    ]
}

/// A list whose elements all come from one scalar kind.
fn arb_scalar_list() -> impl Strategy<Value = Tag> {
    fn list(tags: Vec<Tag>) -> Tag {
        Tag::List(List::from_tags(tags).unwrap())
    }
    prop_oneof![
        prop::collection::vec(any::<i8>().prop_map(|v| Tag::Byte(Byte::from(v))), 0..8)
            .prop_map(list),
        prop::collection::vec(any::<i32>().prop_map(|v| Tag::Int(Int::from(v))), 0..8)
            .prop_map(list),
        prop::collection::vec(arb_double().prop_map(Tag::Double), 0..8).prop_map(list),
        prop::collection::vec(arb_text().prop_map(Tag::String), 0..8).prop_map(list),
    ]
}

fn arb_array() -> impl Strategy<Value = Tag> {
    prop_oneof![
        prop::collection::vec(any::<i8>(), 0..8)
            .prop_map(|v| Tag::ByteArray(ByteArray::from_values(v).unwrap())),
        prop::collection::vec(any::<i32>(), 0..8)
            .prop_map(|v| Tag::IntArray(IntArray::from_values(v).unwrap())),
        prop::collection::vec(any::<i64>(), 0..8)
            .prop_map(|v| Tag::LongArray(LongArray::from_values(v).unwrap())),
    ]
}

fn compound(entries: Vec<(String, Tag)>) -> Compound {
    let mut map = Compound::new();
    for (key, tag) in entries {
        map.insert_tag(key, tag).unwrap();
    }
    map
}

/// Any tag tree up to a few levels deep.
fn arb_tag() -> impl Strategy<Value = Tag> {
    let leaf = prop_oneof![arb_scalar(), arb_scalar_list(), arb_array()];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec((arb_text(), inner.clone()), 0..6)
                .prop_map(|entries| Tag::Compound(compound(entries))),
            prop::collection::vec(prop::collection::vec((arb_text(), inner), 0..4), 0..4)
                .prop_map(|maps| {
                    let tags = maps
                        .into_iter()
                        .map(|entries| Tag::Compound(compound(entries)))
                        .collect();
                    Tag::List(List::from_tags(tags).unwrap())
                }),
        ]
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Core roundtrip property: parse(to_string(tag)) == tag.
    #[test]
    fn roundtrip_preserves_tags(tag in arb_tag()) {
        let text = tag.to_string();
        let parsed = parse(&text);
        prop_assert!(parsed.is_ok(), "failed to parse {:?}: {:?}", text, parsed);
        let parsed = parsed.unwrap();
        prop_assert_eq!(&parsed, &tag, "text: {}", text);
        prop_assert_eq!(parsed.to_string(), text);
    }

    /// Component data with bareword keys roundtrips through its own parser.
    #[test]
    fn roundtrip_component_data(
        entries in prop::collection::vec(("[a-z_][a-z0-9_.-]{0,8}", arb_scalar()), 1..6)
    ) {
        let mut data = snbt_core::ComponentData::new();
        for (key, tag) in entries {
            data.insert_tag(key, tag).unwrap();
        }
        let text = data.to_string();
        let parsed = parse_component(&text).unwrap();
        prop_assert_eq!(parsed, data);
    }

    /// Integer text is promoted to the kind its suffix names.
    #[test]
    fn integer_strings_are_promoted(v in any::<i32>(), b in any::<i8>(), l in any::<i64>()) {
        prop_assert_eq!(to_tag(v.to_string().into()).unwrap(), Tag::Int(Int::from(v)));
        prop_assert_eq!(to_tag(format!("{b}b").into()).unwrap(), Tag::Byte(Byte::from(b)));
        prop_assert_eq!(to_tag(format!("{l}L").into()).unwrap(), Tag::Long(Long::from(l)));
    }

    /// Promotion never turns a string into a different string.
    #[test]
    fn unpromoted_strings_are_unchanged(s in arb_text()) {
        if let Ok(Tag::String(out)) = to_tag(HostValue::from(s.as_str())) {
            prop_assert_eq!(out, s);
        }
    }

    /// Parsing arbitrary text returns instead of panicking.
    #[test]
    fn parse_never_panics(text in "\\PC{0,40}") {
        let _ = parse(&text);
        let _ = parse_component(&text);
    }

    /// Parsing near-SNBT text returns instead of panicking.
    #[test]
    fn parse_never_panics_on_structured_noise(text in "[\\[\\]{}:,;=BIL0-9a-z'\" .+-]{0,40}") {
        let _ = parse(&text);
        let _ = parse_component(&text);
    }
}
