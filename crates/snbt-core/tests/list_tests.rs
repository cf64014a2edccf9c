/// Sequence tests: dtype adoption and enforcement, arrays, typed list views
/// and canonical text.
use snbt_core::{
    Byte, ByteArray, Compound, HostValue, Int, IntArray, Kind, List, LongArray, Sequence,
    SnbtError, Tag,
};

// ============================================================================
// Dtype
// ============================================================================

#[test]
fn first_element_fixes_the_dtype() {
    let mut list = List::new();
    list.append(1).unwrap();
    assert_eq!(list.dtype(), Some(Kind::Int));
    list.append("2").unwrap();
    assert_eq!(list.get(1), Some(&Tag::Int(Int::from(2))));
}

#[test]
fn appending_a_string_to_an_int_list_fails_and_changes_nothing() {
    let mut list = List::from_values([1, 2, 3]).unwrap();
    let err = list.append("hello").unwrap_err();
    assert_eq!(
        err,
        SnbtError::TypeMismatch {
            expected: Kind::Int,
            found: Kind::String
        }
    );
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "[1,2,3]");
}

#[test]
fn out_of_range_cast_reports_range() {
    let mut list = List::new();
    list.append(Byte::from(1)).unwrap();
    assert!(matches!(list.append(1000), Err(SnbtError::Range { .. })));
    assert_eq!(list.len(), 1);
}

#[test]
fn booleans_share_byte_lists() {
    let mut list = List::new();
    list.append(true).unwrap();
    list.append(Byte::from(5)).unwrap();
    list.append(false).unwrap();
    assert_eq!(list.dtype(), Some(Kind::Byte));
    assert_eq!(list.to_string(), "[true,5b,false]");
}

#[test]
fn clear_resets_the_dtype() {
    let mut list = List::from_values(["a", "b"]).unwrap();
    list.clear();
    assert_eq!(list.dtype(), None);
    list.append(7).unwrap();
    assert_eq!(list.dtype(), Some(Kind::Int));
}

#[test]
fn extend_is_all_or_nothing() {
    let mut list = List::from_values([1]).unwrap();
    let values = vec![HostValue::from(2), HostValue::from(3), HostValue::from("x")];
    assert!(list.extend(values).is_err());
    assert_eq!(list.to_string(), "[1]");
}

#[test]
fn insert_set_remove_and_pop() {
    let mut list = List::from_values([1, 3]).unwrap();
    list.insert(1, 2).unwrap();
    assert_eq!(list.to_string(), "[1,2,3]");
    let old = list.set(0, 10).unwrap();
    assert_eq!(old, Tag::Int(Int::from(1)));
    assert_eq!(list.remove(1).unwrap(), Tag::Int(Int::from(2)));
    assert_eq!(list.pop(), Some(Tag::Int(Int::from(3))));
    assert_eq!(list.to_string(), "[10]");
}

#[test]
fn index_errors() {
    let mut list = List::from_values([1]).unwrap();
    assert_eq!(
        list.remove(5).unwrap_err(),
        SnbtError::IndexOutOfRange { index: 5, len: 1 }
    );
    assert!(matches!(list.set(1, 2), Err(SnbtError::IndexOutOfRange { .. })));
    assert!(matches!(list.insert(3, 2), Err(SnbtError::IndexOutOfRange { .. })));
    assert!(list.insert(1, 2).is_ok());
}

#[test]
fn nested_host_values_become_lists_and_compounds() {
    let list = List::from_values([
        HostValue::map([("a", 1)]),
        HostValue::map([("b", "x")]),
    ])
    .unwrap();
    assert_eq!(list.dtype(), Some(Kind::Compound));
    assert_eq!(list.to_string(), r#"[{a:1},{b:"x"}]"#);
}

#[test]
fn strings_are_always_quoted() {
    let list = List::from_values(["plain", "with space", "quote\"d"]).unwrap();
    assert_eq!(list.to_string(), r#"["plain","with space","quote\"d"]"#);
}

#[test]
fn equality_is_kind_aware() {
    let ints = List::from_values([1, 2]).unwrap();
    let shorts = List::from_tags(vec![
        Tag::Short(1i16.into()),
        Tag::Short(2i16.into()),
    ])
    .unwrap();
    assert_ne!(ints, shorts);
    assert_eq!(ints, List::from_values(["1", "2"]).unwrap());
    assert_ne!(ints, List::from_values([2, 1]).unwrap());
}

#[test]
fn from_tags_rejects_mixed_kinds() {
    let err = List::from_tags(vec![Tag::Int(Int::from(1)), Tag::from("a")]).unwrap_err();
    assert!(matches!(err, SnbtError::TypeMismatch { .. }));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn byte_array_accepts_booleans_and_small_integers() {
    let mut array = ByteArray::new();
    array.append(true).unwrap();
    array.append(9).unwrap();
    array.append("5b").unwrap();
    assert_eq!(array.to_string(), "[B;true,9b,5b]");
    assert!(matches!(array.append(300), Err(SnbtError::Range { .. })));
    assert!(matches!(
        array.append(Compound::new()),
        Err(SnbtError::TypeMismatch { .. })
    ));
    assert_eq!(array.len(), 3);
}

#[test]
fn int_and_long_arrays() {
    let ints = IntArray::from_values([1, -2]).unwrap();
    assert_eq!(ints.to_string(), "[I;1,-2]");
    let longs = LongArray::from_values([1, 2]).unwrap();
    assert_eq!(longs.to_string(), "[L;1l,2l]");
    assert_eq!(longs.to_i64_vec(), vec![1, 2]);
    assert_eq!(IntArray::new().to_string(), "[I;]");
}

#[test]
fn int_array_rejects_floats() {
    let mut ints = IntArray::new();
    assert!(matches!(ints.append(1.5), Err(SnbtError::TypeMismatch { .. })));
    assert!(ints.is_empty());
}

#[test]
fn array_dtype_survives_clear() {
    let mut array = LongArray::from_values([1]).unwrap();
    array.clear();
    assert_eq!(array.dtype(), Some(Kind::Long));
}

// ============================================================================
// Typed views
// ============================================================================

#[test]
fn typed_view_casts_before_the_dtype_check() {
    let mut list = List::new();
    list.short().append(5).unwrap();
    list.short().append("6s").unwrap();
    assert_eq!(list.to_string(), "[5s,6s]");
    assert!(matches!(
        list.int().append(7),
        Err(SnbtError::TypeMismatch { .. })
    ));
}

#[test]
fn typed_view_extend_is_all_or_nothing() {
    let mut list = List::new();
    let err = list
        .byte()
        .extend(vec![HostValue::from(1), HostValue::from(1000)])
        .unwrap_err();
    assert!(matches!(err, SnbtError::Range { .. }));
    assert!(list.is_empty());
}

#[test]
fn string_view_stores_text() {
    let mut list = List::new();
    let mut view = list.string();
    view.append(1).unwrap();
    view.append(true).unwrap();
    view.append("x").unwrap();
    assert_eq!(view.len(), 3);
    assert_eq!(list.to_string(), r#"["1","true","x"]"#);
}

#[test]
fn typed_views_on_arrays() {
    let mut bytes = ByteArray::new();
    bytes.byte().append("7").unwrap();
    bytes.bool().append("true").unwrap();
    bytes.byte().extend([1, 2]).unwrap();
    assert_eq!(bytes.to_string(), "[B;7b,true,1b,2b]");
    assert!(matches!(
        bytes.int().append(1),
        Err(SnbtError::TypeMismatch {
            expected: Kind::Byte,
            found: Kind::Int
        })
    ));
    assert!(matches!(bytes.byte().append(300), Err(SnbtError::Range { .. })));
    assert_eq!(bytes.len(), 4);

    let mut longs = LongArray::new();
    longs.long().append("12").unwrap();
    longs.long().set(0, 5).unwrap();
    assert_eq!(longs.to_string(), "[L;5l]");
}
