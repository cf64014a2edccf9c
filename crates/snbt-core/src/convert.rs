//! Conversion from host values to tags.
//!
//! Two rule sets live here:
//!
//! - [`to_tag`], the default mapping used when nothing constrains the result
//!   (compound values, the first element of a list). Integers become `Int`
//!   or `Long`, floats become `Double`, strings that spell a numeric literal
//!   (or `true`/`false`) are promoted to that tag.
//! - [`cast`], the per-kind conversion used by typed views and by sequences
//!   whose dtype is already fixed.

use std::collections::BTreeMap;

use tracing::trace;

use crate::compound::{ComponentData, Compound, TagMap};
use crate::error::{Result, SnbtError};
use crate::list::{ByteArray, IntArray, List, LongArray};
use crate::marker::{ComponentMarker, CompoundMarker, MapDialect};
use crate::number::{Byte, Double, Float, Int, Long, Short};
use crate::parser;
use crate::tag::{Kind, Tag};

/// A value on the host side of the conversion boundary.
///
/// Tags can be wrapped directly with [`HostValue::Tag`]; they pass through
/// [`to_tag`] unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Bool(bool),
    Integer(i128),
    Float(f64),
    String(String),
    /// Key/value pairs in insertion order.
    Map(Vec<(String, HostValue)>),
    Sequence(Vec<HostValue>),
    Tag(Tag),
}

impl HostValue {
    /// Build a [`HostValue::Map`] from any iterator of pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<HostValue>,
    {
        HostValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The kind this value would have under the default conversion, used in
    /// error reports.
    pub fn kind(&self) -> Kind {
        match self {
            HostValue::Bool(_) => Kind::Bool,
            HostValue::Integer(v) if i32::try_from(*v).is_ok() => Kind::Int,
            HostValue::Integer(_) => Kind::Long,
            HostValue::Float(_) => Kind::Double,
            HostValue::String(_) => Kind::String,
            HostValue::Map(_) => Kind::Compound,
            HostValue::Sequence(_) => Kind::List,
            HostValue::Tag(tag) => tag.kind(),
        }
    }
}

/// Default conversion of a host value.
pub fn to_tag(value: HostValue) -> Result<Tag> {
    match value {
        HostValue::Bool(b) => Ok(Tag::Bool(b)),
        HostValue::Integer(v) => match i32::try_from(v) {
            Ok(small) => Ok(Tag::Int(Int::from(small))),
            Err(_) => Long::new(v).map(Tag::Long),
        },
        HostValue::Float(v) => Double::new(v).map(Tag::Double),
        HostValue::String(s) => promote(s),
        HostValue::Map(entries) => Compound::from_entries(entries).map(Tag::Compound),
        HostValue::Sequence(items) => List::from_values(items).map(Tag::List),
        HostValue::Tag(tag) => Ok(tag),
    }
}

/// A string spelling a numeric literal or `true`/`false` becomes that tag.
/// A literal of the right shape but out of bounds is a range error, not a
/// string.
fn promote(s: String) -> Result<Tag> {
    match parser::classify_literal(&s) {
        Some(literal) => {
            let tag = literal?;
            trace!(text = %s, kind = %tag.kind(), "promoted string to tag");
            Ok(tag)
        }
        None => Ok(Tag::String(s)),
    }
}

/// Convert `value` to a tag of exactly `kind` (`Bool` yields a boolean).
///
/// Fails with [`SnbtError::TypeMismatch`] when the value's shape cannot
/// represent the kind at all, [`SnbtError::Range`] when it can but is out of
/// bounds, and [`SnbtError::MalformedLiteral`] for unparseable strings.
pub fn cast(kind: Kind, value: HostValue) -> Result<Tag> {
    match kind {
        Kind::Bool => cast_bool(value).map(Tag::Bool),
        Kind::Byte | Kind::Short | Kind::Int | Kind::Long => cast_integer(kind, value),
        Kind::Float | Kind::Double => cast_float(kind, value),
        Kind::String => cast_string(value).map(Tag::String),
        Kind::List => cast_list(value).map(Tag::List),
        Kind::ByteArray => ByteArray::from_values(elements(kind, value)?).map(Tag::ByteArray),
        Kind::IntArray => IntArray::from_values(elements(kind, value)?).map(Tag::IntArray),
        Kind::LongArray => LongArray::from_values(elements(kind, value)?).map(Tag::LongArray),
        Kind::Compound => cast_map::<CompoundMarker>(value).map(Tag::Compound),
        Kind::Component => cast_map::<ComponentMarker>(value).map(Tag::Component),
    }
}

fn cast_bool(value: HostValue) -> Result<bool> {
    let found = value.kind();
    let number = match value {
        HostValue::Bool(b) => return Ok(b),
        HostValue::Integer(v) => v,
        HostValue::String(s) | HostValue::Tag(Tag::String(s)) => {
            return match s.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(SnbtError::malformed(Kind::Bool, &s, "expected true or false")),
            };
        }
        HostValue::Tag(tag) if tag.kind() == Kind::Bool || tag.kind().is_integer() => {
            i128::from(tag.as_i64().unwrap_or_default())
        }
        _ => return Err(SnbtError::mismatch(Kind::Bool, found)),
    };
    match number {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(SnbtError::range(Kind::Bool, other, 0, 1)),
    }
}

fn cast_integer(kind: Kind, value: HostValue) -> Result<Tag> {
    let found = value.kind();
    let raw = match value {
        HostValue::Bool(b) => i128::from(b),
        HostValue::Integer(v) => v,
        HostValue::String(s) | HostValue::Tag(Tag::String(s)) => {
            return integer_from_str(kind, &s);
        }
        HostValue::Tag(tag) if tag.kind() == Kind::Bool || tag.kind().is_integer() => {
            i128::from(tag.as_i64().unwrap_or_default())
        }
        _ => return Err(SnbtError::mismatch(kind, found)),
    };
    match kind {
        Kind::Byte => Byte::new(raw).map(Tag::Byte),
        Kind::Short => Short::new(raw).map(Tag::Short),
        Kind::Int => Int::new(raw).map(Tag::Int),
        _ => Long::new(raw).map(Tag::Long),
    }
}

fn integer_from_str(kind: Kind, s: &str) -> Result<Tag> {
    match kind {
        Kind::Byte => s.parse().map(Tag::Byte),
        Kind::Short => s.parse().map(Tag::Short),
        Kind::Int => s.parse().map(Tag::Int),
        _ => s.parse().map(Tag::Long),
    }
}

fn cast_float(kind: Kind, value: HostValue) -> Result<Tag> {
    let found = value.kind();
    let raw = match value {
        HostValue::Bool(b) => f64::from(u8::from(b)),
        HostValue::Integer(v) => v as f64,
        HostValue::Float(v) => v,
        HostValue::String(s) | HostValue::Tag(Tag::String(s)) => {
            return match kind {
                Kind::Float => s.parse().map(Tag::Float),
                _ => s.parse().map(Tag::Double),
            };
        }
        HostValue::Tag(tag) => match tag.as_f64() {
            Some(v) => v,
            None => return Err(SnbtError::mismatch(kind, found)),
        },
        _ => return Err(SnbtError::mismatch(kind, found)),
    };
    match kind {
        Kind::Float => Float::new(raw).map(Tag::Float),
        _ => Double::new(raw).map(Tag::Double),
    }
}

fn cast_string(value: HostValue) -> Result<String> {
    match value {
        HostValue::String(s) | HostValue::Tag(Tag::String(s)) => Ok(s),
        other => Ok(to_tag(other)?.to_string()),
    }
}

fn cast_list(value: HostValue) -> Result<List> {
    match value {
        HostValue::Sequence(items) => List::from_values(items),
        HostValue::Tag(Tag::List(list)) => Ok(list),
        HostValue::Tag(Tag::ByteArray(array)) => List::from_tags(array.into_vec()),
        HostValue::Tag(Tag::IntArray(array)) => List::from_tags(array.into_vec()),
        HostValue::Tag(Tag::LongArray(array)) => List::from_tags(array.into_vec()),
        other => Err(SnbtError::mismatch(Kind::List, other.kind())),
    }
}

/// Elements of anything sequence-shaped, for element-wise array casts.
fn elements(kind: Kind, value: HostValue) -> Result<Vec<HostValue>> {
    let tags = match value {
        HostValue::Sequence(items) => return Ok(items),
        HostValue::Tag(Tag::List(list)) => list.into_vec(),
        HostValue::Tag(Tag::ByteArray(array)) => array.into_vec(),
        HostValue::Tag(Tag::IntArray(array)) => array.into_vec(),
        HostValue::Tag(Tag::LongArray(array)) => array.into_vec(),
        other => return Err(SnbtError::mismatch(kind, other.kind())),
    };
    Ok(tags.into_iter().map(HostValue::Tag).collect())
}

fn cast_map<D: MapDialect>(value: HostValue) -> Result<TagMap<D>> {
    match value {
        HostValue::Map(entries) => TagMap::from_entries(entries),
        HostValue::Tag(Tag::Compound(map)) => map.into_dialect(),
        HostValue::Tag(Tag::Component(map)) => map.into_dialect(),
        other => Err(SnbtError::mismatch(D::KIND, other.kind())),
    }
}

macro_rules! host_from {
    ($variant:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for HostValue {
                fn from(value: $ty) -> Self {
                    HostValue::$variant(value.into())
                }
            }
        )+
    };
}

host_from!(Integer: i8, i16, i32, i64, i128, u8, u16, u32, u64);
host_from!(Float: f32, f64);
host_from!(String: String, &str, &String);
host_from!(
    Tag: Tag,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    List,
    ByteArray,
    IntArray,
    LongArray,
    Compound,
    ComponentData,
);

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<usize> for HostValue {
    fn from(value: usize) -> Self {
        HostValue::Integer(value as i128)
    }
}

impl From<isize> for HostValue {
    fn from(value: isize) -> Self {
        HostValue::Integer(value as i128)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(values: Vec<T>) -> Self {
        HostValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<HostValue>, const N: usize> From<[T; N]> for HostValue {
    fn from(values: [T; N]) -> Self {
        HostValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<HostValue>> From<BTreeMap<K, V>> for HostValue {
    fn from(map: BTreeMap<K, V>) -> Self {
        HostValue::map(map)
    }
}
