//! JSON interop.
//!
//! JSON documents convert to [`HostValue`]s, which then go through the usual
//! conversion rules, and tags serialize through `serde` with numbers as JSON
//! numbers and both map dialects as objects. Kind information is lost on the
//! way out: `1b` and `1` both serialize as `1`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::compound::TagMap;
use crate::convert::HostValue;
use crate::error::SnbtError;
use crate::marker::MapDialect;
use crate::tag::Tag;

impl TryFrom<Value> for HostValue {
    type Error = SnbtError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => return Err(SnbtError::Unsupported("JSON null".into())),
            Value::Bool(b) => HostValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    HostValue::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    HostValue::Integer(i128::from(u))
                } else {
                    match n.as_f64() {
                        Some(f) => HostValue::Float(f),
                        None => return Err(SnbtError::Unsupported(format!("JSON number {n}"))),
                    }
                }
            }
            Value::String(s) => HostValue::String(s),
            Value::Array(items) => HostValue::Sequence(
                items
                    .into_iter()
                    .map(HostValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => HostValue::Map(
                map.into_iter()
                    .map(|(k, v)| Ok((k, HostValue::try_from(v)?)))
                    .collect::<Result<_, SnbtError>>()?,
            ),
        })
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tag::Bool(b) => serializer.serialize_bool(*b),
            Tag::Byte(v) => serializer.serialize_i8(v.get()),
            Tag::Short(v) => serializer.serialize_i16(v.get()),
            Tag::Int(v) => serializer.serialize_i32(v.get()),
            Tag::Long(v) => serializer.serialize_i64(v.get()),
            Tag::Float(v) => serializer.serialize_f64(v.get()),
            Tag::Double(v) => serializer.serialize_f64(v.get()),
            Tag::String(s) => serializer.serialize_str(s),
            Tag::List(list) => serialize_items(list.into_iter(), serializer),
            Tag::ByteArray(array) => serialize_items(array.into_iter(), serializer),
            Tag::IntArray(array) => serialize_items(array.into_iter(), serializer),
            Tag::LongArray(array) => serialize_items(array.into_iter(), serializer),
            Tag::Compound(map) => map.serialize(serializer),
            Tag::Component(map) => map.serialize(serializer),
        }
    }
}

fn serialize_items<'a, S, I>(items: I, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    I: ExactSizeIterator<Item = &'a Tag>,
{
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<D: MapDialect> Serialize for TagMap<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Tag {
    /// Convert a JSON document with the default conversion rules.
    pub fn from_json(value: Value) -> crate::Result<Tag> {
        crate::convert::to_tag(HostValue::try_from(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_unsupported() {
        assert!(matches!(
            HostValue::try_from(json!({"a": null})),
            Err(SnbtError::Unsupported(_))
        ));
    }

    #[test]
    fn large_unsigned_numbers_stay_integers() {
        assert_eq!(
            HostValue::try_from(json!(u64::MAX)).unwrap(),
            HostValue::Integer(i128::from(u64::MAX))
        );
    }
}
