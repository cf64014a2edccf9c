//! Marker types that specialize the generic containers.
//!
//! [`Array`](crate::list::Array) is parameterized by an [`ArrayMarker`] and
//! [`TagMap`](crate::compound::TagMap) by a [`MapDialect`]. Both traits are
//! sealed; the markers below are the only implementations.

use std::fmt::Debug;

use crate::compound::TagMap;
use crate::error::{Result, SnbtError};
use crate::list::Array;
use crate::tag::{is_bareword, Kind, Tag};

mod private {
    pub trait Sealed {}
}

use private::Sealed;

/// Element kind and text prefix of a fixed-dtype array.
pub trait ArrayMarker: Sealed + Copy + Debug + Default + 'static {
    /// Kind of the array itself.
    const KIND: Kind;
    /// Kind every element is stored as.
    const ELEMENT: Kind;
    /// Character written after `[` and before `;`.
    const PREFIX: char;

    fn wrap(array: Array<Self>) -> Tag;

    /// Whether `kind` may be stored without a cast.
    fn holds(kind: Kind) -> bool {
        kind == Self::ELEMENT
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteMarker;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntMarker;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongMarker;

impl Sealed for ByteMarker {}
impl Sealed for IntMarker {}
impl Sealed for LongMarker {}

impl ArrayMarker for ByteMarker {
    const KIND: Kind = Kind::ByteArray;
    const ELEMENT: Kind = Kind::Byte;
    const PREFIX: char = 'B';

    fn wrap(array: Array<Self>) -> Tag {
        Tag::ByteArray(array)
    }

    fn holds(kind: Kind) -> bool {
        matches!(kind, Kind::Byte | Kind::Bool)
    }
}

impl ArrayMarker for IntMarker {
    const KIND: Kind = Kind::IntArray;
    const ELEMENT: Kind = Kind::Int;
    const PREFIX: char = 'I';

    fn wrap(array: Array<Self>) -> Tag {
        Tag::IntArray(array)
    }
}

impl ArrayMarker for LongMarker {
    const KIND: Kind = Kind::LongArray;
    const ELEMENT: Kind = Kind::Long;
    const PREFIX: char = 'L';

    fn wrap(array: Array<Self>) -> Tag {
        Tag::LongArray(array)
    }
}

/// Textual dialect of a string-keyed map.
pub trait MapDialect: Sealed + Copy + Debug + Default + 'static {
    const KIND: Kind;
    const OPEN: char;
    const CLOSE: char;
    const SEPARATOR: char;

    /// Reject keys this dialect cannot write.
    fn check_key(key: &str) -> Result<()>;

    fn wrap(map: TagMap<Self>) -> Tag;
}

/// Regular SNBT compound: `{key:value}`, any key (quoted when needed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompoundMarker;

/// Data component: `[key=value]`, bareword keys only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentMarker;

impl Sealed for CompoundMarker {}
impl Sealed for ComponentMarker {}

impl MapDialect for CompoundMarker {
    const KIND: Kind = Kind::Compound;
    const OPEN: char = '{';
    const CLOSE: char = '}';
    const SEPARATOR: char = ':';

    fn check_key(_key: &str) -> Result<()> {
        Ok(())
    }

    fn wrap(map: TagMap<Self>) -> Tag {
        Tag::Compound(map)
    }
}

impl MapDialect for ComponentMarker {
    const KIND: Kind = Kind::Component;
    const OPEN: char = '[';
    const CLOSE: char = ']';
    const SEPARATOR: char = '=';

    fn check_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(SnbtError::Key {
                key: String::new(),
                reason: "component keys cannot be empty".into(),
            });
        }
        if !is_bareword(key) {
            return Err(SnbtError::Key {
                key: key.to_string(),
                reason: "component keys may only contain [A-Za-z0-9_-.+]".into(),
            });
        }
        Ok(())
    }

    fn wrap(map: TagMap<Self>) -> Tag {
        Tag::Component(map)
    }
}
