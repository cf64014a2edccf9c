//! The [`Tag`] sum type and the [`Kind`] of a tag.
//!
//! Every value in the data model is a `Tag`. Equality between tags follows
//! the container-slot rule: identical kinds compare by value, a `Bool`
//! compares numerically with a `Byte`, and all other kind pairs are unequal
//! even when the numbers agree (`Int(1) != Short(1)`).

use std::fmt::{self, Debug, Display, Write};

use crate::compound::{ComponentData, Compound};
use crate::list::{ByteArray, IntArray, List, LongArray};
use crate::number::{Byte, Double, Float, Int, Long, Short};

/// Runtime kind of a tag; also the "dtype" a container or view enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    List,
    ByteArray,
    IntArray,
    LongArray,
    Compound,
    Component,
}

impl Kind {
    /// The dtype a sequence adopts for this kind: booleans live in byte
    /// sequences.
    pub fn coalesced(self) -> Kind {
        match self {
            Kind::Bool => Kind::Byte,
            other => other,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Kind::Byte | Kind::Short | Kind::Int | Kind::Long)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Kind as Debug>::fmt(self, f)
    }
}

/// Any SNBT value.
#[derive(Debug, Clone)]
pub enum Tag {
    Bool(bool),
    Byte(Byte),
    Short(Short),
    Int(Int),
    Long(Long),
    Float(Float),
    Double(Double),
    String(String),
    List(List),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    Compound(Compound),
    Component(ComponentData),
}

impl Tag {
    pub fn kind(&self) -> Kind {
        match self {
            Tag::Bool(_) => Kind::Bool,
            Tag::Byte(_) => Kind::Byte,
            Tag::Short(_) => Kind::Short,
            Tag::Int(_) => Kind::Int,
            Tag::Long(_) => Kind::Long,
            Tag::Float(_) => Kind::Float,
            Tag::Double(_) => Kind::Double,
            Tag::String(_) => Kind::String,
            Tag::List(_) => Kind::List,
            Tag::ByteArray(_) => Kind::ByteArray,
            Tag::IntArray(_) => Kind::IntArray,
            Tag::LongArray(_) => Kind::LongArray,
            Tag::Compound(_) => Kind::Compound,
            Tag::Component(_) => Kind::Component,
        }
    }

    /// `Bool` values, and bytes holding 0 or 1.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Tag::Bool(b) => Some(*b),
            Tag::Byte(b) if b.get() == 0 || b.get() == 1 => Some(b.get() == 1),
            _ => None,
        }
    }

    /// Integer kinds (and booleans) widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tag::Bool(b) => Some(i64::from(*b)),
            Tag::Byte(v) => Some(i64::from(v.get())),
            Tag::Short(v) => Some(i64::from(v.get())),
            Tag::Int(v) => Some(i64::from(v.get())),
            Tag::Long(v) => Some(v.get()),
            _ => None,
        }
    }

    /// Any numeric kind widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tag::Float(v) => Some(v.get()),
            Tag::Double(v) => Some(v.get()),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&ComponentData> {
        match self {
            Tag::Component(map) => Some(map),
            _ => None,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tag::Bool(a), Tag::Bool(b)) => a == b,
            (Tag::Bool(a), Tag::Byte(b)) | (Tag::Byte(b), Tag::Bool(a)) => b == a,
            (Tag::Byte(a), Tag::Byte(b)) => a == b,
            (Tag::Short(a), Tag::Short(b)) => a == b,
            (Tag::Int(a), Tag::Int(b)) => a == b,
            (Tag::Long(a), Tag::Long(b)) => a == b,
            (Tag::Float(a), Tag::Float(b)) => a == b,
            (Tag::Double(a), Tag::Double(b)) => a == b,
            (Tag::String(a), Tag::String(b)) => a == b,
            (Tag::List(a), Tag::List(b)) => a == b,
            (Tag::ByteArray(a), Tag::ByteArray(b)) => a == b,
            (Tag::IntArray(a), Tag::IntArray(b)) => a == b,
            (Tag::LongArray(a), Tag::LongArray(b)) => a == b,
            (Tag::Compound(a), Tag::Compound(b)) => a == b,
            (Tag::Component(a), Tag::Component(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Bool(b) => write!(f, "{b}"),
            Tag::Byte(v) => Display::fmt(v, f),
            Tag::Short(v) => Display::fmt(v, f),
            Tag::Int(v) => Display::fmt(v, f),
            Tag::Long(v) => Display::fmt(v, f),
            Tag::Float(v) => Display::fmt(v, f),
            Tag::Double(v) => Display::fmt(v, f),
            Tag::String(s) => write_quoted(f, s),
            Tag::List(v) => Display::fmt(v, f),
            Tag::ByteArray(v) => Display::fmt(v, f),
            Tag::IntArray(v) => Display::fmt(v, f),
            Tag::LongArray(v) => Display::fmt(v, f),
            Tag::Compound(v) => Display::fmt(v, f),
            Tag::Component(v) => Display::fmt(v, f),
        }
    }
}

/// Characters allowed in an unquoted key or bareword: `[A-Za-z0-9_\-.+]`.
pub fn is_bareword_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// Whether `s` can be written without quotes.
pub fn is_bareword(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_bareword_char)
}

/// Write `s` double-quoted, escaping only `\` and `"`.
pub(crate) fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '\\' => out.write_str("\\\\")?,
            '"' => out.write_str("\\\"")?,
            _ => out.write_char(ch)?,
        }
    }
    out.write_char('"')
}

/// `s` as a double-quoted SNBT string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    // Writing into a String cannot fail.
    let _ = write_quoted(&mut out, s);
    out
}

macro_rules! tag_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(value: $ty) -> Self {
                    Tag::$variant(value)
                }
            }
        )+
    };
}

tag_from!(
    Bool(bool),
    Byte(Byte),
    Short(Short),
    Int(Int),
    Long(Long),
    Float(Float),
    Double(Double),
    String(String),
    List(List),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    Compound(Compound),
    Component(ComponentData),
);

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_string())
    }
}
