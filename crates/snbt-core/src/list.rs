//! Homogeneous sequences: the dynamically typed [`List`] and the three
//! fixed-dtype arrays.
//!
//! A `List` has no dtype while empty. The first element fixes it (a boolean
//! fixes `Byte`), every later element must be of that kind or castable to it,
//! and `clear()` forgets it again. Arrays always carry their element kind.
//!
//! All mutating operations either succeed completely or leave the sequence
//! untouched.

use std::fmt::{self, Display, Write};
use std::marker::PhantomData;

use tracing::trace;

use crate::convert::{cast, to_tag, HostValue};
use crate::error::{Result, SnbtError};
use crate::marker::{ArrayMarker, ByteMarker, IntMarker, LongMarker};
use crate::parser;
use crate::tag::{Kind, Tag};

mod private {
    pub trait Sealed {}

    /// Proof of crate-internal access for the raw storage accessor.
    pub struct Token;
}

use private::{Sealed, Token};

/// Operations shared by [`List`] and the arrays.
pub trait Sequence: Sealed {
    /// Kind every element must have (booleans count as `Byte`), `None` for an
    /// empty `List`.
    fn dtype(&self) -> Option<Kind>;

    fn as_slice(&self) -> &[Tag];

    #[doc(hidden)]
    fn items_mut(&mut self, token: Token) -> &mut Vec<Tag>;

    /// Whether `kind` may be stored as is, given the current dtype.
    fn accepts(&self, kind: Kind) -> bool {
        match self.dtype() {
            None => true,
            Some(dtype) => kind.coalesced() == dtype,
        }
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn get(&self, index: usize) -> Option<&Tag> {
        self.as_slice().get(index)
    }

    fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.as_slice().iter()
    }

    /// Fail unless `tag` can be stored without any conversion.
    fn check_no_cast(&self, tag: &Tag) -> Result<()> {
        if self.accepts(tag.kind()) {
            return Ok(());
        }
        let expected = self.dtype().unwrap_or(tag.kind());
        Err(SnbtError::mismatch(expected, tag.kind()))
    }

    /// Convert a host value the way insertion does: through the default
    /// conversion rules while the dtype is open, otherwise by keeping a tag
    /// of the right kind or casting to the dtype.
    fn convert(&self, value: HostValue) -> Result<Tag> {
        let Some(dtype) = self.dtype() else {
            return to_tag(value);
        };
        let value = match value {
            HostValue::Tag(tag) if self.accepts(tag.kind()) => return Ok(tag),
            other => other,
        };
        if dtype == Kind::Byte && matches!(value, HostValue::Bool(_)) {
            return to_tag(value);
        }
        let found = value.kind();
        match cast(dtype, value) {
            Ok(tag) => Ok(tag),
            Err(SnbtError::MalformedLiteral { .. }) => Err(SnbtError::mismatch(dtype, found)),
            Err(err) => Err(err),
        }
    }

    fn append(&mut self, value: impl Into<HostValue>) -> Result<()>
    where
        Self: Sized,
    {
        let tag = self.convert(value.into())?;
        self.push_tag(tag)
    }

    fn insert(&mut self, index: usize, value: impl Into<HostValue>) -> Result<()>
    where
        Self: Sized,
    {
        let tag = self.convert(value.into())?;
        self.insert_tag(index, tag)
    }

    /// Append every value, or none of them if any fails.
    fn extend<I, V>(&mut self, values: I) -> Result<()>
    where
        Self: Sized,
        I: IntoIterator<Item = V>,
        V: Into<HostValue>,
    {
        let before = self.len();
        for value in values {
            if let Err(err) = self.append(value) {
                self.items_mut(Token).truncate(before);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Replace the element at `index`.
    fn set(&mut self, index: usize, value: impl Into<HostValue>) -> Result<Tag>
    where
        Self: Sized,
    {
        let len = self.len();
        if index >= len {
            return Err(SnbtError::IndexOutOfRange { index, len });
        }
        let tag = self.convert(value.into())?;
        self.set_tag(index, tag)
    }

    /// Append a finished tag. Only the dtype check applies.
    fn push_tag(&mut self, tag: Tag) -> Result<()> {
        self.check_no_cast(&tag)?;
        if self.dtype().is_none() {
            trace!(dtype = %tag.kind().coalesced(), "sequence adopted dtype");
        }
        self.items_mut(Token).push(tag);
        Ok(())
    }

    fn insert_tag(&mut self, index: usize, tag: Tag) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(SnbtError::IndexOutOfRange { index, len });
        }
        self.check_no_cast(&tag)?;
        self.items_mut(Token).insert(index, tag);
        Ok(())
    }

    /// Replace the element at `index` with a finished tag and return the old
    /// one.
    fn set_tag(&mut self, index: usize, tag: Tag) -> Result<Tag> {
        let len = self.len();
        if index >= len {
            return Err(SnbtError::IndexOutOfRange { index, len });
        }
        self.check_no_cast(&tag)?;
        Ok(std::mem::replace(&mut self.items_mut(Token)[index], tag))
    }

    /// Remove and return the element at `index`, keeping the order of the
    /// rest.
    fn remove(&mut self, index: usize) -> Result<Tag> {
        let len = self.len();
        if index >= len {
            return Err(SnbtError::IndexOutOfRange { index, len });
        }
        Ok(self.items_mut(Token).remove(index))
    }

    fn pop(&mut self) -> Option<Tag> {
        self.items_mut(Token).pop()
    }

    fn clear(&mut self) {
        self.items_mut(Token).clear();
    }
}

/// Ordered sequence of tags sharing one kind.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<Tag>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list by appending each value in turn.
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<HostValue>,
    {
        let mut list = List::new();
        list.extend(values)?;
        Ok(list)
    }

    /// Build a list from finished tags without any conversion. Mixed kinds
    /// are a [`SnbtError::TypeMismatch`].
    pub fn from_tags(tags: Vec<Tag>) -> Result<Self> {
        let mut list = List::new();
        for tag in tags {
            list.push_tag(tag)?;
        }
        Ok(list)
    }

    /// Parse SNBT text that must denote a list.
    pub fn parse(text: &str) -> Result<Self> {
        match parser::parse(text)? {
            Tag::List(list) => Ok(list),
            other => Err(SnbtError::mismatch(Kind::List, other.kind())),
        }
    }

    pub fn into_vec(self) -> Vec<Tag> {
        self.items
    }
}

impl Sealed for List {}

impl Sequence for List {
    fn dtype(&self) -> Option<Kind> {
        self.items.first().map(|tag| tag.kind().coalesced())
    }

    fn as_slice(&self) -> &[Tag] {
        &self.items
    }

    fn items_mut(&mut self, _token: Token) -> &mut Vec<Tag> {
        &mut self.items
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        write_joined(f, &self.items)?;
        f.write_char(']')
    }
}

/// Fixed-dtype array written as `[B;..]`, `[I;..]` or `[L;..]`.
#[derive(Debug, Clone)]
pub struct Array<M: ArrayMarker> {
    items: Vec<Tag>,
    _marker: PhantomData<M>,
}

/// Bytes (and booleans), written `[B;1b,true]`.
pub type ByteArray = Array<ByteMarker>;
/// 32-bit integers, written `[I;1,2]`.
pub type IntArray = Array<IntMarker>;
/// 64-bit integers, written `[L;1l,2l]`.
pub type LongArray = Array<LongMarker>;

impl<M: ArrayMarker> Default for Array<M> {
    fn default() -> Self {
        Array {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<M: ArrayMarker> Array<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an array by casting each value to the element kind.
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<HostValue>,
    {
        let mut array = Self::new();
        array.extend(values)?;
        Ok(array)
    }

    /// Elements widened to `i64` (booleans as 0/1).
    pub fn to_i64_vec(&self) -> Vec<i64> {
        self.items.iter().filter_map(Tag::as_i64).collect()
    }

    pub fn into_vec(self) -> Vec<Tag> {
        self.items
    }
}

impl<M: ArrayMarker> Sealed for Array<M> {}

impl<M: ArrayMarker> Sequence for Array<M> {
    fn dtype(&self) -> Option<Kind> {
        Some(M::ELEMENT)
    }

    fn as_slice(&self) -> &[Tag] {
        &self.items
    }

    fn items_mut(&mut self, _token: Token) -> &mut Vec<Tag> {
        &mut self.items
    }

    fn accepts(&self, kind: Kind) -> bool {
        M::holds(kind)
    }
}

impl<M: ArrayMarker> PartialEq for Array<M> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, M: ArrayMarker> IntoIterator for &'a Array<M> {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<M: ArrayMarker> Display for Array<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{};", M::PREFIX)?;
        write_joined(f, &self.items)?;
        f.write_char(']')
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Tag]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        Display::fmt(item, f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dtype_follows_first_element() {
        let mut list = List::new();
        assert_eq!(list.dtype(), None);
        list.append(true).unwrap();
        assert_eq!(list.dtype(), Some(Kind::Byte));
        list.clear();
        assert_eq!(list.dtype(), None);
    }

    #[test]
    fn set_keeps_the_dtype_of_the_list() {
        let mut list = List::from_values([1]).unwrap();
        let err = list.set_tag(0, Tag::from("x")).unwrap_err();
        assert_eq!(err, SnbtError::mismatch(Kind::Int, Kind::String));
        assert_eq!(list.set(0, "7").unwrap(), Tag::from(crate::Int::from(1)));
        assert_eq!(list.get(0), Some(&Tag::from(crate::Int::from(7))));
    }

    #[test]
    fn failed_extend_truncates_back() {
        let mut list = List::from_values([1, 2]).unwrap();
        let err = list
            .extend(vec![HostValue::from(3), HostValue::from("nope")])
            .unwrap_err();
        assert!(matches!(err, SnbtError::TypeMismatch { .. }));
        assert_eq!(list.len(), 2);
    }
}
