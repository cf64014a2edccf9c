//! String-keyed maps in both dialects.
//!
//! [`Compound`] (`{key:value}`) and [`ComponentData`] (`[key=value]`) are the
//! same ordered map, [`TagMap`], specialized by a [`MapDialect`] marker.
//! Entries keep insertion order; overwriting a key keeps its position.
//! Equality ignores order.

use std::fmt::{self, Display, Write};
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::convert::{to_tag, HostValue};
use crate::error::{Result, SnbtError};
use crate::list::List;
use crate::marker::{ComponentMarker, CompoundMarker, MapDialect};
use crate::parser;
use crate::tag::{is_bareword, write_quoted, Kind, Tag};

/// Ordered map from string keys to tags.
#[derive(Debug, Clone)]
pub struct TagMap<D: MapDialect> {
    entries: IndexMap<String, Tag>,
    _dialect: PhantomData<D>,
}

/// Regular SNBT compound, `{key:value,...}`.
pub type Compound = TagMap<CompoundMarker>;

/// Data component map, `[key=value,...]`. Keys must be barewords.
pub type ComponentData = TagMap<ComponentMarker>;

impl<D: MapDialect> Default for TagMap<D> {
    fn default() -> Self {
        TagMap {
            entries: IndexMap::new(),
            _dialect: PhantomData,
        }
    }
}

impl<D: MapDialect> TagMap<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map by calling [`set`](Self::set) for each pair.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<HostValue>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            map.set(key, value)?;
        }
        Ok(map)
    }

    /// Convert `value` with the default rules and store it under `key`,
    /// returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<HostValue>) -> Result<Option<Tag>> {
        let key = key.into();
        D::check_key(&key)?;
        let tag = to_tag(value.into())?;
        self.insert_tag(key, tag)
    }

    /// Store a finished tag without further conversion. The key is still
    /// checked against the dialect.
    pub fn insert_tag(&mut self, key: impl Into<String>, tag: Tag) -> Result<Option<Tag>> {
        let key = key.into();
        D::check_key(&key)?;
        Ok(self.entries.insert(key, tag))
    }

    /// [`set`](Self::set) every pair. If any pair fails the map is left as it
    /// was.
    pub fn update<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<HostValue>,
    {
        let mut staged = self.clone();
        for (key, value) in entries {
            staged.set(key, value)?;
        }
        *self = staged;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Tag> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copy every entry of `other` into `self`. Existing keys take the value
    /// from `other`; new keys are appended in `other`'s order.
    pub fn merge(&mut self, other: &TagMap<D>) {
        for (key, tag) in &other.entries {
            self.entries.insert(key.clone(), tag.clone());
        }
    }

    /// The compound stored under `key`, replacing a scalar or list with a
    /// fresh empty compound. Component data under `key` is kept and
    /// reported as a type mismatch.
    pub fn get_or_create_compound(&mut self, key: &str) -> Result<&mut Compound> {
        let index = self.child_index(key, Kind::Compound, || Tag::Compound(Compound::new()))?;
        match &mut self.entries[index] {
            Tag::Compound(map) => Ok(map),
            other => Err(SnbtError::mismatch(Kind::Compound, other.kind())),
        }
    }

    /// The list stored under `key`, replacing a scalar or map with a fresh
    /// empty list. An array under `key` is kept and reported as a type
    /// mismatch.
    pub fn get_or_create_list(&mut self, key: &str) -> Result<&mut List> {
        let index = self.child_index(key, Kind::List, || Tag::List(List::new()))?;
        match &mut self.entries[index] {
            Tag::List(list) => Ok(list),
            other => Err(SnbtError::mismatch(Kind::List, other.kind())),
        }
    }

    fn child_index(&mut self, key: &str, kind: Kind, fresh: impl FnOnce() -> Tag) -> Result<usize> {
        let Some((index, _, existing)) = self.entries.get_full_mut(key) else {
            D::check_key(key)?;
            let (index, _) = self.entries.insert_full(key.to_string(), fresh());
            return Ok(index);
        };
        let found = existing.kind();
        if found == kind {
            return Ok(index);
        }
        if is_specialized(kind, found) {
            return Err(SnbtError::mismatch(kind, found));
        }
        *existing = fresh();
        Ok(index)
    }

    /// Re-key the same entries under another dialect.
    pub fn into_dialect<E: MapDialect>(self) -> Result<TagMap<E>> {
        for key in self.entries.keys() {
            E::check_key(key)?;
        }
        Ok(TagMap {
            entries: self.entries,
            _dialect: PhantomData,
        })
    }
}

impl Compound {
    /// Parse SNBT text that must denote a compound.
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse_compound(text)
    }

    /// The same entries as component data. Fails on keys that would need
    /// quoting.
    pub fn to_component_data(&self) -> Result<ComponentData> {
        self.clone().into_dialect()
    }
}

impl ComponentData {
    /// Parse text that must denote component data (`[]` is the empty map).
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse_component(text)
    }

    pub fn to_compound(&self) -> Compound {
        TagMap {
            entries: self.entries.clone(),
            _dialect: PhantomData,
        }
    }
}

impl<D: MapDialect> PartialEq for TagMap<D> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, tag)| other.get(key).is_some_and(|theirs| theirs == tag))
    }
}

/// Arrays are specialized lists and component data a specialized compound;
/// `get_or_create_*` must not discard them.
fn is_specialized(requested: Kind, found: Kind) -> bool {
    matches!(
        (requested, found),
        (Kind::List, Kind::ByteArray | Kind::IntArray | Kind::LongArray)
            | (Kind::Compound, Kind::Component)
    )
}

impl<'a, D: MapDialect> IntoIterator for &'a TagMap<D> {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<D: MapDialect> Display for TagMap<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(D::OPEN)?;
        for (i, (key, tag)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            if is_bareword(key) {
                f.write_str(key)?;
            } else {
                write_quoted(f, key)?;
            }
            f.write_char(D::SEPARATOR)?;
            Display::fmt(tag, f)?;
        }
        f.write_char(D::CLOSE)
    }
}
