//! Block and item identifiers with attached component data.
//!
//! A [`Block`] is the text `namespace:name[key=value,...]` as written in
//! commands. The `minecraft:` namespace is implied and stripped on
//! construction. Comparison, ordering and hashing use only the full id;
//! [`Block::equals`] also compares the parsed component data.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compound::ComponentData;
use crate::error::Result;
use crate::parser;

const DEFAULT_NAMESPACE: &str = "minecraft";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Block {
    raw: String,
}

impl Block {
    /// Wrap `text` without any validation.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let raw = match text.strip_prefix("minecraft:") {
            Some(rest) => rest.to_string(),
            None => text,
        };
        Block { raw }
    }

    fn split(&self) -> (&str, &str) {
        match self.raw.find('[') {
            Some(pos) => self.raw.split_at(pos),
            None => (&self.raw, ""),
        }
    }

    /// `namespace:name`, with the `minecraft` namespace filled in.
    pub fn id(&self) -> String {
        let block_type = self.block_type();
        if block_type.contains(':') {
            block_type.to_string()
        } else {
            format!("{DEFAULT_NAMESPACE}:{block_type}")
        }
    }

    /// The id without a `minecraft:` prefix; other namespaces are kept.
    pub fn block_type(&self) -> &str {
        self.split().0
    }

    /// The name part of the id, without any namespace.
    pub fn name(&self) -> &str {
        let block_type = self.block_type();
        match block_type.split_once(':') {
            Some((_, name)) => name,
            None => block_type,
        }
    }

    pub fn namespace(&self) -> &str {
        match self.block_type().split_once(':') {
            Some((namespace, _)) => namespace,
            None => DEFAULT_NAMESPACE,
        }
    }

    /// The bracketed component text, `[]` when there is none.
    pub fn data_str(&self) -> &str {
        match self.split().1 {
            "" => "[]",
            data => data,
        }
    }

    /// Whether there is non-empty component text. The text is not parsed.
    pub fn has_data(&self) -> bool {
        self.data_str().len() > 2
    }

    /// Parse the component text.
    pub fn data(&self) -> Result<ComponentData> {
        parser::parse_component(self.data_str())
    }

    /// This block's id with `data` as its components. Empty data removes
    /// the brackets.
    pub fn with_data(&self, data: &ComponentData) -> Block {
        if data.is_empty() {
            return self.without_data();
        }
        Block::new(format!("{}{data}", self.block_type()))
    }

    pub fn without_data(&self) -> Block {
        Block::new(self.block_type())
    }

    /// This block's components with `data` merged on top; keys in `data` win.
    pub fn with_merge_data(&self, data: &ComponentData) -> Result<Block> {
        let mut merged = self.data()?;
        merged.merge(data);
        Ok(self.with_data(&merged))
    }

    /// A block with the id of `id` and this block's component text.
    pub fn with_id(&self, id: impl AsRef<str>) -> Block {
        let target = Block::new(id.as_ref());
        if self.has_data() {
            Block::new(format!("{}{}", target.block_type(), self.data_str()))
        } else {
            target.without_data()
        }
    }

    /// Compare id and parsed component data. Unparseable data on either side
    /// compares unequal.
    pub fn equals(&self, other: impl Into<Block>) -> bool {
        let other = other.into();
        if self.id() != other.id() {
            return false;
        }
        match (self.data(), other.data()) {
            (Ok(mine), Ok(theirs)) => mine == theirs,
            _ => false,
        }
    }

    /// This block as an item whose `block_state` component carries the
    /// block's components as strings, e.g. `oak_stairs[half=top]` becomes
    /// `oak_stairs[block_state={half:"top"}]`.
    pub fn as_block_state_for_item(&self) -> Result<Block> {
        let mut item = ComponentData::new();
        let state = item.get_or_create_compound("block_state")?;
        for (key, value) in self.data()?.iter() {
            state.string().set(key, value.clone())?;
        }
        Ok(self.with_data(&item))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Block {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Block::new(s))
    }
}

impl From<&str> for Block {
    fn from(value: &str) -> Self {
        Block::new(value)
    }
}

impl From<String> for Block {
    fn from(value: String) -> Self {
        Block::new(value)
    }
}

impl From<&Block> for Block {
    fn from(value: &Block) -> Self {
        value.clone()
    }
}

impl From<Block> for String {
    fn from(value: Block) -> Self {
        value.raw
    }
}

impl AsRef<str> for Block {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Block {}

/// A string matches a block if it equals the block's id, its type or its
/// full text.
impl PartialEq<str> for Block {
    fn eq(&self, other: &str) -> bool {
        self.id() == other || self.block_type() == other || self.raw == other
    }
}

impl PartialEq<&str> for Block {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialOrd for Block {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Block {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }
}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
