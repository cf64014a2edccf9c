//! # snbt-core
//!
//! Typed values, conversion rules and a parser for Minecraft's textual NBT
//! format (**SNBT**) and its sibling **data component** syntax.
//!
//! Every value is a [`Tag`]. Numbers carry their width and literal suffix
//! (`3b`, `7s`, `12`, `9l`, `1.5f`, `2.0`), sequences enforce one element
//! kind, and maps come in two dialects: [`Compound`] (`{key:value}`) and
//! [`ComponentData`] (`[key=value]`). `Display` on any tag produces canonical
//! SNBT that [`parse`] reads back to an equal tree.
//!
//! ## Quick start
//!
//! ```rust
//! use snbt_core::{parse, parse_component, Compound, Tag};
//!
//! // Host values -> tags -> text
//! let mut nbt = Compound::new();
//! nbt.set("Health", 20).unwrap();
//! nbt.set("Name", "Steve").unwrap();
//! nbt.byte().set("OnGround", true).unwrap();
//! assert_eq!(nbt.to_string(), r#"{Health:20,Name:"Steve",OnGround:1b}"#);
//!
//! // Text -> tags
//! let parsed = parse(&nbt.to_string()).unwrap();
//! assert_eq!(parsed, Tag::Compound(nbt));
//!
//! // Component data is only accepted by its own entry point
//! assert_eq!(parse_component("[count=2]").unwrap().len(), 1);
//! assert!(parse("[count=2]").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`number`]: `Byte`, `Short`, `Int`, `Long`, `Float`, `Double`
//! - [`tag`]: the [`Tag`] sum type and its [`Kind`]
//! - [`list`]: [`List`] and the `[B;..]`/`[I;..]`/`[L;..]` arrays
//! - [`compound`]: [`Compound`] and [`ComponentData`]
//! - [`view`]: typed write views (`nbt.int().set(..)`)
//! - [`convert`]: host values and the conversion rules
//! - [`parser`]: text to tags
//! - [`block`]: `namespace:name[components]` identifiers
//! - [`json`]: `serde_json` interop
//! - [`error`]: [`SnbtError`]

pub mod block;
pub mod compound;
pub mod convert;
pub mod error;
pub mod json;
pub mod list;
pub mod marker;
pub mod number;
pub mod parser;
pub mod tag;
pub mod view;

pub use block::Block;
pub use compound::{ComponentData, Compound, TagMap};
pub use convert::{cast, to_tag, HostValue};
pub use error::{Result, SnbtError};
pub use list::{Array, ByteArray, IntArray, List, LongArray, Sequence};
pub use number::{Byte, Double, Float, Int, Long, Short};
pub use parser::{
    parse, parse_component, parse_compound, try_parse, try_parse_component, try_parse_number,
};
pub use tag::{quote, Kind, Tag};
pub use view::{TypedListView, TypedMapView};
