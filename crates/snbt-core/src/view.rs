//! Typed write projections over containers.
//!
//! A view borrows one container mutably and binds one [`Kind`]. Every write
//! goes through [`cast`] to that kind and is then stored with the
//! container's no-conversion path, so a list's dtype is still enforced.
//! Reads and removals go straight to the container.
//!
//! ```rust
//! use snbt_core::Compound;
//!
//! let mut nbt = Compound::new();
//! nbt.byte().set("Count", 3).unwrap();
//! nbt.string().set("id", 12).unwrap();
//! assert_eq!(nbt.to_string(), r#"{Count:3b,id:"12"}"#);
//! ```

use crate::compound::TagMap;
use crate::convert::{cast, HostValue};
use crate::error::Result;
use crate::list::{Array, List, Sequence};
use crate::marker::{ArrayMarker, MapDialect};
use crate::tag::{Kind, Tag};

/// View over a [`Sequence`] that casts writes to one kind.
#[derive(Debug)]
pub struct TypedListView<'a, S: Sequence> {
    seq: &'a mut S,
    kind: Kind,
}

impl<'a, S: Sequence> TypedListView<'a, S> {
    pub fn new(seq: &'a mut S, kind: Kind) -> Self {
        TypedListView { seq, kind }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    fn cast(&self, value: impl Into<HostValue>) -> Result<Tag> {
        let tag = cast(self.kind, value.into())?;
        self.seq.check_no_cast(&tag)?;
        Ok(tag)
    }

    pub fn append(&mut self, value: impl Into<HostValue>) -> Result<()> {
        let tag = self.cast(value)?;
        self.seq.push_tag(tag)
    }

    pub fn insert(&mut self, index: usize, value: impl Into<HostValue>) -> Result<()> {
        let tag = self.cast(value)?;
        self.seq.insert_tag(index, tag)
    }

    /// Cast every value first; nothing is stored unless all of them succeed.
    pub fn extend<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<HostValue>,
    {
        let tags = values
            .into_iter()
            .map(|value| cast(self.kind, value.into()))
            .collect::<Result<Vec<_>>>()?;
        if let Some(first) = tags.first() {
            self.seq.check_no_cast(first)?;
        }
        for tag in tags {
            self.seq.push_tag(tag)?;
        }
        Ok(())
    }

    pub fn set(&mut self, index: usize, value: impl Into<HostValue>) -> Result<Tag> {
        let tag = cast(self.kind, value.into())?;
        self.seq.set_tag(index, tag)
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.seq.get(index)
    }

    pub fn remove(&mut self, index: usize) -> Result<Tag> {
        self.seq.remove(index)
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// View over a [`TagMap`] that casts writes to one kind.
#[derive(Debug)]
pub struct TypedMapView<'a, D: MapDialect> {
    map: &'a mut TagMap<D>,
    kind: Kind,
}

impl<'a, D: MapDialect> TypedMapView<'a, D> {
    pub fn new(map: &'a mut TagMap<D>, kind: Kind) -> Self {
        TypedMapView { map, kind }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Cast `value` to the bound kind and store it, returning the previous
    /// value. The key is checked before the value is converted.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<HostValue>) -> Result<Option<Tag>> {
        let key = key.into();
        D::check_key(&key)?;
        let tag = cast(self.kind, value.into())?;
        self.map.insert_tag(key, tag)
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.map.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

macro_rules! typed_accessors {
    ($view:ident, $target:ty) => {
        /// View whose writes are booleans.
        pub fn bool(&mut self) -> $view<'_, $target> {
            self.view(Kind::Bool)
        }

        pub fn byte(&mut self) -> $view<'_, $target> {
            self.view(Kind::Byte)
        }

        pub fn short(&mut self) -> $view<'_, $target> {
            self.view(Kind::Short)
        }

        pub fn int(&mut self) -> $view<'_, $target> {
            self.view(Kind::Int)
        }

        pub fn long(&mut self) -> $view<'_, $target> {
            self.view(Kind::Long)
        }

        pub fn float(&mut self) -> $view<'_, $target> {
            self.view(Kind::Float)
        }

        pub fn double(&mut self) -> $view<'_, $target> {
            self.view(Kind::Double)
        }

        /// View whose writes are strings; non-strings are stored as their
        /// SNBT text.
        pub fn string(&mut self) -> $view<'_, $target> {
            self.view(Kind::String)
        }

        pub fn list(&mut self) -> $view<'_, $target> {
            self.view(Kind::List)
        }

        pub fn compound(&mut self) -> $view<'_, $target> {
            self.view(Kind::Compound)
        }

        pub fn byte_array(&mut self) -> $view<'_, $target> {
            self.view(Kind::ByteArray)
        }

        pub fn int_array(&mut self) -> $view<'_, $target> {
            self.view(Kind::IntArray)
        }

        pub fn long_array(&mut self) -> $view<'_, $target> {
            self.view(Kind::LongArray)
        }
    };
}

impl<D: MapDialect> TagMap<D> {
    /// Typed view bound to `kind`.
    pub fn view(&mut self, kind: Kind) -> TypedMapView<'_, D> {
        TypedMapView::new(self, kind)
    }

    typed_accessors!(TypedMapView, D);
}

impl List {
    /// Typed view bound to `kind`.
    pub fn view(&mut self, kind: Kind) -> TypedListView<'_, List> {
        TypedListView::new(self, kind)
    }

    typed_accessors!(TypedListView, List);
}

impl<M: ArrayMarker> Array<M> {
    /// Typed view bound to `kind`. Writes are still checked against the
    /// element kind of the array.
    pub fn view(&mut self, kind: Kind) -> TypedListView<'_, Array<M>> {
        TypedListView::new(self, kind)
    }

    typed_accessors!(TypedListView, Array<M>);
}
