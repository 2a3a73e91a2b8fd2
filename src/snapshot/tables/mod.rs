//! The five lookup tables of a snapshot.
//!
//! Each table keeps its entries in declaration order (the order of the generated source,
//! which the writer reproduces) next to an [`FxHashMap`] index for O(1) lookups. Tables
//! are built once from a complete list of entries and offer no mutation afterwards.
//!
//! # Components
//!
//! - [`InstanceTypes`] - `INSTANCE_TYPES`: instance-type code to type name
//! - [`KnownMaps`] - `KNOWN_MAPS`: `(space, offset)` to `(instance type, map name)`
//! - [`KnownObjects`] - `KNOWN_OBJECTS`: `(space, offset)` to object name
//! - [`HeapFirstPages`] - `HEAP_FIRST_PAGES`: low 32 bits of a first page to its space
//! - [`FrameMarkers`] - `FRAME_MARKERS`: ordered stack-frame marker names
//!
//! Keys that must be unique are checked while building; a collision is reported as
//! [`crate::Error::DuplicateKey`] and never resolved by overwriting.

use std::{fmt, hash::Hash};

use rustc_hash::FxHashMap;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{snapshot::HeapSpace, Error, Result};

mod framemarkers;
mod heappages;
mod instancetype;
mod knownmaps;
mod knownobjects;

pub use framemarkers::FrameMarkers;
pub use heappages::{HeapFirstPages, HeapPageEntry};
pub use instancetype::{InstanceTypeEntry, InstanceTypes};
pub use knownmaps::{KnownMap, KnownMaps, MapEntry};
pub use knownobjects::{KnownObjects, ObjectEntry};

/// Identifies one of the snapshot tables.
///
/// Displays as the assignment name used in persisted snapshots, and the variants are
/// declared in the order the tables appear in a generated file.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum TableKind {
    /// `INSTANCE_TYPES`
    #[strum(serialize = "INSTANCE_TYPES")]
    InstanceTypes,
    /// `KNOWN_MAPS`
    #[strum(serialize = "KNOWN_MAPS")]
    KnownMaps,
    /// `KNOWN_OBJECTS`
    #[strum(serialize = "KNOWN_OBJECTS")]
    KnownObjects,
    /// `HEAP_FIRST_PAGES`
    #[strum(serialize = "HEAP_FIRST_PAGES")]
    HeapFirstPages,
    /// `FRAME_MARKERS`
    #[strum(serialize = "FRAME_MARKERS")]
    FrameMarkers,
}

/// Composite key of the map and object tables: a heap space and a byte offset within it.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{HeapSpace, SpaceOffset};
///
/// let key = SpaceOffset::new(HeapSpace::ReadOnly, 0x02139);
/// assert_eq!(key.to_string(), "read_only_space+0x02139");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceOffset {
    /// The heap space the offset is relative to
    pub space: HeapSpace,
    /// Byte offset within the space
    pub offset: u32,
}

impl SpaceOffset {
    /// Create a new key
    #[must_use]
    pub fn new(space: HeapSpace, offset: u32) -> Self {
        SpaceOffset { space, offset }
    }
}

impl fmt::Display for SpaceOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+0x{:05x}", self.space, self.offset)
    }
}

impl From<(HeapSpace, u32)> for SpaceOffset {
    fn from((space, offset): (HeapSpace, u32)) -> Self {
        SpaceOffset { space, offset }
    }
}

/// Build the position index for a table, refusing duplicate keys.
///
/// `describe` renders a colliding key for the error message.
pub(crate) fn build_index<K, I, D>(
    table: TableKind,
    keys: I,
    describe: D,
) -> Result<FxHashMap<K, usize>>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
    D: Fn(&K) -> String,
{
    let keys = keys.into_iter();
    let mut index = FxHashMap::default();
    index.reserve(keys.size_hint().0);

    for (position, key) in keys.enumerate() {
        if index.contains_key(&key) {
            return Err(Error::DuplicateKey {
                table,
                key: describe(&key),
            });
        }
        index.insert(key, position);
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_kind_names() {
        let names: Vec<String> = TableKind::iter().map(|kind| kind.to_string()).collect();
        assert_eq!(
            names,
            [
                "INSTANCE_TYPES",
                "KNOWN_MAPS",
                "KNOWN_OBJECTS",
                "HEAP_FIRST_PAGES",
                "FRAME_MARKERS"
            ]
        );
        assert_eq!(
            "KNOWN_OBJECTS".parse::<TableKind>().unwrap(),
            TableKind::KnownObjects
        );
        assert!("KNOWN_THINGS".parse::<TableKind>().is_err());
    }

    #[test]
    fn space_offset_display() {
        let key = SpaceOffset::from((HeapSpace::Old, 0x0439d));
        assert_eq!(key.to_string(), "old_space+0x0439d");
        assert_eq!(key, SpaceOffset::new(HeapSpace::Old, 0x0439d));
        assert!(SpaceOffset::new(HeapSpace::ReadOnly, 0x9999) < key);
    }

    #[test]
    fn index_rejects_duplicates() {
        let index = build_index(TableKind::InstanceTypes, [1u16, 2, 3], |k| k.to_string()).unwrap();
        assert_eq!(index[&3], 2);

        match build_index(TableKind::InstanceTypes, [1u16, 2, 1], |k| k.to_string()) {
            Err(Error::DuplicateKey { table, key }) => {
                assert_eq!(table, TableKind::InstanceTypes);
                assert_eq!(key, "1");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
