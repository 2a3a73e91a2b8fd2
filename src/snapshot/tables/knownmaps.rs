//! `KNOWN_MAPS` table
//!
//! Maps the location of a well-known map (`(space, offset)`) to the instance type of the
//! objects it describes and the map's root name. Many maps share one coarse instance
//! type: every oddball map carries `ODDBALL_TYPE` (131), and both filler maps carry
//! `FILLER_TYPE` (243). Those shared codes are kept exactly as generated.

use std::slice;

use rustc_hash::FxHashMap;

use super::{build_index, SpaceOffset, TableKind};
use crate::{snapshot::HeapSpace, Result};

/// One row of the `KNOWN_MAPS` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapEntry {
    /// Location of the map
    pub key: SpaceOffset,
    /// Instance type of objects using this map
    pub instance_type: u16,
    /// Root name of the map, e.g. `MetaMap`
    pub name: String,
}

/// Result of a map lookup, borrowing the name from its table.
///
/// Converts into the `(instance_type, name)` tuple used by the generated source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KnownMap<'a> {
    /// Instance type of objects using this map
    pub instance_type: u16,
    /// Root name of the map
    pub name: &'a str,
}

impl<'a> KnownMap<'a> {
    /// The `(instance_type, name)` pair.
    #[must_use]
    pub fn as_tuple(&self) -> (u16, &'a str) {
        (self.instance_type, self.name)
    }
}

impl<'a> From<KnownMap<'a>> for (u16, &'a str) {
    fn from(map: KnownMap<'a>) -> Self {
        map.as_tuple()
    }
}

impl<'a> From<&'a MapEntry> for KnownMap<'a> {
    fn from(entry: &'a MapEntry) -> Self {
        KnownMap {
            instance_type: entry.instance_type,
            name: &entry.name,
        }
    }
}

/// The `KNOWN_MAPS` table.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{HeapSpace, KnownMaps, SpaceOffset};
///
/// let maps = KnownMaps::from_entries([
///     (SpaceOffset::new(HeapSpace::ReadOnly, 0x02139), 247, "MetaMap"),
///     (SpaceOffset::new(HeapSpace::ReadOnly, 0x02161), 131, "NullMap"),
/// ])?;
/// let meta = maps.get(HeapSpace::ReadOnly, 0x02139).unwrap();
/// assert_eq!(meta.as_tuple(), (247, "MetaMap"));
/// assert!(maps.get(HeapSpace::Old, 0x02139).is_none());
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KnownMaps {
    entries: Vec<MapEntry>,
    index: FxHashMap<SpaceOffset, usize>,
}

impl KnownMaps {
    /// Build the table from `(key, instance_type, name)` triples in declaration order.
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateKey`] if a `(space, offset)` key appears twice.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (SpaceOffset, u16, S)>,
        S: Into<String>,
    {
        let entries: Vec<MapEntry> = entries
            .into_iter()
            .map(|(key, instance_type, name)| MapEntry {
                key,
                instance_type,
                name: name.into(),
            })
            .collect();
        let index = build_index(
            TableKind::KnownMaps,
            entries.iter().map(|entry| entry.key),
            SpaceOffset::to_string,
        )?;

        Ok(KnownMaps { entries, index })
    }

    /// Look up the map at `offset` within `space`.
    #[must_use]
    pub fn get(&self, space: HeapSpace, offset: u32) -> Option<KnownMap<'_>> {
        self.get_key(SpaceOffset::new(space, offset))
    }

    /// Look up the map at `key`.
    #[must_use]
    pub fn get_key(&self, key: SpaceOffset) -> Option<KnownMap<'_>> {
        self.index
            .get(&key)
            .map(|&position| KnownMap::from(&self.entries[position]))
    }

    /// Returns `true` if a map is known at `key`.
    #[must_use]
    pub fn contains(&self, key: SpaceOffset) -> bool {
        self.index.contains_key(&key)
    }

    /// Iterate all maps carrying `instance_type`, in declaration order.
    pub fn maps_of_type(&self, instance_type: u16) -> impl Iterator<Item = &MapEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.instance_type == instance_type)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, MapEntry> {
        self.entries.iter()
    }
}

impl PartialEq for KnownMaps {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|entry| other.get_key(entry.key) == Some(KnownMap::from(entry)))
    }
}

impl Eq for KnownMaps {}

impl<'a> IntoIterator for &'a KnownMaps {
    type Item = &'a MapEntry;
    type IntoIter = slice::Iter<'a, MapEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn fillers() -> KnownMaps {
        KnownMaps::from_entries([
            (SpaceOffset::new(HeapSpace::ReadOnly, 0x022c1), 244, "FreeSpaceMap"),
            (
                SpaceOffset::new(HeapSpace::ReadOnly, 0x022e9),
                243,
                "OnePointerFillerMap",
            ),
            (
                SpaceOffset::new(HeapSpace::ReadOnly, 0x02311),
                243,
                "TwoPointerFillerMap",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn lookup() {
        let maps = fillers();
        assert_eq!(maps.len(), 3);

        let map = maps.get(HeapSpace::ReadOnly, 0x022e9).unwrap();
        assert_eq!(map.instance_type, 243);
        assert_eq!(map.name, "OnePointerFillerMap");
        let tuple: (u16, &str) = map.into();
        assert_eq!(tuple, (243, "OnePointerFillerMap"));

        assert!(maps.get(HeapSpace::Old, 0x022e9).is_none());
        assert!(maps.get(HeapSpace::ReadOnly, 0x022ea).is_none());
        assert!(maps.contains(SpaceOffset::new(HeapSpace::ReadOnly, 0x02311)));
    }

    #[test]
    fn shared_instance_type_kept() {
        let maps = fillers();
        let names: Vec<&str> = maps
            .maps_of_type(243)
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["OnePointerFillerMap", "TwoPointerFillerMap"]);
        assert_eq!(maps.maps_of_type(1).count(), 0);
    }

    #[test]
    fn duplicate_key() {
        let key = SpaceOffset::new(HeapSpace::ReadOnly, 0x02139);
        let result = KnownMaps::from_entries([(key, 247, "MetaMap"), (key, 131, "NullMap")]);
        match result {
            Err(Error::DuplicateKey { table, key }) => {
                assert_eq!(table, TableKind::KnownMaps);
                assert_eq!(key, "read_only_space+0x02139");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn same_offset_in_other_space_is_distinct() {
        let maps = KnownMaps::from_entries([
            (SpaceOffset::new(HeapSpace::ReadOnly, 0x100), 1, "A"),
            (SpaceOffset::new(HeapSpace::Old, 0x100), 2, "B"),
        ])
        .unwrap();
        assert_eq!(maps.get(HeapSpace::Old, 0x100).unwrap().name, "B");
        assert_eq!(
            maps.get(HeapSpace::ReadOnly, 0x100).unwrap().as_tuple(),
            (1, "A")
        );
    }

    #[test]
    fn equality() {
        let a = fillers();
        let b = fillers();
        assert_eq!(a, b);

        let c = KnownMaps::from_entries([
            (SpaceOffset::new(HeapSpace::ReadOnly, 0x022c1), 244, "FreeSpaceMap"),
            (
                SpaceOffset::new(HeapSpace::ReadOnly, 0x022e9),
                243,
                "OnePointerFillerMap",
            ),
            (
                SpaceOffset::new(HeapSpace::ReadOnly, 0x02311),
                244,
                "TwoPointerFillerMap",
            ),
        ])
        .unwrap();
        assert_ne!(a, c);
    }
}
