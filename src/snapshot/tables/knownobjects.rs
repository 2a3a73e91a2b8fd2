//! `KNOWN_OBJECTS` table
//!
//! Maps the location of a well-known heap object (roots such as `UndefinedValue`,
//! protector cells, shared function infos) to its root name. The key space is separate
//! from [`super::KnownMaps`]: the same `(space, offset)` may name a map in one table and
//! something unrelated, or nothing, in this one.

use std::slice;

use rustc_hash::FxHashMap;

use super::{build_index, SpaceOffset, TableKind};
use crate::{snapshot::HeapSpace, Result};

/// One row of the `KNOWN_OBJECTS` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Location of the object
    pub key: SpaceOffset,
    /// Root name of the object, e.g. `UndefinedValue`
    pub name: String,
}

/// The `KNOWN_OBJECTS` table.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{HeapSpace, KnownObjects, SpaceOffset};
///
/// let objects = KnownObjects::from_entries([
///     (SpaceOffset::new(HeapSpace::Old, 0x0439d), "ExternalMap"),
/// ])?;
/// assert_eq!(objects.get(HeapSpace::Old, 0x0439d), Some("ExternalMap"));
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KnownObjects {
    entries: Vec<ObjectEntry>,
    index: FxHashMap<SpaceOffset, usize>,
}

impl KnownObjects {
    /// Build the table from `(key, name)` pairs in declaration order.
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateKey`] if a `(space, offset)` key appears twice.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (SpaceOffset, S)>,
        S: Into<String>,
    {
        let entries: Vec<ObjectEntry> = entries
            .into_iter()
            .map(|(key, name)| ObjectEntry {
                key,
                name: name.into(),
            })
            .collect();
        let index = build_index(
            TableKind::KnownObjects,
            entries.iter().map(|entry| entry.key),
            SpaceOffset::to_string,
        )?;

        Ok(KnownObjects { entries, index })
    }

    /// Look up the object at `offset` within `space`.
    #[must_use]
    pub fn get(&self, space: HeapSpace, offset: u32) -> Option<&str> {
        self.get_key(SpaceOffset::new(space, offset))
    }

    /// Look up the object at `key`.
    #[must_use]
    pub fn get_key(&self, key: SpaceOffset) -> Option<&str> {
        self.index
            .get(&key)
            .map(|&position| self.entries[position].name.as_str())
    }

    /// Returns `true` if an object is known at `key`.
    #[must_use]
    pub fn contains(&self, key: SpaceOffset) -> bool {
        self.index.contains_key(&key)
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
    pub fn iter(&self) -> slice::Iter<'_, ObjectEntry> {
        self.entries.iter()
    }
}

impl PartialEq for KnownObjects {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|entry| other.get_key(entry.key) == Some(entry.name.as_str()))
    }
}

impl Eq for KnownObjects {}

impl<'a> IntoIterator for &'a KnownObjects {
    type Item = &'a ObjectEntry;
    type IntoIter = slice::Iter<'a, ObjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn lookup() {
        let objects = KnownObjects::from_entries([
            (SpaceOffset::new(HeapSpace::ReadOnly, 0x023d9), "UndefinedValue"),
            (SpaceOffset::new(HeapSpace::ReadOnly, 0x02521), "empty_string"),
            (SpaceOffset::new(HeapSpace::Old, 0x04235), "ArgumentsIteratorAccessor"),
        ])
        .unwrap();

        assert_eq!(objects.len(), 3);
        assert_eq!(
            objects.get(HeapSpace::ReadOnly, 0x02521),
            Some("empty_string")
        );
        assert_eq!(objects.get(HeapSpace::Old, 0x023d9), None);
        assert_eq!(objects.get(HeapSpace::ReadOnly, 0x0), None);

        let names: Vec<&str> = objects.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(
            names,
            ["UndefinedValue", "empty_string", "ArgumentsIteratorAccessor"]
        );
    }

    #[test]
    fn duplicate_key() {
        let key = SpaceOffset::new(HeapSpace::Old, 0x04235);
        match KnownObjects::from_entries([(key, "A"), (key, "B")]) {
            Err(Error::DuplicateKey { table, key }) => {
                assert_eq!(table, TableKind::KnownObjects);
                assert_eq!(key, "old_space+0x04235");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn equality() {
        let key = SpaceOffset::new(HeapSpace::Old, 0x04235);
        let a = KnownObjects::from_entries([(key, "A")]).unwrap();
        let b = KnownObjects::from_entries([(key, "A".to_string())]).unwrap();
        let c = KnownObjects::from_entries([(key, "B")]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
