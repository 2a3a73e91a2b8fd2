//! `HEAP_FIRST_PAGES` table
//!
//! Maps the lower 32 bits of the first page of a heap space to that space. A dump tool
//! uses it to tell which space an arbitrary page belongs to when the dump was taken
//! from the same build.

use std::slice;

use rustc_hash::FxHashMap;

use super::{build_index, TableKind};
use crate::{snapshot::HeapSpace, Result};

/// One row of the `HEAP_FIRST_PAGES` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeapPageEntry {
    /// Lower 32 bits of the first page address
    pub page: u32,
    /// Space starting at that page
    pub space: HeapSpace,
}

/// The `HEAP_FIRST_PAGES` table.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{HeapFirstPages, HeapSpace};
///
/// let pages = HeapFirstPages::from_entries([(0x000c0000, HeapSpace::Old)])?;
/// assert_eq!(pages.get(0x000c0000), Some(HeapSpace::Old));
/// assert_eq!(pages.get(0x00080000), None);
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeapFirstPages {
    entries: Vec<HeapPageEntry>,
    index: FxHashMap<u32, usize>,
}

impl HeapFirstPages {
    /// Build the table from `(page, space)` pairs in declaration order.
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateKey`] if a page appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, HeapSpace)>,
    {
        let entries: Vec<HeapPageEntry> = entries
            .into_iter()
            .map(|(page, space)| HeapPageEntry { page, space })
            .collect();
        let index = build_index(
            TableKind::HeapFirstPages,
            entries.iter().map(|entry| entry.page),
            |page| format!("0x{page:08x}"),
        )?;

        Ok(HeapFirstPages { entries, index })
    }

    /// Look up the space whose first page has the given lower 32 bits.
    #[must_use]
    pub fn get(&self, page: u32) -> Option<HeapSpace> {
        self.index
            .get(&page)
            .map(|&position| self.entries[position].space)
    }

    /// Returns `true` if `page` is a known first page.
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        self.index.contains_key(&page)
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
    pub fn iter(&self) -> slice::Iter<'_, HeapPageEntry> {
        self.entries.iter()
    }
}

impl PartialEq for HeapFirstPages {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|entry| other.get(entry.page) == Some(entry.space))
    }
}

impl Eq for HeapFirstPages {}

impl<'a> IntoIterator for &'a HeapFirstPages {
    type Item = &'a HeapPageEntry;
    type IntoIter = slice::Iter<'a, HeapPageEntry>;

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
        let pages = HeapFirstPages::from_entries([
            (0x000c_0000, HeapSpace::Old),
            (0x0000_0000, HeapSpace::ReadOnly),
        ])
        .unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages.get(0), Some(HeapSpace::ReadOnly));
        assert_eq!(pages.get(0x000c_0000), Some(HeapSpace::Old));
        assert_eq!(pages.get(0x000c_0001), None);
        assert!(!pages.contains(0x0004_0000));
    }

    #[test]
    fn same_space_on_two_pages_is_allowed() {
        let pages = HeapFirstPages::from_entries([
            (0x0004_0000, HeapSpace::Old),
            (0x0008_0000, HeapSpace::Old),
        ])
        .unwrap();
        assert_eq!(pages.get(0x0008_0000), Some(HeapSpace::Old));
    }

    #[test]
    fn duplicate_page() {
        let result = HeapFirstPages::from_entries([
            (0x000c_0000, HeapSpace::Old),
            (0x000c_0000, HeapSpace::Code),
        ]);
        match result {
            Err(Error::DuplicateKey { table, key }) => {
                assert_eq!(table, TableKind::HeapFirstPages);
                assert_eq!(key, "0x000c0000");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
