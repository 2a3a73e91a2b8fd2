//! `INSTANCE_TYPES` table
//!
//! Maps V8 instance-type codes to their enumerator names (`247` to `"MAP_TYPE"`). Codes
//! are the values of the runtime's `InstanceType` enum at generation time; they are not
//! contiguous and are never renumbered within a snapshot.

use std::slice;

use rustc_hash::FxHashMap;

use super::{build_index, TableKind};
use crate::Result;

/// One row of the `INSTANCE_TYPES` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceTypeEntry {
    /// The instance-type code
    pub code: u16,
    /// The enumerator name of this code, e.g. `MAP_TYPE`
    pub name: String,
}

/// The `INSTANCE_TYPES` table.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::InstanceTypes;
///
/// let table = InstanceTypes::from_entries([(128, "SYMBOL_TYPE"), (247, "MAP_TYPE")])?;
/// assert_eq!(table.get(247), Some("MAP_TYPE"));
/// assert_eq!(table.get(99), None);
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct InstanceTypes {
    entries: Vec<InstanceTypeEntry>,
    index: FxHashMap<u16, usize>,
}

impl InstanceTypes {
    /// Build the table from `(code, name)` pairs in declaration order.
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateKey`] if a code appears twice.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u16, S)>,
        S: Into<String>,
    {
        let entries: Vec<InstanceTypeEntry> = entries
            .into_iter()
            .map(|(code, name)| InstanceTypeEntry {
                code,
                name: name.into(),
            })
            .collect();
        let index = build_index(
            TableKind::InstanceTypes,
            entries.iter().map(|entry| entry.code),
            |code| code.to_string(),
        )?;

        Ok(InstanceTypes { entries, index })
    }

    /// Look up the name of an instance-type code.
    ///
    /// Accepts any 32-bit value read from a dump; codes beyond the 16-bit range are
    /// never defined.
    #[must_use]
    pub fn get(&self, code: u32) -> Option<&str> {
        let code = u16::try_from(code).ok()?;
        self.index
            .get(&code)
            .map(|&position| self.entries[position].name.as_str())
    }

    /// Returns `true` if `code` is defined.
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        u16::try_from(code).is_ok_and(|code| self.index.contains_key(&code))
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
    pub fn iter(&self) -> slice::Iter<'_, InstanceTypeEntry> {
        self.entries.iter()
    }
}

impl PartialEq for InstanceTypes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|entry| other.get(u32::from(entry.code)) == Some(entry.name.as_str()))
    }
}

impl Eq for InstanceTypes {}

impl<'a> IntoIterator for &'a InstanceTypes {
    type Item = &'a InstanceTypeEntry;
    type IntoIter = slice::Iter<'a, InstanceTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
