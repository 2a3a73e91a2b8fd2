//! `FRAME_MARKERS` table
//!
//! The stack-frame type names in the declaration order of the runtime's frame-type
//! enumeration. A frame's marker is a small integer, so the list is consumed by index;
//! reordering it would silently relabel every decoded frame.

use std::slice;

use rustc_hash::FxHashMap;

use super::{build_index, TableKind};
use crate::Result;

/// The `FRAME_MARKERS` table.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::FrameMarkers;
///
/// let markers = FrameMarkers::from_names(["ENTRY", "CONSTRUCT_ENTRY", "EXIT"])?;
/// assert_eq!(markers.get(2), Some("EXIT"));
/// assert_eq!(markers.position("CONSTRUCT_ENTRY"), Some(1));
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrameMarkers {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl FrameMarkers {
    /// Build the list from names in enumeration order.
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateKey`] if a name appears twice.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let index = build_index(
            TableKind::FrameMarkers,
            names.iter().cloned(),
            Clone::clone,
        )?;

        Ok(FrameMarkers { names, index })
    }

    /// The marker name for enumeration value `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The enumeration value of the marker `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns `true` if `name` is a known marker.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All names in enumeration order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate the names in enumeration order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.names.iter()
    }
}

// Order matters here, unlike for the keyed tables.
impl PartialEq for FrameMarkers {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for FrameMarkers {}

impl<'a> IntoIterator for &'a FrameMarkers {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
