//! Heap-space identifiers.
//!
//! V8 partitions its managed heap into allocation spaces. Generated snapshots name them
//! by their snake_case string form (`"read_only_space"`, `"old_space"`, ...); this module
//! turns that closed set into the [`HeapSpace`] enum so composite keys stay small and
//! `Copy`, and so an unknown name is caught while loading instead of at lookup time.

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// The allocation spaces that can appear in a snapshot.
///
/// The string form of each variant is the exact name used by `mkgrokdump`. Use
/// [`HeapSpace::from_name`] to get this crate's [`crate::Error`]; the [`FromStr`] impl
/// reports `strum::ParseError` instead.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::HeapSpace;
///
/// let space = HeapSpace::from_name("read_only_space")?;
/// assert_eq!(space, HeapSpace::ReadOnly);
/// assert_eq!("old_space".parse::<HeapSpace>().ok(), Some(HeapSpace::Old));
/// assert_eq!(HeapSpace::Old.to_string(), "old_space");
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum HeapSpace {
    /// Immutable roots shared by all isolates built from the same snapshot
    #[strum(serialize = "read_only_space")]
    ReadOnly,
    /// Young generation
    #[strum(serialize = "new_space")]
    New,
    /// Old generation
    #[strum(serialize = "old_space")]
    Old,
    /// Executable code
    #[strum(serialize = "code_space")]
    Code,
    /// Maps, only present in builds from before the map space was folded into old space
    #[strum(serialize = "map_space")]
    Map,
    /// Objects shared between isolates
    #[strum(serialize = "shared_space")]
    Shared,
    /// Objects outside the sandbox
    #[strum(serialize = "trusted_space")]
    Trusted,
    /// Shared objects outside the sandbox
    #[strum(serialize = "shared_trusted_space")]
    SharedTrusted,
    /// Large young-generation objects
    #[strum(serialize = "new_large_object_space")]
    NewLargeObject,
    /// Large old-generation objects
    #[strum(serialize = "large_object_space")]
    LargeObject,
    /// Large code objects
    #[strum(serialize = "code_large_object_space")]
    CodeLargeObject,
    /// Large shared objects
    #[strum(serialize = "shared_large_object_space")]
    SharedLargeObject,
    /// Large shared objects outside the sandbox
    #[strum(serialize = "shared_trusted_large_object_space")]
    SharedTrustedLargeObject,
    /// Large objects outside the sandbox
    #[strum(serialize = "trusted_large_object_space")]
    TrustedLargeObject,
}

impl HeapSpace {
    /// Resolve a space name as written in a snapshot.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownSpace`] if `name` is not a known space.
    pub fn from_name(name: &str) -> Result<HeapSpace> {
        HeapSpace::from_str(name).map_err(|_| Error::UnknownSpace(name.to_string()))
    }

    /// The snapshot name of this space.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_roundtrip() {
        for space in HeapSpace::iter() {
            assert_eq!(HeapSpace::from_name(space.name()).unwrap(), space);
            assert_eq!(space.as_ref(), space.name());
            assert_eq!(space.to_string(), space.name());
            assert!(space.name().ends_with("_space"));
        }
        assert_eq!(HeapSpace::COUNT, 14);
    }

    #[test]
    fn known_names() {
        assert_eq!(HeapSpace::ReadOnly.name(), "read_only_space");
        assert_eq!(HeapSpace::Old.name(), "old_space");
        assert_eq!(
            HeapSpace::from_name("code_large_object_space").unwrap(),
            HeapSpace::CodeLargeObject
        );
    }

    #[test]
    fn unknown_name() {
        match HeapSpace::from_name("ReadOnlySpace") {
            Err(Error::UnknownSpace(name)) => assert_eq!(name, "ReadOnlySpace"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(HeapSpace::from_name("").is_err());
    }

    #[test]
    fn from_str_and_from_name_agree() {
        let space: HeapSpace = "read_only_space".parse().unwrap();
        assert_eq!(space, HeapSpace::ReadOnly);
        assert_eq!(HeapSpace::from_name("read_only_space").unwrap(), space);

        assert!("readonly_space".parse::<HeapSpace>().is_err());
        assert!(matches!(
            HeapSpace::from_name("readonly_space"),
            Err(Error::UnknownSpace(_))
        ));
    }
}
