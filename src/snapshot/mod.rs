//! V8 heap constant snapshots.
//!
//! A [`Snapshot`] is one generated set of the five constant tables a heap-dump annotator
//! needs to put names on raw values: instance-type codes, the locations of well-known maps
//! and objects, the first pages of the heap spaces and the stack-frame markers. The tables
//! are only valid for the V8 build they were generated from, so every lookup answers with
//! an [`Option`]; `None` means "unknown to this build", never a failure.
//!
//! # Key Components
//!
//! - [`Snapshot`] - The immutable table store and its lookups
//! - [`SnapshotBuilder`] - Assembles and validates a snapshot from single tables
//! - [`LoadConfig`] - How strictly persisted snapshots are checked
//! - [`HeapSpace`] / [`SpaceOffset`] - Keys of the map and object tables
//! - [`TableKind`] - Names the individual tables
//!
//! # Sources
//!
//! The crate embeds the snapshot of one shipping build ([`Snapshot::builtin`]). Other builds
//! are loaded from the `v8heapconst.py` files `mkgrokdump` generates
//! ([`Snapshot::from_file`], [`Snapshot::parse`]), and any snapshot can be written back in
//! that format ([`Snapshot::to_source`]).
//!
//! # Examples
//!
//! ```rust
//! use v8heapconst::{HeapSpace, Snapshot};
//!
//! let snapshot = Snapshot::builtin()?;
//!
//! let map = snapshot.lookup_map(HeapSpace::ReadOnly, 0x02139).unwrap();
//! assert_eq!(map.as_tuple(), (247, "MetaMap"));
//! assert_eq!(snapshot.lookup_instance_type(map.instance_type.into()), Some("MAP_TYPE"));
//! assert_eq!(snapshot.lookup_heap_space(0x000c0000), Some(HeapSpace::Old));
//! assert_eq!(snapshot.frame_markers()[0], "ENTRY");
//! # Ok::<(), v8heapconst::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`Snapshot`] is immutable after construction and therefore [`Send`] and [`Sync`]; the
//! shared built-in instance is created once and then read without locking.

use std::{
    fmt::{self, Write as _},
    io,
    path::Path,
    sync::OnceLock,
};

use sha1::{Digest, Sha1};

use crate::{file::File, Result};

mod builder;
mod builtin;
mod config;
mod reader;
mod space;
mod tables;
mod writer;

pub use builder::SnapshotBuilder;
pub use config::LoadConfig;
pub use space::HeapSpace;
pub use tables::{
    FrameMarkers, HeapFirstPages, HeapPageEntry, InstanceTypeEntry, InstanceTypes, KnownMap,
    KnownMaps, KnownObjects, MapEntry, ObjectEntry, SpaceOffset, TableKind,
};

/// The constant table store.
///
/// Holds the five tables of one V8 build. Construct it from the embedded data with
/// [`Snapshot::builtin`] / [`Snapshot::from_builtin`], from a generated file with
/// [`Snapshot::from_file`], or from individual tables with [`SnapshotBuilder`].
///
/// Two snapshots compare equal when every table holds the same keys with the same values
/// (and the frame markers are in the same order).
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{HeapSpace, Snapshot};
///
/// let snapshot = Snapshot::from_builtin()?;
/// assert_eq!(snapshot.lookup_object(HeapSpace::Old, 0x0439d), Some("ExternalMap"));
/// assert_eq!(snapshot.lookup_object(HeapSpace::ReadOnly, 0x0439d), None);
/// assert_eq!(&snapshot, Snapshot::builtin()?);
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    instance_types: InstanceTypes,
    known_maps: KnownMaps,
    known_objects: KnownObjects,
    heap_first_pages: HeapFirstPages,
    frame_markers: FrameMarkers,
}

impl Snapshot {
    /// Returns the process-wide built-in snapshot.
    ///
    /// The instance is built on first use and shared afterwards. Calling this once during
    /// start-up moves the construction cost out of the first lookup.
    ///
    /// # Errors
    /// Returns an error if the embedded tables fail validation, which only happens if they
    /// were edited by hand.
    pub fn builtin() -> Result<&'static Snapshot> {
        static BUILTIN: OnceLock<Snapshot> = OnceLock::new();

        if let Some(snapshot) = BUILTIN.get() {
            return Ok(snapshot);
        }

        // A racing thread may have won in the meantime; both values are identical.
        let snapshot = Snapshot::from_builtin()?;
        Ok(BUILTIN.get_or_init(|| snapshot))
    }

    /// Build a new, independent instance of the built-in snapshot.
    ///
    /// The embedded tables are checked with [`LoadConfig::strict`].
    ///
    /// # Errors
    /// Returns an error if the embedded tables fail validation.
    pub fn from_builtin() -> Result<Snapshot> {
        let instance_types = InstanceTypes::from_entries(builtin::INSTANCE_TYPES.iter().copied())?;
        let known_maps = KnownMaps::from_entries(builtin::KNOWN_MAPS.iter().map(
            |&(space, offset, instance_type, name)| {
                (SpaceOffset::new(space, offset), instance_type, name)
            },
        ))?;
        let known_objects = KnownObjects::from_entries(
            builtin::KNOWN_OBJECTS
                .iter()
                .map(|&(space, offset, name)| (SpaceOffset::new(space, offset), name)),
        )?;
        let heap_first_pages =
            HeapFirstPages::from_entries(builtin::HEAP_FIRST_PAGES.iter().copied())?;
        let frame_markers = FrameMarkers::from_names(builtin::FRAME_MARKERS.iter().copied())?;

        SnapshotBuilder::new()
            .instance_types(instance_types)
            .known_maps(known_maps)
            .known_objects(known_objects)
            .heap_first_pages(heap_first_pages)
            .frame_markers(frame_markers)
            .build(LoadConfig::strict())
    }

    /// Load a snapshot from a generated `v8heapconst.py` file on disk.
    ///
    /// # Arguments
    /// * `path` - The file to load
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read, [`crate::Error::Empty`]
    /// for an empty file, or any error of [`Snapshot::parse`].
    pub fn from_file(path: &Path) -> Result<Snapshot> {
        Self::from_file_with_config(path, LoadConfig::default())
    }

    /// Load a snapshot from a file with a custom [`LoadConfig`].
    ///
    /// # Errors
    /// See [`Snapshot::from_file`].
    pub fn from_file_with_config(path: &Path, config: LoadConfig) -> Result<Snapshot> {
        let file = File::from_file(path)?;
        Self::load(&file, config)
    }

    /// Load a snapshot from an in-memory copy of a generated file.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty data, or any error of [`Snapshot::parse`].
    pub fn from_mem(data: Vec<u8>) -> Result<Snapshot> {
        Self::from_mem_with_config(data, LoadConfig::default())
    }

    /// Load a snapshot from memory with a custom [`LoadConfig`].
    ///
    /// # Errors
    /// See [`Snapshot::from_mem`].
    pub fn from_mem_with_config(data: Vec<u8>, config: LoadConfig) -> Result<Snapshot> {
        let file = File::from_mem(data)?;
        Self::load(&file, config)
    }

    /// Parse the text of a generated file.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the text does not follow the snapshot format,
    /// [`crate::Error::DuplicateKey`] if a table defines a key twice,
    /// [`crate::Error::UnknownSpace`] for an unknown heap space and
    /// [`crate::Error::MissingTable`] if one of the five tables is not defined.
    pub fn parse(source: &str) -> Result<Snapshot> {
        Self::parse_with_config(source, LoadConfig::default())
    }

    /// Parse the text of a generated file with a custom [`LoadConfig`].
    ///
    /// # Errors
    /// See [`Snapshot::parse`].
    pub fn parse_with_config(source: &str, config: LoadConfig) -> Result<Snapshot> {
        reader::read(source, config)
    }

    fn load(file: &File, config: LoadConfig) -> Result<Snapshot> {
        let source = std::str::from_utf8(file.data())
            .map_err(|error| malformed_error!("snapshot is not valid UTF-8 - {}", error))?;
        reader::read(source, config)
    }

    /// Look up the name of an instance-type code.
    ///
    /// Codes are taken as read from a dump; a value outside the 16-bit range of the
    /// runtime's instance types is simply unknown.
    #[must_use]
    pub fn lookup_instance_type(&self, code: u32) -> Option<&str> {
        self.instance_types.get(code)
    }

    /// Look up the map at `offset` within `space`.
    #[must_use]
    pub fn lookup_map(&self, space: HeapSpace, offset: u32) -> Option<KnownMap<'_>> {
        self.known_maps.get(space, offset)
    }

    /// Look up the object at `offset` within `space`.
    #[must_use]
    pub fn lookup_object(&self, space: HeapSpace, offset: u32) -> Option<&str> {
        self.known_objects.get(space, offset)
    }

    /// Look up the space whose first page has the lower 32 address bits `page`.
    #[must_use]
    pub fn lookup_heap_space(&self, page: u32) -> Option<HeapSpace> {
        self.heap_first_pages.get(page)
    }

    /// All frame markers in enumeration order.
    #[must_use]
    pub fn frame_markers(&self) -> &[String] {
        self.frame_markers.as_slice()
    }

    /// The frame marker for the enumeration value `index`.
    #[must_use]
    pub fn frame_marker(&self, index: usize) -> Option<&str> {
        self.frame_markers.get(index)
    }

    /// The enumeration value of the frame marker `name`.
    #[must_use]
    pub fn frame_marker_index(&self, name: &str) -> Option<usize> {
        self.frame_markers.position(name)
    }

    /// Resolve the instance-type name of the map at `offset` within `space`.
    ///
    /// Returns `None` if no map is known there or its instance type is not defined.
    #[must_use]
    pub fn instance_type_name_of_map(&self, space: HeapSpace, offset: u32) -> Option<&str> {
        let map = self.lookup_map(space, offset)?;
        self.lookup_instance_type(u32::from(map.instance_type))
    }

    /// The `INSTANCE_TYPES` table
    #[must_use]
    pub fn instance_types(&self) -> &InstanceTypes {
        &self.instance_types
    }

    /// The `KNOWN_MAPS` table
    #[must_use]
    pub fn known_maps(&self) -> &KnownMaps {
        &self.known_maps
    }

    /// The `KNOWN_OBJECTS` table
    #[must_use]
    pub fn known_objects(&self) -> &KnownObjects {
        &self.known_objects
    }

    /// The `HEAP_FIRST_PAGES` table
    #[must_use]
    pub fn heap_first_pages(&self) -> &HeapFirstPages {
        &self.heap_first_pages
    }

    /// The `FRAME_MARKERS` table
    #[must_use]
    pub fn frame_marker_list(&self) -> &FrameMarkers {
        &self.frame_markers
    }

    /// Write the snapshot in the generated `v8heapconst.py` format.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if writing to `target` fails.
    pub fn write_to<W: io::Write>(&self, target: &mut W) -> Result<()> {
        target.write_all(self.to_source().as_bytes())?;
        Ok(())
    }

    /// Render the snapshot in the generated `v8heapconst.py` format.
    ///
    /// For the built-in snapshot this is exactly the file it was generated from.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        // Writing into a String cannot fail
        let _ = writer::write(self, &mut source);
        source
    }

    /// Lowercase hex SHA-1 of the canonical rendering.
    ///
    /// The canonical rendering is [`Snapshot::to_source`] with the keyed tables sorted by
    /// key, so snapshots that compare equal have equal fingerprints even when their entries
    /// were loaded in different orders. Frame markers are hashed in order.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut canonical = String::new();
        // Writing into a String cannot fail
        let _ = writer::write_canonical(self, &mut canonical);

        let mut hasher = Sha1::new();
        hasher.update(canonical.as_bytes());

        let mut hex_string = String::with_capacity(40);
        for byte in hasher.finalize() {
            let _ = write!(&mut hex_string, "{byte:02x}");
        }
        hex_string
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write(self, f)
    }
}
