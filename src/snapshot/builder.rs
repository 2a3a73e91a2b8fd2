//! Assembly of a [`Snapshot`] from individually built tables.
//!
//! Each table is checked for duplicate keys when it is constructed; the builder adds the
//! checks that need more than one table (the instance types referenced by maps) and the
//! handling of tables a source did not define, both driven by [`LoadConfig`].

use log::{debug, warn};

use crate::{
    snapshot::{
        FrameMarkers, HeapFirstPages, InstanceTypes, KnownMaps, KnownObjects, LoadConfig,
        Snapshot, TableKind,
    },
    Error, Result,
};

/// Collects the five tables of a snapshot and validates them as a whole.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{FrameMarkers, InstanceTypes, LoadConfig, SnapshotBuilder};
///
/// let snapshot = SnapshotBuilder::new()
///     .instance_types(InstanceTypes::from_entries([(247, "MAP_TYPE")])?)
///     .frame_markers(FrameMarkers::from_names(["ENTRY", "EXIT"])?)
///     .build(LoadConfig::lenient())?;
///
/// assert_eq!(snapshot.lookup_instance_type(247), Some("MAP_TYPE"));
/// assert_eq!(snapshot.frame_markers()[1], "EXIT");
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    instance_types: Option<InstanceTypes>,
    known_maps: Option<KnownMaps>,
    known_objects: Option<KnownObjects>,
    heap_first_pages: Option<HeapFirstPages>,
    frame_markers: Option<FrameMarkers>,
}

impl SnapshotBuilder {
    /// Create a builder without any tables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `INSTANCE_TYPES` table
    #[must_use]
    pub fn instance_types(mut self, table: InstanceTypes) -> Self {
        self.instance_types = Some(table);
        self
    }

    /// Set the `KNOWN_MAPS` table
    #[must_use]
    pub fn known_maps(mut self, table: KnownMaps) -> Self {
        self.known_maps = Some(table);
        self
    }

    /// Set the `KNOWN_OBJECTS` table
    #[must_use]
    pub fn known_objects(mut self, table: KnownObjects) -> Self {
        self.known_objects = Some(table);
        self
    }

    /// Set the `HEAP_FIRST_PAGES` table
    #[must_use]
    pub fn heap_first_pages(mut self, table: HeapFirstPages) -> Self {
        self.heap_first_pages = Some(table);
        self
    }

    /// Set the `FRAME_MARKERS` table
    #[must_use]
    pub fn frame_markers(mut self, table: FrameMarkers) -> Self {
        self.frame_markers = Some(table);
        self
    }

    /// Returns `true` if the table `kind` has been set.
    #[must_use]
    pub fn has_table(&self, kind: TableKind) -> bool {
        match kind {
            TableKind::InstanceTypes => self.instance_types.is_some(),
            TableKind::KnownMaps => self.known_maps.is_some(),
            TableKind::KnownObjects => self.known_objects.is_some(),
            TableKind::HeapFirstPages => self.heap_first_pages.is_some(),
            TableKind::FrameMarkers => self.frame_markers.is_some(),
        }
    }

    /// Validate the collected tables and produce the snapshot.
    ///
    /// # Arguments
    /// * `config` - Decides which findings are fatal
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingTable`] for an unset table if
    /// [`LoadConfig::require_all_tables`] is set, and [`crate::Error::Malformed`] for a map
    /// whose instance type is not defined if [`LoadConfig::verify_map_instance_types`] is set.
    pub fn build(self, config: LoadConfig) -> Result<Snapshot> {
        let snapshot = Snapshot {
            instance_types: require(self.instance_types, TableKind::InstanceTypes, config)?,
            known_maps: require(self.known_maps, TableKind::KnownMaps, config)?,
            known_objects: require(self.known_objects, TableKind::KnownObjects, config)?,
            heap_first_pages: require(self.heap_first_pages, TableKind::HeapFirstPages, config)?,
            frame_markers: require(self.frame_markers, TableKind::FrameMarkers, config)?,
        };

        check_map_instance_types(&snapshot, config)?;

        debug!(
            "snapshot built: {} instance types, {} maps, {} objects, {} heap pages, {} frame markers",
            snapshot.instance_types.len(),
            snapshot.known_maps.len(),
            snapshot.known_objects.len(),
            snapshot.heap_first_pages.len(),
            snapshot.frame_markers.len()
        );

        Ok(snapshot)
    }
}

fn require<T: Default>(table: Option<T>, kind: TableKind, config: LoadConfig) -> Result<T> {
    match table {
        Some(table) => Ok(table),
        None if config.require_all_tables => Err(Error::MissingTable(kind)),
        None => {
            warn!("snapshot does not define {kind}, using an empty table");
            Ok(T::default())
        }
    }
}

// Without any instance types there is nothing to check against.
fn check_map_instance_types(snapshot: &Snapshot, config: LoadConfig) -> Result<()> {
    if snapshot.instance_types.is_empty() {
        return Ok(());
    }

    for map in &snapshot.known_maps {
        if snapshot.instance_types.contains(u32::from(map.instance_type)) {
            continue;
        }

        if config.verify_map_instance_types {
            return Err(malformed_error!(
                "map {} at {} has instance type {} which is not in {}",
                map.name,
                map.key,
                map.instance_type,
                TableKind::InstanceTypes
            ));
        }

        warn!(
            "map {} at {} has undefined instance type {}",
            map.name, map.key, map.instance_type
        );
    }

    Ok(())
}
