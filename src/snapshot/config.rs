//! Load configuration for snapshots
//!
//! This module provides the options that control how strictly a snapshot source is
//! checked while loading. Structural checks (grammar, table shapes, integer ranges,
//! duplicate keys) are always performed; the switches here only cover findings that
//! can reasonably happen with snapshots generated by older or newer builds.

/// Configuration for snapshot loading
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{LoadConfig, Snapshot};
///
/// // A file that only carries the instance types
/// let snapshot = Snapshot::parse_with_config(
///     "INSTANCE_TYPES = { 247: \"MAP_TYPE\" }",
///     LoadConfig::lenient(),
/// )?;
/// assert_eq!(snapshot.lookup_instance_type(247), Some("MAP_TYPE"));
/// assert!(snapshot.known_maps().is_empty());
/// # Ok::<(), v8heapconst::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Require all five tables to be defined by the source
    pub require_all_tables: bool,

    /// Skip assignments with unknown names (with a warning) instead of rejecting them
    pub allow_unknown_assignments: bool,

    /// Reject maps whose instance-type code is not listed in `INSTANCE_TYPES`
    /// (otherwise such maps are only logged)
    pub verify_map_instance_types: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            require_all_tables: true,
            allow_unknown_assignments: true,
            verify_map_instance_types: false,
        }
    }
}

impl LoadConfig {
    /// Creates a configuration with every optional check fatal
    ///
    /// Used for the embedded snapshot, which must be complete and self-consistent.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_all_tables: true,
            allow_unknown_assignments: false,
            verify_map_instance_types: true,
        }
    }

    /// Creates a configuration accepting partial snapshots
    ///
    /// Missing tables load as empty tables and all optional findings are only logged.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            require_all_tables: false,
            allow_unknown_assignments: true,
            verify_map_instance_types: false,
        }
    }
}
