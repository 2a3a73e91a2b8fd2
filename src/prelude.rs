//! # v8heapconst Prelude
//!
//! The types needed for almost every use of the crate: loading a snapshot and looking
//! things up in it. Import everything with `use v8heapconst::prelude::*;`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The error type for all v8heapconst operations
pub use crate::Error;

/// The result type used throughout v8heapconst
pub use crate::Result;

/// Strictness of snapshot loading
pub use crate::LoadConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The constant table store
pub use crate::Snapshot;

/// Assembly of snapshots from single tables
pub use crate::SnapshotBuilder;

// ================================================================================================
// Keys
// ================================================================================================

/// Heap spaces and the `(space, offset)` key of maps and objects
pub use crate::{HeapSpace, SpaceOffset};

/// Names of the snapshot tables
pub use crate::TableKind;

// ================================================================================================
// Tables
// ================================================================================================

/// Results of map lookups
pub use crate::KnownMap;

/// The typed tables of a snapshot
pub use crate::{FrameMarkers, HeapFirstPages, InstanceTypes, KnownMaps, KnownObjects};
