// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory and opts out locally

//! # v8heapconst
//!
//! Constant lookup tables for annotating V8 heap dumps.
//!
//! A raw heap dump is a sea of tagged words. To turn it into something readable, a dump
//! tool needs to know which instance-type code means what, where the well-known maps and
//! root objects of the build live, which heap space a page belongs to and how stack frames
//! are marked. V8's `mkgrokdump` extracts exactly these constants from a build and writes
//! them as `v8heapconst.py`; this crate provides them as typed, immutable lookup tables.
//!
//! ## Features
//!
//! - **📦 Embedded snapshot** - The constants of a shipping build, available without I/O
//! - **🔍 O(1) lookups** - Hash-indexed tables, absence reported as `None`
//! - **📄 Generated files** - Read and write the `mkgrokdump` format, byte for byte
//! - **🛡️ Strict construction** - Duplicate keys and malformed entries are refused, never merged
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use v8heapconst::prelude::*;
//!
//! let snapshot = Snapshot::builtin()?;
//! assert_eq!(snapshot.lookup_instance_type(247), Some("MAP_TYPE"));
//! # Ok::<(), v8heapconst::Error>(())
//! ```
//!
//! ### Annotating a map word
//!
//! ```rust
//! use v8heapconst::{HeapSpace, Snapshot};
//!
//! let snapshot = Snapshot::builtin()?;
//!
//! // A map pointer at offset 0x02139 of the read-only space
//! if let Some(map) = snapshot.lookup_map(HeapSpace::ReadOnly, 0x02139) {
//!     let type_name = snapshot.lookup_instance_type(map.instance_type.into()).unwrap_or("?");
//!     println!("{} ({})", map.name, type_name);
//! }
//! # Ok::<(), v8heapconst::Error>(())
//! ```
//!
//! ### Loading the constants of another build
//!
//! ```rust,no_run
//! use v8heapconst::{LoadConfig, Snapshot};
//! use std::path::Path;
//!
//! let snapshot = Snapshot::from_file_with_config(
//!     Path::new("tools/v8heapconst.py"),
//!     LoadConfig::strict(),
//! )?;
//! println!("{} known maps, fingerprint {}", snapshot.known_maps().len(), snapshot.fingerprint());
//! # Ok::<(), v8heapconst::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`snapshot`] - The [`Snapshot`] store, its tables, reader and writer
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Lookups never fail; they return `None` for keys the snapshot does not know. Loading a
//! snapshot returns [`Result<T, Error>`](Result):
//!
//! ```rust
//! use v8heapconst::{Error, Snapshot};
//!
//! match Snapshot::parse("INSTANCE_TYPES = { 247: 'MAP_TYPE', 247: 'OTHER' }") {
//!     Ok(_) => println!("loaded"),
//!     Err(Error::DuplicateKey { table, key }) => println!("{table} defines {key} twice"),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed snapshot: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade: table sizes at
//! `debug` level, tolerated irregularities in loaded files at `warn` level. No logger is
//! installed by the library.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! cargo +nightly fuzz run snapshot --release
//! ```

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use v8heapconst::prelude::*;
///
/// let snapshot = Snapshot::builtin()?;
/// assert_eq!(snapshot.lookup_heap_space(0x000c0000), Some(HeapSpace::Old));
/// # Ok::<(), v8heapconst::Error>(())
/// ```
pub mod prelude;

/// V8 heap constant snapshots
///
/// The [`Snapshot`] type and the five tables it is made of, together with the reader and
/// writer for the generated `v8heapconst.py` format.
///
/// # Key Types
///
/// - [`Snapshot`] - The table store
/// - [`SnapshotBuilder`] - Assembles a snapshot from single tables
/// - [`LoadConfig`] - Strictness of loading
/// - [`HeapSpace`], [`SpaceOffset`], [`TableKind`] - Keys and table names
pub mod snapshot;

/// `v8heapconst` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `v8heapconst` Error type
///
/// The error type for all fallible operations in this crate, which are the ones that build a
/// snapshot. Lookups report unknown keys through [`Option`] instead.
pub use error::Error;

/// The constant table store.
///
/// # Example
///
/// ```rust
/// use v8heapconst::Snapshot;
///
/// let snapshot = Snapshot::builtin()?;
/// assert_eq!(snapshot.frame_markers()[0], "ENTRY");
/// # Ok::<(), v8heapconst::Error>(())
/// ```
pub use snapshot::Snapshot;

/// Snapshot construction and configuration
pub use snapshot::{LoadConfig, SnapshotBuilder};

/// Table keys and names
pub use snapshot::{HeapSpace, SpaceOffset, TableKind};

/// The individual tables and their entries
pub use snapshot::{
    FrameMarkers, HeapFirstPages, HeapPageEntry, InstanceTypeEntry, InstanceTypes, KnownMap,
    KnownMaps, KnownObjects, MapEntry, ObjectEntry,
};

/// Provides access to low-level file and memory parsing utilities.
///
/// The [`Parser`] type is the lexical layer of the snapshot reader and can be used to
/// tokenize hand-written snapshot fragments.
///
/// # Example
///
/// ```rust
/// use v8heapconst::Parser;
///
/// let mut parser = Parser::new(b"0x000c0000: \"old_space\"");
/// assert_eq!(parser.read_integer()?, 0x000c0000);
/// # Ok::<(), v8heapconst::Error>(())
/// ```
pub use file::{parser::Parser, File};
