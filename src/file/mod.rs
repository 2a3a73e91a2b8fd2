//! Snapshot file abstraction.
//!
//! This module abstracts over where persisted snapshot data comes from. A snapshot is
//! normally a `v8heapconst.py` file written by V8's `mkgrokdump`, but it may just as well
//! be embedded in a larger artifact or downloaded alongside a crash dump.
//!
//! # Key Components
//!
//! - [`crate::file::File`] - Loaded snapshot source, never empty
//! - [`crate::file::Backend`] - Trait for different data sources (disk files, memory buffers)
//! - [`crate::file::parser::Parser`] - Cursor over the raw bytes used by the snapshot reader
//!
//! ## Backend Implementations
//! - [`crate::file::physical::Physical`] - Memory-mapped file backend for disk access
//! - [`crate::file::memory::Memory`] - In-memory buffer backend
//!
//! # Examples
//!
//! ```rust,no_run
//! use v8heapconst::File;
//! use std::path::Path;
//!
//! let file = File::from_file(Path::new("tests/samples/v8heapconst.py"))?;
//! println!("Loaded snapshot source with {} bytes", file.len());
//! # Ok::<(), v8heapconst::Error>(())
//! ```

pub mod parser;

mod memory;
mod physical;

use std::path::Path;

use crate::{Error::Empty, Result};
use memory::Memory;
use physical::Physical;

/// Backend trait for file data sources.
///
/// This trait abstracts over the source of snapshot data, allowing for both in-memory and
/// on-disk representations. All implementations must be thread-safe.
pub trait Backend: Send + Sync {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;
}

/// A loaded snapshot source.
///
/// `File` only owns bytes; interpreting them is the job of
/// [`crate::Snapshot::from_file`] and friends. Empty inputs are rejected up front so
/// that every `File` holds at least one byte.
///
/// # Examples
///
/// ```rust
/// use v8heapconst::File;
///
/// let file = File::from_mem(b"FRAME_MARKERS = (\"ENTRY\",)\n".to_vec())?;
/// assert!(file.data().starts_with(b"FRAME_MARKERS"));
/// # Ok::<(), v8heapconst::Error>(())
/// ```
pub struct File {
    data: Box<dyn Backend>,
}

impl File {
    /// Loads a snapshot source from disk, memory-mapping it.
    ///
    /// # Arguments
    ///
    /// * `file` - Path to the snapshot file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if the file cannot be opened, or
    /// [`crate::Error::Empty`] if it contains no data.
    pub fn from_file(file: &Path) -> Result<File> {
        let input = Physical::new(file)?;

        Self::load(input)
    }

    /// Loads a snapshot source from a memory buffer.
    ///
    /// # Arguments
    ///
    /// * `data` - The bytes of the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Empty`] if the buffer is empty.
    pub fn from_mem(data: Vec<u8>) -> Result<File> {
        let input = Memory::new(data);

        Self::load(input)
    }

    fn load<T: Backend + 'static>(data: T) -> Result<File> {
        if data.len() == 0 {
            return Err(Empty);
        }

        Ok(File {
            data: Box::new(data),
        })
    }

    /// Returns the total size of the loaded source in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the source holds no data.
    ///
    /// Always `false` for a successfully constructed `File`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    /// Returns the complete data of the source.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.data()
    }
}
