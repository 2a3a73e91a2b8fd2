//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`crate::file::physical::Physical`] backend that implements the
//! [`crate::file::Backend`] trait for snapshot files on disk. The file is mapped read-only
//! into the address space instead of being copied, which keeps loading cheap when a
//! heap-dump tool opens a fresh snapshot for every dump it inspects.

use super::Backend;
use crate::{
    Error::{Error, FileError},
    Result,
};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O for access to snapshot files on disk.
///
/// An empty file is held without a mapping and reads as an empty slice.
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data, `None` for zero-length files which cannot be mapped
    data: Option<Mmap>,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Arguments
    /// * `path` - Path to the snapshot file on disk.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        Self::from_std_file(file)
    }

    /// Creates a new physical file backend from an opened [`std::fs::File`].
    ///
    /// # Arguments
    /// * `file` - An opened file handle
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file metadata cannot be read or
    /// [`crate::Error::Error`] if memory mapping fails.
    #[allow(unsafe_code)]
    pub fn from_std_file(file: fs::File) -> Result<Physical> {
        if file.metadata()?.len() == 0 {
            return Ok(Physical { data: None });
        }

        // The mapping only lives while a snapshot is read from it
        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        Ok(Physical { data: Some(mmap) })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        match &self.data {
            Some(mmap) => mmap.as_ref(),
            None => &[],
        }
    }

    fn len(&self) -> usize {
        self.data().len()
    }
}
