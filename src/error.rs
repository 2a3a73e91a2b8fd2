use thiserror::Error;

use crate::snapshot::TableKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds {
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// A lookup that finds nothing is *not* an error: every lookup on a
/// [`crate::Snapshot`] returns an [`Option`], and `None` simply means the key is unknown
/// to that snapshot (usually because the dump was produced by a different V8 build).
/// The variants below describe failures while *building* a snapshot, where the source
/// data itself violates its structural contract.
///
/// # Error Categories
///
/// ## Snapshot Structure Errors
/// - [`Error::Malformed`] - Input does not follow the snapshot grammar or table shape
/// - [`Error::DuplicateKey`] - A key that must be unique appears twice in one table
/// - [`Error::UnknownSpace`] - A heap-space name outside the known set
/// - [`Error::MissingTable`] - A required table is not defined by the input
///
/// ## Input Errors
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of the input
/// - [`Error::Empty`] - Empty input provided
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// # Examples
///
/// ```rust
/// use v8heapconst::{Error, Snapshot};
///
/// match Snapshot::parse("KNOWN_MAPS = { (\"old_space\", 0x1): (1, \"A\"), (\"old_space\", 0x1): (2, \"B\") }") {
///     Err(Error::DuplicateKey { table, key }) => println!("{table}: {key} defined twice"),
///     Err(e) => println!("Other error: {e}"),
///     Ok(_) => println!("loaded"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The snapshot data is damaged and could not be parsed.
    ///
    /// The message names the offending snapshot line where one is known. The error
    /// also carries the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A key which must be unique within its table was defined more than once.
    ///
    /// Resolving such a collision silently would misattribute labels in heap dumps,
    /// so construction is refused instead.
    #[error("Duplicate key in {table}: {key}")]
    DuplicateKey {
        /// The table in which the collision happened
        table: TableKind,
        /// Display form of the colliding key
        key: String,
    },

    /// A heap-space name which is not part of [`crate::HeapSpace`].
    #[error("Unknown heap space - {0}")]
    UnknownSpace(String),

    /// A table required by the active [`crate::LoadConfig`] was not defined.
    #[error("Snapshot does not define {0}")]
    MissingTable(TableKind),

    /// An out of bound access was attempted while parsing the input.
    ///
    /// # Fields
    ///
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Out of Bound read would have occurred! - {file}:{line}")]
    OutOfBounds {
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
