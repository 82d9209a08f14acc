//! Error types for file-handle construction and I/O.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use tagfile_walk::WalkError;

/// Errors from tag processing, file-handle construction, and file I/O.
///
/// I/O variants carry the offending path alongside the underlying cause.
/// `remove` is the one exception to this wrapping: it returns the bare
/// [`io::Error`] directly (see [`FileHandle::remove`]).
///
/// [`FileHandle::remove`]: crate::FileHandle::remove
#[derive(Debug, Error)]
pub enum FileError {
    /// Opening the file for create/write/truncate failed.
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing content into the file failed.
    #[error("failed to write into '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the file failed, including not-found.
    #[error("failed to read file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stat on the containing directory failed with something other than
    /// not-found. Plain not-found is not an error; it triggers creation.
    #[error("failed to stat '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the directory chain failed.
    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A field's tag string failed schema validation.
    #[error(transparent)]
    Tag(#[from] WalkError),
}
