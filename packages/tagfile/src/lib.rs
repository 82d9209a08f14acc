//! tagfile: declare files as tagged struct fields.
//!
//! A struct field tagged with a destination path (plus optional temp-rooting,
//! initial content, and permission bits) is turned, at initialization, into a
//! [`FileHandle`] for a file that already exists on disk holding the declared
//! content. The containing directory chain is created as needed.
//!
//! # Tag keys
//!
//! | key    | meaning                                                      |
//! |--------|--------------------------------------------------------------|
//! | `path` | destination path, required; may be relative                  |
//! | `tmp`  | flag: resolve `path` under the system temp directory         |
//! | `cnt`  | initial content, defaults to empty                           |
//! | `prem` | numeric mode for created files/dirs; `0`/absent = [`MODE_ALL`] |
//!
//! # Example
//!
//! ```no_run
//! use tagfile::{init_file_handles, FileHandle};
//!
//! #[derive(Default)]
//! struct AppFiles {
//!     log: FileHandle,
//!     scratch: FileHandle,
//! }
//!
//! tagfile::tag_fields!(AppFiles: FileHandle {
//!     log: "path:logs/app.log;cnt:started",
//!     scratch: "path:scratch/buf.txt;tmp;prem:0600",
//! });
//!
//! fn main() -> Result<(), tagfile::FileError> {
//!     let mut files = AppFiles::default();
//!     init_file_handles(&mut files)?;
//!     assert_eq!(files.log.read()?, "started");
//!     Ok(())
//! }
//! ```
//!
//! Initialization is synchronous and sequential; concurrent initialization
//! over overlapping paths is unguarded. A failure mid-walk returns the error
//! and leaves earlier fields' files on disk.

mod error;
mod handle;
mod tag;

pub use error::FileError;
pub use handle::{FileHandle, MODE_ALL};
pub use tag::{
    init_file_handles, process_field, schema, validate_mode, KEY_CONTENT, KEY_MODE, KEY_PATH,
    KEY_TMP,
};

// The walk-layer surface a consumer needs: the macro that declares tagged
// fields, the trait it implements, and the error type it can surface.
pub use tagfile_walk::{tag_fields, FieldData, TaggedFields, WalkError};
