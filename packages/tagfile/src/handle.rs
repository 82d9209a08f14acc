//! The file handle entity: path derivation, directory creation, and I/O.

use std::env;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Component, Path, PathBuf};

use crate::error::FileError;

/// Permission bits applied when a declaration leaves the mode unset (or
/// spells it `0`): all read/write/execute bits, i.e. no restriction.
pub const MODE_ALL: u32 = 0o777;

/// One file on disk, identified by its full path.
///
/// `full_path` is authoritative. `dir` (the containing directory) and `name`
/// (the final path segment) are re-derived from it on construction and can
/// never be supplied independently, so the three can not disagree.
///
/// A handle has plain value semantics: the struct field that declared it owns
/// it exclusively, and dropping it does nothing to the file. Deletion is only
/// ever the explicit [`remove`](FileHandle::remove) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileHandle {
    full_path: PathBuf,
    dir: PathBuf,
    name: String,
}

impl FileHandle {
    /// Create a handle at `full_path`: derive the path components, create the
    /// directory chain with `mode` if it does not exist yet, then write
    /// `content` (truncating any previous contents - the file always ends up
    /// holding exactly `content`, pre-existing or not).
    ///
    /// Any directory-creation or write failure aborts construction; no
    /// partial handle is returned and nothing already created is cleaned up.
    pub fn create(
        full_path: impl Into<PathBuf>,
        content: &str,
        mode: u32,
    ) -> Result<Self, FileError> {
        let handle = Self::split_path(full_path.into());

        if !handle.dir_exists()? {
            handle.create_dir(mode)?;
        }
        handle.write(content, mode)?;

        Ok(handle)
    }

    /// Like [`create`](FileHandle::create), with `rel_path` first joined
    /// under the process-wide temporary directory. Everything else is shared.
    ///
    /// The declared path is always nested under the temp root, never used
    /// verbatim: a root component on `rel_path` is stripped before joining,
    /// since `PathBuf::join` would otherwise replace the base outright.
    pub fn create_temp(
        rel_path: impl AsRef<Path>,
        content: &str,
        mode: u32,
    ) -> Result<Self, FileError> {
        let rel: PathBuf = rel_path
            .as_ref()
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        Self::create(env::temp_dir().join(rel), content, mode)
    }

    /// Dispatch between [`create`](FileHandle::create) and
    /// [`create_temp`](FileHandle::create_temp).
    pub(crate) fn create_at(
        path: &str,
        content: &str,
        mode: u32,
        in_temp: bool,
    ) -> Result<Self, FileError> {
        if in_temp {
            Self::create_temp(path, content, mode)
        } else {
            Self::create(path, content, mode)
        }
    }

    /// Derive `dir` and `name` from `full_path`. Pure, no I/O.
    fn split_path(full_path: PathBuf) -> Self {
        let dir = full_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        FileHandle {
            full_path,
            dir,
            name,
        }
    }

    /// The authoritative path the handle was created from.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// The containing directory, as derived from the full path. Empty when
    /// the full path has no directory component.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file's base name, as derived from the full path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `dir` currently exists. Not-found is `Ok(false)`; any other
    /// stat failure is surfaced, not swallowed.
    fn dir_exists(&self) -> Result<bool, FileError> {
        if self.dir.as_os_str().is_empty() {
            // No directory component: the file lands in the current
            // directory, which exists.
            return Ok(true);
        }

        match fs::metadata(&self.dir) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(FileError::Stat {
                path: self.dir.clone(),
                source,
            }),
        }
    }

    /// Create `dir` and all missing ancestors with `mode`.
    fn create_dir(&self, mode: u32) -> Result<(), FileError> {
        log::debug!("creating directory chain {}", self.dir.display());

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        builder.create(&self.dir).map_err(|source| FileError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }

    /// Open the file for create/write/truncate with `mode` and write
    /// `content` in full. Calling this twice with the same content leaves the
    /// file holding that content once; nothing is appended.
    ///
    /// `mode` is applied only when the open creates the file, and only on
    /// unix; elsewhere it is accepted and ignored.
    pub fn write(&self, content: &str, mode: u32) -> Result<(), FileError> {
        log::debug!(
            "writing {} bytes to {}",
            content.len(),
            self.full_path.display()
        );

        let mut options = fs::OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(&self.full_path).map_err(|source| FileError::Open {
            path: self.full_path.clone(),
            source,
        })?;

        file.write_all(content.as_bytes())
            .map_err(|source| FileError::Write {
                path: self.full_path.clone(),
                source,
            })
    }

    /// Read the whole file as a string. Not-found is an error here.
    pub fn read(&self) -> Result<String, FileError> {
        fs::read_to_string(&self.full_path).map_err(|source| FileError::Read {
            path: self.full_path.clone(),
            source,
        })
    }

    /// Delete the file. The underlying OS error (not-found, permission
    /// denied, ...) is propagated unwrapped.
    pub fn remove(&self) -> io::Result<()> {
        log::debug!("removing {}", self.full_path.display());
        fs::remove_file(&self.full_path)
    }
}
