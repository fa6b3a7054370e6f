// src/filesystem.rs
//! Filesystem gateway.
//!
//! [`FileSystem`] answers existence, size and timestamp questions, creates and
//! removes directories, checks UTF-8 validity and lists files. It keeps no
//! state between calls: every operation asks the backend afresh.
//!
//! Operations that check a precondition and then act (create, remove, read,
//! list) are not atomic. Another process may change the path between the
//! check and the action. The action then runs against the new state and fails
//! with [`FileSystemError::OsFailure`] when that state no longer fits; in
//! particular `create_directory` never succeeds over a target that appeared
//! after the check.
//!
//! The free functions at the bottom of this module run against the host OS.

use std::path::Path;

use log::{debug, trace};
use tex_parser_infra::OsFileSystem;
use tex_parser_ports::filesystem::{FileSystemBackend, ObjectMeta};
use tex_parser_shared_kernel::{
    FileListing, FileSystemError, ModificationTime, ObjectKind, Operation, OsResultExt, Result,
};

use crate::options::ListOptions;

/// Stateless gateway over a [`FileSystemBackend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystem<B = OsFileSystem> {
    backend: B,
}

impl FileSystem<OsFileSystem> {
    /// Gateway over the host operating system.
    pub fn new() -> Self {
        Self { backend: OsFileSystem }
    }
}

impl<B: FileSystemBackend> FileSystem<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `true` if `path` is an existing regular file.
    pub fn is_file(&self, path: impl AsRef<Path>) -> bool {
        self.stat(path.as_ref()).is_some_and(|m| m.is_file())
    }

    /// `true` if `path` is an existing directory.
    pub fn is_directory(&self, path: impl AsRef<Path>) -> bool {
        self.stat(path.as_ref()).is_some_and(|m| m.is_directory())
    }

    /// `true` if anything at all exists at `path`.
    pub fn is_object(&self, path: impl AsRef<Path>) -> bool {
        self.stat(path.as_ref()).is_some()
    }

    /// Size of a regular file in bytes.
    ///
    /// # Errors
    /// [`FileSystemError::NotFound`] if `path` is not an existing regular file.
    pub fn get_file_size(&self, path: impl AsRef<Path>) -> Result<u64> {
        Ok(self.require(path.as_ref(), ObjectKind::File)?.len)
    }

    /// Create `path` together with any missing ancestors.
    ///
    /// # Errors
    /// [`FileSystemError::AlreadyExists`] if any object already sits at `path`,
    /// [`FileSystemError::OsFailure`] if the OS refuses to create it.
    pub fn create_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if self.is_object(path) {
            return Err(FileSystemError::already_exists(path));
        }
        debug!("creating directory {}", path.display());
        self.backend.create_dir(path).os_context(Operation::CreateDirectory, path)
    }

    /// Delete the directory at `path` and everything below it.
    ///
    /// # Errors
    /// [`FileSystemError::NotFound`] if `path` is not an existing directory,
    /// [`FileSystemError::OsFailure`] if the removal fails.
    pub fn remove_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.require(path, ObjectKind::Directory)?;
        debug!("removing directory tree {}", path.display());
        self.backend.remove_dir_all(path).os_context(Operation::RemoveDirectory, path)
    }

    /// Last modification time of a regular file, whole seconds, UTC.
    ///
    /// # Errors
    /// [`FileSystemError::NotFound`] if `path` is not an existing regular file,
    /// [`FileSystemError::OsFailure`] if the platform does not record one.
    pub fn get_modification_time(&self, path: impl AsRef<Path>) -> Result<ModificationTime> {
        let path = path.as_ref();
        let modified = self.require(path, ObjectKind::File)?.modified.ok_or_else(|| {
            let source = std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "modification time is not available on this platform",
            );
            FileSystemError::os_failure(Operation::ReadMetadata, path, source)
        })?;
        Ok(ModificationTime::from_system_time(modified))
    }

    /// Last modification time rendered as ISO-8601, e.g. `2023-04-20T14:13:20+00:00`.
    ///
    /// # Errors
    /// Same as [`FileSystem::get_modification_time`].
    pub fn get_file_timestamp(&self, path: impl AsRef<Path>) -> Result<String> {
        self.get_modification_time(path).map(|t| t.to_iso8601())
    }

    /// Whether the whole file decodes as UTF-8. Invalid content yields `Ok(false)`.
    ///
    /// The file is read into memory in full; there is no size cap.
    ///
    /// # Errors
    /// [`FileSystemError::NotFound`] if `path` is not an existing regular file,
    /// [`FileSystemError::OsFailure`] if it cannot be read.
    pub fn is_utf8_encoded(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        self.require(path, ObjectKind::File)?;
        let bytes = self.backend.read(path).os_context(Operation::ReadFile, path)?;
        match std::str::from_utf8(&bytes) {
            Ok(_) => Ok(true),
            Err(err) => {
                trace!("{} is not UTF-8: {err}", path.display());
                Ok(false)
            }
        }
    }

    /// Regular files in `path`, relative to it. With `include_subdirectories`
    /// the whole subtree is walked; directories themselves are never listed.
    ///
    /// # Errors
    /// [`FileSystemError::NotFound`] if `path` is not an existing directory,
    /// [`FileSystemError::OsFailure`] if it cannot be read.
    pub fn list_files(&self, path: impl AsRef<Path>, include_subdirectories: bool) -> Result<FileListing> {
        self.list_files_with(path, &ListOptions::new(include_subdirectories))
    }

    /// [`FileSystem::list_files`] with explicit [`ListOptions`].
    ///
    /// # Errors
    /// Same as [`FileSystem::list_files`].
    pub fn list_files_with(&self, path: impl AsRef<Path>, options: &ListOptions) -> Result<FileListing> {
        let path = path.as_ref();
        self.require(path, ObjectKind::Directory)?;
        let files = self
            .backend
            .list_files(path, &options.to_plan())
            .os_context(Operation::ListDirectory, path)?;
        trace!("listed {} file(s) in {}", files.len(), path.display());
        Ok(FileListing::new(files))
    }

    fn stat(&self, path: &Path) -> Option<ObjectMeta> {
        let meta = self.backend.stat(path);
        trace!("stat {}: {:?}", path.display(), meta.as_ref().map(|m| m.kind));
        meta
    }

    fn require(&self, path: &Path, expected: ObjectKind) -> Result<ObjectMeta> {
        match self.stat(path) {
            Some(meta) if meta.kind == expected => Ok(meta),
            _ => Err(FileSystemError::not_found(path, expected)),
        }
    }
}

/// [`FileSystem::is_file`] against the host OS.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    FileSystem::new().is_file(path)
}

/// [`FileSystem::is_directory`] against the host OS.
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    FileSystem::new().is_directory(path)
}

/// [`FileSystem::is_object`] against the host OS.
pub fn is_object(path: impl AsRef<Path>) -> bool {
    FileSystem::new().is_object(path)
}

/// [`FileSystem::get_file_size`] against the host OS.
///
/// # Errors
/// See [`FileSystem::get_file_size`].
pub fn get_file_size(path: impl AsRef<Path>) -> Result<u64> {
    FileSystem::new().get_file_size(path)
}

/// [`FileSystem::create_directory`] against the host OS.
///
/// # Errors
/// See [`FileSystem::create_directory`].
pub fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    FileSystem::new().create_directory(path)
}

/// [`FileSystem::remove_directory`] against the host OS.
///
/// # Errors
/// See [`FileSystem::remove_directory`].
pub fn remove_directory(path: impl AsRef<Path>) -> Result<()> {
    FileSystem::new().remove_directory(path)
}

/// [`FileSystem::get_file_timestamp`] against the host OS.
///
/// # Errors
/// See [`FileSystem::get_file_timestamp`].
pub fn get_file_timestamp(path: impl AsRef<Path>) -> Result<String> {
    FileSystem::new().get_file_timestamp(path)
}

/// [`FileSystem::is_utf8_encoded`] against the host OS.
///
/// # Errors
/// See [`FileSystem::is_utf8_encoded`].
pub fn is_utf8_encoded(path: impl AsRef<Path>) -> Result<bool> {
    FileSystem::new().is_utf8_encoded(path)
}

/// [`FileSystem::list_files`] against the host OS.
///
/// # Errors
/// See [`FileSystem::list_files`].
pub fn list_files(path: impl AsRef<Path>, include_subdirectories: bool) -> Result<FileListing> {
    FileSystem::new().list_files(path, include_subdirectories)
}
