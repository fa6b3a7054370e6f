// crates/ports/src/filesystem.rs
use std::{
    io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use serde::{Deserialize, Serialize};
use tex_parser_shared_kernel::ObjectKind;

/// Result of a single `stat` against the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMeta {
    pub kind: ObjectKind,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl ObjectMeta {
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }
}

impl From<std::fs::Metadata> for ObjectMeta {
    fn from(meta: std::fs::Metadata) -> Self {
        Self { kind: meta.file_type().into(), len: meta.len(), modified: meta.modified().ok() }
    }
}

/// Input parameters controlling a directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPlan {
    /// Walk the whole subtree instead of the immediate children only.
    pub recursive: bool,
    /// Descend into symlinked directories during a recursive walk.
    pub follow_links: bool,
    /// Deepest level (1 = immediate children) a recursive walk may reach.
    pub max_depth: Option<usize>,
}

/// Port for raw filesystem primitives.
///
/// Implementations do no precondition checks of their own; they report
/// exactly what the OS reports.
pub trait FileSystemBackend: Send + Sync {
    /// Metadata of whatever lives at `path`, following symlinks. `None` when
    /// nothing does (or it cannot be inspected).
    fn stat(&self, path: &Path) -> Option<ObjectMeta>;

    /// Create every missing ancestor of `path`, then `path` itself. Fails with
    /// `io::ErrorKind::AlreadyExists` when `path` is already occupied.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Delete `path` and everything below it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read the whole file into memory.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Regular files under `root`, as paths relative to `root`.
    fn list_files(&self, root: &Path, plan: &ListingPlan) -> io::Result<Vec<PathBuf>>;
}

impl<T: FileSystemBackend + ?Sized> FileSystemBackend for &T {
    fn stat(&self, path: &Path) -> Option<ObjectMeta> {
        (**self).stat(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn list_files(&self, root: &Path, plan: &ListingPlan) -> io::Result<Vec<PathBuf>> {
        (**self).list_files(root, plan)
    }
}
