// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::value_objects::ObjectKind;

/// Root error type for every fallible filesystem operation.
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// Nothing exists at `path`, or the object there is not of the `expected` kind.
    #[error("{expected} not found: '{path}'")]
    NotFound { path: PathBuf, expected: ObjectKind },

    /// A creation target is already occupied by some filesystem object.
    #[error("file system object already exists: '{path}'")]
    AlreadyExists { path: PathBuf },

    /// The underlying OS call failed; the original error is kept as the source.
    #[error("failed to {operation} '{path}': {source}")]
    OsFailure {
        operation: Operation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FileSystemError>;

/// Coarse classification of [`FileSystemError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    OsFailure,
}

/// OS-level action that was being attempted when an [`FileSystemError::OsFailure`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateDirectory,
    RemoveDirectory,
    ReadFile,
    ReadMetadata,
    ListDirectory,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::CreateDirectory => "create directory",
            Self::RemoveDirectory => "remove directory",
            Self::ReadFile => "read file",
            Self::ReadMetadata => "read metadata of",
            Self::ListDirectory => "list directory",
        };
        f.write_str(verb)
    }
}

impl FileSystemError {
    pub fn not_found(path: impl Into<PathBuf>, expected: ObjectKind) -> Self {
        Self::NotFound { path: path.into(), expected }
    }

    pub fn already_exists(path: impl Into<PathBuf>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    pub fn os_failure(operation: Operation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OsFailure { operation, path: path.into(), source }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::OsFailure { .. } => ErrorKind::OsFailure,
        }
    }

    /// Path the failing operation was applied to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. } | Self::AlreadyExists { path } | Self::OsFailure { path, .. } => path,
        }
    }
}

/// Extension trait for tagging raw `io::Result`s coming out of a backend.
pub trait OsResultExt<T> {
    fn os_context(self, operation: Operation, path: &std::path::Path) -> Result<T>;
}

impl<T> OsResultExt<T> for std::io::Result<T> {
    fn os_context(self, operation: Operation, path: &std::path::Path) -> Result<T> {
        self.map_err(|source| FileSystemError::os_failure(operation, path, source))
    }
}
