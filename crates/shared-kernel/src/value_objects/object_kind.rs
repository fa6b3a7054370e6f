// crates/shared-kernel/src/value_objects/object_kind.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of object found at a filesystem path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Regular file holding byte content.
    File,
    Directory,
    /// Anything else the OS reports (sockets, device nodes, fifos, ...).
    Other,
}

impl ObjectKind {
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl From<std::fs::FileType> for ObjectKind {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_file() {
            Self::File
        } else if ft.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
            Self::Other => f.write_str("file system object"),
        }
    }
}
