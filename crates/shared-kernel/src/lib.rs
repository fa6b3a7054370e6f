// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorKind, FileSystemError, Operation, OsResultExt, Result};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{FileListing, FilePath, ModificationTime, ObjectKind};
