//! # tex_parser
//!
//! Input acquisition for TeX/LaTeX tooling. The [`filesystem`] module is the
//! gateway every consumer goes through to inspect, validate and enumerate
//! source files on disk.

// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod options;
pub mod version;

pub use filesystem::FileSystem;
pub use options::{ListOptions, ListOptionsBuilder};
pub use tex_parser_ports::filesystem::{FileSystemBackend, ListingPlan, ObjectMeta};
pub use tex_parser_shared_kernel::{
    ErrorKind, FileListing, FileSystemError, ModificationTime, ObjectKind, Operation, Result,
};
pub use version::VERSION;
