// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod file_listing;
pub mod object_kind;

pub use file_info::{FilePath, ModificationTime};
pub use file_listing::FileListing;
pub use object_kind::ObjectKind;
