// crates/shared-kernel/src/value_objects/file_listing.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::FilePath;

/// Regular files found under a directory, each relative to that directory.
///
/// Entries are kept sorted and free of duplicates so two listings of an
/// unchanged tree compare equal. A listing is a snapshot: it is never
/// refreshed after being returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileListing(Vec<FilePath>);

impl FileListing {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut entries: Vec<FilePath> = paths.into_iter().map(FilePath::from).collect();
        entries.sort();
        entries.dedup();
        Self(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.0.binary_search_by(|p| p.as_path().cmp(path.as_ref())).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(FilePath::as_path)
    }

    /// Lossy string form of each entry, using the platform separator.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|p| p.to_string_lossy().into_owned()).collect()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.0.into_iter().map(FilePath::into_path_buf).collect()
    }
}

impl FromIterator<PathBuf> for FileListing {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for FileListing {
    type Item = PathBuf;
    type IntoIter = std::iter::Map<std::vec::IntoIter<FilePath>, fn(FilePath) -> PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().map(FilePath::into_path_buf as fn(FilePath) -> PathBuf)
    }
}
