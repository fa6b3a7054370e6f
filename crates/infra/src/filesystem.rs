// crates/infra/src/filesystem.rs
use std::{
    io,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;
use log::{trace, warn};
use tex_parser_ports::filesystem::{FileSystemBackend, ListingPlan, ObjectMeta};
use tex_parser_shared_kernel::path::relative_to;

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileSystemBackend` port on top of the host OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystemBackend for OsFileSystem {
    fn stat(&self, path: &Path) -> Option<ObjectMeta> {
        std::fs::metadata(path).ok().map(ObjectMeta::from)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        // The target itself must be new, even if it appeared after the caller's check.
        std::fs::create_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        FileReader::read_to_end(path)
    }

    fn list_files(&self, root: &Path, plan: &ListingPlan) -> io::Result<Vec<PathBuf>> {
        if plan.recursive { walk_files(root, plan) } else { immediate_files(root) }
    }
}

// A symlink counts as a regular file when its target is one, matching `stat`.
fn is_regular_file(path: &Path, file_type: Option<std::fs::FileType>) -> bool {
    match file_type {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => std::fs::metadata(path).is_ok_and(|m| m.is_file()),
        _ => false,
    }
}

fn immediate_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if is_regular_file(&path, entry.file_type().ok()) {
            files.push(PathBuf::from(entry.file_name()));
        }
    }
    Ok(files)
}

fn walk_files(root: &Path, plan: &ListingPlan) -> io::Result<Vec<PathBuf>> {
    // The walker swallows a failure to open the root into its error stream;
    // probe it up front so that case reaches the caller.
    drop(std::fs::read_dir(root)?);

    let mut builder = WalkBuilder::new(root);
    // No hidden/gitignore pruning: every file under the root is reported.
    builder.standard_filters(false).follow_links(plan.follow_links).max_depth(plan.max_depth);

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        if entry.depth() == 0 || !is_regular_file(entry.path(), entry.file_type()) {
            continue;
        }
        if let Some(rel) = relative_to(entry.path(), root) {
            files.push(rel);
        }
    }
    trace!("walked {}: {} file(s)", root.display(), files.len());
    Ok(files)
}
