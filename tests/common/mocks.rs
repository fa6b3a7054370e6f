#![allow(dead_code)]
// tests/common/mocks.rs
//! In-memory backend that records every call and can be told to fail.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use tex_parser::{FileSystemBackend, ListingPlan, ObjectKind, ObjectMeta};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Stat(PathBuf),
    CreateDir(PathBuf),
    RemoveDirAll(PathBuf),
    Read(PathBuf),
    ListFiles(PathBuf, ListingPlan),
}

#[derive(Clone, Default)]
pub struct MockBackend {
    objects: HashMap<PathBuf, ObjectMeta>,
    contents: HashMap<PathBuf, Vec<u8>>,
    listing: Vec<PathBuf>,
    hidden: Vec<PathBuf>,
    failure: Option<io::ErrorKind>,
    calls: Arc<Mutex<Vec<BackendCall>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, contents: &[u8], mtime_secs: u64) -> Self {
        let meta = ObjectMeta {
            kind: ObjectKind::File,
            len: contents.len() as u64,
            modified: Some(UNIX_EPOCH + Duration::from_secs(mtime_secs)),
        };
        self.objects.insert(PathBuf::from(path), meta);
        self.contents.insert(PathBuf::from(path), contents.to_vec());
        self
    }

    pub fn with_untimed_file(mut self, path: &str) -> Self {
        let meta = ObjectMeta { kind: ObjectKind::File, len: 0, modified: None };
        self.objects.insert(PathBuf::from(path), meta);
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        let meta = ObjectMeta { kind: ObjectKind::Directory, len: 0, modified: Some(SystemTime::now()) };
        self.objects.insert(PathBuf::from(path), meta);
        self
    }

    pub fn with_listing(mut self, entries: &[&str]) -> Self {
        self.listing = entries.iter().map(PathBuf::from).collect();
        self
    }

    /// `path` is invisible to `stat` but occupied when the backend tries to
    /// create it, as if another process made it in between.
    pub fn with_appearing_dir(mut self, path: &str) -> Self {
        self.hidden.push(PathBuf::from(path));
        self
    }

    /// Every mutating or reading call fails with `kind`; `stat` keeps working.
    pub fn failing_with(mut self, kind: io::ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome(&self) -> io::Result<()> {
        match self.failure {
            Some(kind) => Err(io::Error::new(kind, "mock failure")),
            None => Ok(()),
        }
    }
}

impl FileSystemBackend for MockBackend {
    fn stat(&self, path: &Path) -> Option<ObjectMeta> {
        self.record(BackendCall::Stat(path.to_path_buf()));
        self.objects.get(path).cloned()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.record(BackendCall::CreateDir(path.to_path_buf()));
        if self.hidden.iter().any(|p| p == path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "mock: target appeared"));
        }
        self.outcome()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        self.record(BackendCall::RemoveDirAll(path.to_path_buf()));
        self.outcome()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.record(BackendCall::Read(path.to_path_buf()));
        self.outcome()?;
        Ok(self.contents.get(path).cloned().unwrap_or_default())
    }

    fn list_files(&self, root: &Path, plan: &ListingPlan) -> io::Result<Vec<PathBuf>> {
        self.record(BackendCall::ListFiles(root.to_path_buf(), plan.clone()));
        self.outcome()?;
        Ok(self.listing.clone())
    }
}
