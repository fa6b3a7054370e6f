use std::path::{Path, PathBuf};

/// Express `path` relative to `root`, without touching the filesystem.
///
/// Returns `None` when `path` does not live under `root`, or when it is `root` itself.
pub fn relative_to(path: &Path, root: &Path) -> Option<PathBuf> {
    let rel = path.strip_prefix(root).ok()?;
    if rel.as_os_str().is_empty() { None } else { Some(rel.to_path_buf()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_root_prefix() {
        let rel = relative_to(Path::new("fixtures/tex/a.tex"), Path::new("fixtures"));
        assert_eq!(rel, Some(PathBuf::from("tex/a.tex")));
    }

    #[test]
    fn root_itself_and_foreign_paths_are_rejected() {
        assert_eq!(relative_to(Path::new("fixtures"), Path::new("fixtures")), None);
        assert_eq!(relative_to(Path::new("other/a.tex"), Path::new("fixtures")), None);
    }
}
