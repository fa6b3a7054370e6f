//! On-disk fixture trees.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Latin-1 encoded text: `0xE9` on its own is not a valid UTF-8 sequence.
pub const NON_UTF8_BYTES: &[u8] = b"caf\xE9 cr\xE8me br\xFBl\xE9e\n";

/// Scratch directory seeded with files, removed on drop.
#[allow(dead_code)]
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("tex_parser_test").tempdir().unwrap() }
    }

    /// A tree shaped like a small LaTeX project:
    ///
    /// ```text
    /// top_level_text_file.txt
    /// tex/latex2e_example.tex
    /// tex/latex2e_example_non_utf8.tex
    /// tex/latex209_example.tex
    /// txt/text_file.txt            ("test data", 9 bytes)
    /// txt/non_utf8_sample.txt
    /// ```
    pub fn latex_project() -> Self {
        let ws = Self::new();
        ws.write("top_level_text_file.txt", "top level\n");
        ws.write(
            "tex/latex2e_example.tex",
            "\\documentclass{article}\n\\begin{document}\nH\u{e9}llo \u{2014} \u{3b1}\n\\end{document}\n",
        );
        ws.write_bytes("tex/latex2e_example_non_utf8.tex", b"\\documentclass{article}\n\xE9t\xE9\n");
        ws.write("tex/latex209_example.tex", "\\documentstyle{article}\n\\begin{document}\n\\end{document}\n");
        ws.write("txt/text_file.txt", "test data");
        ws.write_bytes("txt/non_utf8_sample.txt", NON_UTF8_BYTES);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        self.write_bytes(rel, contents.as_bytes())
    }

    pub fn write_bytes(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

/// Relative path built from `/`-separated components, using the platform separator.
#[allow(dead_code)]
pub fn rel(path: &str) -> PathBuf {
    path.split('/').collect()
}
