use std::{fs::File, io::Read, path::Path};

/// Whole-file reads with scoped handle ownership.
///
/// The `File` lives only inside each call and is closed on drop, whichever
/// way the call returns.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let capacity = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
        let mut buf = Vec::with_capacity(capacity);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
