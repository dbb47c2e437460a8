//! Upload storage: a single writable directory of client files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Handle to the upload directory.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open the storage rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist an uploaded file under its client-supplied name (reduced to
    /// its final path component) and return the stored path.
    ///
    /// Two concurrent uploads with the same name race on one path; the
    /// service does not serialize them.
    pub fn save_upload(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.root.join(sanitize_filename(filename));
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Strip any directory components from a client-supplied file name.
fn sanitize_filename(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .unwrap_or("upload.csv")
        .to_string()
}
