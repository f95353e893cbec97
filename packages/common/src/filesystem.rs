use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

/// File system abstraction for theme loading and testing
pub trait FileSystem {
    /// Read a whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String, io::Error>;

    /// Canonicalize a path (resolve symlinks, make absolute)
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, io::Error>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, io::Error> {
        std::fs::read_to_string(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, io::Error> {
        std::fs::canonicalize(path)
    }
}

/// In-memory file system for testing
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(normalize(&path.into()), content.into());
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, io::Error> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, io::Error> {
        let normalized = normalize(path);
        if self.files.contains_key(&normalized) {
            Ok(normalized)
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        }
    }
}

/// Lexically resolve `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
