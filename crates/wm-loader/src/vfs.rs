use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::error::VfsError;

/// Read access to game data addressed by `/`-separated virtual paths.
pub trait FileSystem {
    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Whether `path` names a directory.
    fn is_directory(&self, path: &str) -> bool;

    /// Read the whole file at `path` as text.
    fn read_to_string(&self, path: &str) -> Result<String, VfsError>;
}

/// Directory part of a virtual path, including the trailing `/`.
///
/// A path without any `/` lives in the current directory, `"./"`.
pub fn dirname(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..=idx].to_string(),
        None => "./".to_string(),
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// A filesystem held entirely in memory. Directories exist implicitly for
/// every prefix of a stored file path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, String>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a file, replacing any previous content.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(normalize(&path.into()), content.into());
    }

    /// Builder form of [`MemoryFs::insert`].
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(&normalize(path)) || self.is_directory(path)
    }

    fn is_directory(&self, path: &str) -> bool {
        let dir = normalize(path);
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir.trim_end_matches('/'))
        };
        self.files.keys().any(|f| f.starts_with(&prefix) && f.len() > prefix.len())
    }

    fn read_to_string(&self, path: &str) -> Result<String, VfsError> {
        match self.files.get(&normalize(path)) {
            Some(content) => Ok(content.clone()),
            None if self.is_directory(path) => Err(VfsError::IsDirectory(path.to_string())),
            None => Err(VfsError::NotFound(path.to_string())),
        }
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches("./").trim_start_matches('/').to_string()
}

// ---------------------------------------------------------------------------
// On disk
// ---------------------------------------------------------------------------

/// A filesystem rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The physical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, VfsError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            return Err(VfsError::OutsideRoot(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl FileSystem for DiskFs {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.exists())
    }

    fn is_directory(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_dir())
    }

    fn read_to_string(&self, path: &str) -> Result<String, VfsError> {
        let physical = self.resolve(path)?;
        if physical.is_dir() {
            return Err(VfsError::IsDirectory(path.to_string()));
        }
        if !physical.exists() {
            return Err(VfsError::NotFound(path.to_string()));
        }
        std::fs::read_to_string(&physical).map_err(|source| VfsError::Io {
            path: path.to_string(),
            source,
        })
    }
}
