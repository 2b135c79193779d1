use std::collections::BTreeSet;

use crate::vfs;

/// Directories registered for translation lookups.
///
/// Registering a file records its containing directory; catalogs themselves
/// are not loaded here.
#[derive(Debug, Clone, Default)]
pub struct TranslationDirs {
    dirs: BTreeSet<String>,
}

impl TranslationDirs {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the directory containing `file`. Returns `false` if it was
    /// already registered.
    pub fn register_file(&mut self, file: &str) -> bool {
        let dir = vfs::dirname(file);
        let added = self.dirs.insert(dir.clone());
        if added {
            tracing::debug!(dir = %dir, "registered translation directory");
        }
        added
    }

    /// Whether `dir` is registered.
    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.contains(dir)
    }

    /// Registered directories in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }
}
