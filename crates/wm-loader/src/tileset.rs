use std::collections::HashMap;
use std::sync::Arc;

use wm_core::Tileset;

/// Cache of tilesets by name. Every lookup of the same name returns the
/// same shared instance.
#[derive(Debug, Default)]
pub struct TileManager {
    tilesets: HashMap<String, Arc<Tileset>>,
}

impl TileManager {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tileset called `name`, creating it on first use.
    pub fn get_tileset(&mut self, name: &str) -> Arc<Tileset> {
        if let Some(tileset) = self.tilesets.get(name) {
            return Arc::clone(tileset);
        }
        tracing::debug!(tileset = name, "loading tileset");
        let tileset = Arc::new(Tileset::new(name));
        self.tilesets.insert(name.to_string(), Arc::clone(&tileset));
        tileset
    }

    /// Number of distinct tilesets loaded so far.
    pub fn len(&self) -> usize {
        self.tilesets.len()
    }

    /// Whether no tileset has been loaded.
    pub fn is_empty(&self) -> bool {
        self.tilesets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_instance() {
        let mut tm = TileManager::new();
        let a = tm.get_tileset("images/worldmap.strf");
        let b = tm.get_tileset("images/worldmap.strf");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(tm.len(), 1);
    }

    #[test]
    fn different_names_different_instances() {
        let mut tm = TileManager::new();
        let a = tm.get_tileset("images/worldmap.strf");
        let b = tm.get_tileset("images/ice.strf");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(b.name, "images/ice.strf");
        assert_eq!(tm.len(), 2);
    }
}
