use std::sync::Arc;

use wm_core::{Tileset, WorldMap};
use wm_reader::{DocResult, Entry};

use crate::config::LoaderConfig;
use crate::tileset::TileManager;
use crate::translations::TranslationDirs;
use crate::vfs::FileSystem;
use crate::warnings::Warnings;

/// State of one load pass: the map under construction plus the services it
/// is built with.
pub(crate) struct LoadSession<'a> {
    pub fs: &'a dyn FileSystem,
    pub tiles: &'a mut TileManager,
    pub translations: &'a mut TranslationDirs,
    pub config: &'a LoaderConfig,
    pub warnings: Warnings,
    pub map: WorldMap,
}

impl<'a> LoadSession<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        tiles: &'a mut TileManager,
        translations: &'a mut TranslationDirs,
        config: &'a LoaderConfig,
        map: WorldMap,
    ) -> Self {
        Self {
            fs,
            tiles,
            translations,
            config,
            warnings: Warnings::new(),
            map,
        }
    }

    /// Handle a `tileset` entry. The first one resolves; later ones only warn.
    pub fn declare_tileset(&mut self, entry: &Entry<'_>) -> DocResult<()> {
        let name = entry.get::<String>()?;
        if self.map.meta.tileset.is_some() {
            self.warnings
                .warn(entry.span(), "multiple tilesets specified in level");
            return Ok(());
        }
        self.map.meta.tileset = Some(self.tiles.get_tileset(&name));
        Ok(())
    }

    /// The map's tileset, resolving the configured default if none was declared.
    pub fn tileset(&mut self) -> Arc<Tileset> {
        if let Some(tileset) = &self.map.meta.tileset {
            return Arc::clone(tileset);
        }
        let tileset = self.tiles.get_tileset(&self.config.default_tileset);
        self.map.meta.tileset = Some(Arc::clone(&tileset));
        tileset
    }
}
