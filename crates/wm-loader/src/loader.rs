use wm_core::{WorldMap, WorldMapMeta};
use wm_reader::{Diagnostic, Document};

use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadFailure};
use crate::session::LoadSession;
use crate::tileset::TileManager;
use crate::translations::TranslationDirs;
use crate::vfs::{self, FileSystem};

/// Outcome of a successful load.
#[derive(Debug)]
pub struct LoadResult {
    /// The populated map, avatar already placed.
    pub map: WorldMap,
    /// Recoverable problems met along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadResult {
    /// Whether the load produced any warning.
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Loads worldmap documents from a virtual filesystem.
///
/// The loader owns its tileset cache and translation registry, so loading
/// several maps through one loader shares tilesets between them.
#[derive(Debug)]
pub struct WorldMapLoader<F> {
    fs: F,
    tiles: TileManager,
    translations: TranslationDirs,
    config: LoaderConfig,
}

impl<F: FileSystem> WorldMapLoader<F> {
    /// Create a loader with the default configuration.
    pub fn new(fs: F) -> Self {
        Self::with_config(fs, LoaderConfig::default())
    }

    /// Create a loader with a custom configuration.
    pub fn with_config(fs: F, config: LoaderConfig) -> Self {
        Self {
            fs,
            tiles: TileManager::new(),
            translations: TranslationDirs::new(),
            config,
        }
    }

    /// The filesystem maps are read from.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// The loader's configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Tilesets resolved so far.
    pub fn tile_manager(&self) -> &TileManager {
        &self.tiles
    }

    /// Directories registered for translations so far.
    pub fn translation_dirs(&self) -> &TranslationDirs {
        &self.translations
    }

    /// Load the worldmap at `path`.
    ///
    /// Any fatal problem is reported once, as a [`LoadError`] naming `path`.
    /// Everything recoverable ends up in [`LoadResult::diagnostics`].
    pub fn load(&mut self, path: &str) -> Result<LoadResult, LoadError> {
        tracing::debug!(path, "loading worldmap");
        let meta = WorldMapMeta {
            map_filename: path.to_string(),
            levels_path: vfs::dirname(path),
            ..WorldMapMeta::default()
        };
        let mut session = LoadSession::new(
            &self.fs,
            &mut self.tiles,
            &mut self.translations,
            &self.config,
            WorldMap::new(meta),
        );

        match session.load_worldmap(path) {
            Ok(()) => {
                let map = session.map;
                tracing::debug!(
                    path,
                    objects = map.object_count(),
                    spawn_points = map.spawn_points().len(),
                    warnings = session.warnings.len(),
                    "worldmap loaded"
                );
                Ok(LoadResult {
                    map,
                    diagnostics: session.warnings.into_diagnostics(),
                })
            }
            Err(source) => Err(LoadError {
                path: path.to_string(),
                source: Box::new(source),
            }),
        }
    }
}

impl LoadSession<'_> {
    fn load_worldmap(&mut self, path: &str) -> Result<(), LoadFailure> {
        self.translations.register_file(path);

        let source = self.fs.read_to_string(path)?;
        let doc = Document::parse(&source)?;
        if doc.root_name() != self.config.root_tag {
            return Err(LoadFailure::NotALevel {
                expected: self.config.root_tag.clone(),
                span: doc.span(),
            });
        }
        let root = doc.root_mapping()?;

        if let Some(name) = root.get::<String>("name")? {
            self.map.meta.name = name;
        }
        for entry in root.find_all("tileset") {
            self.declare_tileset(entry)?;
        }
        let tileset = self.tileset();
        tracing::debug!(tileset = %tileset.name, "tileset resolved");

        let sector = root.get_mapping("sector")?.ok_or(LoadFailure::NoSector)?;
        self.assemble_sector(&sector)?;

        self.map.update_game_objects();
        if self.map.solid_tilemaps().is_empty() {
            return Err(LoadFailure::NoSolidTilemap);
        }

        self.map.move_to_spawnpoint(&self.config.spawn_point)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryFs;

    const MAP: &str = r#"
(supertux-level
  (name (_ "Icy Island"))
  (sector
    (tilemap (solid #t) (width 2) (height 1) (tiles 1 2))
    (worldmap-spawnpoint (name "main") (x 1) (y 0) (auto-dir "east"))))
"#;

    #[test]
    fn loads_minimal_map() {
        let fs = MemoryFs::new().with_file("levels/world1/worldmap.stwm", MAP);
        let mut loader = WorldMapLoader::new(fs);
        let result = loader.load("levels/world1/worldmap.stwm").unwrap();
        assert_eq!(result.map.meta.name, "Icy Island");
        assert_eq!(result.map.meta.levels_path, "levels/world1/");
        assert_eq!(result.map.tux.spawn_point.as_deref(), Some("main"));
        assert!(!result.has_warnings());
        assert!(loader.translation_dirs().contains("levels/world1/"));
        assert_eq!(loader.tile_manager().len(), 1);
    }

    #[test]
    fn missing_file_is_fatal() {
        let mut loader = WorldMapLoader::new(MemoryFs::new());
        let err = loader.load("nowhere.stwm").unwrap_err();
        assert!(matches!(*err.source, LoadFailure::Read(_)));
        assert_eq!(
            err.to_string(),
            "Problem when parsing worldmap 'nowhere.stwm': file 'nowhere.stwm' does not exist"
        );
    }

    #[test]
    fn custom_spawn_point() {
        let fs = MemoryFs::new().with_file("w.stwm", MAP);
        let config = LoaderConfig::default().with_spawn_point("harbor");
        let mut loader = WorldMapLoader::with_config(fs, config);
        let err = loader.load("w.stwm").unwrap_err();
        insta::assert_snapshot!(
            err,
            @"Problem when parsing worldmap 'w.stwm': spawnpoint 'harbor' not found"
        );
    }

    #[test]
    fn tilesets_shared_across_loads() {
        let fs = MemoryFs::new().with_file("a.stwm", MAP).with_file("b.stwm", MAP);
        let mut loader = WorldMapLoader::new(fs);
        let a = loader.load("a.stwm").unwrap();
        let b = loader.load("b.stwm").unwrap();
        let (Some(ta), Some(tb)) = (&a.map.meta.tileset, &b.map.meta.tileset) else {
            panic!("tileset not resolved");
        };
        assert!(std::sync::Arc::ptr_eq(ta, tb));
    }
}
