use wm_core::level::DEFAULT_LEVEL_TITLE;

/// Root object name every map and level document must carry.
pub const ROOT_TAG: &str = "supertux-level";

/// Tileset used when a map does not declare one.
pub const DEFAULT_TILESET: &str = "images/worldmap.strf";

/// Spawn point the avatar is placed on after loading.
pub const DEFAULT_SPAWN_POINT: &str = "main";

/// Configuration for a [`WorldMapLoader`](crate::WorldMapLoader).
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Required root object name for maps and level files.
    pub root_tag: String,
    /// Tileset resolved when the map declares none.
    pub default_tileset: String,
    /// Spawn point used for the initial avatar placement.
    pub spawn_point: String,
    /// Title given to level references whose metadata cannot be read.
    pub default_level_title: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root_tag: ROOT_TAG.to_string(),
            default_tileset: DEFAULT_TILESET.to_string(),
            spawn_point: DEFAULT_SPAWN_POINT.to_string(),
            default_level_title: DEFAULT_LEVEL_TITLE.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Set the required root object name.
    pub fn with_root_tag(mut self, tag: impl Into<String>) -> Self {
        self.root_tag = tag.into();
        self
    }

    /// Set the fallback tileset.
    pub fn with_default_tileset(mut self, name: impl Into<String>) -> Self {
        self.default_tileset = name.into();
        self
    }

    /// Set the spawn point for the initial placement.
    pub fn with_spawn_point(mut self, name: impl Into<String>) -> Self {
        self.spawn_point = name.into();
        self
    }

    /// Set the title used for levels without readable metadata.
    pub fn with_default_level_title(mut self, title: impl Into<String>) -> Self {
        self.default_level_title = title.into();
        self
    }
}
