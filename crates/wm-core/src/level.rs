use serde::Serialize;

use crate::geometry::Vector;

/// Title shown for levels whose metadata could not be read.
pub const DEFAULT_LEVEL_TITLE: &str = "<no title>";
/// Sprite used for level dots that do not name one.
pub const DEFAULT_LEVEL_SPRITE: &str = "images/worldmap/common/leveldot.sprite";
/// Directory value meaning "relative to the filesystem root".
pub const CURRENT_DIR: &str = "./";

/// A selectable level, stored in its own file, placed on the map.
#[derive(Debug, Clone, Serialize)]
pub struct LevelTile {
    /// Tile position.
    pub pos: Vector,
    /// Directory of the worldmap that references this level.
    pub basedir: String,
    /// Level file name, relative to `basedir`.
    pub name: String,
    /// Display title, filled in from the level file when available.
    pub title: String,
    /// Target completion time in seconds, 0 when unknown.
    pub target_time: f32,
    /// Enter the level as soon as the avatar steps on it.
    pub auto_play: bool,
    /// Sprite for the level dot.
    pub sprite: String,
    /// Script run after the level is left.
    pub extro_script: Option<String>,
    /// Whether the level has been finished.
    pub solved: bool,
    /// Whether the level has been finished with every collectible.
    pub perfect: bool,
}

impl LevelTile {
    /// Create a level reference with default metadata.
    pub fn new(basedir: impl Into<String>, name: impl Into<String>, pos: Vector) -> Self {
        Self {
            pos,
            basedir: basedir.into(),
            name: name.into(),
            title: DEFAULT_LEVEL_TITLE.to_string(),
            target_time: 0.0,
            auto_play: false,
            sprite: DEFAULT_LEVEL_SPRITE.to_string(),
            extro_script: None,
            solved: false,
            perfect: false,
        }
    }

    /// Path of the level file on the virtual filesystem.
    ///
    /// When the worldmap lives at the filesystem root the bare name is used.
    pub fn level_path(&self) -> String {
        if self.basedir == CURRENT_DIR {
            self.name.clone()
        } else {
            format!("{}{}", self.basedir, self.name)
        }
    }

    /// Forget metadata read from the level file: the title becomes
    /// `placeholder` and the target time zero.
    pub fn reset_metadata(&mut self, placeholder: &str) {
        self.title = placeholder.to_string();
        self.target_time = 0.0;
    }
}
