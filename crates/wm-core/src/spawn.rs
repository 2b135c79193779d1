use serde::Serialize;

use crate::geometry::{Direction, Vector};

/// A named location the avatar can be placed at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnPoint {
    /// Lookup key, e.g. `"main"`.
    pub name: String,
    /// Tile position.
    pub pos: Vector,
    /// Direction the avatar starts walking in after placement.
    pub auto_dir: Direction,
}

impl SpawnPoint {
    /// Create a spawn point that does not start the avatar walking.
    pub fn new(name: impl Into<String>, pos: Vector) -> Self {
        Self {
            name: name.into(),
            pos,
            auto_dir: Direction::None,
        }
    }
}
