use serde::Serialize;

use crate::geometry::{Direction, Vector};

/// A tile that shows a message, runs a script, or stops the avatar.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialTile {
    /// Tile position.
    pub pos: Vector,
    /// Message shown while the avatar stands here.
    pub map_message: Option<String>,
    /// Show the message without stopping the avatar.
    pub passive_message: bool,
    /// Script run when the tile is entered.
    pub script: Option<String>,
    /// Do not draw a sprite for this tile.
    pub invisible: bool,
    /// Optional sprite file.
    pub sprite: Option<String>,
    /// Apply when entered while walking north.
    pub apply_north: bool,
    /// Apply when entered while walking east.
    pub apply_east: bool,
    /// Apply when entered while walking south.
    pub apply_south: bool,
    /// Apply when entered while walking west.
    pub apply_west: bool,
}

impl SpecialTile {
    /// Create a tile that applies from every direction and does nothing else.
    pub fn new(pos: Vector) -> Self {
        Self {
            pos,
            map_message: None,
            passive_message: false,
            script: None,
            invisible: false,
            sprite: None,
            apply_north: true,
            apply_east: true,
            apply_south: true,
            apply_west: true,
        }
    }

    /// Restrict the tile to the directions named in `spec`, e.g. `"north-west"`.
    pub fn set_apply_directions(&mut self, spec: &str) {
        self.apply_north = spec.contains("north");
        self.apply_east = spec.contains("east");
        self.apply_south = spec.contains("south");
        self.apply_west = spec.contains("west");
    }

    /// Whether entering while walking in `dir` triggers the tile.
    pub fn applies_to(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.apply_north,
            Direction::East => self.apply_east,
            Direction::South => self.apply_south,
            Direction::West => self.apply_west,
            Direction::None => true,
        }
    }
}

/// A trigger that swaps the avatar's sprite.
#[derive(Debug, Clone, Serialize)]
pub struct SpriteChange {
    /// Tile position.
    pub pos: Vector,
    /// The sprite the avatar changes into.
    pub sprite: String,
    /// Action the trigger's own sprite plays while the change is active.
    pub stay_action: Option<String>,
    /// Whether the stay action is shown before the trigger is used.
    pub initial_stay_action: bool,
    /// Triggers sharing a group clear each other's stay action.
    pub stay_group: Option<String>,
    /// Change immediately on touch instead of on stop.
    pub change_on_touch: bool,
}

/// A tile that moves the avatar to a spawn point, possibly on another map.
#[derive(Debug, Clone, Serialize)]
pub struct Teleporter {
    /// Tile position.
    pub pos: Vector,
    /// Target worldmap file; `None` teleports within the current map.
    pub worldmap: Option<String>,
    /// Spawn point on the target map.
    pub spawnpoint: String,
    /// Teleport as soon as the tile is entered.
    pub automatic: bool,
    /// Message shown on the tile.
    pub message: Option<String>,
    /// Optional sprite file.
    pub sprite: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_tile_applies_everywhere_by_default() {
        let tile = SpecialTile::new(Vector::default());
        for dir in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert!(tile.applies_to(dir));
        }
    }

    #[test]
    fn apply_directions_from_compound_name() {
        let mut tile = SpecialTile::new(Vector::default());
        tile.set_apply_directions("north-west");
        assert!(tile.applies_to(Direction::North));
        assert!(tile.applies_to(Direction::West));
        assert!(!tile.applies_to(Direction::East));
        assert!(!tile.applies_to(Direction::South));
        assert!(tile.applies_to(Direction::None));
    }
}
