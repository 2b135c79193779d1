use serde::Serialize;

use crate::geometry::{Direction, Vector};

/// Where the player's avatar stands on the worldmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tux {
    /// Tile position.
    pub pos: Vector,
    /// Direction the avatar is walking in.
    pub direction: Direction,
    /// Spawn point the avatar was last placed at.
    pub spawn_point: Option<String>,
}

impl Tux {
    /// Put the avatar on a tile and set it walking.
    pub fn place(&mut self, pos: Vector, direction: Direction) {
        self.pos = pos;
        self.direction = direction;
    }
}
