use std::sync::Arc;

use serde::Serialize;

use crate::geometry::{Color, Vector};

/// Default drawing layer for backgrounds.
pub const LAYER_BACKGROUND: i32 = -200;
/// Default drawing layer for decals.
pub const LAYER_OBJECTS: i32 = 50;

/// A named catalog of tile graphics, resolved once per map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tileset {
    /// Path of the tileset definition on the virtual filesystem.
    pub name: String,
}

impl Tileset {
    /// Create a tileset reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A rectangular grid of tile ids drawn with one tileset.
#[derive(Debug, Clone, Serialize)]
pub struct TileMap {
    /// Optional layer name.
    pub name: Option<String>,
    /// Whether the avatar collides with this layer.
    pub solid: bool,
    /// Drawing order relative to other layers.
    pub z_pos: i32,
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    /// Row-major tile ids; `width * height` entries.
    pub tiles: Vec<u32>,
    /// Horizontal scroll factor.
    pub speed_x: f32,
    /// Vertical scroll factor.
    pub speed_y: f32,
    /// Layer opacity.
    pub alpha: f32,
    /// Color multiplied into every tile.
    pub tint: Color,
    /// The tileset the ids refer to.
    pub tileset: Arc<Tileset>,
}

impl TileMap {
    /// Tile id at the given tile coordinate, or `None` outside the grid.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.tiles
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// A parallax background image.
#[derive(Debug, Clone, Serialize)]
pub struct Background {
    /// The main (middle) image.
    pub image: String,
    /// Optional image tiled above the main image.
    pub image_top: Option<String>,
    /// Optional image tiled below the main image.
    pub image_bottom: Option<String>,
    /// Horizontal parallax factor.
    pub speed: f32,
    /// Vertical parallax factor.
    pub speed_y: f32,
    /// Drawing layer.
    pub layer: i32,
}

/// A purely decorative sprite placed on the map.
#[derive(Debug, Clone, Serialize)]
pub struct Decal {
    /// Tile position.
    pub pos: Vector,
    /// Sprite file.
    pub sprite: String,
    /// Optional sprite action to play.
    pub action: Option<String>,
    /// Drawing layer.
    pub layer: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> TileMap {
        TileMap {
            name: None,
            solid: true,
            z_pos: 0,
            width: 2,
            height: 2,
            tiles: vec![1, 2, 3, 4],
            speed_x: 1.0,
            speed_y: 1.0,
            alpha: 1.0,
            tint: Color::WHITE,
            tileset: Arc::new(Tileset::new("images/worldmap.strf")),
        }
    }

    #[test]
    fn tile_at_is_row_major() {
        let map = two_by_two();
        assert_eq!(map.tile_at(0, 0), Some(1));
        assert_eq!(map.tile_at(1, 0), Some(2));
        assert_eq!(map.tile_at(0, 1), Some(3));
        assert_eq!(map.tile_at(1, 1), Some(4));
    }

    #[test]
    fn tile_at_outside_grid() {
        let map = two_by_two();
        assert_eq!(map.tile_at(-1, 0), None);
        assert_eq!(map.tile_at(2, 0), None);
        assert_eq!(map.tile_at(0, 2), None);
    }
}
