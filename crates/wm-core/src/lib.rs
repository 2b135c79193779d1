//! Core types for worldmaps: placed game objects, spawn points, and the map model.
//!
//! This crate defines the data model that the loader populates. It is
//! independent of the document reader. A [`WorldMap`] can be assembled
//! programmatically, which is how most of the unit tests here build one.

/// Error types used throughout the crate.
pub mod error;
/// Tile-space positions, colors, and walking directions.
pub mod geometry;
/// Tile layers, parallax backgrounds, decals, and tilesets.
pub mod layer;
/// Level references placed on the map.
pub mod level;
/// The closed set of game objects and their identifiers.
pub mod object;
/// Named placement locations for the avatar.
pub mod spawn;
/// Special tiles, sprite-change triggers, and teleporters.
pub mod trigger;
/// The avatar's placement state.
pub mod tux;
/// The world map that owns every placed object.
pub mod worldmap;

/// Re-export error types.
pub use error::{WmError, WmResult};
/// Re-export geometry types.
pub use geometry::{Color, Direction, Vector};
/// Re-export layer types.
pub use layer::{Background, Decal, TileMap, Tileset};
/// Re-export level reference type.
pub use level::LevelTile;
/// Re-export object types.
pub use object::{GameObject, ObjectId, ObjectKind};
/// Re-export spawn point type.
pub use spawn::SpawnPoint;
/// Re-export trigger types.
pub use trigger::{SpecialTile, SpriteChange, Teleporter};
/// Re-export avatar type.
pub use tux::Tux;
/// Re-export world map types.
pub use worldmap::{WorldMap, WorldMapMeta};
