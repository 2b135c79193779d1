use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Vector;
use crate::layer::{Background, Decal, TileMap};
use crate::level::LevelTile;
use crate::trigger::{SpecialTile, SpriteChange, Teleporter};

/// Identifier of an object within one [`WorldMap`](crate::WorldMap).
///
/// Ids are handed out in insertion order, so sorting by id gives document order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of a game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    /// A grid of tiles.
    TileMap,
    /// A parallax background.
    Background,
    /// A reference to a playable level.
    Level,
    /// A message/script tile.
    SpecialTile,
    /// A sprite-change trigger.
    SpriteChange,
    /// A teleporter.
    Teleporter,
    /// A decorative sprite.
    Decal,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileMap => write!(f, "tilemap"),
            Self::Background => write!(f, "background"),
            Self::Level => write!(f, "level"),
            Self::SpecialTile => write!(f, "special-tile"),
            Self::SpriteChange => write!(f, "sprite-change"),
            Self::Teleporter => write!(f, "teleporter"),
            Self::Decal => write!(f, "decal"),
        }
    }
}

/// Every object that can live in a map's generic object collection.
///
/// Spawn points are not game objects: they are placement metadata owned by
/// their own index.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GameObject {
    /// A grid of tiles.
    TileMap(TileMap),
    /// A parallax background.
    Background(Background),
    /// A reference to a playable level.
    Level(LevelTile),
    /// A message/script tile.
    SpecialTile(SpecialTile),
    /// A sprite-change trigger.
    SpriteChange(SpriteChange),
    /// A teleporter.
    Teleporter(Teleporter),
    /// A decorative sprite.
    Decal(Decal),
}

impl GameObject {
    /// The kind tag of this object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::TileMap(_) => ObjectKind::TileMap,
            Self::Background(_) => ObjectKind::Background,
            Self::Level(_) => ObjectKind::Level,
            Self::SpecialTile(_) => ObjectKind::SpecialTile,
            Self::SpriteChange(_) => ObjectKind::SpriteChange,
            Self::Teleporter(_) => ObjectKind::Teleporter,
            Self::Decal(_) => ObjectKind::Decal,
        }
    }

    /// Tile position for objects that occupy a single tile.
    pub fn pos(&self) -> Option<Vector> {
        match self {
            Self::Level(l) => Some(l.pos),
            Self::SpecialTile(t) => Some(t.pos),
            Self::SpriteChange(s) => Some(s.pos),
            Self::Teleporter(t) => Some(t.pos),
            Self::Decal(d) => Some(d.pos),
            Self::TileMap(_) | Self::Background(_) => None,
        }
    }

    /// Short human-readable label for listings.
    pub fn label(&self) -> String {
        match self {
            Self::TileMap(t) => t.name.clone().unwrap_or_else(|| {
                format!("{}x{}{}", t.width, t.height, if t.solid { " solid" } else { "" })
            }),
            Self::Background(b) => b.image.clone(),
            Self::Level(l) => l.name.clone(),
            Self::SpecialTile(t) => t
                .map_message
                .clone()
                .or_else(|| t.script.clone())
                .unwrap_or_default(),
            Self::SpriteChange(s) => s.sprite.clone(),
            Self::Teleporter(t) => match &t.worldmap {
                Some(map) => format!("{map}:{}", t.spawnpoint),
                None => t.spawnpoint.clone(),
            },
            Self::Decal(d) => d.sprite.clone(),
        }
    }

    /// The tile layer, if this is one.
    pub fn as_tilemap(&self) -> Option<&TileMap> {
        match self {
            Self::TileMap(t) => Some(t),
            _ => None,
        }
    }

    /// The level reference, if this is one.
    pub fn as_level(&self) -> Option<&LevelTile> {
        match self {
            Self::Level(l) => Some(l),
            _ => None,
        }
    }

    /// The special tile, if this is one.
    pub fn as_special_tile(&self) -> Option<&SpecialTile> {
        match self {
            Self::SpecialTile(t) => Some(t),
            _ => None,
        }
    }

    /// The sprite-change trigger, if this is one.
    pub fn as_sprite_change(&self) -> Option<&SpriteChange> {
        match self {
            Self::SpriteChange(s) => Some(s),
            _ => None,
        }
    }

    /// The teleporter, if this is one.
    pub fn as_teleporter(&self) -> Option<&Teleporter> {
        match self {
            Self::Teleporter(t) => Some(t),
            _ => None,
        }
    }
}
