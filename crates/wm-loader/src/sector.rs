use wm_core::{Color, GameObject};
use wm_reader::{Entry, Mapping};

use crate::builder;
use crate::error::{BuildError, LoadFailure};
use crate::session::LoadSession;

/// Keys understood inside a `sector` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorKey {
    /// A tile layer.
    TileMap,
    /// A parallax background.
    Background,
    /// Background music file.
    Music,
    /// Script run when the map is entered.
    InitScript,
    /// A named avatar placement.
    SpawnPoint,
    /// A reference to a level file.
    Level,
    /// A message/script tile.
    SpecialTile,
    /// A sprite-change trigger.
    SpriteChange,
    /// A teleporter.
    Teleporter,
    /// A decorative sprite.
    Decal,
    /// Ambient light color.
    AmbientLight,
    /// The sector's name, unused on worldmaps.
    Name,
    /// A tileset declaration. The map's tileset is already fixed by the
    /// time the sector is read, so this only warns.
    Tileset,
}

impl SectorKey {
    /// Look up a key as written in the document.
    pub fn parse(key: &str) -> Option<Self> {
        Some(match key {
            "tilemap" => Self::TileMap,
            "background" => Self::Background,
            "music" => Self::Music,
            "init-script" => Self::InitScript,
            "worldmap-spawnpoint" => Self::SpawnPoint,
            "level" => Self::Level,
            "special-tile" => Self::SpecialTile,
            "sprite-change" => Self::SpriteChange,
            "teleporter" => Self::Teleporter,
            "decal" => Self::Decal,
            "ambient-light" => Self::AmbientLight,
            "name" => Self::Name,
            "tileset" => Self::Tileset,
            _ => return None,
        })
    }
}

impl LoadSession<'_> {
    /// Walk the sector's entries in document order and populate the map.
    ///
    /// Unknown keys and bad ambient light only warn. Builder errors abort.
    pub fn assemble_sector(&mut self, sector: &Mapping<'_>) -> Result<(), LoadFailure> {
        for entry in sector.entries() {
            let Some(key) = SectorKey::parse(entry.key()) else {
                self.warnings.warn(
                    entry.span(),
                    format!("Unknown token '{}' in worldmap", entry.key()),
                );
                continue;
            };
            self.assemble_entry(key, entry).map_err(|source| LoadFailure::Build {
                key: entry.key().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    fn assemble_entry(&mut self, key: SectorKey, entry: &Entry<'_>) -> Result<(), BuildError> {
        match key {
            SectorKey::TileMap => {
                let tileset = self.tileset();
                let tilemap = builder::build_tilemap(&entry.as_mapping()?, tileset)?;
                self.map.add_object(GameObject::TileMap(tilemap));
            }
            SectorKey::Background => {
                let background = builder::build_background(&entry.as_mapping()?)?;
                self.map.add_object(GameObject::Background(background));
            }
            SectorKey::Music => self.map.meta.music = entry.get()?,
            SectorKey::InitScript => self.map.meta.init_script = entry.get()?,
            SectorKey::SpawnPoint => {
                let spawn_point =
                    builder::build_spawn_point(&entry.as_mapping()?, &mut self.warnings)?;
                self.map.add_spawn_point(spawn_point);
            }
            SectorKey::Level => {
                let levels_path = self.map.meta.levels_path.clone();
                let mut level = builder::build_level_tile(&entry.as_mapping()?, &levels_path)?;
                self.prefetch_level_info(&mut level, entry.span());
                self.map.add_object(GameObject::Level(level));
            }
            SectorKey::SpecialTile => {
                let tile = builder::build_special_tile(&entry.as_mapping()?)?;
                self.map.add_object(GameObject::SpecialTile(tile));
            }
            SectorKey::SpriteChange => {
                let change = builder::build_sprite_change(&entry.as_mapping()?)?;
                self.map.add_object(GameObject::SpriteChange(change));
            }
            SectorKey::Teleporter => {
                let teleporter = builder::build_teleporter(&entry.as_mapping()?)?;
                self.map.add_object(GameObject::Teleporter(teleporter));
            }
            SectorKey::Decal => {
                let decal = builder::build_decal(&entry.as_mapping()?)?;
                self.map.add_object(GameObject::Decal(decal));
            }
            SectorKey::AmbientLight => self.set_ambient_light(entry),
            SectorKey::Name => {}
            SectorKey::Tileset => self.declare_tileset(entry)?,
        }
        Ok(())
    }

    /// Needs at least three numbers; anything else keeps the current color.
    fn set_ambient_light(&mut self, entry: &Entry<'_>) {
        let color = entry
            .get::<Vec<f32>>()
            .ok()
            .and_then(|components| Color::from_components(&components));
        match color {
            Some(color) => self.map.meta.ambient_light = color,
            None => self
                .warnings
                .warn(entry.span(), "(ambient-light) requires a color as argument"),
        }
    }
}
