use wm_core::{LevelTile, SpawnPoint, SpecialTile, SpriteChange, Teleporter};
use wm_reader::Mapping;

use super::{direction, position};
use crate::error::BuildResult;
use crate::warnings::Warnings;

/// Build a spawn point. A missing name is reported but not fatal.
pub fn build_spawn_point(mapping: &Mapping<'_>, warnings: &mut Warnings) -> BuildResult<SpawnPoint> {
    let name = mapping.get_or("name", String::new())?;
    if name.is_empty() {
        warnings.warn(mapping.span(), "Spawnpoint defined without name");
    }
    let mut spawn_point = SpawnPoint::new(name, position(mapping)?);
    spawn_point.auto_dir = direction(mapping, "auto-dir", warnings)?;
    Ok(spawn_point)
}

/// Build a level reference resolved against `levels_path`.
///
/// Title and target time keep their defaults; they come from the level file
/// itself.
pub fn build_level_tile(mapping: &Mapping<'_>, levels_path: &str) -> BuildResult<LevelTile> {
    let mut level = LevelTile::new(levels_path, mapping.require::<String>("name")?, position(mapping)?);
    level.auto_play = mapping.get_or("auto-play", false)?;
    if let Some(sprite) = mapping.get("sprite")? {
        level.sprite = sprite;
    }
    level.extro_script = mapping.get("extro-script")?;
    Ok(level)
}

/// Build a message/script tile.
pub fn build_special_tile(mapping: &Mapping<'_>) -> BuildResult<SpecialTile> {
    let mut tile = SpecialTile::new(position(mapping)?);
    tile.map_message = mapping.get("map-message")?;
    tile.passive_message = mapping.get_or("passive-message", false)?;
    tile.script = mapping.get("script")?;
    tile.invisible = mapping.get_or("invisible-tile", false)?;
    tile.sprite = mapping.get("sprite")?;
    if let Some(dirs) = mapping.get::<String>("apply-to-direction")? {
        tile.set_apply_directions(&dirs);
    }
    Ok(tile)
}

/// Build a sprite-change trigger.
pub fn build_sprite_change(mapping: &Mapping<'_>) -> BuildResult<SpriteChange> {
    Ok(SpriteChange {
        pos: position(mapping)?,
        sprite: mapping.require("sprite")?,
        stay_action: mapping.get("stay-action")?,
        initial_stay_action: mapping.get_or("initial-stay-action", false)?,
        stay_group: mapping.get("stay-group")?,
        change_on_touch: mapping.get_or("change-on-touch", false)?,
    })
}

/// Build a teleporter. Without `worldmap` it targets the current map.
pub fn build_teleporter(mapping: &Mapping<'_>) -> BuildResult<Teleporter> {
    Ok(Teleporter {
        pos: position(mapping)?,
        worldmap: mapping.get("worldmap")?,
        spawnpoint: mapping.require("spawnpoint")?,
        automatic: mapping.get_or("automatic", false)?,
        message: mapping.get("message")?,
        sprite: mapping.get("sprite")?,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::doc;
    use super::*;
    use wm_core::level::{DEFAULT_LEVEL_SPRITE, DEFAULT_LEVEL_TITLE};
    use wm_core::{Direction, Vector};

    #[test]
    fn spawn_point_fields() {
        let d = doc("(worldmap-spawnpoint (name \"main\") (x 4) (y 5) (auto-dir \"west\"))");
        let mut w = Warnings::new();
        let sp = build_spawn_point(&d.root_mapping().unwrap(), &mut w).unwrap();
        assert_eq!(sp.name, "main");
        assert_eq!(sp.pos, Vector::new(4.0, 5.0));
        assert_eq!(sp.auto_dir, Direction::West);
        assert!(w.is_empty());
    }

    #[test]
    fn spawn_point_without_name_warns() {
        let d = doc("(worldmap-spawnpoint (x 4) (y 5))");
        let mut w = Warnings::new();
        let sp = build_spawn_point(&d.root_mapping().unwrap(), &mut w).unwrap();
        assert!(sp.name.is_empty());
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn level_tile_defaults() {
        let d = doc("(level (name \"intro.stl\") (x 3) (y 7))");
        let level = build_level_tile(&d.root_mapping().unwrap(), "levels/world1/").unwrap();
        assert_eq!(level.name, "intro.stl");
        assert_eq!(level.basedir, "levels/world1/");
        assert_eq!(level.title, DEFAULT_LEVEL_TITLE);
        assert_eq!(level.sprite, DEFAULT_LEVEL_SPRITE);
        assert!(!level.auto_play);
        assert_eq!(level.level_path(), "levels/world1/intro.stl");
    }

    #[test]
    fn level_tile_requires_name() {
        let d = doc("(level (x 3) (y 7))");
        assert!(build_level_tile(&d.root_mapping().unwrap(), "./").is_err());
    }

    #[test]
    fn special_tile_directions() {
        let d = doc(
            "(special-tile (x 1) (y 1) (map-message (_ \"Brrr\")) (passive-message #t)
                           (apply-to-direction \"north-east\"))",
        );
        let tile = build_special_tile(&d.root_mapping().unwrap()).unwrap();
        assert_eq!(tile.map_message.as_deref(), Some("Brrr"));
        assert!(tile.passive_message);
        assert!(tile.applies_to(Direction::North));
        assert!(tile.applies_to(Direction::East));
        assert!(!tile.applies_to(Direction::South));
        assert!(!tile.applies_to(Direction::West));
    }

    #[test]
    fn special_tile_applies_everywhere_by_default() {
        let d = doc("(special-tile (x 1) (y 1) (invisible-tile #t) (script \"fade()\"))");
        let tile = build_special_tile(&d.root_mapping().unwrap()).unwrap();
        assert!(tile.invisible);
        assert!(tile.applies_to(Direction::South));
    }

    #[test]
    fn sprite_change_fields() {
        let d = doc(
            "(sprite-change (x 2) (y 3) (sprite \"images/boat.sprite\") (stay-action \"idle\")
                            (initial-stay-action #t) (change-on-touch #t))",
        );
        let sc = build_sprite_change(&d.root_mapping().unwrap()).unwrap();
        assert_eq!(sc.sprite, "images/boat.sprite");
        assert_eq!(sc.stay_action.as_deref(), Some("idle"));
        assert!(sc.initial_stay_action);
        assert!(sc.change_on_touch);
        assert_eq!(sc.stay_group, None);
    }

    #[test]
    fn teleporter_requires_spawnpoint() {
        let d = doc("(teleporter (x 2) (y 3) (worldmap \"forest.stwm\"))");
        assert!(build_teleporter(&d.root_mapping().unwrap()).is_err());

        let d = doc("(teleporter (x 2) (y 3) (spawnpoint \"dock\") (automatic #t))");
        let t = build_teleporter(&d.root_mapping().unwrap()).unwrap();
        assert_eq!(t.worldmap, None);
        assert_eq!(t.spawnpoint, "dock");
        assert!(t.automatic);
    }
}
