//! One routine per sector entry kind. Each reads a sub-mapping and returns a
//! fully initialized value, or a [`BuildError`] for missing or mistyped
//! required fields.

mod layers;
mod markers;

pub use layers::{build_background, build_decal, build_tilemap};
pub use markers::{
    build_level_tile, build_spawn_point, build_special_tile, build_sprite_change,
    build_teleporter,
};

use wm_core::{Direction, Vector};
use wm_reader::Mapping;

use crate::error::BuildResult;
use crate::warnings::Warnings;

/// Tile position from the required `x` and `y` fields.
fn position(mapping: &Mapping<'_>) -> BuildResult<Vector> {
    let x = mapping.require::<f32>("x")?;
    let y = mapping.require::<f32>("y")?;
    Ok(Vector::new(x, y))
}

/// Optional direction field. Unknown names are reported and read as no direction.
fn direction(mapping: &Mapping<'_>, key: &str, warnings: &mut Warnings) -> BuildResult<Direction> {
    let Some(entry) = mapping.find(key) else {
        return Ok(Direction::None);
    };
    let name = entry.get::<String>()?;
    match Direction::parse(&name) {
        Some(dir) => Ok(dir),
        None => {
            warnings.warn(entry.span(), format!("Unknown direction '{name}'"));
            Ok(Direction::None)
        }
    }
}
