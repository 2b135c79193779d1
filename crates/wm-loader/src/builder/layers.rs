use std::sync::Arc;

use wm_core::layer::{LAYER_BACKGROUND, LAYER_OBJECTS};
use wm_core::{Background, Color, Decal, ObjectKind, TileMap, Tileset};
use wm_reader::Mapping;

use super::position;
use crate::error::{BuildError, BuildResult};

/// Build a tile layer bound to `tileset`.
///
/// `width`, `height` and `tiles` are required and must agree in size.
pub fn build_tilemap(mapping: &Mapping<'_>, tileset: Arc<Tileset>) -> BuildResult<TileMap> {
    let width = mapping.require::<u32>("width")?;
    let height = mapping.require::<u32>("height")?;
    let tiles = mapping.require::<Vec<u32>>("tiles")?;

    let expected = u64::from(width) * u64::from(height);
    if tiles.len() as u64 != expected {
        return Err(BuildError::Invalid {
            kind: ObjectKind::TileMap,
            message: format!("expected {expected} tiles, found {}", tiles.len()),
            span: mapping.span(),
        });
    }

    let tint = match mapping.get::<Vec<f32>>("tint")? {
        Some(components) => {
            Color::from_components(&components).ok_or_else(|| BuildError::Invalid {
                kind: ObjectKind::TileMap,
                message: "tint requires at least three components".to_string(),
                span: mapping.span(),
            })?
        }
        None => Color::WHITE,
    };

    let speed_x = mapping.get_or("speed", 1.0)?;
    Ok(TileMap {
        name: mapping.get("name")?,
        solid: mapping.get_or("solid", false)?,
        z_pos: mapping.get_or("z-pos", 0)?,
        width,
        height,
        tiles,
        speed_x,
        speed_y: mapping.get_or("speed-y", speed_x)?,
        alpha: mapping.get_or("alpha", 1.0)?,
        tint,
        tileset,
    })
}

/// Build a parallax background. The main image comes from `image` or,
/// failing that, `image-middle`.
pub fn build_background(mapping: &Mapping<'_>) -> BuildResult<Background> {
    let image = match mapping.get::<String>("image")? {
        Some(image) => image,
        None => mapping
            .get::<String>("image-middle")?
            .ok_or_else(|| BuildError::Invalid {
                kind: ObjectKind::Background,
                message: "no image specified".to_string(),
                span: mapping.span(),
            })?,
    };

    let speed = mapping.get_or("speed", 0.5)?;
    Ok(Background {
        image,
        image_top: mapping.get("image-top")?,
        image_bottom: mapping.get("image-bottom")?,
        speed,
        speed_y: mapping.get_or("speed-y", speed)?,
        layer: mapping.get_or("layer", LAYER_BACKGROUND)?,
    })
}

/// Build a decorative sprite.
pub fn build_decal(mapping: &Mapping<'_>) -> BuildResult<Decal> {
    Ok(Decal {
        pos: position(mapping)?,
        sprite: mapping.require("sprite")?,
        action: mapping.get("action")?,
        layer: mapping.get_or("layer", LAYER_OBJECTS)?,
    })
}
