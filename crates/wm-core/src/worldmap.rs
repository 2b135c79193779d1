use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{WmError, WmResult};
use crate::geometry::{Color, Vector};
use crate::layer::{TileMap, Tileset};
use crate::level::{CURRENT_DIR, LevelTile};
use crate::object::{GameObject, ObjectId, ObjectKind};
use crate::spawn::SpawnPoint;
use crate::trigger::{SpecialTile, SpriteChange, Teleporter};
use crate::tux::Tux;

/// Metadata about the map itself.
#[derive(Debug, Clone, Serialize)]
pub struct WorldMapMeta {
    /// Display name.
    pub name: String,
    /// Path of the map document on the virtual filesystem.
    pub map_filename: String,
    /// Directory that level references are resolved against.
    pub levels_path: String,
    /// Resolved tileset, `None` until the loader resolves one.
    pub tileset: Option<Arc<Tileset>>,
    /// Ambient light color.
    pub ambient_light: Color,
    /// Background music file.
    pub music: String,
    /// Script run when the map is entered.
    pub init_script: String,
}

impl Default for WorldMapMeta {
    fn default() -> Self {
        Self {
            name: String::new(),
            map_filename: String::new(),
            levels_path: CURRENT_DIR.to_string(),
            tileset: None,
            ambient_light: Color::WHITE,
            music: String::new(),
            init_script: String::new(),
        }
    }
}

/// The world map. Owns every placed object and every spawn point.
///
/// Objects added with [`WorldMap::add_object`] get their id immediately but
/// only become visible after the next [`WorldMap::update_game_objects`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorldMap {
    /// Map metadata.
    pub meta: WorldMapMeta,
    /// The player's avatar.
    pub tux: Tux,
    objects: BTreeMap<ObjectId, GameObject>,
    #[serde(skip)]
    pending_add: Vec<(ObjectId, GameObject)>,
    #[serde(skip)]
    pending_remove: Vec<ObjectId>,
    #[serde(skip)]
    next_id: u32,
    spawn_points: Vec<SpawnPoint>,

    // Indexes
    #[serde(skip)]
    levels: Vec<ObjectId>,
    #[serde(skip)]
    special_tiles: Vec<ObjectId>,
    #[serde(skip)]
    sprite_changes: Vec<ObjectId>,
    #[serde(skip)]
    teleporters: Vec<ObjectId>,
    #[serde(skip)]
    solid_tilemaps: Vec<ObjectId>,
}

impl WorldMap {
    /// Create an empty map.
    pub fn new(meta: WorldMapMeta) -> Self {
        Self {
            meta,
            ..Default::default()
        }
    }

    // -----------------------------------------------------------------------
    // Object lifecycle
    // -----------------------------------------------------------------------

    /// Queue an object for insertion and record it in its kind index.
    pub fn add_object(&mut self, object: GameObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        match object.kind() {
            ObjectKind::Level => self.levels.push(id),
            ObjectKind::SpecialTile => self.special_tiles.push(id),
            ObjectKind::SpriteChange => self.sprite_changes.push(id),
            ObjectKind::Teleporter => self.teleporters.push(id),
            ObjectKind::TileMap | ObjectKind::Background | ObjectKind::Decal => {}
        }

        self.pending_add.push((id, object));
        id
    }

    /// Queue an object for removal at the next update.
    pub fn remove_object(&mut self, id: ObjectId) -> WmResult<()> {
        let known = self.objects.contains_key(&id)
            || self.pending_add.iter().any(|(pid, _)| *pid == id);
        if !known || self.pending_remove.contains(&id) {
            return Err(WmError::ObjectNotFound(id));
        }
        self.pending_remove.push(id);
        Ok(())
    }

    /// Flush queued additions and removals and rebuild the solid-layer index.
    pub fn update_game_objects(&mut self) {
        for id in std::mem::take(&mut self.pending_remove) {
            self.objects.remove(&id);
            self.pending_add.retain(|(pid, _)| *pid != id);
            for index in [
                &mut self.levels,
                &mut self.special_tiles,
                &mut self.sprite_changes,
                &mut self.teleporters,
            ] {
                index.retain(|oid| *oid != id);
            }
        }

        for (id, object) in self.pending_add.drain(..) {
            self.objects.insert(id, object);
        }

        self.solid_tilemaps = self
            .objects
            .iter()
            .filter(|(_, o)| o.as_tilemap().is_some_and(|t| t.solid))
            .map(|(id, _)| *id)
            .collect();
    }

    /// Number of objects waiting for the next update.
    pub fn pending_count(&self) -> usize {
        self.pending_add.len() + self.pending_remove.len()
    }

    // -----------------------------------------------------------------------
    // Spawn points
    // -----------------------------------------------------------------------

    /// Add a spawn point. Spawn points never enter the object collection.
    pub fn add_spawn_point(&mut self, spawn_point: SpawnPoint) {
        self.spawn_points.push(spawn_point);
    }

    /// Find a spawn point by name. The first one declared wins.
    pub fn spawn_point(&self, name: &str) -> Option<&SpawnPoint> {
        self.spawn_points.iter().find(|sp| sp.name == name)
    }

    /// All spawn points in declaration order.
    pub fn spawn_points(&self) -> &[SpawnPoint] {
        &self.spawn_points
    }

    /// Place the avatar on the named spawn point.
    pub fn move_to_spawnpoint(&mut self, name: &str) -> WmResult<()> {
        let sp = self
            .spawn_point(name)
            .ok_or_else(|| WmError::SpawnPointNotFound(name.to_string()))?;
        let (pos, dir) = (sp.pos, sp.auto_dir);
        self.tux.place(pos, dir);
        self.tux.spawn_point = Some(name.to_string());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Get an object by id.
    pub fn get_object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    /// All live objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        self.objects.iter().map(|(id, o)| (*id, o))
    }

    /// Solid tile layers as of the last update.
    pub fn solid_tilemaps(&self) -> Vec<&TileMap> {
        self.solid_tilemaps
            .iter()
            .filter_map(|id| self.objects.get(id).and_then(GameObject::as_tilemap))
            .collect()
    }

    /// Ids in the level index, in declaration order.
    pub fn level_ids(&self) -> &[ObjectId] {
        &self.levels
    }

    /// Level references in declaration order.
    pub fn levels(&self) -> Vec<&LevelTile> {
        self.collect_index(&self.levels, GameObject::as_level)
    }

    /// Special tiles in declaration order.
    pub fn special_tiles(&self) -> Vec<&SpecialTile> {
        self.collect_index(&self.special_tiles, GameObject::as_special_tile)
    }

    /// Sprite-change triggers in declaration order.
    pub fn sprite_changes(&self) -> Vec<&SpriteChange> {
        self.collect_index(&self.sprite_changes, GameObject::as_sprite_change)
    }

    /// Teleporters in declaration order.
    pub fn teleporters(&self) -> Vec<&Teleporter> {
        self.collect_index(&self.teleporters, GameObject::as_teleporter)
    }

    /// The level on a tile, if any.
    pub fn level_at(&self, pos: Vector) -> Option<&LevelTile> {
        self.levels().into_iter().find(|l| l.pos == pos)
    }

    /// The special tile on a tile, if any.
    pub fn special_tile_at(&self, pos: Vector) -> Option<&SpecialTile> {
        self.special_tiles().into_iter().find(|t| t.pos == pos)
    }

    /// The sprite-change trigger on a tile, if any.
    pub fn sprite_change_at(&self, pos: Vector) -> Option<&SpriteChange> {
        self.sprite_changes().into_iter().find(|s| s.pos == pos)
    }

    /// The teleporter on a tile, if any.
    pub fn teleporter_at(&self, pos: Vector) -> Option<&Teleporter> {
        self.teleporters().into_iter().find(|t| t.pos == pos)
    }

    fn collect_index<'a, T>(
        &'a self,
        ids: &[ObjectId],
        project: impl Fn(&'a GameObject) -> Option<&'a T>,
    ) -> Vec<&'a T> {
        ids.iter()
            .filter_map(|id| self.objects.get(id).and_then(&project))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Count live objects by kind.
    pub fn object_counts_by_kind(&self) -> BTreeMap<ObjectKind, usize> {
        let mut counts = BTreeMap::new();
        for object in self.objects.values() {
            *counts.entry(object.kind()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;
    use crate::layer::Decal;

    fn tilemap(solid: bool) -> GameObject {
        GameObject::TileMap(TileMap {
            name: None,
            solid,
            z_pos: 0,
            width: 1,
            height: 1,
            tiles: vec![0],
            speed_x: 1.0,
            speed_y: 1.0,
            alpha: 1.0,
            tint: Color::WHITE,
            tileset: Arc::new(Tileset::new("images/worldmap.strf")),
        })
    }

    fn level(name: &str, x: f32, y: f32) -> GameObject {
        GameObject::Level(LevelTile::new("./", name, Vector::new(x, y)))
    }

    fn decal() -> GameObject {
        GameObject::Decal(Decal {
            pos: Vector::default(),
            sprite: "images/tree.sprite".into(),
            action: None,
            layer: 50,
        })
    }

    #[test]
    fn objects_visible_only_after_update() {
        let mut map = WorldMap::default();
        let id = map.add_object(decal());
        assert!(map.get_object(id).is_none());
        assert_eq!(map.pending_count(), 1);

        map.update_game_objects();
        assert!(map.get_object(id).is_some());
        assert_eq!(map.pending_count(), 0);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut map = WorldMap::default();
        let a = map.add_object(decal());
        let b = map.add_object(tilemap(true));
        let c = map.add_object(level("x.stl", 0.0, 0.0));
        map.update_game_objects();

        let ids: Vec<_> = map.objects().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn solid_index_rebuilt_on_update() {
        let mut map = WorldMap::default();
        map.add_object(tilemap(false));
        assert!(map.solid_tilemaps().is_empty());
        map.update_game_objects();
        assert!(map.solid_tilemaps().is_empty());

        map.add_object(tilemap(true));
        map.update_game_objects();
        assert_eq!(map.solid_tilemaps().len(), 1);
    }

    #[test]
    fn kind_indices_track_levels() {
        let mut map = WorldMap::default();
        map.add_object(level("a.stl", 1.0, 1.0));
        map.add_object(decal());
        map.add_object(level("b.stl", 2.0, 1.0));
        map.update_game_objects();

        let names: Vec<_> = map.levels().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["a.stl", "b.stl"]);
        assert_eq!(map.level_at(Vector::new(2.0, 1.0)).unwrap().name, "b.stl");
        assert!(map.level_at(Vector::new(9.0, 9.0)).is_none());
    }

    #[test]
    fn remove_object_clears_indices() {
        let mut map = WorldMap::default();
        let id = map.add_object(level("a.stl", 1.0, 1.0));
        map.update_game_objects();

        map.remove_object(id).unwrap();
        assert_eq!(map.levels().len(), 1);
        map.update_game_objects();
        assert!(map.levels().is_empty());
        assert!(map.level_ids().is_empty());
        assert_eq!(map.object_count(), 0);
    }

    #[test]
    fn remove_pending_object() {
        let mut map = WorldMap::default();
        let id = map.add_object(decal());
        map.remove_object(id).unwrap();
        map.update_game_objects();
        assert_eq!(map.object_count(), 0);
    }

    #[test]
    fn remove_unknown_object_fails() {
        let mut map = WorldMap::default();
        assert!(matches!(
            map.remove_object(ObjectId(7)),
            Err(WmError::ObjectNotFound(ObjectId(7)))
        ));
    }

    #[test]
    fn spawn_points_are_not_objects() {
        let mut map = WorldMap::default();
        map.add_spawn_point(SpawnPoint::new("main", Vector::new(4.0, 5.0)));
        map.update_game_objects();

        assert_eq!(map.object_count(), 0);
        assert_eq!(map.spawn_point("main").unwrap().pos, Vector::new(4.0, 5.0));
    }

    #[test]
    fn move_to_spawnpoint_places_tux() {
        let mut map = WorldMap::default();
        let mut sp = SpawnPoint::new("main", Vector::new(4.0, 5.0));
        sp.auto_dir = Direction::East;
        map.add_spawn_point(sp);

        map.move_to_spawnpoint("main").unwrap();
        assert_eq!(map.tux.pos, Vector::new(4.0, 5.0));
        assert_eq!(map.tux.direction, Direction::East);
        assert_eq!(map.tux.spawn_point.as_deref(), Some("main"));
    }

    #[test]
    fn move_to_missing_spawnpoint_fails() {
        let mut map = WorldMap::default();
        let err = map.move_to_spawnpoint("main").unwrap_err();
        assert_eq!(err.to_string(), "spawnpoint 'main' not found");
    }

    #[test]
    fn first_spawn_point_with_a_name_wins() {
        let mut map = WorldMap::default();
        map.add_spawn_point(SpawnPoint::new("main", Vector::new(1.0, 1.0)));
        map.add_spawn_point(SpawnPoint::new("main", Vector::new(2.0, 2.0)));
        assert_eq!(map.spawn_point("main").unwrap().pos, Vector::new(1.0, 1.0));
    }

    #[test]
    fn counts_by_kind() {
        let mut map = WorldMap::default();
        map.add_object(tilemap(true));
        map.add_object(decal());
        map.add_object(decal());
        map.update_game_objects();

        let counts = map.object_counts_by_kind();
        assert_eq!(counts[&ObjectKind::Decal], 2);
        assert_eq!(counts[&ObjectKind::TileMap], 1);
        assert!(!counts.contains_key(&ObjectKind::Level));
    }
}
