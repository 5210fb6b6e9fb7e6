//! In-memory storage for walls and openings.
//!
//! Records are indexed by id for O(1) lookup; a parallel insertion-order list
//! per collection drives spatial scans, so queries visit entities in a stable
//! order and equidistant candidates resolve deterministically.

use std::collections::HashMap;

use crate::model::{EntityRef, Opening, OpeningId, Wall, WallId};

/// Ordered access to plan entities for spatial queries.
///
/// [`EntityStore`] answers with a linear scan. A spatial index can implement
/// this trait to narrow the candidate set; the geometry queries only rely on
/// the iteration order being stable.
pub trait SpatialLookup {
    /// Walls that may lie within `radius` of `(x, y)`, in insertion order.
    fn wall_candidates(&self, x: f64, y: f64, radius: f64) -> Vec<&Wall>;

    /// Openings whose anchor may lie within `radius` of `(x, y)`, in insertion order.
    fn opening_candidates(&self, x: f64, y: f64, radius: f64) -> Vec<&Opening>;
}

/// Owns every wall and opening of a plan.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    walls: HashMap<WallId, Wall>,
    wall_order: Vec<WallId>,
    openings: HashMap<OpeningId, Opening>,
    opening_order: Vec<OpeningId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a wall. A wall with the same id is replaced in place.
    pub fn add_wall(&mut self, wall: Wall) {
        let id = wall.id().clone();
        if self.walls.insert(id.clone(), wall).is_none() {
            self.wall_order.push(id);
        }
    }

    /// Removes a wall, returning it if it existed.
    ///
    /// Openings placed on the wall are left where they are.
    pub fn remove_wall(&mut self, id: &WallId) -> Option<Wall> {
        let wall = self.walls.remove(id)?;
        self.wall_order.retain(|w| w != id);
        Some(wall)
    }

    /// Inserts an opening. An opening with the same id is replaced in place.
    pub fn add_opening(&mut self, opening: Opening) {
        let id = opening.id().clone();
        if self.openings.insert(id.clone(), opening).is_none() {
            self.opening_order.push(id);
        }
    }

    /// Removes an opening, returning it if it existed.
    pub fn remove_opening(&mut self, id: &OpeningId) -> Option<Opening> {
        let opening = self.openings.remove(id)?;
        self.opening_order.retain(|o| o != id);
        Some(opening)
    }

    /// Removes whichever entity `target` refers to. Returns true if something was removed.
    pub fn remove(&mut self, target: &EntityRef) -> bool {
        match target {
            EntityRef::Wall(id) => self.remove_wall(id).is_some(),
            EntityRef::Opening(id) => self.remove_opening(id).is_some(),
        }
    }

    pub fn contains(&self, target: &EntityRef) -> bool {
        match target {
            EntityRef::Wall(id) => self.walls.contains_key(id),
            EntityRef::Opening(id) => self.openings.contains_key(id),
        }
    }

    /// Removes all walls and openings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replaces the walls and/or openings wholesale.
    ///
    /// `None` keeps the current collection. The replacement is assembled
    /// before anything is swapped in, so the store is never seen half-updated.
    pub fn replace_all(&mut self, walls: Option<Vec<Wall>>, openings: Option<Vec<Opening>>) {
        let mut next = self.clone();
        if let Some(walls) = walls {
            next.walls.clear();
            next.wall_order.clear();
            for wall in walls {
                next.add_wall(wall);
            }
        }
        if let Some(openings) = openings {
            next.openings.clear();
            next.opening_order.clear();
            for opening in openings {
                next.add_opening(opening);
            }
        }
        *self = next;
    }

    pub fn wall(&self, id: &WallId) -> Option<&Wall> {
        self.walls.get(id)
    }

    pub fn opening(&self, id: &OpeningId) -> Option<&Opening> {
        self.openings.get(id)
    }

    /// Walls in insertion order.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.wall_order.iter().filter_map(|id| self.walls.get(id))
    }

    /// Openings in insertion order.
    pub fn openings(&self) -> impl Iterator<Item = &Opening> {
        self.opening_order
            .iter()
            .filter_map(|id| self.openings.get(id))
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn opening_count(&self) -> usize {
        self.openings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.openings.is_empty()
    }

    /// Sum of all wall lengths in meters.
    pub fn total_wall_length(&self) -> f64 {
        self.walls().map(Wall::length).sum()
    }
}

impl SpatialLookup for EntityStore {
    fn wall_candidates(&self, _x: f64, _y: f64, _radius: f64) -> Vec<&Wall> {
        self.walls().collect()
    }

    fn opening_candidates(&self, _x: f64, _y: f64, _radius: f64) -> Vec<&Opening> {
        self.openings().collect()
    }
}
