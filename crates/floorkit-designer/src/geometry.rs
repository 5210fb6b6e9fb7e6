//! Geometric queries over plan entities.
//!
//! All queries are linear scans over the candidates handed out by a
//! [`SpatialLookup`]. Candidates are visited in insertion order and only a
//! strictly better candidate replaces the current best, so ties always go to
//! the entity that was added first.

use floorkit_core::constants::{OPENING_ATTACH_DISTANCE_M, PICK_DISTANCE_M};

use crate::entity_store::SpatialLookup;
use crate::model::{EntityRef, Point, Wall, WallId};

/// Projects `p` onto segment `a`-`b`, clamping to the segment's extent.
///
/// A zero-length segment projects everything onto `a`.
pub fn project_point_onto_segment(p: Point, a: Point, b: Point) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let l2 = dx * dx + dy * dy;
    if l2 == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / l2).clamp(0.0, 1.0);
    Point::new(a.x + t * dx, a.y + t * dy)
}

/// Euclidean distance from `p` to segment `a`-`b`.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    p.distance_to(&project_point_onto_segment(p, a, b))
}

/// Distance from `p` to a wall.
pub fn distance_to_wall(p: Point, wall: &Wall) -> f64 {
    distance_point_to_segment(p, wall.start(), wall.end())
}

/// Result of [`find_nearest_wall`].
#[derive(Debug, Clone, PartialEq)]
pub struct WallHit {
    pub wall_id: WallId,
    /// Closest point on the wall.
    pub projection: Point,
    pub distance: f64,
    /// Wall orientation, `atan2(dy, dx)`.
    pub angle: f64,
}

/// Finds the wall closest to `p`, if it is strictly within the attach distance.
pub fn find_nearest_wall<S: SpatialLookup + ?Sized>(p: Point, lookup: &S) -> Option<WallHit> {
    let mut best: Option<WallHit> = None;
    for wall in lookup.wall_candidates(p.x, p.y, OPENING_ATTACH_DISTANCE_M) {
        let projection = project_point_onto_segment(p, wall.start(), wall.end());
        let distance = p.distance_to(&projection);
        if best.as_ref().is_none_or(|b| distance < b.distance) {
            best = Some(WallHit {
                wall_id: wall.id().clone(),
                projection,
                distance,
                angle: wall.angle(),
            });
        }
    }
    best.filter(|hit| hit.distance < OPENING_ATTACH_DISTANCE_M)
}

/// Picks the entity under `p` for selection or erasing.
///
/// Openings are checked first (distance to anchor), then walls (distance to
/// segment); both use an inclusive pick distance. The first hit in insertion
/// order wins, so an opening always beats a wall at the same spot.
pub fn pick_entity<S: SpatialLookup + ?Sized>(p: Point, lookup: &S) -> Option<EntityRef> {
    pick_entity_within(p, lookup, PICK_DISTANCE_M)
}

/// [`pick_entity`] with a caller-supplied tolerance.
pub fn pick_entity_within<S: SpatialLookup + ?Sized>(
    p: Point,
    lookup: &S,
    tolerance: f64,
) -> Option<EntityRef> {
    if let Some(opening) = lookup
        .opening_candidates(p.x, p.y, tolerance)
        .into_iter()
        .find(|o| p.distance_to(&o.anchor()) <= tolerance)
    {
        return Some(EntityRef::Opening(opening.id().clone()));
    }

    lookup
        .wall_candidates(p.x, p.y, tolerance)
        .into_iter()
        .find(|w| distance_to_wall(p, w) <= tolerance)
        .map(|w| EntityRef::Wall(w.id().clone()))
}
