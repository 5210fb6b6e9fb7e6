//! Plan entities and point types.
//!
//! World coordinates ([`Point`]) are in meters; screen coordinates
//! ([`ScreenPoint`]) are in pixels relative to the drawing surface's
//! top-left corner.

use serde::{Deserialize, Serialize};
use std::fmt;

mod opening;
mod wall;

pub use opening::{Opening, OpeningId, OpeningKind};
pub use wall::{Wall, WallId};

/// A point in world space (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A point in screen space (pixels, origin at the top-left of the surface).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Reference to an entity held by the store.
///
/// The interaction layer only ever keeps these ids, never copies of the
/// records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum EntityRef {
    Wall(WallId),
    Opening(OpeningId),
}

impl EntityRef {
    /// Returns the raw id string.
    pub fn id(&self) -> &str {
        match self {
            Self::Wall(id) => id.as_str(),
            Self::Opening(id) => id.as_str(),
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Wall(_))
    }

    pub fn is_opening(&self) -> bool {
        matches!(self, Self::Opening(_))
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall(id) => write!(f, "wall {}", id),
            Self::Opening(id) => write!(f, "opening {}", id),
        }
    }
}

/// Builds a short random id of the form `<prefix>_<8 hex chars>`.
pub(crate) fn generate_id(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &uuid[..8])
}
