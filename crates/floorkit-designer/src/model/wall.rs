use floorkit_core::constants::MIN_WALL_LENGTH_M;
use floorkit_core::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{generate_id, Point};

/// Opaque wall identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallId(String);

impl WallId {
    /// Generates a fresh `w_xxxxxxxx` id.
    pub fn generate() -> Self {
        Self(generate_id("w"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WallId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WallId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A straight wall segment between two world points.
///
/// Walls are immutable once built; the endpoints are guaranteed to be more
/// than [`MIN_WALL_LENGTH_M`] apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    id: WallId,
    start: Point,
    end: Point,
}

impl Wall {
    /// Builds a wall with a freshly generated id.
    pub fn new(start: Point, end: Point) -> Result<Self> {
        Self::with_id(WallId::generate(), start, end)
    }

    /// Builds a wall with a caller-supplied id (used on import).
    pub fn with_id(id: WallId, start: Point, end: Point) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PlanError::invalid_value(
                "wall",
                format!("endpoints must be finite, got {} -> {}", start, end),
            ));
        }
        let length = start.distance_to(&end);
        if length <= MIN_WALL_LENGTH_M {
            return Err(PlanError::DegenerateGeometry {
                length,
                min: MIN_WALL_LENGTH_M,
            });
        }
        Ok(Self { id, start, end })
    }

    pub fn id(&self) -> &WallId {
        &self.id
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Orientation of the wall in radians, `atan2(dy, dx)`.
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}
