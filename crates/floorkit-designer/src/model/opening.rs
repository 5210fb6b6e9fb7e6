use floorkit_core::constants::DEFAULT_OPENING_LENGTH_M;
use floorkit_core::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{generate_id, Point};

/// Opaque opening identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningId(String);

impl OpeningId {
    /// Generates a fresh `op_xxxxxxxx` id.
    pub fn generate() -> Self {
        Self(generate_id("op"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OpeningId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OpeningId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for OpeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Door or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpeningKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "door" => Ok(Self::Door),
            "window" => Ok(Self::Window),
            _ => Err(format!("Unknown opening type: {}", s)),
        }
    }
}

/// A door or window anchored near a wall.
///
/// The angle is copied from the wall at placement time; after that the
/// opening is independent of wall geometry and survives the wall's removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Opening {
    id: OpeningId,
    kind: OpeningKind,
    anchor: Point,
    angle: f64,
    length: f64,
}

impl Opening {
    /// Builds an opening of the default length with a fresh id.
    pub fn new(kind: OpeningKind, anchor: Point, angle: f64) -> Result<Self> {
        Self::with_id(
            OpeningId::generate(),
            kind,
            anchor,
            angle,
            DEFAULT_OPENING_LENGTH_M,
        )
    }

    /// Builds an opening with every field supplied (used on import).
    pub fn with_id(
        id: OpeningId,
        kind: OpeningKind,
        anchor: Point,
        angle: f64,
        length: f64,
    ) -> Result<Self> {
        if !anchor.is_finite() || !angle.is_finite() {
            return Err(PlanError::invalid_value(
                "opening",
                "anchor and angle must be finite",
            ));
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(PlanError::invalid_value(
                "length",
                format!("must be a positive length, got {}", length),
            ));
        }
        Ok(Self {
            id,
            kind,
            anchor,
            angle,
            length,
        })
    }

    pub fn id(&self) -> &OpeningId {
        &self.id
    }

    pub fn kind(&self) -> OpeningKind {
        self.kind
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// The far end of the opening, `length` meters along `angle` from the anchor.
    pub fn end(&self) -> Point {
        Point::new(
            self.anchor.x + self.angle.cos() * self.length,
            self.anchor.y + self.angle.sin() * self.length,
        )
    }
}
