//! Plan document import and export.
//!
//! The persisted form is a flat JSON object:
//!
//! ```json
//! {
//!   "walls":    [{ "id": "w_1a2b3c4d", "x1": 0, "y1": 0, "x2": 3, "y2": 0 }],
//!   "openings": [{ "id": "op_9f8e7d6c", "type": "door", "x": 1.5, "y": 0, "angle": 0, "length": 0.9 }],
//!   "gridSize": 0.5,
//!   "scale": 100
//! }
//! ```
//!
//! Every top-level key is optional on import. A missing key leaves the
//! corresponding in-memory value alone; unknown keys are ignored. Documents
//! are fully validated into a [`PlanUpdate`] before anything is applied.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use floorkit_core::{PlanError, Result};

use crate::entity_store::EntityStore;
use crate::model::{Opening, OpeningId, OpeningKind, Point, Wall, WallId};

/// Top-level plan document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walls: Option<Vec<WallData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openings: Option<Vec<OpeningData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Serialized wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallData {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Serialized opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub length: f64,
}

/// A validated document, ready to be applied.
#[derive(Debug, Clone, Default)]
pub struct PlanUpdate {
    pub walls: Option<Vec<Wall>>,
    pub openings: Option<Vec<Opening>>,
    pub grid_size: Option<f64>,
    pub scale: Option<f64>,
}

impl WallData {
    pub fn from_wall(wall: &Wall) -> Self {
        let (start, end) = (wall.start(), wall.end());
        Self {
            id: wall.id().as_str().to_string(),
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    pub fn to_wall(&self) -> Result<Wall> {
        if self.id.is_empty() {
            return Err(PlanError::malformed("wall with an empty id"));
        }
        Wall::with_id(
            WallId::from(self.id.as_str()),
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y2),
        )
        .map_err(|e| PlanError::malformed(format!("wall '{}': {}", self.id, e)))
    }
}

impl OpeningData {
    pub fn from_opening(opening: &Opening) -> Self {
        let anchor = opening.anchor();
        Self {
            id: opening.id().as_str().to_string(),
            kind: opening.kind(),
            x: anchor.x,
            y: anchor.y,
            angle: opening.angle(),
            length: opening.length(),
        }
    }

    pub fn to_opening(&self) -> Result<Opening> {
        if self.id.is_empty() {
            return Err(PlanError::malformed("opening with an empty id"));
        }
        Opening::with_id(
            OpeningId::from(self.id.as_str()),
            self.kind,
            Point::new(self.x, self.y),
            self.angle,
            self.length,
        )
        .map_err(|e| PlanError::malformed(format!("opening '{}': {}", self.id, e)))
    }
}

impl PlanDocument {
    /// Builds a complete document from the store and plan settings.
    pub fn from_store(store: &EntityStore, grid_size: f64, scale: f64) -> Self {
        Self {
            walls: Some(store.walls().map(WallData::from_wall).collect()),
            openings: Some(store.openings().map(OpeningData::from_opening).collect()),
            grid_size: Some(grid_size),
            scale: Some(scale),
        }
    }

    /// Parses a document. Syntax and shape errors become [`PlanError::MalformedDocument`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlanError::malformed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and parses a document from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Checks every field and converts the document into model types.
    pub fn validate(&self) -> Result<PlanUpdate> {
        let grid_size = self
            .grid_size
            .map(|g| positive("gridSize", g))
            .transpose()?;
        let scale = self.scale.map(|s| positive("scale", s)).transpose()?;

        let walls = match &self.walls {
            Some(list) => {
                let mut seen = HashSet::new();
                let mut walls = Vec::with_capacity(list.len());
                for data in list {
                    if !seen.insert(data.id.as_str()) {
                        return Err(PlanError::malformed(format!(
                            "duplicate wall id '{}'",
                            data.id
                        )));
                    }
                    walls.push(data.to_wall()?);
                }
                Some(walls)
            }
            None => None,
        };

        let openings = match &self.openings {
            Some(list) => {
                let mut seen = HashSet::new();
                let mut openings = Vec::with_capacity(list.len());
                for data in list {
                    if !seen.insert(data.id.as_str()) {
                        return Err(PlanError::malformed(format!(
                            "duplicate opening id '{}'",
                            data.id
                        )));
                    }
                    openings.push(data.to_opening()?);
                }
                Some(openings)
            }
            None => None,
        };

        Ok(PlanUpdate {
            walls,
            openings,
            grid_size,
            scale,
        })
    }
}

fn positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PlanError::malformed(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}
