//! Interaction type definitions: ToolMode, InputEvent, Gesture, ViewState, Effect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity_store::EntityStore;
use crate::model::{EntityRef, OpeningId, OpeningKind, Point, ScreenPoint, WallId};
use crate::viewport::Viewport;

/// Tool modes, chosen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    Select,
    #[default]
    Wall,
    Door,
    Window,
    Erase,
}

impl ToolMode {
    pub const ALL: [ToolMode; 5] = [
        ToolMode::Select,
        ToolMode::Wall,
        ToolMode::Door,
        ToolMode::Window,
        ToolMode::Erase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
            Self::Erase => "erase",
        }
    }

    /// The opening kind placed by this tool, if any.
    pub fn opening_kind(&self) -> Option<OpeningKind> {
        match self {
            Self::Door => Some(OpeningKind::Door),
            Self::Window => Some(OpeningKind::Window),
            _ => None,
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "wall" => Ok(Self::Wall),
            "door" => Ok(Self::Door),
            "window" => Ok(Self::Window),
            "erase" => Ok(Self::Erase),
            _ => {
                let names: Vec<&str> = Self::ALL.iter().map(ToolMode::as_str).collect();
                Err(format!(
                    "Unknown tool mode: {} (expected one of {})",
                    s,
                    names.join(", ")
                ))
            }
        }
    }
}

/// Pointer button carried by a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    /// Main button: drives the active tool.
    #[default]
    Primary,
    /// Pan button (middle mouse in the default bindings).
    Secondary,
}

/// Discrete input delivered by the presentation layer.
///
/// Pointer positions are in pixels relative to the drawing surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    Press {
        position: ScreenPoint,
        #[serde(default)]
        button: PointerButton,
    },
    Move {
        position: ScreenPoint,
    },
    Release {
        position: ScreenPoint,
    },
    /// The pointer left the surface or the gesture was otherwise interrupted.
    Leave,
    SetTool {
        tool: ToolMode,
    },
}

impl InputEvent {
    pub fn press(x: f64, y: f64) -> Self {
        Self::Press {
            position: ScreenPoint::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn pan_press(x: f64, y: f64) -> Self {
        Self::Press {
            position: ScreenPoint::new(x, y),
            button: PointerButton::Secondary,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn release(x: f64, y: f64) -> Self {
        Self::Release {
            position: ScreenPoint::new(x, y),
        }
    }
}

/// The gesture in progress between a press and its release.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Gesture {
    #[default]
    Idle,
    /// Draft wall from `origin` to `current`, in world units (already snapped).
    DrawingWall { origin: Point, current: Point },
    /// Pan drag started at screen point `origin` while the pan was `start_pan`.
    Panning {
        origin: ScreenPoint,
        start_pan: ScreenPoint,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The draft wall segment, when a wall is being drawn.
    pub fn draft_wall(&self) -> Option<(Point, Point)> {
        match self {
            Self::DrawingWall { origin, current } => Some((*origin, *current)),
            _ => None,
        }
    }
}

/// Runtime view state. Not part of the persisted plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub tool: ToolMode,
    pub selection: Option<EntityRef>,
    pub gesture: Gesture,
    pub pan: ScreenPoint,
}

impl ViewState {
    pub fn new(tool: ToolMode) -> Self {
        Self {
            tool,
            ..Self::default()
        }
    }
}

/// Store mutation requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreateWall {
        start: Point,
        end: Point,
    },
    RemoveWall(WallId),
    CreateOpening {
        kind: OpeningKind,
        anchor: Point,
        angle: f64,
        length: f64,
    },
    RemoveOpening(OpeningId),
}

/// Read-only inputs for one reducer step.
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext<'a> {
    pub store: &'a EntityStore,
    pub grid_size: f64,
    pub scale: f64,
    pub snap_enabled: bool,
}

impl ReduceContext<'_> {
    /// Viewport built from the plan scale and the current pan.
    pub fn viewport(&self, view: &ViewState) -> Viewport {
        Viewport::new(self.scale).with_pan(view.pan)
    }
}

/// Output of one reducer step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub view: ViewState,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub(crate) fn unchanged(view: &ViewState) -> Self {
        Self {
            view: view.clone(),
            effects: Vec::new(),
        }
    }
}
