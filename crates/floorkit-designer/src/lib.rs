//! # FloorKit Designer
//!
//! Geometric editing engine for 2D floor plans. Walls are straight segments
//! in world units (meters); doors and windows attach to walls. Plans import
//! and export as JSON and render to SVG.
//!
//! ## Core Components
//!
//! - **Model**: `Point`, `ScreenPoint`, `Wall`, `Opening`, `EntityRef`
//! - **Viewport**: world/screen coordinate transform (scale + pan)
//! - **Snap**: grid quantization
//! - **Geometry**: point-to-segment distance, nearest wall, picking
//! - **Entity Store**: id-indexed walls and openings with stable scan order
//! - **Interaction**: pure tool state machine (`reduce`)
//! - **Serialization / SVG**: plan documents and vector export
//! - **Editor**: `PlanEditor`, the facade a presentation layer drives
//!
//! ## Architecture
//!
//! ```text
//! InputEvent ─► reduce(ViewState, event, ctx) ─► Transition { view, effects }
//!                                                     │
//! PlanEditor ◄────────────── apply effects ───────────┘
//!   ├── EntityStore (walls, openings)
//!   ├── PlanSettings (grid size, scale)
//!   └── ViewState (tool, selection, gesture, pan)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorkit_designer::{InputEvent, PlanEditor, ToolMode};
//!
//! let mut editor = PlanEditor::new();
//! editor.set_snap_enabled(false);
//! editor.set_tool(ToolMode::Wall);
//! editor.dispatch(InputEvent::press(0.0, 0.0));
//! editor.dispatch(InputEvent::moved(300.0, 0.0));
//! editor.dispatch(InputEvent::release(300.0, 0.0));
//! assert_eq!(editor.store().wall_count(), 1);
//!
//! let json = editor.export_plan_json().unwrap();
//! assert!(json.contains("\"gridSize\""));
//! ```

pub mod editor;
pub mod entity_store;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod serialization;
pub mod snap;
pub mod svg_renderer;
pub mod viewport;

pub use editor::{EditorOptions, PlanEditor, PlanSettings};
pub use entity_store::{EntityStore, SpatialLookup};
pub use geometry::{
    distance_point_to_segment, find_nearest_wall, pick_entity, project_point_onto_segment, WallHit,
};
pub use interaction::{
    reduce, Effect, Gesture, InputEvent, PointerButton, ReduceContext, ToolMode, Transition,
    ViewState,
};
pub use model::{EntityRef, Opening, OpeningId, OpeningKind, Point, ScreenPoint, Wall, WallId};
pub use serialization::{OpeningData, PlanDocument, PlanUpdate, WallData};
pub use snap::{snap_to_grid, GridSnapper};
pub use svg_renderer::{render_svg, SvgScene, SvgStyle};
pub use viewport::Viewport;

pub use floorkit_core::{PlanError, Result};
