//! Plan editor facade.
//!
//! [`PlanEditor`] owns the entity store, the plan settings and the view
//! state, and is the single entry point a presentation layer talks to.
//! Input events go through [`PlanEditor::dispatch`], which runs the pure
//! reducer and then applies the resulting effects to the store in order.
//!
//! Submodules:
//! - `file_io`: save/load of plan documents and SVG export to disk

mod file_io;

use std::path::PathBuf;

use floorkit_core::constants::{
    DEFAULT_GRID_SIZE_M, DEFAULT_SCALE_PX_PER_M, DEFAULT_VIEWPORT_HEIGHT_PX,
    DEFAULT_VIEWPORT_WIDTH_PX,
};
use floorkit_core::{PlanError, Result};

use crate::entity_store::EntityStore;
use crate::interaction::{reduce, Effect, InputEvent, ReduceContext, ToolMode, ViewState};
use crate::model::{EntityRef, Opening, OpeningId, Point, ScreenPoint, Wall, WallId};
use crate::serialization::PlanDocument;
use crate::snap::GridSnapper;
use crate::svg_renderer::{render_svg, SvgScene, SvgStyle};
use crate::viewport::Viewport;

/// Persisted plan parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanSettings {
    /// Grid spacing in meters.
    pub grid_size: f64,
    /// Pixels per meter.
    pub scale: f64,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE_M,
            scale: DEFAULT_SCALE_PX_PER_M,
        }
    }
}

/// Editor toggles that are not part of the plan document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorOptions {
    pub snap_enabled: bool,
    pub show_grid: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            show_grid: true,
        }
    }
}

/// Editor state for UI integration
#[derive(Debug, Clone)]
pub struct PlanEditor {
    store: EntityStore,
    settings: PlanSettings,
    options: EditorOptions,
    view: ViewState,
    viewport_width: f64,
    viewport_height: f64,
    svg_style: SvgStyle,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl Default for PlanEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanEditor {
    /// Creates an empty plan with default settings and the wall tool active.
    pub fn new() -> Self {
        Self::with_settings(PlanSettings::default(), EditorOptions::default())
    }

    /// Creates an empty plan with the given settings.
    ///
    /// Invalid grid size or scale values fall back to the defaults.
    pub fn with_settings(settings: PlanSettings, options: EditorOptions) -> Self {
        let mut editor = Self {
            store: EntityStore::new(),
            settings: PlanSettings::default(),
            options,
            view: ViewState::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH_PX,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT_PX,
            svg_style: SvgStyle::default(),
            current_file_path: None,
            is_modified: false,
        };
        if let Err(e) = editor.set_grid_size(settings.grid_size) {
            tracing::warn!("{}; using {} m", e, DEFAULT_GRID_SIZE_M);
        }
        if let Err(e) = editor.set_scale(settings.scale) {
            tracing::warn!("{}; using {} px/m", e, DEFAULT_SCALE_PX_PER_M);
        }
        editor.is_modified = false;
        editor
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn settings(&self) -> PlanSettings {
        self.settings
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    pub fn tool(&self) -> ToolMode {
        self.view.tool
    }

    pub fn selection(&self) -> Option<&EntityRef> {
        self.view.selection.as_ref()
    }

    /// The in-progress wall, if one is being drawn.
    pub fn draft_wall(&self) -> Option<(Point, Point)> {
        self.view.gesture.draft_wall()
    }

    pub fn pan(&self) -> ScreenPoint {
        self.view.pan
    }

    /// Viewport reflecting the current scale, pan and surface size.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.settings.scale)
            .with_pan(self.view.pan)
            .with_size(self.viewport_width, self.viewport_height)
    }

    /// Snapper configured from the current grid size and snap toggle.
    pub fn snapper(&self) -> GridSnapper {
        GridSnapper::new(self.settings.grid_size, self.options.snap_enabled)
    }

    /// Converts a surface position to the (snapped) world point tools operate on.
    pub fn world_point_at(&self, screen: ScreenPoint) -> Point {
        self.snapper().snap(self.viewport().screen_to_world(screen))
    }

    /// Feeds one input event through the tool state machine.
    ///
    /// Effects are applied to the store in order and also returned so the
    /// caller can react to them.
    pub fn dispatch(&mut self, event: InputEvent) -> Vec<Effect> {
        let transition = {
            let ctx = ReduceContext {
                store: &self.store,
                grid_size: self.settings.grid_size,
                scale: self.settings.scale,
                snap_enabled: self.options.snap_enabled,
            };
            reduce(&self.view, &event, &ctx)
        };
        self.view = transition.view;
        for effect in &transition.effects {
            self.apply_effect(effect);
        }
        transition.effects
    }

    fn apply_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::CreateWall { start, end } => match Wall::new(*start, *end) {
                Ok(wall) => {
                    tracing::debug!("Created wall {} from {} to {}", wall.id(), start, end);
                    self.store.add_wall(wall);
                    self.is_modified = true;
                }
                Err(e) => tracing::debug!("Wall not created: {}", e),
            },
            Effect::CreateOpening {
                kind,
                anchor,
                angle,
                length,
            } => match Opening::with_id(OpeningId::generate(), *kind, *anchor, *angle, *length) {
                Ok(opening) => {
                    tracing::debug!("Placed {} {} at {}", kind, opening.id(), anchor);
                    self.store.add_opening(opening);
                    self.is_modified = true;
                }
                Err(e) => tracing::warn!("Opening not created: {}", e),
            },
            Effect::RemoveWall(id) => {
                if self.store.remove_wall(id).is_some() {
                    tracing::debug!("Erased wall {}", id);
                    self.drop_selection_of(&EntityRef::Wall(id.clone()));
                    self.is_modified = true;
                }
            }
            Effect::RemoveOpening(id) => {
                if self.store.remove_opening(id).is_some() {
                    tracing::debug!("Erased opening {}", id);
                    self.drop_selection_of(&EntityRef::Opening(id.clone()));
                    self.is_modified = true;
                }
            }
        }
    }

    fn drop_selection_of(&mut self, target: &EntityRef) {
        if self.view.selection.as_ref() == Some(target) {
            self.view.selection = None;
        }
    }

    /// Clears the selection if it no longer resolves to an entity.
    fn prune_selection(&mut self) {
        if let Some(sel) = &self.view.selection {
            if !self.store.contains(sel) {
                self.view.selection = None;
            }
        }
    }

    pub fn set_tool(&mut self, tool: ToolMode) {
        self.dispatch(InputEvent::SetTool { tool });
    }

    /// Selects an entity directly. Returns false if it does not exist.
    pub fn select(&mut self, target: EntityRef) -> bool {
        if self.store.contains(&target) {
            self.view.selection = Some(target);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.view.selection = None;
    }

    /// Sets the grid spacing in meters.
    pub fn set_grid_size(&mut self, grid_size: f64) -> Result<()> {
        if !(grid_size.is_finite() && grid_size > 0.0) {
            return Err(PlanError::invalid_value(
                "grid_size",
                format!("must be a positive number, got {}", grid_size),
            ));
        }
        if self.settings.grid_size != grid_size {
            self.settings.grid_size = grid_size;
            self.is_modified = true;
        }
        Ok(())
    }

    /// Sets the scale in pixels per meter.
    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(PlanError::invalid_value(
                "scale",
                format!("must be a positive number, got {}", scale),
            ));
        }
        if self.settings.scale != scale {
            self.settings.scale = scale;
            self.is_modified = true;
        }
        Ok(())
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.options.snap_enabled = enabled;
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.options.show_grid = show;
    }

    /// Sets the drawing surface size in pixels.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> Result<()> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(PlanError::invalid_value(
                "viewport",
                format!("size must be positive, got {}x{}", width, height),
            ));
        }
        self.viewport_width = width;
        self.viewport_height = height;
        Ok(())
    }

    pub fn viewport_size(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    /// Sets the pan offset in pixels.
    pub fn set_pan(&mut self, pan: ScreenPoint) {
        self.view.pan = pan;
    }

    /// Removes all walls and openings and clears the selection.
    pub fn clear(&mut self) {
        if !self.store.is_empty() {
            self.is_modified = true;
        }
        self.store.clear();
        self.view.selection = None;
        tracing::info!("Plan cleared");
    }

    pub fn wall(&self, id: &WallId) -> Option<&Wall> {
        self.store.wall(id)
    }

    pub fn opening(&self, id: &OpeningId) -> Option<&Opening> {
        self.store.opening(id)
    }

    /// Complete plan document for the current state.
    pub fn export_plan(&self) -> PlanDocument {
        PlanDocument::from_store(&self.store, self.settings.grid_size, self.settings.scale)
    }

    /// Current plan as pretty-printed JSON.
    pub fn export_plan_json(&self) -> Result<String> {
        self.export_plan().to_json_pretty()
    }

    /// Applies a plan document.
    ///
    /// The document is validated in full first; on error nothing changes.
    /// Keys absent from the document keep their current values.
    pub fn import_plan(&mut self, document: &PlanDocument) -> Result<()> {
        let update = document.validate()?;

        let wall_count = update.walls.as_ref().map(Vec::len);
        let opening_count = update.openings.as_ref().map(Vec::len);

        self.store.replace_all(update.walls, update.openings);
        if let Some(grid_size) = update.grid_size {
            self.settings.grid_size = grid_size;
        }
        if let Some(scale) = update.scale {
            self.settings.scale = scale;
        }
        self.prune_selection();
        self.is_modified = true;

        tracing::info!(
            "Imported plan (walls: {:?}, openings: {:?}, gridSize: {:?}, scale: {:?})",
            wall_count,
            opening_count,
            update.grid_size,
            update.scale
        );
        Ok(())
    }

    /// Parses and applies a JSON plan document.
    pub fn import_plan_json(&mut self, json: &str) -> Result<()> {
        let document = PlanDocument::from_json(json).inspect_err(|e| {
            tracing::warn!("Rejected plan document: {}", e);
        })?;
        self.import_plan(&document).inspect_err(|e| {
            tracing::warn!("Rejected plan document: {}", e);
        })
    }

    pub fn svg_style(&self) -> &SvgStyle {
        &self.svg_style
    }

    pub fn set_svg_style(&mut self, style: SvgStyle) {
        self.svg_style = style;
    }

    /// Renders the current view as an SVG document.
    pub fn export_svg(&self) -> String {
        let viewport = self.viewport();
        let scene = SvgScene {
            store: &self.store,
            viewport: &viewport,
            grid_size: self.settings.grid_size,
            show_grid: self.options.show_grid,
            selection: self.view.selection.as_ref(),
            draft: self.draft_wall(),
        };
        render_svg(&scene, &self.svg_style)
    }
}
