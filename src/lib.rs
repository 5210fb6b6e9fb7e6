//! # FloorKit
//!
//! A 2D floor-plan editor core: draw walls on a snapping grid, attach doors
//! and windows, import/export plans as JSON and render them to SVG.
//!
//! ## Architecture
//!
//! FloorKit is organized as a workspace with multiple crates:
//!
//! 1. **floorkit-core** - Error types, constants, units
//! 2. **floorkit-designer** - Geometry, entity store, tool state machine, serialization
//! 3. **floorkit-settings** - Persisted configuration (JSON/TOML)
//! 4. **floorkit** - This crate: re-exports, logging setup, and the `floorkit` CLI

use anyhow::Context;

pub use floorkit_core::units::{format_length, MeasurementSystem};
pub use floorkit_core::{PlanError, Result};
pub use floorkit_designer as designer;
pub use floorkit_designer::{
    EditorOptions, EntityRef, InputEvent, Opening, OpeningKind, PlanDocument, PlanEditor,
    PlanSettings, Point, ScreenPoint, ToolMode, Wall,
};
pub use floorkit_settings::{Config, EditorSettings, ViewportSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Compact output on stderr (stdout is reserved for command output)
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Builds an editor from persisted configuration.
pub fn editor_from_config(config: &Config) -> anyhow::Result<PlanEditor> {
    config.validate()?;

    let tool: ToolMode = config
        .editor
        .default_tool
        .parse()
        .map_err(anyhow::Error::msg)
        .context("Invalid editor.default_tool")?;

    let mut editor = PlanEditor::with_settings(
        PlanSettings {
            grid_size: config.editor.grid_size,
            scale: config.editor.scale,
        },
        EditorOptions {
            snap_enabled: config.editor.snap_enabled,
            show_grid: config.editor.show_grid,
        },
    );
    editor.set_tool(tool);
    editor.set_viewport_size(config.viewport.width, config.viewport.height)?;
    Ok(editor)
}

/// Human-readable summary of a plan, one fact per line.
pub fn plan_summary(editor: &PlanEditor, units: MeasurementSystem) -> String {
    let store = editor.store();
    let settings = editor.settings();
    let doors = store
        .openings()
        .filter(|o| o.kind() == OpeningKind::Door)
        .count();
    let windows = store.opening_count() - doors;

    let lines = [
        format!("Plan: {}", editor.display_name()),
        format!("Walls: {}", store.wall_count()),
        format!("Doors: {}", doors),
        format!("Windows: {}", windows),
        format!(
            "Total wall length: {}",
            format_length(store.total_wall_length(), units)
        ),
        format!("Grid size: {}", format_length(settings.grid_size, units)),
        format!("Scale: {} px/m", settings.scale),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
