//! Configuration and settings management for FloorKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor defaults (grid size, scale, snapping, grid display, start tool)
//! - Viewport size used for headless rendering

pub use floorkit_core::units::MeasurementSystem;
use floorkit_core::constants::{
    DEFAULT_GRID_SIZE_M, DEFAULT_SCALE_PX_PER_M, DEFAULT_VIEWPORT_HEIGHT_PX,
    DEFAULT_VIEWPORT_WIDTH_PX,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 10;

const CONFIG_DIR_NAME: &str = "floorkit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Editor defaults applied to new plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing in meters
    pub grid_size: f64,
    /// Pixels per meter
    pub scale: f64,
    /// Snap pointer positions to the grid
    pub snap_enabled: bool,
    /// Draw the grid
    pub show_grid: bool,
    /// Tool active at startup (select, wall, door, window, erase)
    pub default_tool: String,
    /// Units used when reporting lengths
    pub measurement_system: MeasurementSystem,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE_M,
            scale: DEFAULT_SCALE_PX_PER_M,
            snap_enabled: true,
            show_grid: true,
            default_tool: "wall".to_string(),
            measurement_system: MeasurementSystem::Metric,
        }
    }
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH_PX,
            height: DEFAULT_VIEWPORT_HEIGHT_PX,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Editor defaults
    pub editor: EditorSettings,
    /// Viewport size
    pub viewport: ViewportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(ConfigError::UnsupportedFormat(format!(
            "{} (config file must be .json or .toml)",
            path.display()
        ))
        .into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.editor.grid_size.is_finite() && self.editor.grid_size > 0.0) {
            return Err(ConfigError::out_of_range("editor.grid_size", self.editor.grid_size).into());
        }

        if !(self.editor.scale.is_finite() && self.editor.scale > 0.0) {
            return Err(ConfigError::out_of_range("editor.scale", self.editor.scale).into());
        }

        if self.editor.default_tool.trim().is_empty() {
            return Err(ConfigError::out_of_range("editor.default_tool", "\"\"").into());
        }

        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0)
            || !self.viewport.width.is_finite()
            || !self.viewport.height.is_finite()
        {
            return Err(ConfigError::out_of_range(
                "viewport",
                format!("{}x{}", self.viewport.width, self.viewport.height),
            )
            .into());
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

/// Platform config directory for FloorKit (e.g. `~/.config/floorkit` on Linux).
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no configuration directory available".to_string())
                .into()
        })
}

/// Default location of the config file.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
