//! File I/O operations (save, load, new) for the plan editor.

use std::path::Path;

use floorkit_core::Result;

use super::PlanEditor;
use crate::serialization::PlanDocument;

impl PlanEditor {
    /// Save the plan as JSON.
    pub fn save_plan(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.export_plan_json()?;
        std::fs::write(path, json)?;

        tracing::info!(
            "Saved plan to {} ({} walls, {} openings)",
            path.display(),
            self.store.wall_count(),
            self.store.opening_count()
        );
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load a plan document from disk.
    ///
    /// Behaves like an import: keys missing from the file keep their current
    /// values, and a rejected file leaves the editor untouched.
    pub fn load_plan(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let document = PlanDocument::load_from_file(path)?;
        self.import_plan(&document)?;

        tracing::info!("Loaded plan from {}", path.display());
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Write the current view as SVG.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.export_svg())?;
        tracing::info!("Exported SVG to {}", path.display());
        Ok(())
    }

    /// Start a new plan (clear all, forget the file path).
    pub fn new_plan(&mut self) {
        self.store.clear();
        self.view.selection = None;
        self.view.gesture = Default::default();
        self.current_file_path = None;
        self.is_modified = false;
    }

    /// File name of the current plan, or "Untitled".
    pub fn display_name(&self) -> String {
        self.current_file_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}
