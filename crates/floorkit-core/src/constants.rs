//! Editor-wide constants.
//!
//! All lengths are in world units (meters) unless the name says otherwise.

/// Walls shorter than or equal to this are rejected at creation.
pub const MIN_WALL_LENGTH_M: f64 = 0.05;

/// A door or window attaches to the nearest wall only when it is strictly
/// closer than this.
pub const OPENING_ATTACH_DISTANCE_M: f64 = 0.5;

/// Maximum distance (inclusive) for picking an entity with Select/Erase.
pub const PICK_DISTANCE_M: f64 = 0.15;

/// Length given to newly placed openings.
pub const DEFAULT_OPENING_LENGTH_M: f64 = 0.9;

/// Default grid spacing.
pub const DEFAULT_GRID_SIZE_M: f64 = 0.5;

/// Default scale in pixels per meter.
pub const DEFAULT_SCALE_PX_PER_M: f64 = 100.0;

/// Default drawing surface size in pixels.
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 1200.0;
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 700.0;

/// Upper bound on grid lines (both axes together) in a rendered export.
pub const MAX_GRID_LINES: usize = 2000;
