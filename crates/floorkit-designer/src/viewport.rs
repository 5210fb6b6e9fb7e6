//! Viewport and coordinate transformation for plan rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (plan space, meters). The transform is a per-axis scale
//! followed by a pan offset; unlike a CAD viewport there is no Y flip, so
//! world +Y points down the screen.

use std::fmt;

use floorkit_core::constants::{
    DEFAULT_SCALE_PX_PER_M, DEFAULT_VIEWPORT_HEIGHT_PX, DEFAULT_VIEWPORT_WIDTH_PX,
};

use crate::model::{Point, ScreenPoint};

/// Represents the viewport transformation state (scale and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport with the given scale (pixels per meter) and no pan.
    ///
    /// A non-positive or non-finite scale falls back to the default scale.
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            DEFAULT_SCALE_PX_PER_M
        };
        Self {
            scale,
            pan_x: 0.0,
            pan_y: 0.0,
            width: DEFAULT_VIEWPORT_WIDTH_PX,
            height: DEFAULT_VIEWPORT_HEIGHT_PX,
        }
    }

    /// Builder-style pan setter.
    pub fn with_pan(mut self, pan: ScreenPoint) -> Self {
        self.set_pan(pan.x, pan.y);
        self
    }

    /// Builder-style size setter.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.set_size(width, height);
        self
    }

    /// Gets the scale in pixels per meter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale. Non-positive or non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn pan(&self) -> ScreenPoint {
        ScreenPoint::new(self.pan_x, self.pan_y)
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan to origin (0, 0).
    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Gets the viewport width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Gets the viewport height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the viewport dimensions (typically called when the surface resizes).
    pub fn set_size(&mut self, width: f64, height: f64) {
        if width.is_finite() && width > 0.0 {
            self.width = width;
        }
        if height.is_finite() && height > 0.0 {
            self.height = height;
        }
    }

    /// Converts world coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel = world * scale + pan
    /// ```
    pub fn world_to_screen(&self, p: Point) -> ScreenPoint {
        ScreenPoint::new(p.x * self.scale + self.pan_x, p.y * self.scale + self.pan_y)
    }

    /// Converts pixel coordinates to world coordinates.
    ///
    /// ```text
    /// world = (pixel - pan) / scale
    /// ```
    pub fn screen_to_world(&self, p: ScreenPoint) -> Point {
        Point::new((p.x - self.pan_x) / self.scale, (p.y - self.pan_y) / self.scale)
    }

    /// Converts a world length to a pixel length.
    pub fn world_length_to_screen(&self, meters: f64) -> f64 {
        meters * self.scale
    }

    /// World-space rectangle `(min, max)` covered by the viewport.
    pub fn visible_world_bounds(&self) -> (Point, Point) {
        let a = self.screen_to_world(ScreenPoint::new(0.0, 0.0));
        let b = self.screen_to_world(ScreenPoint::new(self.width, self.height));
        (
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.1} px/m | Pan: ({:.1}, {:.1})",
            self.scale, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_PX_PER_M)
    }
}
