//! SVG export of the current plan view.
//! Produces a standalone document in screen space:
//! - Background rectangle sized to the viewport
//! - Optional grid lines at the plan's grid spacing
//! - Walls, the in-progress draft wall, and openings with text labels
//!
//! The output is a rendering, not a re-editable document.

use floorkit_core::constants::MAX_GRID_LINES;

use crate::entity_store::EntityStore;
use crate::model::{EntityRef, Point};
use crate::viewport::Viewport;

/// Colours and stroke widths used by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub background: String,
    pub grid_stroke: String,
    pub grid_width: f64,
    pub wall_stroke: String,
    pub wall_width: f64,
    pub selection_stroke: String,
    pub draft_stroke: String,
    pub draft_width: f64,
    pub draft_dash: String,
    pub opening_stroke: String,
    pub opening_width: f64,
    pub label_font_size: f64,
    /// Vertical offset of opening labels above the anchor, in pixels.
    pub label_offset: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: "#fff".to_string(),
            grid_stroke: "#eee".to_string(),
            grid_width: 1.0,
            wall_stroke: "#333".to_string(),
            wall_width: 6.0,
            selection_stroke: "#ff6600".to_string(),
            draft_stroke: "#0066ff".to_string(),
            draft_width: 4.0,
            draft_dash: "6 4".to_string(),
            opening_stroke: "#00aaff".to_string(),
            opening_width: 4.0,
            label_font_size: 12.0,
            label_offset: 10.0,
        }
    }
}

/// Everything the renderer looks at. Borrowed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct SvgScene<'a> {
    pub store: &'a EntityStore,
    /// Viewport carrying scale, pan, and surface size.
    pub viewport: &'a Viewport,
    pub grid_size: f64,
    pub show_grid: bool,
    pub selection: Option<&'a EntityRef>,
    pub draft: Option<(Point, Point)>,
}

/// Renders the scene into an SVG document string.
pub fn render_svg(scene: &SvgScene<'_>, style: &SvgStyle) -> String {
    let vp = scene.viewport;
    let (width, height) = (vp.width(), vp.height());

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        fmt_num(width),
        fmt_num(height),
        fmt_num(width),
        fmt_num(height)
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        fmt_num(width),
        fmt_num(height),
        style.background
    ));

    if scene.show_grid {
        svg.push_str(&render_grid(vp, scene.grid_size, style));
    }

    svg.push_str("  <g id=\"walls\">\n");
    for wall in scene.store.walls() {
        let selected = matches!(scene.selection, Some(EntityRef::Wall(id)) if id == wall.id());
        let stroke = if selected {
            &style.selection_stroke
        } else {
            &style.wall_stroke
        };
        let a = vp.world_to_screen(wall.start());
        let b = vp.world_to_screen(wall.end());
        svg.push_str(&format!(
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>\n",
            fmt_num(a.x),
            fmt_num(a.y),
            fmt_num(b.x),
            fmt_num(b.y),
            stroke,
            fmt_num(style.wall_width)
        ));
    }
    if let Some((origin, current)) = scene.draft {
        let a = vp.world_to_screen(origin);
        let b = vp.world_to_screen(current);
        svg.push_str(&format!(
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-dasharray=\"{}\"/>\n",
            fmt_num(a.x),
            fmt_num(a.y),
            fmt_num(b.x),
            fmt_num(b.y),
            style.draft_stroke,
            fmt_num(style.draft_width),
            style.draft_dash
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g id=\"openings\">\n");
    for opening in scene.store.openings() {
        let selected =
            matches!(scene.selection, Some(EntityRef::Opening(id)) if id == opening.id());
        let stroke = if selected {
            &style.selection_stroke
        } else {
            &style.opening_stroke
        };
        let a = vp.world_to_screen(opening.anchor());
        let b = vp.world_to_screen(opening.end());
        svg.push_str(&format!(
            "    <g>\n      <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(a.x),
            fmt_num(a.y),
            fmt_num(b.x),
            fmt_num(b.y),
            stroke,
            fmt_num(style.opening_width)
        ));
        svg.push_str(&format!(
            "      <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\">{}</text>\n    </g>\n",
            fmt_num(a.x),
            fmt_num(a.y - style.label_offset),
            fmt_num(style.label_font_size),
            opening.kind()
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

/// Grid lines covering the visible world area, as an SVG group.
fn render_grid(vp: &Viewport, grid_size: f64, style: &SvgStyle) -> String {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return String::new();
    }
    let (width, height) = (vp.width(), vp.height());
    let (min, max) = vp.visible_world_bounds();

    let first_x = (min.x / grid_size).floor();
    let last_x = (max.x / grid_size).ceil();
    let first_y = (min.y / grid_size).floor();
    let last_y = (max.y / grid_size).ceil();

    // Counted in f64 so a huge visible span cannot overflow the index range.
    let lines = (last_x - first_x + 1.0).max(0.0) + (last_y - first_y + 1.0).max(0.0);
    if !lines.is_finite() || lines > MAX_GRID_LINES as f64 {
        tracing::debug!(
            "Skipping grid: {} lines exceeds the limit of {}",
            lines,
            MAX_GRID_LINES
        );
        return String::new();
    }
    let (first_x, last_x) = (first_x as i64, last_x as i64);
    let (first_y, last_y) = (first_y as i64, last_y as i64);

    let mut out = String::from("  <g id=\"grid\">\n");
    for i in first_x..=last_x {
        let sx = vp.world_to_screen(Point::new(i as f64 * grid_size, 0.0)).x;
        out.push_str(&format!(
            "    <line x1=\"{}\" y1=\"0\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(sx),
            fmt_num(sx),
            fmt_num(height),
            style.grid_stroke,
            fmt_num(style.grid_width)
        ));
    }
    for j in first_y..=last_y {
        let sy = vp.world_to_screen(Point::new(0.0, j as f64 * grid_size)).y;
        out.push_str(&format!(
            "    <line x1=\"0\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(sy),
            fmt_num(width),
            fmt_num(sy),
            style.grid_stroke,
            fmt_num(style.grid_width)
        ));
    }
    out.push_str("  </g>\n");
    out
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
