//! # Default Placement
//!
//! Where a freshly dropped palette component lands on the canvas. The first
//! component goes to the top-left margin; each later one goes to the right
//! of the most recently *created* component — newest by the timestamp
//! embedded in its id, not by list position — while it still fits inside the
//! canvas width, and otherwise wraps to a new row below the tallest
//! component of the current row, left-aligned at the margin.

use pagecraft_common::newest_id;
use pagecraft_model::{Component, ComponentType, Style};

/// Mobile canvas width in px.
pub const CANVAS_WIDTH: f64 = 375.0;

/// Margin kept clear on every canvas edge.
pub const CANVAS_MARGIN: f64 = 20.0;

/// Horizontal/vertical gap between auto-placed components.
pub const COMPONENT_GAP: f64 = 10.0;

/// Default pixel size a palette component takes when its style does not
/// pin one down.
pub fn default_size(kind: &ComponentType) -> (f64, f64) {
    match kind {
        ComponentType::Text => (100.0, 24.0),
        ComponentType::Button => (120.0, 40.0),
        ComponentType::Image => (160.0, 120.0),
        ComponentType::Input => (200.0, 40.0),
        ComponentType::Container => (335.0, 120.0),
        ComponentType::List => (335.0, 160.0),
        ComponentType::Card => (335.0, 140.0),
        ComponentType::Divider => (335.0, 1.0),
        ComponentType::Space => (335.0, 16.0),
        ComponentType::Other(_) => (120.0, 40.0),
    }
}

/// Parse a px (or bare numeric) style value.
fn px(value: &Option<String>) -> Option<f64> {
    let raw = value.as_deref()?;
    raw.trim_end_matches("px").trim().parse::<f64>().ok()
}

fn component_rect(component: &Component) -> (f64, f64, f64, f64) {
    let (default_w, default_h) = default_size(&component.kind);
    let x = px(&component.style.left).unwrap_or(CANVAS_MARGIN);
    let y = px(&component.style.top).unwrap_or(CANVAS_MARGIN);
    let w = px(&component.style.width).unwrap_or(default_w);
    let h = px(&component.style.height).unwrap_or(default_h);
    (x, y, w, h)
}

/// Compute the canvas position for a new component of the given size.
pub fn place_new_component(existing: &[Component], size: (f64, f64)) -> (f64, f64) {
    let newest = newest_id(existing.iter().map(|c| c.id.as_str()))
        .and_then(|id| existing.iter().find(|c| c.id == id));

    let Some(newest) = newest else {
        return (CANVAS_MARGIN, CANVAS_MARGIN);
    };

    let (nx, ny, nw, _) = component_rect(newest);
    let candidate_x = nx + nw + COMPONENT_GAP;
    if candidate_x + size.0 <= CANVAS_WIDTH - CANVAS_MARGIN {
        return (candidate_x, ny);
    }

    // Wrap below the tallest component sharing the newest one's row.
    let row_height = existing
        .iter()
        .map(component_rect)
        .filter(|(_, y, _, _)| (y - ny).abs() < f64::EPSILON)
        .map(|(_, _, _, h)| h)
        .fold(0.0_f64, f64::max);

    (CANVAS_MARGIN, ny + row_height + COMPONENT_GAP)
}

/// Stamp a computed position onto a style (absolute canvas coordinates).
pub fn apply_position(style: &mut Style, position: (f64, f64)) {
    style.position = Some("absolute".to_string());
    style.left = Some(format!("{}px", position.0));
    style.top = Some(format!("{}px", position.1));
}
