//! Sizes and stroke constants for drawn frames.

/// Radius of a node circle in Euclidean mode, before zoom (in px)
pub const EUCLIDEAN_NODE_RADIUS: f64 = 10.0;

/// Hover markers are this many times smaller than the hovered node
pub const HOVER_MARKER_DIVISOR: f64 = 20.0;

/// Stroke widths per element type (in px)
pub struct StrokeWidths;

impl StrokeWidths {
    pub const BACKGROUND: f64 = 1.0;
    pub const POINTER_PATH: f64 = 1.5;
}

/// Dash pattern for the pointer geodesic preview
pub const POINTER_DASH: &str = "4 4";
