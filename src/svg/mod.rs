//! SVG drawing layer - turns renderer frames into SVG strings.
//!
//! Pure string building, no DOM manipulation.

pub mod types;
mod renderer;
mod theme;
pub mod styles;

pub use types::*;
pub use renderer::{escape_xml, render_svg, render_svg_with_overlay};
pub use theme::{DiagramColors, Theme};
