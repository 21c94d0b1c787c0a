//! SVG renderer - converts a Frame into an SVG string.
//!
//! Pure string building, no DOM manipulation.
//! Renders back-to-front: background → edges → nodes → overlay.

use super::styles::{StrokeWidths, POINTER_DASH};
use super::theme::{build_style_block, svg_open_tag, DiagramColors};
use super::types::{Background, EdgeDraw, Frame, NodeDraw, Overlay};
use crate::geometry::{Circle, PathDescriptor};

/// Render a frame as an SVG string.
pub fn render_svg(frame: &Frame, colors: &DiagramColors, transparent: bool) -> String {
    render_svg_with_overlay(frame, &Overlay::default(), colors, transparent)
}

/// Render a frame plus hover and pointer decorations.
pub fn render_svg_with_overlay(
    frame: &Frame,
    overlay: &Overlay,
    colors: &DiagramColors,
    transparent: bool,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(svg_open_tag(frame.width, frame.height, colors, transparent));
    parts.push(build_style_block());

    // 1. Disk or plot area
    parts.push(render_background(&frame.background));

    // 2. Edges (rendered behind nodes)
    parts.push(format!(
        r#"<g class="links" stroke-width="{}">"#,
        fmt_num(frame.edge_thickness)
    ));
    for edge in &frame.edges {
        parts.push(render_edge(edge));
    }
    parts.push("</g>".to_string());

    // 3. Nodes
    parts.push(r#"<g class="nodes">"#.to_string());
    for node in &frame.nodes {
        parts.push(render_node(node));
    }
    parts.push("</g>".to_string());

    // 4. Overlay
    if let Some(ref path) = overlay.pointer_path {
        parts.push(render_pointer_path(path));
    }
    if let Some(ref hover) = overlay.hover {
        for marker in &hover.markers {
            parts.push(render_circle(marker, "hover-marker", None));
        }
    }

    parts.push("</svg>".to_string());

    parts.join("\n")
}

fn render_background(background: &Background) -> String {
    match background {
        Background::Disk { circle } => format!(
            r#"<circle class="background" cx="{}" cy="{}" r="{}" stroke-width="{}" />"#,
            fmt_num(circle.center.x),
            fmt_num(circle.center.y),
            fmt_num(circle.radius),
            StrokeWidths::BACKGROUND
        ),
        Background::Plot { area } => format!(
            r#"<rect class="background" x="{}" y="{}" width="{}" height="{}" stroke-width="{}" />"#,
            fmt_num(area.left),
            fmt_num(area.top),
            fmt_num(area.width()),
            fmt_num(area.height()),
            StrokeWidths::BACKGROUND
        ),
    }
}

fn render_edge(edge: &EdgeDraw) -> String {
    format!(
        r#"<path class="link" data-source="{}" data-target="{}" d="{}" />"#,
        escape_xml(edge.source.as_str()),
        escape_xml(edge.target.as_str()),
        path_data(&edge.path)
    )
}

fn render_node(node: &NodeDraw) -> String {
    render_circle(&node.circle, "node", Some(node.id.as_str()))
}

fn render_circle(circle: &Circle, class: &str, id: Option<&str>) -> String {
    let data_id = id
        .map(|id| format!(r#" data-id="{}""#, escape_xml(id)))
        .unwrap_or_default();
    format!(
        r#"<circle class="{}"{} cx="{}" cy="{}" r="{}" />"#,
        class,
        data_id,
        fmt_num(circle.center.x),
        fmt_num(circle.center.y),
        fmt_num(circle.radius)
    )
}

fn render_pointer_path(path: &PathDescriptor) -> String {
    format!(
        r#"<path class="link pointer-path" d="{}" stroke-width="{}" stroke-dasharray="{}" />"#,
        path_data(path),
        StrokeWidths::POINTER_PATH,
        POINTER_DASH
    )
}

/// `d` attribute for a path descriptor, numbers trimmed with [`fmt_num`].
fn path_data(path: &PathDescriptor) -> String {
    match path {
        PathDescriptor::Arc {
            start,
            end,
            radius,
            large_arc,
            sweep,
        } => format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            fmt_num(start.x),
            fmt_num(start.y),
            fmt_num(*radius),
            fmt_num(*radius),
            *large_arc as u8,
            *sweep as u8,
            fmt_num(end.x),
            fmt_num(end.y)
        ),
        PathDescriptor::Line { start, end } => format!(
            "M {} {} L {} {}",
            fmt_num(start.x),
            fmt_num(start.y),
            fmt_num(end.x),
            fmt_num(end.y)
        ),
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a coordinate with at most three decimals, dropping trailing zeros.
fn fmt_num(n: f64) -> String {
    let s = format!("{:.3}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
