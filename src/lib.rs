//! h2svg - Draw graphs in the Poincaré disk model of hyperbolic space
//!
//! A settled force layout is projected into the unit disk so the region around
//! the layout's centroid is magnified and the periphery is compressed. Nodes
//! become circles of fixed hyperbolic radius and edges become geodesic arcs
//! orthogonal to the boundary. A plain Euclidean mode is available too.
//!
//! # Example
//!
//! ```rust
//! use h2svg::render_to_svg;
//!
//! let svg = render_to_svg(r#"{"nodes": [{"id": 1}, {"id": 2}], "edges": [{"source": 1, "target": 2}]}"#).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Driving the renderer
//!
//! ```rust
//! use h2svg::{GraphRenderer, Graph, Node, Edge, PanZoom, PhyllotaxisLayout, StaticHost};
//!
//! let mut renderer = GraphRenderer::new();
//! renderer.attach_canvas(&StaticHost::single(400.0, 400.0), "#render", None).unwrap();
//! renderer.set_graph(Graph::new(vec![Node::new("a"), Node::new("b")], vec![Edge::new("a", "b")])).unwrap();
//! let first = renderer.render(&mut PhyllotaxisLayout).unwrap();
//! let panned = renderer.pan_zoom(PanZoom::translate(40.0, 0.0)).unwrap();
//! assert_eq!(first.nodes.len(), panned.nodes.len());
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod renderer;
pub mod svg;
pub mod types;

pub use config::{Margin, Projection, RenderOptions, RenderSettings};
pub use error::{ConfigError, Error, GeometryError, GraphError, LayoutError, Result, StateError};
pub use geometry::{BoundingBox, Circle, Disk, PathDescriptor, Point};
pub use host::{CanvasHost, Element, Selector, StaticHost};
pub use layout::{ForceParams, ForceSimulation, PanZoom, PhyllotaxisLayout};
pub use renderer::{EdgeGeometry, GraphRenderer, NodeGeometry, RenderState};
pub use svg::{DiagramColors, Frame, Theme};
pub use types::*;

/// Options for one-shot rendering.
#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Renderer parameters (projection, edge thickness)
    pub render: RenderOptions,
    /// Width and height of the drawing in px. Default: 600
    pub size: f64,
    /// Pan applied after the layout settles. Default: none
    pub pan: Option<PanZoom>,
    pub colors: DiagramColors,
    /// Leave the SVG background unpainted. Default: false
    pub transparent: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            size: 600.0,
            pan: None,
            colors: DiagramColors::default(),
            transparent: false,
        }
    }
}

/// Lay out and draw a graph into a square canvas, returning the final frame.
pub fn render_frame(graph: Graph, options: &SvgRenderOptions) -> Result<Frame> {
    let mut renderer = GraphRenderer::new();
    renderer.configure(&options.render)?;
    renderer.attach_canvas(&StaticHost::single(options.size, options.size), "#render", None)?;
    renderer.set_graph(graph)?;
    let frame = renderer.render(&mut PhyllotaxisLayout)?;
    match options.pan {
        Some(pan) => renderer.pan_zoom(pan),
        None => Ok(frame),
    }
}

/// Draw a graph as SVG text.
pub fn render_graph_svg(graph: Graph, options: &SvgRenderOptions) -> Result<String> {
    let frame = render_frame(graph, options)?;
    Ok(svg::render_svg(&frame, &options.colors, options.transparent))
}

/// Draw graph JSON as SVG text with default options.
///
/// # Example
/// ```rust
/// let svg = h2svg::render_to_svg(r#"{"nodes": [{"id": "x"}]}"#).unwrap();
/// assert!(svg.contains(r#"class="node""#));
/// ```
pub fn render_to_svg(input: &str) -> Result<String> {
    let graph = Graph::from_json(input)?;
    render_graph_svg(graph, &SvgRenderOptions::default())
}
