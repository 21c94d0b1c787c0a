//! Draw commands for one rendered frame.

use serde::Serialize;

use crate::config::Projection;
use crate::geometry::{BoundingBox, Circle, PathDescriptor};
use crate::types::NodeId;

/// Everything the drawing layer needs for one frame.
///
/// Coordinates are local to the rendering element (its top-left corner is `0,0`).
/// Draw order is background, then edges, then nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub projection: Projection,
    pub edge_thickness: f64,
    pub background: Background,
    pub edges: Vec<EdgeDraw>,
    pub nodes: Vec<NodeDraw>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Background {
    /// The Poincaré disk boundary
    Disk { circle: Circle },
    /// The Euclidean plot area
    Plot { area: BoundingBox },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDraw {
    pub id: NodeId,
    pub circle: Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDraw {
    pub source: NodeId,
    pub target: NodeId,
    pub path: PathDescriptor,
}

/// Decoration for the node under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hover {
    pub node: NodeId,
    /// Small circles marking the hyperbolic and Euclidean centres
    pub markers: Vec<Circle>,
}

/// Interactive decorations drawn above a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Hover>,
    /// Geodesic preview from a node to the pointer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer_path: Option<PathDescriptor>,
}
