//! The stateful graph renderer.
//!
//! A [`GraphRenderer`] moves through `Unconfigured → Canvased → Graphed → Rendering`.
//! Once rendering, every layout tick or pan/zoom event recomputes all node and
//! edge geometry from scratch and produces a new [`Frame`].

use serde_json::Value;
use tracing::{debug, info};

use crate::config::{Margin, Projection, RenderOptions, RenderSettings};
use crate::error::{ConfigError, GeometryError, LayoutError, Result, StateError};
use crate::geometry::{
    centroid, geodesic, to_disk_space, BoundingBox, Circle, Disk, Geodesic, NodeProjection,
    PathDescriptor, Point,
};
use crate::host::{CanvasHost, Selector};
use crate::layout::{ForceParams, ForceSimulation, PanZoom};
use crate::svg::styles::{EUCLIDEAN_NODE_RADIUS, HOVER_MARKER_DIVISOR};
use crate::svg::types::{Background, EdgeDraw, Frame, Hover, NodeDraw};
use crate::types::{Graph, Link, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Unconfigured,
    Canvased,
    Graphed,
    Rendering,
}

/// Derived geometry of one node for the current frame. Canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGeometry {
    /// Position the node is drawn at
    pub center: Point,
    /// The drawn circle
    pub circle: Circle,
    /// Hyperbolic centre of the circle; `None` in Euclidean mode
    pub hcenter: Option<Point>,
}

/// Derived geometry of one edge for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    /// `None` in Euclidean mode
    pub geodesic: Option<Geodesic>,
    /// Element-local path
    pub path: PathDescriptor,
}

impl EdgeGeometry {
    pub fn arc(&self) -> Option<&crate::geometry::Arc> {
        self.geodesic.as_ref().and_then(Geodesic::as_arc)
    }
}

#[derive(Debug, Clone)]
struct Canvas {
    selector: String,
    rect: BoundingBox,
    margin: Margin,
}

impl Canvas {
    fn disk(&self) -> Disk {
        Disk::new(self.rect)
    }

    /// Euclidean plot area, local to the element.
    fn plot_area(&self) -> BoundingBox {
        BoundingBox::new(
            self.margin.left,
            self.margin.top,
            (self.rect.width() - self.margin.left - self.margin.right).max(0.0),
            (self.rect.height() - self.margin.top - self.margin.bottom).max(0.0),
        )
    }

    fn layout_center(&self, projection: Projection) -> Point {
        match projection {
            Projection::Hyperbolic => self.disk().local_center(),
            Projection::Euclidean => {
                let area = self.plot_area();
                Point::new(
                    (area.left + area.right) / 2.0,
                    (area.top + area.bottom) / 2.0,
                )
            }
        }
    }

    fn background(&self, projection: Projection) -> Background {
        match projection {
            Projection::Hyperbolic => {
                let disk = self.disk();
                Background::Disk {
                    circle: Circle {
                        center: disk.local_center(),
                        radius: disk.radius(),
                    },
                }
            }
            Projection::Euclidean => Background::Plot {
                area: self.plot_area(),
            },
        }
    }
}

#[derive(Debug, Clone)]
struct Session {
    /// Settled layout positions, element-local
    layout: Vec<Point>,
    links: Vec<Link>,
    /// Centroid of the settled layout; pans do not move it
    centroid: Point,
    transform: PanZoom,
    nodes: Vec<NodeGeometry>,
    edges: Vec<EdgeGeometry>,
    frame: Frame,
}

/// Draws a graph into a rendering element, in hyperbolic or Euclidean space.
#[derive(Debug, Clone, Default)]
pub struct GraphRenderer {
    settings: RenderSettings,
    canvas: Option<Canvas>,
    graph: Option<Graph>,
    links: Vec<Link>,
    session: Option<Session>,
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RenderState {
        if self.session.is_some() {
            RenderState::Rendering
        } else if self.graph.is_some() {
            RenderState::Graphed
        } else if self.canvas.is_some() {
            RenderState::Canvased
        } else {
            RenderState::Unconfigured
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn projection(&self) -> Projection {
        self.settings.projection
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Update settings. Changes reach the screen with the next layout or pan/zoom event.
    pub fn configure(&mut self, options: &RenderOptions) -> Result<()> {
        self.settings.apply(options)?;
        info!(
            projection = %self.settings.projection,
            edge_thickness = self.settings.edge_thickness,
            "renderer configured"
        );
        Ok(())
    }

    /// [`configure`](Self::configure) from a loosely-typed parameter object.
    pub fn configure_json(&mut self, params: &Value) -> Result<()> {
        let options = RenderOptions::from_value(params)?;
        self.configure(&options)
    }

    /// Bind the renderer to the first element matching `selector`.
    ///
    /// The element must exist, have a non-zero size, and be empty.
    pub fn attach_canvas(
        &mut self,
        host: &dyn CanvasHost,
        selector: &str,
        margin: Option<Margin>,
    ) -> Result<()> {
        if self.session.is_some() {
            return Err(StateError::AlreadyRendering.into());
        }
        let parsed = Selector::parse(selector)?;
        let element = host
            .query_selector(&parsed)
            .ok_or_else(|| ConfigError::TargetNotFound(selector.to_string()))?;
        if element.child_count > 0 {
            return Err(ConfigError::TargetNotEmpty {
                selector: selector.to_string(),
                children: element.child_count,
            }
            .into());
        }
        let rect = element.rect;
        if !(rect.width() > 0.0 && rect.height() > 0.0) {
            return Err(ConfigError::TargetHasNoArea(selector.to_string()).into());
        }

        info!(selector, width = rect.width(), height = rect.height(), "canvas attached");
        self.canvas = Some(Canvas {
            selector: selector.to_string(),
            rect,
            margin: margin.unwrap_or_default(),
        });
        Ok(())
    }

    /// Store the graph to draw. Edge endpoints must name existing nodes.
    pub fn set_graph(&mut self, graph: Graph) -> Result<()> {
        if self.session.is_some() {
            return Err(StateError::AlreadyRendering.into());
        }
        let links = graph.resolve_links()?;
        info!(nodes = graph.nodes.len(), edges = links.len(), "graph set");
        self.links = links;
        self.graph = Some(graph);
        Ok(())
    }

    /// Start rendering: run the simulation to rest and draw the first frame.
    pub fn render(&mut self, simulation: &mut dyn ForceSimulation) -> Result<Frame> {
        if self.session.is_some() {
            return Err(StateError::AlreadyRendering.into());
        }
        let canvas = self.canvas.as_ref().ok_or(StateError::NoCanvas)?;
        let graph = self.graph.as_ref().ok_or(StateError::NoGraph)?;

        let seeds: Vec<Option<Point>> = graph.nodes.iter().map(|n| n.position()).collect();
        let params = ForceParams::centered_on(canvas.layout_center(self.settings.projection));
        let layout = simulation.settle(&seeds, &self.links, &params);
        check_layout(&layout, seeds.len())?;

        info!(
            target_element = canvas.selector.as_str(),
            projection = %self.settings.projection,
            "rendering started"
        );
        let session = Session {
            centroid: centroid(&layout).unwrap_or(Point::ORIGIN),
            layout,
            links: self.links.clone(),
            transform: PanZoom::IDENTITY,
            nodes: Vec::new(),
            edges: Vec::new(),
            frame: self.empty_frame(canvas),
        };
        self.commit(session, "render")
    }

    /// Feed new settled positions from the simulation.
    pub fn settled(&mut self, positions: Vec<Point>) -> Result<Frame> {
        let expected = self.graph.as_ref().map_or(0, |g| g.nodes.len());
        let session = self.session.as_ref().ok_or(StateError::NotRendering)?;
        check_layout(&positions, expected)?;
        let candidate = Session {
            centroid: centroid(&positions).unwrap_or(Point::ORIGIN),
            layout: positions,
            ..session.clone()
        };
        self.commit(candidate, "settled")
    }

    /// Apply a pan/zoom transform. The scale is clamped to the zoom extent.
    ///
    /// Hyperbolic mode only honours the translation: nodes slide through the disk
    /// while the centroid stays where the layout settled.
    pub fn pan_zoom(&mut self, transform: PanZoom) -> Result<Frame> {
        let session = self.session.as_ref().ok_or(StateError::NotRendering)?;
        let candidate = Session {
            transform: transform.clamped(),
            ..session.clone()
        };
        self.commit(candidate, "pan_zoom")
    }

    /// Drop canvas, graph and rendering state. Settings are reset too.
    pub fn reset(&mut self) {
        debug!("renderer reset");
        *self = Self::new();
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.session.as_ref().map(|s| &s.frame)
    }

    pub fn transform(&self) -> Option<PanZoom> {
        self.session.as_ref().map(|s| s.transform)
    }

    pub fn node_geometry(&self, id: &NodeId) -> Option<&NodeGeometry> {
        let index = self.node_index(id)?;
        self.session.as_ref()?.nodes.get(index)
    }

    pub fn edge_geometry(&self, index: usize) -> Option<&EdgeGeometry> {
        self.session.as_ref()?.edges.get(index)
    }

    /// The topmost node whose circle contains a canvas-space pointer.
    pub fn hit_test(&self, pointer: Point) -> Option<&NodeId> {
        let session = self.session.as_ref()?;
        let graph = self.graph.as_ref()?;
        session
            .nodes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, node)| node.circle.contains(pointer))
            .map(|(i, _)| &graph.nodes[i].id)
    }

    /// Hover decoration for the node under a canvas-space pointer, if any.
    pub fn hover(&self, pointer: Point) -> Result<Option<Hover>> {
        let session = self.session.as_ref().ok_or(StateError::NotRendering)?;
        let canvas = self.canvas.as_ref().ok_or(StateError::NoCanvas)?;
        let Some(id) = self.hit_test(pointer) else {
            return Ok(None);
        };
        let Some(node) = self.node_index(id).and_then(|i| session.nodes.get(i)) else {
            return Ok(None);
        };

        let origin = canvas.rect.origin();
        let radius = node.circle.radius / HOVER_MARKER_DIVISOR;
        let mut markers = Vec::with_capacity(2);
        if let Some(hcenter) = node.hcenter {
            markers.push(Circle {
                center: hcenter - origin,
                radius,
            });
        }
        markers.push(Circle {
            center: node.circle.center - origin,
            radius,
        });
        Ok(Some(Hover {
            node: id.clone(),
            markers,
        }))
    }

    /// Path from a node to a canvas-space pointer: a geodesic in hyperbolic mode,
    /// a straight segment otherwise. `None` for an unknown node.
    pub fn pointer_geodesic(&self, id: &NodeId, pointer: Point) -> Result<Option<PathDescriptor>> {
        let session = self.session.as_ref().ok_or(StateError::NotRendering)?;
        let canvas = self.canvas.as_ref().ok_or(StateError::NoCanvas)?;
        let Some(node) = self.node_index(id).and_then(|i| session.nodes.get(i)) else {
            return Ok(None);
        };

        let path = match self.settings.projection {
            Projection::Hyperbolic => {
                let disk = canvas.disk();
                let norm = to_disk_space(pointer, &disk).norm();
                if norm >= 1.0 {
                    return Err(GeometryError::OutsideDisk { norm }.into());
                }
                geodesic(node.center, pointer, &disk)?.path(&disk)
            }
            Projection::Euclidean => {
                let origin = canvas.rect.origin();
                PathDescriptor::Line {
                    start: node.center - origin,
                    end: pointer - origin,
                }
            }
        };
        Ok(Some(path))
    }

    fn node_index(&self, id: &NodeId) -> Option<usize> {
        self.graph.as_ref()?.nodes.iter().position(|n| &n.id == id)
    }

    fn empty_frame(&self, canvas: &Canvas) -> Frame {
        Frame {
            width: canvas.rect.width(),
            height: canvas.rect.height(),
            projection: self.settings.projection,
            edge_thickness: self.settings.edge_thickness,
            background: canvas.background(self.settings.projection),
            edges: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Rebuild every node and edge for `session` and make it current.
    ///
    /// The renderer keeps its previous session when any geometry fails.
    fn commit(&mut self, mut session: Session, event: &'static str) -> Result<Frame> {
        let canvas = self.canvas.as_ref().ok_or(StateError::NoCanvas)?;
        let graph = self.graph.as_ref().ok_or(StateError::NoGraph)?;
        let settings = self.settings;

        let (nodes, edges) = match settings.projection {
            Projection::Hyperbolic => hyperbolic_geometry(canvas, &session)?,
            Projection::Euclidean => euclidean_geometry(canvas, &session),
        };

        let origin = canvas.rect.origin();
        let mut frame = self.empty_frame(canvas);
        frame.nodes = graph
            .nodes
            .iter()
            .zip(&nodes)
            .map(|(node, geometry)| NodeDraw {
                id: node.id.clone(),
                circle: geometry.circle.translate(Point::ORIGIN - origin),
            })
            .collect();
        frame.edges = graph
            .edges
            .iter()
            .zip(&edges)
            .map(|(edge, geometry)| EdgeDraw {
                source: edge.source.clone(),
                target: edge.target.clone(),
                path: geometry.path,
            })
            .collect();

        debug!(
            event,
            nodes = frame.nodes.len(),
            edges = frame.edges.len(),
            projection = %settings.projection,
            "frame recomputed"
        );

        session.nodes = nodes;
        session.edges = edges;
        session.frame = frame.clone();
        self.session = Some(session);
        Ok(frame)
    }
}

fn check_layout(positions: &[Point], expected: usize) -> std::result::Result<(), LayoutError> {
    if positions.len() != expected {
        return Err(LayoutError::PositionCount {
            expected,
            got: positions.len(),
        });
    }
    match positions.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(LayoutError::NonFinite { index }),
        None => Ok(()),
    }
}

fn hyperbolic_geometry(
    canvas: &Canvas,
    session: &Session,
) -> Result<(Vec<NodeGeometry>, Vec<EdgeGeometry>)> {
    let disk = canvas.disk();
    let offset = session.transform.offset();

    let mut nodes = Vec::with_capacity(session.layout.len());
    for &p in &session.layout {
        let projected = NodeProjection::compute(p + offset, session.centroid, &disk)?;
        nodes.push(NodeGeometry {
            center: projected.center,
            circle: projected.circle.circle(),
            hcenter: Some(projected.circle.hcenter),
        });
    }

    let mut edges = Vec::with_capacity(session.links.len());
    for link in &session.links {
        let geodesic = geodesic(nodes[link.source].center, nodes[link.target].center, &disk)?;
        edges.push(EdgeGeometry {
            path: geodesic.path(&disk),
            geodesic: Some(geodesic),
        });
    }
    Ok((nodes, edges))
}

fn euclidean_geometry(canvas: &Canvas, session: &Session) -> (Vec<NodeGeometry>, Vec<EdgeGeometry>) {
    let origin = canvas.rect.origin();
    let transform = session.transform;
    let local: Vec<Point> = session.layout.iter().map(|&p| transform.apply(p)).collect();

    let nodes = local
        .iter()
        .map(|&p| {
            let center = p + origin;
            NodeGeometry {
                center,
                circle: Circle {
                    center,
                    radius: EUCLIDEAN_NODE_RADIUS * transform.scale,
                },
                hcenter: None,
            }
        })
        .collect();
    let edges = session
        .links
        .iter()
        .map(|link| EdgeGeometry {
            geodesic: None,
            path: PathDescriptor::Line {
                start: local[link.source],
                end: local[link.target],
            },
        })
        .collect();
    (nodes, edges)
}
