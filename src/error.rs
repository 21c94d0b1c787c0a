//! Error types for geometry, configuration, renderer state and graph input.

/// Precondition violations inside the hyperbolic geometry engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A disk-space point lies on or outside the unit circle.
    #[error("point outside Poincaré disk: ‖p‖ = {norm:.6} ≥ 1.0")]
    OutsideDisk { norm: f64 },

    /// The two perpendicular construction lines of a geodesic never meet.
    #[error("geodesic construction lines are parallel")]
    ParallelBisectors,

    /// Inversion through the boundary circle is undefined at its centre.
    #[error("cannot invert the centre of the disk")]
    InversionAtCenter,

    /// A point on the boundary circle is its own inverse, so no construction line exists.
    #[error("point lies on the disk boundary")]
    OnBoundary,
}

/// Fatal configuration problems, raised before anything is rendered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("the parameter {0} is undefined")]
    UnknownParameter(String),

    #[error("projection must be \"hyperbolic\" or \"euclidean\", got {0}")]
    InvalidProjection(String),

    #[error("edgeThickness must be a non-negative number, got {0}")]
    InvalidEdgeThickness(String),

    #[error("parameters must be given as an object")]
    NotAnObject,

    #[error("unsupported selector: {0:?}")]
    InvalidSelector(String),

    #[error("no element matches {0:?}")]
    TargetNotFound(String),

    #[error("rendering element {0:?} has no area")]
    TargetHasNoArea(String),

    #[error("rendering element {selector:?} must be empty, it has {children} children")]
    TargetNotEmpty { selector: String, children: usize },
}

/// Operations invoked in the wrong renderer state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("no canvas attached")]
    NoCanvas,

    #[error("no graph set")]
    NoGraph,

    #[error("renderer is already rendering; call reset() first")]
    AlreadyRendering,

    #[error("renderer is not rendering yet")]
    NotRendering,
}

/// Malformed graph input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph JSON: {0}")]
    Json(String),

    #[error("duplicate node id {0}")]
    DuplicateNode(String),

    #[error("edge {edge} references unknown node {id}")]
    UnknownNode { edge: usize, id: String },

    #[error("invalid generator parameters: {0}")]
    InvalidGenerator(String),
}

/// A force-simulation collaborator returned unusable positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout returned {got} positions for {expected} nodes")]
    PositionCount { expected: usize, got: usize },

    #[error("layout returned a non-finite position for node {index}")]
    NonFinite { index: usize },
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, Error>;
