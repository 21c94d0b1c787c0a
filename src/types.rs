//! Graph model: nodes, edges and the JSON shape they are read from.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::GraphError;
use crate::geometry::Point;

/// Unique node identifier. JSON input may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct NodeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for NodeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(i) => NodeId(i.to_string()),
            RawId::Float(f) => NodeId(f.to_string()),
            RawId::Text(s) => NodeId(s),
        }
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<usize> for NodeId {
    fn from(i: usize) -> Self {
        NodeId(i.to_string())
    }
}

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node. `x`/`y` are an optional initial layout position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Any other attributes carried through untouched
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            x: None,
            y: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn at(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::new(id)
        }
    }

    /// Initial position, when both coordinates are given and finite.
    pub fn position(&self) -> Option<Point> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: BTreeMap::new(),
        }
    }
}

/// An edge resolved to node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn from_json(text: &str) -> Result<Self, GraphError> {
        serde_json::from_str(text).map_err(|e| GraphError::Json(e.to_string()))
    }

    /// Node id → index into `nodes`.
    pub fn index(&self) -> Result<HashMap<&NodeId, usize>, GraphError> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if index.insert(&node.id, i).is_some() {
                return Err(GraphError::DuplicateNode(node.id.to_string()));
            }
        }
        Ok(index)
    }

    /// Resolve every edge's endpoints to node indices.
    pub fn resolve_links(&self) -> Result<Vec<Link>, GraphError> {
        let index = self.index()?;
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                let lookup = |id: &NodeId| {
                    index.get(id).copied().ok_or_else(|| GraphError::UnknownNode {
                        edge: i,
                        id: id.to_string(),
                    })
                };
                Ok(Link {
                    source: lookup(&edge.source)?,
                    target: lookup(&edge.target)?,
                })
            })
            .collect()
    }
}
