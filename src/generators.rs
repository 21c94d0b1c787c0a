//! Random graph generators.
//!
//! Node ids are `0..n`. Every generator takes the RNG from the caller so a
//! seeded [`rand::rngs::StdRng`] gives reproducible graphs.

use rand::seq::index;
use rand::Rng;

use crate::error::GraphError;
use crate::types::{Edge, Graph, Node};

fn nodes(n: usize) -> Vec<Node> {
    (0..n).map(Node::new).collect()
}

/// Erdős–Rényi `G(n, p)`: each of the `n(n−1)/2` pairs is joined with probability `p`.
pub fn erdos_renyi<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph, GraphError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidGenerator(format!(
            "edge probability must be in [0, 1], got {}",
            p
        )));
    }

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                edges.push(Edge::new(i, j));
            }
        }
    }
    Ok(Graph::new(nodes(n), edges))
}

/// Random geometric graph: `n` points uniform in the unit square, joined when
/// closer than `radius`. Node positions are not kept, only the topology.
pub fn random_geometric<R: Rng + ?Sized>(
    n: usize,
    radius: f64,
    rng: &mut R,
) -> Result<Graph, GraphError> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(GraphError::InvalidGenerator(format!(
            "connection radius must be a non-negative number, got {}",
            radius
        )));
    }

    let points: Vec<(f64, f64)> = (0..n).map(|_| (rng.gen::<f64>(), rng.gen::<f64>())).collect();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            if dx.hypot(dy) < radius {
                edges.push(Edge::new(i, j));
            }
        }
    }
    Ok(Graph::new(nodes(n), edges))
}

/// Uniform `G(n, m)`: exactly `m` distinct edges drawn uniformly from all pairs.
pub fn uniform<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Result<Graph, GraphError> {
    let pairs = n
        .checked_mul(n.saturating_sub(1))
        .map(|p| p / 2)
        .ok_or_else(|| {
            GraphError::InvalidGenerator(format!("{} nodes have too many pairs to count", n))
        })?;
    if m > pairs {
        return Err(GraphError::InvalidGenerator(format!(
            "{} nodes allow at most {} edges, asked for {}",
            n, pairs, m
        )));
    }

    let mut chosen = index::sample(rng, pairs, m).into_vec();
    chosen.sort_unstable();
    let edges = chosen
        .into_iter()
        .map(|k| {
            let (i, j) = pair_at(k, n);
            Edge::new(i, j)
        })
        .collect();
    Ok(Graph::new(nodes(n), edges))
}

/// The `k`-th pair `(i, j)`, `i < j`, in row-major order over the upper triangle.
fn pair_at(mut k: usize, n: usize) -> (usize, usize) {
    let mut i = 0;
    while k >= n - i - 1 {
        k -= n - i - 1;
        i += 1;
    }
    (i, i + 1 + k)
}
