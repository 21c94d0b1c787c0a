//! The force-simulation seam.
//!
//! Layout is not computed here. A [`ForceSimulation`] turns seed positions and
//! links into settled Euclidean positions; the renderer only consumes the result.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::geometry::Point;
use crate::types::Link;

/// Zoom scale extent.
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;

/// Tunable force parameters handed to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceParams {
    pub link_distance: f64,
    /// Negative values repel
    pub charge_strength: f64,
    /// Point the layout is centred on, in local canvas coordinates
    pub center: Point,
}

impl ForceParams {
    pub fn centered_on(center: Point) -> Self {
        Self {
            link_distance: 30.0,
            charge_strength: -400.0,
            center,
        }
    }
}

/// External force-directed layout.
pub trait ForceSimulation {
    /// Run to rest and return one position per seed, in the same order.
    ///
    /// `seeds[i]` is the caller-supplied initial position of node `i`, if any.
    fn settle(&mut self, seeds: &[Option<Point>], links: &[Link], params: &ForceParams) -> Vec<Point>;
}

/// Seeds nodes on a phyllotaxis spiral around the centre and stops there.
///
/// This is the arrangement force simulations start from; no forces are applied.
/// Nodes with a seed position keep it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhyllotaxisLayout;

impl PhyllotaxisLayout {
    const INITIAL_RADIUS: f64 = 10.0;

    fn spiral(i: usize, center: Point) -> Point {
        let initial_angle = PI * (3.0 - 5f64.sqrt());
        let radius = Self::INITIAL_RADIUS * (0.5 + i as f64).sqrt();
        let angle = i as f64 * initial_angle;
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    }
}

impl ForceSimulation for PhyllotaxisLayout {
    fn settle(&mut self, seeds: &[Option<Point>], _links: &[Link], params: &ForceParams) -> Vec<Point> {
        seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| seed.unwrap_or_else(|| Self::spiral(i, params.center)))
            .collect()
    }
}

/// Current view transform: `translate(dx, dy) scale(scale)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanZoom {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PanZoom {
    pub const IDENTITY: PanZoom = PanZoom { dx: 0.0, dy: 0.0, scale: 1.0 };

    pub fn translate(dx: f64, dy: f64) -> Self {
        Self { dx, dy, scale: 1.0 }
    }

    /// Clamp the scale into the zoom extent; non-finite parts fall back to identity.
    pub fn clamped(self) -> Self {
        let finite = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            dx: finite(self.dx, 0.0),
            dy: finite(self.dy, 0.0),
            scale: finite(self.scale, 1.0).clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.dx, self.dy)
    }

    /// Apply the full transform to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.dx + self.scale * p.x, self.dy + self.scale * p.y)
    }
}
