//! Hyperbolic geometry engine.
//!
//! Pure functions over small value types. Two coordinate systems are in play:
//!
//! - **canvas space**: raw pixel coordinates of the rendering surface, y grows downward
//! - **disk space**: the unit disk, origin at the disk centre, y grows upward
//!
//! Nothing here touches I/O or shared state; every function takes the [`Disk`] it
//! works against as an explicit parameter.
//!
//! | Function | Purpose |
//! |---|---|
//! | [`to_disk_space`] / [`to_canvas_space`] | Convert between the two coordinate systems |
//! | [`project_to_poincare`] | Euclidean layout point → canvas point inside the disk |
//! | [`hyperbolic_distance`] | Distance between two disk-space points |
//! | [`poincare_circle`] | Euclidean circle drawing a fixed-hyperbolic-radius disk |
//! | [`build_geodesic`] / [`arc_to_path`] | Geodesic arc between two canvas points |

mod coords;
mod distance;
mod geodesic;
mod projection;

pub use coords::{
    cartesian_to_polar, euclidean_distance, midpoint, polar_to_cartesian, to_canvas_space,
    to_disk_space,
};
pub use distance::{
    euclidean_to_hyperbolic_radius, hyperbolic_distance, hyperbolic_to_euclidean_radius,
    poincare_circle,
};
pub use geodesic::{arc_to_path, build_geodesic, circle_inversion, geodesic, Geodesic};
pub use projection::{
    centroid, project_to_poincare, project_with_contraction, NodeProjection, CONTRACTION,
    NODE_HYPERBOLIC_RADIUS,
};

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point. Whether it is in canvas or disk space depends on where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the position vector.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn scale(&self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Screen rectangle hosting the disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            right: left + width,
            top,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Reference frame for all hyperbolic math: the largest circle centred in a bounding box.
///
/// Only constructible from a bounding box so the centre always sits at its midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Disk {
    bounding_box: BoundingBox,
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl Disk {
    pub fn new(bounding_box: BoundingBox) -> Self {
        Self {
            bounding_box,
            center_x: (bounding_box.left + bounding_box.right) / 2.0,
            center_y: (bounding_box.top + bounding_box.bottom) / 2.0,
            radius: bounding_box.width().min(bounding_box.height()) / 2.0,
        }
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Canvas-space centre.
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Canvas-space radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Centre relative to the bounding box's top-left corner.
    pub fn local_center(&self) -> Point {
        self.center() - self.bounding_box.origin()
    }

    /// Shift a canvas point into bounding-box-local coordinates.
    pub fn to_local(&self, p: Point) -> Point {
        p - self.bounding_box.origin()
    }
}

/// A line `a·x + b·y = c`, scaled so `b = 1` unless the line is (nearly) vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// A canvas-space circle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn contains(&self, p: Point) -> bool {
        euclidean_distance(self.center, p) <= self.radius
    }

    pub fn translate(&self, by: Point) -> Circle {
        Circle {
            center: self.center + by,
            radius: self.radius,
        }
    }
}

/// Euclidean circle representing a fixed-hyperbolic-radius disk.
///
/// `center`/`radius` are in canvas space. `disk_center` is the same Euclidean
/// centre in disk space, and `hcenter` is the canvas position of the hyperbolic
/// centre, which sits off the Euclidean centre away from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoincareCircle {
    pub center: Point,
    pub radius: f64,
    pub disk_center: Point,
    pub hcenter: Point,
}

impl PoincareCircle {
    pub fn circle(&self) -> Circle {
        Circle {
            center: self.center,
            radius: self.radius,
        }
    }
}

/// A geodesic segment between two canvas points.
///
/// `p1`, `p2` and `center` are local to the disk's bounding box. `start_angle` is
/// measured to `p2` and `end_angle` to `p1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    pub p1: Point,
    pub p2: Point,
    pub center: Point,
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius: f64,
}

/// A drawable edge primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PathDescriptor {
    Arc {
        start: Point,
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    },
    Line {
        start: Point,
        end: Point,
    },
}

impl PathDescriptor {
    pub fn start(&self) -> Point {
        match self {
            PathDescriptor::Arc { start, .. } | PathDescriptor::Line { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            PathDescriptor::Arc { end, .. } | PathDescriptor::Line { end, .. } => *end,
        }
    }

    pub fn translate(&self, by: Point) -> PathDescriptor {
        match *self {
            PathDescriptor::Arc {
                start,
                end,
                radius,
                large_arc,
                sweep,
            } => PathDescriptor::Arc {
                start: start + by,
                end: end + by,
                radius,
                large_arc,
                sweep,
            },
            PathDescriptor::Line { start, end } => PathDescriptor::Line {
                start: start + by,
                end: end + by,
            },
        }
    }
}
