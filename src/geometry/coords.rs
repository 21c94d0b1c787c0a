//! Canvas ↔ disk coordinate transforms and small planar helpers.

use super::{Disk, Point};

/// Map a canvas point into disk space.
///
/// The disk centre goes to the origin, the boundary to the unit circle, and the
/// y axis is flipped. Points outside the disk pass through unclamped.
pub fn to_disk_space(p: Point, disk: &Disk) -> Point {
    Point::new(
        (p.x - disk.center_x()) / disk.radius(),
        -(p.y - disk.center_y()) / disk.radius(),
    )
}

/// Map a disk-space point back onto the canvas. Inverse of [`to_disk_space`].
pub fn to_canvas_space(p: Point, disk: &Disk) -> Point {
    Point::new(
        p.x * disk.radius() + disk.center_x(),
        -p.y * disk.radius() + disk.center_y(),
    )
}

pub fn polar_to_cartesian(r: f64, theta: f64, center: Point) -> Point {
    Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
}

/// Returns `(r, θ)` with θ in `[-π, π]`.
pub fn cartesian_to_polar(p: Point) -> (f64, f64) {
    (p.x.hypot(p.y), p.y.atan2(p.x))
}

pub fn euclidean_distance(p: Point, q: Point) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

pub fn midpoint(p: Point, q: Point) -> Point {
    Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}
