//! Euclidean layout → Poincaré disk projection.

use super::coords::{cartesian_to_polar, polar_to_cartesian, to_canvas_space};
use super::distance::poincare_circle;
use super::{Disk, Point, PoincareCircle};
use crate::error::GeometryError;

/// How much of the Euclidean layout spread is folded into the disk. Empirical.
pub const CONTRACTION: f64 = 0.005;

/// Hyperbolic radius of every drawn node.
pub const NODE_HYPERBOLIC_RADIUS: f64 = 0.05;

/// Largest disk-space norm a projected point may reach. `tanh` rounds to 1 for
/// far offsets, which would put the point on the boundary.
pub const MAX_DISK_NORM: f64 = 1.0 - 1e-9;

/// Arithmetic mean of a set of layout positions. `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::ORIGIN, |acc, &p| acc + p);
    Some(sum.scale(1.0 / n))
}

/// Project a layout point into the disk, returning its canvas position.
///
/// ```text
/// (r, θ) = polar(k · (p − centroid))
/// ρ      = tanh(acosh(r²/2 + 1) / 2)
/// ```
///
/// `acosh(r²/2 + 1)` undoes a Lambert azimuthal projection, giving a hyperbolic
/// distance from the centroid; `tanh(·/2)` places that distance in the disk.
/// The centroid itself lands on the disk centre. `ρ` is capped at
/// [`MAX_DISK_NORM`].
pub fn project_to_poincare(layout: Point, centroid: Point, disk: &Disk) -> Point {
    project_with_contraction(layout, centroid, disk, CONTRACTION)
}

/// [`project_to_poincare`] with an explicit contraction factor.
pub fn project_with_contraction(
    layout: Point,
    centroid: Point,
    disk: &Disk,
    contraction: f64,
) -> Point {
    to_canvas_space(disk_point(layout, centroid, contraction), disk)
}

/// Disk-space position of a layout point.
fn disk_point(layout: Point, centroid: Point, contraction: f64) -> Point {
    let offset = (layout - centroid).scale(contraction);
    let (r, theta) = cartesian_to_polar(offset);

    let hyperbolic_r = (0.5 * r * r + 1.0).acosh();
    let poincare_r = (hyperbolic_r / 2.0).tanh().min(MAX_DISK_NORM);

    polar_to_cartesian(poincare_r, theta, Point::ORIGIN)
}

/// Derived disk geometry of one node, valid for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeProjection {
    /// Canvas position of the node's hyperbolic centre.
    pub center: Point,
    /// Drawn circle of hyperbolic radius [`NODE_HYPERBOLIC_RADIUS`].
    pub circle: PoincareCircle,
}

impl NodeProjection {
    pub fn compute(layout: Point, centroid: Point, disk: &Disk) -> Result<Self, GeometryError> {
        let point = disk_point(layout, centroid, CONTRACTION);
        let circle = poincare_circle(point, NODE_HYPERBOLIC_RADIUS, disk)?;
        Ok(Self {
            center: to_canvas_space(point, disk),
            circle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::coords::to_disk_space;
    use crate::geometry::BoundingBox;
    use std::f64::consts::FRAC_PI_4;

    fn disk() -> Disk {
        Disk::new(BoundingBox::new(0.0, 0.0, 400.0, 400.0))
    }

    #[test]
    fn centroid_of_empty_is_none() {
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn centroid_is_mean() {
        let c = centroid(&[Point::new(0.0, 0.0), Point::new(4.0, 2.0), Point::new(2.0, 4.0)]).unwrap();
        assert_eq!(c, Point::new(2.0, 2.0));
    }

    #[test]
    fn centroid_maps_to_disk_center() {
        let disk = disk();
        let c = Point::new(37.0, -12.5);
        let projected = project_to_poincare(c, c, &disk);
        assert_eq!(projected, disk.center());
    }

    #[test]
    fn coincident_layout_collapses_to_center() {
        let disk = Disk::new(BoundingBox::new(10.0, 20.0, 300.0, 300.0));
        let positions = vec![Point::new(5.0, 5.0); 4];
        let c = centroid(&positions).unwrap();
        for &p in &positions {
            let node = NodeProjection::compute(p, c, &disk).unwrap();
            assert_eq!(node.center, Point::new(disk.center_x(), disk.center_y()));
        }
    }

    #[test]
    fn small_offset_lands_near_center_at_quarter_angle() {
        let disk = disk();
        let projected = project_to_poincare(Point::new(10.0, 10.0), Point::ORIGIN, &disk);
        let d = to_disk_space(projected, &disk);
        let (r, theta) = cartesian_to_polar(d);
        assert!(r > 0.0 && r < 0.1, "unexpected disk radius {r}");
        assert!((theta - FRAC_PI_4).abs() < 1e-12, "unexpected angle {theta}");
        assert!(projected != disk.center());
        assert!((projected - disk.center()).norm() < 200.0);
    }

    #[test]
    fn far_points_stay_inside_disk() {
        let disk = disk();
        for &far in &[1e3, 1e5, 1e7] {
            let projected = project_to_poincare(Point::new(far, -far), Point::ORIGIN, &disk);
            let d = to_disk_space(projected, &disk);
            assert!(d.norm() < 1.0, "{far} projected to |d| = {}", d.norm());
        }
    }

    #[test]
    fn saturated_offsets_are_capped_below_the_boundary() {
        let disk = disk();
        for &far in &[1e11, 1e13, 1e150] {
            let layout = Point::new(far, far / 3.0);
            let d = to_disk_space(project_to_poincare(layout, Point::ORIGIN, &disk), &disk);
            assert!(d.norm() < 1.0, "{far} projected to |d| = {}", d.norm());
            let node = NodeProjection::compute(layout, Point::ORIGIN, &disk).unwrap();
            assert!((node.center - disk.center()).norm() < disk.radius());
        }
    }

    #[test]
    fn projection_is_monotone_in_distance() {
        let disk = disk();
        let mut previous = 0.0;
        for i in 1..50 {
            let p = Point::new(i as f64 * 20.0, 0.0);
            let r = to_disk_space(project_to_poincare(p, Point::ORIGIN, &disk), &disk).norm();
            assert!(r > previous);
            previous = r;
        }
    }

    #[test]
    fn node_circle_is_attached_to_center() {
        let disk = disk();
        let node = NodeProjection::compute(Point::new(-80.0, 40.0), Point::ORIGIN, &disk).unwrap();
        assert!((node.circle.hcenter - node.center).norm() < 1e-9);
        assert!(node.circle.radius > 0.0);
    }
}
