//! Hyperbolic distance and fixed-radius circles in the Poincaré disk.

use super::coords::{polar_to_cartesian, to_canvas_space};
use super::{Disk, Point, PoincareCircle};
use crate::error::GeometryError;

fn check_inside(p: Point) -> Result<(), GeometryError> {
    let norm = p.norm();
    if norm >= 1.0 || !norm.is_finite() {
        return Err(GeometryError::OutsideDisk { norm });
    }
    Ok(())
}

/// Hyperbolic distance between two disk-space points.
///
/// ```text
/// d(p, q) = acosh(1 + 2‖p−q‖² / ((1−‖p‖²)(1−‖q‖²)))
/// ```
///
/// # Errors
///
/// [`GeometryError::OutsideDisk`] if either point has ‖x‖ ≥ 1.
pub fn hyperbolic_distance(p: Point, q: Point) -> Result<f64, GeometryError> {
    check_inside(p)?;
    check_inside(q)?;

    let diff_sq = (p - q).norm_squared();
    let denom = (1.0 - p.norm_squared()) * (1.0 - q.norm_squared());

    // Floating-point noise can push the argument just below 1.
    let arg = (1.0 + 2.0 * diff_sq / denom).max(1.0);
    Ok(arg.acosh())
}

/// Euclidean distance from the origin of a point at hyperbolic distance `r`.
pub fn hyperbolic_to_euclidean_radius(r: f64) -> f64 {
    (r / 2.0).tanh()
}

/// Hyperbolic distance from the origin of a point at Euclidean distance `r`.
/// Only meaningful for `r` in `[0, 1)`.
pub fn euclidean_to_hyperbolic_radius(r: f64) -> f64 {
    2.0 * r.atanh()
}

/// Euclidean circle drawing the disk of hyperbolic radius `hyperbolic_radius`
/// around the disk-space point `disk_center`.
///
/// Walks out along the ray through `disk_center`: the nearest and farthest points
/// of the hyperbolic disk sit at hyperbolic distances `cr − r` and `cr + r` from
/// the origin. Their Euclidean images bound the drawn circle, so its centre is
/// their midpoint and its radius half their span. Circles shrink and drift
/// outward as `disk_center` approaches the boundary.
///
/// # Errors
///
/// [`GeometryError::OutsideDisk`] if `disk_center` is not strictly inside the unit disk.
pub fn poincare_circle(
    disk_center: Point,
    hyperbolic_radius: f64,
    disk: &Disk,
) -> Result<PoincareCircle, GeometryError> {
    check_inside(disk_center)?;

    let cr = euclidean_to_hyperbolic_radius(disk_center.norm());

    // cr - r may be negative near the origin; tanh is odd so de1 lands on the far side.
    let de1 = hyperbolic_to_euclidean_radius(cr - hyperbolic_radius);
    let de2 = hyperbolic_to_euclidean_radius(cr + hyperbolic_radius);
    let er = (de2 - de1) / 2.0;
    let ecr = (de2 + de1) / 2.0;

    let theta = disk_center.y.atan2(disk_center.x);
    let center = polar_to_cartesian(ecr, theta, Point::ORIGIN);

    Ok(PoincareCircle {
        center: to_canvas_space(center, disk),
        radius: er * disk.radius(),
        disk_center: center,
        hcenter: to_canvas_space(disk_center, disk),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;

    fn disk() -> Disk {
        Disk::new(BoundingBox::new(0.0, 0.0, 400.0, 400.0))
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(0.3, -0.2);
        assert!(hyperbolic_distance(p, p).unwrap() < 1e-12);
    }

    #[test]
    fn distance_from_origin_matches_radius_conversion() {
        let p = Point::new(0.6, 0.0);
        let d = hyperbolic_distance(Point::ORIGIN, p).unwrap();
        assert!((d - euclidean_to_hyperbolic_radius(0.6)).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let p = Point::new(0.1, 0.7);
        let q = Point::new(-0.4, 0.2);
        let d1 = hyperbolic_distance(p, q).unwrap();
        let d2 = hyperbolic_distance(q, p).unwrap();
        assert!((d1 - d2).abs() < 1e-12);
    }

    #[test]
    fn distance_grows_near_boundary() {
        let near_center = hyperbolic_distance(Point::new(0.0, 0.0), Point::new(0.1, 0.0)).unwrap();
        let near_edge = hyperbolic_distance(Point::new(0.8, 0.0), Point::new(0.9, 0.0)).unwrap();
        assert!(
            near_edge > near_center,
            "boundary distance {near_edge:.4} should exceed centre {near_center:.4}"
        );
    }

    #[test]
    fn distance_rejects_points_outside() {
        let outside = Point::new(0.8, 0.8);
        assert!(matches!(
            hyperbolic_distance(Point::ORIGIN, outside),
            Err(GeometryError::OutsideDisk { .. })
        ));
        let on_boundary = Point::new(1.0, 0.0);
        assert!(hyperbolic_distance(on_boundary, Point::ORIGIN).is_err());
    }

    #[test]
    fn radius_conversions_are_inverse() {
        for i in 1..100 {
            let r = i as f64 / 100.0;
            let back = hyperbolic_to_euclidean_radius(euclidean_to_hyperbolic_radius(r));
            assert!((back - r).abs() < 1e-9, "inverse failed at {r}: {back}");
        }
    }

    #[test]
    fn circle_at_origin_is_concentric() {
        let c = poincare_circle(Point::ORIGIN, 0.05, &disk()).unwrap();
        assert!((c.center.x - 200.0).abs() < 1e-12);
        assert!((c.center.y - 200.0).abs() < 1e-12);
        assert!((c.radius - 0.025f64.tanh() * 200.0).abs() < 1e-9);
        assert_eq!(c.hcenter, Point::new(200.0, 200.0));
    }

    #[test]
    fn circle_shifts_outward_off_center() {
        let center = Point::new(0.0, 0.7);
        let c = poincare_circle(center, 0.3, &disk()).unwrap();
        // Euclidean centre lies farther out than the hyperbolic centre on the same ray.
        assert!(c.disk_center.x.abs() < 1e-12);
        assert!(c.disk_center.y > 0.7);
        assert_eq!(c.hcenter, Point::new(200.0, 60.0));
    }

    #[test]
    fn circle_radius_shrinks_toward_boundary() {
        let disk = disk();
        let mut previous = f64::INFINITY;
        for i in 0..20 {
            let e = i as f64 * 0.05;
            let c = poincare_circle(Point::new(e * 0.6, -e * 0.8), 0.05, &disk).unwrap();
            assert!(
                c.radius < previous,
                "radius did not shrink at |c| = {e}: {} >= {previous}",
                c.radius
            );
            previous = c.radius;
        }
    }

    #[test]
    fn circle_spans_hyperbolic_extremes() {
        // Both extreme points of the drawn circle are exactly r away from the centre.
        let center = Point::new(0.5, 0.0);
        let r = 0.4;
        let c = poincare_circle(center, r, &disk()).unwrap();
        let near = Point::new(c.disk_center.x - c.radius / 200.0, 0.0);
        let far = Point::new(c.disk_center.x + c.radius / 200.0, 0.0);
        assert!((hyperbolic_distance(center, near).unwrap() - r).abs() < 1e-9);
        assert!((hyperbolic_distance(center, far).unwrap() - r).abs() < 1e-9);
    }

    #[test]
    fn circle_rejects_center_outside() {
        assert!(poincare_circle(Point::new(1.2, 0.0), 0.05, &disk()).is_err());
    }
}
