//! Geodesics of the Poincaré disk.
//!
//! A geodesic through `p` and `q` is the circle through both points that meets the
//! boundary at right angles. Such a circle also passes through the inverses `p'`, `q'`
//! of the points in the boundary circle, so its centre lies on the perpendicular
//! bisectors of `pp'` and `qq'`.

use std::f64::consts::PI;

use super::coords::{euclidean_distance, midpoint, polar_to_cartesian};
use super::{Arc, Disk, Line, PathDescriptor, Point};
use crate::error::GeometryError;

/// Relative determinant below which two lines count as parallel.
const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Below this `|b|` a line is treated as vertical and left unnormalized.
const VERTICAL_TOLERANCE: f64 = 0.001;

impl Line {
    /// Line through two points, `None` when they coincide.
    pub fn through(p: Point, q: Point) -> Option<Line> {
        let a = p.y - q.y;
        let b = q.x - p.x;
        if a == 0.0 && b == 0.0 {
            return None;
        }
        let c = a * p.x + b * p.y;
        if b.abs() > VERTICAL_TOLERANCE {
            Some(Line { a: a / b, b: 1.0, c: c / b })
        } else {
            Some(Line { a, b, c })
        }
    }

    /// The line perpendicular to `self` passing through `v`.
    pub fn perpendicular_through(&self, v: Point) -> Line {
        Line {
            a: self.b,
            b: -self.a,
            c: self.b * v.x - self.a * v.y,
        }
    }

    /// Intersection point, `None` for parallel lines.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        let det = self.a * other.b - other.a * self.b;
        let scale = self.a.hypot(self.b) * other.a.hypot(other.b);
        if det.abs() <= PARALLEL_TOLERANCE * scale {
            return None;
        }
        Some(Point::new(
            (self.c * other.b - other.c * self.b) / det,
            (self.a * other.c - other.a * self.c) / det,
        ))
    }
}

/// Invert `p` through the circle of radius `r` centred at `center`.
///
/// ```text
/// p' = center + (r² / ‖p − center‖²) · (p − center)
/// ```
pub fn circle_inversion(p: Point, center: Point, r: f64) -> Result<Point, GeometryError> {
    let u = p - center;
    let dist_sq = u.norm_squared();
    if dist_sq == 0.0 {
        return Err(GeometryError::InversionAtCenter);
    }
    Ok(center + u.scale(r * r / dist_sq))
}

/// Build the geodesic arc between two canvas points.
///
/// Inputs are raw canvas coordinates; they are shifted by the bounding box origin
/// first, so the returned arc is local to the disk's box.
///
/// # Errors
///
/// - [`GeometryError::InversionAtCenter`] if either point is the disk centre
/// - [`GeometryError::ParallelBisectors`] if `p`, `q` and the centre are collinear
/// - [`GeometryError::OnBoundary`] if either point lies on the boundary circle
///
/// The first two mean the geodesic is a diameter; see [`geodesic`].
pub fn build_geodesic(p: Point, q: Point, disk: &Disk) -> Result<Arc, GeometryError> {
    let p = disk.to_local(p);
    let q = disk.to_local(q);
    let center = disk.local_center();
    let r = disk.radius();

    let pp = circle_inversion(p, center, r)?;
    let qq = circle_inversion(q, center, r)?;

    let m = Line::through(p, pp)
        .ok_or(GeometryError::OnBoundary)?
        .perpendicular_through(midpoint(p, pp));
    let n = Line::through(q, qq)
        .ok_or(GeometryError::OnBoundary)?
        .perpendicular_through(midpoint(q, qq));
    let c = m.intersect(&n).ok_or(GeometryError::ParallelBisectors)?;

    Ok(Arc {
        p1: p,
        p2: q,
        center: c,
        start_angle: (q.y - c.y).atan2(q.x - c.x),
        end_angle: (p.y - c.y).atan2(p.x - c.x),
        radius: euclidean_distance(p, c),
    })
}

/// Turn an [`Arc`] into an SVG-style elliptical arc primitive.
///
/// Runs from the smaller to the larger angle. The sweep flag is 1 unless the arc
/// centre is left of the disk centre and the angle interval straddles π.
pub fn arc_to_path(arc: &Arc, disk: &Disk) -> PathDescriptor {
    let min_angle = arc.start_angle.min(arc.end_angle);
    let max_angle = arc.start_angle.max(arc.end_angle);
    let start = polar_to_cartesian(arc.radius, min_angle, arc.center);
    let end = polar_to_cartesian(arc.radius, max_angle, arc.center);

    let sweep = if arc.center.x < disk.local_center().x {
        !(min_angle < PI && max_angle > PI)
    } else {
        true
    };

    PathDescriptor::Arc {
        start,
        end,
        radius: arc.radius,
        large_arc: false,
        sweep,
    }
}

/// A geodesic between two points: a boundary-orthogonal arc, or a diameter chord
/// when the points are collinear with the disk centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geodesic {
    Arc(Arc),
    /// Straight chord along a diameter; endpoints are local to the disk's box.
    Diameter { p1: Point, p2: Point },
}

impl Geodesic {
    pub fn path(&self, disk: &Disk) -> PathDescriptor {
        match self {
            Geodesic::Arc(arc) => arc_to_path(arc, disk),
            Geodesic::Diameter { p1, p2 } => PathDescriptor::Line { start: *p1, end: *p2 },
        }
    }

    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Geodesic::Arc(arc) => Some(arc),
            Geodesic::Diameter { .. } => None,
        }
    }
}

/// [`build_geodesic`] with geodesics through the disk centre resolved to diameters.
pub fn geodesic(p: Point, q: Point, disk: &Disk) -> Result<Geodesic, GeometryError> {
    match build_geodesic(p, q, disk) {
        Ok(arc) => Ok(Geodesic::Arc(arc)),
        Err(GeometryError::ParallelBisectors) | Err(GeometryError::InversionAtCenter) => {
            tracing::debug!(?p, ?q, "geodesic passes through disk centre, drawing diameter");
            Ok(Geodesic::Diameter {
                p1: disk.to_local(p),
                p2: disk.to_local(q),
            })
        }
        Err(e) => Err(e),
    }
}
