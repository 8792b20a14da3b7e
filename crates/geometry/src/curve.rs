//! Angle, circular-arc and Bézier primitives
//!
//! Angles are radians measured with `atan2(y, x)`. An arc is described by a
//! start angle and a signed span; a span of `2π` or more covers the full
//! circle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::segment::{polyline_segments, segment_distance};
use crate::vector::{Vector2D, EPSILON};

/// Number of line segments a spline is flattened into for queries
pub const SPLINE_SEGMENTS: usize = 16;

/// Angular slack when testing membership of an angle in a span
const ANGLE_TOLERANCE: f64 = 1e-9;

/// Direction of `point` as seen from `center`
pub fn angle_of(center: Vector2D, point: Vector2D) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}

/// True when `angle` lies on the sweep from `start` through `start + span`
///
/// # Examples
///
/// ```
/// use geometry::curve::angle_in_span;
/// use std::f64::consts::PI;
///
/// assert!(angle_in_span(PI / 4.0, 0.0, PI / 2.0));
/// assert!(angle_in_span(-PI / 4.0, 0.0, -PI / 2.0));
/// assert!(!angle_in_span(PI, 0.0, PI / 2.0));
/// ```
pub fn angle_in_span(angle: f64, start: f64, span: f64) -> bool {
    if span.abs() >= TAU {
        return true;
    }
    if span >= 0.0 {
        (angle - start).rem_euclid(TAU) <= span + ANGLE_TOLERANCE
    } else {
        (start - angle).rem_euclid(TAU) <= -span + ANGLE_TOLERANCE
    }
}

pub fn point_on_circle(center: Vector2D, radius: f64, angle: f64) -> Vector2D {
    center + Vector2D::new(angle.cos(), angle.sin()) * radius
}

/// Both endpoints of an arc, start first
pub fn arc_endpoints(center: Vector2D, radius: f64, start: f64, span: f64) -> [Vector2D; 2] {
    [
        point_on_circle(center, radius, start),
        point_on_circle(center, radius, start + span),
    ]
}

/// Endpoints plus every axis-aligned extreme the arc sweeps through
///
/// The convex hull of these points bounds the arc, which makes them the
/// right point set for bounding boxes and convex-container tests.
pub fn arc_extremes(center: Vector2D, radius: f64, start: f64, span: f64) -> Vec<Vector2D> {
    let mut points = arc_endpoints(center, radius, start, span).to_vec();
    for quadrant in 0..4 {
        let angle = quadrant as f64 * FRAC_PI_2;
        if angle_in_span(angle, start, span) {
            points.push(point_on_circle(center, radius, angle));
        }
    }
    points
}

/// Closest point of an arc to `point`
///
/// When `point` sits on the center every arc point is equally close; the
/// start point is returned.
pub fn closest_point_on_arc(
    center: Vector2D,
    radius: f64,
    start: f64,
    span: f64,
    point: Vector2D,
) -> Vector2D {
    if (point - center).magnitude() <= f64::EPSILON {
        return point_on_circle(center, radius, start);
    }
    let angle = angle_of(center, point);
    if angle_in_span(angle, start, span) {
        return point_on_circle(center, radius, angle);
    }
    let [a, b] = arc_endpoints(center, radius, start, span);
    if (a - point).magnitude_squared() <= (b - point).magnitude_squared() {
        a
    } else {
        b
    }
}

pub fn arc_distance(center: Vector2D, radius: f64, start: f64, span: f64, point: Vector2D) -> f64 {
    (closest_point_on_arc(center, radius, start, span, point) - point).magnitude()
}

/// Farthest distance from `point` to any point of the arc
pub fn arc_max_distance(
    center: Vector2D,
    radius: f64,
    start: f64,
    span: f64,
    point: Vector2D,
) -> f64 {
    if (point - center).magnitude() <= f64::EPSILON {
        return radius;
    }
    // The farthest circle point is diametrically opposite the query point
    let opposite = angle_of(center, point) + PI;
    if angle_in_span(opposite, start, span) {
        return (point - center).magnitude() + radius;
    }
    let [a, b] = arc_endpoints(center, radius, start, span);
    (a - point).magnitude().max((b - point).magnitude())
}

/// True when the segment `(a, b)` meets the arc
pub fn segment_meets_arc(
    a: Vector2D,
    b: Vector2D,
    center: Vector2D,
    radius: f64,
    start: f64,
    span: f64,
) -> bool {
    let d = b - a;
    let f = a - center;
    let qa = d.dot(&d);
    if qa == 0.0 {
        return arc_distance(center, radius, start, span, a) <= EPSILON;
    }
    let qb = 2.0 * f.dot(&d);
    let qc = f.dot(&f) - radius * radius;
    let discriminant = qb * qb - 4.0 * qa * qc;
    if discriminant < 0.0 {
        return false;
    }
    let root = discriminant.sqrt();
    [(-qb - root) / (2.0 * qa), (-qb + root) / (2.0 * qa)]
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .any(|t| angle_in_span(angle_of(center, a + d * t), start, span))
}

/// True when the disk `(disk_center, disk_radius)` touches the arc
pub fn disk_meets_arc(
    disk_center: Vector2D,
    disk_radius: f64,
    center: Vector2D,
    radius: f64,
    start: f64,
    span: f64,
) -> bool {
    arc_distance(center, radius, start, span, disk_center) <= disk_radius
}

/// Two arcs share at least one point
pub fn arcs_meet(
    (c1, r1, s1, w1): (Vector2D, f64, f64, f64),
    (c2, r2, s2, w2): (Vector2D, f64, f64, f64),
) -> bool {
    let between = c2 - c1;
    let d = between.magnitude();
    if d <= EPSILON {
        if (r1 - r2).abs() > EPSILON {
            return false;
        }
        // Same circle: the sweeps overlap if either contains an endpoint of the other
        let [a1, b1] = arc_endpoints(c1, r1, s1, w1);
        let [a2, b2] = arc_endpoints(c2, r2, s2, w2);
        return [a2, b2]
            .into_iter()
            .any(|p| angle_in_span(angle_of(c1, p), s1, w1))
            || [a1, b1]
                .into_iter()
                .any(|p| angle_in_span(angle_of(c2, p), s2, w2));
    }
    if d > r1 + r2 + EPSILON || d < (r1 - r2).abs() - EPSILON {
        return false;
    }
    // Circle-circle intersection points
    let along = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
    let h = (r1 * r1 - along * along).max(0.0).sqrt();
    let unit = between / d;
    let base = c1 + unit * along;
    let offset = Vector2D::new(-unit.y, unit.x) * h;
    [base + offset, base - offset].into_iter().any(|p| {
        angle_in_span(angle_of(c1, p), s1, w1) && angle_in_span(angle_of(c2, p), s2, w2)
    })
}

/// Point on a cubic Bézier curve at parameter `t` in `[0, 1]`
pub fn bezier_point(control_points: &[Vector2D; 4], t: f64) -> Vector2D {
    let u = 1.0 - t;
    let [p0, p1, p2, p3] = *control_points;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Polyline approximation with `segments` equal parameter steps
pub fn flatten_bezier(control_points: &[Vector2D; 4], segments: usize) -> Vec<Vector2D> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| bezier_point(control_points, i as f64 / segments as f64))
        .collect()
}

/// Distance from `point` to the nearest segment of a polyline
pub fn polyline_distance(points: &[Vector2D], point: Vector2D) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => (only - point).magnitude(),
        _ => polyline_segments(points)
            .map(|(a, b)| segment_distance(a, b, point))
            .fold(f64::INFINITY, f64::min),
    }
}
