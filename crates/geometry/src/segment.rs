//! Segment and polygon-edge primitives shared by the shape queries
//!
//! Everything here works on raw endpoints so the same code serves lines,
//! rectangle edges, triangle and polygon edges, and flattened splines.

use serde::{Deserialize, Serialize};

use crate::vector::{Vector2D, VectorExt, EPSILON};

/// Classification of a segment-segment intersection test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LineIntersection {
    /// The segments do not meet
    None,
    /// The segments meet at exactly one point
    One,
    /// The segments are parallel and lie on different lines
    Parallel,
    /// The segments lie on the same infinite line
    Colinear,
}

impl LineIntersection {
    /// Boolean view: `One` and `Colinear` count as intersecting
    pub fn is_hit(self) -> bool {
        matches!(self, LineIntersection::One | LineIntersection::Colinear)
    }
}

/// Parametric cross-product test between segments `(p1, p2)` and `(q1, q2)`
///
/// Returns the classification and, for `One`, the intersection point
/// `p1 + ua * (p2 - p1)`.
///
/// # Examples
///
/// ```
/// use geometry::segment::{segment_intersection, LineIntersection};
/// use geometry::vector::vec2;
///
/// let (kind, at) = segment_intersection(
///     vec2(0.0, 0.0),
///     vec2(10.0, 0.0),
///     vec2(5.0, -5.0),
///     vec2(5.0, 5.0),
/// );
/// assert_eq!(kind, LineIntersection::One);
/// assert_eq!(at, Some(vec2(5.0, 0.0)));
/// ```
pub fn segment_intersection(
    p1: Vector2D,
    p2: Vector2D,
    q1: Vector2D,
    q2: Vector2D,
) -> (LineIntersection, Option<Vector2D>) {
    let ua_num = (q2.x - q1.x) * (p1.y - q1.y) - (q2.y - q1.y) * (p1.x - q1.x);
    let ub_num = (p2.x - p1.x) * (p1.y - q1.y) - (p2.y - p1.y) * (p1.x - q1.x);
    let denom = (q2.y - q1.y) * (p2.x - p1.x) - (q2.x - q1.x) * (p2.y - p1.y);

    if denom == 0.0 {
        let kind = if ua_num == 0.0 || ub_num == 0.0 {
            LineIntersection::Colinear
        } else {
            LineIntersection::Parallel
        };
        return (kind, None);
    }

    let ua = ua_num / denom;
    let ub = ub_num / denom;

    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        (LineIntersection::One, Some(p1 + (p2 - p1) * ua))
    } else {
        (LineIntersection::None, None)
    }
}

/// Strict segment overlap test
///
/// Unlike `LineIntersection::is_hit`, colinear segments only count when they
/// actually share a stretch of the line.
pub fn segments_touch(p1: Vector2D, p2: Vector2D, q1: Vector2D, q2: Vector2D) -> bool {
    match segment_intersection(p1, p2, q1, q2).0 {
        LineIntersection::One => true,
        LineIntersection::Colinear => {
            segment_distance(q1, q2, p1) <= EPSILON
                || segment_distance(q1, q2, p2) <= EPSILON
                || segment_distance(p1, p2, q1) <= EPSILON
                || segment_distance(p1, p2, q2) <= EPSILON
        }
        LineIntersection::None | LineIntersection::Parallel => false,
    }
}

/// Perpendicular distance from `point` to the infinite line through `a` and `b`
///
/// Vector rejection: `|(a - p) - dot(a - p, n) * n|` with `n` the unit
/// direction. A degenerate line (`a == b`) measures the distance to `a`.
pub fn line_distance(a: Vector2D, b: Vector2D, point: Vector2D) -> f64 {
    let n = (b - a).normalize_or_zero();
    let ap = a - point;
    (ap - n * ap.dot(&n)).magnitude()
}

/// Distance from `point` to the closest point of the segment `(a, b)`
pub fn segment_distance(a: Vector2D, b: Vector2D, point: Vector2D) -> f64 {
    (closest_point_on_segment(a, b, point) - point).magnitude()
}

pub fn closest_point_on_segment(a: Vector2D, b: Vector2D, point: Vector2D) -> Vector2D {
    let ab = b - a;
    let len_sq = ab.magnitude_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Closed-loop edge list of a vertex ring
pub fn edges(vertices: &[Vector2D]) -> impl Iterator<Item = (Vector2D, Vector2D)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Open polyline segment list
pub fn polyline_segments(points: &[Vector2D]) -> impl Iterator<Item = (Vector2D, Vector2D)> + '_ {
    points.windows(2).map(|w| (w[0], w[1]))
}

/// Point-in-polygon test for simple (possibly concave) polygons
///
/// Boundary points count as inside.
pub fn point_in_polygon(vertices: &[Vector2D], point: Vector2D) -> bool {
    match vertices.len() {
        0 => false,
        1 => (vertices[0] - point).magnitude() <= EPSILON,
        _ => {
            if edges(vertices).any(|(a, b)| segment_distance(a, b, point) <= EPSILON) {
                return true;
            }
            // Even-odd ray cast towards +x
            let mut inside = false;
            for (a, b) in edges(vertices) {
                if (a.y > point.y) != (b.y > point.y) {
                    let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                    if point.x < x_cross {
                        inside = !inside;
                    }
                }
            }
            inside
        }
    }
}

/// True when any edge of `a` touches any edge of `b`
pub fn rings_cross(a: &[Vector2D], b: &[Vector2D]) -> bool {
    edges(a).any(|(a1, a2)| edges(b).any(|(b1, b2)| segments_touch(a1, a2, b1, b2)))
}

/// Region overlap of two simple polygons
pub fn polygons_overlap(a: &[Vector2D], b: &[Vector2D]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    rings_cross(a, b) || point_in_polygon(b, a[0]) || point_in_polygon(a, b[0])
}

/// Segment against polygon region
pub fn segment_overlaps_polygon(p1: Vector2D, p2: Vector2D, vertices: &[Vector2D]) -> bool {
    point_in_polygon(vertices, p1)
        || point_in_polygon(vertices, p2)
        || edges(vertices).any(|(a, b)| segments_touch(p1, p2, a, b))
}

/// Disk against polygon region
pub fn circle_overlaps_polygon(center: Vector2D, radius: f64, vertices: &[Vector2D]) -> bool {
    point_in_polygon(vertices, center)
        || edges(vertices).any(|(a, b)| segment_distance(a, b, center) <= radius)
}

/// True when `(p1, p2)` crosses one of `boundary` at a point clear of every
/// endpoint involved
pub fn segment_crosses_any(p1: Vector2D, p2: Vector2D, boundary: &[(Vector2D, Vector2D)]) -> bool {
    boundary.iter().any(|&(a, b)| {
        match segment_intersection(p1, p2, a, b) {
            (LineIntersection::One, Some(at)) => {
                let clear_of = |v: Vector2D| (at - v).magnitude() > EPSILON;
                clear_of(p1) && clear_of(p2) && clear_of(a) && clear_of(b)
            }
            _ => false,
        }
    })
}

/// Region containment of a point chain
///
/// The chain is inside when every point is inside, no segment's midpoint
/// falls outside, and no segment properly crosses the region's straight
/// boundary. `closed` joins the last point back to the first.
pub fn region_contains_chain<F>(
    contains_point: F,
    boundary: &[(Vector2D, Vector2D)],
    chain: &[Vector2D],
    closed: bool,
) -> bool
where
    F: Fn(Vector2D) -> bool,
{
    if chain.is_empty() || !chain.iter().all(|&p| contains_point(p)) {
        return false;
    }
    let leaves = |(a, b): (Vector2D, Vector2D)| {
        segment_crosses_any(a, b, boundary) || !contains_point((a + b) / 2.0)
    };
    if closed && chain.len() > 2 {
        !edges(chain).any(leaves)
    } else {
        !polyline_segments(chain).any(leaves)
    }
}

/// Polygon (possibly concave) fully encloses the point chain
pub fn polygon_contains_chain(vertices: &[Vector2D], chain: &[Vector2D], closed: bool) -> bool {
    let boundary: Vec<_> = edges(vertices).collect();
    region_contains_chain(|p| point_in_polygon(vertices, p), &boundary, chain, closed)
}

/// Axis-aligned bounds `(min, max)` of a point set
pub fn bounding_box(points: &[Vector2D]) -> (Vector2D, Vector2D) {
    let first = points.first().copied().unwrap_or_else(Vector2D::zeros);
    points.iter().fold((first, first), |(min, max), p| {
        (
            Vector2D::new(min.x.min(p.x), min.y.min(p.y)),
            Vector2D::new(max.x.max(p.x), max.y.max(p.y)),
        )
    })
}

/// Arithmetic mean of a point set
pub fn mean(points: &[Vector2D]) -> Vector2D {
    if points.is_empty() {
        return Vector2D::zeros();
    }
    points.iter().fold(Vector2D::zeros(), |acc, p| acc + p) / points.len() as f64
}

/// Signed shoelace area; positive for counter-clockwise rings
pub fn signed_area(vertices: &[Vector2D]) -> f64 {
    edges(vertices).map(|(a, b)| a.perp(&b)).sum::<f64>() / 2.0
}
