//! Pairwise intersection and containment tables
//!
//! Both queries dispatch on the concrete variant of each operand. Overlap is
//! symmetric, so `intersects` lists each unordered pair once and retries with
//! the operands swapped; containment is directional and is listed per
//! container.
//!
//! Pairs with no dedicated test answer `false`, meaning "not known to
//! overlap" rather than "unsupported". Those pairs are:
//!
//! * intersects: Ellipse against Circle, Ellipse, Arc and Sector
//! * contains: Ellipse containing Circle, Ellipse, Arc or Sector; Triangle,
//!   Polygon and Sector containing an Ellipse; Point, Arc and Spline
//!   containing anything but a point. Line answers `false` for everything
//!   except points and equal lines.
//!
//! Every boundary is inclusive: touching shapes intersect.

use log::trace;

use crate::curve::{
    arc_endpoints, arc_max_distance, arcs_meet, disk_meets_arc, polyline_distance,
    segment_meets_arc,
};
use crate::segment::{
    circle_overlaps_polygon, edges, point_in_polygon, polygon_contains_chain, polygons_overlap,
    polyline_segments, region_contains_chain, segment_distance, segment_overlaps_polygon,
    segments_touch,
};
use crate::shapes::{Arc, Circle, Ellipse, Line, Rectangle, Sector, Shape};
use crate::vector::Vector2D;

/// `(center, radius, start, span)` of a circular arc
type ArcParams = (Vector2D, f64, f64, f64);

/// Symmetric overlap test
///
/// # Examples
///
/// ```
/// use geometry::intersection::intersects;
/// use geometry::shapes::{Circle, Ellipse, Shape, Triangle};
/// use geometry::vector::vec2;
///
/// let triangle = Shape::from(Triangle::new(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0)));
/// let circle = Shape::from(Circle::new(vec2(3.0, 3.0), 1.0));
/// assert!(intersects(&triangle, &circle));
///
/// // No ellipse-circle test exists, so the answer is a conservative `false`
/// let ellipse = Shape::from(Ellipse::new(vec2(3.0, 3.0), vec2(2.0, 1.0)));
/// assert!(!intersects(&ellipse, &circle));
/// ```
pub fn intersects(a: &Shape, b: &Shape) -> bool {
    ordered_intersects(a, b)
        .or_else(|| ordered_intersects(b, a))
        .unwrap_or_else(|| {
            trace!(
                "no intersection test for {:?} against {:?}; treating as disjoint",
                a.kind(),
                b.kind()
            );
            false
        })
}

/// Directional containment test: does `container` enclose all of `contained`
pub fn contains(container: &Shape, contained: &Shape) -> bool {
    let result = match container {
        Shape::Point(p) => match contained {
            Shape::Point(q) => Some(p.coincides_with(q.position())),
            _ => None,
        },
        Shape::Line(line) => Some(match contained {
            Shape::Point(q) => line.contains_point(q.position()),
            Shape::Line(other) => line.contains_line(other),
            // A one-dimensional primitive cannot enclose a region or a curve
            _ => false,
        }),
        Shape::Rectangle(rect) => Some(rectangle_contains(rect, contained)),
        Shape::Circle(circle) => Some(circle_contains(circle, contained)),
        Shape::Ellipse(ellipse) => ellipse_contains(ellipse, contained),
        Shape::Triangle(t) => polygon_contains(t.vertices(), contained),
        Shape::Polygon(p) => polygon_contains(p.vertices(), contained),
        Shape::Arc(arc) => match contained {
            Shape::Point(q) => Some(arc.contains_point(q.position())),
            _ => None,
        },
        Shape::Spline(spline) => match contained {
            Shape::Point(q) => Some(spline.contains_point(q.position())),
            _ => None,
        },
        Shape::Sector(sector) => sector_contains(sector, contained),
    };

    result.unwrap_or_else(|| {
        trace!(
            "no containment test for {:?} in {:?}; treating as not contained",
            contained.kind(),
            container.kind()
        );
        false
    })
}

/// Vertex ring of the straight-edged regions
fn ring(shape: &Shape) -> Option<Vec<Vector2D>> {
    match shape {
        Shape::Rectangle(r) => Some(r.corners().to_vec()),
        Shape::Triangle(t) => Some(t.vertices().to_vec()),
        Shape::Polygon(p) => Some(p.vertices().to_vec()),
        _ => None,
    }
}

/// Overlap for one orientation of a pair; `None` when this orientation has no entry
fn ordered_intersects(a: &Shape, b: &Shape) -> Option<bool> {
    let hit = match (a, b) {
        (Shape::Point(p), other) => point_hits(p.position(), other),

        (Shape::Line(l), Shape::Line(m)) => l.intersects_line(m),
        (Shape::Line(l), Shape::Rectangle(r)) => l.intersects_rectangle(r),
        (Shape::Line(l), Shape::Circle(c)) => l.intersects_circle(c),
        (Shape::Line(l), Shape::Ellipse(e)) => l.intersects_ellipse(e),
        (Shape::Line(l), Shape::Triangle(t)) => {
            segment_overlaps_polygon(l.point_one(), l.point_two(), t.vertices())
        }
        (Shape::Line(l), Shape::Polygon(p)) => {
            segment_overlaps_polygon(l.point_one(), l.point_two(), p.vertices())
        }
        (Shape::Line(l), Shape::Arc(arc)) => {
            let (center, radius, start, span) = arc.params();
            segment_meets_arc(l.point_one(), l.point_two(), center, radius, start, span)
        }
        (Shape::Line(l), Shape::Spline(s)) => {
            chains_touch(&[l.point_one(), l.point_two()], s.points())
        }
        (Shape::Line(l), Shape::Sector(s)) => {
            sector_meets_chain(s, &[l.point_one(), l.point_two()])
        }

        (Shape::Rectangle(r), Shape::Rectangle(q)) => rectangles_overlap(r, q),
        (Shape::Rectangle(r), Shape::Circle(c)) => {
            (r.clamp_point(c.position()) - c.position()).magnitude_squared()
                <= c.radius() * c.radius()
        }
        (Shape::Rectangle(r), Shape::Ellipse(e)) => ellipse_meets_ring(e, &r.corners()),

        (Shape::Circle(c), Shape::Circle(d)) => {
            let reach = c.radius() + d.radius();
            (c.position() - d.position()).magnitude_squared() <= reach * reach
        }
        (Shape::Circle(c), Shape::Arc(arc)) => {
            let (center, radius, start, span) = arc.params();
            disk_meets_arc(c.position(), c.radius(), center, radius, start, span)
        }
        (Shape::Circle(c), Shape::Spline(s)) => {
            polyline_distance(s.points(), c.position()) <= c.radius()
        }
        (Shape::Circle(c), Shape::Sector(s)) => sector_meets_disk(s, c),
        (Shape::Circle(c), other) => {
            let vertices = ring(other)?;
            circle_overlaps_polygon(c.position(), c.radius(), &vertices)
        }

        (Shape::Ellipse(e), Shape::Spline(s)) => {
            if !e.is_proper() {
                return Some(intersects(&degenerate_ellipse(e), b));
            }
            let mapped: Vec<_> = s.points().iter().map(|&p| e.to_unit_space(p)).collect();
            polyline_distance(&mapped, Vector2D::zeros()) <= 1.0
        }
        (Shape::Ellipse(e), other @ (Shape::Triangle(_) | Shape::Polygon(_))) => {
            ellipse_meets_ring(e, &ring(other)?)
        }

        (Shape::Arc(arc), Shape::Arc(other)) => arcs_meet(arc.params(), other.params()),
        (Shape::Arc(arc), Shape::Spline(s)) => chain_meets_arc(s.points(), arc.params()),
        (Shape::Arc(arc), Shape::Sector(s)) => sector_meets_arc(s, arc),
        (Shape::Arc(arc), other) => ring_meets_arc(&ring(other)?, arc.params()),

        (Shape::Spline(s), Shape::Spline(t)) => chains_touch(s.points(), t.points()),
        (Shape::Spline(s), Shape::Sector(sector)) => sector_meets_chain(sector, s.points()),
        (Shape::Spline(s), other) => ring_meets_chain(&ring(other)?, s.points()),

        (Shape::Sector(s), Shape::Sector(t)) => sectors_meet(s, t),
        (Shape::Sector(s), other) => ring_meets_sector(&ring(other)?, s),

        (Shape::Rectangle(_) | Shape::Triangle(_) | Shape::Polygon(_), other) => {
            polygons_overlap(&ring(a)?, &ring(other)?)
        }

        _ => return None,
    };
    Some(hit)
}

fn point_hits(point: Vector2D, other: &Shape) -> bool {
    match other {
        Shape::Point(q) => q.coincides_with(point),
        Shape::Line(l) => l.contains_point(point),
        Shape::Rectangle(r) => r.contains_point(point),
        Shape::Circle(c) => c.contains_point(point),
        Shape::Ellipse(e) => e.contains_point(point),
        Shape::Triangle(t) => t.contains_point(point),
        Shape::Arc(a) => a.contains_point(point),
        Shape::Polygon(p) => p.contains_point(point),
        Shape::Spline(s) => s.contains_point(point),
        Shape::Sector(s) => s.contains_point(point),
    }
}

fn rectangles_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
}

/// A zero-radius ellipse is the segment along its remaining axis
fn degenerate_ellipse(e: &Ellipse) -> Shape {
    Shape::from(Line::new(
        e.position() - e.half_extents(),
        e.position() + e.half_extents(),
    ))
}

/// Exact: scaling by the radii maps the ellipse to the unit circle and keeps
/// the ring a polygon
fn ellipse_meets_ring(e: &Ellipse, vertices: &[Vector2D]) -> bool {
    if !e.is_proper() {
        let (one, two) = (e.position() - e.half_extents(), e.position() + e.half_extents());
        return segment_overlaps_polygon(one, two, vertices);
    }
    let mapped: Vec<_> = vertices.iter().map(|&p| e.to_unit_space(p)).collect();
    circle_overlaps_polygon(Vector2D::zeros(), 1.0, &mapped)
}

fn chains_touch(a: &[Vector2D], b: &[Vector2D]) -> bool {
    polyline_segments(a)
        .any(|(a1, a2)| polyline_segments(b).any(|(b1, b2)| segments_touch(a1, a2, b1, b2)))
}

fn chain_meets_arc(chain: &[Vector2D], (center, radius, start, span): ArcParams) -> bool {
    polyline_segments(chain).any(|(a, b)| segment_meets_arc(a, b, center, radius, start, span))
}

fn ring_meets_chain(vertices: &[Vector2D], chain: &[Vector2D]) -> bool {
    chain.iter().any(|&p| point_in_polygon(vertices, p))
        || polyline_segments(chain).any(|(a, b)| segment_overlaps_polygon(a, b, vertices))
}

fn ring_meets_arc(vertices: &[Vector2D], arc: ArcParams) -> bool {
    let (center, radius, start, span) = arc;
    let endpoints = arc_endpoints(center, radius, start, span);
    endpoints
        .iter()
        .any(|&p| point_in_polygon(vertices, p))
        || edges(vertices)
            .any(|(a, b)| segment_meets_arc(a, b, center, radius, start, span))
}

/// Any straight edge of the sector meets the segment
fn sector_edges_touch(sector: &Sector, a: Vector2D, b: Vector2D) -> bool {
    sector
        .radial_edges()
        .iter()
        .any(|&(p, q)| segments_touch(a, b, p, q))
}

fn sector_meets_chain(sector: &Sector, chain: &[Vector2D]) -> bool {
    let (center, radius, start, span) = sector.arc_params();
    chain.iter().any(|&p| sector.contains_point(p))
        || polyline_segments(chain).any(|(a, b)| {
            sector_edges_touch(sector, a, b) || segment_meets_arc(a, b, center, radius, start, span)
        })
}

fn sector_meets_disk(sector: &Sector, circle: &Circle) -> bool {
    let (center, radius, start, span) = sector.arc_params();
    sector.contains_point(circle.position())
        || sector
            .radial_edges()
            .iter()
            .any(|&(a, b)| segment_distance(a, b, circle.position()) <= circle.radius())
        || disk_meets_arc(circle.position(), circle.radius(), center, radius, start, span)
}

fn sector_meets_arc(sector: &Sector, arc: &Arc) -> bool {
    let (center, radius, start, span) = arc.params();
    [arc.start_point(), arc.end_point()]
        .into_iter()
        .any(|p| sector.contains_point(p))
        || arcs_meet(sector.arc_params(), arc.params())
        || sector
            .radial_edges()
            .iter()
            .any(|&(a, b)| segment_meets_arc(a, b, center, radius, start, span))
}

fn ring_meets_sector(vertices: &[Vector2D], sector: &Sector) -> bool {
    let (center, radius, start, span) = sector.arc_params();
    vertices.iter().any(|&p| sector.contains_point(p))
        || point_in_polygon(vertices, sector.position())
        || edges(vertices).any(|(a, b)| {
            sector_edges_touch(sector, a, b) || segment_meets_arc(a, b, center, radius, start, span)
        })
}

fn sectors_meet(s: &Sector, t: &Sector) -> bool {
    if s.contains_point(t.position()) || t.contains_point(s.position()) {
        return true;
    }
    let (sc, sr, ss, sw) = s.arc_params();
    let (tc, tr, ts, tw) = t.arc_params();
    s.radial_edges().iter().any(|&(a, b)| {
        sector_edges_touch(t, a, b) || segment_meets_arc(a, b, tc, tr, ts, tw)
    }) || t
        .radial_edges()
        .iter()
        .any(|&(a, b)| segment_meets_arc(a, b, sc, sr, ss, sw))
        || arcs_meet(s.arc_params(), t.arc_params())
}

fn rectangle_contains(rect: &Rectangle, contained: &Shape) -> bool {
    // An empty polygon has degenerate bounds at the origin, not a point set
    if let Shape::Polygon(p) = contained {
        if p.vertices().is_empty() {
            return false;
        }
    }
    // Exact for every variant: an axis-aligned box encloses a shape iff it
    // encloses the shape's bounding box
    let (min, max) = contained.bounds();
    rect.contains_point(min) && rect.contains_point(max)
}

fn circle_contains(circle: &Circle, contained: &Shape) -> bool {
    let center = circle.position();
    let radius = circle.radius();
    let within = |p: &Vector2D| (p - center).magnitude() <= radius;
    match contained {
        Shape::Point(p) => circle.contains_point(p.position()),
        Shape::Line(l) => within(&l.point_one()) && within(&l.point_two()),
        Shape::Rectangle(r) => r.corners().iter().all(within),
        Shape::Circle(c) => (c.position() - center).magnitude() + c.radius() <= radius,
        // Sufficient, and exact for concentric shapes
        Shape::Ellipse(e) => {
            (e.position() - center).magnitude() + e.radius_width().max(e.radius_height()) <= radius
        }
        Shape::Triangle(t) => t.vertices().iter().all(within),
        Shape::Polygon(p) => !p.vertices().is_empty() && p.vertices().iter().all(within),
        Shape::Spline(s) => s.points().iter().all(within),
        Shape::Arc(a) => {
            let (c, r, start, span) = a.params();
            arc_max_distance(c, r, start, span, center) <= radius
        }
        Shape::Sector(s) => {
            let (c, r, start, span) = s.arc_params();
            within(&c) && arc_max_distance(c, r, start, span, center) <= radius
        }
    }
}

fn ellipse_contains(ellipse: &Ellipse, contained: &Shape) -> Option<bool> {
    if !ellipse.is_proper() {
        return match contained {
            Shape::Point(p) => Some(ellipse.contains_point(p.position())),
            _ => None,
        };
    }
    let within = |p: &Vector2D| ellipse.to_unit_space(*p).magnitude_squared() <= 1.0;
    let inside = match contained {
        Shape::Point(p) => ellipse.contains_point(p.position()),
        Shape::Line(l) => within(&l.point_one()) && within(&l.point_two()),
        Shape::Rectangle(r) => r.corners().iter().all(within),
        Shape::Triangle(t) => t.vertices().iter().all(within),
        Shape::Polygon(p) => !p.vertices().is_empty() && p.vertices().iter().all(within),
        Shape::Spline(s) => s.points().iter().all(within),
        Shape::Circle(_) | Shape::Ellipse(_) | Shape::Arc(_) | Shape::Sector(_) => return None,
    };
    Some(inside)
}

/// Containment for triangles and polygons, convex or not
fn polygon_contains(vertices: &[Vector2D], contained: &Shape) -> Option<bool> {
    let inside = match contained {
        Shape::Point(p) => point_in_polygon(vertices, p.position()),
        Shape::Line(l) => polygon_contains_chain(vertices, &[l.point_one(), l.point_two()], false),
        Shape::Spline(s) => polygon_contains_chain(vertices, s.points(), false),
        Shape::Circle(c) => {
            point_in_polygon(vertices, c.position())
                && edges(vertices).all(|(a, b)| segment_distance(a, b, c.position()) >= c.radius())
        }
        Shape::Arc(arc) => {
            let (center, radius, start, span) = arc.params();
            point_in_polygon(vertices, arc.start_point())
                && point_in_polygon(vertices, arc.end_point())
                && !edges(vertices)
                    .any(|(a, b)| segment_meets_arc(a, b, center, radius, start, span))
        }
        Shape::Sector(s) => {
            let (center, radius, start, span) = s.arc_params();
            let [one, two] = s.endpoints();
            polygon_contains_chain(vertices, &[one, s.position(), two], false)
                && !edges(vertices)
                    .any(|(a, b)| segment_meets_arc(a, b, center, radius, start, span))
        }
        Shape::Ellipse(_) => return None,
        other => polygon_contains_chain(vertices, &ring(other)?, true),
    };
    Some(inside)
}

fn sector_contains(sector: &Sector, contained: &Shape) -> Option<bool> {
    let (center, radius, _, _) = sector.arc_params();
    let boundary = if sector.is_full_circle() {
        Vec::new()
    } else {
        sector.radial_edges().to_vec()
    };
    let chain_inside = |chain: &[Vector2D], closed: bool| {
        region_contains_chain(|p| sector.contains_point(p), &boundary, chain, closed)
    };
    let clear_of_radii = |(c, r, s, w): ArcParams| {
        !boundary
            .iter()
            .any(|&(a, b)| segment_meets_arc(a, b, c, r, s, w))
    };

    let inside = match contained {
        Shape::Point(p) => sector.contains_point(p.position()),
        Shape::Circle(c) => {
            sector.contains_point(c.position())
                && (c.position() - center).magnitude() + c.radius() <= radius
                && boundary
                    .iter()
                    .all(|&(a, b)| segment_distance(a, b, c.position()) >= c.radius())
        }
        Shape::Arc(arc) => {
            let (c, r, s, w) = arc.params();
            sector.contains_point(arc.start_point())
                && sector.contains_point(arc.end_point())
                && arc_max_distance(c, r, s, w, center) <= radius
                && clear_of_radii(arc.params())
        }
        Shape::Sector(inner) => {
            let (c, r, s, w) = inner.arc_params();
            let [one, two] = inner.endpoints();
            chain_inside(&[one, inner.position(), two], false)
                && arc_max_distance(c, r, s, w, center) <= radius
                && clear_of_radii(inner.arc_params())
        }
        Shape::Ellipse(_) => return None,
        Shape::Line(l) => chain_inside(&[l.point_one(), l.point_two()], false),
        Shape::Spline(s) => chain_inside(s.points(), false),
        other => chain_inside(&ring(other)?, true),
    };
    Some(inside)
}
