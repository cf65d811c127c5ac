//! Numeric kernel for the sweep: point type, epsilon-tolerant comparisons,
//! parabola intersection and circumcircle computation.

/// Absolute tolerance for every coordinate comparison in the crate.
///
/// The orderings the sweep is built on are strict total orders, so each predicate must
/// be antisymmetric under this tolerance: when `close(a, b)` holds, neither value
/// compares less than the other.
pub const EPSILON: f64 = 1e-5;

/// A point in 2D space. Also used to represent input sites.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[inline]
pub(crate) fn is_zero(a: f64) -> bool {
    a < EPSILON && a > -EPSILON
}

#[inline]
pub(crate) fn close(a: f64, b: f64) -> bool {
    is_zero(a - b)
}

/// Calculates the squared distance between a and b.
#[inline]
pub(crate) fn dist2(a: &Point, b: &Point) -> f64 {
    let x = a.x - b.x;
    let y = a.y - b.y;
    (x * x) + (y * y)
}

/// Cross product of the edge vectors b→c and a→b. Zero (within epsilon) means the three
/// points are collinear and have no circumcircle.
#[inline]
pub(crate) fn edge_cross(a: &Point, b: &Point, c: &Point) -> f64 {
    (c.x - b.x) * (b.y - a.y) - (c.y - b.y) * (b.x - a.x)
}

/// X-coordinate where the parabola with focus `a` crosses the parabola with focus `b`,
/// both with directrix `y = sweep_y`, choosing the branch for `a` being the arc on the
/// left. The other crossing of the same two parabolas is `parabola_intersection(b, a, ..)`.
///
/// Foci sharing a y-coordinate (within epsilon) have a vertical bisector: the breakpoint
/// is the midpoint of their x-coordinates. The reversed case (`a.x >= b.x`) cannot arise
/// while the beach line ordering is maintained and yields the invalid sentinel.
pub(crate) fn parabola_intersection(a: &Point, b: &Point, sweep_y: f64) -> f64 {
    if close(a.y, b.y) {
        if a.x < b.x {
            return (a.x + b.x) / 2.0;
        }
        return f64::MAX;
    }

    let dx2 = (a.x - b.x) * (a.x - b.x);
    let dy2 = (a.y - b.y) * (a.y - b.y);
    let da = a.y - sweep_y;
    let db = b.y - sweep_y;

    // sqrt of a tiny negative is -NaN: a focus sitting on the directrix forces K to
    // zero, and round-off in the radicand clamps at zero
    let k = if is_zero(da) || is_zero(db) {
        0.0
    } else {
        (da * db * (dx2 + dy2)).max(0.0).sqrt()
    };

    // always +K: the sign of (b.y - a.y) is exactly the branch choice
    (a.x * db - b.x * da + k) / (b.y - a.y)
}

/// Center of the circle through `a`, `b` and `c`.
///
/// Undefined for collinear input (the determinant vanishes); callers guard with
/// [edge_cross] first.
pub(crate) fn circumcenter(a: &Point, b: &Point, c: &Point) -> Point {
    // move origin to a
    let b_x = b.x - a.x;
    let b_y = b.y - a.y;
    let c_x = c.x - a.x;
    let c_y = c.y - a.y;

    let bb = b_x * b_x + b_y * b_y;
    let cc = c_x * c_x + c_y * c_y;
    let d = 1.0 / (2.0 * (b_x * c_y - b_y * c_x));

    Point {
        x: a.x + d * (c_y * bb - b_y * cc),
        y: a.y + d * (b_x * cc - c_x * bb),
    }
}

/// The lowest point of the circumcircle through three sites, together with the circle
/// center's y-coordinate. `None` when the sites are collinear.
pub(crate) fn circumcircle_bottom(a: &Point, b: &Point, c: &Point) -> Option<(Point, f64)> {
    if is_zero(edge_cross(a, b, c)) {
        return None;
    }

    let center = circumcenter(a, b, c);
    let radius = dist2(&center, a).sqrt();
    let bottom = Point { x: center.x, y: center.y - radius };

    Some((bottom, center.y))
}
