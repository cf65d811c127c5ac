//! Circle event prediction: decides whether an arc's breakpoints converge and where the
//! arc will vanish.

use crate::beach_line::Arc;
use crate::geometry::{circumcircle_bottom, close, edge_cross, is_zero, parabola_intersection, Point};

/// A predicted circle event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CirclePrediction {
    pub x: f64,
    /// Sweep coordinate at which the event fires: the bottom of the circumcircle.
    pub y: f64,
    /// Y-coordinate of the circle's center, the future Voronoi vertex.
    pub center_y: f64,
}

/// Predicts the circle event at which `arc` vanishes, if its breakpoints converge.
///
/// `None` for the outermost arcs, for transient triples with the same site on both
/// sides, for collinear triples, and for breakpoints that diverge.
pub(crate) fn predict(arc: &Arc, sites: &[Point], sweep_y: f64) -> Option<CirclePrediction> {
    let (left, right) = match (arc.left, arc.right) {
        (Some(left), Some(right)) => (left, right),
        _ => return None,
    };
    if left == right {
        return None;
    }

    let l = &sites[left];
    let m = &sites[arc.site];
    let r = &sites[right];

    let x32 = r.x - m.x;
    let y32 = r.y - m.y;
    let x21 = m.x - l.x;
    let y21 = m.y - l.y;
    let cross = edge_cross(l, m, r);
    if is_zero(cross) {
        return None;
    }

    let xb12 = parabola_intersection(l, m, sweep_y);
    let xb23 = parabola_intersection(m, r, sweep_y);
    // y of each breakpoint: on the pair's perpendicular bisector, or on the middle
    // site's parabola when the pair is level
    // TODO: the level-pair form divides by (m.y - sweep_y) and blows up when the middle
    // site also sits on the sweep line; the divergence test rejects those today, but
    // evaluating the neighbor's parabola instead would avoid the infinity entirely
    let yb12 = if !close(y21, 0.0) {
        (l.y + m.y) / 2.0 - (x21 / y21) * (xb12 - (l.x + m.x) / 2.0)
    } else {
        (m.y + sweep_y + (x21 * x21) / (4.0 * (m.y - sweep_y))) / 2.0
    };
    let yb23 = if !close(y32, 0.0) {
        (m.y + r.y) / 2.0 - (x32 / y32) * (xb23 - (m.x + r.x) / 2.0)
    } else {
        (m.y + sweep_y + (x32 * x32) / (4.0 * (m.y - sweep_y))) / 2.0
    };
    let xb = xb23 - xb12;
    let yb = yb23 - yb12;

    // breakpoint <1,2> grows along (y2 - y1, -(x2 - x1)); both ray parameters must be
    // non-negative for the breakpoints to converge
    let t12 = (xb * x32 + yb * y32) / cross;
    let t23 = (xb * x21 + yb * y21) / cross;

    if close(t12, 0.0) && close(t23, 0.0) && close(m.y, sweep_y) {
        // false alarm: the breakpoints start at a shared point but diverge; the
        // coinciding circle event just before this one already reported that point
        return None;
    }
    if (t12 < 0.0 && !close(t12, 0.0)) || (t23 < 0.0 && !close(t23, 0.0)) {
        return None;
    }

    let (bottom, center_y) = circumcircle_bottom(l, m, r)?;
    Some(CirclePrediction { x: bottom.x, y: bottom.y, center_y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::circumcenter;

    #[test]
    fn predicts_the_circumcircle_bottom_for_converging_breakpoints() {
        // the middle arc of a triangle's three sites collapses at the circumcircle
        let sites = vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 2.0, y: 3.0 },
            Point { x: 4.0, y: 0.0 },
        ];
        let arc = Arc::new(Some(0), 1, Some(2));

        let prediction = predict(&arc, &sites, 0.0).expect("breakpoints of a triangle's middle arc converge");
        let center = circumcenter(&sites[0], &sites[1], &sites[2]);
        assert!(close(prediction.x, center.x), "event x must be the circumcenter x, got {}", prediction.x);
        assert!(close(prediction.center_y, center.y), "got center y {}", prediction.center_y);
        assert!(
            prediction.y < prediction.center_y,
            "the event fires below the center, at the circle bottom"
        );
    }

    #[test]
    fn rejects_outermost_arcs() {
        let sites = vec![Point { x: 0.0, y: 1.0 }, Point { x: 2.0, y: 0.0 }];
        assert_eq!(None, predict(&Arc::new(None, 0, Some(1)), &sites, -1.0));
        assert_eq!(None, predict(&Arc::new(Some(0), 1, None), &sites, -1.0));
    }

    #[test]
    fn rejects_the_same_site_on_both_sides() {
        // the transient middle arc of a fresh split
        let sites = vec![Point { x: 0.0, y: 2.0 }, Point { x: 1.0, y: 0.0 }];
        assert_eq!(None, predict(&Arc::new(Some(0), 1, Some(0)), &sites, 0.0));
    }

    #[test]
    fn rejects_collinear_triples() {
        let sites = vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 0.0 },
            Point { x: 2.0, y: 0.0 },
        ];
        assert_eq!(None, predict(&Arc::new(Some(0), 1, Some(2)), &sites, 0.0));
    }

    #[test]
    fn rejects_diverging_breakpoints() {
        // after a collapse the surviving neighbor triple shares the same circumcircle,
        // but its breakpoints move apart; no event may be re-predicted
        let sites = vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 4.0, y: 0.0 },
            Point { x: 2.0, y: 3.0 },
        ];
        let sweep_y = -4.0 / 3.0; // bottom of the circumcircle through all three
        assert_eq!(None, predict(&Arc::new(Some(2), 0, Some(1)), &sites, sweep_y));
        assert_eq!(None, predict(&Arc::new(Some(0), 1, Some(2)), &sites, sweep_y));
    }
}
