//! The beach line: live parabolic arcs ordered left to right by the x-coordinate of
//! their right breakpoint at the current sweep position.
//!
//! That coordinate is a function of the sweep position, not a stored value, so every
//! comparison and locate call threads the sweep y explicitly; nothing here reads
//! ambient state. Arcs live in a push-only arena and are addressed by stable [ArcId]
//! handles, which is what pending circle events hold on to.

use crate::event::EventId;
use crate::geometry::{close, parabola_intersection, Point};

pub(crate) type ArcId = usize;

/// One parabolic segment of the beach line, identified by its generating site and the
/// neighboring sites it currently shares breakpoints with. The outermost arcs have no
/// neighbor on one side.
#[derive(Debug, Clone)]
pub(crate) struct Arc {
    pub left: Option<usize>,
    pub site: usize,
    pub right: Option<usize>,
    /// Pending circle event at which this arc vanishes, if one is scheduled. Cleared
    /// when the event is cancelled; at most one exists per live arc.
    pub circle_event: Option<EventId>,
}

impl Arc {
    pub fn new(left: Option<usize>, site: usize, right: Option<usize>) -> Self {
        Self { left, site, right, circle_event: None }
    }

    /// X-coordinate of this arc's right breakpoint at the given sweep position.
    /// The rightmost arc has none.
    fn right_breakpoint(&self, sites: &[Point], sweep_y: f64) -> Option<f64> {
        self.right
            .map(|right| parabola_intersection(&sites[self.site], &sites[right], sweep_y))
    }

    /// Tie-break measure between zero-width arcs left behind by coinciding circle
    /// events: the mean of the negated angles of the two breakpoint segments.
    /// Deterministic, but otherwise an arbitrary documented choice.
    fn angle_measure(&self, sites: &[Point]) -> f64 {
        let left = &sites[self.left.expect("zero-width arcs have both neighbors")];
        let middle = &sites[self.site];
        let right = &sites[self.right.expect("zero-width arcs have both neighbors")];

        let angle1 = -f64::atan2(middle.y - left.y, middle.x - left.x);
        let angle2 = -f64::atan2(right.y - middle.y, right.x - middle.x);
        (angle1 + angle2) / 2.0
    }
}

/// Strict left-of ordering between two arcs at the given sweep position. For arcs
/// occupying the same position neither direction holds; the event queue's
/// circle-versus-circle tie-break relies on that.
pub(crate) fn arc_less(a: &Arc, b: &Arc, sites: &[Point], sweep_y: f64) -> bool {
    // the outermost arcs sort by their missing side
    let (a_left, a_right) = match (a.left, a.right) {
        (Some(left), Some(right)) => (left, right),
        (None, _) => return true,
        (_, None) => return false,
    };
    let (b_left, b_right) = match (b.left, b.right) {
        (Some(left), Some(right)) => (left, right),
        (None, _) => return false,
        (_, None) => return true,
    };

    let r1 = parabola_intersection(&sites[a.site], &sites[a_right], sweep_y);
    let r2 = parabola_intersection(&sites[b.site], &sites[b_right], sweep_y);
    if !close(r1, r2) {
        return r1 < r2;
    }
    let l1 = parabola_intersection(&sites[a_left], &sites[a.site], sweep_y);
    if !close(l1, r1) {
        return true;
    }
    let l2 = parabola_intersection(&sites[b_left], &sites[b.site], sweep_y);
    if !close(l2, r2) {
        return false;
    }

    // co-incident zero width arcs. a degenerate arc for a site still on the sweep line
    // sorts before the zero-width arcs left by coinciding circle events
    if close(sites[a.site].y, sweep_y) {
        return true;
    }
    if close(sites[b.site].y, sweep_y) {
        return false;
    }
    a.angle_measure(sites) < b.angle_measure(sites)
}

/// Ordered collection of the live arcs.
#[derive(Debug, Default)]
pub(crate) struct BeachLine {
    arcs: Vec<Arc>,
    order: Vec<ArcId>,
}

impl BeachLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn arc(&self, id: ArcId) -> &Arc {
        &self.arcs[id]
    }

    pub fn arc_mut(&mut self, id: ArcId) -> &mut Arc {
        &mut self.arcs[id]
    }

    /// Handle of the arc currently at `position`.
    pub fn at(&self, position: usize) -> ArcId {
        self.order[position]
    }

    /// Allocates `arc` in the arena and splices it into the ordering at `position`.
    pub fn insert(&mut self, position: usize, arc: Arc) -> ArcId {
        let id = self.arcs.len();
        self.arcs.push(arc);
        self.order.insert(position, id);
        id
    }

    /// Unlinks the arc at `position`. Its arena slot stays allocated so handles held by
    /// cancelled events remain addressable.
    pub fn remove(&mut self, position: usize) -> ArcId {
        self.order.remove(position)
    }

    /// Position of the first arc whose right breakpoint at the current sweep position
    /// is at or beyond `x` (within epsilon): the arc directly above a site event at `x`.
    /// Binary search; the caller must not call this on an empty beach line.
    pub fn locate(&self, x: f64, sites: &[Point], sweep_y: f64) -> usize {
        let position = self.order.partition_point(|&id| {
            match self.arcs[id].right_breakpoint(sites, sweep_y) {
                Some(breakpoint) => !close(breakpoint, x) && breakpoint < x,
                // the rightmost arc extends past any x
                None => false,
            }
        });
        debug_assert!(position < self.order.len(), "the rightmost arc never compares left of x");
        position
    }

    /// Position of a live arc. Linear scan: circle events carry arc handles, and around
    /// a collapse several breakpoints coincide, making a breakpoint search ambiguous.
    pub fn position_of(&self, id: ArcId) -> Option<usize> {
        self.order.iter().position(|&arc| arc == id)
    }
}
