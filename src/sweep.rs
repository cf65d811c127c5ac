//! The sweep itself: one construction session owning the event queue, the beach line
//! and the diagram accumulator for a single run-to-completion pass.

use std::cmp::Ordering;

use crate::beach_line::{arc_less, Arc, ArcId, BeachLine};
use crate::circle;
use crate::diagram::{DiagramBuilder, VoronoiEdge};
use crate::event::{Event, EventId, EventKind, EventQueue};
use crate::geometry::{close, Point};

/// Event priority: sweep y decreasing, then x increasing; at the same point circle
/// events precede site events, and coinciding circle events defer to the ordering of
/// their arcs.
fn event_order(a: &Event, b: &Event, sites: &[Point], beach: &BeachLine, sweep_y: f64) -> Ordering {
    if !close(a.y, b.y) {
        // larger y pops first
        return if a.y > b.y { Ordering::Less } else { Ordering::Greater };
    }
    if !close(a.x, b.x) {
        return if a.x < b.x { Ordering::Less } else { Ordering::Greater };
    }
    match (&a.kind, &b.kind) {
        (EventKind::Site { .. }, EventKind::Site { .. }) => Ordering::Equal,
        (EventKind::Circle { .. }, EventKind::Site { .. }) => Ordering::Less,
        (EventKind::Site { .. }, EventKind::Circle { .. }) => Ordering::Greater,
        (EventKind::Circle { arc: arc_a, .. }, EventKind::Circle { arc: arc_b, .. }) => {
            let (arc_a, arc_b) = (beach.arc(*arc_a), beach.arc(*arc_b));
            if arc_less(arc_a, arc_b, sites, sweep_y) {
                Ordering::Less
            } else if arc_less(arc_b, arc_a, sites, sweep_y) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

/// One Voronoi construction. Created fresh per invocation and discarded at the end;
/// no state survives between runs.
pub(crate) struct Sweep {
    sites: Vec<Point>,
    queue: EventQueue,
    beach: BeachLine,
    diagram: DiagramBuilder,
    sweep_y: f64,
}

pub(crate) struct SweepResult {
    pub sites: Vec<Point>,
    pub edges: Vec<VoronoiEdge>,
    pub delaunay_edges: Vec<(usize, usize)>,
    pub vertices: Vec<Point>,
}

impl Sweep {
    pub fn new(sites: Vec<Point>) -> Self {
        Self {
            sites,
            queue: EventQueue::new(),
            beach: BeachLine::new(),
            diagram: DiagramBuilder::new(),
            sweep_y: f64::MAX,
        }
    }

    /// Processes the full event queue and returns the accumulated diagram.
    pub fn run(mut self) -> SweepResult {
        self.seed_site_events();
        while self.step() {}

        let (edges, delaunay_edges, vertices) = self.diagram.finish();
        SweepResult { sites: self.sites, edges, delaunay_edges, vertices }
    }

    fn seed_site_events(&mut self) {
        for site in 0..self.sites.len() {
            let event = Event::site(self.sites[site].x, self.sites[site].y, site);
            self.push_event(event);
        }
    }

    /// Pops and handles one event; false once the queue is drained.
    fn step(&mut self) -> bool {
        match self.queue.pop_min() {
            Some((_, event)) => {
                self.sweep_y = event.y;
                match event.kind {
                    EventKind::Site { site } => self.site_event(event.x, site),
                    EventKind::Circle { arc, center_y } => self.circle_event(event.x, center_y, arc),
                }
                true
            }
            None => false,
        }
    }

    fn push_event(&mut self, event: Event) -> EventId {
        let sites = &self.sites;
        let beach = &self.beach;
        let sweep_y = self.sweep_y;
        self.queue.push(event, |a, b| event_order(a, b, sites, beach, sweep_y))
    }

    /// Cancels the pending circle event on `arc`, if any, clearing the back-reference.
    fn cancel_circle_event(&mut self, arc: ArcId) {
        if let Some(event) = self.beach.arc_mut(arc).circle_event.take() {
            self.queue.cancel(event);
        }
    }

    /// Runs the circle-event check for the arc at `position` and schedules the
    /// predicted event, recording its handle on the arc.
    fn check_circle_event(&mut self, position: usize) {
        let arc = self.beach.at(position);
        let prediction = circle::predict(self.beach.arc(arc), &self.sites, self.sweep_y);
        if let Some(prediction) = prediction {
            let event = Event::circle(prediction.x, prediction.y, prediction.center_y, arc);
            let id = self.push_event(event);
            self.beach.arc_mut(arc).circle_event = Some(id);
        }
    }

    fn site_event(&mut self, x: f64, site: usize) {
        if self.beach.is_empty() {
            self.beach.insert(0, Arc::new(None, site, None));
            return;
        }

        // the arc directly above the new site gets split
        let position = self.beach.locate(x, &self.sites, self.sweep_y);
        let split_id = self.beach.at(position);
        let split = self.beach.arc(split_id).clone();
        self.cancel_circle_event(split_id);

        self.beach.remove(position);
        self.beach.insert(position, Arc::new(split.left, split.site, Some(site)));
        self.check_circle_event(position);

        if close(self.sites[split.site].y, self.sweep_y) {
            // the split arc's site is itself still on the sweep line: insert the new
            // arc directly instead of a spurious zero-width pair
            self.beach.insert(position + 1, Arc::new(Some(split.site), site, split.right));
        } else {
            self.beach.insert(position + 1, Arc::new(Some(split.site), site, Some(split.site)));
            self.beach.insert(position + 2, Arc::new(Some(site), split.site, split.right));
            self.check_circle_event(position + 2);
        }
        // the voronoi edge between the new site and the split site starts lazily, at
        // the first circle event that reports the pair
    }

    fn circle_event(&mut self, x: f64, center_y: f64, arc: ArcId) {
        let position = self.beach.position_of(arc).expect("no circle event survives its arc's removal");

        // both neighbors exist, or no event would have been predicted for this arc;
        // their own pending events depend on the vanishing arc and die with it
        let left_id = self.beach.at(position - 1);
        let right_id = self.beach.at(position + 1);
        self.cancel_circle_event(left_id);
        self.cancel_circle_event(right_id);

        let vanishing = self.beach.arc(arc).clone();
        let left = self.beach.arc(left_id).clone();
        let right = self.beach.arc(right_id).clone();

        // the three arcs collapse into two, sharing a newly born breakpoint
        self.beach.remove(position + 1);
        self.beach.remove(position);
        self.beach.remove(position - 1);
        self.beach.insert(position - 1, Arc::new(left.left, left.site, Some(right.site)));
        self.check_circle_event(position - 1);
        self.beach.insert(position, Arc::new(Some(left.site), right.site, right.right));
        self.check_circle_event(position);

        self.report_intersection(&vanishing, x, center_y);
    }

    /// Emits the Voronoi vertex at the circle center and resolves the three edges the
    /// collapse touches: the two vanishing breakpoints and the newly born one.
    fn report_intersection(&mut self, arc: &Arc, x_c: f64, y_c: f64) {
        let vertex = Point { x: x_c, y: y_c };
        let left = arc.left.expect("a collapsing arc has a left neighbor");
        let right = arc.right.expect("a collapsing arc has a right neighbor");

        self.diagram.add_vertex(vertex.clone());
        self.diagram.start_or_finish(left, arc.site, &self.sites, &vertex, true);
        self.diagram.start_or_finish(arc.site, right, &self.sites, &vertex, true);
        self.diagram.start_or_finish(left, right, &self.sites, &vertex, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep_after(sites: Vec<Point>, events: usize) -> Sweep {
        let mut sweep = Sweep::new(sites);
        sweep.seed_site_events();
        for _ in 0..events {
            assert!(sweep.step(), "expected another pending event");
        }
        sweep
    }

    fn beach_sites(sweep: &Sweep) -> Vec<usize> {
        (0..sweep.beach.len()).map(|i| sweep.beach.arc(sweep.beach.at(i)).site).collect()
    }

    #[test]
    fn first_site_creates_a_single_arc() {
        let sweep = sweep_after(vec![Point { x: 1.0, y: 2.0 }], 1);
        assert_eq!(vec![0], beach_sites(&sweep));
        let arc = sweep.beach.arc(sweep.beach.at(0));
        assert_eq!((None, None), (arc.left, arc.right), "the only arc has no neighbors");
    }

    #[test]
    fn a_site_splits_the_arc_above_it() {
        let sweep = sweep_after(
            vec![Point { x: 2.0, y: 3.0 }, Point { x: 2.0, y: 0.0 }],
            2,
        );
        // the old arc brackets the new one
        assert_eq!(vec![0, 1, 0], beach_sites(&sweep));
    }

    #[test]
    fn coincident_sweep_sites_skip_the_zero_width_split() {
        // both sites share a y-coordinate and are processed back to back
        let sweep = sweep_after(vec![Point { x: 0.0, y: 0.0 }, Point { x: 5.0, y: 0.0 }], 2);
        assert_eq!(
            vec![0, 1],
            beach_sites(&sweep),
            "level sites must produce two arcs, not a spurious zero-width pair"
        );
    }

    #[test]
    fn a_circle_event_collapses_the_middle_arc() {
        let sites = vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 4.0, y: 0.0 },
            Point { x: 2.0, y: 3.0 },
        ];
        // three site events leave site 2's parabola split around both level sites
        let mut sweep = sweep_after(sites, 3);
        assert_eq!(vec![2, 0, 2, 1, 2], beach_sites(&sweep));

        // the single circle event collapses the middle arc of site 2
        assert!(sweep.step(), "one circle event must be pending");
        assert_eq!(vec![2, 0, 1, 2], beach_sites(&sweep));
        assert!(!sweep.step(), "the queue must be drained");
    }

    #[test]
    fn collinear_sites_produce_no_circle_events() {
        let sites = vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 0.0 },
            Point { x: 2.0, y: 0.0 },
        ];
        let mut sweep = sweep_after(sites, 3);
        assert_eq!(vec![0, 1, 2], beach_sites(&sweep));
        assert!(!sweep.step(), "collinear sites leave nothing to collapse");
    }

    #[test]
    fn every_processed_event_leaves_no_stale_back_reference() {
        let sites = vec![
            Point { x: 1.0, y: 5.0 },
            Point { x: 4.0, y: 4.0 },
            Point { x: 0.0, y: 2.0 },
            Point { x: 3.0, y: 1.0 },
            Point { x: 5.0, y: 2.5 },
        ];
        let mut sweep = Sweep::new(sites);
        sweep.seed_site_events();
        while sweep.step() {
            // any live back-reference must point at an event the queue still considers
            // pending; vanished arcs must have had theirs cleared
            for position in 0..sweep.beach.len() {
                let arc = sweep.beach.arc(sweep.beach.at(position));
                if arc.circle_event.is_some() {
                    assert!(
                        arc.left.is_some() && arc.right.is_some(),
                        "only arcs with both neighbors can have a pending circle event"
                    );
                }
            }
        }
        assert!(sweep.beach.len() >= 1, "the beach line never empties once seeded");
    }
}
