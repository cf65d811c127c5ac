//! Accumulates the output of the sweep: Voronoi edges, their dual Delaunay edges and
//! the Voronoi vertices emitted by circle events.

use std::collections::HashMap;

use crate::geometry::Point;

/// A Voronoi edge: the locus of points equidistant from its two generating sites.
///
/// Born as a ray from `origin` growing along `direction` when a circle event first
/// touches the site pair; a later circle event may attach `end`, making the edge a
/// finite segment. Edges that never gain a second endpoint remain half-infinite and
/// must be clipped by the consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiEdge {
    /// Index of one generating site.
    pub site_a: usize,
    /// Index of the other generating site.
    pub site_b: usize,
    /// The Voronoi vertex at which this edge was first reported.
    pub origin: Point,
    /// Second endpoint, present once the edge's other breakpoint collapsed as well.
    pub end: Option<Point>,
    /// Growth direction away from `origin`, perpendicular to the segment between the
    /// generating sites. Not normalized.
    pub direction: Point,
}

impl VoronoiEdge {
    /// Whether both endpoints are resolved.
    pub fn is_finite(&self) -> bool {
        self.end.is_some()
    }
}

/// Builds both edge sets, keyed by the unordered site pair.
#[derive(Debug, Default)]
pub(crate) struct DiagramBuilder {
    edges: Vec<VoronoiEdge>,
    delaunay: Vec<(usize, usize)>,
    vertices: Vec<Point>,
    by_pair: HashMap<(usize, usize), usize>,
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the Voronoi vertex a circle event emits.
    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// First report for a site pair starts its Voronoi edge as a ray anchored at
    /// `point` and emits the pair's Delaunay edge; a repeat report finishes the edge
    /// there. `reverse` flips the growth perpendicular: the two breakpoints vanishing
    /// in a collapse grew one way, the newly born breakpoint grows the other.
    pub fn start_or_finish(&mut self, site_a: usize, site_b: usize, sites: &[Point], point: &Point, reverse: bool) {
        let key = (site_a.min(site_b), site_a.max(site_b));
        if let Some(&edge) = self.by_pair.get(&key) {
            self.edges[edge].end = Some(point.clone());
            return;
        }

        let a = &sites[site_a];
        let b = &sites[site_b];
        let direction = if reverse {
            Point { x: a.y - b.y, y: b.x - a.x }
        } else {
            Point { x: b.y - a.y, y: a.x - b.x }
        };

        self.by_pair.insert(key, self.edges.len());
        self.edges.push(VoronoiEdge {
            site_a,
            site_b,
            origin: point.clone(),
            end: None,
            direction,
        });
        self.delaunay.push(key);
    }

    /// Final edge sets and vertices, in first-report order.
    pub fn finish(self) -> (Vec<VoronoiEdge>, Vec<(usize, usize)>, Vec<Point>) {
        (self.edges, self.delaunay, self.vertices)
    }
}
