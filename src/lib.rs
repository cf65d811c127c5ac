//! Fortune's sweep-line construction of 2D Voronoi diagrams and their Delaunay dual.
//!
//! Given a finite set of sites, one run of the sweep produces the Voronoi edge set and
//! the Delaunay edge set in O(n log n). Voronoi edges are emitted as rays that may gain
//! a second endpoint when a later circle event resolves them; unbounded edges are left
//! as rays, and clipping them to a viewport is the consumer's job.
//!
//! # Example
//! ```
//! use fortunate::{Point, VoronoiBuilder};
//!
//! let voronoi = VoronoiBuilder::default()
//!     .set_sites(vec![
//!         Point { x: 0.0, y: 0.0 },
//!         Point { x: 4.0, y: 0.0 },
//!         Point { x: 2.0, y: 3.0 },
//!     ])
//!     .build()
//!     .expect("sites are valid");
//!
//! // the three cells meet at the triangle's circumcenter
//! assert_eq!(1, voronoi.vertices().len());
//! assert_eq!(3, voronoi.delaunay_edges().len());
//! ```

mod beach_line;
mod circle;
mod diagram;
mod event;
mod geometry;
mod sweep;
mod voronoi_builder;

pub use diagram::VoronoiEdge;
pub use geometry::{Point, EPSILON};
pub use voronoi_builder::VoronoiBuilder;

use geometry::close;
use sweep::Sweep;

/// Reasons a site set is rejected before construction starts.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Construction needs at least one site.
    #[error("cannot build a voronoi diagram without sites")]
    NoSites,

    /// Two sites coincide within [EPSILON]; their event order would be undefined.
    /// Deduplicate before building.
    #[error("sites {first} and {second} coincide")]
    CoincidentSites { first: usize, second: usize },

    /// A site coordinate is NaN or infinite.
    #[error("site {site} has a non-finite coordinate")]
    NonFiniteCoordinate { site: usize },
}

/// A computed Voronoi diagram and its dual Delaunay triangulation.
pub struct Voronoi {
    sites: Vec<Point>,
    edges: Vec<VoronoiEdge>,
    delaunay_edges: Vec<(usize, usize)>,
    vertices: Vec<Point>,
}

impl Voronoi {
    /// Validates `sites` and runs one full sweep over them.
    ///
    /// The construction is deterministic: the same site set always yields the same
    /// edge sets, in the same order.
    pub fn new(sites: Vec<Point>) -> Result<Self, Error> {
        validate_sites(&sites)?;

        let result = Sweep::new(sites).run();
        Ok(Self {
            sites: result.sites,
            edges: result.edges,
            delaunay_edges: result.delaunay_edges,
            vertices: result.vertices,
        })
    }

    /// Gets the sites this diagram was built from, in input order.
    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    /// Gets the Voronoi edges. Edges without an [VoronoiEdge::end] are half-infinite
    /// rays.
    pub fn edges(&self) -> &[VoronoiEdge] {
        &self.edges
    }

    /// Gets the Delaunay edges as unordered site-index pairs, smaller index first,
    /// deduplicated.
    pub fn delaunay_edges(&self) -> &[(usize, usize)] {
        &self.delaunay_edges
    }

    /// Gets the Voronoi vertices, one per processed circle event.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

fn validate_sites(sites: &[Point]) -> Result<(), Error> {
    if sites.is_empty() {
        return Err(Error::NoSites);
    }
    for (site, point) in sites.iter().enumerate() {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(Error::NonFiniteCoordinate { site });
        }
    }

    // sort a view of the sites so coincident pairs end up adjacent
    let mut order: Vec<usize> = (0..sites.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        sites[a].y.total_cmp(&sites[b].y).then(sites[a].x.total_cmp(&sites[b].x))
    });
    for pair in order.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if close(sites[a].x, sites[b].x) && close(sites[a].y, sites[b].y) {
            return Err(Error::CoincidentSites { first: a.min(b), second: a.max(b) });
        }
    }

    Ok(())
}
