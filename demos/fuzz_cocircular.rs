use std::process::exit;

use rand::Rng;
use fortunate::{Point, Voronoi, EPSILON};
const SIZE: usize = 12;
const TRIES: usize = 10_000;

// Rings of sites sharing one circumcircle make every arc triple predict (nearly) the
// same circle event point, which is the worst case for the coinciding-event tie-break.
fn main() {
    let mut rng = rand::thread_rng();

    println!("Checking {} diagrams of {} co-circular sites for tie-break fallout", TRIES, SIZE);

    for _ in 0..TRIES {
        let center = (rng.gen_range(100.0..700.0), rng.gen_range(100.0..500.0));
        let radius = rng.gen_range(10.0..200.0);
        let sites = (0..SIZE)
            .map(|i| {
                // jittered but non-overlapping angular slots
                let angle = (i as f64 + rng.gen_range(0.0..0.3)) * std::f64::consts::TAU / SIZE as f64;
                Point {
                    x: center.0 + radius * angle.cos(),
                    y: center.1 + radius * angle.sin(),
                }
            })
            .collect::<Vec<Point>>();

        let voronoi = match Voronoi::new(sites.clone()) {
            Ok(voronoi) => voronoi,
            Err(error) => fail(&sites, format!("rejected: {}", error)),
        };

        let size = voronoi.sites().len();
        let edges = voronoi.delaunay_edges().len();
        if edges < size - 1 {
            fail(&sites, format!("only {} delaunay edges for {} sites", edges, size));
        }

        for edge in voronoi.edges().iter().filter(|e| e.is_finite()) {
            let end = edge.end.clone().expect("filtered to finite edges");
            let middle = Point { x: (edge.origin.x + end.x) / 2.0, y: (edge.origin.y + end.y) / 2.0 };
            let da = distance(&middle, &voronoi.sites()[edge.site_a]);
            let db = distance(&middle, &voronoi.sites()[edge.site_b]);
            if (da - db).abs() > EPSILON * (1.0 + da.max(db)) {
                fail(&sites, format!(
                    "edge between sites {} and {} is not equidistant: {} vs {}",
                    edge.site_a, edge.site_b, da, db
                ));
            }
        }
    }

    println!("All {} diagrams passed.", TRIES);
}

fn distance(a: &Point, b: &Point) -> f64 {
    let x = a.x - b.x;
    let y = a.y - b.y;
    ((x * x) + (y * y)).sqrt()
}

fn fail(sites: &[Point], message: String) -> ! {
    let path = "failed_sites.json";
    let dump = serde_json::json!(sites.iter().map(|p| vec![p.x, p.y]).collect::<Vec<Vec<f64>>>());
    std::fs::write(path, dump.to_string()).expect("could not write failure dump");
    println!("Found invalid diagram: {}. Wrote sites to '{}'.", message, path);
    exit(-1);
}
