use rand::Rng;
use fortunate::{Point, Voronoi, VoronoiBuilder};
use std::{fs::File, io::Write};
const CANVAS_SIZE: f64 = 800.;
const POINT_SIZE: usize = 2;
const SITE_COLOR: &str = "black";
const LINE_WIDTH: usize = 1;
const VORONOI_EDGE_COLOR: &str = "blue";
const DELAUNAY_EDGE_COLOR: &str = "silver";
const SIZE: usize = 10;

fn main() -> std::io::Result<()> {
    // generate random sites
    let mut rng = rand::thread_rng();
    let range = rand::distributions::Uniform::new(CANVAS_SIZE * 0.2, CANVAS_SIZE * 0.8);
    let sites = (0..SIZE)
        .map(move |_| Point { x: rng.sample(range), y: rng.sample(range) })
        .collect::<Vec<Point>>();

    // build voronoi
    let voronoi = VoronoiBuilder::default()
        .set_sites(sites)
        .build()
        .expect("Couldn't build voronoi");

    // generate SVG
    let contents = format!(
        r#"
<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">
<rect width="100%" height="100%" fill="white" />
    {delaunay_edges}
    {voronoi_edges}
    {sites}
</svg>"#,
        width = CANVAS_SIZE,
        height = CANVAS_SIZE,
        sites = render_sites(voronoi.sites()),
        delaunay_edges = render_delaunay_edges(&voronoi),
        voronoi_edges = render_voronoi_edges(&voronoi)
    );
    File::create("example.svg")?.write_all(contents.as_bytes())
}

fn render_sites(points: &[Point]) -> String {
    points
        .iter()
        .fold(String::new(), |acc, p| {
            acc + &format!(
                r#"<circle cx="{x}" cy="{y}" r="{size}" fill="{color}"/>"#,
                x = p.x,
                y = p.y,
                size = POINT_SIZE,
                color = SITE_COLOR
            )
        })
}

fn render_delaunay_edges(voronoi: &Voronoi) -> String {
    voronoi.delaunay_edges().iter().fold(String::new(), |acc, &(a, b)| {
        let (a, b) = (&voronoi.sites()[a], &voronoi.sites()[b]);
        acc + &format!(
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}" style="stroke:{color};stroke-width:{width}" />"#,
            x0 = a.x,
            y0 = a.y,
            x1 = b.x,
            y1 = b.y,
            width = LINE_WIDTH,
            color = DELAUNAY_EDGE_COLOR
        )
    })
}

fn render_voronoi_edges(voronoi: &Voronoi) -> String {
    let mut buffer = String::new();
    for edge in voronoi.edges() {
        // the core emits rays for unbounded edges; clipping is this layer's job, and
        // stretching the ray past the canvas lets the SVG viewport do the cutting
        let end = match &edge.end {
            Some(end) => end.clone(),
            None => {
                let length = (edge.direction.x * edge.direction.x + edge.direction.y * edge.direction.y).sqrt();
                let scale = 2.0 * CANVAS_SIZE / length;
                Point {
                    x: edge.origin.x + scale * edge.direction.x,
                    y: edge.origin.y + scale * edge.direction.y,
                }
            }
        };
        buffer += &format!(
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}" style="stroke:{color};stroke-width:{width}" />"#,
            x0 = edge.origin.x,
            y0 = edge.origin.y,
            x1 = end.x,
            y1 = end.y,
            width = LINE_WIDTH,
            color = VORONOI_EDGE_COLOR
        );
    }

    buffer
}
