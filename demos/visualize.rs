//! Renders both subdivisions of a random point set side by side as SVG.
//!
//! Run with: cargo run --example visualize -- [max_depth] [num_points]

use subdivide2d::bounds::{working_domain, WORKING_DOMAIN_SIZE};
use subdivide2d::spatial::{Algorithm, BuildOptions, SpatialPartition};
use subdivide2d::Point2;

use std::error::Error;
use std::fs::File;
use std::io::Write;

const PANEL: f64 = 360.0;
const MARGIN: f64 = 40.0;
const WIDTH: f64 = 2.0 * PANEL + 3.0 * MARGIN;
const HEIGHT: f64 = PANEL + 2.0 * MARGIN;
const OUTPUT: &str = "subdivision.svg";

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let max_depth = args.next().map(|s| s.parse::<i64>()).transpose()?.unwrap_or(4);
    let num_points = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(40);

    let points = generate_distinct_points(num_points, 2024);
    let options = BuildOptions::from_signed_depth(max_depth);

    let mut svg = Svg::new(WIDTH, HEIGHT);
    for (panel, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        let tree = algorithm.build(&points, &options, working_domain())?;
        let view = View {
            left: MARGIN + panel as f64 * (PANEL + MARGIN),
            top: MARGIN,
        };

        svg.text(view.left, MARGIN - 12.0, &algorithm.to_string(), 16.0, "#e0e0e0");

        // Frame
        let (x0, y0) = view.map(Point2::new(0.0, WORKING_DOMAIN_SIZE));
        svg.rect(x0, y0, PANEL, PANEL, "none", "#808080", 1.0);

        for line in tree.lines() {
            let (x1, y1) = view.map(line.start);
            let (x2, y2) = view.map(line.end);
            svg.line(x1, y1, x2, y2, "#ff6b6b", 2.0);
        }
        for p in &points {
            let (x, y) = view.map(*p);
            svg.circle(x, y, 3.0, "#00d4ff", "none", 0.0);
        }

        println!(
            "{:>8}: {} leaves, max leaf depth {}, {} divider lines",
            algorithm,
            tree.num_leaves(),
            tree.max_leaf_depth(),
            tree.lines().len()
        );
    }

    svg.save(OUTPUT)?;
    println!("Wrote {}", OUTPUT);
    Ok(())
}

/// Maps domain coordinates (y up) to a panel in SVG coordinates (y down).
struct View {
    left: f64,
    top: f64,
}

impl View {
    fn map(&self, p: Point2<f64>) -> (f64, f64) {
        let scale = PANEL / WORKING_DOMAIN_SIZE;
        (
            self.left + p.x * scale,
            self.top + (WORKING_DOMAIN_SIZE - p.y) * scale,
        )
    }
}

/// Distinct integer points in [0, 100)², generated with xorshift.
fn generate_distinct_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let count = count.min(100 * 100);
    let mut state = seed;
    let mut points: Vec<Point2<f64>> = Vec::with_capacity(count);

    while points.len() < count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state % 100) as f64;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state % 100) as f64;

        let p = Point2::new(x, y);
        if !points.contains(&p) {
            points.push(p);
        }
    }

    points
}

/// SVG helper to create an SVG document
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            x, y, w, h, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            cx, cy, r, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="{}" fill="{}">{}</text>"#,
            x, y, font_size, fill, text
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &str) -> std::io::Result<()> {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.width, self.height, self.width, self.height, self.content
        );
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())
    }
}
