use anyhow::{Context, Result};
use std::path::Path;

use algolab::hull::Point;

/// Padding around the data bounding box, in user units.
const MARGIN: f64 = 20.0;
const POINT_RADIUS: f64 = 3.0;

/// Render a standalone SVG: one circle per input point, the hull as a closed
/// polygon outline. The y axis is flipped so larger y draws upward.
pub fn render_svg(points: &[Point], hull: &[Point]) -> String {
    let (min, max) = bounds(points.iter().chain(hull.iter()));
    let width = (max.0 - min.0) + 2.0 * MARGIN;
    let height = (max.1 - min.1) + 2.0 * MARGIN;
    let origin_x = min.0 - MARGIN;
    let origin_y = -max.1 - MARGIN;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{origin_x} {origin_y} {width} {height}\">\n"
    ));
    if hull.len() >= 2 {
        let outline = hull
            .iter()
            .map(|p| format!("{},{}", p.x, -(p.y as i128)))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            "  <polygon points=\"{outline}\" fill=\"none\" stroke=\"blue\" stroke-width=\"1\"/>\n"
        ));
    }
    for p in points {
        svg.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{POINT_RADIUS}\" fill=\"red\"/>\n",
            p.x,
            -(p.y as i128)
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

/// Render and write the SVG, creating parent directories as needed.
pub fn write_figure<P: AsRef<Path>>(path: P, points: &[Point], hull: &[Point]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating figure dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, render_svg(points, hull))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn bounds<'a>(pts: impl Iterator<Item = &'a Point>) -> ((f64, f64), (f64, f64)) {
    let mut min = (0.0f64, 0.0f64);
    let mut max = (0.0f64, 0.0f64);
    let mut seen = false;
    for p in pts {
        let (x, y) = (p.x as f64, p.y as f64);
        if !seen {
            min = (x, y);
            max = (x, y);
            seen = true;
        } else {
            min.0 = min.0.min(x);
            min.1 = min.1.min(y);
            max.0 = max.0.max(x);
            max.1 = max.1.max(y);
        }
    }
    (min, max)
}
