//! Hull timing probe for a single sampled point cloud.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does the
//!   scan plus metrics take on a few thousand points?" without reaching for
//!   the full criterion harness.
//!
//! Why this shape
//! - One fixed replay token, so the printed numbers always describe the same
//!   cloud and the probe can be re-run after a change for a direct before and
//!   after comparison.

use std::time::Instant;

use algolab::hull::rand::{draw_point_cloud, PointCount, ReplayToken, ScatterCfg};
use algolab::hull::{convex_hull, polygon_area, polygon_centroid, polygon_perimeter};

fn main() {
    let cfg = ScatterCfg {
        point_count: PointCount::Fixed(4096),
        radius: 100_000.0,
        grid_step: 1,
    };
    let tok = ReplayToken { seed: 42, index: 0 };
    let points = draw_point_cloud(cfg, tok);
    assert_eq!(points.len(), 4096, "sampler returned a short cloud");

    let hull_start = Instant::now();
    let hull = convex_hull(&points);
    let hull_elapsed = hull_start.elapsed().as_secs_f64() * 1e3;

    let metrics_start = Instant::now();
    let area = polygon_area(&hull);
    let perimeter = polygon_perimeter(&hull);
    let centroid = polygon_centroid(&hull);
    let metrics_elapsed = metrics_start.elapsed().as_secs_f64() * 1e3;

    println!(
        "cloud=disc_uniform points={} hull_vertices={}",
        points.len(),
        hull.len()
    );
    println!("area={area:.3} perimeter={perimeter:.3}");
    if let Some(c) = centroid {
        println!("centroid=({:.3}, {:.3})", c.x, c.y);
    }
    println!("hull_time_ms={hull_elapsed:.3}");
    println!("metrics_time_ms={metrics_elapsed:.3}");
}
