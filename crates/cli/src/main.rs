mod figure;
mod input;
mod menu;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use algolab::hull::rand::{draw_point_cloud, PointCount, ReplayToken, ScatterCfg};
use algolab::hull::{convex_hull, polygon_area, polygon_centroid, polygon_perimeter, Point};
use algolab::matcher::find_all_occurrences;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Demo runner for substring search and convex hulls")]
struct Cmd {
    /// Optional label propagated to artifacts and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find every occurrence of a pattern inside a text
    Match {
        #[arg(long)]
        pattern: String,
        /// Text to search
        #[arg(long, required_unless_present = "text_file", conflicts_with = "text_file")]
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long)]
        text_file: Option<String>,
        /// Write a JSON report artifact plus a provenance sidecar
        #[arg(long)]
        out: Option<String>,
    },
    /// Build a convex hull and report its metrics
    Hull {
        /// CSV file with integer `x` and `y` columns
        #[arg(
            long,
            required_unless_present_any = ["points", "demo"],
            conflicts_with_all = ["points", "demo"]
        )]
        input: Option<String>,
        /// Inline points as space-separated `x,y` pairs
        #[arg(long, conflicts_with = "demo")]
        points: Option<String>,
        /// Sample a seeded demo cloud of this many points instead
        #[arg(long)]
        demo: Option<usize>,
        /// Seed for the demo cloud
        #[arg(long, requires = "demo")]
        seed: Option<u64>,
        /// Write a JSON report artifact plus a provenance sidecar
        #[arg(long)]
        out: Option<String>,
        /// Write an SVG figure of the points and their hull
        #[arg(long)]
        figure: Option<String>,
    },
    /// Interactive session in the style of the classic demo menu
    Menu,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Match {
            pattern,
            text,
            text_file,
            out,
        } => run_match(pattern, text, text_file, out, cmd.tag),
        Action::Hull {
            input,
            points,
            demo,
            seed,
            out,
            figure,
        } => run_hull(input, points, demo, seed, out, figure, cmd.tag),
        Action::Menu => menu::run(),
        Action::Report => report(cmd.tag),
    }
}

/// One result line in the classic demo's format.
pub(crate) fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        return "pattern not found".to_string();
    }
    let joined = positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("pattern found at positions: {joined}")
}

#[derive(Serialize)]
struct MatchReport {
    pattern: String,
    text_len: usize,
    positions: Vec<usize>,
}

fn run_match(
    pattern: String,
    text: Option<String>,
    text_file: Option<String>,
    out: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    let text = match (text, text_file) {
        (Some(text), _) => text,
        (None, Some(path)) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        (None, None) => anyhow::bail!("either --text or --text-file is required"),
    };
    tracing::info!(
        pattern_len = pattern.len(),
        text_len = text.len(),
        "match"
    );

    let positions = find_all_occurrences(&pattern, &text);
    println!("{}", format_positions(&positions));

    if let Some(out) = out {
        let report = MatchReport {
            pattern: pattern.clone(),
            text_len: text.len(),
            positions: positions.clone(),
        };
        write_json_artifact(&out, &report)?;
        let payload = provenance::Payload::new(serde_json::json!({
            "algo": "rabin_karp",
            "pattern_len": pattern.len(),
            "text_len": text.len(),
            "matches": positions.len(),
        }))
        .with_tag(tag);
        provenance::write_sidecar(&out, payload)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct HullReport {
    points: Vec<(i64, i64)>,
    hull: Vec<(i64, i64)>,
    area: f64,
    perimeter: f64,
    centroid: Option<(f64, f64)>,
}

const DEMO_SEED: u64 = 7;

/// Deterministic disc cloud for the `--demo` path; one `(count, seed)` pair
/// always names the same points.
fn sample_demo_points(count: usize, seed: u64) -> Vec<Point> {
    let cfg = ScatterCfg {
        point_count: PointCount::Fixed(count),
        ..ScatterCfg::default()
    };
    draw_point_cloud(cfg, ReplayToken { seed, index: 0 })
}

fn run_hull(
    input: Option<String>,
    points: Option<String>,
    demo: Option<usize>,
    seed: Option<u64>,
    out: Option<String>,
    figure: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    let points = match (input, points, demo) {
        (Some(path), _, _) => input::load_points_csv(&path)?,
        (None, Some(inline), _) => input::parse_inline_points(&inline)?,
        (None, None, Some(count)) => {
            let seed = seed.unwrap_or(DEMO_SEED);
            tracing::info!(count, seed, "demo_cloud");
            sample_demo_points(count, seed)
        }
        (None, None, None) => anyhow::bail!("one of --input, --points or --demo is required"),
    };
    tracing::info!(points = points.len(), "hull");

    let hull = convex_hull(&points);
    let area = polygon_area(&hull);
    let perimeter = polygon_perimeter(&hull);
    let centroid = polygon_centroid(&hull);

    println!("hull vertices:");
    for v in &hull {
        println!("{v}");
    }
    println!("area: {area:.2}");
    println!("perimeter: {perimeter:.2}");

    if let Some(figure_path) = figure {
        figure::write_figure(&figure_path, &points, &hull)?;
        let payload = provenance::Payload::new(serde_json::json!({
            "algo": "graham_scan",
            "points": points.len(),
            "hull_vertices": hull.len(),
        }))
        .with_tag(tag.clone());
        provenance::write_sidecar(&figure_path, payload)?;
        tracing::info!(path = figure_path, "figure_written");
    }

    if let Some(out) = out {
        let report = HullReport {
            points: points.iter().map(|p| (p.x, p.y)).collect(),
            hull: hull.iter().map(|p| (p.x, p.y)).collect(),
            area,
            perimeter,
            centroid: centroid.map(|c| (c.x, c.y)),
        };
        write_json_artifact(&out, &report)?;
        let payload = provenance::Payload::new(serde_json::json!({
            "algo": "graham_scan",
            "points": report.points.len(),
            "hull_vertices": report.hull.len(),
            "area": area,
            "perimeter": perimeter,
        }))
        .with_tag(tag);
        provenance::write_sidecar(&out, payload)?;
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "version": algolab::VERSION,
        "code_rev": provenance::current_git_rev(),
        "tag": tag,
        "algorithms": ["rabin_karp", "graham_scan"],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json_artifact<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let out_path = Path::new(path);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{format_positions, sample_demo_points};

    #[test]
    fn positions_line_matches_the_demo_format() {
        assert_eq!(
            format_positions(&[0, 1, 2]),
            "pattern found at positions: 0 1 2"
        );
        assert_eq!(format_positions(&[]), "pattern not found");
    }

    #[test]
    fn demo_cloud_is_reproducible() {
        let a = sample_demo_points(24, 9);
        assert_eq!(a.len(), 24);
        assert_eq!(a, sample_demo_points(24, 9));
        assert_ne!(a, sample_demo_points(24, 10));
    }
}
