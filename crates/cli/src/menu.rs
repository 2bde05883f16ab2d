use std::io::{self, Write};

use anyhow::{Context, Result};

use algolab::hull::{convex_hull, polygon_area, Point};
use algolab::matcher::find_all_occurrences;

use crate::{figure, format_positions};

/// Interactive dispatcher in the style of the classic demo menu: pick an
/// algorithm, answer its prompts, read the result from stdout.
pub fn run() -> Result<()> {
    println!("Choose an algorithm to run:");
    println!("1. Rabin-Karp substring search");
    println!("2. Graham-scan convex hull");
    let choice = prompt("Enter 1 or 2: ")?;
    match choice.trim() {
        "1" => run_matcher(),
        "2" => run_hull(),
        other => anyhow::bail!("invalid selection {other:?}, enter 1 or 2"),
    }
}

fn run_matcher() -> Result<()> {
    let pattern = prompt("Enter the pattern: ")?;
    let text = prompt("Enter the text: ")?;
    let positions = find_all_occurrences(pattern.trim(), text.trim());
    println!("{}", format_positions(&positions));
    Ok(())
}

fn run_hull() -> Result<()> {
    let n: usize = prompt("Enter the number of points: ")?
        .trim()
        .parse()
        .context("point count must be a non-negative integer")?;
    let mut points = Vec::with_capacity(n);
    for i in 1..=n {
        let line = prompt(&format!("Enter point {i} as x, y: "))?;
        let point: Point = line
            .trim()
            .parse()
            .with_context(|| format!("point {i}"))?;
        points.push(point);
    }

    let hull = convex_hull(&points);
    let rendered: Vec<String> = hull.iter().map(Point::to_string).collect();
    println!("convex hull: [{}]", rendered.join(", "));
    println!("hull area: {:.2}", polygon_area(&hull));

    figure::write_figure("hull.svg", &points, &hull)?;
    println!("wrote hull.svg");
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
