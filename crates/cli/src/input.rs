use anyhow::{Context, Result};
use polars::prelude::*;
use std::str::FromStr;

use algolab::hull::Point;

/// Load a point set from a CSV file with integer `x` and `y` columns.
pub fn load_points_csv(path: &str) -> Result<Vec<Point>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?;
    let df = lf.collect().with_context(|| format!("reading {path}"))?;
    tracing::info!(rows = df.height(), cols = df.width(), "points_csv_shape");

    let xs = integer_column(&df, "x")?;
    let ys = integer_column(&df, "y")?;

    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.i64()?.into_iter().zip(ys.i64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => anyhow::bail!("null coordinate at row {row} of {path}"),
        }
    }
    Ok(points)
}

/// Fetch a column widened to `i64`; only integer dtypes are accepted, so a
/// fractional coordinate is an error rather than a silent truncation.
fn integer_column(df: &DataFrame, name: &str) -> Result<Series> {
    let column = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?;
    match column.dtype() {
        DataType::Int32 | DataType::Int64 | DataType::UInt32 | DataType::UInt64 => {}
        other => anyhow::bail!("column {name} holds {other} values, expected integers"),
    }
    column
        .cast(&DataType::Int64)
        .with_context(|| format!("widening column {name} to i64"))
}

/// Parse inline points given as whitespace-separated `x,y` pairs.
pub fn parse_inline_points(raw: &str) -> Result<Vec<Point>> {
    raw.split_whitespace()
        .map(|token| Point::from_str(token).with_context(|| format!("bad point {token:?}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_points_from_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n4,4\n0,4\n").unwrap();
        let points = load_points_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(4, 0),
                Point::new(4, 4),
                Point::new(0, 4)
            ]
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "label,x,y\na,1,2\nb,-3,4\n").unwrap();
        let points = load_points_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(points, vec![Point::new(1, 2), Point::new(-3, 4)]);
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        let err = load_points_csv(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("missing column x"));
    }

    #[test]
    fn fractional_coordinates_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "x,y\n1.9,2.9\n-3.5,4.5\n").unwrap();
        let err = load_points_csv(path.to_str().unwrap()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("column x"), "unexpected error: {msg}");
        assert!(msg.contains("expected integers"), "unexpected error: {msg}");
    }

    #[test]
    fn null_cells_are_reported_with_their_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "x,y\n1,2\n,4\n").unwrap();
        let err = load_points_csv(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("row 1"), "unexpected error: {err}");
    }

    #[test]
    fn parses_inline_pairs() {
        let points = parse_inline_points("0,0 4,0 2,3").unwrap();
        assert_eq!(
            points,
            vec![Point::new(0, 0), Point::new(4, 0), Point::new(2, 3)]
        );
    }

    #[test]
    fn inline_parse_errors_name_the_token() {
        let err = parse_inline_points("0,0 nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert_eq!(parse_inline_points("").unwrap(), Vec::<Point>::new());
    }
}
