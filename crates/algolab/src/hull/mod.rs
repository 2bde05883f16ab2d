//! Planar convex hulls over integer points (Graham scan).
//!
//! Purpose
//! - Build the strict convex hull of a point set in CCW order and measure
//!   the resulting polygon (area, perimeter, centroid).
//! - Keep orientation decisions exact: comparisons use `i128` cross products
//!   and squared distances, never floating point.
//!
//! Why a strict boundary
//! - Collinear mid-edge points and duplicates are discarded during the scan,
//!   so downstream metrics and figures see each extreme vertex exactly once.
//!
//! Code cross-refs: `Point`, `convex_hull`, `polygon_area`, `draw_point_cloud`

pub mod rand;

mod metrics;
mod scan;
mod types;

pub use metrics::{polygon_area, polygon_centroid, polygon_perimeter};
pub use scan::{contains, convex_hull};
pub use types::{ParsePointError, Point};
