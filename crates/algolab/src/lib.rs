//! Core algorithms: substring search and planar convex hulls.
//!
//! Two independent components live here:
//! - `matcher`: Rabin-Karp substring search (rolling-hash prefilter with
//!   exact verification).
//! - `hull`: Graham-scan convex hulls over integer points, plus polygon
//!   metrics and a reproducible point-cloud sampler.
//!
//! Both are pure and synchronous; all I/O belongs to the `cli` crate.

pub mod hull;
pub mod matcher;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{draw_point_cloud, PointCount, ReplayToken, ScatterCfg};
    pub use crate::hull::{
        contains, convex_hull, polygon_area, polygon_centroid, polygon_perimeter, ParsePointError,
        Point,
    };
    pub use crate::matcher::find_all_occurrences;
    pub use nalgebra::Vector2 as Vec2;
}
