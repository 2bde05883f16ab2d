//! Random integer point clouds (disc scatter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic point-set sampler for hull tests,
//!   benches, and CLI demos. Draws are parameterizable and reproducible
//!   from a `(seed, index)` token alone.
//!
//! Model
//! - Sample `n` points uniformly over a disc (radius scaled by sqrt(u) so
//!   density is uniform in area, not radius), then snap each coordinate to
//!   an integer grid.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Radius cap matching the `|coord| <= 2^62` exactness bound on [`Point`].
const MAX_RADIUS: f64 = (1_i64 << 62) as f64;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Disc-scatter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub point_count: PointCount,
    /// Disc radius before grid snapping. Clamped into `1.0..=2^62`.
    pub radius: f64,
    /// Grid spacing each coordinate snaps to. Clamped to >= 1.
    pub grid_step: i64,
}
impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            point_count: PointCount::Fixed(32),
            radius: 100.0,
            grid_step: 1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud on the integer grid.
///
/// Identical `(cfg, tok)` pairs always produce identical clouds. Duplicate
/// points are possible after snapping and are left in place; `convex_hull`
/// tolerates them.
pub fn draw_point_cloud(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.point_count.sample(&mut rng);
    let radius = cfg.radius.clamp(1.0, MAX_RADIUS);
    let step = cfg.grid_step.max(1);
    (0..n)
        .map(|_| {
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = radius * rng.gen::<f64>().sqrt();
            let v = Vector2::new(theta.cos() * r, theta.sin() * r);
            Point::new(snap(v.x, step), snap(v.y, step))
        })
        .collect()
}

#[inline]
fn snap(coord: f64, step: i64) -> i64 {
    (coord / step as f64).round() as i64 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = ScatterCfg {
            point_count: PointCount::Uniform { min: 10, max: 40 },
            radius: 250.0,
            grid_step: 5,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_point_cloud(cfg, tok);
        let b = draw_point_cloud(cfg, tok);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_indices_decorrelate() {
        let cfg = ScatterCfg::default();
        let a = draw_point_cloud(cfg, ReplayToken { seed: 1, index: 0 });
        let b = draw_point_cloud(cfg, ReplayToken { seed: 1, index: 1 });
        assert_ne!(a, b);
    }

    #[test]
    fn points_stay_near_the_disc() {
        let cfg = ScatterCfg {
            point_count: PointCount::Fixed(200),
            radius: 100.0,
            grid_step: 10,
        };
        let tok = ReplayToken { seed: 3, index: 0 };
        // Snapping can push a point at most half a step per axis.
        let slack = 10.0 / std::f64::consts::SQRT_2 + 1e-9;
        for p in draw_point_cloud(cfg, tok) {
            assert!(p.to_vector().norm() <= 100.0 + slack, "point {} escaped", p);
        }
    }

    #[test]
    fn coordinates_snap_to_the_grid() {
        let cfg = ScatterCfg {
            point_count: PointCount::Fixed(64),
            radius: 1000.0,
            grid_step: 25,
        };
        let tok = ReplayToken { seed: 9, index: 4 };
        for p in draw_point_cloud(cfg, tok) {
            assert_eq!(p.x % 25, 0);
            assert_eq!(p.y % 25, 0);
        }
    }

    #[test]
    fn fixed_count_is_respected() {
        let cfg = ScatterCfg {
            point_count: PointCount::Fixed(17),
            ..ScatterCfg::default()
        };
        let tok = ReplayToken { seed: 5, index: 5 };
        assert_eq!(draw_point_cloud(cfg, tok).len(), 17);
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let tok = ReplayToken { seed: 21, index: 0 };
        let huge = ScatterCfg {
            point_count: PointCount::Fixed(64),
            radius: f64::MAX,
            grid_step: 1,
        };
        let capped = ScatterCfg {
            radius: (1_i64 << 62) as f64,
            ..huge
        };
        let cloud = draw_point_cloud(huge, tok);
        assert_eq!(cloud, draw_point_cloud(capped, tok));
        let bound = 1_i64 << 62;
        for p in cloud {
            assert!(p.x.abs() <= bound && p.y.abs() <= bound, "point {} escaped", p);
        }
    }

    #[test]
    fn uniform_count_stays_in_range() {
        let cfg = ScatterCfg {
            point_count: PointCount::Uniform { min: 8, max: 16 },
            ..ScatterCfg::default()
        };
        for index in 0..32 {
            let n = draw_point_cloud(cfg, ReplayToken { seed: 11, index }).len();
            assert!((8..=16).contains(&n), "count {} out of range", n);
        }
    }
}
