use std::cmp::Ordering;

use super::types::{cross, dist2, Point};

/// Graham-scan convex hull (returns hull vertices in CCW order).
///
/// The first vertex is the pivot (lowest y, then lowest x); the boundary is
/// strict, so collinear mid-edge points and duplicates never appear in the
/// output. Degenerate inputs follow fixed policies: fewer than 3 points come
/// back unchanged, and a fully collinear set reduces to its two extreme
/// endpoints.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut pts = points.to_vec();
    let mut pivot_idx = 0;
    for i in 1..pts.len() {
        if (pts[i].y, pts[i].x) < (pts[pivot_idx].y, pts[pivot_idx].x) {
            pivot_idx = i;
        }
    }
    pts.swap(0, pivot_idx);
    let pivot = pts[0];

    // Ascending polar angle around the pivot; collinear ties nearer-first,
    // so the scan below sees the far endpoint of each ray last.
    pts[1..].sort_by(|&a, &b| match cross(pivot, a, b).cmp(&0) {
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => dist2(pivot, a).cmp(&dist2(pivot, b)),
    });

    let mut hull: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while hull.len() > 1 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    // An input of one repeated point leaves the scan holding the pivot twice.
    if hull.len() == 2 && hull[0] == hull[1] {
        hull.truncate(1);
    }
    hull
}

/// Point-in-hull test over a CCW hull; boundary points count as inside.
///
/// Degenerate hulls keep their natural meaning: membership on the single
/// point or on the segment.
pub fn contains(hull: &[Point], p: Point) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == p,
        2 => on_segment(hull[0], hull[1], p),
        _ => {
            for i in 0..hull.len() {
                let a = hull[i];
                let b = hull[(i + 1) % hull.len()];
                if cross(a, b, p) < 0 {
                    return false;
                }
            }
            true
        }
    }
}

#[inline]
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross(a, b, p) == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
