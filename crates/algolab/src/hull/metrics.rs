use nalgebra::Vector2;

use super::types::Point;

/// Polygon area via the shoelace formula.
///
/// Cross terms accumulate exactly in `i128`; the absolute sum is halved at
/// the end, so vertex order (CW or CCW) and cyclic rotation do not change
/// the result. Fewer than 3 vertices have zero area.
pub fn polygon_area(verts: &[Point]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut acc: i128 = 0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        acc += p.x as i128 * q.y as i128 - q.x as i128 * p.y as i128;
    }
    acc.unsigned_abs() as f64 * 0.5
}

/// Perimeter of the closed vertex loop.
///
/// A degenerate two-vertex "polygon" is still closed, so its perimeter is
/// twice the segment length. Fewer than 2 vertices have zero perimeter.
pub fn polygon_perimeter(verts: &[Point]) -> f64 {
    if verts.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..verts.len() {
        let p = verts[i].to_vector();
        let q = verts[(i + 1) % verts.len()].to_vector();
        total += (q - p).norm();
    }
    total
}

/// Area centroid of the polygon, `None` when the signed area vanishes.
pub fn polygon_centroid(verts: &[Point]) -> Option<Vector2<f64>> {
    if verts.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i].to_vector();
        let q = verts[(i + 1) % verts.len()].to_vector();
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}
