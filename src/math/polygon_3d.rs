use super::{Point3, Vector3, TOLERANCE};

/// Newell's method over a closed polygon.
///
/// The result is not normalized: its length is twice the polygon area, and
/// it points towards the side from which the vertices appear counter-clockwise.
/// Works for non-planar and non-convex polygons.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Unit normal of a polygon, or the zero vector if the polygon is degenerate.
#[must_use]
pub fn polygon_normal(points: &[Point3]) -> Vector3 {
    newell_normal(points)
        .try_normalize(TOLERANCE)
        .unwrap_or_else(Vector3::zeros)
}

/// Arithmetic mean of the points. The origin for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

/// Area of a (near-)planar polygon.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    newell_normal(points).norm() * 0.5
}

/// Length of the closed boundary, including the edge from the last point
/// back to the first.
#[must_use]
pub fn perimeter(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}
