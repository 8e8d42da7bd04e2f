use super::{Matrix4, Point3, Vector3};

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
///
/// Positive angles rotate counter-clockwise when looking down the axis
/// towards the origin (right-hand rule).
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[allow(clippy::suspicious_operation_groupings)]
    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}

/// Rotation about an axis through `origin` instead of the world origin.
#[must_use]
pub fn rotation_about(origin: &Point3, axis: &Vector3, angle: f64) -> Matrix4 {
    let t_neg = Matrix4::new_translation(&(-origin.coords));
    let t_pos = Matrix4::new_translation(&origin.coords);
    t_pos * rotation_matrix(axis, angle) * t_neg
}

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Determinant of the upper-left 3x3 block. Negative for transforms that
/// mirror space and therefore invert polygon winding.
#[must_use]
pub fn linear_determinant(matrix: &Matrix4) -> f64 {
    matrix.fixed_view::<3, 3>(0, 0).determinant()
}
