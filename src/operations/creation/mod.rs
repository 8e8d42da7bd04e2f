mod make_circle;
mod make_cone;
mod make_cube;
mod make_cuboctahedron;
mod make_dodecahedron;
mod make_honey_comb;
mod make_ico_sphere;
mod make_icosahedron;
mod make_icosidodecahedron;
mod make_octahedron;
mod make_segmented_tube;
mod make_tetrahedron;
mod make_truncated_tetrahedron;
mod make_tube_lattice;

pub use make_circle::{FillType, MakeCircle};
pub use make_cone::MakeCone;
pub use make_cube::MakeCube;
pub use make_cuboctahedron::MakeCuboctahedron;
pub use make_dodecahedron::MakeDodecahedron;
pub use make_honey_comb::MakeHoneyComb;
pub use make_ico_sphere::MakeIcoSphere;
pub use make_icosahedron::MakeIcosahedron;
pub use make_icosidodecahedron::MakeIcosidodecahedron;
pub use make_octahedron::MakeOctahedron;
pub use make_segmented_tube::MakeSegmentedTube;
pub use make_tetrahedron::MakeTetrahedron;
pub use make_truncated_tetrahedron::MakeTruncatedTetrahedron;
pub use make_tube_lattice::MakeTubeLattice;

use std::f64::consts::TAU;

use crate::math::{Point3, TOLERANCE};

/// Returns `true` if a size or radius is too small to span a solid.
///
/// Negative values count as degenerate too, since they would mirror the
/// shape through its center and turn every face inward.
pub(crate) fn is_degenerate_extent(extent: f64) -> bool {
    extent.is_nan() || extent < TOLERANCE
}

/// Point `k` of `n` on a horizontal ring of `radius` at height `y`.
///
/// Increasing `k` runs clockwise seen from above (+Y), starting on +X.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ring_point(radius: f64, y: f64, k: usize, n: usize) -> Point3 {
    let angle = TAU * k as f64 / n as f64;
    Point3::new(radius * angle.cos(), y, radius * angle.sin())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mesh::Mesh3D;
    use crate::operations::query::{IsValid, TopologyReport};
    use crate::operations::Creator;

    fn boxed(creator: impl Creator + 'static) -> Box<dyn Creator> {
        Box::new(creator)
    }

    fn closed_convex_solids() -> Vec<(&'static str, Box<dyn Creator>)> {
        vec![
            ("cube", boxed(MakeCube::default())),
            ("tetrahedron", boxed(MakeTetrahedron::default())),
            ("octahedron", boxed(MakeOctahedron::default())),
            ("icosahedron", boxed(MakeIcosahedron::default())),
            ("dodecahedron", boxed(MakeDodecahedron::default())),
            ("cuboctahedron", boxed(MakeCuboctahedron::default())),
            ("icosidodecahedron", boxed(MakeIcosidodecahedron::default())),
            ("truncated tetrahedron", boxed(MakeTruncatedTetrahedron)),
            ("ico sphere", boxed(MakeIcoSphere::new(1.0, 2))),
            ("cone", boxed(MakeCone::default())),
        ]
    }

    #[test]
    fn closed_solids_satisfy_euler() {
        for (name, creator) in closed_convex_solids() {
            let report = TopologyReport::of(&creator.create().unwrap());
            assert_eq!(report.euler_characteristic(), 2, "{name}");
            assert!(report.is_closed_manifold(), "{name}");
            assert_eq!(report.loose_vertices, 0, "{name}");
            assert_eq!(report.duplicate_faces, 0, "{name}");
        }
    }

    #[test]
    fn convex_solids_face_outward() {
        for (name, creator) in closed_convex_solids() {
            let mesh = creator.create().unwrap();
            let center = mesh.bounds().unwrap().center();
            for face in mesh.faces() {
                let normal = mesh.face_normal(face).unwrap();
                let offset = mesh.face_center(face).unwrap() - center;
                assert!(normal.dot(&offset) >= 0.0, "{name}");
            }
        }
    }

    #[test]
    fn create_is_deterministic() {
        let mut creators = closed_convex_solids();
        creators.push(("honeycomb", boxed(MakeHoneyComb::default())));
        creators.push(("tube", boxed(MakeSegmentedTube::default())));
        creators.push(("circle", boxed(MakeCircle::default())));
        for (name, creator) in creators {
            let first: Mesh3D = creator.create().unwrap();
            let second = creator.create().unwrap();
            assert_eq!(first, second, "{name}");
        }
    }

    fn fixed_shape_solids(extent: f64) -> Vec<(&'static str, Box<dyn Creator>)> {
        vec![
            ("cube", boxed(MakeCube::new(extent))),
            ("tetrahedron", boxed(MakeTetrahedron::new(extent))),
            ("octahedron", boxed(MakeOctahedron::new(extent))),
            ("icosahedron", boxed(MakeIcosahedron::new(extent))),
            ("dodecahedron", boxed(MakeDodecahedron::new(extent))),
            ("cuboctahedron", boxed(MakeCuboctahedron::new(extent))),
            ("icosidodecahedron", boxed(MakeIcosidodecahedron::new(extent))),
            ("ico sphere", boxed(MakeIcoSphere::new(extent, 1))),
        ]
    }

    #[test]
    fn zero_negative_and_nan_extents_give_empty_meshes() {
        for extent in [0.0, 1e-12, -1.0, f64::NAN] {
            for (name, creator) in fixed_shape_solids(extent) {
                let mesh = creator.create().unwrap();
                assert!(mesh.is_empty(), "{name} with extent {extent}");
                assert_eq!(mesh.vertex_count(), 0, "{name} with extent {extent}");
            }
        }
    }

    #[test]
    fn scaled_solids_stay_valid_and_outward() {
        for (name, creator) in fixed_shape_solids(2.5) {
            let mesh = creator.create().unwrap();
            assert!(IsValid::new().with_require_closed(true).execute(&mesh), "{name}");
            for face in mesh.faces() {
                let normal = mesh.face_normal(face).unwrap();
                let offset = mesh.face_center(face).unwrap() - Point3::origin();
                assert!(normal.dot(&offset) > 0.0, "{name}");
            }
        }
    }

    #[test]
    fn ring_point_starts_on_x() {
        let p = ring_point(2.0, 0.5, 0, 8);
        assert_eq!(p, Point3::new(2.0, 0.5, 0.0));
        let q = ring_point(2.0, 0.5, 2, 8);
        assert!(q.x.abs() < 1e-12);
        assert!((q.z - 2.0).abs() < 1e-12);
    }
}
