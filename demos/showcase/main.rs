//! Meshcraft showcase: builds a handful of meshes and logs their topology.
//!
//! Usage:
//! ```text
//! cargo run --example showcase                 # every mesh
//! cargo run --example showcase -- honeycomb    # a single mesh by name
//! RUST_LOG=meshcraft=debug cargo run --example showcase
//! ```

use std::f64::consts::FRAC_PI_4;

use meshcraft::operations::conway::{Ortho, Truncate};
use meshcraft::operations::creation::{
    MakeCone, MakeCube, MakeHoneyComb, MakeIcoSphere, MakeTruncatedTetrahedron, MakeTubeLattice,
};
use meshcraft::operations::modification::Solidify;
use meshcraft::operations::query::{IsValid, SurfaceArea, TopologyReport};
use meshcraft::operations::shaping::Extrude;
use meshcraft::operations::transform::Rotate;
use meshcraft::{Creator, FaceSelection, Mesh3D, Modifier, Result};
use tracing::{info, warn};

type Builder = fn() -> Result<Mesh3D>;

fn cone() -> Result<Mesh3D> {
    MakeCone::default().create()
}

fn ortho_cube() -> Result<Mesh3D> {
    let mut mesh = MakeCube::default().create()?;
    Ortho.modify(&mut mesh)?;
    Ok(mesh)
}

fn spiky_sphere() -> Result<Mesh3D> {
    let mut mesh = MakeIcoSphere::new(1.0, 1).create()?;
    // Every other face, so the spikes alternate with flat patches.
    let spiked = {
        let mut selection = FaceSelection::new(&mesh);
        selection.select_where(|i, _| i % 2 == 0);
        selection.indices()
    };
    Extrude::new(0.3).with_scale(0.2).modify_faces(&mut mesh, &spiked)?;
    Rotate::x(FRAC_PI_4).modify(&mut mesh)?;
    Ok(mesh)
}

fn truncated_tetrahedron() -> Result<Mesh3D> {
    MakeTruncatedTetrahedron.create()
}

fn honeycomb() -> Result<Mesh3D> {
    MakeHoneyComb::default().create()
}

fn tube_lattice() -> Result<Mesh3D> {
    MakeTubeLattice::default().create()
}

fn tower() -> Result<Mesh3D> {
    let mut mesh = MakeCube::default().create()?;
    for _ in 0..4 {
        let top = {
            let mut selection = FaceSelection::new(&mesh);
            selection.select_top_faces()?;
            selection.indices()
        };
        Extrude::new(1.0).with_scale(0.8).modify_faces(&mut mesh, &top)?;
    }
    Truncate::new(0.2).modify(&mut mesh)?;
    Ok(mesh)
}

fn open_box() -> Result<Mesh3D> {
    let mut mesh = MakeCube::default().create()?;
    let top = {
        let mut selection = FaceSelection::new(&mesh);
        selection.select_top_faces()?;
        selection.indices()
    };
    mesh.remove_faces(&top)?;
    Solidify::new(0.1).modify(&mut mesh)?;
    Ok(mesh)
}

const MESHES: &[(&str, Builder)] = &[
    ("cone", cone),
    ("ortho_cube", ortho_cube),
    ("truncated_tetrahedron", truncated_tetrahedron),
    ("spiky_sphere", spiky_sphere),
    ("tower", tower),
    ("open_box", open_box),
    ("honeycomb", honeycomb),
    ("tube_lattice", tube_lattice),
];

fn report(name: &str, mesh: &Mesh3D) -> Result<()> {
    let topology = TopologyReport::of(mesh);
    let area = SurfaceArea::new().execute(mesh)?;
    info!(
        name,
        vertices = topology.vertex_count,
        edges = topology.edge_count,
        faces = topology.face_count,
        euler = topology.euler_characteristic(),
        closed = topology.is_closed_manifold(),
        area,
        "built mesh"
    );
    if let Err(err) = IsValid::new().with_require_closed(true).validate(mesh) {
        warn!(name, %err, "mesh failed validation");
    }
    Ok(())
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for meshcraft and this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=meshcraft=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("showcase=info".parse().unwrap_or_default())
        .add_directive("meshcraft=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let wanted = std::env::args().nth(1);
    let mut matched = false;
    for (name, build) in MESHES {
        if wanted.as_deref().is_some_and(|w| w != *name) {
            continue;
        }
        matched = true;
        report(name, &build()?)?;
    }
    if !matched {
        let names: Vec<&str> = MESHES.iter().map(|(name, _)| *name).collect();
        warn!(?wanted, ?names, "no mesh with that name");
    }
    Ok(())
}
