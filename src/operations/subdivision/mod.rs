mod planar_mid_edge;

pub use planar_mid_edge::PlanarMidEdge;
