mod is_valid;
mod surface_area;
mod topology_report;

pub use is_valid::IsValid;
pub use surface_area::SurfaceArea;
pub use topology_report::TopologyReport;
