mod receptor;
mod source;
mod terrain;
mod wind;

pub use receptor::ReceptorPoint;
pub use source::{Buoyancy, SourceTerm};
pub use terrain::TerrainAdjustment;
pub use wind::WindState;
