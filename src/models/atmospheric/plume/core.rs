//! Gaussian plume computation.
//!
//! The plume is evaluated in its own frame: x downwind along the mean wind,
//! y crosswind, z up. Every function here is a pure evaluation over validated
//! inputs. Buoyant plume rise is a separate pre-step that raises the source
//! before the concentration formula sees it.

mod concentration;
mod footprint;
mod hazard_distance;
mod input;
mod rise;

#[cfg(test)]
mod test_support;

pub use concentration::{concentration, effective_height};
pub use footprint::{Footprint, FootprintGrid, FootprintPoint};
pub use hazard_distance::{
    HazardDistanceConfig, HazardDistanceError, HazardScenario, hazard_distance,
};
pub use input::{Buoyancy, ReceptorPoint, SourceTerm, TerrainAdjustment, WindState};
pub use rise::plume_rise;

/// Applies plume rise to a buoyant source.
///
/// Returns the source raised by its Briggs rise, or unchanged if it isn't
/// buoyant.
#[must_use]
pub fn with_plume_rise(
    source: SourceTerm,
    wind: &WindState,
    terrain: &TerrainAdjustment,
) -> SourceTerm {
    match source.buoyancy() {
        Some(buoyancy) => source.raised_by(plume_rise(buoyancy, wind, terrain)),
        None => source,
    }
}
