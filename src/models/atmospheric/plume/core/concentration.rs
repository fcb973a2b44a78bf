//! Gaussian plume concentration with ground reflection.

use std::f64::consts::PI;

use uom::si::{f64::Length, length::meter, velocity::meter_per_second};

use crate::support::{dispersion::DispersionSpread, units::Concentration};

use super::{ReceptorPoint, SourceTerm, TerrainAdjustment, WindState};

/// A plume below this multiple of a nearby building's height is trapped in
/// the building's wake.
const DOWNWASH_TRAP_FACTOR: f64 = 2.5;

/// Below this, `exp` underflows to zero (or a subnormal indistinguishable from it).
const MIN_EXPONENT: f64 = -745.0;

/// Evaluates the Gaussian plume concentration at one receptor.
///
/// ```text
/// C = Q / (2π·u·sy·sz)
///     · exp(-½(y/sy)²)
///     · [exp(-½((z-H)/sz)²) + exp(-½((z+H)/sz)²)]
/// ```
///
/// `H` is the [effective height](effective_height). The second vertical term
/// is the image source that makes the ground a perfect reflector.
///
/// All inputs are validated on construction, so this cannot fail. A
/// degenerate evaluation (an exponent too large to represent, a zero or
/// infinite denominator) means the receptor is effectively outside the plume
/// and yields zero.
#[must_use]
pub fn concentration(
    receptor: &ReceptorPoint,
    source: &SourceTerm,
    wind: &WindState,
    spread: &DispersionSpread,
    terrain: &TerrainAdjustment,
) -> Concentration {
    let h = effective_height(source, terrain).get::<meter>();
    let y = receptor.y().get::<meter>();
    let z = receptor.z().get::<meter>();
    let sy = spread.sy().get::<meter>();
    let sz = spread.sz().get::<meter>();
    let u = wind.speed().get::<meter_per_second>();

    let lateral = gaussian(y / sy);
    let vertical = gaussian((z - h) / sz) + gaussian((z + h) / sz);

    let denominator = 2.0 * PI * u * sy * sz;
    if !(denominator.is_finite() && denominator > 0.0) {
        tracing::debug!(denominator, "degenerate plume denominator, reporting zero");
        return Concentration::zero();
    }

    let value = source.emission() / denominator * lateral * vertical;
    tracing::trace!(h, lateral, vertical, value, "plume evaluated");

    Concentration::saturating(value)
}

/// Returns the plume height used by [`concentration`].
///
/// Starts from the source height plus the terrain offset. If a building is
/// present and that height is below 2.5 times the building height, the plume
/// is trapped in the building wake and sits at the building top. The result is
/// never negative.
#[must_use]
pub fn effective_height(source: &SourceTerm, terrain: &TerrainAdjustment) -> Length {
    let mut h = source.height() + terrain.height_offset();

    if let Some(building) = terrain.building()
        && h < building * DOWNWASH_TRAP_FACTOR
    {
        tracing::debug!(
            height_m = h.get::<meter>(),
            building_m = building.get::<meter>(),
            "plume trapped in building wake"
        );
        h = building;
    }

    h.max(Length::new::<meter>(0.0))
}

/// `exp(-½·r²)`, saturating to zero instead of underflowing or going `NaN`.
fn gaussian(r: f64) -> f64 {
    let exponent = -0.5 * r * r;
    if exponent >= MIN_EXPONENT {
        exponent.exp()
    } else {
        tracing::debug!(r, exponent, "exponent saturated to zero");
        0.0
    }
}
