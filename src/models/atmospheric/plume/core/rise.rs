//! Briggs plume rise for buoyant releases.

use uom::si::{angle::radian, f64::Length, length::meter, velocity::meter_per_second};

use crate::support::constraint::{Constrained, NonNegative};

use super::{Buoyancy, TerrainAdjustment, WindState};

/// Rise coefficient for unstable classes (A, B, C).
const UNSTABLE_COEFFICIENT: f64 = 1.6;

/// Rise coefficient for neutral and stable classes (D, E, F).
const STABLE_COEFFICIENT: f64 = 2.6;

/// Rise is capped at this multiple of a nearby building's height.
const DOWNWASH_CEILING_FACTOR: f64 = 3.0;

/// Computes the rise of a buoyant plume above its release height.
///
/// The base rise is `c·Qh^(1/3)/u`, with `c` = 1.6 for classes A-C and 2.6
/// otherwise. It is then scaled by `1 + 0.5·slope` (slope in radians, positive
/// uphill), capped at three times the building height when a building is
/// present, and floored at zero.
#[must_use]
pub fn plume_rise(
    buoyancy: &Buoyancy,
    wind: &WindState,
    terrain: &TerrainAdjustment,
) -> Constrained<Length, NonNegative> {
    let coefficient = if buoyancy.stability().is_unstable() {
        UNSTABLE_COEFFICIENT
    } else {
        STABLE_COEFFICIENT
    };

    let qh = buoyancy.flux().value;
    let u = wind.speed().get::<meter_per_second>();
    let slope = terrain.slope().get::<radian>();

    // Positive (uphill) slope increases the rise.
    let mut rise = coefficient * qh.cbrt() / u * (1.0 + 0.5 * slope);

    if let Some(building) = terrain.building() {
        let ceiling = DOWNWASH_CEILING_FACTOR * building.get::<meter>();
        if rise > ceiling {
            tracing::debug!(rise, ceiling, "plume rise capped by building downwash");
            rise = ceiling;
        }
    }

    NonNegative::new(Length::new::<meter>(rise.max(0.0))).unwrap_or_else(|_| NonNegative::zero())
}
