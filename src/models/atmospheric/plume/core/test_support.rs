use uom::si::{
    angle::radian,
    f64::{Angle, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::{
    dispersion::{DispersionSpread, DomainResult, StabilityClass},
    units::Concentration,
};

use super::{ReceptorPoint, SourceTerm, TerrainAdjustment, WindState, concentration};

pub(crate) fn meters(value: f64) -> Length {
    Length::new::<meter>(value)
}

pub(crate) fn wind(u: f64) -> DomainResult<WindState> {
    WindState::new(Velocity::new::<meter_per_second>(u))
}

pub(crate) fn terrain(offset: f64, slope: f64, building: f64) -> DomainResult<TerrainAdjustment> {
    TerrainAdjustment::new(meters(offset), Angle::new::<radian>(slope), meters(building))
}

/// A complete set of concentration inputs that tests can tweak field by field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Case {
    pub(crate) receptor: ReceptorPoint,
    pub(crate) source: SourceTerm,
    pub(crate) wind: WindState,
    pub(crate) spread: DispersionSpread,
    pub(crate) terrain: TerrainAdjustment,
}

impl Case {
    pub(crate) fn evaluate(&self) -> Concentration {
        concentration(
            &self.receptor,
            &self.source,
            &self.wind,
            &self.spread,
            &self.terrain,
        )
    }
}

/// Ground-level centerline receptor 1 km downwind of a 50 m stack emitting
/// 10 g/s into a 3 m/s wind, with class D spreads.
pub(crate) fn reference_case() -> DomainResult<Case> {
    let x = meters(1000.0);
    Ok(Case {
        receptor: ReceptorPoint::new(x, meters(0.0), meters(0.0))?,
        source: SourceTerm::new(10.0, meters(50.0))?,
        wind: wind(3.0)?,
        spread: DispersionSpread::pasquill_gifford(StabilityClass::D, x)?,
        terrain: TerrainAdjustment::default(),
    })
}
