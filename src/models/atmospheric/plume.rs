//! Gaussian plume and puff models.
//!
//! This module provides [`twine_core::Model`] implementations for the three
//! ways a release is usually evaluated:
//!
//! - [`GaussianPlume`]: a continuous release with known dispersion spreads.
//! - [`GaussianPuff`]: an instantaneous release whose spreads have grown with
//!   time since release.
//! - [`InstantaneousRelease`]: an instantaneous release with spreads derived
//!   from a stability class.
//!
//! All three share the same concentration formula, [`concentration`], and
//! apply [`plume_rise`] to a buoyant source before evaluating it. The
//! downwind extent of a hazard zone is found with [`hazard_distance`].
//!
//! # Example
//!
//! ```
//! use dispersion_models::models::atmospheric::plume::{
//!     GaussianPlume, PlumeInput, ReceptorPoint, Release, SourceTerm, TerrainAdjustment,
//!     WindState,
//! };
//! use dispersion_models::support::dispersion::{DispersionSpread, DomainResult};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, Velocity},
//!     length::meter,
//!     velocity::meter_per_second,
//! };
//!
//! fn main() -> DomainResult<()> {
//!     let m = Length::new::<meter>;
//!     let input = PlumeInput {
//!         release: Release {
//!             receptor: ReceptorPoint::new(m(100.0), m(0.0), m(1.5))?,
//!             source: SourceTerm::new(10.0, m(50.0))?,
//!             wind: WindState::new(Velocity::new::<meter_per_second>(5.0))?,
//!             terrain: TerrainAdjustment::default(),
//!         },
//!         spread: DispersionSpread::new(m(10.0), m(8.0))?,
//!     };
//!
//!     let Ok(c) = GaussianPlume.call(&input);
//!     assert!(c.micrograms_per_cubic_meter() >= 0.0);
//!     Ok(())
//! }
//! ```

pub(crate) mod core;

pub use self::core::{
    Buoyancy, Footprint, FootprintGrid, FootprintPoint, HazardDistanceConfig,
    HazardDistanceError, HazardScenario, ReceptorPoint, SourceTerm, TerrainAdjustment, WindState,
    concentration, effective_height, hazard_distance, plume_rise, with_plume_rise,
};

use std::convert::Infallible;

use serde_json::Value;
use twine_core::Model;
use uom::si::{
    f64::{Time, Velocity},
    velocity::meter_per_second,
};

use crate::support::{
    dispersion::{DispersionSpread, DomainError, DomainResult, PuffGrowth, StabilityClass},
    units::Concentration,
    weather,
};

/// Everything about a release except how its spread is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub receptor: ReceptorPoint,
    pub source: SourceTerm,
    pub wind: WindState,
    pub terrain: TerrainAdjustment,
}

impl Release {
    /// Replaces the wind speed with one taken from a stored weather snapshot.
    ///
    /// Keeps the current wind if the snapshot has no usable wind speed.
    /// See [`weather::wind_speed`] for which fields are read.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveWind`] if the snapshot's wind speed is
    /// not strictly positive.
    pub fn with_observed_wind(self, snapshot: &Value) -> DomainResult<Self> {
        match weather::wind_speed(snapshot) {
            Some(speed) => Ok(Self {
                wind: WindState::new(Velocity::new::<meter_per_second>(speed))?,
                ..self
            }),
            None => Ok(self),
        }
    }

    /// Moves the receptor, keeping everything else.
    #[must_use]
    pub fn at(self, receptor: ReceptorPoint) -> Self {
        Self { receptor, ..self }
    }

    fn evaluate(&self, spread: &DispersionSpread) -> Concentration {
        let source = with_plume_rise(self.source, &self.wind, &self.terrain);
        concentration(&self.receptor, &source, &self.wind, spread, &self.terrain)
    }
}

/// A continuous release with explicit dispersion spreads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianPlume;

/// Input to [`GaussianPlume`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlumeInput {
    pub release: Release,
    pub spread: DispersionSpread,
}

impl Model for GaussianPlume {
    type Input = PlumeInput;
    type Output = Concentration;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.release.evaluate(&input.spread))
    }
}

/// An instantaneous release whose spreads grow with time since release.
///
/// The emission strength is the total mass released.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianPuff {
    pub growth: PuffGrowth,
}

/// Input to [`GaussianPuff`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuffInput {
    pub release: Release,
    /// Spread at the moment of release.
    pub spread: DispersionSpread,
    /// Time since release.
    pub elapsed: Time,
}

impl Model for GaussianPuff {
    type Input = PuffInput;
    type Output = Concentration;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let spread = self.growth.grow(input.spread, input.elapsed)?;
        Ok(input.release.evaluate(&spread))
    }
}

/// An instantaneous release with Pasquill-Gifford spreads.
///
/// The emission strength is the total mass released.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantaneousRelease;

/// Input to [`InstantaneousRelease`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantaneousInput {
    pub release: Release,
    pub stability: StabilityClass,
}

impl Model for InstantaneousRelease {
    type Input = InstantaneousInput;
    type Output = Concentration;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let spread =
            DispersionSpread::pasquill_gifford(input.stability, input.release.receptor.x())?;
        Ok(input.release.evaluate(&spread))
    }
}

impl InstantaneousRelease {
    /// Evaluates the release over every receptor of `grid`.
    ///
    /// The input's receptor is ignored; each grid point gets its own spread.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if a grid receptor is invalid.
    pub fn footprint(
        &self,
        input: &InstantaneousInput,
        grid: &FootprintGrid,
    ) -> DomainResult<Footprint> {
        grid.sweep(|receptor| {
            self.call(&InstantaneousInput {
                release: input.release.at(*receptor),
                ..*input
            })
        })
    }
}
