use uom::si::f64::Length;

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    dispersion::{DomainError, DomainResult, StabilityClass},
    units::BuoyancyFlux,
};

/// The emitting source.
///
/// The emission strength is a rate (e.g. g/s) for a continuous release or a
/// total mass (e.g. g) for an instantaneous one. Its mass unit carries
/// through to the concentration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceTerm {
    emission: Constrained<f64, StrictlyPositive>,
    height: Constrained<Length, NonNegative>,
    buoyancy: Option<Buoyancy>,
}

/// Buoyancy of a hot release, used to estimate plume rise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buoyancy {
    flux: Constrained<BuoyancyFlux, StrictlyPositive>,
    stability: StabilityClass,
}

impl SourceTerm {
    /// Constructs a validated, non-buoyant source.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveEmission`] if `emission` is not
    /// strictly positive, or [`DomainError::NegativeStackHeight`] if `height`
    /// is negative.
    pub fn new(emission: f64, height: Length) -> DomainResult<Self> {
        let emission = Constrained::new(emission).map_err(|_| DomainError::NonPositiveEmission)?;
        let height = Constrained::new(height).map_err(|_| DomainError::NegativeStackHeight)?;
        Ok(Self {
            emission,
            height,
            buoyancy: None,
        })
    }

    /// Marks the release as buoyant so its plume rise can be modeled.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveBuoyancyFlux`] if `flux` is not
    /// strictly positive.
    pub fn with_buoyancy(
        self,
        flux: BuoyancyFlux,
        stability: StabilityClass,
    ) -> DomainResult<Self> {
        let flux = Constrained::new(flux).map_err(|_| DomainError::NonPositiveBuoyancyFlux)?;
        Ok(Self {
            buoyancy: Some(Buoyancy { flux, stability }),
            ..self
        })
    }

    /// Returns the emission strength.
    #[must_use]
    pub fn emission(&self) -> f64 {
        *self.emission.as_ref()
    }

    /// Returns the stack height, including any rise already applied.
    #[must_use]
    pub fn height(&self) -> Length {
        *self.height.as_ref()
    }

    /// Returns the buoyancy, if the release is buoyant.
    #[must_use]
    pub fn buoyancy(&self) -> Option<&Buoyancy> {
        self.buoyancy.as_ref()
    }

    /// Returns a non-buoyant copy of this source raised by `rise`.
    ///
    /// The buoyancy is consumed so the same rise cannot be applied twice.
    #[must_use]
    pub(in crate::models::atmospheric::plume) fn raised_by(
        self,
        rise: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            height: self.height + rise,
            buoyancy: None,
            ..self
        }
    }
}

impl Buoyancy {
    /// Returns the buoyancy flux.
    #[must_use]
    pub fn flux(&self) -> BuoyancyFlux {
        *self.flux.as_ref()
    }

    /// Returns the stability class the rise is evaluated for.
    #[must_use]
    pub fn stability(&self) -> StabilityClass {
        self.stability
    }
}
