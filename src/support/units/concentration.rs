use std::ops::Deref;

use serde::Serialize;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Micrograms per gram, used to report gram-based results in µg/m³.
pub const MICROGRAMS_PER_GRAM: f64 = 1_000_000.0;

/// A non-negative concentration at one receptor point.
///
/// The value is in the mass unit of the emission strength per cubic meter.
/// For a continuous release given in g/s that is g/m³.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Concentration(Constrained<f64, NonNegative>);

impl Concentration {
    /// Creates a [`Concentration`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or `NaN`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(value)?))
    }

    /// Creates a [`Concentration`] from the raw formula output.
    ///
    /// Anything the formula can degenerate into (negative round-off, `NaN`,
    /// infinities from overflow) collapses to zero.
    #[must_use]
    pub(crate) fn saturating(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self::new(value).unwrap_or_else(|_| Self::zero())
        } else {
            Self::zero()
        }
    }

    /// A zero concentration, for receptors outside the plume envelope.
    #[must_use]
    pub fn zero() -> Self {
        Self(NonNegative::zero())
    }

    /// Returns the concentration in the emission's mass unit per m³.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }

    /// Returns the concentration in µg/m³, assuming a gram-based emission.
    #[must_use]
    pub fn micrograms_per_cubic_meter(self) -> f64 {
        self.value() * MICROGRAMS_PER_GRAM
    }
}

impl Deref for Concentration {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// A concentration ready to hand back to a client.
///
/// Serializes as `{"concentration": <value>, "units": "µg/m³"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConcentrationReport {
    pub concentration: f64,
    pub units: &'static str,
}

impl From<Concentration> for ConcentrationReport {
    fn from(concentration: Concentration) -> Self {
        Self {
            concentration: concentration.micrograms_per_cubic_meter(),
            units: "µg/m³",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn saturating_clamps_degenerate_values() {
        assert_eq!(Concentration::saturating(-1e-300), Concentration::zero());
        assert_eq!(Concentration::saturating(f64::NAN), Concentration::zero());
        assert_eq!(Concentration::saturating(f64::INFINITY), Concentration::zero());
        assert_eq!(Concentration::saturating(2.5).value(), 2.5);
    }

    #[test]
    fn rejects_negative() {
        assert!(Concentration::new(-1.0).is_err());
        assert!(Concentration::new(0.0).is_ok());
    }

    #[test]
    fn reports_micrograms() -> ConstraintResult<()> {
        let c = Concentration::new(3.2e-5)?;
        let report = ConcentrationReport::from(c);

        assert_relative_eq!(report.concentration, 32.0, max_relative = 1e-12);
        assert_eq!(report.units, "µg/m³");

        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["units"], "µg/m³");
        Ok(())
    }
}
