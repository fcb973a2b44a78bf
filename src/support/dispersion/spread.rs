use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{DomainError, DomainResult, StabilityClass};

/// Power-law exponent shared by both spreads in the rural surface-release table.
const PASQUILL_GIFFORD_EXPONENT: f64 = 0.894;

/// Lateral and vertical spread of a plume at some downwind distance.
///
/// Both spreads are strictly positive, so they are always safe to divide by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionSpread {
    sy: Constrained<Length, StrictlyPositive>,
    sz: Constrained<Length, StrictlyPositive>,
}

impl DispersionSpread {
    /// Creates a spread from explicit lateral (`sy`) and vertical (`sz`) values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveSpread`] if either value is not
    /// strictly positive.
    pub fn new(sy: Length, sz: Length) -> DomainResult<Self> {
        let spread = |value| {
            Constrained::<Length, StrictlyPositive>::new(value)
                .map_err(|_| DomainError::NonPositiveSpread)
        };
        Ok(Self {
            sy: spread(sy)?,
            sz: spread(sz)?,
        })
    }

    /// Derives the spread for a stability class at downwind distance `x`.
    ///
    /// Uses `sy = a·x^0.894` and `sz = b·x^0.894`, with `x` in meters and the
    /// per-class `(a, b)` pair from [`pasquill_gifford_coefficients`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveDistance`] if `x` is not strictly
    /// positive.
    ///
    /// ```
    /// use dispersion_models::support::dispersion::{DispersionSpread, StabilityClass};
    /// use uom::si::{f64::Length, length::meter};
    ///
    /// let x = Length::new::<meter>(1000.0);
    /// let neutral = DispersionSpread::pasquill_gifford(StabilityClass::D, x).unwrap();
    /// let stable = DispersionSpread::pasquill_gifford(StabilityClass::F, x).unwrap();
    /// assert!(neutral.sy() > stable.sy());
    /// ```
    pub fn pasquill_gifford(class: StabilityClass, x: Length) -> DomainResult<Self> {
        let x = Constrained::<Length, StrictlyPositive>::new(x)
            .map_err(|_| DomainError::NonPositiveDistance)?;

        let growth = x.into_inner().get::<meter>().powf(PASQUILL_GIFFORD_EXPONENT);
        let (a, b) = pasquill_gifford_coefficients(class);

        Self::new(
            Length::new::<meter>(a * growth),
            Length::new::<meter>(b * growth),
        )
    }

    /// Returns the lateral spread.
    #[must_use]
    pub fn sy(&self) -> Length {
        *self.sy.as_ref()
    }

    /// Returns the vertical spread.
    #[must_use]
    pub fn sz(&self) -> Length {
        *self.sz.as_ref()
    }
}

/// Returns the `(a, b)` coefficients for rural, surface-level releases.
#[must_use]
pub fn pasquill_gifford_coefficients(class: StabilityClass) -> (f64, f64) {
    match class {
        StabilityClass::A => (0.22, 0.20),
        StabilityClass::B => (0.16, 0.12),
        StabilityClass::C => (0.11, 0.08),
        StabilityClass::D => (0.08, 0.06),
        StabilityClass::E => (0.06, 0.03),
        StabilityClass::F => (0.04, 0.016),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn meters(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn neutral_at_one_kilometer() -> DomainResult<()> {
        let spread = DispersionSpread::pasquill_gifford(StabilityClass::D, meters(1000.0))?;
        let growth = 1000_f64.powf(0.894);

        assert_relative_eq!(spread.sy().get::<meter>(), 0.08 * growth);
        assert_relative_eq!(spread.sz().get::<meter>(), 0.06 * growth);
        Ok(())
    }

    #[test]
    fn always_positive() -> DomainResult<()> {
        for class in StabilityClass::ALL {
            for x in [1e-6, 0.5, 1.0, 250.0, 1e5] {
                let spread = DispersionSpread::pasquill_gifford(class, meters(x))?;
                assert!(spread.sy().get::<meter>() > 0.0);
                assert!(spread.sz().get::<meter>() > 0.0);
            }
        }
        Ok(())
    }

    #[test]
    fn unstable_spreads_wider() -> DomainResult<()> {
        let x = meters(500.0);
        let a = DispersionSpread::pasquill_gifford(StabilityClass::A, x)?;
        let f = DispersionSpread::pasquill_gifford(StabilityClass::F, x)?;

        assert!(a.sy() > f.sy());
        assert!(a.sz() > f.sz());

        // Lateral spread never grows as stability increases.
        for pair in StabilityClass::ALL.windows(2) {
            let wider = DispersionSpread::pasquill_gifford(pair[0], x)?;
            let narrower = DispersionSpread::pasquill_gifford(pair[1], x)?;
            assert!(wider.sy() > narrower.sy());
        }
        Ok(())
    }

    #[test]
    fn rejects_non_positive_distance() {
        assert_eq!(
            DispersionSpread::pasquill_gifford(StabilityClass::C, meters(0.0)),
            Err(DomainError::NonPositiveDistance)
        );
        assert_eq!(
            DispersionSpread::pasquill_gifford(StabilityClass::C, meters(-10.0)),
            Err(DomainError::NonPositiveDistance)
        );
    }

    #[test]
    fn rejects_non_positive_spread() {
        assert_eq!(
            DispersionSpread::new(meters(0.0), meters(5.0)),
            Err(DomainError::NonPositiveSpread)
        );
        assert_eq!(
            DispersionSpread::new(meters(5.0), meters(-1.0)),
            Err(DomainError::NonPositiveSpread)
        );
        assert_eq!(
            DispersionSpread::new(meters(f64::NAN), meters(1.0)),
            Err(DomainError::NonPositiveSpread)
        );
    }
}
