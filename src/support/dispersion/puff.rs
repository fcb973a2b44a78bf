use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{DispersionSpread, DomainError, DomainResult};

/// Linear growth of a puff's spread with time since release.
///
/// A puff keeps growing as it is carried downwind, so the spread passed to
/// the concentration formula for an instantaneous release depends on how long
/// ago the release happened: `sy + ky·t`, `sz + kz·t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuffGrowth {
    /// Lateral growth rate, m/s.
    pub lateral: f64,

    /// Vertical growth rate, m/s.
    pub vertical: f64,
}

impl Default for PuffGrowth {
    fn default() -> Self {
        Self {
            lateral: 0.1,
            vertical: 0.05,
        }
    }
}

impl PuffGrowth {
    /// Grows `base` by the elapsed time since release.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveTime`] if `elapsed` is not strictly
    /// positive.
    pub fn grow(&self, base: DispersionSpread, elapsed: Time) -> DomainResult<DispersionSpread> {
        let t = Constrained::<Time, StrictlyPositive>::new(elapsed)
            .map_err(|_| DomainError::NonPositiveTime)?
            .into_inner()
            .get::<second>();

        DispersionSpread::new(
            base.sy() + Length::new::<meter>(self.lateral * t),
            base.sz() + Length::new::<meter>(self.vertical * t),
        )
    }
}
