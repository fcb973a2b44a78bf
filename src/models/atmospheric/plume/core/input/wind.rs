use uom::si::f64::Velocity;

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    dispersion::{DomainError, DomainResult},
};

/// Mean wind speed, aligned with the plume's x-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindState {
    speed: Constrained<Velocity, StrictlyPositive>,
}

impl WindState {
    /// Constructs a validated wind state.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveWind`] if the speed is not strictly
    /// positive.
    pub fn new(speed: Velocity) -> DomainResult<Self> {
        let speed = Constrained::new(speed).map_err(|_| DomainError::NonPositiveWind)?;
        Ok(Self { speed })
    }

    /// Returns the wind speed.
    #[must_use]
    pub fn speed(&self) -> Velocity {
        *self.speed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::velocity::meter_per_second;

    #[test]
    fn speed_must_be_positive() {
        for u in [0.0, -3.0, f64::NAN] {
            assert_eq!(
                WindState::new(Velocity::new::<meter_per_second>(u)),
                Err(DomainError::NonPositiveWind),
                "u = {u}"
            );
        }
    }

    #[test]
    fn keeps_speed() -> DomainResult<()> {
        let u = Velocity::new::<meter_per_second>(0.5);
        assert_eq!(WindState::new(u)?.speed(), u);
        Ok(())
    }
}
