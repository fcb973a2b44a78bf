use uom::si::f64::Length;

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    dispersion::{DomainError, DomainResult},
};

/// A receptor location in the plume frame.
///
/// The x-axis points downwind from the source, y is the crosswind offset from
/// the plume centerline, and z is height above ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceptorPoint {
    x: Constrained<Length, StrictlyPositive>,
    y: Length,
    z: Constrained<Length, NonNegative>,
}

impl ReceptorPoint {
    /// Constructs a validated receptor point.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveDistance`] if `x` is not strictly
    /// positive, or [`DomainError::NegativeReceptorHeight`] if `z` is negative.
    pub fn new(x: Length, y: Length, z: Length) -> DomainResult<Self> {
        let x = Constrained::new(x).map_err(|_| DomainError::NonPositiveDistance)?;
        let z = Constrained::new(z).map_err(|_| DomainError::NegativeReceptorHeight)?;
        Ok(Self { x, y, z })
    }

    /// Downwind distance from the source.
    #[must_use]
    pub fn x(&self) -> Length {
        *self.x.as_ref()
    }

    /// Crosswind offset from the centerline, either sign.
    #[must_use]
    pub fn y(&self) -> Length {
        self.y
    }

    /// Height above ground.
    #[must_use]
    pub fn z(&self) -> Length {
        *self.z.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::meter;

    fn meters(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn accepts_ground_level_and_either_offset() -> DomainResult<()> {
        let receptor = ReceptorPoint::new(meters(250.0), meters(-40.0), meters(0.0))?;
        assert_eq!(receptor.x(), meters(250.0));
        assert_eq!(receptor.y(), meters(-40.0));
        assert_eq!(receptor.z(), meters(0.0));
        Ok(())
    }

    #[test]
    fn downwind_distance_must_be_positive() {
        for x in [0.0, -10.0, f64::NAN] {
            assert_eq!(
                ReceptorPoint::new(meters(x), meters(0.0), meters(1.5)),
                Err(DomainError::NonPositiveDistance),
                "x = {x}"
            );
        }
    }

    #[test]
    fn height_must_not_be_negative() {
        for z in [-0.1, f64::NAN] {
            assert_eq!(
                ReceptorPoint::new(meters(100.0), meters(0.0), meters(z)),
                Err(DomainError::NegativeReceptorHeight),
                "z = {z}"
            );
        }
    }
}
