//! Concentration footprint over a grid of receptors.

use uom::si::{f64::Length, length::meter};

use crate::support::{dispersion::DomainError, units::Concentration};

use super::ReceptorPoint;

/// A rectangular receptor grid: every downwind distance paired with every
/// crosswind offset, all at one height.
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintGrid {
    pub distances: Vec<Length>,
    pub offsets: Vec<Length>,
    pub height: Length,
}

impl Default for FootprintGrid {
    /// Distances out to 1 km and offsets within 50 m of the centerline, at
    /// breathing height.
    fn default() -> Self {
        let m = Length::new::<meter>;
        Self {
            distances: [50.0, 100.0, 200.0, 300.0, 500.0, 1000.0].map(m).to_vec(),
            offsets: [-50.0, -25.0, 0.0, 25.0, 50.0].map(m).to_vec(),
            height: m(1.5),
        }
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintPoint {
    pub receptor: ReceptorPoint,
    pub concentration: Concentration,
}

/// The evaluated grid, in distance-major order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Footprint {
    pub points: Vec<FootprintPoint>,
}

impl Footprint {
    /// Returns the point with the highest concentration.
    ///
    /// Ties keep the earliest point. Returns `None` for an empty grid.
    #[must_use]
    pub fn max(&self) -> Option<&FootprintPoint> {
        self.points.iter().reduce(|best, point| {
            if point.concentration > best.concentration {
                point
            } else {
                best
            }
        })
    }
}

impl FootprintGrid {
    /// Evaluates `eval` at every grid receptor.
    ///
    /// # Errors
    ///
    /// Fails on the first receptor that can't be constructed (a non-positive
    /// distance or negative height) or on the first error from `eval`.
    pub fn sweep<E>(
        &self,
        mut eval: impl FnMut(&ReceptorPoint) -> Result<Concentration, E>,
    ) -> Result<Footprint, E>
    where
        E: From<DomainError>,
    {
        let mut points = Vec::with_capacity(self.distances.len() * self.offsets.len());

        for &x in &self.distances {
            for &y in &self.offsets {
                let receptor = ReceptorPoint::new(x, y, self.height)?;
                let concentration = eval(&receptor)?;
                points.push(FootprintPoint {
                    receptor,
                    concentration,
                });
            }
        }

        Ok(Footprint { points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        models::atmospheric::plume::core::{
            concentration,
            test_support::{meters, reference_case},
        },
        support::dispersion::{DispersionSpread, DomainResult, StabilityClass},
    };

    #[test]
    fn sweeps_default_grid() -> DomainResult<()> {
        let case = reference_case()?;
        let grid = FootprintGrid::default();

        let footprint = grid.sweep(|receptor| {
            let spread = DispersionSpread::pasquill_gifford(StabilityClass::D, receptor.x())?;
            Ok::<_, DomainError>(concentration(
                receptor,
                &case.source,
                &case.wind,
                &spread,
                &case.terrain,
            ))
        })?;

        assert_eq!(footprint.points.len(), 30);
        assert_eq!(footprint.points[0].receptor.x(), meters(50.0));
        assert_eq!(footprint.points[0].receptor.y(), meters(-50.0));
        assert_eq!(footprint.points[29].receptor.x(), meters(1000.0));

        let max = footprint.max().expect("grid is not empty");
        assert_eq!(max.receptor.y(), meters(0.0));
        assert!(
            footprint
                .points
                .iter()
                .all(|point| point.concentration <= max.concentration)
        );
        Ok(())
    }

    #[test]
    fn rejects_bad_distance() {
        let grid = FootprintGrid {
            distances: vec![meters(100.0), meters(0.0)],
            offsets: vec![meters(0.0)],
            height: meters(1.5),
        };

        let result = grid.sweep(|_| Ok::<_, DomainError>(Concentration::zero()));
        assert_eq!(result, Err(DomainError::NonPositiveDistance));
    }

    #[test]
    fn empty_grid_has_no_max() -> DomainResult<()> {
        let grid = FootprintGrid {
            distances: Vec::new(),
            ..FootprintGrid::default()
        };
        let footprint = grid.sweep(|_| Ok::<_, DomainError>(Concentration::zero()))?;
        assert!(footprint.max().is_none());
        Ok(())
    }
}
