//! Problem formulation for the hazard distance search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::Length, length::meter};

use crate::{
    models::atmospheric::plume::core::{FootprintPoint, ReceptorPoint, concentration},
    support::dispersion::{DispersionSpread, DomainError},
};

use super::HazardScenario;

/// Model adapter exposing downwind distance as the sole input.
///
/// Spreads are re-derived from the scenario's stability class at every
/// distance, so the receptor moves through a growing plume.
pub(super) struct DownwindModel<'a> {
    scenario: &'a HazardScenario,
}

impl<'a> DownwindModel<'a> {
    pub(super) fn new(scenario: &'a HazardScenario) -> Self {
        Self { scenario }
    }
}

impl Model for DownwindModel<'_> {
    type Input = Length;
    type Output = FootprintPoint;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let scenario = self.scenario;
        let receptor = ReceptorPoint::new(*input, scenario.offset, scenario.height)?;
        let spread = DispersionSpread::pasquill_gifford(scenario.stability, *input)?;

        Ok(FootprintPoint {
            receptor,
            concentration: concentration(
                &receptor,
                &scenario.source,
                &scenario.wind,
                &spread,
                &scenario.terrain,
            ),
        })
    }
}

/// Equation problem for the threshold crossing.
///
/// Computes the residual as `concentration - threshold`.
pub(super) struct ThresholdProblem {
    threshold: f64,
}

impl ThresholdProblem {
    pub(super) fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl EquationProblem<1> for ThresholdProblem {
    type Input = Length;
    type Output = FootprintPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.concentration.value() - self.threshold])
    }
}
