//! Downwind extent of a hazard zone.
//!
//! Finds the downwind distance at which the concentration from a release falls
//! to a threshold, such as an exposure guideline, by bisecting on distance with
//! spreads derived from a stability class.

mod config;
mod error;
mod problem;

pub use config::HazardDistanceConfig;
pub use error::HazardDistanceError;

use std::cmp::Ordering;

use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    dispersion::{DomainError, StabilityClass},
    units::Concentration,
};

use super::{FootprintPoint, SourceTerm, TerrainAdjustment, WindState, with_plume_rise};

use problem::{DownwindModel, ThresholdProblem};

/// A release and the receptor line it is evaluated along.
///
/// The receptor sits at a fixed crosswind `offset` and `height` and moves
/// downwind during the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardScenario {
    pub source: SourceTerm,
    pub wind: WindState,
    pub terrain: TerrainAdjustment,
    pub stability: StabilityClass,
    pub offset: Length,
    pub height: Length,
}

/// Finds where the concentration crosses `threshold` within `bracket`.
///
/// The concentration along a receptor line rises to a peak and then decays,
/// so it can cross the threshold twice. The bracket `[near, far]` must contain
/// exactly one crossing; to find the outer edge of the hazard zone, start
/// `near` at or beyond the peak. A buoyant source has its plume rise applied
/// first.
///
/// # Errors
///
/// Returns [`HazardDistanceError`] on invalid inputs, a bracket that doesn't
/// straddle the threshold, or if the solver fails to converge.
pub fn hazard_distance(
    scenario: &HazardScenario,
    threshold: Concentration,
    bracket: [Length; 2],
    config: HazardDistanceConfig,
) -> Result<FootprintPoint, HazardDistanceError> {
    let [near, far] = bracket;
    Constrained::<Length, StrictlyPositive>::new(near)
        .map_err(|_| DomainError::NonPositiveDistance)?;
    if near.partial_cmp(&far) != Some(Ordering::Less) {
        return Err(HazardDistanceError::InvalidBracket);
    }
    if threshold.value() <= 0.0 {
        return Err(HazardDistanceError::NonPositiveThreshold);
    }

    let scenario = HazardScenario {
        source: with_plume_rise(scenario.source, &scenario.wind, &scenario.terrain),
        ..*scenario
    };

    let model = DownwindModel::new(&scenario);
    let problem = ThresholdProblem::new(threshold.value());

    let solution = bisection::solve(
        &model,
        &problem,
        [near.get::<meter>(), far.get::<meter>()],
        &config.bisection(threshold.value()),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(HazardDistanceError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let point = solution.snapshot.output;
    tracing::debug!(
        distance_m = point.receptor.x().get::<meter>(),
        iters = solution.iters,
        "hazard distance converged"
    );
    Ok(point)
}
