use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::dispersion::DomainError;

/// Errors that can occur while searching for a hazard distance.
#[derive(Debug, Error)]
pub enum HazardDistanceError {
    /// An input was outside the model's domain.
    #[error("invalid input: {0}")]
    Domain(#[from] DomainError),

    /// The threshold concentration was zero.
    #[error("threshold concentration must be strictly positive")]
    NonPositiveThreshold,

    /// The search bracket was empty or reversed.
    #[error("search bracket must satisfy near < far")]
    InvalidBracket,

    /// The bisection solver encountered an error.
    ///
    /// This includes a bracket whose ends don't straddle the threshold.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best concentration residual achieved, in the threshold's units.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
