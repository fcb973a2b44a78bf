use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

/// Solver configuration for the hazard distance search.
#[derive(Debug, Clone, Copy)]
pub struct HazardDistanceConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the downwind distance.
    pub distance_tol: Length,

    /// Tolerance on the concentration residual (achieved - threshold),
    /// relative to the threshold.
    pub concentration_tol: f64,
}

impl Default for HazardDistanceConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            distance_tol: Length::new::<meter>(1e-6),
            concentration_tol: 1e-9,
        }
    }
}

impl HazardDistanceConfig {
    /// Converts this configuration into a bisection solver configuration for
    /// a search toward `threshold`.
    pub(super) fn bisection(&self, threshold: f64) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.distance_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.concentration_tol * threshold,
        }
    }
}
