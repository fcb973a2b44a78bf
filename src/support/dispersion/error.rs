use thiserror::Error;

/// An input outside the domain of the dispersion formulas.
///
/// Every variant is raised while constructing a validated input, before any
/// arithmetic runs, so a bad input never surfaces as a division by zero or a
/// `NaN` result. `NaN` inputs fail the same check as out-of-range values.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Downwind distance `x` was zero or negative.
    #[error("downwind distance must be strictly positive")]
    NonPositiveDistance,

    /// Wind speed `u` was zero or negative.
    #[error("wind speed must be strictly positive")]
    NonPositiveWind,

    /// A dispersion spread (`sy` or `sz`) was zero or negative.
    #[error("dispersion spread must be strictly positive")]
    NonPositiveSpread,

    /// The stability class was not one of `A` through `F`.
    #[error("invalid stability class {0:?}, expected one of A-F")]
    InvalidStabilityClass(String),

    /// Receptor height `z` was negative.
    #[error("receptor height must not be negative")]
    NegativeReceptorHeight,

    /// Stack height `H` was negative.
    #[error("stack height must not be negative")]
    NegativeStackHeight,

    /// Emission strength `Q` was zero or negative.
    #[error("emission strength must be strictly positive")]
    NonPositiveEmission,

    /// Buoyancy flux `Qh` was zero or negative.
    #[error("buoyancy flux must be strictly positive")]
    NonPositiveBuoyancyFlux,

    /// Building height was negative.
    #[error("building height must not be negative")]
    NegativeBuildingHeight,

    /// Time since an instantaneous release was zero or negative.
    #[error("time since release must be strictly positive")]
    NonPositiveTime,
}

/// A result type alias to use with [`DomainError`].
pub type DomainResult<T> = Result<T, DomainError>;
