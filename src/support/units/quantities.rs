use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N3, P4, Z0},
};

/// Buoyancy flux, m⁴/s³ in SI.
pub type BuoyancyFlux = Quantity<ISQ<P4, Z0, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`BuoyancyFlux`] from a value in m⁴/s³.
///
/// ```
/// use dispersion_models::support::units::buoyancy_flux;
///
/// let qh = buoyancy_flux(125.0);
/// assert_eq!(qh.value, 125.0);
/// ```
#[must_use]
pub fn buoyancy_flux(m4_per_s3: f64) -> BuoyancyFlux {
    BuoyancyFlux {
        dimension: PhantomData,
        units: PhantomData,
        value: m4_per_s3,
    }
}
