//! Atmospheric dispersion toolkit.
//!
//! General-purpose pieces shared by the plume and puff models: stability
//! classes and how to estimate them, dispersion spreads and how to derive
//! them, and the [`DomainError`] every validated input reports.
//!
//! # Overview
//!
//! The spread of a plume at a given downwind distance depends on how turbulent
//! the atmosphere is. Turbulence is summarized by a Pasquill-Gifford
//! [`StabilityClass`], which can be estimated from
//! [`MeteorologicalConditions`] and then mapped to a [`DispersionSpread`].
//!
//! # Example
//!
//! ```
//! use dispersion_models::support::dispersion::{
//!     DispersionSpread, DomainResult, MeteorologicalConditions,
//! };
//! use uom::si::{
//!     f64::{HeatFluxDensity, Length, Ratio, Velocity},
//!     heat_flux_density::watt_per_square_meter,
//!     length::meter,
//!     ratio::ratio,
//!     velocity::meter_per_second,
//! };
//!
//! fn main() -> DomainResult<()> {
//!     let overcast_night = MeteorologicalConditions {
//!         solar_radiation: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
//!         cloud_cover: Ratio::new::<ratio>(0.85),
//!         wind_speed: Velocity::new::<meter_per_second>(1.2),
//!     };
//!
//!     let class = overcast_night.stability_class();
//!     let spread = DispersionSpread::pasquill_gifford(class, Length::new::<meter>(800.0))?;
//!
//!     assert!(spread.sy() > spread.sz());
//!     Ok(())
//! }
//! ```

mod classifier;
mod error;
mod puff;
mod spread;
mod stability;

pub use classifier::{MeteorologicalConditions, STABILITY_RULES, StabilityRule};
pub use error::{DomainError, DomainResult};
pub use puff::PuffGrowth;
pub use spread::{DispersionSpread, pasquill_gifford_coefficients};
pub use stability::StabilityClass;
