//! Extensions to [`uom`].
//!
//! Physical inputs (lengths, wind speeds, slopes, irradiance) use [`uom`]
//! quantities. This module adds the pieces [`uom`] doesn't ship:
//!
//! - [`BuoyancyFlux`]: the Briggs buoyancy flux, m⁴/s³.
//! - [`Concentration`]: a non-negative concentration expressed in the mass
//!   unit of the emission per cubic meter.
//!
//! Concentration is deliberately not a [`uom`] quantity. The same formula
//! serves continuous releases (emission in g/s) and instantaneous releases
//! (emission in g), so its dimension depends on how the caller interprets the
//! emission strength.

mod concentration;
mod quantities;

pub use concentration::{Concentration, ConcentrationReport, MICROGRAMS_PER_GRAM};
pub use quantities::{BuoyancyFlux, buoyancy_flux};
