//! # Dispersion Models
//!
//! Gaussian plume and puff dispersion models for estimating downwind
//! concentrations from point-source releases, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for continuous and
//!   instantaneous releases, plus hazard-zone searches.
//! - [`support`]: Stability classification, dispersion spreads, constrained
//!   values, units, and weather snapshot parsing.
//!
//! ## Conventions
//!
//! Physical inputs are [`uom`] quantities validated once at construction, so
//! evaluating a model never fails on a degenerate value: a zero or
//! non-finite intermediate yields a zero concentration instead.
//!
//! Concentrations are reported in µg/m³ by scaling the formula output, which
//! is in emission units per cubic meter.
//!
//! The crate emits [`tracing`] events but never installs a subscriber.

pub mod models;
pub mod support;
