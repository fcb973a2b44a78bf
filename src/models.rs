//! Dispersion models.
//!
//! Models are the primary public interface of this crate. Each one is a
//! [`twine_core::Model`] that maps a release description to a concentration.
//!
//! # Organization
//!
//! Models are grouped by the medium that carries the release. Only
//! [`atmospheric`] exists today.
//!
//! # Model structure
//!
//! Each model family lives in its own module with an internal `core` submodule
//! holding the computation. The [`twine_core::Model`] implementations are thin
//! adapters over that core, and one core is shared by several adapters: the
//! plume, puff, and instantaneous release models all evaluate the same
//! Gaussian formula with differently derived spreads.

pub mod atmospheric;
