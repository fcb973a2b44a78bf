//! Atmospheric dispersion models.
//!
//! This module contains models for pollutant releases carried downwind by the
//! atmosphere.

pub mod plume;
