use uom::{
    ConstZero,
    si::f64::{Angle, Length},
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    dispersion::{DomainError, DomainResult},
};

/// Terrain and obstacle descriptors near the release.
///
/// The default is flat, open ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainAdjustment {
    height_offset: Length,
    slope: Angle,
    building_height: Constrained<Length, NonNegative>,
}

impl TerrainAdjustment {
    /// Constructs validated terrain descriptors.
    ///
    /// - `height_offset`: terrain height at the receptor relative to the source, either sign.
    /// - `slope`: terrain gradient, positive uphill.
    /// - `building_height`: height of a nearby building, zero when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeBuildingHeight`] if `building_height` is
    /// negative.
    pub fn new(height_offset: Length, slope: Angle, building_height: Length) -> DomainResult<Self> {
        let building_height =
            Constrained::new(building_height).map_err(|_| DomainError::NegativeBuildingHeight)?;
        Ok(Self {
            height_offset,
            slope,
            building_height,
        })
    }

    /// Returns the terrain height offset.
    #[must_use]
    pub fn height_offset(&self) -> Length {
        self.height_offset
    }

    /// Returns the terrain slope.
    #[must_use]
    pub fn slope(&self) -> Angle {
        self.slope
    }

    /// Returns the nearby building height.
    #[must_use]
    pub fn building_height(&self) -> Length {
        *self.building_height.as_ref()
    }

    /// Returns the building height if a building is present.
    #[must_use]
    pub fn building(&self) -> Option<Length> {
        let height = self.building_height();
        (height > Length::ZERO).then_some(height)
    }
}

impl Default for TerrainAdjustment {
    fn default() -> Self {
        Self {
            height_offset: Length::ZERO,
            slope: Angle::ZERO,
            building_height: NonNegative::zero(),
        }
    }
}
