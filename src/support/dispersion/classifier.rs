use uom::si::{
    f64::{HeatFluxDensity, Ratio, Velocity},
    heat_flux_density::watt_per_square_meter,
    ratio::ratio,
    velocity::meter_per_second,
};

use super::StabilityClass;

/// Meteorological proxies used to estimate a stability class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteorologicalConditions {
    /// Incoming solar radiation, typically 0 to 1000 W/m².
    pub solar_radiation: HeatFluxDensity,

    /// Fraction of the sky covered by cloud, 0 to 1.
    pub cloud_cover: Ratio,

    /// Wind speed near the surface.
    pub wind_speed: Velocity,
}

impl MeteorologicalConditions {
    /// Estimates the Pasquill-Gifford stability class.
    ///
    /// The rules in [`STABILITY_RULES`] are tried in order and the first one
    /// that applies wins. No rule applying means neutral, [`StabilityClass::D`].
    ///
    /// ```
    /// use dispersion_models::support::dispersion::{MeteorologicalConditions, StabilityClass};
    /// use uom::si::{
    ///     f64::{HeatFluxDensity, Ratio, Velocity},
    ///     heat_flux_density::watt_per_square_meter,
    ///     ratio::ratio,
    ///     velocity::meter_per_second,
    /// };
    ///
    /// let sunny_and_calm = MeteorologicalConditions {
    ///     solar_radiation: HeatFluxDensity::new::<watt_per_square_meter>(850.0),
    ///     cloud_cover: Ratio::new::<ratio>(0.1),
    ///     wind_speed: Velocity::new::<meter_per_second>(1.5),
    /// };
    /// assert_eq!(sunny_and_calm.stability_class(), StabilityClass::A);
    /// ```
    #[must_use]
    pub fn stability_class(&self) -> StabilityClass {
        let proxies = Proxies::from(self);

        STABILITY_RULES
            .iter()
            .find(|rule| (rule.applies)(&proxies))
            .map_or(StabilityClass::D, |rule| {
                tracing::trace!(rule = rule.name, class = %rule.class, "stability rule matched");
                rule.class
            })
    }
}

/// One row of the stability decision table.
#[derive(Debug, Clone, Copy)]
pub struct StabilityRule {
    pub name: &'static str,
    applies: fn(&Proxies) -> bool,
    pub class: StabilityClass,
}

/// The stability decision table, evaluated top to bottom.
///
/// Thresholds overlap, so the order is part of the definition.
pub const STABILITY_RULES: [StabilityRule; 7] = [
    StabilityRule {
        name: "strong sun, clear sky, light wind",
        applies: |p| strong_sun_clear_sky(p) && p.wind < 2.0,
        class: StabilityClass::A,
    },
    StabilityRule {
        name: "strong sun, clear sky, moderate wind",
        applies: |p| strong_sun_clear_sky(p) && p.wind < 4.0,
        class: StabilityClass::B,
    },
    StabilityRule {
        name: "strong sun, clear sky, strong wind",
        applies: strong_sun_clear_sky,
        class: StabilityClass::C,
    },
    StabilityRule {
        name: "moderate sun, partial cloud",
        applies: |p| p.radiation > 400.0 && p.cloud < 0.6,
        class: StabilityClass::C,
    },
    StabilityRule {
        name: "overcast, windy",
        applies: |p| p.cloud > 0.7 && p.wind > 4.0,
        class: StabilityClass::D,
    },
    StabilityRule {
        name: "overcast, light wind",
        applies: |p| p.cloud > 0.8 && p.wind < 2.0,
        class: StabilityClass::E,
    },
    StabilityRule {
        name: "heavy overcast, light wind",
        applies: |p| p.cloud > 0.9 && p.wind < 3.0,
        class: StabilityClass::F,
    },
];

/// Conditions in the units the rule thresholds are written in.
#[derive(Debug, Clone, Copy)]
struct Proxies {
    /// W/m².
    radiation: f64,
    /// Fraction.
    cloud: f64,
    /// m/s.
    wind: f64,
}

impl From<&MeteorologicalConditions> for Proxies {
    fn from(conditions: &MeteorologicalConditions) -> Self {
        Self {
            radiation: conditions.solar_radiation.get::<watt_per_square_meter>(),
            cloud: conditions.cloud_cover.get::<ratio>(),
            wind: conditions.wind_speed.get::<meter_per_second>(),
        }
    }
}

fn strong_sun_clear_sky(p: &Proxies) -> bool {
    p.radiation > 700.0 && p.cloud < 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(radiation: f64, cloud: f64, wind: f64) -> StabilityClass {
        MeteorologicalConditions {
            solar_radiation: HeatFluxDensity::new::<watt_per_square_meter>(radiation),
            cloud_cover: Ratio::new::<ratio>(cloud),
            wind_speed: Velocity::new::<meter_per_second>(wind),
        }
        .stability_class()
    }

    #[test]
    fn strong_insolation_splits_on_wind() {
        assert_eq!(classify(800.0, 0.1, 1.0), StabilityClass::A);
        assert_eq!(classify(800.0, 0.1, 2.0), StabilityClass::B);
        assert_eq!(classify(800.0, 0.1, 3.9), StabilityClass::B);
        assert_eq!(classify(800.0, 0.1, 4.0), StabilityClass::C);
        assert_eq!(classify(800.0, 0.1, 9.0), StabilityClass::C);
    }

    #[test]
    fn moderate_insolation() {
        assert_eq!(classify(500.0, 0.5, 1.0), StabilityClass::C);
        // Strong sun with too much cloud for the first rules falls through here.
        assert_eq!(classify(800.0, 0.4, 1.0), StabilityClass::C);
    }

    #[test]
    fn overcast_cases() {
        assert_eq!(classify(0.0, 0.75, 5.0), StabilityClass::D);
        assert_eq!(classify(0.0, 0.85, 1.0), StabilityClass::E);
        assert_eq!(classify(0.0, 0.95, 2.5), StabilityClass::F);
    }

    #[test]
    fn order_decides_overlapping_rules() {
        // Satisfies both the E rule (cloud > 0.8, wind < 2) and the F rule
        // (cloud > 0.9, wind < 3); E comes first.
        assert_eq!(classify(0.0, 0.95, 1.0), StabilityClass::E);

        // Satisfies the moderate-sun rule before any overcast rule could apply.
        assert_eq!(classify(450.0, 0.55, 5.0), StabilityClass::C);
    }

    #[test]
    fn boundaries_are_strict() {
        assert_eq!(classify(700.0, 0.1, 1.0), StabilityClass::C);
        assert_eq!(classify(400.0, 0.1, 1.0), StabilityClass::D);
        assert_eq!(classify(0.0, 0.7, 5.0), StabilityClass::D);
        assert_eq!(classify(0.0, 0.8, 1.0), StabilityClass::D);
        assert_eq!(classify(0.0, 0.9, 2.5), StabilityClass::D);
    }

    #[test]
    fn defaults_to_neutral() {
        assert_eq!(classify(100.0, 0.5, 3.0), StabilityClass::D);
        assert_eq!(classify(f64::NAN, f64::NAN, f64::NAN), StabilityClass::D);
    }
}
