//! Saturation vapor pressure over water and ice.
//!
//! Conservation practitioners cross-check readings against instruments and
//! standards that use different reference equations, so four interchangeable
//! formulations are provided behind [`SaturationModel`]:
//!
//! | Model | Form | Branching |
//! |---|---|---|
//! | [`SaturationModel::Iapws`] | reduced-temperature series about the critical point | none (water) |
//! | [`SaturationModel::Buck`] | two-branch exponential | water/ice at 0 °C |
//! | [`SaturationModel::Magnus`] | single exponential, scaled by ambient pressure | none |
//! | [`SaturationModel::Vaisala`] | Hyland–Wexler series in `T` and `ln T` | water/ice at 0 °C |
//!
//! All functions take temperature in °C and return hPa. Inputs are not
//! validated: a temperature far outside the supported -50 °C to 100 °C range
//! produces whatever the formula produces.

mod buck;
mod iapws;
mod magnus;
mod vaisala;

pub use buck::BuckCoefficients;
pub use iapws::IapwsCoefficients;
pub use magnus::MagnusCoefficients;
pub use vaisala::HylandWexlerCoefficients;

use std::fmt;

/// Standard atmospheric pressure, hPa.
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Selects a saturation vapor pressure formulation.
///
/// The variants are stateless. [`SaturationModel::Magnus`] is the only one
/// that depends on ambient pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SaturationModel {
    /// IAPWS reduced-temperature formulation (Wagner & Pruß form).
    ///
    /// Accurate to within about 0.083 % between -20 °C and 50 °C.
    Iapws,
    /// Buck (1981/1996) with separate water and ice branches.
    #[default]
    Buck,
    /// Magnus–Alduchov–Eskridge, scaled by ambient over standard pressure.
    Magnus,
    /// Hyland–Wexler form as published by Vaisala, computed in Pa.
    Vaisala,
}

impl SaturationModel {
    /// Every available formulation, in declaration order.
    pub const ALL: [Self; 4] = [Self::Iapws, Self::Buck, Self::Magnus, Self::Vaisala];

    /// Returns the saturation vapor pressure in hPa at `temp_c` (°C).
    ///
    /// `pressure_hpa` is the ambient pressure, used only by the Magnus form.
    ///
    /// # Example
    ///
    /// ```
    /// use psychro_models::support::saturation::{SaturationModel, STANDARD_PRESSURE_HPA};
    ///
    /// let es = SaturationModel::Iapws.pressure(20.0, STANDARD_PRESSURE_HPA);
    /// assert!((es - 23.39).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn pressure(self, temp_c: f64, pressure_hpa: f64) -> f64 {
        match self {
            Self::Iapws => IapwsCoefficients::STANDARD.pressure(temp_c),
            Self::Buck => BuckCoefficients::for_temperature(temp_c).pressure(temp_c),
            Self::Magnus => {
                MagnusCoefficients::STANDARD.pressure(temp_c)
                    * (pressure_hpa / STANDARD_PRESSURE_HPA)
            }
            Self::Vaisala => HylandWexlerCoefficients::for_temperature(temp_c).pressure(temp_c),
        }
    }
}

impl fmt::Display for SaturationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Iapws => "IAPWS",
            Self::Buck => "Buck",
            Self::Magnus => "Magnus",
            Self::Vaisala => "VAISALA",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn all_models_agree_at_room_temperature() {
        for model in SaturationModel::ALL {
            let es = model.pressure(20.0, STANDARD_PRESSURE_HPA);
            assert_relative_eq!(es, 23.39, max_relative = 5e-3);
        }
        assert_relative_eq!(
            SaturationModel::Iapws.pressure(20.0, STANDARD_PRESSURE_HPA),
            23.39,
            epsilon = 0.01
        );
    }

    #[test]
    fn ice_branches_below_freezing() {
        let buck = SaturationModel::Buck.pressure(-10.0, STANDARD_PRESSURE_HPA);
        let vaisala = SaturationModel::Vaisala.pressure(-10.0, STANDARD_PRESSURE_HPA);

        assert_relative_eq!(buck, 2.599, epsilon = 0.01);
        assert_relative_eq!(vaisala, 2.599, epsilon = 0.01);
    }

    #[test]
    fn strictly_increasing_over_supported_range() {
        for model in SaturationModel::ALL {
            let mut previous = model.pressure(-50.0, STANDARD_PRESSURE_HPA);
            for step in 1..=300 {
                let temp_c = -50.0 + f64::from(step) * 0.5;
                let es = model.pressure(temp_c, STANDARD_PRESSURE_HPA);
                assert!(
                    es > previous,
                    "{model} not increasing at {temp_c} °C: {es} <= {previous}"
                );
                previous = es;
            }
        }
    }

    #[test]
    fn buck_switches_branch_at_zero() {
        let water = SaturationModel::Buck.pressure(0.0, STANDARD_PRESSURE_HPA);
        let ice = SaturationModel::Buck.pressure(-1e-9, STANDARD_PRESSURE_HPA);

        assert_relative_eq!(water, 6.1121, epsilon = 1e-9);
        assert_relative_eq!(ice, 6.1115, epsilon = 1e-6);
    }

    #[test]
    fn magnus_scales_with_ambient_pressure() {
        let standard = SaturationModel::Magnus.pressure(15.0, STANDARD_PRESSURE_HPA);
        let high_site = SaturationModel::Magnus.pressure(15.0, 850.0);

        assert_relative_eq!(high_site / standard, 850.0 / STANDARD_PRESSURE_HPA);
        assert_relative_eq!(
            SaturationModel::Buck.pressure(15.0, 850.0),
            SaturationModel::Buck.pressure(15.0, STANDARD_PRESSURE_HPA)
        );
    }
}
