//! Ideal gas equation of state helpers for moist air.
//!
//! Moist air is treated as an ideal mixture of dry air and water vapor, each
//! obeying `p = ρ·R·T` at its own partial pressure.

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::units::SpecificGasConstant;

/// Specific gas constant of dry air, J/kg·K.
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.058;

/// Specific gas constant of water vapor, J/kg·K.
pub const WATER_VAPOR_GAS_CONSTANT: f64 = 461.495;

/// Returns the specific gas constant of dry air.
#[must_use]
pub fn dry_air() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(DRY_AIR_GAS_CONSTANT)
}

/// Returns the specific gas constant of water vapor.
#[must_use]
pub fn water_vapor() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(WATER_VAPOR_GAS_CONSTANT)
}

/// Computes density using the ideal gas equation of state.
#[must_use]
pub fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

/// Computes moist air density as the sum of the dry air and vapor partial densities.
///
/// `vapor_pressure` is the water vapor partial pressure; the dry air partial
/// pressure is the remainder of `total_pressure`.
#[must_use]
pub fn moist_air_density(
    temperature: ThermodynamicTemperature,
    total_pressure: Pressure,
    vapor_pressure: Pressure,
) -> MassDensity {
    density(temperature, total_pressure - vapor_pressure, dry_air())
        + density(temperature, vapor_pressure, water_vapor())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter,
        pressure::{hectopascal, pascal},
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn dry_air_at_standard_conditions() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(0.0);
        let p = Pressure::new::<hectopascal>(1013.25);

        let rho = density(t, p, dry_air());

        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            101_325.0 / (287.058 * 273.15),
            epsilon = 1e-12
        );
    }

    #[test]
    fn vapor_makes_air_lighter() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let p = Pressure::new::<hectopascal>(1013.25);

        let dry = moist_air_density(t, p, Pressure::new::<pascal>(0.0));
        let humid = moist_air_density(t, p, Pressure::new::<hectopascal>(20.0));

        assert!(humid < dry);
        assert_relative_eq!(
            dry.get::<kilogram_per_cubic_meter>(),
            density(t, p, dry_air()).get::<kilogram_per_cubic_meter>()
        );
    }
}
