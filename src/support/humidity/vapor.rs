use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::hectopascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::ideal_gas;

use super::HumidityConfig;

/// Ratio of the molar masses of water and dry air, scaled to g/kg.
const MOLAR_MASS_RATIO_G_PER_KG: f64 = 621.9907;

/// Saturation vapor pressure, hPa, using the configured model and pressure.
#[must_use]
pub fn saturation_pressure(temp_c: f64, config: &HumidityConfig) -> f64 {
    config.saturation.pressure(temp_c, config.pressure_hpa())
}

/// Partial pressure of water vapor, hPa.
#[must_use]
pub fn vapor_pressure(temp_c: f64, rh: f64, config: &HumidityConfig) -> f64 {
    rh / 100.0 * saturation_pressure(temp_c, config)
}

/// Relative humidity, %, from the vapor partial pressure in hPa.
#[must_use]
pub fn relative_humidity_from_vapor_pressure(
    temp_c: f64,
    vapor_pressure: f64,
    config: &HumidityConfig,
) -> f64 {
    100.0 * vapor_pressure / saturation_pressure(temp_c, config)
}

/// Mass of water vapor per mass of dry air, g/kg.
#[must_use]
pub fn mixing_ratio(temp_c: f64, rh: f64, config: &HumidityConfig) -> f64 {
    let pw = vapor_pressure(temp_c, rh, config);
    MOLAR_MASS_RATIO_G_PER_KG * pw / (config.pressure_hpa() - pw)
}

/// Humidity ratio, g/kg.
///
/// The same quantity as [`mixing_ratio`]; HVAC and meteorology name it differently.
#[must_use]
pub fn humidity_ratio(temp_c: f64, rh: f64, config: &HumidityConfig) -> f64 {
    mixing_ratio(temp_c, rh, config)
}

/// Mass of water vapor per mass of moist air, g/kg.
#[must_use]
pub fn specific_humidity(temp_c: f64, rh: f64, config: &HumidityConfig) -> f64 {
    let w = mixing_ratio(temp_c, rh, config) / 1000.0;
    1000.0 * w / (1.0 + w)
}

/// Density of moist air, kg/m³.
#[must_use]
pub fn air_density(temp_c: f64, rh: f64, config: &HumidityConfig) -> f64 {
    ideal_gas::moist_air_density(
        ThermodynamicTemperature::new::<degree_celsius>(temp_c),
        config.pressure,
        Pressure::new::<hectopascal>(vapor_pressure(temp_c, rh, config)),
    )
    .get::<kilogram_per_cubic_meter>()
}

/// Specific enthalpy of moist air per mass of dry air, kJ/kg.
///
/// Zero at 0 °C and dry air.
#[must_use]
pub fn enthalpy(temp_c: f64, rh: f64, config: &HumidityConfig) -> f64 {
    let mr = mixing_ratio(temp_c, rh, config);
    temp_c * (1.01 + 0.00189 * mr) + 2.5 * mr
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::saturation::SaturationModel;

    #[test]
    fn roundtrip_rh_through_vapor_pressure() {
        for model in SaturationModel::ALL {
            let config = HumidityConfig::default().with_saturation(model);
            for ti in -10..=20 {
                let t = f64::from(ti) * 5.0;
                for rhi in 0..=20 {
                    let rh = f64::from(rhi) * 5.0;
                    let pw = vapor_pressure(t, rh, &config);
                    assert_relative_eq!(
                        relative_humidity_from_vapor_pressure(t, pw, &config),
                        rh,
                        epsilon = 1e-6
                    );
                }
            }
        }
    }

    #[test]
    fn humidity_ratio_is_mixing_ratio() {
        let config = HumidityConfig::default();
        for &(t, rh) in &[(20.0, 50.0), (-5.0, 90.0), (40.0, 10.0)] {
            assert_eq!(humidity_ratio(t, rh, &config), mixing_ratio(t, rh, &config));
        }
    }

    #[test]
    fn room_air() {
        let config = HumidityConfig::default();

        let mr = mixing_ratio(20.0, 50.0, &config);
        assert_relative_eq!(mr, 7.26, epsilon = 0.02);

        let sh = specific_humidity(20.0, 50.0, &config);
        assert!(sh < mr);
        assert_relative_eq!(sh, 7.21, epsilon = 0.02);

        assert_relative_eq!(air_density(20.0, 50.0, &config), 1.199, epsilon = 0.002);
        assert_relative_eq!(enthalpy(20.0, 50.0, &config), 38.63, epsilon = 0.05);
    }

    #[test]
    fn dry_air_carries_no_vapor() {
        let config = HumidityConfig::default();

        assert_eq!(vapor_pressure(20.0, 0.0, &config), 0.0);
        assert_eq!(mixing_ratio(20.0, 0.0, &config), 0.0);
        assert_eq!(specific_humidity(20.0, 0.0, &config), 0.0);
        assert_relative_eq!(enthalpy(20.0, 0.0, &config), 20.2);
    }
}
