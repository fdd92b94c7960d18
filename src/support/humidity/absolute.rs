use crate::support::{
    constraint::{Constraint, NonNegative},
    ideal_gas::WATER_VAPOR_GAS_CONSTANT,
    saturation::KELVIN_OFFSET,
};

use super::{
    HumidityConfig, HumidityError,
    search::{TemperatureSearch, find_temperature},
    vapor_pressure,
};

/// Coefficients of the closed-form absolute humidity expression.
///
/// `AH = a·exp(b·T/(c + T))·RH·k/(273.15 + T)`, in g/m³ with `T` in °C and
/// `RH` in %.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsoluteHumidityCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub k: f64,
}

impl AbsoluteHumidityCoefficients {
    pub const STANDARD: Self = Self {
        a: 6.112,
        b: 17.67,
        c: 243.5,
        k: 2.1674,
    };

    /// Absolute humidity of saturated air, g/m³, divided by 100.
    fn per_percent(&self, temp_c: f64) -> f64 {
        self.a * (self.b * temp_c / (self.c + temp_c)).exp() * self.k / (KELVIN_OFFSET + temp_c)
    }
}

/// Absolute humidity, g/m³, from the closed-form expression.
///
/// This path is independent of [`HumidityConfig`] and of the mixing-ratio
/// path. Zone classification and adjustment planning use it together with
/// [`relative_humidity_from_absolute_humidity`], which is its exact inverse.
///
/// # Example
///
/// ```
/// use psychro_models::support::humidity::absolute_humidity;
///
/// assert!((absolute_humidity(20.0, 50.0) - 8.63).abs() < 0.02);
/// ```
#[must_use]
pub fn absolute_humidity(temp_c: f64, rh: f64) -> f64 {
    AbsoluteHumidityCoefficients::STANDARD.per_percent(temp_c) * rh
}

/// Relative humidity, %, of air at `temp_c` holding `absolute_humidity` g/m³.
#[must_use]
pub fn relative_humidity_from_absolute_humidity(temp_c: f64, absolute_humidity: f64) -> f64 {
    absolute_humidity / AbsoluteHumidityCoefficients::STANDARD.per_percent(temp_c)
}

/// Absolute humidity, g/m³, from the configured vapor pressure and the ideal gas law.
///
/// Used to cross-check [`absolute_humidity`]; the two agree to within the
/// error of their respective saturation fits.
#[must_use]
pub fn absolute_humidity_ideal_gas(temp_c: f64, rh: f64, config: &HumidityConfig) -> f64 {
    let vapor_pa = vapor_pressure(temp_c, rh, config) * 100.0;
    1000.0 * vapor_pa / (WATER_VAPOR_GAS_CONSTANT * (temp_c + KELVIN_OFFSET))
}

/// Temperature, °C, at which air holding `absolute_humidity` g/m³ has relative humidity `rh`.
///
/// Searches `config.search.bracket`.
///
/// # Errors
///
/// See [`temperature_from_absolute_humidity_within`].
pub fn temperature_from_absolute_humidity(
    absolute_humidity: f64,
    rh: f64,
    config: &HumidityConfig,
) -> Result<f64, HumidityError> {
    temperature_from_absolute_humidity_within(
        absolute_humidity,
        rh,
        config.search.bracket,
        &config.search,
    )
}

/// Like [`temperature_from_absolute_humidity`], searching an explicit bracket (°C).
///
/// # Errors
///
/// Returns [`HumidityError::ZeroHumidity`] if `rh` is not positive,
/// [`HumidityError::NonFinite`] if `absolute_humidity` is negative or `NaN`,
/// and [`HumidityError::Search`] if no temperature in the bracket matches.
pub fn temperature_from_absolute_humidity_within(
    absolute_humidity: f64,
    rh: f64,
    bracket: [f64; 2],
    search: &TemperatureSearch,
) -> Result<f64, HumidityError> {
    HumidityError::check_positive("temperature from absolute humidity", rh)?;
    if NonNegative::check(&absolute_humidity).is_err() {
        return Err(HumidityError::NonFinite {
            quantity: "absolute humidity",
        });
    }

    find_temperature(
        |t| relative_humidity_from_absolute_humidity(t, absolute_humidity) - rh,
        bracket,
        search,
    )
    .map_err(|err| HumidityError::search("temperature from absolute humidity", err))
}
