use thiserror::Error;

use super::SearchError;

/// Errors that can occur while deriving humidity quantities.
#[derive(Debug, Error)]
pub enum HumidityError {
    /// A logarithmic or ratio form is undefined at zero relative humidity.
    ///
    /// Callers are expected to screen out zero readings before asking for
    /// these quantities.
    #[error("{quantity} is undefined at {relative_humidity} % relative humidity")]
    ZeroHumidity {
        quantity: &'static str,
        relative_humidity: f64,
    },

    /// A derived quantity evaluated to `NaN` or infinity.
    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },

    /// The vapor partial pressure reaches the ambient pressure, so no dry
    /// air remains and the mass ratios are meaningless.
    #[error("vapor pressure {vapor_pressure} hPa is not below ambient pressure {pressure} hPa")]
    VaporExceedsAmbient { vapor_pressure: f64, pressure: f64 },

    /// A numerical inverse failed to find a temperature.
    #[error("temperature search failed for {quantity}")]
    Search {
        quantity: &'static str,
        #[source]
        source: SearchError,
    },
}

impl HumidityError {
    pub(crate) fn search(quantity: &'static str, source: SearchError) -> Self {
        Self::Search { quantity, source }
    }

    /// Rejects non-finite relative humidities and those at or below zero for `quantity`.
    pub(crate) fn check_positive(quantity: &'static str, relative_humidity: f64) -> Result<(), Self> {
        if !relative_humidity.is_finite() {
            Err(Self::NonFinite {
                quantity: "relative humidity",
            })
        } else if relative_humidity > 0.0 {
            Ok(())
        } else {
            Err(Self::ZeroHumidity {
                quantity,
                relative_humidity,
            })
        }
    }

    /// Passes `value` through if it is finite.
    pub(crate) fn check_finite(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity })
        }
    }
}
