use crate::support::saturation::{BuckCoefficients, MagnusCoefficients};

use super::{HumidityConfig, HumidityError, search::find_temperature};

/// Closed-form dew-point families.
///
/// Each family pairs a forward formula (dew point from temperature and RH)
/// with exact inverses. Mixing families within one chain of calculations
/// breaks round trips, so the choice lives on [`HumidityConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DewPointFormula {
    /// Inverse of the Magnus curve (17.625, 243.04).
    #[default]
    Magnus,
    /// Inverse of the Buck water curve (18.678, 257.14, 234.5).
    ///
    /// Temperature from dew point has no closed form in this family and is
    /// found by a bounded search.
    Buck,
}

impl DewPointFormula {
    /// `γ(T)`: the saturation exponent at `temp_c` for this family.
    fn exponent(self, temp_c: f64) -> f64 {
        match self {
            Self::Magnus => MagnusCoefficients::STANDARD.exponent(temp_c),
            Self::Buck => BuckCoefficients::WATER.exponent(temp_c),
        }
    }

    /// Leading coefficient and offset `(b, c)` in `Td = c·γ/(b − γ)`.
    fn inversion(self) -> (f64, f64) {
        match self {
            Self::Magnus => (MagnusCoefficients::STANDARD.b, MagnusCoefficients::STANDARD.c),
            Self::Buck => (BuckCoefficients::WATER.b, BuckCoefficients::WATER.c),
        }
    }

    /// Maps an exponent back to a dew point.
    fn dew_point_from_exponent(self, gamma: f64) -> f64 {
        let (b, c) = self.inversion();
        c * gamma / (b - gamma)
    }

    /// Exponent of the dew point itself, `b·Td/(c + Td)`.
    ///
    /// For Buck this drops the `Td/d` curvature term, which is what makes
    /// `dew_point_from_exponent` its exact inverse.
    fn dew_point_exponent(self, dew_point: f64) -> f64 {
        let (b, c) = self.inversion();
        b * dew_point / (c + dew_point)
    }
}

/// Dew point, °C.
///
/// # Errors
///
/// Returns [`HumidityError::ZeroHumidity`] if `rh` is not positive.
///
/// # Example
///
/// ```
/// use psychro_models::support::humidity::{HumidityConfig, dew_point};
///
/// let dp = dew_point(20.0, 50.0, &HumidityConfig::default()).unwrap();
/// assert!((dp - 9.26).abs() < 0.01);
/// ```
pub fn dew_point(temp_c: f64, rh: f64, config: &HumidityConfig) -> Result<f64, HumidityError> {
    HumidityError::check_positive("dew point", rh)?;
    let formula = config.dew_point;
    let gamma = (rh / 100.0).ln() + formula.exponent(temp_c);
    HumidityError::check_finite("dew point", formula.dew_point_from_exponent(gamma))
}

/// Relative humidity, %, of air at `temp_c` whose dew point is `dew_point`.
#[must_use]
pub fn relative_humidity_from_dew_point(temp_c: f64, dew_point: f64, config: &HumidityConfig) -> f64 {
    let formula = config.dew_point;
    100.0 * (formula.dew_point_exponent(dew_point) - formula.exponent(temp_c)).exp()
}

/// Air temperature, °C, at which air with dew point `dew_point` has relative humidity `rh`.
///
/// The Magnus family inverts in closed form. The Buck family searches
/// `config.search.bracket` for the temperature whose Buck-derived RH matches.
///
/// # Errors
///
/// Returns [`HumidityError::ZeroHumidity`] if `rh` is not positive, or
/// [`HumidityError::Search`] if no temperature in the bracket matches.
pub fn temperature_from_dew_point(
    rh: f64,
    dew_point: f64,
    config: &HumidityConfig,
) -> Result<f64, HumidityError> {
    HumidityError::check_positive("temperature from dew point", rh)?;
    let formula = config.dew_point;

    match formula {
        DewPointFormula::Magnus => {
            let gamma = formula.dew_point_exponent(dew_point) - (rh / 100.0).ln();
            HumidityError::check_finite(
                "temperature from dew point",
                formula.dew_point_from_exponent(gamma),
            )
        }
        DewPointFormula::Buck => find_temperature(
            |t| relative_humidity_from_dew_point(t, dew_point, config) - rh,
            config.search.bracket,
            &config.search,
        )
        .map_err(|err| HumidityError::search("temperature from dew point", err)),
    }
}
