use thiserror::Error;
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constrained, ConstraintError, Finite, Percentage};

/// A single temperature and relative humidity reading.
///
/// Temperature is in °C and relative humidity in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    temperature: f64,
    relative_humidity: f64,
}

/// Errors returned when constructing a validated [`Observation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("invalid temperature: {0}")]
    Temperature(#[source] ConstraintError),
    #[error("invalid relative humidity: {0}")]
    RelativeHumidity(#[source] ConstraintError),
}

impl Observation {
    /// Constructs a validated observation.
    ///
    /// # Errors
    ///
    /// Returns an error if the temperature is not finite or the relative
    /// humidity is outside `0..=100`.
    pub fn new(temperature: f64, relative_humidity: f64) -> Result<Self, ObservationError> {
        let temperature =
            Constrained::<f64, Finite>::new(temperature).map_err(ObservationError::Temperature)?;
        let relative_humidity = Constrained::<f64, Percentage>::new(relative_humidity)
            .map_err(ObservationError::RelativeHumidity)?;
        Ok(Self::from_constrained(temperature, relative_humidity))
    }

    /// Constructs an observation from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        temperature: Constrained<f64, Finite>,
        relative_humidity: Constrained<f64, Percentage>,
    ) -> Self {
        Self {
            temperature: temperature.into_inner(),
            relative_humidity: relative_humidity.into_inner(),
        }
    }

    /// Constructs an observation from [`uom`] quantities.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Observation::new`].
    pub fn from_quantities(
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Self, ObservationError> {
        Self::new(
            temperature.get::<degree_celsius>(),
            relative_humidity.get::<percent>(),
        )
    }

    /// Constructs an observation without validation.
    ///
    /// # Warning
    ///
    /// Intended for data an upstream stage has already tidied. Non-finite or
    /// out-of-range values propagate into every derived quantity.
    #[must_use]
    pub fn new_unchecked(temperature: f64, relative_humidity: f64) -> Self {
        Self {
            temperature,
            relative_humidity,
        }
    }

    /// Temperature, °C.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity, %.
    #[must_use]
    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }

    /// Temperature as a [`ThermodynamicTemperature`].
    #[must_use]
    pub fn temperature_quantity(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.temperature)
    }

    /// Relative humidity as a [`Ratio`].
    #[must_use]
    pub fn relative_humidity_quantity(&self) -> Ratio {
        Ratio::new::<percent>(self.relative_humidity)
    }

    /// Checks that both fields are finite and the humidity is a percentage.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Observation::new`].
    pub fn validate(&self) -> Result<(), ObservationError> {
        Self::new(self.temperature, self.relative_humidity).map(|_| ())
    }
}
