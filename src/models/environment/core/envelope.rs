use thiserror::Error;

use crate::support::{
    constraint::{Constrained, Constraint, ConstraintError, Finite, Percentage},
    humidity::{Observation, absolute_humidity},
};

/// Target temperature and relative humidity ranges for a space.
///
/// Bounds are inclusive. Temperatures are in °C and relative humidities in %.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    low_temp: f64,
    high_temp: f64,
    low_rh: f64,
    high_rh: f64,
}

/// Errors returned when constructing an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("invalid temperature bound: {0}")]
    Temperature(#[source] ConstraintError),

    #[error("invalid relative humidity bound: {0}")]
    RelativeHumidity(#[source] ConstraintError),

    #[error("low temperature {low} °C must be below high temperature {high} °C")]
    TemperatureOrder { low: f64, high: f64 },

    #[error("low relative humidity {low} % must be below high relative humidity {high} %")]
    HumidityOrder { low: f64, high: f64 },
}

impl Default for Envelope {
    /// 16 °C to 25 °C at 40 % to 60 % RH.
    fn default() -> Self {
        Self {
            low_temp: 16.0,
            high_temp: 25.0,
            low_rh: 40.0,
            high_rh: 60.0,
        }
    }
}

impl Envelope {
    /// Constructs a validated envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if a temperature bound is not finite, an RH bound is
    /// outside `0..=100`, or either range is empty or inverted.
    ///
    /// # Example
    ///
    /// ```
    /// use psychro_models::models::environment::Envelope;
    ///
    /// assert!(Envelope::new(18.0, 22.0, 45.0, 55.0).is_ok());
    /// assert!(Envelope::new(25.0, 16.0, 40.0, 60.0).is_err());
    /// ```
    pub fn new(
        low_temp: f64,
        high_temp: f64,
        low_rh: f64,
        high_rh: f64,
    ) -> Result<Self, EnvelopeError> {
        for temp in [low_temp, high_temp] {
            Finite::check(&temp).map_err(EnvelopeError::Temperature)?;
        }
        for rh in [low_rh, high_rh] {
            Percentage::check(&rh).map_err(EnvelopeError::RelativeHumidity)?;
        }
        if low_temp >= high_temp {
            return Err(EnvelopeError::TemperatureOrder {
                low: low_temp,
                high: high_temp,
            });
        }
        if low_rh >= high_rh {
            return Err(EnvelopeError::HumidityOrder {
                low: low_rh,
                high: high_rh,
            });
        }

        Ok(Self {
            low_temp,
            high_temp,
            low_rh,
            high_rh,
        })
    }

    /// Constructs an envelope from pre-validated bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either range is empty or inverted.
    pub fn from_constrained(
        low_temp: Constrained<f64, Finite>,
        high_temp: Constrained<f64, Finite>,
        low_rh: Constrained<f64, Percentage>,
        high_rh: Constrained<f64, Percentage>,
    ) -> Result<Self, EnvelopeError> {
        Self::new(
            low_temp.into_inner(),
            high_temp.into_inner(),
            low_rh.into_inner(),
            high_rh.into_inner(),
        )
    }

    #[must_use]
    pub fn low_temp(&self) -> f64 {
        self.low_temp
    }

    #[must_use]
    pub fn high_temp(&self) -> f64 {
        self.high_temp
    }

    #[must_use]
    pub fn low_rh(&self) -> f64 {
        self.low_rh
    }

    #[must_use]
    pub fn high_rh(&self) -> f64 {
        self.high_rh
    }

    /// Absolute humidity at the cold, dry corner, g/m³.
    ///
    /// Air holding less moisture than this cannot reach the envelope by
    /// temperature change alone.
    #[must_use]
    pub fn dry_corner_absolute_humidity(&self) -> f64 {
        absolute_humidity(self.low_temp, self.low_rh)
    }

    /// Absolute humidity at the warm, humid corner, g/m³.
    ///
    /// Air holding more moisture than this cannot reach the envelope by
    /// temperature change alone.
    #[must_use]
    pub fn humid_corner_absolute_humidity(&self) -> f64 {
        absolute_humidity(self.high_temp, self.high_rh)
    }

    /// Returns `true` if both readings lie within their ranges.
    #[must_use]
    pub fn contains(&self, observation: &Observation) -> bool {
        (self.low_temp..=self.high_temp).contains(&observation.temperature())
            && (self.low_rh..=self.high_rh).contains(&observation.relative_humidity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_envelope() {
        let env = Envelope::default();

        assert_eq!(env, Envelope::new(16.0, 25.0, 40.0, 60.0).unwrap());
        assert_relative_eq!(env.dry_corner_absolute_humidity(), 5.45, epsilon = 0.01);
        assert_relative_eq!(env.humid_corner_absolute_humidity(), 13.82, epsilon = 0.01);
    }

    #[test]
    fn rejects_invalid_bounds() {
        assert_eq!(
            Envelope::new(25.0, 16.0, 40.0, 60.0),
            Err(EnvelopeError::TemperatureOrder {
                low: 25.0,
                high: 16.0
            })
        );
        assert_eq!(
            Envelope::new(16.0, 25.0, 60.0, 60.0),
            Err(EnvelopeError::HumidityOrder {
                low: 60.0,
                high: 60.0
            })
        );
        assert_eq!(
            Envelope::new(f64::NAN, 25.0, 40.0, 60.0),
            Err(EnvelopeError::Temperature(ConstraintError::NotANumber))
        );
        assert_eq!(
            Envelope::new(16.0, 25.0, 40.0, 110.0),
            Err(EnvelopeError::RelativeHumidity(ConstraintError::AboveMaximum))
        );
    }

    #[test]
    fn from_constrained_bounds() {
        let env = Envelope::from_constrained(
            Finite::new(18.0).unwrap(),
            Finite::new(22.0).unwrap(),
            Percentage::new(45.0).unwrap(),
            Percentage::new(55.0).unwrap(),
        )
        .unwrap();

        assert_eq!(env, Envelope::new(18.0, 22.0, 45.0, 55.0).unwrap());
        assert_eq!(env.low_temp(), 18.0);
        assert_eq!(env.high_rh(), 55.0);

        assert_eq!(
            Envelope::from_constrained(
                Finite::new(22.0).unwrap(),
                Finite::new(18.0).unwrap(),
                Percentage::new(45.0).unwrap(),
                Percentage::new(55.0).unwrap(),
            ),
            Err(EnvelopeError::TemperatureOrder {
                low: 22.0,
                high: 18.0
            })
        );
        assert_eq!(
            Envelope::from_constrained(
                Finite::new(18.0).unwrap(),
                Finite::new(22.0).unwrap(),
                Percentage::new(55.0).unwrap(),
                Percentage::new(45.0).unwrap(),
            ),
            Err(EnvelopeError::HumidityOrder {
                low: 55.0,
                high: 45.0
            })
        );
    }

    #[test]
    fn containment_is_inclusive() {
        let env = Envelope::default();

        assert!(env.contains(&Observation::new(16.0, 60.0).unwrap()));
        assert!(env.contains(&Observation::new(25.0, 40.0).unwrap()));
        assert!(!env.contains(&Observation::new(15.9, 50.0).unwrap()));
        assert!(!env.contains(&Observation::new(20.0, 60.1).unwrap()));
    }
}
