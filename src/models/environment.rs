//! Environmental control assessment.
//!
//! [`ClimateControl`] bundles a target [`Envelope`] with the humidity and
//! planner settings, and implements [`twine_core::Model`] by running the full
//! pipeline for one [`Observation`]: derived state, zone, then plan.
//! The computational core is in the internal `core` module.

mod core;
mod series;

pub use self::core::{
    AdjustmentPlan, Band, Envelope, EnvelopeError, PlanError, PlannerConfig, Strategy, Zone,
    ZoneFlags, classify, plan_adjustment,
};
pub use series::{Row, assess_series};

use thiserror::Error;
use twine_core::Model;

use crate::support::humidity::{
    DerivedState, HumidityConfig, HumidityError, Observation, ObservationError,
};

/// Everything known about one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub observation: Observation,
    pub derived: DerivedState,
    pub zone: Zone,
    pub plan: AdjustmentPlan,
}

/// Errors that can occur while assessing an observation.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid observation")]
    Observation(#[from] ObservationError),

    #[error("humidity derivation failed")]
    Humidity(#[from] HumidityError),

    #[error("adjustment planning failed")]
    Plan(#[from] PlanError),
}

/// Assesses observations against a target envelope.
///
/// # Example
///
/// ```
/// use psychro_models::models::environment::{ClimateControl, Zone};
/// use psychro_models::support::humidity::Observation;
///
/// let control = ClimateControl::default();
/// let assessment = control.assess(&Observation::new(10.0, 80.0).unwrap()).unwrap();
///
/// assert_eq!(assessment.zone, Zone::HeatingOnly);
/// assert_eq!(assessment.plan.new_temperature, 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimateControl {
    pub envelope: Envelope,
    pub humidity: HumidityConfig,
    pub planner: PlannerConfig,
}

impl ClimateControl {
    /// Creates a controller for `envelope` with default settings.
    #[must_use]
    pub fn new(envelope: Envelope) -> Self {
        Self {
            envelope,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_humidity(self, humidity: HumidityConfig) -> Self {
        Self { humidity, ..self }
    }

    #[must_use]
    pub fn with_planner(self, planner: PlannerConfig) -> Self {
        Self { planner, ..self }
    }

    /// Runs the full pipeline for one observation.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::Observation`] if the observation fails
    /// validation, and otherwise forwards derivation and planning errors.
    pub fn assess(&self, observation: &Observation) -> Result<Assessment, AssessmentError> {
        observation.validate()?;

        let derived = DerivedState::compute(observation, &self.humidity)?;
        let zone = classify(observation, &self.envelope);
        let plan = plan_adjustment(observation, &self.envelope, zone, &self.planner)?;

        Ok(Assessment {
            observation: *observation,
            derived,
            zone,
            plan,
        })
    }
}

impl Model for ClimateControl {
    type Input = Observation;
    type Output = Assessment;
    type Error = AssessmentError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.assess(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::saturation::SaturationModel;

    #[test]
    fn room_air_needs_nothing() {
        let control = ClimateControl::default()
            .with_humidity(HumidityConfig::default().with_saturation(SaturationModel::Iapws));

        let assessment = control.call(&Observation::new(20.0, 50.0).unwrap()).unwrap();

        assert_eq!(assessment.zone, Zone::Within);
        assert!(assessment.plan.is_unchanged());
        assert_relative_eq!(assessment.derived.dew_point, 9.26, epsilon = 0.01);
        assert_relative_eq!(
            assessment.plan.new_absolute_humidity,
            assessment.derived.absolute_humidity
        );
    }

    #[test]
    fn custom_envelope() {
        let control = ClimateControl::new(Envelope::new(18.0, 22.0, 45.0, 55.0).unwrap());

        let assessment = control.assess(&Observation::new(20.0, 50.0).unwrap()).unwrap();
        assert_eq!(assessment.zone, Zone::Within);

        let assessment = control.assess(&Observation::new(17.0, 50.0).unwrap()).unwrap();
        assert_eq!(assessment.zone, Zone::HeatingOnly);
        assert_eq!(assessment.plan.new_temperature, 18.0);
    }

    #[test]
    fn unchecked_observation_is_rejected() {
        let control = ClimateControl::default();

        let err = control
            .assess(&Observation::new_unchecked(20.0, 140.0))
            .unwrap_err();

        assert!(matches!(err, AssessmentError::Observation(_)));
    }

    #[test]
    fn dry_reading_fails_derivation() {
        let err = ClimateControl::default()
            .assess(&Observation::new(20.0, 0.0).unwrap())
            .unwrap_err();

        assert!(matches!(
            err,
            AssessmentError::Humidity(HumidityError::ZeroHumidity { .. })
        ));
    }
}
