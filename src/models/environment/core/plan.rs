use thiserror::Error;

use crate::support::humidity::{
    HumidityError, Observation, TemperatureSearch, absolute_humidity,
    relative_humidity_from_absolute_humidity, temperature_from_absolute_humidity_within,
};

use super::{Envelope, Zone, zone::observed_absolute_humidity};

/// Distance, in % RH, that a snapped point is pulled inside an RH bound.
const SNAP_INSET: f64 = 1e-9;

/// Which variable to move when a zone allows either.
///
/// Applies to [`Zone::DehumidifyOrHeating`] and [`Zone::HumidifyOrCooling`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Change temperature and hold absolute humidity.
    #[default]
    Temperature,
    /// Change absolute humidity and hold temperature.
    Moisture,
}

/// Configuration for [`plan_adjustment`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlannerConfig {
    pub strategy: Strategy,

    /// Solver settings for temperature moves that stop on an RH bound.
    ///
    /// The bracket is always the relevant part of the envelope's temperature
    /// range, so `search.bracket` is ignored.
    pub search: TemperatureSearch,
}

impl PlannerConfig {
    #[must_use]
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    #[must_use]
    pub fn with_search(self, search: TemperatureSearch) -> Self {
        Self { search, ..self }
    }
}

/// Target state for a space and the change needed to reach it.
///
/// Temperatures are in °C, absolute humidities in g/m³ and relative
/// humidities in %. Deltas are `new - observed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentPlan {
    pub new_temperature: f64,
    pub new_absolute_humidity: f64,
    pub new_relative_humidity: f64,
    pub delta_temperature: f64,
    pub delta_absolute_humidity: f64,
    pub delta_relative_humidity: f64,
}

impl AdjustmentPlan {
    fn unchanged(temperature: f64, absolute_humidity: f64, relative_humidity: f64) -> Self {
        Self {
            new_temperature: temperature,
            new_absolute_humidity: absolute_humidity,
            new_relative_humidity: relative_humidity,
            delta_temperature: 0.0,
            delta_absolute_humidity: 0.0,
            delta_relative_humidity: 0.0,
        }
    }

    /// The planned state as an observation.
    #[must_use]
    pub fn target(&self) -> Observation {
        Observation::new_unchecked(self.new_temperature, self.new_relative_humidity)
    }

    /// Returns `true` if the plan changes nothing.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.delta_temperature == 0.0 && self.delta_absolute_humidity == 0.0
    }
}

/// Errors that can occur while planning an adjustment.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no adjustment is defined for an undetermined zone")]
    Undetermined,

    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },

    #[error("humidity derivation failed")]
    Humidity(#[from] HumidityError),
}

/// Plans the move that brings `observation` into `envelope`.
///
/// `zone` is normally the result of [`classify`](super::classify) for the same
/// pair. Each zone has a fixed move:
///
/// | Zone | Temperature | Absolute humidity |
/// |---|---|---|
/// | `Within` | held | held |
/// | `HeatingOnly`, `CoolingOnly` | to the nearest bound, stopping on an RH bound | held |
/// | `DehumidifyOnly`, `HumidifyOnly` | held | to the nearest RH bound |
/// | `Heating…`/`Cooling…` with humidity change | to the temperature bound | to the RH bound at that temperature |
/// | `DehumidifyOrHeating`, `HumidifyOrCooling` | per [`Strategy`] | per [`Strategy`] |
///
/// The result is snapped inside the envelope so that classifying
/// [`AdjustmentPlan::target`] yields [`Zone::Within`].
///
/// # Errors
///
/// Returns [`PlanError::Undetermined`] for [`Zone::Undetermined`],
/// [`PlanError::Humidity`] if a temperature search fails, and
/// [`PlanError::NonFinite`] if the observation carries non-finite values.
///
/// # Example
///
/// ```
/// use psychro_models::models::environment::{
///     Envelope, PlannerConfig, Zone, classify, plan_adjustment,
/// };
/// use psychro_models::support::humidity::Observation;
///
/// let obs = Observation::new(10.0, 80.0).unwrap();
/// let envelope = Envelope::default();
/// let zone = classify(&obs, &envelope);
///
/// let plan = plan_adjustment(&obs, &envelope, zone, &PlannerConfig::default()).unwrap();
/// assert_eq!(plan.new_temperature, 16.0);
/// assert_eq!(plan.delta_absolute_humidity, 0.0);
/// ```
pub fn plan_adjustment(
    observation: &Observation,
    envelope: &Envelope,
    zone: Zone,
    config: &PlannerConfig,
) -> Result<AdjustmentPlan, PlanError> {
    let t = finite("temperature", observation.temperature())?;
    let rh = finite("relative humidity", observation.relative_humidity())?;
    let ah = observed_absolute_humidity(observation);

    let (lt, ht) = (envelope.low_temp(), envelope.high_temp());
    let (lr, hr) = (envelope.low_rh(), envelope.high_rh());
    let search = &config.search;

    let (new_t, new_ah) = match (zone, config.strategy) {
        (Zone::Within, _) => return Ok(AdjustmentPlan::unchanged(t, ah, rh)),
        (Zone::Undetermined, _) => return Err(PlanError::Undetermined),

        (Zone::HeatingOnly, _) => (warm_to(ah, hr, [lt, ht], search)?, ah),
        (Zone::CoolingOnly, _) => (cool_to(ah, lr, [lt, ht], search)?, ah),
        (Zone::DehumidifyOrHeating, Strategy::Temperature) => {
            (warm_to(ah, hr, [t, ht], search)?, ah)
        }
        (Zone::HumidifyOrCooling, Strategy::Temperature) => {
            (cool_to(ah, lr, [lt, t], search)?, ah)
        }

        (Zone::DehumidifyOnly | Zone::DehumidifyOrHeating, _) => (t, absolute_humidity(t, hr)),
        (Zone::HumidifyOnly | Zone::HumidifyOrCooling, _) => (t, absolute_humidity(t, lr)),

        (Zone::HeatingAndHumidify, _) => (lt, absolute_humidity(lt, lr)),
        (Zone::HeatingAndDehumidify, _) => (lt, absolute_humidity(lt, hr)),
        (Zone::CoolingAndHumidify, _) => (ht, absolute_humidity(ht, lr)),
        (Zone::CoolingAndDehumidify, _) => (ht, absolute_humidity(ht, hr)),
    };

    let (new_t, new_ah, new_rh) = snap_into(envelope, new_t, new_ah)?;

    Ok(AdjustmentPlan {
        new_temperature: new_t,
        new_absolute_humidity: new_ah,
        new_relative_humidity: new_rh,
        delta_temperature: new_t - t,
        delta_absolute_humidity: new_ah - ah,
        delta_relative_humidity: new_rh - rh,
    })
}

/// Lowest temperature in `range` at which air holding `ah` is at or below `max_rh`.
fn warm_to(
    ah: f64,
    max_rh: f64,
    range: [f64; 2],
    search: &TemperatureSearch,
) -> Result<f64, PlanError> {
    let [low, high] = range;
    if relative_humidity_from_absolute_humidity(low, ah) <= max_rh {
        return Ok(low);
    }
    if relative_humidity_from_absolute_humidity(high, ah) >= max_rh {
        return Ok(high);
    }
    Ok(temperature_from_absolute_humidity_within(ah, max_rh, range, search)?)
}

/// Highest temperature in `range` at which air holding `ah` is at or above `min_rh`.
fn cool_to(
    ah: f64,
    min_rh: f64,
    range: [f64; 2],
    search: &TemperatureSearch,
) -> Result<f64, PlanError> {
    let [low, high] = range;
    if relative_humidity_from_absolute_humidity(high, ah) >= min_rh {
        return Ok(high);
    }
    if relative_humidity_from_absolute_humidity(low, ah) <= min_rh {
        return Ok(low);
    }
    Ok(temperature_from_absolute_humidity_within(ah, min_rh, range, search)?)
}

/// Clamps a planned point into `envelope`, returning `(t, ah, rh)`.
///
/// Search tolerance and round-off can leave a point a hair outside an RH
/// bound; such points are moved onto the bound at the same temperature.
fn snap_into(envelope: &Envelope, t: f64, ah: f64) -> Result<(f64, f64, f64), PlanError> {
    let (lr, hr) = (envelope.low_rh(), envelope.high_rh());
    let inset = SNAP_INSET.min((hr - lr) / 2.0);

    let t = finite("temperature", t)?.clamp(envelope.low_temp(), envelope.high_temp());
    let mut ah = finite("absolute humidity", ah)?;
    let mut rh = relative_humidity_from_absolute_humidity(t, ah);

    if rh > hr {
        ah = absolute_humidity(t, hr - inset);
        rh = relative_humidity_from_absolute_humidity(t, ah);
    } else if rh < lr {
        ah = absolute_humidity(t, lr + inset);
        rh = relative_humidity_from_absolute_humidity(t, ah);
    }

    Ok((t, ah, finite("relative humidity", rh)?))
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, PlanError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlanError::NonFinite { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::environment::classify;

    fn plan_for(t: f64, rh: f64, config: &PlannerConfig) -> (Zone, AdjustmentPlan) {
        let obs = Observation::new(t, rh).unwrap();
        let envelope = Envelope::default();
        let zone = classify(&obs, &envelope);
        (zone, plan_adjustment(&obs, &envelope, zone, config).unwrap())
    }

    #[test]
    fn within_changes_nothing() {
        let (zone, plan) = plan_for(20.0, 50.0, &PlannerConfig::default());

        assert_eq!(zone, Zone::Within);
        assert!(plan.is_unchanged());
        assert_eq!(plan.delta_relative_humidity, 0.0);
        assert_eq!(plan.new_temperature, 20.0);
        assert_eq!(plan.new_relative_humidity, 50.0);
    }

    #[test]
    fn heating_holds_moisture() {
        let (zone, plan) = plan_for(10.0, 80.0, &PlannerConfig::default());

        assert_eq!(zone, Zone::HeatingOnly);
        assert_eq!(plan.new_temperature, 16.0);
        assert_relative_eq!(plan.delta_temperature, 6.0);
        assert_eq!(plan.delta_absolute_humidity, 0.0);
        assert_relative_eq!(plan.new_relative_humidity, 55.2, epsilon = 0.1);
    }

    #[test]
    fn heating_stops_on_the_high_rh_bound() {
        // Warming 15 °C/90 % air to 16 °C still leaves it near 85 % RH.
        let (zone, plan) = plan_for(15.0, 90.0, &PlannerConfig::default());

        assert_eq!(zone, Zone::HeatingOnly);
        assert!(plan.new_temperature > 16.0 && plan.new_temperature < 25.0);
        assert_relative_eq!(plan.new_relative_humidity, 60.0, epsilon = 1e-6);
        assert!(plan.delta_absolute_humidity.abs() < 1e-6);
    }

    #[test]
    fn cooling_holds_moisture() {
        let (zone, plan) = plan_for(30.0, 40.0, &PlannerConfig::default());

        assert_eq!(zone, Zone::CoolingOnly);
        assert_eq!(plan.new_temperature, 25.0);
        assert_eq!(plan.delta_absolute_humidity, 0.0);
        assert!(plan.new_relative_humidity > 40.0 && plan.new_relative_humidity < 60.0);
    }

    #[test]
    fn strategy_resolves_either_or_zones() {
        let by_temperature = PlannerConfig::default();
        let by_moisture = PlannerConfig::default().with_strategy(Strategy::Moisture);

        let (zone, warm) = plan_for(20.0, 70.0, &by_temperature);
        assert_eq!(zone, Zone::DehumidifyOrHeating);
        assert!(warm.delta_temperature > 0.0);
        assert!(warm.delta_absolute_humidity.abs() < 1e-6);
        assert_relative_eq!(warm.new_relative_humidity, 60.0, epsilon = 1e-6);

        let (_, dry) = plan_for(20.0, 70.0, &by_moisture);
        assert_eq!(dry.delta_temperature, 0.0);
        assert!(dry.delta_absolute_humidity < 0.0);
        assert_relative_eq!(dry.new_relative_humidity, 60.0, epsilon = 1e-6);

        let (zone, cool) = plan_for(20.0, 35.0, &by_temperature);
        assert_eq!(zone, Zone::HumidifyOrCooling);
        assert!(cool.delta_temperature < 0.0);
        assert_relative_eq!(cool.new_relative_humidity, 40.0, epsilon = 1e-6);

        let (_, wet) = plan_for(20.0, 35.0, &by_moisture);
        assert_eq!(wet.delta_temperature, 0.0);
        assert!(wet.delta_absolute_humidity > 0.0);
    }

    #[test]
    fn corner_moves() {
        let config = PlannerConfig::default();

        let (zone, humid) = plan_for(30.0, 90.0, &config);
        assert_eq!(zone, Zone::CoolingAndDehumidify);
        assert_eq!(humid.new_temperature, 25.0);
        assert_relative_eq!(humid.new_relative_humidity, 60.0, epsilon = 1e-6);

        let (zone, dry) = plan_for(5.0, 20.0, &config);
        assert_eq!(zone, Zone::HeatingAndHumidify);
        assert_eq!(dry.new_temperature, 16.0);
        assert_relative_eq!(dry.new_relative_humidity, 40.0, epsilon = 1e-6);
    }

    #[test]
    fn undetermined_zone_has_no_plan() {
        let obs = Observation::new(20.0, 50.0).unwrap();

        let err = plan_adjustment(
            &obs,
            &Envelope::default(),
            Zone::Undetermined,
            &PlannerConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PlanError::Undetermined));
    }

    #[test]
    fn non_finite_readings_are_rejected() {
        let envelope = Envelope::default();
        let config = PlannerConfig::default();

        for obs in [
            Observation::new_unchecked(f64::NAN, 50.0),
            Observation::new_unchecked(20.0, f64::NAN),
        ] {
            let zone = classify(&obs, &envelope);
            assert_eq!(zone, Zone::Undetermined);

            // Even a caller-supplied `Within` must not pass NaN through.
            let err = plan_adjustment(&obs, &envelope, Zone::Within, &config).unwrap_err();
            assert!(matches!(err, PlanError::NonFinite { .. }));
        }
    }

    #[test]
    fn planned_state_is_within_envelope() {
        let envelope = Envelope::default();
        for strategy in [Strategy::Temperature, Strategy::Moisture] {
            let config = PlannerConfig::default().with_strategy(strategy);
            for ti in 0..=60 {
                let t = f64::from(ti);
                for rhi in 0..=50 {
                    let rh = f64::from(rhi) * 2.0;
                    let obs = Observation::new(t, rh).unwrap();
                    let zone = classify(&obs, &envelope);

                    let plan = plan_adjustment(&obs, &envelope, zone, &config).unwrap();

                    assert_eq!(
                        classify(&plan.target(), &envelope),
                        Zone::Within,
                        "{t} °C, {rh} % ({zone}) planned to {plan:?}"
                    );
                }
            }
        }
    }
}
