use std::fmt;

use crate::support::humidity::{
    Observation, absolute_humidity, relative_humidity_from_absolute_humidity,
};

use super::Envelope;

/// Position of a value relative to an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Below,
    Within,
    Above,
}

impl Band {
    /// Places `value` relative to `[low, high]`.
    ///
    /// `NaN` compares as neither below nor above and lands in `Within`, so
    /// callers screen it out first.
    #[must_use]
    pub fn of(value: f64, low: f64, high: f64) -> Self {
        if value < low {
            Self::Below
        } else if value > high {
            Self::Above
        } else {
            Self::Within
        }
    }
}

/// The three placements that decide a [`Zone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneFlags {
    /// Temperature against the envelope's temperature range.
    pub temperature: Band,

    /// Relative humidity against the envelope's RH range.
    pub humidity: Band,

    /// Relative humidity against the two corner moisture curves.
    ///
    /// Each curve holds absolute humidity at one diagonal corner of the
    /// envelope; its RH is re-derived at the observation's temperature.
    /// `Below` means drier than the dry corner, `Above` wetter than the
    /// humid corner.
    pub moisture: Band,
}

impl ZoneFlags {
    /// Computes the flags for `observation` against `envelope`.
    #[must_use]
    pub fn of(observation: &Observation, envelope: &Envelope) -> Self {
        let t = observation.temperature();
        let rh = observation.relative_humidity();

        let dry_curve =
            relative_humidity_from_absolute_humidity(t, envelope.dry_corner_absolute_humidity());
        let humid_curve =
            relative_humidity_from_absolute_humidity(t, envelope.humid_corner_absolute_humidity());

        Self {
            temperature: Band::of(t, envelope.low_temp(), envelope.high_temp()),
            humidity: Band::of(rh, envelope.low_rh(), envelope.high_rh()),
            moisture: Band::of(rh, dry_curve, humid_curve),
        }
    }
}

/// Corrective action needed to bring an observation into an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Within,
    HeatingOnly,
    DehumidifyOrHeating,
    DehumidifyOnly,
    HumidifyOnly,
    CoolingAndDehumidify,
    HeatingAndHumidify,
    HeatingAndDehumidify,
    HumidifyOrCooling,
    CoolingOnly,
    CoolingAndHumidify,
    /// The flags contradict each other, or the reading is not finite.
    ///
    /// Contradictory flags are unreachable for a valid envelope.
    Undetermined,
}

impl Zone {
    /// Maps a set of flags to a zone.
    ///
    /// Arms are tried in order and the first match wins.
    #[must_use]
    pub fn from_flags(flags: ZoneFlags) -> Self {
        use Band::{Above, Below, Within};

        match (flags.temperature, flags.humidity, flags.moisture) {
            (Within, Within, _) => Self::Within,

            (Within, Above, Within) => Self::DehumidifyOrHeating,
            (Within, Above, Above) => Self::DehumidifyOnly,
            (Within, Below, Within) => Self::HumidifyOrCooling,
            (Within, Below, Below) => Self::HumidifyOnly,
            (Within, _, _) => Self::Undetermined,

            (Below, _, Below) => Self::HeatingAndHumidify,
            (Below, _, Above) => Self::HeatingAndDehumidify,
            (Below, _, Within) => Self::HeatingOnly,

            (Above, _, Below) => Self::CoolingAndHumidify,
            (Above, _, Above) => Self::CoolingAndDehumidify,
            (Above, _, Within) => Self::CoolingOnly,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Within => "Within",
            Self::HeatingOnly => "Heating only",
            Self::DehumidifyOrHeating => "Dehumidify or heating",
            Self::DehumidifyOnly => "Dehumidify only",
            Self::HumidifyOnly => "Humidify only",
            Self::CoolingAndDehumidify => "Cooling and dehumidify",
            Self::HeatingAndHumidify => "Heating and humidify",
            Self::HeatingAndDehumidify => "Heating and dehumidify",
            Self::HumidifyOrCooling => "Humidify or cooling",
            Self::CoolingOnly => "Cooling only",
            Self::CoolingAndHumidify => "Cooling and humidify",
            Self::Undetermined => "Undetermined",
        };
        f.write_str(label)
    }
}

/// Classifies `observation` against `envelope`.
///
/// A reading with a non-finite temperature or humidity is
/// [`Zone::Undetermined`].
///
/// # Example
///
/// ```
/// use psychro_models::models::environment::{Envelope, Zone, classify};
/// use psychro_models::support::humidity::Observation;
///
/// let cold = Observation::new(10.0, 80.0).unwrap();
/// assert_eq!(classify(&cold, &Envelope::default()), Zone::HeatingOnly);
/// ```
#[must_use]
pub fn classify(observation: &Observation, envelope: &Envelope) -> Zone {
    if !observation.temperature().is_finite() || !observation.relative_humidity().is_finite() {
        return Zone::Undetermined;
    }
    Zone::from_flags(ZoneFlags::of(observation, envelope))
}

/// Absolute humidity, g/m³, of `observation`.
pub(crate) fn observed_absolute_humidity(observation: &Observation) -> f64 {
    absolute_humidity(observation.temperature(), observation.relative_humidity())
}
