use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::hectopascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::SpecificEnthalpy;

use super::{
    HumidityConfig, HumidityError, Observation, absolute_humidity, air_density, dew_point,
    enthalpy, humidity_ratio, mixing_ratio, saturation_pressure, specific_humidity,
    vapor_pressure,
};

/// Every psychrometric quantity derived from one [`Observation`].
///
/// Values are in the units practitioners exchange: hPa, °C, g/m³, g/kg,
/// kg/m³ and kJ/kg. Typed accessors return [`uom`] quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedState {
    /// Saturation vapor pressure, hPa.
    pub saturation_vapor_pressure: f64,
    /// Vapor partial pressure, hPa.
    pub vapor_pressure: f64,
    /// Dew point, °C.
    pub dew_point: f64,
    /// Absolute humidity, g/m³.
    pub absolute_humidity: f64,
    /// Mixing ratio, g/kg.
    pub mixing_ratio: f64,
    /// Humidity ratio, g/kg.
    pub humidity_ratio: f64,
    /// Specific humidity, g/kg.
    pub specific_humidity: f64,
    /// Moist air density, kg/m³.
    pub air_density: f64,
    /// Specific enthalpy, kJ/kg.
    pub enthalpy: f64,
}

impl DerivedState {
    /// Derives the full state of `observation`.
    ///
    /// # Errors
    ///
    /// Returns [`HumidityError::ZeroHumidity`] for a reading at 0 % RH, whose
    /// dew point is undefined, [`HumidityError::VaporExceedsAmbient`] if the
    /// vapor pressure is not below the configured ambient pressure, and
    /// [`HumidityError::NonFinite`] if any quantity evaluates to `NaN` or
    /// infinity.
    ///
    /// # Example
    ///
    /// ```
    /// use psychro_models::support::humidity::{DerivedState, HumidityConfig, Observation};
    ///
    /// let obs = Observation::new(20.0, 50.0).unwrap();
    /// let state = DerivedState::compute(&obs, &HumidityConfig::default()).unwrap();
    ///
    /// assert!((state.dew_point - 9.26).abs() < 0.01);
    /// assert!((state.absolute_humidity - 8.63).abs() < 0.02);
    /// ```
    pub fn compute(
        observation: &Observation,
        config: &HumidityConfig,
    ) -> Result<Self, HumidityError> {
        let t = observation.temperature();
        let rh = observation.relative_humidity();
        let finite = HumidityError::check_finite;

        let pw = finite("vapor pressure", vapor_pressure(t, rh, config))?;
        let pressure = config.pressure_hpa();
        if pw >= pressure {
            return Err(HumidityError::VaporExceedsAmbient {
                vapor_pressure: pw,
                pressure,
            });
        }

        Ok(Self {
            saturation_vapor_pressure: finite(
                "saturation vapor pressure",
                saturation_pressure(t, config),
            )?,
            vapor_pressure: pw,
            dew_point: dew_point(t, rh, config)?,
            absolute_humidity: finite("absolute humidity", absolute_humidity(t, rh))?,
            mixing_ratio: finite("mixing ratio", mixing_ratio(t, rh, config))?,
            humidity_ratio: finite("humidity ratio", humidity_ratio(t, rh, config))?,
            specific_humidity: finite("specific humidity", specific_humidity(t, rh, config))?,
            air_density: finite("air density", air_density(t, rh, config))?,
            enthalpy: finite("enthalpy", enthalpy(t, rh, config))?,
        })
    }

    #[must_use]
    pub fn saturation_vapor_pressure_quantity(&self) -> Pressure {
        Pressure::new::<hectopascal>(self.saturation_vapor_pressure)
    }

    #[must_use]
    pub fn vapor_pressure_quantity(&self) -> Pressure {
        Pressure::new::<hectopascal>(self.vapor_pressure)
    }

    #[must_use]
    pub fn dew_point_quantity(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.dew_point)
    }

    #[must_use]
    pub fn air_density_quantity(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(self.air_density)
    }

    #[must_use]
    pub fn enthalpy_quantity(&self) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<kilojoule_per_kilogram>(self.enthalpy)
    }
}
