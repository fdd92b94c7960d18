use uom::si::{f64::Pressure, pressure::hectopascal};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    saturation::{STANDARD_PRESSURE_HPA, SaturationModel},
};

use super::{DewPointFormula, TemperatureSearch};

/// Configuration threaded through every humidity derivation.
///
/// The saturation model and dew-point formula are separate settings because
/// they answer different questions: the saturation model sets vapor pressure,
/// while the dew-point formula picks the closed-form inversion family. A chain
/// of calculations only round-trips if it uses one `HumidityConfig`
/// throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidityConfig {
    /// Saturation vapor pressure formulation.
    pub saturation: SaturationModel,

    /// Closed-form dew-point family used for dew point and its inverses.
    pub dew_point: DewPointFormula,

    /// Ambient atmospheric pressure.
    pub pressure: Pressure,

    /// Settings for inverses that require a numerical search.
    pub search: TemperatureSearch,
}

impl Default for HumidityConfig {
    fn default() -> Self {
        Self {
            saturation: SaturationModel::default(),
            dew_point: DewPointFormula::default(),
            pressure: Pressure::new::<hectopascal>(STANDARD_PRESSURE_HPA),
            search: TemperatureSearch::default(),
        }
    }
}

impl HumidityConfig {
    /// Returns a copy using the given saturation model.
    #[must_use]
    pub fn with_saturation(self, saturation: SaturationModel) -> Self {
        Self { saturation, ..self }
    }

    /// Returns a copy using the given dew-point formula.
    #[must_use]
    pub fn with_dew_point(self, dew_point: DewPointFormula) -> Self {
        Self { dew_point, ..self }
    }

    /// Returns a copy using the given search settings.
    #[must_use]
    pub fn with_search(self, search: TemperatureSearch) -> Self {
        Self { search, ..self }
    }

    /// Returns a copy using the given ambient pressure.
    ///
    /// # Errors
    ///
    /// Returns an error if `pressure` is not strictly positive.
    pub fn with_pressure(self, pressure: Pressure) -> Result<Self, ConstraintError> {
        let pressure = Constrained::<Pressure, StrictlyPositive>::new(pressure)?;
        Ok(Self {
            pressure: pressure.into_inner(),
            ..self
        })
    }

    /// Ambient pressure in hPa.
    #[must_use]
    pub fn pressure_hpa(&self) -> f64 {
        self.pressure.get::<hectopascal>()
    }
}
