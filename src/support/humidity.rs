//! Humidity derivations from temperature and relative humidity.
//!
//! Every function takes temperature in °C and relative humidity in %, plus a
//! [`HumidityConfig`] where the result depends on the saturation model,
//! dew-point family or ambient pressure. [`DerivedState::compute`] gathers all
//! forward quantities for one [`Observation`].
//!
//! Closed-form inverses are exact to floating-point precision. Inverses with
//! no closed form use a bounded bisection search that returns an error
//! rather than a bracket end when no root exists.

mod absolute;
mod config;
mod dew_point;
mod error;
mod observation;
mod search;
mod state;
mod vapor;

pub use absolute::{
    AbsoluteHumidityCoefficients, absolute_humidity, absolute_humidity_ideal_gas,
    relative_humidity_from_absolute_humidity, temperature_from_absolute_humidity,
    temperature_from_absolute_humidity_within,
};
pub use config::HumidityConfig;
pub use dew_point::{
    DewPointFormula, dew_point, relative_humidity_from_dew_point, temperature_from_dew_point,
};
pub use error::HumidityError;
pub use observation::{Observation, ObservationError};
pub use search::{SearchError, TemperatureSearch};
pub use state::DerivedState;
pub use vapor::{
    air_density, enthalpy, humidity_ratio, mixing_ratio, relative_humidity_from_vapor_pressure,
    saturation_pressure, specific_humidity, vapor_pressure,
};
