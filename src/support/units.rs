//! Extensions to [`uom`].
//!
//! The numeric core of this crate works on plain `f64` values in the units
//! practitioners exchange between tools (°C, %, hPa, g/m³, g/kg, kg/m³, kJ/kg).
//! Typed accessors convert those values to [`uom`] quantities, and this module
//! supplies the quantities [`uom`] does not name directly.

mod quantities;

pub use quantities::{SpecificEnthalpy, SpecificGasConstant};
