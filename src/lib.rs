//! # Psychro Models
//!
//! Psychrometric state derivation and environmental-control planning built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations, such as
//!   [`models::environment::ClimateControl`].
//! - [`support`]: Supporting utilities used by models, including the saturation
//!   pressure formulations and the humidity derivation engine.
//!
//! ## Pipeline
//!
//! Each observation flows through a straight-line pipeline:
//!
//! 1. [`support::saturation`] computes saturation vapor pressure.
//! 2. [`support::humidity`] derives dew point, absolute humidity, mixing ratio,
//!    enthalpy, and related quantities.
//! 3. [`models::environment::classify`] places the observation in a [`Zone`]
//!    relative to a target [`Envelope`].
//! 4. [`models::environment::plan_adjustment`] computes the temperature and
//!    absolute humidity that bring the observation back onto the envelope.
//!
//! Every step is a pure function of its inputs, so observations can be
//! processed independently and in any order.
//!
//! [`Zone`]: models::environment::Zone
//! [`Envelope`]: models::environment::Envelope

pub mod models;
pub mod support;
