//! Zone classification and adjustment planning against a target envelope.
//!
//! Moist air moves between states along lines of constant absolute humidity
//! when only its temperature changes. The classifier therefore compares a
//! reading both with the envelope's box and with the two constant-moisture
//! curves through the envelope's dry and humid corners. The planner then
//! picks which of temperature or moisture to move, and how far.

mod envelope;
mod plan;
mod zone;

pub use envelope::{Envelope, EnvelopeError};
pub use plan::{AdjustmentPlan, PlanError, PlannerConfig, Strategy, plan_adjustment};
pub use zone::{Band, Zone, ZoneFlags, classify};
