//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own (for example,
//! deriving humidity quantities without classifying them), but their APIs are
//! not stable.

pub mod constraint;
pub mod humidity;
pub mod ideal_gas;
pub mod saturation;
pub mod units;
