use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the closed interval `0 ≤ x ≤ 100`.
///
/// Relative humidity is carried as a percentage throughout this crate, so the
/// bounds are expressed in percent rather than as a unit fraction.
///
/// # Examples
///
/// ```
/// use psychro_models::support::constraint::{ConstraintError, Percentage};
///
/// assert_eq!(Percentage::new(55.0).unwrap().into_inner(), 55.0);
/// assert!(Percentage::new(0.0).is_ok());
/// assert!(Percentage::new(100.0).is_ok());
///
/// assert_eq!(Percentage::new(-0.5), Err(ConstraintError::BelowMinimum));
/// assert_eq!(Percentage::new(100.5), Err(ConstraintError::AboveMaximum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage;

impl Percentage {
    /// Constructs `Constrained<f64, Percentage>` if 0 ≤ value ≤ 100.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one hundred.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new(value: f64) -> Result<Constrained<f64, Percentage>, ConstraintError> {
        Constrained::<f64, Percentage>::new(value)
    }
}

impl Constraint<f64> for Percentage {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&100.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
