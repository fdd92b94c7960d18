use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a float is finite (not `NaN`, not infinite).
///
/// ```
/// use psychro_models::support::constraint::Finite;
///
/// assert!(Finite::new(-12.5).is_ok());
/// assert!(Finite::new(f64::NEG_INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs `Constrained<f64, Finite>` if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for `NaN` and
    /// [`ConstraintError::Infinite`] for either infinity.
    pub fn new(value: f64) -> Result<Constrained<f64, Finite>, ConstraintError> {
        Constrained::<f64, Finite>::new(value)
    }
}

impl Constraint<f64> for Finite {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
        assert_eq!(Finite::new(0.0).map(Constrained::into_inner), Ok(0.0));
    }
}
