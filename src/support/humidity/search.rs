//! Bounded temperature search.
//!
//! A few inverse problems (the Buck dew-point inverse, temperature at a fixed
//! absolute humidity) have no closed form. They are solved here by bisection
//! over a fixed bracket with a hard iteration cap.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

/// Solver configuration for temperature searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSearch {
    /// Default search bracket, °C.
    pub bracket: [f64; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on temperature, °C.
    pub temp_tol: f64,

    /// Absolute tolerance on the residual, in the residual's own unit.
    pub residual_tol: f64,
}

impl Default for TemperatureSearch {
    fn default() -> Self {
        Self {
            bracket: [-40.0, 60.0],
            max_iters: 100,
            temp_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl TemperatureSearch {
    /// Returns a copy of this configuration with a different default bracket.
    #[must_use]
    pub fn with_bracket(self, lower: f64, upper: f64) -> Self {
        Self {
            bracket: [lower, upper],
            ..self
        }
    }

    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}

/// Errors that can occur during a temperature search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The residual has the same sign at both ends of the bracket.
    #[error(
        "no root in [{lower} °C, {upper} °C]: residuals {lower_residual} and {upper_residual}"
    )]
    NoRoot {
        lower: f64,
        upper: f64,
        lower_residual: f64,
        upper_residual: f64,
    },

    /// The residual could not be evaluated at a bracket end.
    #[error("residual is not finite at {temperature} °C")]
    NonFinite { temperature: f64 },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("search hit iteration limit: residual={residual}")]
    MaxIters {
        /// Smallest absolute residual encountered.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Finds the temperature in `bracket` (°C) at which `residual` crosses zero.
///
/// `residual` must be continuous over the bracket. Exact zeros at either end
/// are returned without iterating.
///
/// # Errors
///
/// Returns [`SearchError::NoRoot`] when the bracket does not straddle a root,
/// rather than returning a bracket end.
pub(crate) fn find_temperature<F>(
    residual: F,
    bracket: [f64; 2],
    search: &TemperatureSearch,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> f64,
{
    let [lower, upper] = bracket;
    let lower_residual = residual(lower);
    let upper_residual = residual(upper);

    if !lower_residual.is_finite() {
        return Err(SearchError::NonFinite { temperature: lower });
    }
    if !upper_residual.is_finite() {
        return Err(SearchError::NonFinite { temperature: upper });
    }
    if lower_residual == 0.0 {
        return Ok(lower);
    }
    if upper_residual == 0.0 {
        return Ok(upper);
    }
    if lower_residual.signum() == upper_residual.signum() {
        return Err(SearchError::NoRoot {
            lower,
            upper,
            lower_residual,
            upper_residual,
        });
    }

    let model = ResidualModel { residual };

    let solution = bisection::solve(
        &model,
        &ResidualProblem,
        bracket,
        &search.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A non-finite sample lies outside the formula's usable range.
            // Steer bisection back toward the finite end of the bracket.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SearchError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    log::debug!(
        "temperature search converged in {} iterations (residual {:e})",
        solution.iters,
        solution.residual
    );

    Ok(solution.snapshot.output.temperature)
}

/// A single residual evaluation.
#[derive(Debug, Clone, Copy)]
struct Sample {
    temperature: f64,
    residual: f64,
}

#[derive(Debug, Error)]
#[error("residual is not finite at {temperature} °C")]
struct NonFiniteSample {
    temperature: f64,
}

/// Model adapter exposing temperature as the sole input variable.
struct ResidualModel<F> {
    residual: F,
}

impl<F> Model for ResidualModel<F>
where
    F: Fn(f64) -> f64,
{
    type Input = ThermodynamicTemperature;
    type Output = Sample;
    type Error = NonFiniteSample;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let temperature = input.get::<degree_celsius>();
        let residual = (self.residual)(temperature);
        if residual.is_finite() {
            Ok(Sample {
                temperature,
                residual,
            })
        } else {
            Err(NonFiniteSample { temperature })
        }
    }
}

/// Equation problem whose residual is the sample's own residual.
struct ResidualProblem;

impl EquationProblem<1> for ResidualProblem {
    type Input = ThermodynamicTemperature;
    type Output = Sample;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
