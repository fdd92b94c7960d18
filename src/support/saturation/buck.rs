/// Coefficients of a Buck-type saturation curve.
///
/// `es = a·exp((b − T/d)·(T/(c + T)))`, with `T` in °C and `es` in hPa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuckCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl BuckCoefficients {
    /// Saturation over liquid water.
    pub const WATER: Self = Self {
        a: 6.1121,
        b: 18.678,
        c: 257.14,
        d: 234.5,
    };

    /// Saturation over ice.
    pub const ICE: Self = Self {
        a: 6.1115,
        b: 23.036,
        c: 279.82,
        d: 333.7,
    };

    /// Selects the water branch at or above 0 °C and the ice branch below.
    ///
    /// The switch is a hard step, not a blend, matching the published
    /// reference equations.
    #[must_use]
    pub fn for_temperature(temp_c: f64) -> Self {
        if temp_c >= 0.0 { Self::WATER } else { Self::ICE }
    }

    /// Exponent `(b − T/d)·(T/(c + T))`.
    #[must_use]
    pub fn exponent(&self, temp_c: f64) -> f64 {
        (self.b - temp_c / self.d) * (temp_c / (self.c + temp_c))
    }

    /// Saturation vapor pressure in hPa.
    #[must_use]
    pub fn pressure(&self, temp_c: f64) -> f64 {
        self.a * self.exponent(temp_c).exp()
    }
}
