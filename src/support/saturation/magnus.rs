/// Coefficients of a Magnus-type saturation curve.
///
/// `es = a·exp(b·T/(c + T))`, with `T` in °C and `es` in hPa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnusCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl MagnusCoefficients {
    /// Alduchov & Eskridge (1996) coefficients over water.
    pub const STANDARD: Self = Self {
        a: 6.1094,
        b: 17.625,
        c: 243.04,
    };

    /// Exponent `b·T/(c + T)`.
    #[must_use]
    pub fn exponent(&self, temp_c: f64) -> f64 {
        self.b * temp_c / (self.c + temp_c)
    }

    /// Saturation vapor pressure in hPa at standard atmospheric pressure.
    #[must_use]
    pub fn pressure(&self, temp_c: f64) -> f64 {
        self.a * self.exponent(temp_c).exp()
    }
}
