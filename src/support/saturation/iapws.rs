use super::KELVIN_OFFSET;

/// Coefficients of the IAPWS reduced-temperature saturation series.
///
/// `es = Pc·exp((Tc/T)·(C1·v + C2·v^1.5 + C3·v^3 + C4·v^3.5 + C5·v^4 + C6·v^7.5))`
/// with `v = 1 − T/Tc` and `T` in kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IapwsCoefficients {
    /// Critical temperature, K.
    pub critical_temperature: f64,
    /// Critical pressure, hPa.
    pub critical_pressure: f64,
    pub c: [f64; 6],
}

impl IapwsCoefficients {
    pub const STANDARD: Self = Self {
        critical_temperature: 647.096,
        critical_pressure: 220_640.0,
        c: [
            -7.859_517_83,
            1.844_082_59,
            -11.786_649_7,
            22.680_741_1,
            -15.961_871_9,
            1.801_225_02,
        ],
    };

    /// Saturation vapor pressure in hPa.
    #[must_use]
    pub fn pressure(&self, temp_c: f64) -> f64 {
        let t = temp_c + KELVIN_OFFSET;
        let tc = self.critical_temperature;
        let v = 1.0 - t / tc;
        let [c1, c2, c3, c4, c5, c6] = self.c;

        let series = c1 * v
            + c2 * v.powf(1.5)
            + c3 * v.powi(3)
            + c4 * v.powf(3.5)
            + c5 * v.powi(4)
            + c6 * v.powf(7.5);

        self.critical_pressure * ((tc / t) * series).exp()
    }
}
