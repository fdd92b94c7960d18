use super::KELVIN_OFFSET;

/// Coefficients of the Hyland–Wexler saturation series used by Vaisala.
///
/// `ln es[Pa] = k[0]/T + k[1] + k[2]·T + k[3]·T² + k[4]·T³ + k[5]·T⁴ + ln_coefficient·ln T`
/// with `T` in kelvin. The water branch has no `T⁴` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HylandWexlerCoefficients {
    pub k: [f64; 6],
    pub ln_coefficient: f64,
}

impl HylandWexlerCoefficients {
    /// Saturation over ice, 173.15 K to 273.15 K.
    pub const ICE: Self = Self {
        k: [
            -5.674_535_9e3,
            6.392_524_7,
            -9.677_843e-3,
            6.221_570_1e-7,
            2.074_782_5e-9,
            -9.484_024e-13,
        ],
        ln_coefficient: 4.163_501_9,
    };

    /// Saturation over liquid water, 273.15 K to 473.15 K.
    pub const WATER: Self = Self {
        k: [
            -5.800_220_6e3,
            1.391_499_3,
            -4.864_023_9e-2,
            4.176_476_8e-5,
            -1.445_209_3e-8,
            0.0,
        ],
        ln_coefficient: 6.545_967_3,
    };

    /// Selects the water branch at or above 0 °C and the ice branch below.
    #[must_use]
    pub fn for_temperature(temp_c: f64) -> Self {
        if temp_c >= 0.0 { Self::WATER } else { Self::ICE }
    }

    /// Saturation vapor pressure in hPa.
    #[must_use]
    pub fn pressure(&self, temp_c: f64) -> f64 {
        let t = temp_c + KELVIN_OFFSET;
        let [k0, k1, k2, k3, k4, k5] = self.k;

        let ln_pa = k0 / t
            + k1
            + k2 * t
            + k3 * t.powi(2)
            + k4 * t.powi(3)
            + k5 * t.powi(4)
            + self.ln_coefficient * t.ln();

        ln_pa.exp() / 100.0
    }
}
