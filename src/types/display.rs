// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display precision and the presentation rounding rule

use serde::{Deserialize, Serialize};

/// Number of fractional digits kept when rounding a value for presentation
///
/// Rounding is lossy and exists for UI output only. Never feed a rounded
/// value back into amount arithmetic.
///
/// # Examples
///
/// ```
/// use tokenunits::DisplayPrecision;
///
/// let precision = DisplayPrecision::default();
/// assert_eq!(precision.as_u32(), 5);
/// assert_eq!(precision.round(1.2345678), 1.23457);
/// assert_eq!(DisplayPrecision::new(2).round(-2.3456), -2.35);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPrecision(u32);

impl DisplayPrecision {
    /// Five fractional digits, used for balances and fiat values
    pub const DEFAULT: Self = Self(5);

    /// Create a new display precision
    pub const fn new(digits: u32) -> Self {
        Self(digits)
    }

    /// Get the inner u32 value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Round `value` to this many fractional digits
    ///
    /// Halves round away from zero. A non-finite result (NaN, or a value past
    /// the `f64` range) becomes `0.0`, so it never renders as `NaN` or `inf`.
    /// Negative zero is returned as `0.0` so it never renders as `-0`.
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10_f64.powi(i32::try_from(self.0).unwrap_or(i32::MAX));
        let scaled = value * factor;
        // Beyond f64 resolution there is nothing left to round.
        let rounded = if scaled.is_finite() {
            scaled.round() / factor
        } else {
            value
        };

        if !rounded.is_finite() {
            tracing::warn!(
                value = value,
                precision = self.0,
                "Display rounding produced a non-finite value, using 0.0"
            );
            return 0.0;
        }
        if rounded == 0.0 {
            return 0.0;
        }
        rounded
    }
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for DisplayPrecision {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DisplayPrecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} digits", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        assert_eq!(DisplayPrecision::default(), DisplayPrecision::new(5));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let precision = DisplayPrecision::new(0);
        assert_eq!(precision.round(2.5), 3.0);
        assert_eq!(precision.round(-2.5), -3.0);
        assert_eq!(precision.round(2.4), 2.0);
    }

    #[test]
    fn test_round_to_five_digits() {
        let precision = DisplayPrecision::DEFAULT;
        assert_eq!(precision.round(1.23456789), 1.23457);
        assert_eq!(precision.round(0.000001), 0.0);
        assert_eq!(precision.round(370.37037037), 370.37037);
    }

    #[test]
    fn test_nan_becomes_zero() {
        assert_eq!(DisplayPrecision::DEFAULT.round(f64::NAN), 0.0);
    }

    #[test]
    fn test_infinity_becomes_zero() {
        let precision = DisplayPrecision::DEFAULT;
        assert_eq!(precision.round(f64::INFINITY), 0.0);
        assert_eq!(precision.round(f64::NEG_INFINITY), 0.0);
        assert_eq!(precision.round(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let rounded = DisplayPrecision::DEFAULT.round(-0.000001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert_eq!(rounded.to_string(), "0");
    }

    #[test]
    fn test_large_precision_keeps_value() {
        let precision = DisplayPrecision::new(400);
        assert_eq!(precision.round(1.5), 1.5);
        assert_eq!(precision.round(-1.5), -1.5);
    }

    #[test]
    fn test_round_is_idempotent() {
        let precision = DisplayPrecision::DEFAULT;
        for value in [0.123456, 99.999995, -7.000005, 1234.56789] {
            let once = precision.round(value);
            assert_eq!(precision.round(once), once);
        }
    }
}
