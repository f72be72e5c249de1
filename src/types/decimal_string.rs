// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact human-readable decimal numeral

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DecimalParseError;

/// Human-readable amount of the form `[-]digits[.digits]`
///
/// Produced by [`from_minimal_unit`](crate::from_minimal_unit). The value is
/// exact: converting it back with [`to_minimal_unit`](crate::to_minimal_unit)
/// and the same decimal count yields the original base-unit amount.
///
/// The numeral is always canonical, whether produced by this crate or parsed:
/// no trailing fractional zeros, no leading zeros in the whole part beyond a
/// single `0`, and no negative zero.
///
/// # Examples
///
/// ```
/// use tokenunits::{from_minimal_unit, TokenDecimals};
///
/// let eth = from_minimal_unit(1_234_567_890_000_000_000u64, TokenDecimals::STANDARD);
/// assert_eq!(eth.as_str(), "1.23456789");
/// assert_eq!(eth.whole_part(), "1");
/// assert_eq!(eth.fractional_part(), Some("23456789"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DecimalString(String);

impl DecimalString {
    /// Wrap a numeral already known to be well-formed
    pub(crate) fn from_parts(negative: bool, whole: &str, fraction: &str) -> Self {
        let mut numeral = String::with_capacity(whole.len() + fraction.len() + 2);
        if negative {
            numeral.push('-');
        }
        numeral.push_str(whole);
        if !fraction.is_empty() {
            numeral.push('.');
            numeral.push_str(fraction);
        }
        Self(numeral)
    }

    /// Borrow the numeral
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the numeral
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check for a leading minus sign
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Digits before the decimal point, without sign
    pub fn whole_part(&self) -> &str {
        let unsigned = self.0.trim_start_matches('-');
        unsigned.split('.').next().unwrap_or(unsigned)
    }

    /// Digits after the decimal point, if any
    pub fn fractional_part(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, fraction)| fraction)
    }

    /// Lossy conversion to `f64` for display arithmetic
    ///
    /// Values beyond `f64` range become infinite.
    pub fn to_f64(&self) -> f64 {
        self.0.parse::<f64>().unwrap_or_else(|e| {
            tracing::warn!(
                numeral = %self.0,
                error = %e,
                "Failed to parse decimal string to f64, using 0.0"
            );
            0.0
        })
    }
}

impl FromStr for DecimalString {
    type Err = DecimalParseError;

    /// Accepts canonical `[-]digits[.digits]` only; use
    /// [`to_minimal_unit`](crate::to_minimal_unit) for lenient numerals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let negative = s.starts_with('-');
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let mut parts = unsigned.split('.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next();
        let points = unsigned.matches('.').count();
        if points > 1 {
            return Err(DecimalParseError::too_many_decimal_points(s, points));
        }
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || fraction.is_some_and(|f| !is_digits(f)) {
            return Err(DecimalParseError::invalid_number(s));
        }

        let padded_whole = whole.len() > 1 && whole.starts_with('0');
        let padded_fraction = fraction.is_some_and(|f| f.ends_with('0'));
        let negative_zero = negative && whole == "0" && fraction.is_none();
        if padded_whole || padded_fraction || negative_zero {
            return Err(DecimalParseError::invalid_number(s));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for DecimalString {
    type Error = DecimalParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DecimalString> for String {
    fn from(value: DecimalString) -> Self {
        value.0
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DecimalString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DecimalString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for DecimalString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
