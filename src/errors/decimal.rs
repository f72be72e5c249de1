// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decimal string parsing.
//!
//! These are raised by [`to_minimal_unit`](crate::to_minimal_unit) when a
//! caller hands in a numeral that cannot be scaled to base units exactly.

/// Errors that can occur when converting a decimal numeral to base units.
///
/// Every variant indicates a malformed caller-supplied value. Nothing is
/// coerced: a numeral with more fractional digits than the token supports is
/// rejected rather than truncated.
///
/// # Examples
///
/// ```rust
/// use tokenunits::{to_minimal_unit, DecimalParseError, TokenDecimals};
///
/// match to_minimal_unit("1.23", TokenDecimals::new(1)) {
///     Err(DecimalParseError::TooManyDecimalPlaces { places, decimals, .. }) => {
///         assert_eq!(places, 2);
///         assert_eq!(decimals, 1);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalParseError {
    /// The numeral has no digits, or contains characters other than digits,
    /// a single leading `-` and decimal points.
    #[error("Invalid number: {value:?}")]
    InvalidNumber {
        /// The normalized input
        value: String,
    },

    /// The numeral contains more than one decimal point.
    #[error("Too many decimal points in {value:?}: found {count}")]
    TooManyDecimalPoints {
        /// The normalized input
        value: String,
        /// Number of decimal points found
        count: usize,
    },

    /// The fractional part is longer than the token's decimal count.
    #[error("Too many decimal places in {value:?}: {places} given, token supports {decimals}")]
    TooManyDecimalPlaces {
        /// The normalized input
        value: String,
        /// Number of fractional digits in the input
        places: usize,
        /// Decimal count of the token
        decimals: u8,
    },
}

impl DecimalParseError {
    /// Create an `InvalidNumber` error.
    pub fn invalid_number(value: impl Into<String>) -> Self {
        DecimalParseError::InvalidNumber {
            value: value.into(),
        }
    }

    /// Create a `TooManyDecimalPoints` error.
    pub fn too_many_decimal_points(value: impl Into<String>, count: usize) -> Self {
        DecimalParseError::TooManyDecimalPoints {
            value: value.into(),
            count,
        }
    }

    /// Create a `TooManyDecimalPlaces` error.
    pub fn too_many_decimal_places(value: impl Into<String>, places: usize, decimals: u8) -> Self {
        DecimalParseError::TooManyDecimalPlaces {
            value: value.into(),
            places,
            decimals,
        }
    }
}
