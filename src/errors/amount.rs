// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for parsing base-unit amounts from strings.

/// Errors that can occur when parsing a [`BaseAmount`](crate::BaseAmount)
/// from its decimal or hexadecimal string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    /// The input had no digits.
    #[error("Empty amount string")]
    Empty,

    /// The input contained characters that are not digits of the radix.
    #[error("Invalid base-{radix} amount: {value:?}")]
    InvalidDigits {
        /// The rejected input
        value: String,
        /// Radix the input was parsed in
        radix: u32,
    },
}

impl AmountParseError {
    /// Create an `InvalidDigits` error.
    pub fn invalid_digits(value: impl Into<String>, radix: u32) -> Self {
        AmountParseError::InvalidDigits {
            value: value.into(),
            radix,
        }
    }
}
