// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tokenunits library.
//!
//! Follows a hybrid approach:
//!
//! - **Operation-specific errors** for fine-grained handling
//!   ([`DecimalParseError`], [`AmountParseError`])
//! - **Unified error type** ([`UnitsError`]) for callers that only need to
//!   propagate
//!
//! Missing balances in the fiat paths are not errors. They produce the
//! `"0.00 <code>"` placeholder or [`Valuation::Unavailable`](crate::Valuation::Unavailable).
//!
//! # Examples
//!
//! ```rust
//! use tokenunits::{to_minimal_unit, BaseAmount, TokenDecimals, UnitsError};
//!
//! fn parse_both(raw: &str, display: &str) -> Result<(BaseAmount, BaseAmount), UnitsError> {
//!     let raw: BaseAmount = raw.parse()?;
//!     let scaled = to_minimal_unit(display, TokenDecimals::USDC)?;
//!     Ok((raw, scaled))
//! }
//!
//! assert!(parse_both("1000000", "1").is_ok());
//! assert!(parse_both("1000000", "1.2.3").is_err());
//! ```

mod amount;
mod decimal;

pub use amount::AmountParseError;
pub use decimal::DecimalParseError;

/// Unified error type for all tokenunits operations.
///
/// All operation-specific errors convert via `From`, so `?` works naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitsError {
    /// Error from decimal string → base unit conversion.
    #[error("Decimal parse error: {0}")]
    Decimal(#[from] DecimalParseError),

    /// Error from parsing a raw base-unit amount.
    #[error("Amount parse error: {0}")]
    Amount(#[from] AmountParseError),
}
