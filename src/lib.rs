// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact conversions between token base units, decimal strings and fiat
//! display values.
//!
//! Amounts are held as arbitrary-precision integers ([`BaseAmount`]) and
//! scaled by a token's decimal count with integer arithmetic only, so balances
//! and transaction amounts are never misstated by floating-point error.
//! Floats appear only at the very end, in the display and fiat paths.
//!
//! ```
//! use tokenunits::{
//!     balance_to_fiat, from_minimal_unit, to_minimal_unit, wei_to_fiat, BaseAmount,
//!     TokenDecimals, Valuation,
//! };
//!
//! let wei = to_minimal_unit("1.5", TokenDecimals::STANDARD)?;
//! assert_eq!(wei, BaseAmount::from(1_500_000_000_000_000_000u64));
//! assert_eq!(from_minimal_unit(&wei, TokenDecimals::STANDARD), "1.5");
//!
//! assert_eq!(wei_to_fiat(Some(&wei), 300.0, "USD"), "450 USD");
//! assert_eq!(wei_to_fiat(None, 300.0, "USD"), "0.00 USD");
//! assert_eq!(balance_to_fiat(None, 300.0, Some(0.01), "usd"), Valuation::Unavailable);
//! # Ok::<(), tokenunits::DecimalParseError>(())
//! ```
//!
//! Every function is pure; nothing is cached and nothing blocks.

pub mod config;
mod conversion;
pub mod errors;
mod numeral;
mod spans;
pub mod types;

pub use config::{ConverterConfig, ConverterConfigBuilder};
pub use conversion::{
    balance_to_fiat, balance_to_fiat_number, from_minimal_unit, from_minimal_unit_str,
    render_from_minimal_unit, to_display_number, to_minimal_unit, wei_to_fiat,
    wei_to_fiat_number, UnitConverter,
};
pub use errors::{AmountParseError, DecimalParseError, UnitsError};
pub use numeral::{is_exact_integer, is_valid_decimal_string, Numeral};
pub use types::{
    BaseAmount, ConversionRate, DecimalString, DisplayPrecision, FiatValue, TokenDecimals,
    Valuation,
};
