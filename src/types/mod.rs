// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the three representations of a monetary value.
//!
//! # Type Relationships
//!
//! ```text
//! BaseAmount (BigInt, exact base units)
//!     |
//!     | from_minimal_unit(TokenDecimals)      ↑ to_minimal_unit(TokenDecimals)
//!     ↓                                       |
//! DecimalString ([-]digits[.digits], exact) ──┘
//!     |
//!     | DisplayPrecision::round
//!     ↓
//! f64 (display only)
//!     |
//!     | × ConversionRate
//!     ↓
//! FiatValue / Valuation
//! ```

mod amount;
mod decimal_string;
mod decimals;
mod display;
mod fiat;

pub use amount::BaseAmount;
pub use decimal_string::DecimalString;
pub use decimals::TokenDecimals;
pub use display::DisplayPrecision;
pub use fiat::{ConversionRate, FiatValue, Valuation};
