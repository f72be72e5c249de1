// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for conversion operations.
//!
//! Telemetry is kept out of the conversion logic: each instrumented operation
//! has a span helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, decimals: TokenDecimals) -> T {
//!     let span = spans::my_operation(decimals);
//!     let _guard = span.enter();
//!     // Conversion logic here
//! }
//! ```
//!
//! Conversions are hot and cheap, so every span is `TRACE` level.

use tracing::Span;

use crate::types::{DisplayPrecision, TokenDecimals};

/// Create span for scaling a base-unit amount down to a decimal string.
#[inline]
pub(crate) fn from_minimal_unit(decimals: TokenDecimals) -> Span {
    tracing::trace_span!("tokenunits.from_minimal_unit", decimals = decimals.as_u8())
}

/// Create span for scaling a decimal numeral up to base units.
#[inline]
pub(crate) fn to_minimal_unit(decimals: TokenDecimals) -> Span {
    tracing::trace_span!("tokenunits.to_minimal_unit", decimals = decimals.as_u8())
}

/// Create span for rounding an amount for display.
#[inline]
pub(crate) fn to_display_number(decimals: TokenDecimals, precision: DisplayPrecision) -> Span {
    tracing::trace_span!(
        "tokenunits.to_display_number",
        decimals = decimals.as_u8(),
        precision = precision.as_u32(),
    )
}

/// Create span for valuing a native-currency amount in fiat.
#[inline]
pub(crate) fn wei_to_fiat(decimals: TokenDecimals, currency: &str) -> Span {
    tracing::trace_span!(
        "tokenunits.wei_to_fiat",
        decimals = decimals.as_u8(),
        currency = currency,
    )
}

/// Create span for valuing an asset balance in fiat.
#[inline]
pub(crate) fn balance_to_fiat(currency: &str) -> Span {
    tracing::trace_span!("tokenunits.balance_to_fiat", currency = currency)
}
