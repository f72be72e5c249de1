// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known conversion constants
//!
//! Centralizes the magic numbers the conversion engine defaults to. Every one
//! of them can be overridden through [`ConverterConfig`](super::ConverterConfig).

/// Decimals of EVM native currencies (1 ETH = 10^18 wei)
pub const NATIVE_CURRENCY_DECIMALS: u8 = 18;

/// Fractional digits kept by display rounding
pub const DEFAULT_DISPLAY_PRECISION: u32 = 5;

/// Fractional digits of the placeholder shown when a native amount is missing
pub const PLACEHOLDER_FIAT_PRECISION: usize = 2;
