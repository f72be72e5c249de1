// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tokenunits integration tests
//!
//! Provides a tracing setup and proptest strategies shared by the
//! integration test binaries.

#![allow(dead_code)]

use proptest::prelude::*;
use tokenunits::{BaseAmount, TokenDecimals};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tokenunits=trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Non-negative amounts from zero up to well past `U256::MAX`
pub fn arb_non_negative_amount() -> impl Strategy<Value = BaseAmount> {
    prop_oneof![
        any::<u64>().prop_map(BaseAmount::from),
        any::<u128>().prop_map(BaseAmount::from),
        "[1-9][0-9]{0,99}".prop_map(|digits| digits
            .parse::<BaseAmount>()
            .expect("strategy yields plain digits")),
    ]
}

/// Strictly positive amounts
pub fn arb_positive_amount() -> impl Strategy<Value = BaseAmount> {
    arb_non_negative_amount().prop_filter("amount must be positive", |a| !a.is_zero())
}

/// Decimal counts, including the unusual ones above 18
pub fn arb_decimals() -> impl Strategy<Value = TokenDecimals> {
    prop_oneof![
        Just(TokenDecimals::ZERO),
        Just(TokenDecimals::USDC),
        Just(TokenDecimals::WBTC),
        Just(TokenDecimals::STANDARD),
        (0u8..=40).prop_map(TokenDecimals::new),
    ]
}
