// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for exact unit conversion
//!
//! These tests use proptest to validate invariants of the base-unit ↔ decimal
//! string conversions across arbitrary amounts and decimal counts.

mod helpers;

use helpers::{arb_decimals, arb_non_negative_amount, arb_positive_amount};
use proptest::prelude::*;
use tokenunits::{
    from_minimal_unit, to_display_number, to_minimal_unit, DecimalParseError, DisplayPrecision,
    TokenDecimals,
};

proptest! {
    /// Property: scaling down then back up reproduces the amount exactly
    #[test]
    fn prop_round_trip_is_exact(amount in arb_non_negative_amount(), decimals in arb_decimals()) {
        let numeral = from_minimal_unit(&amount, decimals);
        let back = to_minimal_unit(&numeral, decimals);
        prop_assert_eq!(back, Ok(amount), "round trip through {} failed", numeral);
    }

    /// Property: negative amounts round-trip too
    #[test]
    fn prop_negative_round_trip_is_exact(amount in arb_positive_amount(), decimals in arb_decimals()) {
        let negative = -amount;
        let numeral = from_minimal_unit(&negative, decimals);
        prop_assert_eq!(to_minimal_unit(&numeral, decimals), Ok(negative));
    }

    /// Property: negating the amount only prefixes the numeral with '-'
    #[test]
    fn prop_sign_is_preserved(amount in arb_positive_amount(), decimals in arb_decimals()) {
        let positive = from_minimal_unit(&amount, decimals);
        let negative = from_minimal_unit(-amount, decimals);
        prop_assert_eq!(negative.as_str(), format!("-{positive}"));
    }

    /// Property: zero is "0" for every decimal count
    #[test]
    fn prop_zero_is_plain(decimals in arb_decimals()) {
        prop_assert_eq!(from_minimal_unit(0u8, decimals), "0");
    }

    /// Property: the numeral never carries trailing fractional zeros
    #[test]
    fn prop_no_trailing_zeros(amount in arb_non_negative_amount(), decimals in arb_decimals()) {
        let numeral = from_minimal_unit(&amount, decimals);
        if let Some(fraction) = numeral.fractional_part() {
            prop_assert!(!fraction.is_empty());
            prop_assert!(!fraction.ends_with('0'), "trailing zero in {}", numeral);
            prop_assert!(fraction.len() <= decimals.as_usize());
        }
        if decimals.as_u8() == 0 {
            prop_assert_eq!(numeral.fractional_part(), None);
        }
    }

    /// Property: excess fractional digits are rejected, never truncated
    #[test]
    fn prop_excess_precision_is_rejected(decimals in 0u8..=18, extra in 1usize..5) {
        let numeral = format!("1.{}", "1".repeat(decimals as usize + extra));
        let result = to_minimal_unit(numeral.as_str(), TokenDecimals::new(decimals));
        let is_too_many_places = matches!(
            result,
            Err(DecimalParseError::TooManyDecimalPlaces { .. })
        );
        prop_assert!(is_too_many_places);
    }

    /// Property: display rounding is idempotent
    #[test]
    fn prop_display_rounding_is_idempotent(
        units in 0u64..1_000_000_000_000_000,
        precision in 0u32..=8,
    ) {
        let precision = DisplayPrecision::new(precision);
        let once = to_display_number(units, TokenDecimals::WBTC, precision);
        prop_assert_eq!(precision.round(once), once);
    }
}
