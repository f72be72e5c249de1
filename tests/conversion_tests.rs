// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the public conversion surface

mod helpers;

use alloy_primitives::U256;
use tokenunits::{
    balance_to_fiat, from_minimal_unit, from_minimal_unit_str, is_exact_integer,
    is_valid_decimal_string, to_minimal_unit, wei_to_fiat, BaseAmount, DecimalParseError,
    DecimalString, TokenDecimals, UnitsError, Valuation,
};

#[test]
fn test_documented_examples() -> anyhow::Result<()> {
    helpers::init_tracing();

    assert_eq!(
        from_minimal_unit(1_234_567_890_000_000_000u64, TokenDecimals::STANDARD),
        "1.23456789"
    );
    assert_eq!(
        to_minimal_unit("1.5", TokenDecimals::STANDARD)?,
        BaseAmount::from(1_500_000_000_000_000_000u64)
    );
    Ok(())
}

#[test]
fn test_documented_errors() {
    helpers::init_tracing();

    assert!(matches!(
        to_minimal_unit("1.23", TokenDecimals::new(1)),
        Err(DecimalParseError::TooManyDecimalPlaces { .. })
    ));
    assert!(matches!(
        to_minimal_unit(".", TokenDecimals::STANDARD),
        Err(DecimalParseError::InvalidNumber { .. })
    ));
}

#[test]
fn test_fiat_sentinels() {
    helpers::init_tracing();

    assert_eq!(wei_to_fiat(None, 300.0, "USD"), "0.00 USD");

    let absent = balance_to_fiat(None, 300.0, Some(0.01), "usd");
    assert_eq!(absent, Valuation::Unavailable);
    assert_ne!(absent.to_string(), "0.00 USD");
}

#[test]
fn test_predicates() {
    assert!(is_valid_decimal_string("0.5"));
    assert!(!is_valid_decimal_string("--1"));
    assert!(is_valid_decimal_string(".5"));
    assert!(!is_valid_decimal_string("1."));

    assert!(is_exact_integer(&BaseAmount::from(1u8)));
    assert!(!is_exact_integer(&"1"));
}

#[test]
fn test_u256_balance_display() -> anyhow::Result<()> {
    let balance = BaseAmount::from(U256::from(2_500_000u64));
    let shown = from_minimal_unit(&balance, TokenDecimals::USDC);
    assert_eq!(shown, "2.5");

    let back = to_minimal_unit(&shown, TokenDecimals::USDC)?;
    assert_eq!(back.to_u256(), Some(U256::from(2_500_000u64)));
    Ok(())
}

#[test]
fn test_string_amount_pipeline() -> Result<(), UnitsError> {
    let raw: BaseAmount = "0x16345785d8a0000".parse()?;
    assert_eq!(from_minimal_unit(&raw, TokenDecimals::STANDARD), "0.1");

    let debit = to_minimal_unit("-0.1", TokenDecimals::STANDARD)?;
    assert_eq!(debit, -raw);

    let shown = from_minimal_unit_str("-100000000000000000", TokenDecimals::STANDARD)?;
    assert_eq!(shown, "-0.1");
    assert_eq!(to_minimal_unit(&shown, TokenDecimals::STANDARD)?, debit);
    Ok(())
}

#[test]
fn test_deserialized_decimal_string_is_canonical() -> anyhow::Result<()> {
    let value: DecimalString = serde_json::from_str("\"-0.5\"")?;
    assert_eq!(to_minimal_unit(&value, TokenDecimals::new(2))?, BaseAmount::from(-50i8));

    for raw in ["\"-0.500\"", "\"007\"", "\"-0\""] {
        assert!(serde_json::from_str::<DecimalString>(raw).is_err(), "{raw} should be rejected");
    }
    Ok(())
}

#[test]
fn test_wei_to_fiat_end_to_end() -> anyhow::Result<()> {
    helpers::init_tracing();

    let wei = to_minimal_unit("0.5", TokenDecimals::NATIVE)?;
    assert_eq!(wei_to_fiat(Some(&wei), 2000.0, "USD"), "1000 USD");

    let valuation = balance_to_fiat(Some(1.5), 2000.0, Some(0.5), "eur");
    assert_eq!(valuation.to_string(), "1500 EUR");
    Ok(())
}
