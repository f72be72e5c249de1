// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Signed arbitrary-precision base-unit amount

use std::str::FromStr;

use alloy_primitives::{I256, U256};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use super::decimal_string::DecimalString;
use super::decimals::TokenDecimals;
use crate::errors::AmountParseError;

/// Amount in a token's smallest indivisible unit (wei for ETH, satoshis for WBTC)
///
/// Backed by an unbounded [`BigInt`]: amounts are never held as floats or
/// fixed-width integers, so scaling by `10^decimals` is always exact. The
/// value may be negative (debits, balance deltas).
///
/// Parses from decimal strings and from `0x`-prefixed hex strings, and
/// serializes as a decimal string.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use tokenunits::{BaseAmount, TokenDecimals};
///
/// let amount = BaseAmount::from(U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(amount.to_decimal_string(TokenDecimals::STANDARD).as_str(), "1.5");
///
/// let debit: BaseAmount = "-0x5".parse().unwrap();
/// assert_eq!(debit.to_string(), "-5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseAmount(BigInt);

impl BaseAmount {
    /// Create a new amount from a big integer
    pub const fn new(amount: BigInt) -> Self {
        Self(amount)
    }

    /// Zero base units
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Borrow the inner big integer
    pub const fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Take the inner big integer
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Absolute value as an unsigned big integer
    pub fn magnitude(&self) -> &BigUint {
        self.0.magnitude()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Exact decimal string scaled by `decimals`
    ///
    /// Shorthand for [`from_minimal_unit`](crate::from_minimal_unit).
    pub fn to_decimal_string(&self, decimals: TokenDecimals) -> DecimalString {
        crate::conversion::scale_down(self, decimals)
    }

    /// Exact decimal value scaled by `decimals`, for arithmetic or storage
    ///
    /// ```
    /// use tokenunits::{BaseAmount, TokenDecimals};
    ///
    /// let usdc = BaseAmount::from(1_234_567u64);
    /// assert_eq!(usdc.to_bigdecimal(TokenDecimals::USDC).to_string(), "1.234567");
    /// ```
    pub fn to_bigdecimal(&self, decimals: TokenDecimals) -> BigDecimal {
        BigDecimal::new(self.0.clone(), i64::from(decimals.as_u8()))
    }

    /// Parse a hex amount, with or without a `0x` prefix, optionally negated
    ///
    /// ```
    /// use tokenunits::BaseAmount;
    ///
    /// let gwei = BaseAmount::from_hex("0x3b9aca00").unwrap();
    /// assert_eq!(gwei, BaseAmount::from(1_000_000_000u64));
    /// ```
    pub fn from_hex(value: &str) -> Result<Self, AmountParseError> {
        let (negative, unsigned) = split_sign(value.trim());
        let digits = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned);
        let magnitude = parse_magnitude(value, digits, 16)?;
        Ok(Self::from_sign_and_magnitude(negative, magnitude))
    }

    /// Lower-case hex with `0x` prefix; negative amounts render as `-0x…`
    pub fn to_hex(&self) -> String {
        let digits = self.0.magnitude().to_str_radix(16);
        if self.is_negative() {
            format!("-0x{digits}")
        } else {
            format!("0x{digits}")
        }
    }

    /// Convert to an EVM word if the amount is non-negative and fits in 256 bits
    pub fn to_u256(&self) -> Option<U256> {
        if self.is_negative() {
            return None;
        }
        U256::try_from_be_slice(&self.0.magnitude().to_bytes_be())
    }

    fn from_sign_and_magnitude(negative: bool, magnitude: BigUint) -> Self {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Self(BigInt::from_biguint(sign, magnitude))
    }
}

fn split_sign(value: &str) -> (bool, &str) {
    match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    }
}

/// `BigUint::parse_bytes` tolerates `_` separators; amounts must be plain digits.
fn parse_magnitude(original: &str, digits: &str, radix: u32) -> Result<BigUint, AmountParseError> {
    if digits.is_empty() {
        return Err(AmountParseError::Empty);
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(AmountParseError::invalid_digits(original, radix));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| AmountParseError::invalid_digits(original, radix))
}

impl FromStr for BaseAmount {
    type Err = AmountParseError;

    /// Parse a decimal amount (`"-1500"`), or a hex amount when `0x`-prefixed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = split_sign(s.trim());
        if unsigned.starts_with("0x") || unsigned.starts_with("0X") {
            return Self::from_hex(s);
        }
        let magnitude = parse_magnitude(s, unsigned, 10)?;
        Ok(Self::from_sign_and_magnitude(negative, magnitude))
    }
}

impl TryFrom<String> for BaseAmount {
    type Error = AmountParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BaseAmount> for String {
    fn from(value: BaseAmount) -> Self {
        value.0.to_string()
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BaseAmount {
                fn from(value: $t) -> Self {
                    Self(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<BigInt> for BaseAmount {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<BigUint> for BaseAmount {
    fn from(value: BigUint) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<U256> for BaseAmount {
    fn from(value: U256) -> Self {
        Self(BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>()))
    }
}

impl From<I256> for BaseAmount {
    fn from(value: I256) -> Self {
        let magnitude = BaseAmount::from(value.unsigned_abs()).into_bigint();
        if value.is_negative() {
            Self(-magnitude)
        } else {
            Self(magnitude)
        }
    }
}

impl From<&BaseAmount> for BaseAmount {
    fn from(value: &BaseAmount) -> Self {
        value.clone()
    }
}

impl std::ops::Neg for BaseAmount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl std::ops::Add for BaseAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for BaseAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::fmt::Display for BaseAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
