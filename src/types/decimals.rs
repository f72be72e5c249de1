// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal count type

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Number of decimal places between a token's base unit and its whole unit
///
/// ERC-20 `decimals()` returns a `uint8`, so the count is stored as `u8`.
/// Most tokens (and every EVM native currency) use 18, but some differ:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
///
/// The count is supplied by the caller per asset; this crate never looks it up.
///
/// # Examples
///
/// ```
/// use tokenunits::TokenDecimals;
///
/// assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
/// assert_eq!(TokenDecimals::USDC.base().to_string(), "1000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Maximum reasonable decimals (following ERC-20 convention)
    pub const MAX_REASONABLE: u8 = 18;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// Decimals of EVM native currencies: ETH, MATIC, BNB, ... (18)
    pub const NATIVE: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// A token with no fractional units
    pub const ZERO: Self = Self(0);

    /// Create a new decimal count
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Get the decimal count as a string width
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Check if decimals are in reasonable range (0-18)
    ///
    /// Values over 18 are legal but unusual and may indicate data errors.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }

    /// Exact scaling factor `10^decimals`
    pub fn base(&self) -> BigUint {
        BigUint::from(10u8).pow(u32::from(self.0))
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decimals_constants() {
        assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
        assert_eq!(TokenDecimals::NATIVE.as_u8(), 18);
        assert_eq!(TokenDecimals::USDC.as_u8(), 6);
        assert_eq!(TokenDecimals::WBTC.as_u8(), 8);
        assert_eq!(TokenDecimals::ZERO.as_u8(), 0);
    }

    #[test]
    fn test_token_decimals_reasonable() {
        assert!(TokenDecimals::new(0).is_reasonable());
        assert!(TokenDecimals::new(18).is_reasonable());
        assert!(!TokenDecimals::new(19).is_reasonable());
        assert!(!TokenDecimals::new(255).is_reasonable());
    }

    #[test]
    fn test_base_is_exact() {
        assert_eq!(TokenDecimals::ZERO.base(), BigUint::from(1u8));
        assert_eq!(TokenDecimals::USDC.base(), BigUint::from(1_000_000u32));
        assert_eq!(
            TokenDecimals::STANDARD.base(),
            BigUint::from(1_000_000_000_000_000_000u64)
        );
        // Beyond u128 range, still exact
        assert_eq!(
            TokenDecimals::new(40).base().to_string(),
            format!("1{}", "0".repeat(40))
        );
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TokenDecimals::STANDARD), "18 decimals");
    }

    #[test]
    fn test_serialization() {
        let decimals = TokenDecimals::USDC;
        let json = serde_json::to_string(&decimals).unwrap();
        assert_eq!(json, "6");
        let deserialized: TokenDecimals = serde_json::from_str(&json).unwrap();
        assert_eq!(decimals, deserialized);
    }
}
