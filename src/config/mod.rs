// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for conversion operations
//!
//! Makes the engine's implicit constants explicit: the decimal count assumed
//! for native-currency amounts and the precision used for display rounding.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use tokenunits::ConverterConfig;
//!
//! // 18 native decimals, 5 display digits
//! let config = ConverterConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use tokenunits::{ConverterConfigBuilder, TokenDecimals};
//!
//! let config = ConverterConfigBuilder::new()
//!     .native_decimals(TokenDecimals::new(9))  // e.g. a 9-decimal gas token
//!     .display_precision(2u32)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{DisplayPrecision, TokenDecimals};

pub mod constants;

/// Configuration for a [`UnitConverter`](crate::UnitConverter)
///
/// Use [`ConverterConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Decimal count assumed for native-currency (wei) amounts
    /// Default: 18
    pub native_decimals: TokenDecimals,

    /// Fractional digits kept when rounding for display
    /// Default: 5
    pub display_precision: DisplayPrecision,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            native_decimals: TokenDecimals::new(constants::NATIVE_CURRENCY_DECIMALS),
            display_precision: DisplayPrecision::new(constants::DEFAULT_DISPLAY_PRECISION),
        }
    }
}

/// Builder for [`ConverterConfig`]
///
/// # Example
///
/// ```rust
/// use tokenunits::{ConverterConfigBuilder, DisplayPrecision, TokenDecimals};
///
/// let config = ConverterConfigBuilder::new().display_precision(3u32).build();
/// assert_eq!(config.display_precision, DisplayPrecision::new(3));
/// assert_eq!(config.native_decimals, TokenDecimals::NATIVE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterConfigBuilder {
    config: ConverterConfig,
}

impl ConverterConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decimal count assumed for native-currency amounts
    pub fn native_decimals(mut self, decimals: impl Into<TokenDecimals>) -> Self {
        self.config.native_decimals = decimals.into();
        self
    }

    /// Set the display rounding precision
    pub fn display_precision(mut self, precision: impl Into<DisplayPrecision>) -> Self {
        self.config.display_precision = precision.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ConverterConfig {
        self.config
    }
}
