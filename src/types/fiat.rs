// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fiat display types: conversion rates, labelled values and the
//! available/unavailable valuation outcome

use serde::{Deserialize, Serialize};

/// Price of one whole unit of an asset in a quote currency
///
/// Supplied by an external price feed; this crate never computes rates.
///
/// # Examples
///
/// ```
/// use tokenunits::ConversionRate;
///
/// let eth_usd = ConversionRate::new(2000.0);
/// assert_eq!(eth_usd.apply(1.5), 3000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionRate(f64);

impl ConversionRate {
    /// Create a new conversion rate
    pub const fn new(rate: f64) -> Self {
        Self(rate)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Value of `amount` whole units in the quote currency (unrounded)
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.0
    }
}

impl From<f64> for ConversionRate {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rounded display value labelled with its currency code
///
/// `Display` renders `"<value> <currency>"` with the shortest exact form of
/// the value (`"450.5 USD"`, `"3 EUR"`), never in exponent notation.
///
/// # Examples
///
/// ```
/// use tokenunits::FiatValue;
///
/// let value = FiatValue::new(450.5, "USD");
/// assert_eq!(value.to_string(), "450.5 USD");
/// assert_eq!(value.format(2), "450.50 USD");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatValue {
    amount: f64,
    currency: String,
}

impl FiatValue {
    /// Create a new labelled value
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// The numeric value
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// The currency label, as it will be displayed
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Format with a fixed number of fractional digits
    pub fn format(&self, precision: usize) -> String {
        format!("{:.precision$} {}", self.amount, self.currency)
    }
}

impl std::fmt::Display for FiatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Outcome of a valuation whose inputs may not have loaded yet
///
/// Keeps "cannot compute" distinct from "computed to zero": a missing balance
/// or exchange rate yields [`Valuation::Unavailable`], while a real zero
/// balance yields `Available` with a zero amount.
///
/// # Examples
///
/// ```
/// use tokenunits::{balance_to_fiat, Valuation};
///
/// assert_eq!(balance_to_fiat(None, 300.0, Some(0.01), "usd"), Valuation::Unavailable);
///
/// let zero = balance_to_fiat(Some(0.0), 300.0, Some(0.01), "usd");
/// assert_eq!(zero.to_string(), "0 USD");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Valuation {
    /// The value was computed
    Available(FiatValue),
    /// An input was absent; nothing was computed
    Unavailable,
}

impl Valuation {
    /// Check if a value was computed
    pub fn is_available(&self) -> bool {
        matches!(self, Valuation::Available(_))
    }

    /// Borrow the computed value
    pub fn value(&self) -> Option<&FiatValue> {
        match self {
            Valuation::Available(value) => Some(value),
            Valuation::Unavailable => None,
        }
    }

    /// The computed numeric amount
    pub fn amount(&self) -> Option<f64> {
        self.value().map(FiatValue::amount)
    }

    /// Convert into an `Option`, dropping the distinction's name
    pub fn into_option(self) -> Option<FiatValue> {
        match self {
            Valuation::Available(value) => Some(value),
            Valuation::Unavailable => None,
        }
    }
}

impl From<Option<FiatValue>> for Valuation {
    fn from(value: Option<FiatValue>) -> Self {
        value.map_or(Valuation::Unavailable, Valuation::Available)
    }
}

/// Renders the value, or an empty string when unavailable
impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Valuation::Available(value) => write!(f, "{value}"),
            Valuation::Unavailable => Ok(()),
        }
    }
}
