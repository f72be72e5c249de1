// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Unit conversion engine
//!
//! Exact scaling between base-unit amounts and decimal strings, plus the lossy
//! display and fiat paths built on top of it.
//!
//! ```text
//! BaseAmount ──from_minimal_unit──> DecimalString ──round──> f64
//!     ↑                                  │
//!     └──────────to_minimal_unit─────────┘
//! f64 ──× rate──> FiatValue
//! ```
//!
//! Every function is pure and allocation-bounded by the digit length of its
//! inputs; [`UnitConverter`] is `Copy` and can be shared freely across threads.

use num_bigint::{BigInt, BigUint, Sign};
use tracing::debug;

use crate::config::{constants, ConverterConfig};
use crate::errors::{AmountParseError, DecimalParseError};
use crate::numeral::Numeral;
use crate::spans;
use crate::types::{
    BaseAmount, ConversionRate, DecimalString, DisplayPrecision, FiatValue, TokenDecimals,
    Valuation,
};

/// Conversion engine carrying the display and native-currency settings
///
/// The free functions of this crate ([`wei_to_fiat`], [`balance_to_fiat`], ...)
/// use `UnitConverter::default()`. Construct one explicitly to change the
/// assumed native decimals or the display precision.
///
/// # Examples
///
/// ```
/// use tokenunits::{BaseAmount, ConverterConfigBuilder, UnitConverter};
///
/// let converter = UnitConverter::new(ConverterConfigBuilder::new().display_precision(2u32).build());
/// let wei = BaseAmount::from(1_234_567_000_000_000_000u64);
/// assert_eq!(converter.wei_to_fiat(Some(&wei), 1000.0, "USD"), "1234.57 USD");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitConverter {
    config: ConverterConfig,
}

impl UnitConverter {
    /// Create a converter with the given configuration
    pub const fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Round an amount for display using the configured precision
    pub fn to_display_number(&self, amount: &BaseAmount, decimals: TokenDecimals) -> f64 {
        let precision = self.config.display_precision;
        let span = spans::to_display_number(decimals, precision);
        let _guard = span.enter();

        precision.round(scale_down(amount, decimals).to_f64())
    }

    /// Display-rounded amount as text (`"1.23457"`, `"12"`)
    pub fn render_from_minimal_unit(&self, amount: &BaseAmount, decimals: TokenDecimals) -> String {
        self.to_display_number(amount, decimals).to_string()
    }

    /// Fiat value of a native-currency amount, display-rounded
    pub fn wei_to_fiat_number(&self, amount: &BaseAmount, rate: impl Into<ConversionRate>) -> f64 {
        let whole_units = scale_down(amount, self.config.native_decimals).to_f64();
        self.config
            .display_precision
            .round(rate.into().apply(whole_units))
    }

    /// Fiat value of a native-currency amount as `"<value> <currency_code>"`
    ///
    /// A missing amount renders as `"0.00 <currency_code>"` without any
    /// arithmetic: upstream balances legitimately may not have loaded yet.
    pub fn wei_to_fiat(
        &self,
        amount: Option<&BaseAmount>,
        rate: impl Into<ConversionRate>,
        currency_code: &str,
    ) -> String {
        let span = spans::wei_to_fiat(self.config.native_decimals, currency_code);
        let _guard = span.enter();

        match amount {
            Some(amount) => {
                FiatValue::new(self.wei_to_fiat_number(amount, rate), currency_code).to_string()
            }
            None => {
                debug!(
                    currency = currency_code,
                    "Native amount missing, rendering placeholder"
                );
                FiatValue::new(0.0, currency_code).format(constants::PLACEHOLDER_FIAT_PRECISION)
            }
        }
    }

    /// Fiat value of a whole-unit balance, display-rounded
    ///
    /// Computes `balance × conversion_rate × exchange_rate`. Returns `None`
    /// when the balance or the exchange rate is absent.
    pub fn balance_to_fiat_number(
        &self,
        balance: Option<f64>,
        conversion_rate: impl Into<ConversionRate>,
        exchange_rate: Option<f64>,
    ) -> Option<f64> {
        let (balance, exchange_rate) = (balance?, exchange_rate?);
        let in_network_currency = conversion_rate.into().apply(balance);
        let fiat = ConversionRate::new(exchange_rate).apply(in_network_currency);
        Some(self.config.display_precision.round(fiat))
    }

    /// Fiat value of a whole-unit balance, labelled with the upper-cased code
    ///
    /// Yields [`Valuation::Unavailable`] rather than zero when the balance or
    /// the exchange rate is absent.
    pub fn balance_to_fiat(
        &self,
        balance: Option<f64>,
        conversion_rate: impl Into<ConversionRate>,
        exchange_rate: Option<f64>,
        currency_code: &str,
    ) -> Valuation {
        let span = spans::balance_to_fiat(currency_code);
        let _guard = span.enter();

        match self.balance_to_fiat_number(balance, conversion_rate, exchange_rate) {
            Some(amount) => {
                Valuation::Available(FiatValue::new(amount, currency_code.to_uppercase()))
            }
            None => {
                debug!(
                    currency = currency_code,
                    has_balance = balance.is_some(),
                    has_exchange_rate = exchange_rate.is_some(),
                    "Balance valuation unavailable"
                );
                Valuation::Unavailable
            }
        }
    }
}

/// Scale a base-unit amount down to an exact decimal string
///
/// No rounding happens: every base unit is represented. Trailing fractional
/// zeros are dropped, and a zero fraction is omitted entirely.
///
/// The amount is already typed, so this cannot fail. For a numeric string use
/// [`from_minimal_unit_str`], which parses it first.
///
/// # Examples
///
/// ```
/// use tokenunits::{from_minimal_unit, TokenDecimals};
///
/// assert_eq!(from_minimal_unit(1_234_567_890_000_000_000u64, TokenDecimals::STANDARD), "1.23456789");
/// assert_eq!(from_minimal_unit(-50_000i64, TokenDecimals::USDC), "-0.05");
/// assert_eq!(from_minimal_unit(0u8, TokenDecimals::STANDARD), "0");
/// ```
pub fn from_minimal_unit(amount: impl Into<BaseAmount>, decimals: TokenDecimals) -> DecimalString {
    let amount = amount.into();
    let span = spans::from_minimal_unit(decimals);
    let _guard = span.enter();
    note_unusual_decimals(decimals);

    scale_down(&amount, decimals)
}

/// Scale a base-unit amount given as a numeric string down to a decimal string
///
/// Accepts decimal digits with an optional leading `-`, or `0x`-prefixed hex.
///
/// # Errors
///
/// Returns [`AmountParseError`] when `amount` is not an integer numeral.
///
/// # Examples
///
/// ```
/// use tokenunits::{from_minimal_unit_str, TokenDecimals};
///
/// assert_eq!(from_minimal_unit_str("1500000", TokenDecimals::USDC)?, "1.5");
/// assert_eq!(from_minimal_unit_str("0x0de0b6b3a7640000", TokenDecimals::STANDARD)?, "1");
/// assert!(from_minimal_unit_str("1.5", TokenDecimals::USDC).is_err());
/// # Ok::<(), tokenunits::AmountParseError>(())
/// ```
pub fn from_minimal_unit_str(
    amount: &str,
    decimals: TokenDecimals,
) -> Result<DecimalString, AmountParseError> {
    let amount = amount.parse::<BaseAmount>().inspect_err(|e| {
        debug!(error = %e, "Rejected base-unit amount");
    })?;
    Ok(from_minimal_unit(amount, decimals))
}

/// Counts over 18 are legal but often point at bad token metadata.
fn note_unusual_decimals(decimals: TokenDecimals) {
    if !decimals.is_reasonable() {
        debug!(
            decimals = decimals.as_u8(),
            max_reasonable = TokenDecimals::MAX_REASONABLE,
            "Unusual decimal count"
        );
    }
}

pub(crate) fn scale_down(amount: &BaseAmount, decimals: TokenDecimals) -> DecimalString {
    let base = decimals.base();
    let magnitude = amount.magnitude();
    let whole = magnitude / &base;
    let fraction = magnitude % &base;

    let padded = format!("{:0width$}", fraction, width = decimals.as_usize());
    let trimmed = padded.trim_end_matches('0');

    DecimalString::from_parts(amount.is_negative(), &whole.to_string(), trimmed)
}

/// Scale a decimal numeral up to an exact base-unit amount
///
/// Accepts `[-][digits][.digits]` after trimming surrounding whitespace. A
/// missing whole or fractional part counts as zero (`".5"`, `"1."`).
///
/// # Errors
///
/// - [`DecimalParseError::InvalidNumber`] for a lone `"."`, an empty numeral,
///   or any character other than digits, one leading `-` and the point
/// - [`DecimalParseError::TooManyDecimalPoints`] for more than one `.`
/// - [`DecimalParseError::TooManyDecimalPlaces`] when the fraction is longer
///   than `decimals`; excess precision is never truncated
///
/// # Examples
///
/// ```
/// use tokenunits::{to_minimal_unit, BaseAmount, TokenDecimals};
///
/// let wei = to_minimal_unit("1.5", TokenDecimals::STANDARD).unwrap();
/// assert_eq!(wei, BaseAmount::from(1_500_000_000_000_000_000u64));
///
/// let debit = to_minimal_unit("-0.25", TokenDecimals::USDC).unwrap();
/// assert_eq!(debit, BaseAmount::from(-250_000i64));
///
/// assert!(to_minimal_unit(".", TokenDecimals::STANDARD).is_err());
/// ```
pub fn to_minimal_unit(
    value: impl Numeral,
    decimals: TokenDecimals,
) -> Result<BaseAmount, DecimalParseError> {
    let span = spans::to_minimal_unit(decimals);
    let _guard = span.enter();
    note_unusual_decimals(decimals);

    let numeral = value.to_numeral();
    scale_up(numeral.trim(), decimals).inspect_err(|e| {
        debug!(error = %e, "Rejected numeral");
    })
}

fn scale_up(numeral: &str, decimals: TokenDecimals) -> Result<BaseAmount, DecimalParseError> {
    let (negative, unsigned) = match numeral.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, numeral),
    };

    if unsigned == "." {
        return Err(DecimalParseError::invalid_number(numeral));
    }

    let points = unsigned.matches('.').count();
    if points > 1 {
        return Err(DecimalParseError::too_many_decimal_points(numeral, points));
    }

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(DecimalParseError::invalid_number(numeral));
    }

    if fraction.len() > decimals.as_usize() {
        return Err(DecimalParseError::too_many_decimal_places(
            numeral,
            fraction.len(),
            decimals.as_u8(),
        ));
    }

    let fraction = format!("{fraction:0<width$}", width = decimals.as_usize());
    let magnitude = parse_digits(whole) * decimals.base() + parse_digits(&fraction);
    let amount = BigInt::from_biguint(Sign::Plus, magnitude);

    Ok(BaseAmount::new(if negative { -amount } else { amount }))
}

/// Digits are validated by the caller; an empty part is zero.
fn parse_digits(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

/// Round a base-unit amount for display
///
/// Converts exactly to a decimal string, then rounds the `f64` value to
/// `precision` fractional digits (halves away from zero). Lossy: use only for
/// presentation.
///
/// # Examples
///
/// ```
/// use tokenunits::{to_display_number, DisplayPrecision, TokenDecimals};
///
/// let shown = to_display_number(1_234_567_890_000_000_000u64, TokenDecimals::STANDARD, DisplayPrecision::default());
/// assert_eq!(shown, 1.23457);
/// ```
pub fn to_display_number(
    amount: impl Into<BaseAmount>,
    decimals: TokenDecimals,
    precision: DisplayPrecision,
) -> f64 {
    let converter = UnitConverter::new(ConverterConfig {
        display_precision: precision,
        ..ConverterConfig::default()
    });
    converter.to_display_number(&amount.into(), decimals)
}

/// Display-rounded amount as text
///
/// ```
/// use tokenunits::{render_from_minimal_unit, DisplayPrecision, TokenDecimals};
///
/// assert_eq!(render_from_minimal_unit(12_000_000u64, TokenDecimals::USDC, DisplayPrecision::default()), "12");
/// ```
pub fn render_from_minimal_unit(
    amount: impl Into<BaseAmount>,
    decimals: TokenDecimals,
    precision: DisplayPrecision,
) -> String {
    to_display_number(amount, decimals, precision).to_string()
}

/// Fiat value of a native-currency (18-decimal) amount, display-rounded
pub fn wei_to_fiat_number(amount: &BaseAmount, rate: impl Into<ConversionRate>) -> f64 {
    UnitConverter::default().wei_to_fiat_number(amount, rate)
}

/// Fiat value of a native-currency (18-decimal) amount as `"<value> <currency_code>"`
///
/// # Examples
///
/// ```
/// use tokenunits::{wei_to_fiat, BaseAmount};
///
/// let wei = BaseAmount::from(1_500_000_000_000_000_000u64);
/// assert_eq!(wei_to_fiat(Some(&wei), 300.0, "USD"), "450 USD");
/// assert_eq!(wei_to_fiat(None, 300.0, "USD"), "0.00 USD");
/// ```
pub fn wei_to_fiat(
    amount: Option<&BaseAmount>,
    rate: impl Into<ConversionRate>,
    currency_code: &str,
) -> String {
    UnitConverter::default().wei_to_fiat(amount, rate, currency_code)
}

/// Fiat value of a whole-unit balance, display-rounded; `None` if an input is absent
pub fn balance_to_fiat_number(
    balance: Option<f64>,
    conversion_rate: impl Into<ConversionRate>,
    exchange_rate: Option<f64>,
) -> Option<f64> {
    UnitConverter::default().balance_to_fiat_number(balance, conversion_rate, exchange_rate)
}

/// Fiat value of a whole-unit balance as `"<value> <CURRENCY_CODE>"`
///
/// # Examples
///
/// ```
/// use tokenunits::balance_to_fiat;
///
/// let valuation = balance_to_fiat(Some(2.0), 300.0, Some(0.01), "usd");
/// assert_eq!(valuation.to_string(), "6 USD");
/// assert!(!balance_to_fiat(Some(2.0), 300.0, None, "usd").is_available());
/// ```
pub fn balance_to_fiat(
    balance: Option<f64>,
    conversion_rate: impl Into<ConversionRate>,
    exchange_rate: Option<f64>,
    currency_code: &str,
) -> Valuation {
    UnitConverter::default().balance_to_fiat(balance, conversion_rate, exchange_rate, currency_code)
}
