// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeral normalization and numeric type predicates

use std::any::Any;
use std::borrow::Cow;

use num_bigint::BigInt;

use crate::types::{BaseAmount, DecimalString};

/// A value that can be written as a plain decimal numeral
///
/// Implemented for strings, native integers, floats and this crate's amount
/// types. Floats render in positional notation (`1e21` becomes
/// `"1000000000000000000000"`), so their exact binary value is what gets
/// scaled; pass a string when the decimal text matters.
pub trait Numeral {
    /// The value as numeral text, before validation
    fn to_numeral(&self) -> Cow<'_, str>;
}

impl Numeral for str {
    fn to_numeral(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Numeral for String {
    fn to_numeral(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Numeral for DecimalString {
    fn to_numeral(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Numeral for BaseAmount {
    fn to_numeral(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl Numeral for BigInt {
    fn to_numeral(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<T: Numeral + ?Sized> Numeral for &T {
    fn to_numeral(&self) -> Cow<'_, str> {
        (**self).to_numeral()
    }
}

macro_rules! impl_numeral_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeral for $t {
                fn to_numeral(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_numeral_display!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Check whether `value` is an arbitrary-precision integer
///
/// A type check, not a parse: only [`BaseAmount`] and [`BigInt`] values
/// qualify. Numeric strings, native integers and floats do not.
///
/// # Examples
///
/// ```
/// use tokenunits::{is_exact_integer, BaseAmount};
///
/// assert!(is_exact_integer(&BaseAmount::from(5u8)));
/// assert!(!is_exact_integer(&5u64));
/// assert!(!is_exact_integer(&"5"));
/// ```
pub fn is_exact_integer<T: Any>(value: &T) -> bool {
    let value = value as &dyn Any;
    value.is::<BaseAmount>() || value.is::<BigInt>()
}

/// Check whether `value` is an unsigned decimal numeral
///
/// Accepts one or more digits optionally followed by a dot and one or more
/// digits (`"12"`, `"0.5"`), or a dot followed by one or more digits
/// (`".5"`). Signs, exponents, whitespace and a trailing bare dot are rejected.
///
/// # Examples
///
/// ```
/// use tokenunits::is_valid_decimal_string;
///
/// assert!(is_valid_decimal_string("0.5"));
/// assert!(is_valid_decimal_string(".5"));
/// assert!(!is_valid_decimal_string("1."));
/// assert!(!is_valid_decimal_string("--1"));
/// ```
pub fn is_valid_decimal_string(value: &str) -> bool {
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('.') {
        None => is_digits(value),
        Some(("", fraction)) => is_digits(fraction),
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
    }
}
