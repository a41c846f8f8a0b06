//! Decimal and currency formatting.
//!
//! Amounts are arbitrary-precision decimals; every entry point rounds
//! half-up to its target scale and renders exactly that many fractional
//! digits with thousands grouping.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::NumericSymbols;
use crate::value::{RenderError, RenderResult};

/// Format an amount with the given scale and symbols.
///
/// The amount is rounded half-up to `scale`, padded with trailing
/// zeros to exactly `scale` fractional digits, and the integer part is
/// grouped in threes. A scale of 0 emits no decimal separator.
pub fn format_decimal(amount: &Decimal, scale: u32, symbols: NumericSymbols) -> String {
    let mut fixed = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(scale);
    let text = fixed.to_string();

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = group_digits(int_part, symbols.group_separator);
    match frac_part {
        Some(f) => format!("{}{}{}{}", sign, grouped, symbols.decimal_separator, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Amount as `23 323.02` (scale 2, dot separator).
pub fn amount_in_decimal_format(amount: &Decimal) -> String {
    format_decimal(amount, 2, NumericSymbols::default())
}

/// Amount as `23 323.022` (scale 3).
pub fn amount_in_decimal_format_scale_three(amount: &Decimal) -> String {
    format_decimal(amount, 3, NumericSymbols::default())
}

/// Amount as `23 323.0222` (scale 4).
pub fn amount_in_decimal_format_scale_four(amount: &Decimal) -> String {
    format_decimal(amount, 4, NumericSymbols::default())
}

/// Parse a string amount the way the engine supplies raw field text.
///
/// A malformed decimal string is a hard error carrying the offending
/// text; callers wanting null-safety must use a default-value overload.
pub fn parse_amount(text: &str) -> RenderResult<Decimal> {
    Decimal::from_str(text).map_err(|_| RenderError::number(text))
}

/// Amount as a Russian currency phrase: `12 руб. 12 коп.`.
///
/// The amount is rounded half-up to scale 2 first; the ruble part is
/// then truncated toward zero and the kopeck part is the remaining two
/// digits, zero-padded. Because of the initial rounding the kopeck
/// value never reaches 100 (19.995 renders as `20 руб. 00 коп.`).
pub fn amount_in_rur_currency_str(amount: &Decimal) -> String {
    let scaled = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rubles = scaled.trunc();
    let coins = ((scaled - rubles) * Decimal::ONE_HUNDRED)
        .to_i64()
        .unwrap_or(0);

    format!(
        "{} руб. {:02} коп.",
        format_decimal(&rubles, 0, NumericSymbols::default()),
        coins
    )
}

/// Amount with a hyphen decimal separator: `20.00` becomes `20-00`.
pub fn amount_in_string(amount: &Decimal) -> String {
    format_decimal(amount, 2, NumericSymbols::with_decimal_separator('-'))
}
