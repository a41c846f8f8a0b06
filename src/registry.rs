//! The function catalog: stable names mapped to callable functions.
//!
//! The rendering engine resolves a function name and argument list
//! from a template expression and calls [`call_function`]; the result
//! is substituted into the output text. Overloads that differ in arity
//! or argument type are arms of one name's dispatch, matched on the
//! argument slice with a typed error when nothing fits.
//!
//! The catalog itself is static data built at compile time and
//! read-only for the life of the process.

use phf::phf_map;
use serde::Serialize;

use crate::functions::{counter, datetime, mask, numeric, plural, strings};
use crate::locale::{resolve_locale, NumericSymbols, BASE_LOCALE};
use crate::value::{RenderError, RenderResult, Value, Variables};

// ============================================================================
// Call Results
// ============================================================================

/// Result of trying to call a catalog function.
///
/// Distinguishing "function not found" from "function found but
/// failed" lets the engine decide between its own name resolution and
/// a per-field render failure.
#[derive(Debug)]
pub enum CallResult {
    /// Function was found and executed successfully
    Ok(Value),
    /// Function was found but execution failed
    Err(RenderError),
    /// Function was not found in the catalog
    NotFound,
}

impl From<RenderResult<Value>> for CallResult {
    fn from(result: RenderResult<Value>) -> Self {
        match result {
            Ok(v) => CallResult::Ok(v),
            Err(e) => CallResult::Err(e),
        }
    }
}

// ============================================================================
// Signature Catalog
// ============================================================================

/// A catalog entry: the stable name plus a human-readable parameter
/// list and return type for the engine's function picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub name: &'static str,
    pub params: &'static str,
    pub returns: &'static str,
}

macro_rules! sig {
    ($name:literal, $params:literal, $returns:literal) => {
        Signature {
            name: $name,
            params: $params,
            returns: $returns,
        }
    };
}

static SIGNATURES: phf::Map<&'static str, Signature> = phf_map! {
    // Numeric / currency
    "amountInDecimalFormat" => sig!("amountInDecimalFormat", "amount | amount, scale | amount, defaultValue[, groupSeparator]", "str"),
    "amountInDecimalFormatWithSeparator" => sig!("amountInDecimalFormatWithSeparator", "amount, separator[, defaultValue]", "str"),
    "amountInDecimalFormatScaleThree" => sig!("amountInDecimalFormatScaleThree", "amount[, defaultValue]", "str"),
    "amountInDecimalFormatScaleFour" => sig!("amountInDecimalFormatScaleFour", "amount[, defaultValue]", "str"),
    "amountInRurCurrencyStr" => sig!("amountInRurCurrencyStr", "amount", "str"),
    "amountInString" => sig!("amountInString", "amount", "str"),

    // Dates
    "dateCustomFormat" => sig!("dateCustomFormat", "date, pattern", "str"),
    "localDateCustomFormat" => sig!("localDateCustomFormat", "isoDate, pattern", "str"),
    "localDateTimeCustomFormat" => sig!("localDateTimeCustomFormat", "dateTime, pattern", "str"),
    "formatDateFromLocalDateTime" => sig!("formatDateFromLocalDateTime", "isoDateTime, pattern[, locale]", "str"),
    "formatDate" => sig!("formatDate", "isoOffsetDateTime", "instant"),
    "dateFullFormat" => sig!("dateFullFormat", "date", "str"),
    "equalsDate" => sig!("equalsDate", "firstDate, secondDate", "bool"),
    "replaceDefaultDateWithADash" => sig!("replaceDefaultDateWithADash", "inputString", "str"),

    // Declension
    "formatMonths" => sig!("formatMonths", "months", "str"),
    "formatOnlyMonths" => sig!("formatOnlyMonths", "months", "str"),
    "formatYearOrMonths" => sig!("formatYearOrMonths", "months", "str"),

    // Masking
    "formatCardNumber" => sig!("formatCardNumber", "cardNumber", "str"),
    "formatAccountNumber" => sig!("formatAccountNumber", "accountNumber", "str"),
    "maskString" => sig!("maskString", "value, mask", "str"),
    "maskClientDocIssuerCode" => sig!("maskClientDocIssuerCode", "inputString", "str"),

    // Strings
    "defaultIfEmpty" => sig!("defaultIfEmpty", "value[, defaultValue]", "str"),
    "yesNo" => sig!("yesNo", "value", "str"),
    "checkbox" => sig!("checkbox", "checked", "str"),
    "grayCheckbox" => sig!("grayCheckbox", "checked", "str"),
    "checkmark" => sig!("checkmark", "checked", "str"),
    "checkmarkOrEmpty" => sig!("checkmarkOrEmpty", "checked", "str"),
    "makeBold" => sig!("makeBold", "content", "str"),
    "valuesFormatWithIndex" => sig!("valuesFormatWithIndex", "format, separator, values", "str"),
    "valuesArray" => sig!("valuesArray", "separator, value...", "str"),
    "valuesArrayIfExists" => sig!("valuesArrayIfExists", "separator, value...", "str | none"),
    "valuesList" => sig!("valuesList", "separator[, prefix, suffix], values", "str"),
    "getHeadOfString" => sig!("getHeadOfString", "original, length", "str"),
    "getTailOfString" => sig!("getTailOfString", "original, length", "str"),
    "upperFirst" => sig!("upperFirst", "value", "str"),
    "lowerFirst" => sig!("lowerFirst", "value", "str"),
    "getRussianPhone" => sig!("getRussianPhone", "phoneNumber", "str"),
    "extractCity" => sig!("extractCity", "address", "str"),
    "buildFio" => sig!("buildFio", "lastName, firstName[, middleName]", "str"),
    "paste" => sig!("paste", "destination, value, position, skipIfExist", "str"),
    "getCharAtPos" => sig!("getCharAtPos", "string, index", "str"),
    "addHtmlWhiteSpace" => sig!("addHtmlWhiteSpace", "count", "str"),

    // Counters
    "incCount" => sig!("incCount", "key", "str"),
    "getCount" => sig!("getCount", "key", "str | none"),
};

/// Look up one catalog entry by name.
pub fn lookup(name: &str) -> Option<&'static Signature> {
    SIGNATURES.get(name)
}

/// All catalog entries, sorted by name.
pub fn signatures() -> Vec<&'static Signature> {
    let mut entries: Vec<_> = SIGNATURES.values().collect();
    entries.sort_by_key(|s| s.name);
    entries
}

// ============================================================================
// Dispatch
// ============================================================================

/// Call a catalog function by name.
///
/// `vars` is the engine's per-render variable scope; only the counter
/// pair touches it. Errors come back tagged with the function name.
pub fn call_function(name: &str, args: Vec<Value>, vars: &mut Variables) -> CallResult {
    let result = match name {
        // Numeric / currency
        "amountInDecimalFormat" => func_amount_in_decimal_format(args),
        "amountInDecimalFormatWithSeparator" => func_amount_with_separator(args),
        "amountInDecimalFormatScaleThree" => func_amount_fixed_scale(args, 3),
        "amountInDecimalFormatScaleFour" => func_amount_fixed_scale(args, 4),
        "amountInRurCurrencyStr" => func_amount_in_rur_currency_str(args),
        "amountInString" => func_amount_in_string(args),

        // Dates
        "dateCustomFormat" => func_date_custom_format(args),
        "localDateCustomFormat" => func_local_date_custom_format(args),
        "localDateTimeCustomFormat" => func_local_date_time_custom_format(args),
        "formatDateFromLocalDateTime" => func_format_date_from_local_date_time(args),
        "formatDate" => func_format_date(args),
        "dateFullFormat" => func_date_full_format(args),
        "equalsDate" => func_equals_date(args),
        "replaceDefaultDateWithADash" => func_replace_default_date(args),

        // Declension
        "formatMonths" => func_months(args, plural::format_months),
        "formatOnlyMonths" => func_months(args, plural::format_only_months),
        "formatYearOrMonths" => func_months(args, plural::format_year_or_months),

        // Masking
        "formatCardNumber" => func_format_card_number(args),
        "formatAccountNumber" => func_format_account_number(args),
        "maskString" => func_mask_string(args),
        "maskClientDocIssuerCode" => func_mask_issuer_code(args),

        // Strings
        "defaultIfEmpty" => func_default_if_empty(args),
        "yesNo" => func_yes_no(args),
        "checkbox" => func_flag(args, strings::checkbox),
        "grayCheckbox" => func_flag(args, strings::gray_checkbox),
        "checkmark" => func_flag(args, strings::checkmark),
        "checkmarkOrEmpty" => func_flag(args, strings::checkmark_or_empty),
        "makeBold" => func_make_bold(args),
        "valuesFormatWithIndex" => func_values_format_with_index(args),
        "valuesArray" => func_values_array(args),
        "valuesArrayIfExists" => func_values_array_if_exists(args),
        "valuesList" => func_values_list(args),
        "getHeadOfString" => func_split(args, strings::get_head_of_string),
        "getTailOfString" => func_split(args, strings::get_tail_of_string),
        "upperFirst" => func_fold_first(args, strings::upper_first),
        "lowerFirst" => func_fold_first(args, strings::lower_first),
        "getRussianPhone" => func_russian_phone(args),
        "extractCity" => func_extract_city(args),
        "buildFio" => func_build_fio(args),
        "paste" => func_paste(args),
        "getCharAtPos" => func_char_at_pos(args),
        "addHtmlWhiteSpace" => func_html_white_space(args),

        // Counters
        "incCount" => func_inc_count(args, vars),
        "getCount" => func_get_count(args, vars),

        _ => return CallResult::NotFound,
    };

    match result {
        Ok(value) => CallResult::Ok(value),
        Err(error) => CallResult::Err(error.in_function(name)),
    }
}

fn no_match(expected: &str, args: &[Value]) -> RenderError {
    let got: Vec<&str> = args.iter().map(Value::type_name).collect();
    RenderError::argument(format!(
        "expected {}, got ({})",
        expected,
        got.join(", ")
    ))
}

/// Strings supplied by the engine may be absent; absence joins as "".
fn string_or_empty(value: &Value) -> RenderResult<String> {
    match value {
        Value::None => Ok(String::new()),
        Value::Str(s) => Ok(s.clone()),
        v => Err(RenderError::type_mismatch("str", v.type_name())),
    }
}

fn string_items(values: &[Value]) -> RenderResult<Vec<String>> {
    values.iter().map(string_or_empty).collect()
}

// ============================================================================
// Numeric adapters
// ============================================================================

fn decimal_scale(scale: i64) -> RenderResult<u32> {
    if !(0..=28).contains(&scale) {
        return Err(RenderError::argument(format!(
            "scale must be in 0..=28, got {}",
            scale
        )));
    }
    Ok(scale as u32)
}

fn func_amount_in_decimal_format(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Decimal(amount)] => Ok(numeric::amount_in_decimal_format(amount).into()),
        [Value::Str(amount)] => {
            Ok(numeric::amount_in_decimal_format(&numeric::parse_amount(amount)?).into())
        }
        [Value::Decimal(amount), Value::Int(scale)] => Ok(numeric::format_decimal(
            amount,
            decimal_scale(*scale)?,
            NumericSymbols::default(),
        )
        .into()),
        [Value::None, Value::Str(default)] => Ok(default.clone().into()),
        [Value::Decimal(amount), Value::Str(_)] => {
            Ok(numeric::amount_in_decimal_format(amount).into())
        }
        [Value::Str(amount), Value::Str(_)] => {
            Ok(numeric::amount_in_decimal_format(&numeric::parse_amount(amount)?).into())
        }
        [Value::None, Value::Str(default), Value::Str(_)] => Ok(default.clone().into()),
        [Value::Decimal(amount), Value::Str(_), Value::Str(group)] => {
            let separator = group.chars().next().unwrap_or(' ');
            Ok(numeric::format_decimal(
                amount,
                2,
                NumericSymbols::with_group_separator(separator),
            )
            .into())
        }
        other => Err(no_match(
            "(amount) | (amount, scale) | (amount, defaultValue[, groupSeparator])",
            other,
        )),
    }
}

fn func_amount_with_separator(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Decimal(amount), Value::Str(separator)] => {
            let separator = separator
                .chars()
                .next()
                .ok_or_else(|| RenderError::argument("separator must be a single character"))?;
            Ok(numeric::format_decimal(
                amount,
                2,
                NumericSymbols::with_decimal_separator(separator),
            )
            .into())
        }
        [Value::None, _, Value::Str(default)] => Ok(default.clone().into()),
        [Value::Decimal(amount), Value::Str(separator), Value::Str(_)] => {
            let separator = separator.chars().next().unwrap_or('.');
            Ok(numeric::format_decimal(
                amount,
                2,
                NumericSymbols::with_decimal_separator(separator),
            )
            .into())
        }
        other => Err(no_match("(amount, separator[, defaultValue])", other)),
    }
}

fn func_amount_fixed_scale(args: Vec<Value>, scale: u32) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Decimal(amount)] => {
            Ok(numeric::format_decimal(amount, scale, NumericSymbols::default()).into())
        }
        [Value::Str(amount)] => Ok(numeric::format_decimal(
            &numeric::parse_amount(amount)?,
            scale,
            NumericSymbols::default(),
        )
        .into()),
        [Value::None, Value::Str(default)] => Ok(default.clone().into()),
        [Value::Decimal(amount), Value::Str(_)] => {
            Ok(numeric::format_decimal(amount, scale, NumericSymbols::default()).into())
        }
        other => Err(no_match("(amount[, defaultValue])", other)),
    }
}

fn func_amount_in_rur_currency_str(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Decimal(amount)] => Ok(numeric::amount_in_rur_currency_str(amount).into()),
        other => Err(no_match("(amount)", other)),
    }
}

fn func_amount_in_string(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Decimal(amount)] => Ok(numeric::amount_in_string(amount).into()),
        other => Err(no_match("(amount)", other)),
    }
}

// ============================================================================
// Date adapters
// ============================================================================

fn func_date_custom_format(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None, Value::Str(_)] => Ok("".into()),
        [Value::Instant(date), Value::Str(pattern)] => {
            Ok(datetime::date_custom_format(date, pattern)?.into())
        }
        other => Err(no_match("(date, pattern)", other)),
    }
}

fn func_local_date_custom_format(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None, Value::Str(_)] => Ok("".into()),
        [Value::Str(date), Value::Str(pattern)] => {
            Ok(datetime::local_date_custom_format(date, pattern)?.into())
        }
        other => Err(no_match("(isoDate, pattern)", other)),
    }
}

fn func_local_date_time_custom_format(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None, Value::Str(_)] => Ok("".into()),
        [Value::DateTime(date), Value::Str(pattern)] => {
            Ok(datetime::local_date_time_custom_format(date, pattern)?.into())
        }
        other => Err(no_match("(dateTime, pattern)", other)),
    }
}

fn func_format_date_from_local_date_time(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(date), Value::Str(pattern)] => {
            Ok(datetime::format_date_from_local_date_time(date, pattern, BASE_LOCALE)?.into())
        }
        [Value::Str(date), Value::Str(pattern), Value::Str(locale)] => Ok(
            datetime::format_date_from_local_date_time(date, pattern, resolve_locale(locale)?)?
                .into(),
        ),
        // A missing date string is an explicit error here, not ""
        [Value::None, ..] => Err(RenderError::type_mismatch("str", "none")),
        other => Err(no_match("(isoDateTime, pattern[, locale])", other)),
    }
}

fn func_format_date(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(date)] => Ok(Value::Instant(datetime::format_date(date)?)),
        [Value::None] => Err(RenderError::type_mismatch("str", "none")),
        other => Err(no_match("(isoOffsetDateTime)", other)),
    }
}

fn func_date_full_format(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None] => Ok("".into()),
        [date] => Ok(datetime::date_full_format(&datetime::to_calendar_date(date)?).into()),
        other => Err(no_match("(date)", other)),
    }
}

fn func_equals_date(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [first, second] => Ok(Value::Bool(datetime::equals_date(first, second)?)),
        other => Err(no_match("(firstDate, secondDate)", other)),
    }
}

fn func_replace_default_date(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(input)] => Ok(datetime::replace_default_date_with_a_dash(input).into()),
        other => Err(no_match("(inputString)", other)),
    }
}

// ============================================================================
// Declension adapters
// ============================================================================

fn func_months(args: Vec<Value>, format: fn(u64) -> String) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Int(n)] if *n >= 0 => Ok(format(*n as u64).into()),
        [Value::Int(n)] => Err(RenderError::argument(format!(
            "count must be non-negative, got {}",
            n
        ))),
        other => Err(no_match("(months)", other)),
    }
}

// ============================================================================
// Masking adapters
// ============================================================================

fn func_format_card_number(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None] => Ok("".into()),
        [Value::Str(number)] => Ok(mask::format_card_number(number).into()),
        other => Err(no_match("(cardNumber)", other)),
    }
}

fn func_format_account_number(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None] => Ok("".into()),
        [Value::Str(number)] => Ok(mask::format_account_number(number).into()),
        other => Err(no_match("(accountNumber)", other)),
    }
}

fn func_mask_string(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None, Value::Str(_)] => Ok("".into()),
        [Value::Str(value), Value::Str(template)] => {
            Ok(mask::mask_string(value, template).into())
        }
        other => Err(no_match("(value, mask)", other)),
    }
}

fn func_mask_issuer_code(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None] => Ok(Value::None),
        [Value::Str(input)] => Ok(mask::mask_client_doc_issuer_code(input).into()),
        other => Err(no_match("(inputString)", other)),
    }
}

// ============================================================================
// String adapters
// ============================================================================

fn func_default_if_empty(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [value] => Ok(strings::default_if_empty(value, "-").into()),
        [value, Value::Str(default)] => Ok(strings::default_if_empty(value, default).into()),
        other => Err(no_match("(value[, defaultValue])", other)),
    }
}

fn func_yes_no(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None] => Ok(strings::yes_no(None).into()),
        [Value::Bool(value)] => Ok(strings::yes_no(Some(*value)).into()),
        other => Err(no_match("(value)", other)),
    }
}

fn func_flag(args: Vec<Value>, render: fn(bool) -> String) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Bool(checked)] => Ok(render(*checked).into()),
        other => Err(no_match("(checked)", other)),
    }
}

fn func_make_bold(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [content] => Ok(strings::make_bold(content).into()),
        other => Err(no_match("(content)", other)),
    }
}

fn func_values_format_with_index(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(format), Value::Str(separator), Value::Array(values)] => Ok(
            strings::values_format_with_index(format, separator, &string_items(values)?).into(),
        ),
        [Value::Str(format), Value::Str(separator), Value::Str(values)] => {
            let split: Vec<String> = values.split(", ").map(str::to_string).collect();
            Ok(strings::values_format_with_index(format, separator, &split).into())
        }
        other => Err(no_match("(format, separator, values)", other)),
    }
}

fn func_values_array(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(separator), rest @ ..] => {
            Ok(strings::values_array(separator, &string_items(rest)?).into())
        }
        other => Err(no_match("(separator, value...)", other)),
    }
}

fn func_values_array_if_exists(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(separator), rest @ ..] => {
            Ok(
                match strings::values_array_if_exists(separator, &string_items(rest)?) {
                    Some(joined) => joined.into(),
                    None => Value::None,
                },
            )
        }
        other => Err(no_match("(separator, value...)", other)),
    }
}

fn func_values_list(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(separator), Value::Array(values)] => {
            Ok(strings::values_list(separator, "", "", &string_items(values)?).into())
        }
        [Value::Str(separator), Value::Str(prefix), Value::Str(suffix), Value::Array(values)] => {
            Ok(strings::values_list(separator, prefix, suffix, &string_items(values)?).into())
        }
        other => Err(no_match("(separator[, prefix, suffix], values)", other)),
    }
}

fn func_split(args: Vec<Value>, split: fn(&str, i64) -> String) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(original), Value::Int(length)] => Ok(split(original, *length).into()),
        other => Err(no_match("(original, length)", other)),
    }
}

fn func_fold_first(args: Vec<Value>, fold: fn(&str) -> String) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None] => Ok(Value::None),
        [Value::Str(value)] => Ok(fold(value).into()),
        other => Err(no_match("(value)", other)),
    }
}

fn func_russian_phone(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::None] => Ok(Value::None),
        [Value::Str(phone)] => Ok(strings::get_russian_phone(phone).into()),
        other => Err(no_match("(phoneNumber)", other)),
    }
}

fn func_extract_city(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(address)] => Ok(strings::extract_city(address).into()),
        other => Err(no_match("(address)", other)),
    }
}

fn func_build_fio(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(last), Value::Str(first)] => {
            Ok(strings::build_fio(last, first, None)?.into())
        }
        [Value::Str(last), Value::Str(first), Value::None] => {
            Ok(strings::build_fio(last, first, None)?.into())
        }
        [Value::Str(last), Value::Str(first), Value::Str(middle)] => {
            Ok(strings::build_fio(last, first, Some(middle))?.into())
        }
        other => Err(no_match("(lastName, firstName[, middleName])", other)),
    }
}

fn func_paste(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(destination), Value::Str(value), Value::Int(position), Value::Bool(skip)] => {
            if *position < 0 {
                return Err(RenderError::argument(format!(
                    "position must be non-negative, got {}",
                    position
                )));
            }
            Ok(strings::paste(destination, value, *position as usize, *skip).into())
        }
        other => Err(no_match("(destination, value, position, skipIfExist)", other)),
    }
}

fn func_char_at_pos(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(string), Value::Int(index)] => {
            Ok(strings::get_char_at_pos(string, *index).to_string().into())
        }
        other => Err(no_match("(string, index)", other)),
    }
}

fn func_html_white_space(args: Vec<Value>) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Int(count)] => Ok(strings::add_html_white_space(*count).into()),
        other => Err(no_match("(count)", other)),
    }
}

// ============================================================================
// Counter adapters
// ============================================================================

fn func_inc_count(args: Vec<Value>, vars: &mut Variables) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(key)] => Ok(counter::inc_count(vars, key)?.into()),
        other => Err(no_match("(key)", other)),
    }
}

fn func_get_count(args: Vec<Value>, vars: &mut Variables) -> RenderResult<Value> {
    match args.as_slice() {
        [Value::Str(key)] => Ok(match counter::get_count(vars, key)? {
            Some(count) => count.into(),
            None => Value::None,
        }),
        other => Err(no_match("(key)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: Vec<Value>) -> CallResult {
        let mut vars = Variables::new();
        call_function(name, args, &mut vars)
    }

    fn call_ok(name: &str, args: Vec<Value>) -> Value {
        match call(name, args) {
            CallResult::Ok(value) => value,
            CallResult::Err(e) => panic!("{} failed: {}", name, e),
            CallResult::NotFound => panic!("{} not found", name),
        }
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        assert!(matches!(call("noSuchFunction", vec![]), CallResult::NotFound));
    }

    #[test]
    fn test_every_catalog_name_dispatches() {
        // Every signature must reach a dispatch arm; with no arguments
        // that is an argument error, never NotFound.
        for entry in signatures() {
            let result = call(entry.name, vec![]);
            assert!(
                !matches!(result, CallResult::NotFound),
                "{} is in the catalog but does not dispatch",
                entry.name
            );
        }
    }

    #[test]
    fn test_errors_carry_function_name() {
        match call("amountInRurCurrencyStr", vec![Value::Str("x".into())]) {
            CallResult::Err(e) => {
                assert_eq!(e.function.as_deref(), Some("amountInRurCurrencyStr"))
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_overload_dispatch_by_type() {
        let amount = Value::Decimal("1234.5".parse().unwrap());
        assert_eq!(
            call_ok("amountInDecimalFormat", vec![amount.clone()]),
            Value::Str("1 234.50".into())
        );
        // Same arity, int second argument selects the scale overload
        assert_eq!(
            call_ok("amountInDecimalFormat", vec![amount.clone(), Value::Int(3)]),
            Value::Str("1 234.500".into())
        );
        // String second argument is a default and leaves formatting alone
        assert_eq!(
            call_ok(
                "amountInDecimalFormat",
                vec![amount, Value::Str("-".into())]
            ),
            Value::Str("1 234.50".into())
        );
        assert_eq!(
            call_ok(
                "amountInDecimalFormat",
                vec![Value::None, Value::Str("-".into())]
            ),
            Value::Str("-".into())
        );
    }

    #[test]
    fn test_string_amount_parse_failure_is_hard_error() {
        assert!(matches!(
            call("amountInDecimalFormat", vec![Value::Str("12x".into())]),
            CallResult::Err(_)
        ));
    }

    #[test]
    fn test_missing_native_date_renders_empty() {
        assert_eq!(
            call_ok(
                "dateCustomFormat",
                vec![Value::None, Value::Str("%d.%m.%Y".into())]
            ),
            Value::Str("".into())
        );
    }

    #[test]
    fn test_missing_parse_date_is_error() {
        assert!(matches!(
            call(
                "formatDateFromLocalDateTime",
                vec![Value::None, Value::Str("%d.%m.%Y".into())]
            ),
            CallResult::Err(_)
        ));
    }

    #[test]
    fn test_counters_through_the_registry() {
        let mut vars = Variables::new();
        let first = call_function("incCount", vec![Value::Str("k".into())], &mut vars);
        assert!(matches!(first, CallResult::Ok(Value::Str(ref s)) if s == "1"));
        let second = call_function("getCount", vec![Value::Str("k".into())], &mut vars);
        assert!(matches!(second, CallResult::Ok(Value::Str(ref s)) if s == "2"));
        let missing = call_function("getCount", vec![Value::Str("other".into())], &mut vars);
        assert!(matches!(missing, CallResult::Ok(Value::None)));
    }

    #[test]
    fn test_values_array_variadic() {
        assert_eq!(
            call_ok(
                "valuesArray",
                vec![
                    Value::Str("; ".into()),
                    Value::Str("a".into()),
                    Value::None,
                    Value::Str("b".into()),
                ]
            ),
            Value::Str("a; b".into())
        );
        assert_eq!(
            call_ok(
                "valuesArrayIfExists",
                vec![Value::Str("; ".into()), Value::Str("a".into()), Value::None]
            ),
            Value::None
        );
    }

    #[test]
    fn test_values_format_with_index_string_overload() {
        assert_eq!(
            call_ok(
                "valuesFormatWithIndex",
                vec![
                    Value::Str("%d) %s".into()),
                    Value::Str("; ".into()),
                    Value::Str("a, b".into()),
                ]
            ),
            Value::Str("1) a; 2) b".into())
        );
    }
}
