//! End-to-end tests driving the catalog the way the rendering engine
//! does: by stable function name with engine-shaped argument lists.

use pretty_assertions::assert_eq;

use reportfn::functions::plural::{decl_of_num, TITLES_MONTHS};
use reportfn::{call_function, signatures, CallResult, Value, Variables};
use rust_decimal::Decimal;
use std::str::FromStr;

fn call(name: &str, args: Vec<Value>) -> CallResult {
    let mut vars = Variables::new();
    call_function(name, args, &mut vars)
}

fn call_str(name: &str, args: Vec<Value>) -> String {
    match call(name, args) {
        CallResult::Ok(value) => value.display(),
        CallResult::Err(e) => panic!("{} failed: {}", name, e),
        CallResult::NotFound => panic!("{} not found", name),
    }
}

fn dec(text: &str) -> Value {
    Value::Decimal(Decimal::from_str(text).unwrap())
}

fn s(text: &str) -> Value {
    Value::Str(text.to_string())
}

#[test]
fn declension_always_selects_from_the_title_set() {
    for n in 0..=220 {
        let title = decl_of_num(n, &TITLES_MONTHS);
        assert!(TITLES_MONTHS.contains(&title), "n = {}", n);
    }
}

#[test]
fn amount_format_round_trips_at_target_scale() {
    for (input, scale) in [("23323.016", 2i64), ("1999.9995", 3), ("0.00005", 4)] {
        let formatted = call_str(
            "amountInDecimalFormat",
            vec![dec(input), Value::Int(scale)],
        );
        let reparsed = Decimal::from_str(&formatted.replace(' ', "")).unwrap();
        let expected = Decimal::from_str(input)
            .unwrap()
            .round_dp_with_strategy(
                scale as u32,
                rust_decimal::RoundingStrategy::MidpointAwayFromZero,
            );
        assert_eq!(reparsed, expected, "input {}", input);
    }
}

#[test]
fn card_number_masks_fixed_window_and_preserves_digits() {
    let formatted = call_str("formatCardNumber", vec![s("1234567890123456")]);
    assert_eq!(formatted, "1234 56** **** 3456");

    let digits: String = formatted.chars().filter(|c| *c != ' ').collect();
    assert_eq!(digits.chars().count(), 16);
    assert!(digits[6..12].chars().all(|c| c == '*'));
}

#[test]
fn issuer_code_masking() {
    assert_eq!(call_str("maskClientDocIssuerCode", vec![s("123456")]), "123-456");
    assert_eq!(call_str("maskClientDocIssuerCode", vec![s("123-456")]), "123-456");
    assert_eq!(call_str("maskClientDocIssuerCode", vec![s("12x456")]), "12x456");
}

#[test]
fn russian_phone_formatting() {
    assert_eq!(
        call_str("getRussianPhone", vec![s("89161234567")]),
        "+7 916 123-45-67"
    );
    assert_eq!(
        call_str("getRussianPhone", vec![s("not-a-phone")]),
        "not-a-phone"
    );
}

#[test]
fn head_and_tail_of_string() {
    assert_eq!(
        call_str("getHeadOfString", vec![s("the quick brown fox"), Value::Int(9)]),
        "the quick"
    );
    assert_eq!(
        call_str("getTailOfString", vec![s("the quick brown fox"), Value::Int(9)]),
        "brown fox"
    );
}

#[test]
fn rur_currency_phrases() {
    assert_eq!(
        call_str("amountInRurCurrencyStr", vec![dec("19.99")]),
        "19 руб. 99 коп."
    );
    assert_eq!(
        call_str("amountInRurCurrencyStr", vec![dec("19.00")]),
        "19 руб. 00 коп."
    );
    // Boundary input rounds before the split: never 100 kopecks.
    assert_eq!(
        call_str("amountInRurCurrencyStr", vec![dec("19.995")]),
        "20 руб. 00 коп."
    );
}

#[test]
fn fio_abbreviation() {
    assert_eq!(
        call_str("buildFio", vec![s("Иванов"), s("Иван"), s("Иванович")]),
        "Иванов И.И."
    );
    assert_eq!(
        call_str("buildFio", vec![s("Иванов"), s("Иван"), s("")]),
        "Иванов И."
    );
}

#[test]
fn counters_on_a_fresh_scope() {
    let mut vars = Variables::new();

    match call_function("incCount", vec![s("k")], &mut vars) {
        CallResult::Ok(value) => assert_eq!(value.display(), "1"),
        other => panic!("unexpected: {:?}", other),
    }
    assert_eq!(vars.get("k"), Some(&Value::Int(2)));

    match call_function("getCount", vec![s("k")], &mut vars) {
        CallResult::Ok(value) => assert_eq!(value.display(), "2"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn dated_phrase_and_date_equality() {
    assert_eq!(
        call_str("localDateCustomFormat", vec![s("2024-03-05"), s("%d.%m.%Y")]),
        "05.03.2024"
    );
    assert_eq!(
        call_str("dateFullFormat", vec![s("2024-01-05")]),
        "«5» января 2024г."
    );

    match call("equalsDate", vec![s("2024-03-05"), s("2024-03-05T10:00:00+03:00")]) {
        CallResult::Ok(value) => assert_eq!(value, Value::Bool(true)),
        other => panic!("unexpected: {:?}", other),
    }
    assert!(matches!(
        call("equalsDate", vec![Value::Int(1), s("2024-03-05")]),
        CallResult::Err(_)
    ));
}

#[test]
fn mask_template_fails_open() {
    assert_eq!(
        call_str("maskString", vec![s("1234567890"), s("(###) ###-##-##")]),
        "(123) 456-78-90"
    );
    assert_eq!(call_str("maskString", vec![s("12ab"), s("####")]), "12ab");
}

#[test]
fn default_if_empty_substitutes_dash() {
    assert_eq!(call_str("defaultIfEmpty", vec![Value::None]), "-");
    assert_eq!(call_str("defaultIfEmpty", vec![s("")]), "-");
    assert_eq!(call_str("defaultIfEmpty", vec![s("x"), s("?")]), "x");
}

#[test]
fn catalog_lists_every_family() {
    let names: Vec<&str> = signatures().iter().map(|s| s.name).collect();
    for expected in [
        "amountInDecimalFormat",
        "dateCustomFormat",
        "formatMonths",
        "formatCardNumber",
        "defaultIfEmpty",
        "incCount",
    ] {
        assert!(names.contains(&expected), "{} missing from catalog", expected);
    }
}
